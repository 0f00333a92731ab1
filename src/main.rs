//! Pixel Pong headless runner
//!
//! Plays a scripted match through the fixed-timestep driver and logs what a
//! real frontend would play or draw.
//!
//! ```bash
//! pixel-pong --settings court.json --seed 42 --seconds 30
//! ```

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();
    log::info!("Pixel Pong (headless) starting...");

    native::run(&native::Args::parse())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser frontends link the library directly
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use pixel_pong::consts::SIM_DT;
    use pixel_pong::sim::{Event, State, initial_state};
    use pixel_pong::{AssetGate, Driver, Presenter, Settings, Sound, TickInput};

    const REQUIRED_ASSETS: [&str; 3] = ["background", "hit", "score"];

    /// Run a scripted Pixel Pong match without a window
    #[derive(Debug, Parser)]
    #[command(name = "pixel-pong", version)]
    pub struct Args {
        /// JSON settings file; omitted fields keep their defaults
        #[arg(long, value_name = "PATH")]
        pub settings: Option<PathBuf>,

        /// Seed for serve directions
        #[arg(long, default_value_t = 0x5EED)]
        pub seed: u64,

        /// Seconds of play to simulate
        #[arg(long, default_value_t = 60)]
        pub seconds: u32,
    }

    /// Stands in for the audio and render layers
    struct LogPresenter {
        frames: u64,
    }

    impl Presenter for LogPresenter {
        fn on_event(&mut self, event: Event) {
            log::info!("Play {:?}", Sound::for_event(event));
        }

        fn on_frame(&mut self, state: &State) {
            self.frames += 1;
            if self.frames.is_multiple_of(60) {
                let ball = state.ball;
                log::debug!(
                    "Frame {}: ball ({:.0}, {:.0}) player {:?} bot {:?}",
                    self.frames,
                    ball.pos.x,
                    ball.pos.y,
                    state.left_rect(),
                    state.right_rect()
                );
            }
        }
    }

    fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };
        log::info!("Loading settings from {}", path.display());
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Settings::from_json(&json).with_context(|| format!("bad settings in {}", path.display()))
    }

    pub fn run(args: &Args) -> Result<()> {
        let settings = load_settings(args.settings.as_ref())?;
        let state = initial_state(settings, args.seed)?;
        let mut driver = Driver::new(state, AssetGate::new(REQUIRED_ASSETS));

        // Headless: nothing to fetch
        for asset in REQUIRED_ASSETS {
            driver.gate_mut().mark_ready(asset);
        }

        let mut presenter = LogPresenter { frames: 0 };
        let frames = args.seconds * 60;
        for frame in 0..frames {
            // Sweep the player paddle up and down, a little slower than the ball
            let phase = frame as f32 * 0.02;
            let target = settings.court_height / 2.0 + phase.sin() * settings.court_height * 0.45;
            let input = TickInput {
                player_target_y: Some(target),
            };
            driver.update(SIM_DT, &input, &mut presenter);
        }

        let stats = driver.stats();
        log::info!(
            "Finished after {} ticks: {} hits, {} scores",
            stats.ticks,
            stats.hits,
            stats.scores
        );
        println!(
            "ticks={} hits={} scores={}",
            stats.ticks, stats.hits, stats.scores
        );
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_args_defaults() {
            let args = Args::try_parse_from(["pixel-pong"]).unwrap();
            assert!(args.settings.is_none());
            assert_eq!(args.seed, 0x5EED);
            assert_eq!(args.seconds, 60);
        }

        #[test]
        fn test_args_flags() {
            let args = Args::try_parse_from([
                "pixel-pong",
                "--settings",
                "court.json",
                "--seed",
                "42",
                "--seconds",
                "5",
            ])
            .unwrap();
            assert_eq!(args.settings, Some(PathBuf::from("court.json")));
            assert_eq!(args.seed, 42);
            assert_eq!(args.seconds, 5);
        }

        #[test]
        fn test_args_reject_bad_seed() {
            assert!(Args::try_parse_from(["pixel-pong", "--seed", "abc"]).is_err());
        }

        #[test]
        fn test_missing_settings_file_is_an_error() {
            let args = Args {
                settings: Some(PathBuf::from("/nonexistent/pixel-pong.json")),
                seed: 1,
                seconds: 1,
            };
            assert!(run(&args).is_err());
        }

        #[test]
        fn test_short_match_runs() {
            let args = Args {
                settings: None,
                seed: 3,
                seconds: 1,
            };
            assert!(run(&args).is_ok());
        }
    }
}
