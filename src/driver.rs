//! Frame-driven game loop around the simulation
//!
//! The driver owns the match state between frames. Each frame it banks the
//! elapsed wall time, runs as many fixed ticks as fit (bounded), hands every
//! event to the presenter and finally shows it the settled snapshot.

use std::collections::BTreeSet;

use crate::consts::*;
use crate::sim::{Event, State, advance};

/// Sound effect a presenter should play for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Ball hits paddle
    PaddleHit,
    /// Ball passed a goal line
    Score,
}

impl Sound {
    pub fn for_event(event: Event) -> Self {
        match event {
            Event::Hit => Sound::PaddleHit,
            Event::Score => Sound::Score,
        }
    }
}

/// Receives simulation output; implemented by audio/score/render layers
pub trait Presenter {
    fn on_event(&mut self, event: Event);

    /// Called once per frame with the latest snapshot
    fn on_frame(&mut self, _state: &State) {}
}

/// Required assets that must all be present before play starts
#[derive(Debug, Clone, Default)]
pub struct AssetGate {
    required: BTreeSet<String>,
    loaded: BTreeSet<String>,
}

impl AssetGate {
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
            loaded: BTreeSet::new(),
        }
    }

    /// Record an asset as loaded. Returns false for names nobody asked for.
    pub fn mark_ready(&mut self, name: &str) -> bool {
        if !self.required.contains(name) {
            log::warn!("Ignoring unrequested asset '{}'", name);
            return false;
        }
        self.loaded.insert(name.to_string());
        true
    }

    pub fn is_ready(&self) -> bool {
        self.required.is_subset(&self.loaded)
    }

    /// Assets still outstanding, in name order
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.required.difference(&self.loaded).map(String::as_str)
    }
}

/// Input sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Desired player paddle center; `None` holds the paddle still
    pub player_target_y: Option<f32>,
}

/// Running totals, for logging/HUD
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverStats {
    pub ticks: u64,
    pub hits: u64,
    pub scores: u64,
}

/// Fixed-timestep driver
pub struct Driver {
    state: State,
    gate: AssetGate,
    accumulator: f32,
    started: bool,
    stats: DriverStats,
}

impl Driver {
    pub fn new(state: State, gate: AssetGate) -> Self {
        Self {
            state,
            gate,
            accumulator: 0.0,
            started: false,
            stats: DriverStats::default(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn stats(&self) -> DriverStats {
        self.stats
    }

    pub fn gate_mut(&mut self) -> &mut AssetGate {
        &mut self.gate
    }

    /// Run simulation ticks for a frame of `frame_dt` seconds
    ///
    /// Returns how many ticks ran. Nothing runs until every required asset
    /// is loaded.
    pub fn update<P: Presenter + ?Sized>(
        &mut self,
        frame_dt: f32,
        input: &TickInput,
        presenter: &mut P,
    ) -> u32 {
        if !self.gate.is_ready() {
            return 0;
        }
        if !self.started {
            log::info!("All assets ready, starting match (seed {})", self.state.seed);
            self.started = true;
        }

        let frame_dt = if frame_dt.is_finite() { frame_dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        self.accumulator += frame_dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let target = input
                .player_target_y
                .unwrap_or_else(|| self.state.player.center_y());

            for event in advance(&mut self.state, target, TICK_SCALE) {
                match event {
                    Event::Hit => self.stats.hits += 1,
                    Event::Score => self.stats.scores += 1,
                }
                presenter.on_event(event);
            }

            self.accumulator -= SIM_DT;
            self.stats.ticks += 1;
            substeps += 1;
        }

        // Don't carry more than one frame's worth of backlog
        let max_backlog = SIM_DT * MAX_SUBSTEPS as f32;
        if self.accumulator > max_backlog {
            log::warn!(
                "Simulation behind by {:.3}s, dropping backlog",
                self.accumulator
            );
            self.accumulator = max_backlog;
        }

        presenter.on_frame(&self.state);
        substeps
    }
}
