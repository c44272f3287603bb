//! Beam overheat state machine.
//!
//! ```text
//!  Cooling ──shot──▶ Firing ──heat ≥ max──▶ Overheated
//!     ▲                 │                       │
//!     └──idle, decays───┘                       │
//!     └────────── cooldown elapsed, heat = 0 ───┘
//! ```
//! The cooldown is measured from the shot that crossed the threshold.

use bevy::prelude::*;

use crate::common::clock::Millis;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeatState {
    #[default]
    Cooling,
    Firing,
    Overheated,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Overheat {
    heat: f32,
    state: HeatState,
    overheated_at: Millis,
    last_shot: Millis,
    last_decay: Millis,
}

impl Overheat {
    pub const HEAT_PER_SHOT: f32 = 12.5;
    pub const MAX_HEAT: f32 = 100.0;
    pub const COOLDOWN_MS: Millis = 2_500;
    /// Time without a shot before the beam counts as idle and starts shedding heat.
    pub const IDLE_AFTER_MS: Millis = 300;
    pub const DECAY_INTERVAL_MS: Millis = 200;
    pub const DECAY_PER_STEP: f32 = 5.0;

    #[inline]
    pub fn heat(&self) -> f32 {
        self.heat
    }

    #[inline]
    pub fn state(&self) -> HeatState {
        self.state
    }

    /// Heat as 0..=1, for a gauge.
    #[inline]
    pub fn ratio(&self) -> f32 {
        self.heat / Self::MAX_HEAT
    }

    /// Overheated and still inside the cooldown window.
    pub fn is_locked(&self, now: Millis) -> bool {
        self.state == HeatState::Overheated && now < self.overheated_at + Self::COOLDOWN_MS
    }

    pub fn on_shot(&mut self, now: Millis) {
        self.tick(now);

        self.heat += Self::HEAT_PER_SHOT;
        self.last_shot = now;
        self.last_decay = now;

        if self.heat >= Self::MAX_HEAT {
            self.heat = Self::MAX_HEAT;
            self.state = HeatState::Overheated;
            self.overheated_at = now;
            debug!("beam overheated at {now} ms");
        } else {
            self.state = HeatState::Firing;
        }
    }

    /// Advance recovery and idle decay to `now`.
    pub fn tick(&mut self, now: Millis) {
        match self.state {
            HeatState::Overheated => {
                if now >= self.overheated_at + Self::COOLDOWN_MS {
                    self.heat = 0.0;
                    self.state = HeatState::Cooling;
                    self.last_decay = now;
                }
            }
            HeatState::Firing | HeatState::Cooling => {
                if now < self.last_shot + Self::IDLE_AFTER_MS {
                    return;
                }
                self.state = HeatState::Cooling;

                let steps = now.saturating_sub(self.last_decay) / Self::DECAY_INTERVAL_MS;
                if steps == 0 {
                    return;
                }
                self.heat = (self.heat - steps as f32 * Self::DECAY_PER_STEP).max(0.0);
                self.last_decay += steps * Self::DECAY_INTERVAL_MS;
            }
        }
    }
}
