//! Stabilization detection and linear extrapolation.

use crate::world::World;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Extrapolation status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// Still simulating generation by generation.
    Running,
    /// The metric delta has repeated enough times in a row; the remaining
    /// generations can be projected analytically.
    Stabilized,
    /// The target generation has been reached.
    Done,
}

/// Drives a [`World`] towards a target generation, simulating only until
/// the summary metric settles into a steady linear regime.
///
/// After every step the extrapolator records the delta of the metric
/// against the previous generation. Once the delta has repeated
/// `confidence` times in a row, the metric is assumed to keep growing by
/// that delta forever, and the value at any later generation is projected
/// without further simulation.
///
/// A single repeated delta (`confidence = 1`) is an aggressive heuristic:
/// it holds for the rule sets this crate was built against, but is not
/// sound for arbitrary automata. Raise the confidence to demand a longer
/// streak before trusting linearity.
pub struct Extrapolator {
    /// The world being simulated.
    world: World,

    /// Number of consecutive equal deltas required before extrapolating.
    confidence: usize,

    /// The current status.
    status: Status,

    /// The summary metric of the current generation.
    metric: i64,

    /// The delta between the last two generations' metrics.
    ///
    /// `None` before the first step.
    last_delta: Option<i64>,

    /// How many times in a row the delta has repeated.
    repeats: usize,
}

impl Extrapolator {
    /// Creates an extrapolator at generation `0`.
    ///
    /// A `confidence` of `0` is treated as `1`.
    pub(crate) fn new(world: World, confidence: usize) -> Self {
        let metric = world.metric();
        Self {
            world,
            confidence: confidence.max(1),
            status: Status::Running,
            metric,
            last_delta: None,
            repeats: 0,
        }
    }

    /// The current status.
    pub const fn status(&self) -> Status {
        self.status
    }

    /// The world, at whatever generation simulation has reached.
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Advances one generation and updates the stabilization tracker.
    fn advance(&mut self) {
        self.world.step();
        let metric = self.world.metric();
        let delta = metric - self.metric;
        self.metric = metric;
        if self.last_delta == Some(delta) {
            self.repeats += 1;
            if self.repeats >= self.confidence {
                self.status = Status::Stabilized;
            }
        } else {
            self.last_delta = Some(delta);
            self.repeats = 0;
        }
    }

    /// Computes the summary metric at generation `n`.
    ///
    /// Simulates generation by generation until either generation `n` is
    /// reached directly, or the delta stabilizes at some generation
    /// `s < n`; in the latter case the result is
    /// `metric[s] + (n - s) * delta` and no further generations are
    /// simulated. `n = 0` returns the metric of the padded initial tape.
    ///
    /// This is a one-shot operation: afterwards the status is
    /// [`Status::Done`] and further calls return the same generation's
    /// metric without simulating.
    pub fn project(&mut self, n: u64) -> i64 {
        while self.status == Status::Running && self.world.generation() < n {
            self.advance();
        }
        let metric = match (self.status, self.last_delta) {
            (Status::Stabilized, Some(delta)) if self.world.generation() < n => {
                self.metric + (n - self.world.generation()) as i64 * delta
            }
            _ => self.metric,
        };
        self.status = Status::Done;
        metric
    }
}
