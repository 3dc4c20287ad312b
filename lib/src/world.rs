//! The world.

use crate::{
    cells::DEAD,
    rules::RuleTable,
    tape::Tape,
};

/// The world: a rule table and the current generation of the tape.
///
/// Each step reads only from the previous generation's tape and writes a
/// freshly allocated one, so there is no aliasing between the read and
/// write sides of a step.
#[derive(Clone, Debug)]
pub struct World {
    /// The rule of the cellular automaton.
    rule: RuleTable,

    /// The tape of the current generation.
    tape: Tape,

    /// The index of the current generation, `0` being the input.
    generation: u64,
}

impl World {
    /// Creates a world at generation `0`, padding the initial tape so the
    /// first step has every window it needs.
    pub(crate) fn new(rule: RuleTable, mut tape: Tape) -> Self {
        tape.pad(rule.width());
        Self {
            rule,
            tape,
            generation: 0,
        }
    }

    /// The tape of the current generation.
    pub const fn tape(&self) -> &Tape {
        &self.tape
    }

    /// The index of the current generation.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The rule of the cellular automaton.
    pub const fn rule(&self) -> &RuleTable {
        &self.rule
    }

    /// Advances the world by one generation.
    ///
    /// Allocates a new tape of the same length and `zero_offset`, writes
    /// the rule output for every addressable window, and re-pads the
    /// result. Indices without an addressable window stay inactive.
    pub fn step(&mut self) {
        let width = self.rule.width();
        let mut cells = vec![DEAD; self.tape.len()];
        for i in self.tape.window_range(width) {
            cells[i] = self.rule.lookup(self.tape.window(i, width));
        }
        let mut tape = Tape::with_offset(cells, self.tape.zero_offset());
        tape.pad(width);
        self.tape = tape;
        self.generation += 1;
    }

    /// The summary metric of the current generation:
    /// the sum of the logical coordinates of all active cells.
    pub fn metric(&self) -> i64 {
        self.tape.coordinate_sum()
    }

    /// Displays the tape of the current generation, padding included.
    pub fn display(&self) -> String {
        self.tape.to_string()
    }
}
