//! World configuration.

use crate::{
    error::Error,
    extrapolate::Extrapolator,
    rules::{Rule, RuleTable},
    tape::Tape,
    world::World,
};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World configuration.
///
/// The world will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// The initial pattern, as a string of `#` (active) and `.` (inactive)
    /// cells. The leftmost cell is at coordinate `0`.
    pub pattern: String,

    /// The rules of the automaton.
    ///
    /// Windows matched by no rule default to inactive.
    pub rules: Vec<Rule>,

    /// The rule window width used when [`rules`](#structfield.rules) is
    /// empty. When rules are given, their common width is used instead.
    #[educe(Default = 5)]
    pub width: usize,

    /// Number of consecutive equal metric deltas required before the
    /// extrapolator trusts linearity. See [`Extrapolator`].
    #[educe(Default = 1)]
    pub confidence: usize,
}

impl Config {
    /// Creates a new configuration from an initial pattern and a rule list.
    pub fn new(pattern: &str, rules: Vec<Rule>) -> Self {
        Self {
            pattern: pattern.to_string(),
            rules,
            ..Self::default()
        }
    }

    /// Parses a whole puzzle-style input:
    /// an `initial state:` line, then one rule per line.
    /// Blank lines are skipped.
    ///
    /// ```text
    /// initial state: #..#.#..##......###...###
    ///
    /// ...## => #
    /// ..#.. => #
    /// ```
    pub fn from_input(input: &str) -> Result<Self, Error> {
        let mut pattern = None;
        let mut rules = Vec::new();
        for line in input.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(rest) = line.strip_prefix("initial state:") {
                pattern = Some(rest.trim().to_string());
            } else {
                rules.push(line.parse()?);
            }
        }
        let pattern = pattern.ok_or(Error::MissingInitialState)?;
        Ok(Self::new(&pattern, rules))
    }

    /// Sets the rule window width used when the rule list is empty.
    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the number of consecutive equal deltas required before
    /// extrapolating.
    pub fn set_confidence(mut self, confidence: usize) -> Self {
        self.confidence = confidence;
        self
    }

    /// Creates a world at generation `0` from the configuration.
    pub fn world(&self) -> Result<World, Error> {
        let tape: Tape = self.pattern.parse()?;
        let rule = RuleTable::new(&self.rules, self.width)?;
        Ok(World::new(rule, tape))
    }

    /// Creates an extrapolator at generation `0` from the configuration.
    pub fn extrapolator(&self) -> Result<Extrapolator, Error> {
        Ok(Extrapolator::new(self.world()?, self.confidence))
    }
}
