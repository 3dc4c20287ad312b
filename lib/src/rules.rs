//! Neighborhood rules.
//!
//! A rule maps a fixed-width window of cells to the next state of the
//! window's center cell. Windows with no matching rule default to inactive.

use crate::{
    cells::{State, ALIVE, DEAD},
    error::Error,
};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The largest supported rule window width.
///
/// The lookup table is dense in the packed window bits,
/// so its size is `2 ^ width`.
pub const MAX_RULE_WIDTH: usize = 25;

/// A single rule: a window pattern and the resulting center-cell state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule {
    /// The window pattern to match, in left-to-right order.
    pub pattern: Vec<State>,
    /// The state of the center cell in the next generation.
    pub output: State,
}

impl Rule {
    /// Creates a rule from a window pattern and an output state.
    pub fn new(pattern: Vec<State>, output: State) -> Self {
        Self { pattern, output }
    }
}

/// Parses a rule line of the form `..#.# => #`.
impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad_line = || Error::BadRuleLine(s.to_string());
        let (pattern, output) = s.split_once("=>").ok_or_else(bad_line)?;
        let pattern = pattern
            .trim()
            .chars()
            .map(|c| match c {
                '#' => Ok(ALIVE),
                '.' => Ok(DEAD),
                _ => Err(Error::UnknownCellChar(c)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let output = match output.trim() {
            "#" => ALIVE,
            "." => DEAD,
            _ => return Err(bad_line()),
        };
        if pattern.is_empty() {
            return Err(bad_line());
        }
        Ok(Self::new(pattern, output))
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let output = if self.output == ALIVE { '#' } else { '.' };
        write!(f, "{} => {}", pattern_string(&self.pattern), output)
    }
}

fn pattern_string(pattern: &[State]) -> String {
    pattern
        .iter()
        .map(|&s| if s == ALIVE { '#' } else { '.' })
        .collect()
}

/// An exact-match lookup table from window patterns to output states.
///
/// The table is dense in the packed window bits, so a lookup is a single
/// indexing operation regardless of how many rules were given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    width: usize,
    table: Vec<State>,
}

impl RuleTable {
    /// Builds a table from a list of rules.
    ///
    /// When the list is empty, `default_width` is used as the window width;
    /// otherwise the width of the first rule is, and every other rule must
    /// agree with it. The width must be odd, so that the window has a
    /// unique center cell.
    ///
    /// # Errors
    ///
    /// - [`Error::EvenRuleWidth`] if the width is even.
    /// - [`Error::RuleWidthTooLarge`] if the width exceeds [`MAX_RULE_WIDTH`].
    /// - [`Error::RuleWidthMismatch`] if the rules disagree on the width.
    /// - [`Error::AmbiguousRule`] if two rules map the same window to
    ///   different outputs.
    /// - [`Error::B0Error`] if a rule activates the all-inactive window;
    ///   such a rule would activate the whole infinite background.
    pub fn new(rules: &[Rule], default_width: usize) -> Result<Self, Error> {
        let width = rules
            .first()
            .map_or(default_width, |rule| rule.pattern.len());
        if width % 2 == 0 {
            return Err(Error::EvenRuleWidth(width));
        }
        if width > MAX_RULE_WIDTH {
            return Err(Error::RuleWidthTooLarge(width));
        }

        let mut table = vec![DEAD; 1 << width];
        let mut seen = vec![None; 1 << width];
        for rule in rules {
            if rule.pattern.len() != width {
                return Err(Error::RuleWidthMismatch {
                    expected: width,
                    found: rule.pattern.len(),
                });
            }
            let index = pack(&rule.pattern);
            match seen[index] {
                Some(output) if output != rule.output => {
                    return Err(Error::AmbiguousRule(pattern_string(&rule.pattern)));
                }
                _ => {
                    seen[index] = Some(rule.output);
                    table[index] = rule.output;
                }
            }
        }
        if table[0] == ALIVE {
            return Err(Error::B0Error);
        }

        Ok(Self { width, table })
    }

    /// The window width of the table.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// The output state for a window, or [`DEAD`] if no rule matches.
    ///
    /// The window must have exactly [`Self::width`] cells.
    pub fn lookup(&self, window: &[State]) -> State {
        debug_assert_eq!(window.len(), self.width);
        self.table[pack(window)]
    }
}

/// Packs a window into its table index, leftmost cell in the highest bit.
fn pack(window: &[State]) -> usize {
    window.iter().fold(0, |acc, &s| (acc << 1) | (s.0 & 1))
}
