//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Unknown cell character: {0:?}.
    UnknownCellChar(char),
    /// Malformed rule line: {0:?}.
    BadRuleLine(String),
    /// The input has no `initial state:` line.
    MissingInitialState,
    /// The initial pattern is empty.
    EmptyPattern,
    /// Rule window width should be odd, but is {0}.
    EvenRuleWidth(usize),
    /// Rule window width {0} is too large.
    RuleWidthTooLarge(usize),
    /// Rule window widths do not match: expected {expected}, found {found}.
    RuleWidthMismatch {
        /// The width of the first rule in the table.
        expected: usize,
        /// The mismatched width.
        found: usize,
    },
    /// Ambiguous rule set: window {0:?} maps to two different outputs.
    AmbiguousRule(String),
    /// Rules that activate the all-inactive window are not supported.
    B0Error,
}
