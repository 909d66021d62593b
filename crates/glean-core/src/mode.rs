//! Query interpretation modes.
//!
//! The [`QueryMode`] enum decides how the raw query text is turned into a
//! matcher. Both modes compare case-insensitively.

use serde::{Deserialize, Serialize};

/// How a query string is interpreted.
///
/// - **Literal** (default): the query is a plain substring. Characters such as
///   `.`, `*`, `(` or `+` match themselves.
/// - **Pattern**: the query is a regular expression fragment. Special
///   characters keep their regex meaning and escaping is the caller's job.
///   A malformed pattern matches nothing instead of failing the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// Plain, case-insensitive substring search.
    #[default]
    Literal,
    /// Case-insensitive regular expression fragment.
    Pattern,
}

impl QueryMode {
    /// Picks the mode from a "literal mode" flag as found in settings.
    pub fn from_literal_flag(literal: bool) -> Self {
        if literal {
            QueryMode::Literal
        } else {
            QueryMode::Pattern
        }
    }

    /// Returns `true` for [`QueryMode::Literal`].
    pub fn is_literal(self) -> bool {
        matches!(self, QueryMode::Literal)
    }

    /// Returns `true` for [`QueryMode::Pattern`].
    pub fn is_pattern(self) -> bool {
        matches!(self, QueryMode::Pattern)
    }

    /// Turns a query into the regex source this mode compiles.
    pub(crate) fn pattern_source(self, query: &str) -> String {
        match self {
            QueryMode::Literal => regex::escape(query),
            QueryMode::Pattern => query.to_string(),
        }
    }

    /// Returns the display name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            QueryMode::Literal => "literal",
            QueryMode::Pattern => "pattern",
        }
    }
}

impl std::fmt::Display for QueryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
