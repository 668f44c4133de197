use serde::{Deserialize, Serialize};

/// Behavioral switches for [`crate::glob_to_regex`].
///
/// The default value is plain glob syntax (only `*` is special) with `/` as
/// the segment delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Enables `?`, `[...]` and `{a,b}`.
    pub extended: bool,
    /// Makes `*` stop at the delimiter and lets `**` span whole segments.
    pub globstar: bool,
    /// Path-segment separator used by globstar matching.
    pub delimiter: char,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            extended: false,
            globstar: false,
            delimiter: '/',
        }
    }
}

impl Options {
    pub fn with_extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    pub fn with_globstar(mut self, globstar: bool) -> Self {
        self.globstar = globstar;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}
