use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::GlobError;
use crate::options::Options;
use crate::pattern::glob_to_regex;

/// A glob compiled down to a [`Regex`].
#[derive(Debug, Clone)]
pub struct Glob {
    glob: String,
    options: Options,
    regex: Regex,
}

impl Glob {
    pub fn new(glob: impl Into<String>, options: Options) -> Result<Self, GlobError> {
        let glob = glob.into();
        let source = glob_to_regex(&glob, &options);
        let regex = Regex::new(&source).map_err(|source_err| GlobError::Regex {
            glob: glob.clone(),
            regex: source.clone(),
            source: source_err,
        })?;
        tracing::debug!(glob = %glob, regex = %source, "compiled glob");
        Ok(Self {
            glob,
            options,
            regex,
        })
    }

    /// Whether the whole of `input` is described by the glob.
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    /// Keeps only the inputs the glob matches.
    pub fn filter<'a, I>(&'a self, inputs: I) -> impl Iterator<Item = &'a str> + 'a
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: 'a,
    {
        inputs.into_iter().filter(move |input| self.is_match(input))
    }

    /// The emitted regex source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn glob(&self) -> &str {
        &self.glob
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl FromStr for Glob {
    type Err = GlobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s, Options::default())
    }
}

impl fmt::Display for Glob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glob)
    }
}
