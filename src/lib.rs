pub mod error;
pub mod glob;
pub mod options;
pub mod output;
pub mod pattern;

pub use error::GlobError;
pub use glob::Glob;
pub use options::Options;
pub use pattern::{classify, classify_star_run, glob_to_regex, regex_from_glob, StarRun, Token};
