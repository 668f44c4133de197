use thiserror::Error;

/// Errors raised when turning a glob into a usable matcher.
///
/// Translating a glob into regex source never fails; only handing that
/// source to the regex engine can.
#[derive(Debug, Error)]
pub enum GlobError {
    #[error("glob `{glob}` produced a regex the engine rejected: `{regex}`")]
    Regex {
        glob: String,
        regex: String,
        #[source]
        source: regex::Error,
    },
}
