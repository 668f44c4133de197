use clap::Args;
use globre::output::OutputFormat;
use globre::Options;

use super::common::parse_delimiter;

#[derive(Args, Debug, Clone, Copy)]
pub struct GlobOptionArgs {
    #[arg(
        short = 'x',
        long,
        env = "GLOBRE_EXTENDED",
        help = "Enable ?, [...] and {a,b} syntax"
    )]
    pub extended: bool,
    #[arg(
        short = 'g',
        long,
        env = "GLOBRE_GLOBSTAR",
        help = "Make * stop at the delimiter and ** span segments"
    )]
    pub globstar: bool,
    #[arg(
        short = 'd',
        long,
        env = "GLOBRE_DELIMITER",
        default_value = "/",
        value_parser = parse_delimiter,
        help = "Path segment delimiter used by --globstar"
    )]
    pub delimiter: char,
}

impl GlobOptionArgs {
    pub fn to_options(self) -> Options {
        Options::default()
            .with_extended(self.extended)
            .with_globstar(self.globstar)
            .with_delimiter(self.delimiter)
    }
}

#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  globre regex '*.js'\n  globre regex -x -g 'http://foo.com/**/{*.js,*.html}' -o json\n")]
pub struct RegexCommand {
    #[arg(help = "Glob pattern")]
    pub pattern: String,
    #[command(flatten)]
    pub options: GlobOptionArgs,
    #[arg(short = 'o', long, default_value_t = OutputFormat::Plain, help = "Output format: json, table, or plain")]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  globre test 'f*uck' firetruck fuck\n  globre test -g '/foo/*' /foo/bar.txt /foo/bar/baz.txt -o json\n")]
pub struct TestCommand {
    #[arg(help = "Glob pattern")]
    pub pattern: String,
    #[arg(required = true, help = "Strings to check against the pattern")]
    pub inputs: Vec<String>,
    #[command(flatten)]
    pub options: GlobOptionArgs,
    #[arg(short = 'o', long, default_value_t = OutputFormat::Table, help = "Output format: json, table, or plain")]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  git ls-files | globre filter -g 'src/**/*.rs'\n  ls | globre filter --invert '*.bak'\n")]
pub struct FilterCommand {
    #[arg(help = "Glob pattern")]
    pub pattern: String,
    #[command(flatten)]
    pub options: GlobOptionArgs,
    #[arg(long, help = "Print the lines that do not match instead")]
    pub invert: bool,
}
