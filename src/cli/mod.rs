use clap::{Args, Parser, Subcommand, ValueEnum};

mod common;
mod glob;

pub use glob::*;

const CLI_AFTER_HELP: &str = "EXAMPLES:\n  globre regex '*.min.js'\n  globre regex --extended 'foo{bar,baz}' -o json\n  globre test --globstar '/src/**/*.rs' /src/lib.rs /src/cli/mod.rs\n  find . | globre filter --globstar './**/*.toml'\n";

#[derive(Parser, Debug)]
#[command(
    name = "globre",
    version,
    about = "Translate glob patterns into anchored regular expressions",
    after_help = CLI_AFTER_HELP
)]
pub struct Cli {
    #[arg(short = 'q', long, global = true, help = "Suppress all output")]
    pub quiet: bool,
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count, help = "Increase verbosity (-v, -vv)")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Print the regex a glob translates to")]
    Regex(RegexCommand),
    #[command(about = "Check inputs against a glob")]
    Test(TestCommand),
    #[command(about = "Print the stdin lines a glob matches")]
    Filter(FilterCommand),
    #[command(about = "Generate shell completions")]
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(ValueEnum, Debug, Clone)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    Pwsh,
}
