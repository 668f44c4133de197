use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

mod cli;
mod commands;
mod context;
mod helpers;

use cli::{Cli, Commands, Shell};
use context::AppContext;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let ctx = AppContext {
        quiet: cli.quiet,
        verbose: cli.verbose,
    };
    init_tracing(ctx.verbose)?;

    let result = match cli.command {
        Commands::Regex(cmd) => commands::regex::handle(&ctx, cmd),
        Commands::Test(cmd) => commands::test::handle(&ctx, cmd),
        Commands::Filter(cmd) => commands::filter::handle(&ctx, cmd),
        Commands::Completions(args) => generate_completions(args),
    };

    if let Err(err) = result {
        if ctx.verbose > 0 {
            eprintln!("{err:?}");
        } else if !ctx.quiet {
            eprintln!("{}", format_error_chain(&err));
        }
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: u8) -> Result<()> {
    let default_filter = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_filter.into())
        .from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to initialise logging: {err}"))
}

fn format_error_chain(err: &anyhow::Error) -> String {
    let mut out = err.to_string();
    for cause in err.chain().skip(1) {
        out.push_str(": ");
        out.push_str(&cause.to_string());
    }
    out
}

fn generate_completions(args: cli::CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let shell = match args.shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::Pwsh => clap_complete::Shell::PowerShell,
    };

    // Generate into a buffer so a closed pipe (`globre completions bash | head`)
    // does not panic inside clap_complete.
    let mut buf: Vec<u8> = Vec::new();
    clap_complete::generate(shell, &mut cmd, "globre", &mut buf);
    helpers::write_stdout(&buf)
}
