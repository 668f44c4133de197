use anyhow::{Context, Result};
use globre::output::OutputFormat;
use globre::{Glob, Options};
use serde::Serialize;

use crate::cli::RegexCommand;
use crate::context::AppContext;
use crate::helpers::{maybe_print_json, maybe_print_table, print_line};

#[derive(Debug, Serialize)]
struct Translation<'a> {
    glob: &'a str,
    regex: &'a str,
    options: &'a Options,
}

pub fn handle(ctx: &AppContext, cmd: RegexCommand) -> Result<()> {
    let glob = Glob::new(cmd.pattern, cmd.options.to_options())
        .context("Failed to compile glob")?;
    match cmd.output {
        OutputFormat::Json => maybe_print_json(
            ctx,
            &Translation {
                glob: glob.glob(),
                regex: glob.as_str(),
                options: glob.options(),
            },
        ),
        OutputFormat::Table => {
            maybe_print_table(
                ctx,
                &["Glob", "Regex"],
                vec![vec![glob.glob().to_string(), glob.as_str().to_string()]],
            );
            Ok(())
        }
        OutputFormat::Plain => {
            print_line(ctx, glob.as_str());
            Ok(())
        }
    }
}
