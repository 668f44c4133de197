use anyhow::Result;
use globre::output::{print_json, print_table};
use std::io::{self, Write};

use crate::context::AppContext;

pub fn maybe_print_json<T: serde::Serialize>(ctx: &AppContext, value: &T) -> Result<()> {
    if ctx.quiet {
        return Ok(());
    }
    print_json(value)
}

pub fn maybe_print_table(ctx: &AppContext, headers: &[&str], rows: Vec<Vec<String>>) {
    if ctx.quiet {
        return;
    }
    print_table(headers, rows);
}

pub fn print_line(ctx: &AppContext, message: &str) {
    if ctx.quiet {
        return;
    }
    println!("{message}");
}

/// Writes `buf` to stdout, treating a closed pipe (`| head`) as success.
pub fn write_stdout(buf: &[u8]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    pipe_open(stdout.write_all(buf).and_then(|()| stdout.flush()))?;
    Ok(())
}

/// `Ok(false)` once the reader on the other end of stdout has gone away.
pub fn pipe_open(result: io::Result<()>) -> Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(false),
        Err(err) => Err(err.into()),
    }
}
