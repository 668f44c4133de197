use anyhow::{bail, Context, Result};
use globre::Glob;
use std::io::{self, BufRead, BufWriter, Write};

use crate::cli::FilterCommand;
use crate::context::AppContext;
use crate::helpers::pipe_open;

pub fn handle(ctx: &AppContext, cmd: FilterCommand) -> Result<()> {
    let glob = Glob::new(cmd.pattern, cmd.options.to_options())
        .context("Failed to compile glob")?;
    tracing::debug!(regex = glob.as_str(), invert = cmd.invert, "filtering stdin");

    let mut stdin = io::stdin().lock();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut buf = Vec::new();
    let mut kept = 0usize;
    loop {
        buf.clear();
        let read = stdin
            .read_until(b'\n', &mut buf)
            .context("Failed to read stdin")?;
        if read == 0 {
            break;
        }
        let line = strip_line_ending(&buf);
        // Lines that are not UTF-8 are matched lossily but echoed byte for byte.
        let text = String::from_utf8_lossy(line);
        if glob.is_match(&text) == cmd.invert {
            continue;
        }
        kept += 1;
        if !ctx.quiet && !pipe_open(out.write_all(line).and_then(|()| out.write_all(b"\n")))? {
            return Ok(());
        }
    }

    pipe_open(out.flush())?;
    if kept == 0 {
        bail!("No lines matched {}", glob.glob());
    }
    Ok(())
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
