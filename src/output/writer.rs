//! Output destinations for rendered trees
//!
//! Lines are always fully rendered before any of these run, so a failed walk
//! never leaves a partial file behind.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use log::debug;

use crate::error::{Result, TreeError};

const FENCE: &str = "```";

/// Whether a destination gets a fenced code block. Decided by name alone.
pub fn is_markdown_destination(destination: &Path) -> bool {
    destination.as_os_str().as_encoded_bytes().ends_with(b".md")
}

/// Build the exact file contents for `destination`.
///
/// `.md` destinations are wrapped in a triple-backtick fence; anything else
/// is the lines joined with `\n`. Both end with a single trailing newline.
pub fn format_file_contents(destination: &Path, lines: &[String]) -> String {
    let body = lines.join("\n");
    if is_markdown_destination(destination) {
        format!("{FENCE}\n{body}\n{FENCE}\n")
    } else {
        format!("{body}\n")
    }
}

/// Write a rendered tree to a file, creating or truncating it.
pub fn write_tree(destination: &Path, lines: &[String]) -> Result<()> {
    let contents = format_file_contents(destination, lines);
    fs::write(destination, contents).map_err(|source| TreeError::Write {
        path: destination.to_path_buf(),
        source,
    })?;
    debug!("wrote {} lines to {}", lines.len(), destination.display());
    Ok(())
}

/// Print a rendered tree to stdout, one line per entry.
pub fn print_tree(lines: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    print_tree_to(&mut handle, lines)?;
    Ok(())
}

/// Write each line followed by a newline to `out`.
pub fn print_tree_to<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
