//! CLI entry point for dirtree

use std::path::PathBuf;
use std::process;

use clap::Parser;
use dirtree::{IgnoreSet, Style, TreeRenderer, print_tree, write_tree};
use log::debug;

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Generate a directory tree in ASCII or Markdown format")]
#[command(version)]
struct Args {
    /// Directory to render
    path: PathBuf,

    /// Write the tree to FILE instead of standard output
    /// (a name ending in .md gets wrapped in a fenced code block)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Draw branches with Markdown box-drawing glyphs
    #[arg(short = 'm', long = "markdown")]
    markdown: bool,

    /// Names of files and directories to skip at every level
    #[arg(short = 'i', long = "ignore", value_name = "NAME", num_args = 0..)]
    ignore: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("dirtree: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> dirtree::Result<()> {
    let style = Style::from_markdown_flag(args.markdown);
    let ignore: IgnoreSet = args.ignore.iter().cloned().collect();
    debug!(
        "rendering {} ({:?}, {} ignored names)",
        args.path.display(),
        style,
        ignore.len()
    );

    let lines = TreeRenderer::new(style, ignore).render(&args.path)?;

    match &args.output {
        Some(destination) => write_tree(destination, &lines),
        None => print_tree(&lines),
    }
}
