//! CLI for inspecting the legacy scripts' filesystem view.
//!
//! `ls` runs the bounded-depth lister; `resolve` normalizes a path string
//! the way the shim's path model does. Both read the shim config for the
//! separator and encoding.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use jshost::core::path::FilePath;
use jshost::io::config::{ShimConfig, load_config};
use jshost::io::fs::LocalFs;
use jshost::io::lister::TreeLister;

#[derive(Parser)]
#[command(
    name = "jshost",
    version,
    about = "Bootstrap shim utilities for a legacy script tree"
)]
struct Cli {
    /// Path to the shim config (TOML); defaults apply when missing.
    #[arg(long, default_value = "jshost.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List non-hidden files under a path, bounded by depth.
    Ls {
        start: String,
        /// Directory levels to descend below the start.
        #[arg(short, long, default_value_t = 1)]
        depth: usize,
    },
    /// Normalize a path (collapse `.` and `..`) and print it.
    Resolve {
        path: String,
        /// Drop the file name, printing the containing directory.
        #[arg(long)]
        dir: bool,
    },
}

fn main() {
    jshost::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    match cli.command {
        Command::Ls { start, depth } => cmd_ls(&config, &start, depth),
        Command::Resolve { path, dir } => cmd_resolve(&config, &path, dir),
    }
}

fn cmd_ls(config: &ShimConfig, start: &str, depth: usize) -> Result<()> {
    let fs = LocalFs::new(config.encoding);
    let lister = TreeLister::new(&fs, config.separator);
    for file in lister.list(start, depth)? {
        println!("{file}");
    }
    Ok(())
}

fn cmd_resolve(config: &ShimConfig, path: &str, dir: bool) -> Result<()> {
    let mut parsed = FilePath::with_separator(path, config.separator);
    if dir {
        parsed = parsed.to_dir();
    }
    println!("{parsed}");
    Ok(())
}
