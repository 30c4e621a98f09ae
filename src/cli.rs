use crate::config::load_config;
use crate::layout::layout_with_config;
use crate::layout_dump::{LayoutDump, write_layout_dump};
use crate::parser::parse_input;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "cfml",
    version,
    about = "Automatic tree layout for cardinality-based feature models"
)]
pub struct Args {
    /// Input file (flat node array or feature model JSON) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the position dump. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file overriding the layout constants
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Maximum rendered node width in px
    #[arg(short = 'w', long = "max-node-width")]
    pub max_node_width: Option<f32>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.max_node_width {
        config.max_node_width = width;
    }

    let input = read_input(args.input.as_deref())?;
    let parsed = parse_input(&input)?;
    let result = layout_with_config(&parsed.flat, &config)?;
    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }

    let dump = LayoutDump::from_layout(&parsed.flat, &result);
    write_layout_dump(args.output.as_deref(), &dump)?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}
