use crate::config::load_config;
use crate::layout::compute_layout;
use crate::layout_dump::{LayoutDump, write_layout_dump};
use crate::parser::parse_radar;
use anyhow::Result;
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "trl", version, about = "Technology radar layout engine (JSON in, positioned blips out)")]
pub struct Args {
    /// Input radar source (.json/.json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output layout JSON. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file (theme + layout tuning)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Layout/print mode: always color blips by ring, inactive or not
    #[arg(long = "layout-mode")]
    pub layout_mode: bool,

    /// Scale factor for the output frame
    #[arg(short = 's', long = "scale")]
    pub scale: Option<f32>,

    /// Suppress stderr warnings for malformed entries
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if args.layout_mode {
        config.layout.layout_mode = true;
    }
    if let Some(scale) = args.scale {
        config.layout.scale = scale;
    }

    let input = read_input(args.input.as_deref())?;
    let parsed = parse_radar(&input)?;
    let mut layout = compute_layout(&parsed.radar, &config.theme, &config.layout);
    // Parse-time repairs belong in the same report as layout-time ones.
    layout.diagnostics.splice(0..0, parsed.diagnostics);

    if !args.quiet {
        for diagnostic in &layout.diagnostics {
            eprintln!("warning: {diagnostic}");
        }
    }

    match args.output.as_deref() {
        Some(path) => write_layout_dump(path, &layout)?,
        None => {
            let dump = LayoutDump::from_layout(&layout);
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
