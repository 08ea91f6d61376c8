#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod commands;

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use flexi_logger::Logger;

#[derive(Parser, Debug)]
#[command(
    name = "mcmedit",
    version,
    about = "Edit MAX7456 / AT7456E OSD fonts (.mcm)",
    after_help = "examples:\n  mcmedit mcm2sheet font.mcm sheet.png\n  mcmedit sheet2mcm sheet.png font.mcm\n  mcmedit inject-logo font.mcm logo_192x108.png font_with_logo.mcm"
)]
pub struct Cli {
    /// More log output (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Don't print the success message.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert .mcm -> 192x288 PNG sheet
    #[command(name = "mcm2sheet", long_about = "Extract all 256 glyphs into a 16x16 PNG sheet (12x18 per glyph).")]
    Mcm2Sheet {
        #[arg(value_name = "FONT.mcm")]
        mcm: PathBuf,
        #[arg(value_name = "SHEET.png")]
        png: PathBuf,
    },

    /// Convert 192x288 PNG sheet -> .mcm
    #[command(name = "sheet2mcm", long_about = "Build a full .mcm font from a 192x288 glyph sheet.")]
    Sheet2Mcm {
        #[arg(value_name = "SHEET.png")]
        png: PathBuf,
        #[arg(value_name = "FONT.mcm")]
        mcm: PathBuf,
        /// Write CRLF line endings
        #[arg(long)]
        crlf: bool,
    },

    /// Inject pre-tiled logo PNG into glyphs 0xA0-0xFF
    #[command(
        name = "inject-logo",
        long_about = "Injects a pre-tiled logo into glyph indices 0xA0-0xFF (96 tiles). The logo must be tile aligned (12x18) and use the sheet palette."
    )]
    InjectLogo {
        #[arg(value_name = "BASE_FONT.mcm")]
        base_mcm: PathBuf,
        #[arg(value_name = "LOGO.png")]
        logo_png: PathBuf,
        #[arg(value_name = "OUTPUT.mcm")]
        out_mcm: PathBuf,
        /// Write CRLF line endings
        #[arg(long)]
        crlf: bool,
    },
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let _logger = match Logger::try_with_env_or_str(log_level(args.verbose)).and_then(|logger| logger.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    };

    match commands::run(&args.command) {
        Ok(message) => {
            if !args.quiet {
                println!("OK: {message}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("ERROR: {err:#}");
            ExitCode::from(2)
        }
    }
}
