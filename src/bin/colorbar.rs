// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Command-line front end: encode text into a colour bar, decode a PNG bar,
//! or print HTML markup.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` for pipeline
//! details.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use colorbar_core::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use colorbar_core::{
    colorbar_html, decode_file, encode_to_file, encode_with, BarConfig, HtmlOptions, SeparatorMode,
};

/// Encode text as a colour bar and decode it back
#[derive(Parser)]
#[command(name = "colorbar")]
#[command(version)]
#[command(about = "Encode text as a colour bar and decode it back", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the colour codes for TEXT, optionally saving a PNG
    Encode {
        /// Text to encode
        text: String,

        /// Directory to save the PNG into
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Canvas width in pixels
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: u32,

        /// Canvas height in pixels
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: u32,

        #[command(flatten)]
        separator: SeparatorArgs,
    },

    /// Decode a PNG colour bar
    Decode {
        /// PNG file to read
        file: PathBuf,

        /// Also print hex text and decode quality
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print HTML table markup for TEXT
    Html {
        /// Text to encode
        text: String,

        /// CSS width of the container
        #[arg(long, default_value = "500px")]
        width: String,

        /// CSS height of the container
        #[arg(long, default_value = "500px")]
        height: String,

        /// Element id suffix (generated when omitted)
        #[arg(long, default_value = "")]
        id: String,

        #[command(flatten)]
        separator: SeparatorArgs,
    },
}

#[derive(Args)]
struct SeparatorArgs {
    /// Seed for reproducible separator colours
    #[arg(long, conflicts_with = "separator")]
    seed: Option<u64>,

    /// Always use this palette index (0-5) as separator
    #[arg(long)]
    separator: Option<usize>,
}

impl SeparatorArgs {
    fn mode(&self) -> SeparatorMode {
        match (self.seed, self.separator) {
            (Some(seed), _) => SeparatorMode::Seeded(seed),
            (None, Some(index)) => SeparatorMode::Fixed(index),
            (None, None) => SeparatorMode::Random,
        }
    }
}

fn run(cli: Cli) -> colorbar_core::Result<()> {
    match cli.command {
        Command::Encode { text, out, width, height, separator } => {
            let config = BarConfig { width, height, separator: separator.mode() };
            match out {
                Some(dir) => {
                    let (encoded, name) = encode_to_file(text.as_bytes(), &config, &dir)?;
                    println!("{}", encoded.codes().css_colors().join(" "));
                    println!("{}", dir.join(name).display());
                }
                None => {
                    let encoded = encode_with(text.as_bytes(), &mut config.separator.selector())?;
                    println!("{}", encoded.codes().css_colors().join(" "));
                }
            }
        }
        Command::Decode { file, verbose } => {
            let decoded = decode_file(&file)?;
            if verbose {
                let q = decoded.quality();
                eprintln!("hex: {}", decoded.hex_text());
                eprintln!(
                    "segments: {}, contested: {}, tied: {}, integrity: {}%",
                    q.segments, q.contested_segments, q.tied_segments, q.integrity_percent
                );
            }
            println!("{}", decoded.text_lossy());
        }
        Command::Html { text, width, height, id, separator } => {
            let encoded = encode_with(text.as_bytes(), &mut separator.mode().selector())?;
            let opts = HtmlOptions { width, height, id };
            println!("{}", colorbar_html(encoded.codes(), &opts));
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
