//! `wavparse` - print the header of a WAV file and the first few decoded frames.
//!
//! ```bash
//! wavparse song.wav
//! wavparse song.wav --frames 8 --channels left,right
//! wavparse song.wav --json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use wavparse::table::Table;
use wavparse::{Encoding, Wav};

/// Inspect a WAV file.
#[derive(Parser)]
#[command(name = "wavparse", version, about = "Parse a WAV header and decode its samples")]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long)]
    verbose: bool,

    /// WAV file to read.
    input: PathBuf,

    /// Print the header as JSON.
    #[arg(long)]
    json: bool,

    /// Print the first N frames as a table.
    #[arg(short, long, default_value_t = 0)]
    frames: usize,

    /// Comma-separated column names, one per channel (e.g., "left,right").
    #[arg(short, long, value_delimiter = ',')]
    channels: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let wav = read_wav(&cli.input)?;

    if cli.json {
        let info = serde_json::json!({
            "path": cli.input.display().to_string(),
            "format": &wav.format,
            "encoding": wav.audio.encoding(),
            "frames": wav.audio.frame_count(),
            "duration_secs": wav.format.duration_secs(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", wav.format);
        println!("Encoding: {}", describe(wav.audio.encoding()));
        println!("Frames: {}", wav.audio.frame_count());
        if let Some(secs) = wav.format.duration_secs() {
            println!("Duration: {:.3} s", secs);
        }
    }

    if cli.frames > 0 {
        let table = if cli.channels.is_empty() {
            Table::new(&wav.audio)
        } else {
            Table::with_names(&wav.audio, (0u16..).zip(cli.channels.iter().cloned()))
        };
        print_table(&table, cli.frames);
    }

    Ok(())
}

fn read_wav(path: &Path) -> Result<Wav> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "read file");

    Wav::from_bytes(&bytes).with_context(|| format!("Failed to decode {}", path.display()))
}

fn describe(encoding: Encoding) -> &'static str {
    match encoding {
        Encoding::Pcm8 => "8-bit unsigned PCM",
        Encoding::Pcm16 => "16-bit signed PCM",
        Encoding::Pcm32 => "32-bit signed PCM",
        Encoding::Float32 => "32-bit IEEE float",
        Encoding::Float64 => "64-bit IEEE float",
    }
}

fn print_table(table: &Table<'_>, limit: usize) {
    print!("{:>8}", "frame");
    for column in table.columns() {
        print!(" {:>12}", column);
    }
    println!();

    for record in table.rows().take(limit) {
        print!("{:>8}", record.index());
        for (_, value) in record.iter() {
            print!(" {:>12}", value.to_string());
        }
        println!();
    }

    if table.len() > limit {
        println!("... {} more frames", table.len() - limit);
    }
}
