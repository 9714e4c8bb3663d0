//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Cloak a voice recording against a background track
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML config file (defaults apply when absent)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the cloaked mix to a WAV file
    Render {
        #[command(flatten)]
        mix: MixArgs,

        /// Output file (defaults to new_<voice>.wav in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render the cloaked mix and play it on the default output device
    Preview {
        #[command(flatten)]
        mix: MixArgs,
    },
}

/// Inputs shared by every subcommand.
///
/// Volumes are taken as raw text and parsed by the library so bad values
/// get the same error a form upload would.
#[derive(Args, Debug)]
pub struct MixArgs {
    /// Voice recording or video with an audio track
    #[arg(short, long)]
    pub voice: Option<PathBuf>,

    /// Background track, looped to the voice length (silence when omitted)
    #[arg(short, long)]
    pub noise: Option<PathBuf>,

    /// Voice volume in percent (default 100)
    #[arg(long, allow_hyphen_values = true)]
    pub voice_volume: Option<String>,

    /// Background volume on the left channel in percent (default 100)
    #[arg(long, allow_hyphen_values = true)]
    pub noise_left_volume: Option<String>,

    /// Background volume on the right channel in percent (default 30)
    #[arg(long, allow_hyphen_values = true)]
    pub noise_right_volume: Option<String>,

    /// Override the canonical output sample rate (Hz)
    #[arg(long)]
    pub sample_rate: Option<u32>,
}
