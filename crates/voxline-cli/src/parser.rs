//! Command-line surface.
//!
//! Flat flag set, no subcommands: one invocation either generates voice
//! lines for `--events` or runs one of the list modes and exits.

use std::path::PathBuf;

use clap::Parser;

use voxline_core::catalog::DEFAULT_TONE;
use voxline_core::ports::{NO_PITCH_ADJUSTMENT, NO_RATE_ADJUSTMENT};

/// Generate spoken voice lines for companion-tool lifecycle events.
#[derive(Debug, Parser)]
#[command(name = "voxline")]
#[command(about = "Generate AI voice lines for lifecycle hook events")]
#[command(version)]
pub struct Cli {
    /// Comma-separated event names (e.g. "Stop,PermissionRequest")
    #[arg(long, value_name = "EVENTS")]
    pub events: Option<String>,

    /// TTS voice identifier (e.g. "en-GB-RyanNeural")
    #[arg(long)]
    pub voice: Option<String>,

    /// Voice preset: male_deep, male_mid, female_mid, female_high
    #[arg(long)]
    pub preset: Option<String>,

    /// Pitch adjustment (e.g. "+20Hz", "-10Hz")
    #[arg(long, default_value = NO_PITCH_ADJUSTMENT, allow_hyphen_values = true)]
    pub pitch: String,

    /// Rate adjustment (e.g. "+15%", "-5%")
    #[arg(long, default_value = NO_RATE_ADJUSTMENT, allow_hyphen_values = true)]
    pub rate: String,

    /// Personality tone for the built-in line tables
    #[arg(long, default_value = DEFAULT_TONE)]
    pub tone: String,

    /// JSON file with custom lines, overriding --tone
    /// (shape: {"Stop": ["line", ...], ...})
    #[arg(long, value_name = "PATH")]
    pub lines_file: Option<PathBuf>,

    /// Voice lines to generate per event (picked randomly from the
    /// available lines)
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    pub count: i64,

    /// Directory to write sounds into (default: "sounds" next to the
    /// executable)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// List available personality tones and exit
    #[arg(long)]
    pub list_tones: bool,

    /// List common voice identifiers and exit
    #[arg(long)]
    pub list_voices: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_no_adjustment() {
        let cli = Cli::parse_from(["voxline", "--events", "Stop"]);
        assert_eq!(cli.pitch, "+0Hz");
        assert_eq!(cli.rate, "+0%");
        assert_eq!(cli.tone, "sarcastic");
        assert_eq!(cli.count, 3);
        assert!(!cli.list_tones && !cli.list_voices);
    }

    #[test]
    fn negative_adjustments_and_counts_parse() {
        let cli = Cli::parse_from([
            "voxline", "--events", "Stop", "--pitch", "-10Hz", "--rate", "-5%", "--count", "-1",
        ]);
        assert_eq!(cli.pitch, "-10Hz");
        assert_eq!(cli.rate, "-5%");
        assert_eq!(cli.count, -1);
    }

    #[test]
    fn list_modes_need_no_events() {
        let cli = Cli::parse_from(["voxline", "--list-tones"]);
        assert!(cli.list_tones);
        assert!(cli.events.is_none());
    }
}
