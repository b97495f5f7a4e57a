//! Invocation-time resolution of events and voice parameters.

use voxline_core::ports::{DEFAULT_VOICE, NO_PITCH_ADJUSTMENT, NO_RATE_ADJUSTMENT, VoiceParams};
use voxline_core::presets::VoicePreset;

/// Split a comma-delimited event list, trimming whitespace and dropping
/// empty entries.
pub fn parse_events(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Resolve the effective voice parameters.
///
/// An explicit `--voice` always wins over a preset's voice. A preset's
/// pitch/rate apply only when the caller left the flag at its
/// no-adjustment default; an explicitly set value wins even against a
/// preset.
pub fn resolve_voice(
    voice: Option<&str>,
    preset: Option<&VoicePreset>,
    pitch: &str,
    rate: &str,
) -> VoiceParams {
    match preset {
        Some(p) => VoiceParams {
            voice: voice.unwrap_or(p.voice).to_owned(),
            pitch: if pitch == NO_PITCH_ADJUSTMENT {
                p.pitch.to_owned()
            } else {
                pitch.to_owned()
            },
            rate: if rate == NO_RATE_ADJUSTMENT {
                p.rate.to_owned()
            } else {
                rate.to_owned()
            },
        },
        None => VoiceParams {
            voice: voice.unwrap_or(DEFAULT_VOICE).to_owned(),
            pitch: pitch.to_owned(),
            rate: rate.to_owned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use voxline_core::presets;

    use super::*;

    fn preset() -> &'static VoicePreset {
        presets::find("male_deep").unwrap()
    }

    #[test]
    fn parse_events_trims_and_drops_empties() {
        assert_eq!(
            parse_events(" Stop, PermissionRequest ,,Notification,"),
            ["Stop", "PermissionRequest", "Notification"]
        );
        assert!(parse_events("").is_empty());
        assert!(parse_events(" , ,").is_empty());
    }

    #[test]
    fn explicit_voice_wins_over_preset() {
        let params = resolve_voice(Some("en-US-GuyNeural"), Some(preset()), "+0Hz", "+0%");
        assert_eq!(params.voice, "en-US-GuyNeural");
        // Preset prosody still applies when left at defaults.
        assert_eq!(params.pitch, "-10Hz");
        assert_eq!(params.rate, "-5%");
    }

    #[test]
    fn explicit_adjustments_win_over_preset() {
        let params = resolve_voice(None, Some(preset()), "+2Hz", "+0%");
        assert_eq!(params.voice, "en-AU-WilliamNeural");
        assert_eq!(params.pitch, "+2Hz");
        assert_eq!(params.rate, "-5%");
    }

    #[test]
    fn no_preset_uses_defaults() {
        let params = resolve_voice(None, None, "+0Hz", "+0%");
        assert_eq!(params.voice, DEFAULT_VOICE);
        assert_eq!(params.pitch, "+0Hz");
        assert_eq!(params.rate, "+0%");
    }
}
