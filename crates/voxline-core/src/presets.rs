//! Voice presets: named voice parameter bundles.
//!
//! Purely descriptive defaults. Explicitly supplied values always win over
//! a preset's values; the precedence rule itself lives with the invocation
//! surface, not here.

/// A named bundle of voice defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoicePreset {
    /// Preset identifier used on the command line.
    pub name: &'static str,

    /// Voice identifier.
    pub voice: &'static str,

    /// Pitch adjustment.
    pub pitch: &'static str,

    /// Rate adjustment.
    pub rate: &'static str,
}

/// The built-in presets.
pub const PRESETS: &[VoicePreset] = &[
    VoicePreset {
        name: "male_deep",
        voice: "en-AU-WilliamNeural",
        pitch: "-10Hz",
        rate: "-5%",
    },
    VoicePreset {
        name: "male_mid",
        voice: "en-GB-RyanNeural",
        pitch: "+20Hz",
        rate: "+15%",
    },
    VoicePreset {
        name: "female_mid",
        voice: "en-GB-SoniaNeural",
        pitch: "+5Hz",
        rate: "+10%",
    },
    VoicePreset {
        name: "female_high",
        voice: "en-US-JennyNeural",
        pitch: "+15Hz",
        rate: "+20%",
    },
];

/// Look up a preset by name.
pub fn find(name: &str) -> Option<&'static VoicePreset> {
    PRESETS.iter().find(|p| p.name == name)
}

/// Preset names, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_known_preset() {
        let preset = find("male_deep").unwrap();
        assert_eq!(preset.voice, "en-AU-WilliamNeural");
        assert_eq!(preset.pitch, "-10Hz");
        assert_eq!(preset.rate, "-5%");
    }

    #[test]
    fn find_unknown_preset_is_none() {
        assert!(find("baritone").is_none());
    }

    #[test]
    fn names_match_table() {
        let names: Vec<&str> = names().collect();
        assert_eq!(names, ["male_deep", "male_mid", "female_mid", "female_high"]);
    }
}
