//! List-voices handler.

/// Print a curated set of voice identifiers.
///
/// The synthesizer knows hundreds of voices; this is the shortlist that
/// works well for short notification clips.
pub fn execute() {
    println!("Common voices:");
    println!("  en-AU-WilliamNeural   Australian male (deep, gruff)");
    println!("  en-GB-RyanNeural      British male (mid, versatile)");
    println!("  en-GB-ThomasNeural    British male (deeper)");
    println!("  en-IE-ConnorNeural    Irish male (warm)");
    println!("  en-US-GuyNeural       American male (neutral)");
    println!("  en-GB-SoniaNeural     British female (mid)");
    println!("  en-US-JennyNeural     American female (bright)");
    println!("  en-AU-NatashaNeural   Australian female");
    println!();
    println!("Full list: edge-tts --list-voices");
}
