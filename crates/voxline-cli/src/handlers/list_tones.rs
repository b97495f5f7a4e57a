//! List-tones handler.

use voxline_core::catalog::LineCatalog;

/// Print each built-in tone with a sample line.
pub fn execute(catalog: &LineCatalog) {
    println!("Available tones:");
    for tone in catalog.tone_names() {
        let sample = catalog
            .get(tone)
            .and_then(|lines| lines.lines_for("Stop").first().map(String::as_str))
            .unwrap_or("");
        println!("  {tone:<16} \"{sample}\"");
    }
}
