//! Run report: human-readable summary of a dispatch.

use std::fmt::Write as _;

use crate::dispatch::{JobOutcome, OutcomeStatus};
use crate::plan::SkipNotice;

/// Render the settled outcomes and skip notices as display text.
///
/// Outcomes arrive in arbitrary completion grouping; they are regrouped by
/// event in request order, then by ordinal, before rendering. Every skip,
/// every artifact (with its source text) and every failure (with its
/// reason) appears; nothing is omitted silently.
pub fn render(requested: &[String], outcomes: &[JobOutcome], skips: &[SkipNotice]) -> String {
    let position = |event: &str| {
        requested
            .iter()
            .position(|r| r == event)
            .unwrap_or(usize::MAX)
    };

    let mut sorted: Vec<&JobOutcome> = outcomes.iter().collect();
    sorted.sort_by_key(|o| (position(&o.event), o.ordinal));

    let mut out = String::new();
    for skip in skips {
        let _ = writeln!(out, "  {}: {}, skipping", skip.event, skip.reason);
    }

    for outcome in &sorted {
        match &outcome.status {
            OutcomeStatus::Written(path) => {
                let file = path
                    .file_name()
                    .map_or_else(|| path.display().to_string(), |f| f.to_string_lossy().into_owned());
                let _ = writeln!(out, "  {}/{}  \"{}\"", outcome.event, file, outcome.text);
            }
            OutcomeStatus::Failed(reason) => {
                let _ = writeln!(
                    out,
                    "  {}/voice_{}: FAILED ({reason})",
                    outcome.event, outcome.ordinal
                );
            }
        }
    }

    let written = sorted.iter().filter(|o| o.is_written()).count();
    let failed = sorted.len() - written;
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Done. {written} voice line(s) written for {} requested event(s).",
        requested.len()
    );
    if failed > 0 {
        let _ = writeln!(out, "{failed} job(s) failed; reasons listed above.");
    }
    out
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn outcome(event: &str, ordinal: usize, text: &str, status: OutcomeStatus) -> JobOutcome {
        JobOutcome {
            event: event.to_owned(),
            ordinal,
            text: text.to_owned(),
            status,
        }
    }

    fn written(event: &str, ordinal: usize, text: &str, file: &str) -> JobOutcome {
        outcome(
            event,
            ordinal,
            text,
            OutcomeStatus::Written(PathBuf::from(format!("sounds/{event}/{file}"))),
        )
    }

    #[test]
    fn lists_artifacts_with_source_text() {
        let requested = vec!["Stop".to_owned()];
        let outcomes = vec![written("Stop", 1, "Done. Ready.", "voice_1.wav")];
        let text = render(&requested, &outcomes, &[]);
        assert!(text.contains("Stop/voice_1.wav"), "got:\n{text}");
        assert!(text.contains("\"Done. Ready.\""), "got:\n{text}");
        assert!(text.contains("1 voice line(s) written for 1 requested event(s)."));
    }

    #[test]
    fn failures_are_never_omitted() {
        let requested = vec!["Stop".to_owned()];
        let outcomes = vec![
            written("Stop", 1, "Done.", "voice_1.wav"),
            outcome(
                "Stop",
                2,
                "Finished.",
                OutcomeStatus::Failed("synthesizer offline".to_owned()),
            ),
        ];
        let text = render(&requested, &outcomes, &[]);
        assert!(text.contains("Stop/voice_2: FAILED (synthesizer offline)"), "got:\n{text}");
        assert!(text.contains("1 job(s) failed"), "got:\n{text}");
    }

    #[test]
    fn skips_are_listed() {
        let requested = vec!["TeammateIdle".to_owned()];
        let skips = vec![SkipNotice {
            event: "TeammateIdle".to_owned(),
            reason: "no lines for this event".to_owned(),
        }];
        let text = render(&requested, &[], &skips);
        assert!(
            text.contains("TeammateIdle: no lines for this event, skipping"),
            "got:\n{text}"
        );
        assert!(text.contains("0 voice line(s) written"), "got:\n{text}");
    }

    #[test]
    fn outcomes_regroup_by_request_order_then_ordinal() {
        let requested = vec!["SessionStart".to_owned(), "Stop".to_owned()];
        // Deliberately shuffled completion order.
        let outcomes = vec![
            written("Stop", 2, "b", "voice_2.wav"),
            written("SessionStart", 1, "c", "voice_1.wav"),
            written("Stop", 1, "a", "voice_1.wav"),
        ];
        let text = render(&requested, &outcomes, &[]);
        let first = text.find("SessionStart/voice_1").unwrap();
        let second = text.find("Stop/voice_1").unwrap();
        let third = text.find("Stop/voice_2").unwrap();
        assert!(first < second && second < third, "got:\n{text}");
    }
}
