//! Selection planning: deciding which lines become synthesis jobs.

use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;

use crate::catalog::EventLineSet;
use crate::ports::VoiceParams;

/// Extension of the normalized target format.
pub const TARGET_EXTENSION: &str = "wav";

/// One unit of synthesis work.
///
/// Immutable once planned; consumed exactly once by the dispatcher.
#[derive(Debug, Clone)]
pub struct SynthesisJob {
    /// Event this line belongs to.
    pub event: String,

    /// 1-based position within the event, in sampling draw order. Drives
    /// the `voice_<ordinal>` file naming.
    pub ordinal: usize,

    /// Text to synthesize.
    pub text: String,

    /// Voice parameters for the run.
    pub params: VoiceParams,

    /// Destination path for the normalized artifact
    /// (`<root>/<event>/voice_<ordinal>.wav`).
    pub dest: PathBuf,
}

/// An event that produced no jobs because it has no candidate lines.
///
/// Skips never fail the run and never count as job failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipNotice {
    pub event: String,
    pub reason: String,
}

/// Output of the planner: jobs in (event request order, draw order), plus
/// skip notices for line-less events.
#[derive(Debug, Default)]
pub struct Plan {
    pub jobs: Vec<SynthesisJob>,
    pub skips: Vec<SkipNotice>,
}

/// Plan synthesis jobs for `events` against `lines`.
///
/// Per event, in request order: draw `min(count, candidates)` distinct lines
/// uniformly without replacement. No line repeats within one event in one
/// run; draws are not reproducible across runs. A `count` of zero or less
/// plans nothing at all, for every event, without skip notices.
pub fn plan(
    lines: &EventLineSet,
    events: &[String],
    count: i64,
    params: &VoiceParams,
    sounds_root: &Path,
) -> Plan {
    let mut out = Plan::default();
    let Ok(want) = usize::try_from(count) else {
        return out;
    };
    if want == 0 {
        return out;
    }

    let mut rng = rand::thread_rng();
    for event in events {
        let candidates = lines.lines_for(event);
        if candidates.is_empty() {
            out.skips.push(SkipNotice {
                event: event.clone(),
                reason: "no lines for this event".to_owned(),
            });
            continue;
        }

        let take = want.min(candidates.len());
        let event_dir = sounds_root.join(event);
        for (i, text) in candidates.choose_multiple(&mut rng, take).enumerate() {
            let ordinal = i + 1;
            out.jobs.push(SynthesisJob {
                event: event.clone(),
                ordinal,
                text: text.clone(),
                params: params.clone(),
                dest: event_dir.join(format!("voice_{ordinal}.{TARGET_EXTENSION}")),
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::collections::HashSet;

    use super::*;

    fn line_set(entries: &[(&str, &[&str])]) -> EventLineSet {
        let map: BTreeMap<String, Vec<String>> = entries
            .iter()
            .map(|(event, lines)| {
                ((*event).to_owned(), lines.iter().map(|l| (*l).to_owned()).collect())
            })
            .collect();
        EventLineSet::new(map)
    }

    fn events(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_owned()).collect()
    }

    #[test]
    fn draws_min_of_count_and_candidates() {
        let lines = line_set(&[("Stop", &["a", "b", "c", "d", "e", "f"])]);
        let plan = plan(
            &lines,
            &events(&["Stop"]),
            2,
            &VoiceParams::default(),
            Path::new("sounds"),
        );
        assert_eq!(plan.jobs.len(), 2);
        assert!(plan.skips.is_empty());
    }

    #[test]
    fn clamps_count_to_available_lines() {
        let lines = line_set(&[("Stop", &["a", "b"])]);
        let plan = plan(
            &lines,
            &events(&["Stop"]),
            5,
            &VoiceParams::default(),
            Path::new("sounds"),
        );
        assert_eq!(plan.jobs.len(), 2);
        let texts: HashSet<&str> = plan.jobs.iter().map(|j| j.text.as_str()).collect();
        assert_eq!(texts, HashSet::from(["a", "b"]));
        assert!(plan.skips.is_empty());
    }

    #[test]
    fn never_repeats_a_line_within_an_event() {
        let lines = line_set(&[("Stop", &["a", "b", "c", "d", "e"])]);
        for _ in 0..50 {
            let plan = plan(
                &lines,
                &events(&["Stop"]),
                4,
                &VoiceParams::default(),
                Path::new("sounds"),
            );
            let texts: HashSet<&str> = plan.jobs.iter().map(|j| j.text.as_str()).collect();
            assert_eq!(texts.len(), plan.jobs.len(), "duplicate line drawn");
        }
    }

    #[test]
    fn lineless_event_is_skipped_not_failed() {
        let lines = line_set(&[("Stop", &["a"])]);
        let plan = plan(
            &lines,
            &events(&["Stop", "Notification"]),
            3,
            &VoiceParams::default(),
            Path::new("sounds"),
        );
        assert_eq!(plan.jobs.len(), 1);
        assert_eq!(
            plan.skips,
            [SkipNotice {
                event: "Notification".to_owned(),
                reason: "no lines for this event".to_owned(),
            }]
        );
    }

    #[test]
    fn zero_or_negative_count_plans_nothing() {
        let lines = line_set(&[("Stop", &["a", "b"])]);
        for count in [0, -1, -7] {
            let plan = plan(
                &lines,
                &events(&["Stop", "Missing"]),
                count,
                &VoiceParams::default(),
                Path::new("sounds"),
            );
            assert!(plan.jobs.is_empty(), "count {count} planned jobs");
            assert!(plan.skips.is_empty(), "count {count} recorded skips");
        }
    }

    #[test]
    fn ordinals_are_one_based_and_name_destinations() {
        let lines = line_set(&[("Stop", &["a", "b", "c"])]);
        let plan = plan(
            &lines,
            &events(&["Stop"]),
            3,
            &VoiceParams::default(),
            Path::new("/tmp/sounds"),
        );
        let ordinals: Vec<usize> = plan.jobs.iter().map(|j| j.ordinal).collect();
        assert_eq!(ordinals, [1, 2, 3]);
        for job in &plan.jobs {
            assert_eq!(
                job.dest,
                Path::new("/tmp/sounds")
                    .join("Stop")
                    .join(format!("voice_{}.wav", job.ordinal))
            );
        }
    }

    #[test]
    fn events_are_planned_in_request_order() {
        let lines = line_set(&[("Stop", &["a"]), ("SessionStart", &["b"])]);
        let plan = plan(
            &lines,
            &events(&["SessionStart", "Stop"]),
            1,
            &VoiceParams::default(),
            Path::new("sounds"),
        );
        let order: Vec<&str> = plan.jobs.iter().map(|j| j.event.as_str()).collect();
        assert_eq!(order, ["SessionStart", "Stop"]);
    }
}
