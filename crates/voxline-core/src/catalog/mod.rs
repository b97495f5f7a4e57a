//! Tone catalog: built-in voice-line tables and external overrides.
//!
//! A [`LineCatalog`] maps personality tone identifiers to an
//! [`EventLineSet`] each: the candidate lines per lifecycle event. The
//! built-in catalog is static configuration; an external JSON file with the
//! same event-to-lines shape can replace it wholesale for one run via
//! [`EventLineSet::load`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

mod tones;

/// Tone substituted when an unknown tone identifier is requested.
pub const DEFAULT_TONE: &str = "sarcastic";

/// Errors from loading an external line-catalog file.
///
/// Both variants are fatal for the run: a partially usable catalog is never
/// constructed.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The file could not be read at all.
    #[error("Cannot read line file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a JSON map of event name to list of line strings.
    #[error("Line file {path} is not a map of event names to lists of lines: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Candidate lines per event, for one tone or one override file.
///
/// Line order within an event is enumeration order only; it carries no
/// priority. Duplicate lines are not forbidden.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(transparent)]
pub struct EventLineSet(BTreeMap<String, Vec<String>>);

impl EventLineSet {
    /// Build a line set from an explicit event-to-lines map.
    pub fn new(events: BTreeMap<String, Vec<String>>) -> Self {
        Self(events)
    }

    /// Load a line set from a JSON file shaped like
    /// `{"Stop": ["line", ...], ...}`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| CatalogError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Candidate lines for `event`; empty when the event is unknown.
    pub fn lines_for(&self, event: &str) -> &[String] {
        self.0.get(event).map_or(&[], Vec::as_slice)
    }

    /// Event names with at least one line, in enumeration order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, lines)| !lines.is_empty())
            .map(|(event, _)| event.as_str())
    }
}

/// The tone actually used for a run, after unknown-tone fallback.
#[derive(Debug)]
pub struct ToneSelection<'a> {
    /// Tone identifier the lines belong to.
    pub tone: String,

    /// Candidate lines for that tone.
    pub lines: &'a EventLineSet,

    /// True when the requested tone was unknown and [`DEFAULT_TONE`] was
    /// substituted. Callers surface this to the user; it is never silent.
    pub substituted: bool,
}

/// Built-in mapping from personality tone to event lines.
#[derive(Debug)]
pub struct LineCatalog {
    tones: BTreeMap<String, EventLineSet>,
}

impl LineCatalog {
    /// The built-in tone tables.
    pub fn builtin() -> Self {
        let tones = tones::BUILTIN
            .iter()
            .map(|(tone, events)| {
                let events = events
                    .iter()
                    .map(|(event, lines)| {
                        ((*event).to_owned(), lines.iter().map(|l| (*l).to_owned()).collect())
                    })
                    .collect();
                ((*tone).to_owned(), EventLineSet::new(events))
            })
            .collect();
        Self { tones }
    }

    /// Tone identifiers, in enumeration order.
    pub fn tone_names(&self) -> impl Iterator<Item = &str> {
        self.tones.keys().map(String::as_str)
    }

    /// Lines for an exact tone identifier, if present.
    pub fn get(&self, tone: &str) -> Option<&EventLineSet> {
        self.tones.get(tone)
    }

    /// Resolve a requested tone, substituting [`DEFAULT_TONE`] when the
    /// identifier is unknown rather than failing the run.
    pub fn resolve(&self, requested: &str) -> ToneSelection<'_> {
        match self.tones.get(requested) {
            Some(lines) => ToneSelection {
                tone: requested.to_owned(),
                lines,
                substituted: false,
            },
            None => ToneSelection {
                tone: DEFAULT_TONE.to_owned(),
                lines: self
                    .tones
                    .get(DEFAULT_TONE)
                    .expect("builtin catalog defines the default tone"),
                substituted: true,
            },
        }
    }
}
