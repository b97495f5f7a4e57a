//! Generate handler - runs the full pipeline for one invocation.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use voxline_core::catalog::{EventLineSet, LineCatalog};
use voxline_core::dispatch::Dispatcher;
use voxline_core::{plan, presets, report};
use voxline_engine::edge::{EDGE_TTS_PROGRAM, EdgeTtsSynthesizer};
use voxline_engine::ffmpeg::{FFMPEG_PROGRAM, FfmpegConverter};

use crate::error::CliError;
use crate::parser::Cli;
use crate::resolve::{parse_events, resolve_voice};

/// Execute a generation run.
///
/// Fatal errors (usage, malformed line file, unresolvable output root)
/// abort before any synthesis work. Per-job failures do not: they land in
/// the report, and only a run that planned jobs yet wrote nothing at all
/// is an error.
pub async fn execute(cli: &Cli) -> Result<(), CliError> {
    let events = cli.events.as_deref().map(parse_events).unwrap_or_default();
    if events.is_empty() {
        return Err(CliError::Usage(
            "--events is required (e.g. --events Stop,PermissionRequest)".to_owned(),
        ));
    }

    let preset = match cli.preset.as_deref() {
        Some(name) => Some(presets::find(name).ok_or_else(|| {
            CliError::Usage(format!(
                "unknown preset '{name}' (available: {})",
                presets::names().collect::<Vec<_>>().join(", ")
            ))
        })?),
        None => None,
    };
    let params = resolve_voice(cli.voice.as_deref(), preset, &cli.pitch, &cli.rate);

    // A lines file fully replaces the built-in catalog, --tone included.
    let catalog = LineCatalog::builtin();
    let loaded;
    let (lines, tone_label): (&EventLineSet, String) = match &cli.lines_file {
        Some(path) => {
            loaded = EventLineSet::load(path)?;
            (&loaded, format!("custom ({})", path.display()))
        }
        None => {
            let selection = catalog.resolve(&cli.tone);
            if selection.substituted {
                println!(
                    "Unknown tone '{}', using '{}' instead.",
                    cli.tone, selection.tone
                );
            }
            (selection.lines, selection.tone)
        }
    };

    let sounds_root = match &cli.output_dir {
        Some(dir) => dir.clone(),
        None => default_sounds_root()?,
    };

    let planned = plan::plan(lines, &events, cli.count, &params, &sounds_root);
    info!(
        jobs = planned.jobs.len(),
        skips = planned.skips.len(),
        root = %sounds_root.display(),
        "plan ready"
    );

    println!("Generating voice lines...");
    println!(
        "  Voice: {}  |  Pitch: {}  |  Rate: {}  |  Tone: {}",
        params.voice, params.pitch, params.rate, tone_label
    );
    if !planned.jobs.is_empty() {
        if !EdgeTtsSynthesizer::is_available() {
            println!(
                "Note: '{EDGE_TTS_PROGRAM}' was not found on PATH; synthesis will fail \
                 (install with: pip install edge-tts)."
            );
        }
        if !FfmpegConverter::is_available() {
            println!("Note: '{FFMPEG_PROGRAM}' was not found on PATH; keeping raw mp3 output.");
        }
    }
    println!();

    let had_jobs = !planned.jobs.is_empty();
    let dispatcher = Dispatcher::new(
        Arc::new(EdgeTtsSynthesizer::new()),
        Arc::new(FfmpegConverter::new()),
    );
    let outcomes = dispatcher.dispatch(planned.jobs).await;

    print!("{}", report::render(&events, &outcomes, &planned.skips));

    if had_jobs && !outcomes.iter().any(voxline_core::JobOutcome::is_written) {
        return Err(CliError::NothingProduced);
    }
    Ok(())
}

/// The fixed sounds root: a `sounds` directory next to the executable.
fn default_sounds_root() -> Result<PathBuf, CliError> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map_or_else(|| PathBuf::from("sounds"), |dir| dir.join("sounds")))
}
