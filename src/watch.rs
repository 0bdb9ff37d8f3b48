//! File watching
//!
//! Regenerates output whenever the input file changes. Editors frequently
//! write a file more than once per save, so change bursts are debounced.

use crate::error::Result;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Minimum quiet period between regenerations
const DEBOUNCE: Duration = Duration::from_millis(100);

/// Watch `path` and invoke `on_change` after each content change.
///
/// Runs until the process is interrupted. A failing regeneration is logged
/// and the loop keeps watching, so a transiently malformed input does not
/// end the session.
pub fn watch_file<F>(path: impl AsRef<Path>, mut on_change: F) -> Result<()>
where
    F: FnMut() -> Result<()>,
{
    let path = path.as_ref();
    let (tx, rx) = mpsc::channel::<notify::Result<Event>>();

    let mut watcher = notify::recommended_watcher(tx)?;
    watcher.watch(path, RecursiveMode::NonRecursive)?;

    info!("watching {} for changes", path.display());

    let mut last_run: Option<Instant> = None;

    for event in rx {
        match event {
            Ok(event) if is_content_change(&event.kind) => {
                if let Some(prev) = last_run {
                    if prev.elapsed() < DEBOUNCE {
                        continue;
                    }
                }
                last_run = Some(Instant::now());

                info!("file changed, regenerating types");
                if let Err(e) = on_change() {
                    warn!("regeneration failed: {e}");
                }
            }
            Ok(_) => {}
            Err(e) => warn!("watch error: {e}"),
        }
    }

    Ok(())
}

fn is_content_change(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Modify(_) | EventKind::Create(_))
}
