//! Per-window mapping table loading, validation, and staleness tracking.
//!
//! A mapping table is a JSON object translating source path prefixes to
//! target roots, used to compute paths as they would appear on another
//! machine. The file backing it is chosen per window: an explicit override
//! set by the user wins, then the window's project-level setting, then the
//! global setting. The cache keeps one table per window identity and
//! reloads it when the effective file path or its modification time
//! changes.

use log::Level;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

use crate::telemetry::{LogMessage, log_with_context};
use crate::window::{WindowContext, WindowId};

/// Errors raised while loading a mapping table from its backing file.
///
/// These only surface to callers on user-initiated refreshes (setting or
/// clearing an override); automatic refreshes log and keep the previous
/// table instead.
#[derive(Debug, Error)]
pub enum MapError {
    /// The backing file could not be stat'd, before or during a refresh
    #[error("failed to stat map file {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file could not be read
    #[error("failed to read map file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a JSON object of string-to-string entries
    #[error("map file {path} is not a valid JSON mapping: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A mapping key ends with a slash, which the prefix matcher forbids
    #[error("map file {path} contains key {key:?} ending with a slash")]
    SlashKey { path: PathBuf, key: String },
}

/// A validated mapping from source path prefixes to target roots.
///
/// Keys may be absolute (leading `/`) or relative to a project root, and
/// never end with `/`; that invariant is checked at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapTable {
    entries: BTreeMap<String, String>,
}

impl MapTable {
    /// Parses and validates mapping-file content.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Parse`] when `content` is not a JSON object with
    /// string values, and [`MapError::SlashKey`] when any key ends with `/`.
    pub fn parse(content: &str, path: &Path) -> Result<Self, MapError> {
        let entries: BTreeMap<String, String> =
            serde_json::from_str(content).map_err(|source| MapError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        for key in entries.keys() {
            if key.ends_with('/') {
                return Err(MapError::SlashKey {
                    path: path.to_path_buf(),
                    key: key.clone(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Looks up the target root for a mapping key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterates over the mapping keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Global (user-level) settings the cache falls back to when a window has
/// neither an override nor a project-level map-file path.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub map_file: Option<String>,
}

/// Cached mapping state for one window. Created lazily with every field
/// absent; `overridden` pins `path` against settings changes.
#[derive(Debug, Default)]
struct WindowState {
    path: Option<String>,
    mtime: Option<SystemTime>,
    table: Option<MapTable>,
    overridden: bool,
}

/// Per-window mapping table cache.
///
/// Constructed once per process and injected into the resolver; window
/// identity is an opaque token supplied by the caller, so no global state
/// is involved.
#[derive(Debug, Default)]
pub struct MapFileCache {
    settings: Settings,
    windows: HashMap<WindowId, WindowState>,
    loads: u64,
}

impl MapFileCache {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            windows: HashMap::new(),
            loads: 0,
        }
    }

    /// Returns the current mapping table for `window`, refreshing it first
    /// when the effective backing file path or its modification time has
    /// changed since the last access.
    ///
    /// Refresh failures on this path are best-effort: they are logged and
    /// the previously loaded table (if any) stays in place, so a transient
    /// problem with the map file never interrupts an interactive command.
    pub fn contents(&mut self, window: &WindowContext) -> Option<&MapTable> {
        let Self {
            settings,
            windows,
            loads,
        } = self;
        let state = windows.entry(window.id).or_default();

        // decide when to refresh based on the effective file path
        let mut refresh = false;
        if !state.overridden {
            let new_path = effective_path(window, settings);
            if new_path != state.path {
                state.path = new_path;
                refresh = true;
            }
        }

        // decide based on the modification time
        if !refresh {
            if let Some(path) = &state.path {
                match modified_time(Path::new(path)) {
                    Ok(mtime) => {
                        if state.mtime != Some(mtime) {
                            refresh = true;
                        }
                    }
                    Err(err) => {
                        // file vanished between checks: same policy as a
                        // failed load, keep the last-known-good table
                        warn_refresh_failed(path, &err);
                        return state.table.as_ref();
                    }
                }
            }
        }

        if refresh {
            if let Err(err) = refresh_state(state, loads) {
                let path = state.path.as_deref().unwrap_or("<none>");
                warn_refresh_failed(path, &err);
            }
        }

        state.table.as_ref()
    }

    /// Pins (or, with `None`, unpins) the mapping file path for `window`
    /// and refreshes immediately.
    ///
    /// Clearing the override recomputes the settings-derived path right
    /// away. This is the one user-initiated load path, so a refresh
    /// failure unsets the table and returns the error for the caller to
    /// report.
    pub fn set_override(
        &mut self,
        window: &WindowContext,
        path: Option<String>,
    ) -> Result<(), MapError> {
        let Self {
            settings,
            windows,
            loads,
        } = self;
        let state = windows.entry(window.id).or_default();

        match path {
            None => {
                state.overridden = false;
                state.path = effective_path(window, settings);
            }
            Some(new_path) => {
                state.overridden = true;
                state.path = Some(new_path);
            }
        }

        match refresh_state(state, loads) {
            Ok(()) => Ok(()),
            Err(err) => {
                state.table = None;
                Err(err)
            }
        }
    }

    /// Number of successful table loads performed so far. Staleness tests
    /// use this to observe that unchanged files are not re-parsed.
    pub fn load_count(&self) -> u64 {
        self.loads
    }
}

/// Resolution order for the backing file path when no override is pinned:
/// the window's project-level setting, then the global setting. Empty
/// strings count as absent.
fn effective_path(window: &WindowContext, settings: &Settings) -> Option<String> {
    let project = window.map_file.as_deref().filter(|p| !p.is_empty());
    let global = settings.map_file.as_deref().filter(|p| !p.is_empty());
    project.or(global).map(str::to_string)
}

fn modified_time(path: &Path) -> Result<SystemTime, MapError> {
    let stat = |source| MapError::Stat {
        path: path.to_path_buf(),
        source,
    };
    fs::metadata(path).map_err(stat)?.modified().map_err(stat)
}

/// Reloads the table behind `state` from its backing file.
///
/// An absent path clears the table without error. The modification time is
/// recorded before parsing, so a load failure does not retry until the
/// file changes again.
fn refresh_state(state: &mut WindowState, loads: &mut u64) -> Result<(), MapError> {
    let Some(path) = state.path.clone() else {
        state.table = None;
        state.mtime = None;
        return Ok(());
    };

    let path = Path::new(&path);
    state.mtime = Some(modified_time(path)?);

    let content = fs::read_to_string(path).map_err(|source| MapError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let table = MapTable::parse(&content, path)?;

    log_with_context(
        Level::Debug,
        LogMessage {
            message: "Map file loaded".to_string(),
            module: "mapfile",
            context: Some(vec![
                ("path", path.display().to_string()),
                ("entries", table.len().to_string()),
            ]),
        },
    );

    state.table = Some(table);
    *loads += 1;
    Ok(())
}

fn warn_refresh_failed(path: &str, err: &MapError) {
    log_with_context(
        Level::Warn,
        LogMessage {
            message: format!("Map file refresh failed: {err}"),
            module: "mapfile",
            context: Some(vec![("path", path.to_string())]),
        },
    );
}

#[cfg(test)]
mod tests;
