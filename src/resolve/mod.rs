//! Resolution modes and the path resolver.
//!
//! Given an absolute file path and a [`ResolutionMode`], the resolver
//! produces the string to copy: the bare file name, the path relative to
//! the most specific project root, the absolute path unchanged, or the
//! path translated through the window's mapping table. A `None` result
//! means "nothing to copy" and is how callers decide to disable an action;
//! resolution itself never fails with an error.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::mapfile::{MapError, MapFileCache, Settings};
use crate::prefix::select_best_prefix;
use crate::window::WindowContext;

/// Output strategy for a resolution request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionMode {
    /// Last path component only
    Name,
    /// Path relative to the most specific matching project root
    Relative,
    /// The input path unchanged
    Absolute,
    /// Path translated through the window's mapping table
    Mapped,
}

/// Resolves paths against a window's project roots and mapping table.
///
/// Owns the injected [`MapFileCache`]; constructing one resolver per
/// process and passing window snapshots in keeps all mapping state
/// explicit.
#[derive(Debug, Default)]
pub struct Resolver {
    cache: MapFileCache,
}

impl Resolver {
    pub fn new(settings: Settings) -> Self {
        Self {
            cache: MapFileCache::new(settings),
        }
    }

    /// Read access to the mapping cache, mainly for its load counter.
    pub fn cache(&self) -> &MapFileCache {
        &self.cache
    }

    /// Pins or clears the window's mapping-file override and refreshes.
    /// See [`MapFileCache::set_override`].
    pub fn set_map_file_override(
        &mut self,
        window: &WindowContext,
        path: Option<String>,
    ) -> Result<(), MapError> {
        self.cache.set_override(window, path)
    }

    /// Resolves `path` under `mode` for the given window.
    ///
    /// An absent or empty `path` yields `None`, which callers interpret as
    /// "feature disabled". `relative` and `mapped` also yield `None` when
    /// no project root or mapping key matches.
    pub fn resolve(
        &mut self,
        window: &WindowContext,
        path: Option<&str>,
        mode: ResolutionMode,
    ) -> Option<String> {
        let path = match path {
            Some(p) if !p.is_empty() => p,
            _ => return None,
        };

        match mode {
            ResolutionMode::Name => Some(file_name(path).to_string()),
            ResolutionMode::Relative => relative_path(window, path),
            // input is assumed to already be absolute
            ResolutionMode::Absolute => Some(path.to_string()),
            ResolutionMode::Mapped => self.mapped(window, path),
        }
    }

    /// Translates `path` through the window's mapping table.
    ///
    /// Absolute mapping keys are matched against the raw path first; only
    /// when none match is the path made project-relative and matched
    /// against the relative keys.
    fn mapped(&mut self, window: &WindowContext, path: &str) -> Option<String> {
        let table = self.cache.contents(window)?;

        let absolute = select_best_prefix(path, table.keys().filter(|k| k.starts_with('/')));
        let (prefix, base) = match absolute {
            Some(prefix) => (prefix, path.to_string()),
            None => {
                let relative = relative_path(window, path)?;
                let prefix =
                    select_best_prefix(&relative, table.keys().filter(|k| !k.starts_with('/')))?;
                (prefix, relative)
            }
        };

        // the winning prefix is slash-normalized; table keys never are
        let key = prefix.strip_suffix('/').unwrap_or(&prefix);
        let target = table.get(key)?;

        let mut suffix = &base[prefix.len()..];
        if let Some(rest) = suffix.strip_prefix('/') {
            suffix = rest;
        }
        Some(join_target(target, suffix))
    }
}

/// Returns the last path component: everything after the final `/`, or the
/// whole string when it contains none.
pub fn file_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Strips the most specific matching project root from `path`.
pub fn relative_path(window: &WindowContext, path: &str) -> Option<String> {
    let prefix = select_best_prefix(path, window.folders.iter())?;
    Some(path[prefix.len()..].to_string())
}

/// Joins a mapping target root and a path suffix with exactly one
/// separator between them.
fn join_target(target: &str, suffix: &str) -> String {
    if target.ends_with('/') {
        format!("{target}{suffix}")
    } else {
        format!("{target}/{suffix}")
    }
}
