//! Command surface invoked by host UI bindings.
//!
//! Each command mirrors a host-editor binding: copying the path of a
//! sidebar selection, of a tab identified by group and index, or of the
//! file behind the text cursor (with a line-number suffix), plus setting
//! or clearing the per-window mapping-file override. Every copy command
//! has an `*_enabled` twin performing the same resolution without side
//! effects, so the host can grey out inapplicable menu entries.
//!
//! The host's own services are behind the [`Host`] trait: clipboard
//! access, blocking error notifications, and the input prompt. Resolution
//! misses never reach the host as errors; the command simply does nothing
//! and its `*_enabled` twin reports `false`.

use crate::resolve::{ResolutionMode, Resolver};
use crate::window::WindowContext;

/// Services the host editor provides to commands.
pub trait Host {
    /// Places `text` on the shared system clipboard.
    fn set_clipboard(&mut self, text: &str);

    /// Shows a blocking error notification to the user.
    fn show_error(&mut self, message: &str);

    /// Prompts the user for a line of input. Returns `None` when the
    /// prompt is cancelled; the callback fires at most once.
    fn prompt_input(&mut self, label: &str) -> Option<String>;
}

/// Copies the path of the first selected sidebar entry.
///
/// Returns whether anything was copied.
pub fn copy_selected(
    resolver: &mut Resolver,
    host: &mut dyn Host,
    window: &WindowContext,
    paths: &[String],
    mode: ResolutionMode,
) -> bool {
    copy_path(resolver, host, window, first_path(paths), mode, None)
}

pub fn copy_selected_enabled(
    resolver: &mut Resolver,
    window: &WindowContext,
    paths: &[String],
    mode: ResolutionMode,
) -> bool {
    process_path(resolver, window, first_path(paths), mode).is_some()
}

/// Copies the path of the file open in the tab at `(group, index)`.
pub fn copy_tab(
    resolver: &mut Resolver,
    host: &mut dyn Host,
    window: &WindowContext,
    group: usize,
    index: usize,
    mode: ResolutionMode,
) -> bool {
    copy_path(resolver, host, window, tab_path(window, group, index), mode, None)
}

pub fn copy_tab_enabled(
    resolver: &mut Resolver,
    window: &WindowContext,
    group: usize,
    index: usize,
    mode: ResolutionMode,
) -> bool {
    process_path(resolver, window, tab_path(window, group, index), mode).is_some()
}

/// Copies the path of the file behind the text cursor, suffixed with the
/// 1-based line number of the primary caret.
///
/// Requires an active view with both a file and a caret; without a
/// selection the user is expected to copy via the tab or sidebar context
/// instead.
pub fn copy_at_cursor(
    resolver: &mut Resolver,
    host: &mut dyn Host,
    window: &WindowContext,
    mode: ResolutionMode,
) -> bool {
    let Some(view) = &window.active else {
        return false;
    };
    let Some(caret) = view.caret else {
        return false;
    };
    // carets are 0-based rows, copied line numbers are 1-based
    copy_path(
        resolver,
        host,
        window,
        view.file.as_deref(),
        mode,
        Some(caret.row + 1),
    )
}

pub fn copy_at_cursor_enabled(
    resolver: &mut Resolver,
    window: &WindowContext,
    mode: ResolutionMode,
) -> bool {
    let Some(view) = &window.active else {
        return false;
    };
    if view.caret.is_none() {
        return false;
    }
    process_path(resolver, window, view.file.as_deref(), mode).is_some()
}

/// Sets or clears the per-window mapping-file override.
///
/// With `clear`, the override is dropped and the settings-derived path
/// takes effect again. Otherwise the user is prompted; a cancelled prompt
/// or whitespace-only input leaves everything untouched. Refresh errors
/// are reported through [`Host::show_error`] and never propagate.
pub fn set_map_file(
    resolver: &mut Resolver,
    host: &mut dyn Host,
    window: &WindowContext,
    clear: bool,
) {
    let new_path = if clear {
        None
    } else {
        let Some(input) = host.prompt_input("Path to map file") else {
            return;
        };
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return;
        }
        Some(trimmed.to_string())
    };

    if let Err(err) = resolver.set_map_file_override(window, new_path) {
        host.show_error(&format!("Error setting map path: {err}"));
    }
}

/// Shared tail of every copy command: resolve, suffix the line number,
/// and hand the result to the clipboard. An empty resolution (a path
/// ending in `/` under name mode) counts as a miss, so nothing replaces
/// the user's clipboard content with an empty string.
fn copy_path(
    resolver: &mut Resolver,
    host: &mut dyn Host,
    window: &WindowContext,
    path: Option<&str>,
    mode: ResolutionMode,
    line: Option<u64>,
) -> bool {
    let Some(resolved) = process_path(resolver, window, path, mode) else {
        return false;
    };
    let text = match line {
        Some(line) => format!("{resolved}:{line}"),
        None => resolved,
    };
    host.set_clipboard(&text);
    true
}

fn process_path(
    resolver: &mut Resolver,
    window: &WindowContext,
    path: Option<&str>,
    mode: ResolutionMode,
) -> Option<String> {
    resolver
        .resolve(window, path, mode)
        .filter(|resolved| !resolved.is_empty())
}

fn first_path(paths: &[String]) -> Option<&str> {
    paths.first().map(String::as_str)
}

fn tab_path(window: &WindowContext, group: usize, index: usize) -> Option<&str> {
    window.view_at(group, index)?.file.as_deref()
}
