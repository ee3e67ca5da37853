//! Host-facing window, view, and caret data model.
//!
//! The host editor owns windows, tab groups, views, and selections; this
//! crate only reads them. The structs here are the snapshot the host hands
//! over when invoking a command or a resolution.

use serde::{Deserialize, Serialize};

/// Opaque identity of a host window, used to key per-window cache state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

/// A text cursor position. Rows are 0-based; commands that expose line
/// numbers convert to 1-based themselves. Columns play no part in any
/// resolution, so the snapshot does not carry them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caret {
    pub row: u64,
}

/// A single open view (tab). A view backed by an unsaved buffer has no file.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct View {
    /// Absolute path of the file behind this view, if any
    pub file: Option<String>,

    /// Position of the primary cursor, absent when the view has no selection
    pub caret: Option<Caret>,
}

/// Snapshot of one host window.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WindowContext {
    /// Identity used to key cached mapping-table state
    pub id: WindowId,

    /// Project root folders open in this window, in the host's order
    pub folders: Vec<String>,

    /// Project-level map-file setting, taking precedence over the global one
    pub map_file: Option<String>,

    /// Open views per tab group, in tab order
    pub groups: Vec<Vec<View>>,

    /// The view holding input focus, used by cursor-context commands
    pub active: Option<View>,
}

impl WindowContext {
    /// Creates an empty window snapshot with the given identity.
    pub fn new(id: WindowId) -> Self {
        Self {
            id,
            folders: Vec::new(),
            map_file: None,
            groups: Vec::new(),
            active: None,
        }
    }

    /// Returns the view at the given tab coordinates, if present.
    pub fn view_at(&self, group: usize, index: usize) -> Option<&View> {
        self.groups.get(group).and_then(|views| views.get(index))
    }
}
