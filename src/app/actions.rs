//! User action handling

use crate::config::settings::Settings;

/// User-initiated actions on a resource table page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    // Row cursor
    CursorUp,
    CursorDown,
    CursorTop,
    CursorBottom,

    // Selection
    ToggleRow,
    ToggleAll,

    // Sorting
    FocusPrevColumn,
    FocusNextColumn,
    Sort,

    // Pagination
    PrevPage,
    NextPage,
    GrowPageSize,
    ShrinkPageSize,

    // Filtering
    OpenSearch,
    ClearSearch,
    CycleCategory,

    // Records
    Open,
    Reload,
    Create,
    Edit,
    Export,
}

/// Result of processing a key in a page
#[derive(Debug, Clone)]
pub enum ActionResult {
    Continue,
    /// Transient message for the status bar
    Notify(String),
    /// New settings to apply, and whether to write them to disk
    ApplySettings { settings: Box<Settings>, save: bool },
}
