//! FFI intent API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the six list intents and session bootstrap to Dart via FRB.
//! - Own the single process-wide `ListSession`.
//! - Return a full re-render with every successful intent.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Indexes received from Dart are canonical (`data-item-index`).
//! - Failed intents return `ok=false` and leave the session unchanged.

use log::Level;
use shoplist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, Intent, ListEvent,
    ListSession, RenderRow, RenderedView,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

static SESSION: OnceLock<Mutex<ListSession>> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One rendered row as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRowView {
    /// Canonical index to send back with row-level intents.
    pub canonical_index: u32,
    /// Stable item ID in string form.
    pub item_id: String,
    pub name: String,
    pub checked: bool,
    pub editable: bool,
}

/// Response envelope for every list call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewResponse {
    /// Whether the call succeeded.
    pub ok: bool,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
    /// Markup replacing the mount point; empty on failure.
    pub markup: String,
    /// Rows in display order; empty on failure.
    pub rows: Vec<ListRowView>,
}

impl ListViewResponse {
    fn rendered(message: impl Into<String>, view: RenderedView) -> Self {
        let rows = match view
            .rows
            .into_iter()
            .map(to_row_view)
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(rows) => rows,
            Err(err) => return Self::failure(format!("render failed: {err}")),
        };
        Self {
            ok: true,
            message: message.into(),
            markup: view.markup,
            rows,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            markup: String::new(),
            rows: Vec::new(),
        }
    }
}

/// Starts a fresh session, replacing any existing one.
///
/// `config_json = None` uses the default seed list and reject-empty policy.
///
/// # FFI contract
/// - Never panics; invalid config keeps the previous session.
#[flutter_rust_bridge::frb(sync)]
pub fn list_init(config_json: Option<String>) -> ListViewResponse {
    let session = match config_json.as_deref().map(str::trim) {
        None | Some("") => ListSession::new(),
        Some(raw) => match ListSession::from_json_config(raw) {
            Ok(session) => session,
            Err(err) => return ListViewResponse::failure(format!("list_init failed: {err}")),
        },
    };

    let mut guard = lock_session();
    *guard = session;
    ListViewResponse::rendered("Session started.", guard.current_view())
}

/// Renders the current session without changing it.
#[flutter_rust_bridge::frb(sync)]
pub fn list_render() -> ListViewResponse {
    ListViewResponse::rendered("Rendered.", lock_session().current_view())
}

/// Handles the add-item form submit.
#[flutter_rust_bridge::frb(sync)]
pub fn list_add_item(name: String) -> ListViewResponse {
    dispatch(Intent::AddItem { name })
}

/// Handles the check button of the row at `canonical_index`.
#[flutter_rust_bridge::frb(sync)]
pub fn list_toggle_checked(canonical_index: u32) -> ListViewResponse {
    dispatch(Intent::ToggleChecked {
        canonical_index: canonical_index as usize,
    })
}

/// Handles the delete button of the row at `canonical_index`.
#[flutter_rust_bridge::frb(sync)]
pub fn list_delete_item(canonical_index: u32) -> ListViewResponse {
    dispatch(Intent::DeleteItem {
        canonical_index: canonical_index as usize,
    })
}

/// Handles the edit form submit of the row at `canonical_index`.
#[flutter_rust_bridge::frb(sync)]
pub fn list_rename_item(canonical_index: u32, new_name: String) -> ListViewResponse {
    dispatch(Intent::RenameItem {
        canonical_index: canonical_index as usize,
        new_name,
    })
}

/// Handles the hide-checked checkbox.
#[flutter_rust_bridge::frb(sync)]
pub fn list_toggle_hide_checked() -> ListViewResponse {
    dispatch(Intent::ToggleHideChecked)
}

/// Handles keyup in the search field. Pass an empty string to clear.
#[flutter_rust_bridge::frb(sync)]
pub fn list_set_search_term(term: String) -> ListViewResponse {
    dispatch(Intent::SetSearchTerm { term })
}

fn dispatch(intent: Intent) -> ListViewResponse {
    apply_intent(&mut lock_session(), intent)
}

fn apply_intent(session: &mut ListSession, intent: Intent) -> ListViewResponse {
    let label = intent.label();
    match session.dispatch(intent) {
        Ok(view) => ListViewResponse::rendered(format!("{label} applied."), view),
        Err(err) => ListViewResponse::failure(format!("{label} failed: {err}")),
    }
}

fn lock_session() -> MutexGuard<'static, ListSession> {
    let session = SESSION.get_or_init(|| Mutex::new(ListSession::new()));
    session.lock().unwrap_or_else(|poisoned| {
        ListEvent::new("ffi", "session_lock_poisoned")
            .with("status", "recovered")
            .emit(Level::Warn);
        poisoned.into_inner()
    })
}

fn to_row_view(row: RenderRow) -> Result<ListRowView, String> {
    let canonical_index = u32::try_from(row.canonical_index).map_err(|_| {
        format!(
            "canonical index {} does not fit the u32 row index",
            row.canonical_index
        )
    })?;
    Ok(ListRowView {
        canonical_index,
        item_id: row.item_id.to_string(),
        name: row.name,
        checked: row.checked,
        editable: row.editable,
    })
}
