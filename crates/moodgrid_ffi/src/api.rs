//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the emotion store, language preference and logging to Dart.
//! - Translate core values into flat, bridge-friendly view structs.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Store calls made before `store_init` return a failure envelope.
//! - One store per process; later `store_init` calls are no-ops.

use log::warn;
use moodgrid_core::{
    core_version as core_version_inner, default_log_level, init_logging as init_logging_inner,
    load_language, ping as ping_inner, save_language, Emotion, EmotionMatrix, EmotionRecord, EmotionStore,
    KeyValueStore, Language, MemoryKeyValueStore, SqliteKeyValueStore, StorageKeys, StoreConfig,
    StoreSlot,
};
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

const STORE_DB_FILE_NAME: &str = "moodgrid.sqlite3";
const DB_PATH_ENV: &str = "MOODGRID_DB_PATH";

static STORE: StoreSlot = StoreSlot::new();
static ADAPTER: OnceLock<Arc<dyn KeyValueStore>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive);
///   blank selects the build default (`debug` in debug, `info` in release).
/// - `log_dir`: absolute directory path where rolling logs are written.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(resolve_log_level(&level), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

fn resolve_log_level(level: &str) -> &str {
    if level.trim().is_empty() {
        default_log_level()
    } else {
        level
    }
}

/// One grid cell as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionView {
    pub x: i32,
    pub y: i32,
    pub label: String,
    pub color: String,
}

/// Grid snapshot as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixView {
    pub x_axis: String,
    pub y_axis: String,
    /// Row-major as stored, 25 entries.
    pub emotions: Vec<EmotionView>,
}

/// One history entry as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView {
    pub id: String,
    /// Epoch milliseconds, UTC.
    pub timestamp_ms: i64,
    pub emotion: EmotionView,
    pub notes: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreActionResponse {
    /// Whether the operation ran.
    pub ok: bool,
    /// Whether the operation changed state (false for no-op updates/deletes).
    pub changed: bool,
    /// Created record, for `record_emotion` only.
    pub record: Option<RecordView>,
    /// Human-readable diagnostics message.
    pub message: String,
}

impl StoreActionResponse {
    fn done(changed: bool, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            changed,
            record: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            changed: false,
            record: None,
            message: message.into(),
        }
    }
}

/// Opens the store once per process.
///
/// `db_path = None` uses `MOODGRID_DB_PATH` or a file in the temp dir. When
/// the database cannot be opened the store still becomes ready, backed by
/// memory only, and the message says so.
///
/// # FFI contract
/// - Sync call; performs file-system work on first call.
/// - Idempotent; later calls report the existing store.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn store_init(db_path: Option<String>) -> StoreActionResponse {
    let mut message = "Store ready.".to_string();
    let initialized = STORE.initialize(|| {
        let path = resolve_db_path(db_path);
        let adapter: Arc<dyn KeyValueStore> = match SqliteKeyValueStore::open(&path) {
            Ok(store) => Arc::new(store),
            Err(err) => {
                warn!(
                    "event=store_open module=ffi status=fallback backend=memory error={}",
                    err
                );
                message = format!("Storage unavailable ({err}); changes will not persist.");
                Arc::new(MemoryKeyValueStore::new())
            }
        };
        let _ = ADAPTER.set(Arc::clone(&adapter));
        EmotionStore::open(adapter, StoreConfig::default())
    });

    if initialized {
        StoreActionResponse::done(true, message)
    } else {
        StoreActionResponse::done(false, "Store already initialized.")
    }
}

/// Returns `initializing` or `ready`.
#[flutter_rust_bridge::frb(sync)]
pub fn store_state() -> String {
    STORE.state().as_str().to_string()
}

/// Returns the current grid, or `None` before `store_init`.
#[flutter_rust_bridge::frb(sync)]
pub fn store_matrix() -> Option<MatrixView> {
    STORE
        .with_store(|store| to_matrix_view(store.matrix()))
        .ok()
}

/// Returns the record list newest first; empty before `store_init`.
#[flutter_rust_bridge::frb(sync)]
pub fn store_records() -> Vec<RecordView> {
    STORE
        .with_store(|store| store.records().iter().map(to_record_view).collect())
        .unwrap_or_default()
}

/// Edits label and color of one grid cell.
///
/// Out-of-grid coordinates succeed with `changed = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn update_emotion(x: i32, y: i32, label: String, color: String) -> StoreActionResponse {
    let (Some(x), Some(y)) = (to_coordinate(x), to_coordinate(y)) else {
        return StoreActionResponse::done(false, "No matching cell.");
    };
    match STORE.with_store(|store| store.update_emotion(x, y, label, color)) {
        Ok(true) => StoreActionResponse::done(true, "Emotion updated."),
        Ok(false) => StoreActionResponse::done(false, "No matching cell."),
        Err(err) => StoreActionResponse::failure(format!("update_emotion failed: {err}")),
    }
}

/// Records `emotion` with `notes` and returns the created record.
#[flutter_rust_bridge::frb(sync)]
pub fn record_emotion(emotion: EmotionView, notes: String) -> StoreActionResponse {
    let Some(emotion) = from_emotion_view(&emotion) else {
        return StoreActionResponse::failure("record_emotion failed: coordinate out of range");
    };
    match STORE.with_store(|store| store.record_emotion(&emotion, notes)) {
        Ok(record) => StoreActionResponse {
            record: Some(to_record_view(&record)),
            ..StoreActionResponse::done(true, "Emotion recorded.")
        },
        Err(err) => StoreActionResponse::failure(format!("record_emotion failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_emotion_record(id: String) -> StoreActionResponse {
    match STORE.with_store(|store| store.delete_emotion_record(id.as_str())) {
        Ok(true) => StoreActionResponse::done(true, "Record deleted."),
        Ok(false) => StoreActionResponse::done(false, "Record not found."),
        Err(err) => StoreActionResponse::failure(format!("delete_emotion_record failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn reset_emotion_matrix() -> StoreActionResponse {
    match STORE.with_store(|store| store.reset_emotion_matrix()) {
        Ok(()) => StoreActionResponse::done(true, "Emotion grid reset."),
        Err(err) => StoreActionResponse::failure(format!("reset_emotion_matrix failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn clear_emotion_records() -> StoreActionResponse {
    match STORE.with_store(|store| store.clear_emotion_records()) {
        Ok(()) => StoreActionResponse::done(true, "Records cleared."),
        Err(err) => StoreActionResponse::failure(format!("clear_emotion_records failed: {err}")),
    }
}

/// Returns the stored language code (`es` before `store_init`).
#[flutter_rust_bridge::frb(sync)]
pub fn language_get() -> String {
    match ADAPTER.get() {
        Some(adapter) => load_language(adapter.as_ref(), &StorageKeys::default().language)
            .code()
            .to_string(),
        None => Language::default().code().to_string(),
    }
}

/// Persists the language code; unknown codes are rejected.
#[flutter_rust_bridge::frb(sync)]
pub fn language_set(code: String) -> StoreActionResponse {
    let Some(language) = Language::parse(code.as_str()) else {
        return StoreActionResponse::failure(format!("unsupported language `{}`", code.trim()));
    };
    let Some(adapter) = ADAPTER.get() else {
        return StoreActionResponse::failure("language_set failed: store not initialized");
    };
    match save_language(adapter.as_ref(), &StorageKeys::default().language, language) {
        Ok(()) => StoreActionResponse::done(true, "Language saved."),
        Err(err) => StoreActionResponse::failure(format!("language_set failed: {err}")),
    }
}

fn resolve_db_path(explicit: Option<String>) -> PathBuf {
    let from_env = std::env::var(DB_PATH_ENV).ok();
    explicit
        .into_iter()
        .chain(from_env)
        .map(|raw| raw.trim().to_string())
        .find(|raw| !raw.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(STORE_DB_FILE_NAME))
}

fn to_coordinate(value: i32) -> Option<u8> {
    u8::try_from(value).ok()
}

fn from_emotion_view(view: &EmotionView) -> Option<Emotion> {
    Some(Emotion::new(
        to_coordinate(view.x)?,
        to_coordinate(view.y)?,
        view.label.clone(),
        view.color.clone(),
    ))
}

fn to_emotion_view(emotion: &Emotion) -> EmotionView {
    EmotionView {
        x: i32::from(emotion.x),
        y: i32::from(emotion.y),
        label: emotion.label.clone(),
        color: emotion.color.clone(),
    }
}

fn to_matrix_view(matrix: &EmotionMatrix) -> MatrixView {
    MatrixView {
        x_axis: matrix.x_axis.clone(),
        y_axis: matrix.y_axis.clone(),
        emotions: matrix.emotions.iter().map(to_emotion_view).collect(),
    }
}

fn to_record_view(record: &EmotionRecord) -> RecordView {
    RecordView {
        id: record.id.clone(),
        timestamp_ms: record.timestamp.timestamp_millis(),
        emotion: to_emotion_view(&record.emotion),
        notes: record.notes.clone(),
    }
}
