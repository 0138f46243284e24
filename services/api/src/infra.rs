use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::debug;
use trampos::config::DEFAULT_MAX_SESSIONS;
use trampos::quiz::{
    MemorySnapshotStore, RepositoryError, SessionId, SessionRecord, SessionRepository,
    SnapshotError, SnapshotKey, SnapshotStore,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Session records kept in memory, evicting the oldest once `capacity` is reached.
#[derive(Clone)]
pub(crate) struct InMemorySessionRepository {
    records: Arc<Mutex<SessionTable>>,
}

struct SessionTable {
    records: HashMap<SessionId, SessionRecord>,
    order: VecDeque<SessionId>,
    capacity: usize,
}

impl InMemorySessionRepository {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Arc::new(Mutex::new(SessionTable {
                records: HashMap::new(),
                order: VecDeque::new(),
                capacity: capacity.max(1),
            })),
        }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_SESSIONS)
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.records.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        while guard.records.len() >= guard.capacity {
            let Some(oldest) = guard.order.pop_front() else {
                break;
            };
            guard.records.remove(&oldest);
            debug!(session_id = %oldest, "session evicted");
        }
        guard.order.push_back(record.id.clone());
        guard.records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update_with<F>(&self, id: &SessionId, edit: F) -> Result<SessionRecord, RepositoryError>
    where
        F: FnOnce(&mut SessionRecord),
    {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let record = guard.records.get_mut(id).ok_or(RepositoryError::NotFound)?;
        edit(record);
        Ok(record.clone())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.records.get(id).cloned())
    }
}

/// Admin snapshots stored as `<key>.json` files under one directory.
#[derive(Debug, Clone)]
pub(crate) struct FileSnapshotStore {
    root: PathBuf,
}

impl FileSnapshotStore {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, key: SnapshotKey) -> PathBuf {
        self.root.join(format!("{}.json", key.as_str()))
    }
}

fn unavailable(path: &Path, err: std::io::Error) -> SnapshotError {
    SnapshotError::Unavailable(format!("{}: {err}", path.display()))
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self, key: SnapshotKey) -> Result<Option<Value>, SnapshotError> {
        let path = self.path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(unavailable(&path, err)),
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| SnapshotError::Decode {
                key,
                message: err.to_string(),
            })
    }

    fn save(&self, key: SnapshotKey, value: Value) -> Result<(), SnapshotError> {
        fs::create_dir_all(&self.root).map_err(|err| unavailable(&self.root, err))?;
        let path = self.path(key);
        let staging = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(&value).map_err(|err| SnapshotError::Encode {
            key,
            message: err.to_string(),
        })?;
        fs::write(&staging, bytes).map_err(|err| unavailable(&staging, err))?;
        fs::rename(&staging, &path).map_err(|err| unavailable(&path, err))
    }

    fn remove(&self, key: SnapshotKey) -> Result<(), SnapshotError> {
        let path = self.path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(unavailable(&path, err)),
        }
    }
}

/// Snapshot persistence chosen from `TRAMPOS_DATA_DIR`.
pub(crate) enum SnapshotBackend {
    Memory(MemorySnapshotStore),
    Files(FileSnapshotStore),
}

impl SnapshotBackend {
    pub(crate) fn from_data_dir(data_dir: Option<PathBuf>) -> Self {
        match data_dir {
            Some(root) => Self::Files(FileSnapshotStore::new(root)),
            None => Self::Memory(MemorySnapshotStore::new()),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Memory(_) => "in-memory".to_string(),
            Self::Files(files) => files.root().display().to_string(),
        }
    }
}

impl SnapshotStore for SnapshotBackend {
    fn load(&self, key: SnapshotKey) -> Result<Option<Value>, SnapshotError> {
        match self {
            Self::Memory(store) => store.load(key),
            Self::Files(store) => store.load(key),
        }
    }

    fn save(&self, key: SnapshotKey, value: Value) -> Result<(), SnapshotError> {
        match self {
            Self::Memory(store) => store.save(key, value),
            Self::Files(store) => store.save(key, value),
        }
    }

    fn remove(&self, key: SnapshotKey) -> Result<(), SnapshotError> {
        match self {
            Self::Memory(store) => store.remove(key),
            Self::Files(store) => store.remove(key),
        }
    }
}
