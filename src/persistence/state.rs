use super::error::Result;
use super::store::KeyValueStore;
use crate::domain::{FocusSession, Task};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

pub const TASKS_KEY: &str = "tasks";
pub const SESSIONS_KEY: &str = "focusSessions";

/// Lists read from the store at startup
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PersistedState {
    pub tasks: Vec<Task>,
    pub sessions: Vec<FocusSession>,
}

/// Load both lists. Missing, unreadable or corrupt values become empty lists.
pub fn load_state(store: &dyn KeyValueStore) -> PersistedState {
    PersistedState {
        tasks: load_list(store, TASKS_KEY),
        sessions: load_list(store, SESSIONS_KEY),
    }
}

fn load_list<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "no stored value, starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!(key, error = %e, "failed to read stored value, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => {
            debug!(key, count = items.len(), "loaded stored list");
            items
        }
        Err(e) => {
            warn!(key, error = %e, "discarding corrupt stored value");
            Vec::new()
        }
    }
}

/// Overwrite both lists wholesale
pub fn save_state(
    store: &mut dyn KeyValueStore,
    tasks: &[Task],
    sessions: &[FocusSession],
) -> Result<()> {
    save_list(store, TASKS_KEY, tasks)?;
    save_list(store, SESSIONS_KEY, sessions)?;
    Ok(())
}

fn save_list<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, items: &[T]) -> Result<()> {
    let json = serde_json::to_string(items)?;
    store.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn sample_session() -> FocusSession {
        FocusSession {
            task: "Write report".to_string(),
            duration: 25,
            timestamp: "2024-03-01T09:25:00.000Z".to_string(),
            completed: true,
        }
    }

    #[test]
    fn test_empty_store_loads_empty_lists() {
        let store = MemoryStore::new();
        assert_eq!(load_state(&store), PersistedState::default());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let tasks = vec![Task::new("Write report".to_string())];
        let sessions = vec![sample_session()];

        save_state(&mut store, &tasks, &sessions).unwrap();
        let loaded = load_state(&store);

        assert_eq!(loaded.tasks, tasks);
        assert_eq!(loaded.sessions, sessions);
    }

    #[test]
    fn test_stored_layout() {
        let mut store = MemoryStore::new();
        save_state(&mut store, &[Task::new("A".to_string())], &[]).unwrap();

        assert_eq!(
            store.get(TASKS_KEY).unwrap().as_deref(),
            Some(r#"[{"text":"A","completed":false}]"#)
        );
        assert_eq!(store.get(SESSIONS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_corrupt_value_is_discarded() {
        let mut store = MemoryStore::new();
        store.set(TASKS_KEY, "{not json").unwrap();
        store
            .set(SESSIONS_KEY, &serde_json::to_string(&vec![sample_session()]).unwrap())
            .unwrap();

        let loaded = load_state(&store);
        assert!(loaded.tasks.is_empty());
        assert_eq!(loaded.sessions.len(), 1);
    }

    #[test]
    fn test_wrong_shape_is_discarded() {
        let mut store = MemoryStore::new();
        store.set(TASKS_KEY, r#"{"text":"A","completed":false}"#).unwrap();
        assert!(load_state(&store).tasks.is_empty());
    }
}
