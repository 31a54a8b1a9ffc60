//! JSON task persistence.
//!
//! The whole routine lives as one serialized array of task records in a
//! single file (`tasks.json`) under the data directory. The file is read
//! once at startup and rewritten in full on every change. Loading is
//! tolerant: anything missing, unreadable or malformed degrades to an
//! empty routine rather than an error.

use std::path::PathBuf;

use super::data_dir;
use crate::clock::is_clock_time;
use crate::error::StoreError;
use crate::task::Task;

const STORE_FILE: &str = "tasks.json";

/// Persistent store for the task list.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Open the store at the default data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self {
            path: data_dir()?.join(STORE_FILE),
        })
    }

    /// Open a store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the persisted task list.
    ///
    /// A missing file, unreadable content, malformed JSON, or any record
    /// whose times fail the `\d\d:\d\d` shape check all yield an empty
    /// list. Discarded state is logged, never propagated.
    pub fn load(&self) -> Vec<Task> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => {
                log::debug!("no task store at {}, starting empty", self.path.display());
                return Vec::new();
            }
        };

        let tasks: Vec<Task> = match serde_json::from_str(&content) {
            Ok(tasks) => tasks,
            Err(e) => {
                log::warn!("discarding malformed task store {}: {e}", self.path.display());
                return Vec::new();
            }
        };

        if tasks
            .iter()
            .all(|t| is_clock_time(&t.start_time) && is_clock_time(&t.end_time))
        {
            tasks
        } else {
            log::warn!(
                "discarding task store {}: record with invalid times",
                self.path.display()
            );
            Vec::new()
        }
    }

    /// Rewrite the whole task list.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let content = serde_json::to_string(tasks)?;
        std::fs::write(&self.path, content).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, start: &str, end: &str) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {id}"),
            start_time: start.to_string(),
            end_time: end.to_string(),
            description: None,
            color: "blue".to_string(),
        }
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::at(dir.path().join("tasks.json"));

        let tasks = vec![task("a", "09:00", "10:00"), task("b", "10:00", "11:00")];
        store.save(&tasks).unwrap();

        assert_eq!(store.load(), tasks);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::at(dir.path().join("tasks.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_malformed_json_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(TaskStore::at(path).load().is_empty());
    }

    #[test]
    fn test_invalid_times_discard_the_whole_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let content = r#"[
            {"id":"a","title":"Ok","startTime":"09:00","endTime":"10:00","color":"blue"},
            {"id":"b","title":"Bad","startTime":"9am","endTime":"10:00","color":"red"}
        ]"#;
        std::fs::write(&path, content).unwrap();

        assert!(TaskStore::at(path).load().is_empty());
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::at(dir.path().join("tasks.json"));

        store
            .save(&[task("a", "09:00", "10:00"), task("b", "10:00", "11:00")])
            .unwrap();
        store.save(&[task("c", "08:00", "08:30")]).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "c");
    }
}
