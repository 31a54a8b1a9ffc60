//! The routine state container.
//!
//! [`Routine`] owns the in-memory task list the collaborator drives.
//! Every operation takes the current snapshot, applies one change, and
//! leaves a consistent list behind; the caller persists the result.

use uuid::Uuid;

use crate::ics::generate_ics;
use crate::reorder::reorder;
use crate::task::{palette_color, Task, TaskDraft};
use crate::template::{instantiate, TemplateItem};

/// An ordered day of time-blocked tasks plus the configured day start.
#[derive(Debug, Clone)]
pub struct Routine {
    tasks: Vec<Task>,
    day_start: String,
}

impl Routine {
    /// Start an empty routine with the given "HH:MM" day start.
    pub fn new(day_start: impl Into<String>) -> Self {
        Self {
            tasks: Vec::new(),
            day_start: day_start.into(),
        }
    }

    /// Wrap a previously persisted task list.
    pub fn from_tasks(tasks: Vec<Task>, day_start: impl Into<String>) -> Self {
        Self {
            tasks,
            day_start: day_start.into(),
        }
    }

    /// The current ordered snapshot.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Consume the routine, yielding the task list for persistence.
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    /// Add a task from form input: mints an id and the next palette color,
    /// then re-sorts the list by start time. Returns the new task's id.
    pub fn add(&mut self, draft: TaskDraft) -> String {
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            start_time: draft.start_time,
            end_time: draft.end_time,
            description: draft.description,
            color: palette_color(self.tasks.len()).to_string(),
        };
        let id = task.id.clone();
        self.tasks.push(task);
        self.sort_by_start_time();
        id
    }

    /// Replace the task with the same id, re-sorting by start time.
    /// Returns false when no task has that id.
    pub fn update(&mut self, updated: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                self.sort_by_start_time();
                true
            }
            None => false,
        }
    }

    /// Remove a task by id. Returns false when no task has that id.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Replace the whole routine with a freshly instantiated template.
    pub fn load_template(&mut self, items: &[TemplateItem]) {
        self.tasks = instantiate(items, &self.day_start);
    }

    /// Move `dragged_id` to just before `target_id` (end of day on `None`)
    /// and repack all times contiguously from the day start.
    ///
    /// Dropping a task onto itself is a no-op here, before the engine runs.
    pub fn move_task(&mut self, dragged_id: &str, target_id: Option<&str>) {
        if target_id == Some(dragged_id) {
            return;
        }
        self.tasks = reorder(&self.tasks, dragged_id, target_id, &self.day_start);
    }

    /// Export the routine as an iCalendar document dated today.
    pub fn to_ics(&self) -> String {
        generate_ics(&self.tasks)
    }

    // Add/update order by start time; drag-reorder derives times from list
    // order instead. The two policies intentionally coexist: editing a
    // task's times after a manual drag re-sorts it to its chronological
    // position, exactly as the planner always behaved.
    fn sort_by_start_time(&mut self) {
        self.tasks.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, start: &str, end: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_add_sorts_by_start_time() {
        let mut routine = Routine::new("09:00");
        routine.add(draft("Later", "14:00", "15:00"));
        routine.add(draft("Earlier", "08:00", "09:00"));

        let titles: Vec<&str> = routine.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Earlier", "Later"]);
    }

    #[test]
    fn test_add_assigns_palette_in_creation_order() {
        let mut routine = Routine::new("09:00");
        routine.add(draft("First", "10:00", "11:00"));
        routine.add(draft("Second", "08:00", "09:00"));

        // Colors follow creation order even though the list re-sorted.
        let first = routine.tasks().iter().find(|t| t.title == "First").unwrap();
        let second = routine.tasks().iter().find(|t| t.title == "Second").unwrap();
        assert_eq!(first.color, "red");
        assert_eq!(second.color, "orange");
    }

    #[test]
    fn test_update_resorts() {
        let mut routine = Routine::new("09:00");
        let id = routine.add(draft("Movable", "08:00", "08:30"));
        routine.add(draft("Fixed", "10:00", "11:00"));

        let mut moved = routine.tasks().iter().find(|t| t.id == id).unwrap().clone();
        moved.start_time = "12:00".to_string();
        moved.end_time = "12:30".to_string();
        assert!(routine.update(moved));

        let titles: Vec<&str> = routine.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Fixed", "Movable"]);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut routine = Routine::new("09:00");
        routine.add(draft("Only", "09:00", "10:00"));

        let stranger = Task {
            id: "nope".to_string(),
            title: "Stranger".to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            description: None,
            color: "blue".to_string(),
        };
        assert!(!routine.update(stranger));
        assert_eq!(routine.tasks().len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut routine = Routine::new("09:00");
        let id = routine.add(draft("Gone soon", "09:00", "10:00"));

        assert!(routine.remove(&id));
        assert!(routine.tasks().is_empty());
        assert!(!routine.remove(&id));
    }

    #[test]
    fn test_move_task_onto_itself_is_noop() {
        let mut routine = Routine::new("09:00");
        let id = routine.add(draft("Pinned", "13:00", "14:00"));
        let before = routine.tasks().to_vec();

        routine.move_task(&id, Some(id.as_str()));

        // Untouched, including the 13:00 start a real reorder would repack.
        assert_eq!(routine.tasks(), before.as_slice());
    }

    #[test]
    fn test_move_task_repacks_from_day_start() {
        let mut routine = Routine::new("07:00");
        let a = routine.add(draft("A", "09:00", "10:00"));
        routine.add(draft("B", "10:00", "11:30"));

        routine.move_task(&a, None);

        let tasks = routine.tasks();
        assert_eq!(tasks[0].title, "B");
        assert_eq!(tasks[0].start_time, "07:00");
        assert_eq!(tasks[0].end_time, "08:30");
        assert_eq!(tasks[1].title, "A");
        assert_eq!(tasks[1].start_time, "08:30");
        assert_eq!(tasks[1].end_time, "09:30");
    }

    #[test]
    fn test_load_template_replaces_everything() {
        let mut routine = Routine::new("09:00");
        routine.add(draft("Old", "06:00", "07:00"));

        routine.load_template(&crate::template::productivity_template());

        assert_eq!(routine.tasks().len(), 6);
        assert!(routine.tasks().iter().all(|t| t.title != "Old"));
        assert_eq!(routine.tasks()[0].start_time, "09:00");
    }
}
