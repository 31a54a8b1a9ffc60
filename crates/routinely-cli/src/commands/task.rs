//! Task management commands.

use clap::Subcommand;
use routinely_core::{Config, Routine, TaskDraft, TaskStore};

use super::validate_task_input;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to the routine
    Add {
        /// Task title
        title: String,
        /// Start time (HH:MM)
        #[arg(long)]
        start: String,
        /// End time (HH:MM)
        #[arg(long)]
        end: String,
        /// Task description
        #[arg(long)]
        description: Option<String>,
    },
    /// List the routine in schedule order
    List,
    /// Update a task
    Update {
        /// Task ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New start time (HH:MM)
        #[arg(long)]
        start: Option<String>,
        /// New end time (HH:MM)
        #[arg(long)]
        end: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
    /// Move a task within the day and repack all times
    Move {
        /// Task ID to move
        id: String,
        /// Place the task just before this task ID (omit to move to end of day)
        #[arg(long)]
        before: Option<String>,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let store = TaskStore::open()?;
    let mut routine = Routine::from_tasks(store.load(), config.default_start_time.as_str());

    match action {
        TaskAction::Add {
            title,
            start,
            end,
            description,
        } => {
            validate_task_input(&title, &start, &end)?;
            let id = routine.add(TaskDraft {
                title,
                start_time: start,
                end_time: end,
                description,
            });
            store.save(routine.tasks())?;
            println!("Task added: {id}");
        }
        TaskAction::List => {
            println!("{}", serde_json::to_string_pretty(routine.tasks())?);
        }
        TaskAction::Update {
            id,
            title,
            start,
            end,
            description,
        } => {
            let mut task = routine
                .tasks()
                .iter()
                .find(|t| t.id == id)
                .cloned()
                .ok_or(format!("Task not found: {id}"))?;

            if let Some(t) = title {
                task.title = t;
            }
            if let Some(s) = start {
                task.start_time = s;
            }
            if let Some(e) = end {
                task.end_time = e;
            }
            if let Some(d) = description {
                task.description = if d.is_empty() { None } else { Some(d) };
            }
            validate_task_input(&task.title, &task.start_time, &task.end_time)?;

            routine.update(task);
            store.save(routine.tasks())?;
            println!("Task updated: {id}");
        }
        TaskAction::Delete { id } => {
            if !routine.remove(&id) {
                return Err(format!("Task not found: {id}").into());
            }
            store.save(routine.tasks())?;
            println!("Task deleted: {id}");
        }
        TaskAction::Move { id, before } => {
            routine.move_task(&id, before.as_deref());
            store.save(routine.tasks())?;
            println!("{}", serde_json::to_string_pretty(routine.tasks())?);
        }
    }

    Ok(())
}
