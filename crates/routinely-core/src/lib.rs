//! # Routinely Core Library
//!
//! Core logic for Routinely, a single-user daily routine planner built
//! around time-blocked tasks. The CLI binary is a thin layer over this
//! library; every operation is available programmatically.
//!
//! ## Architecture
//!
//! - **Clock**: wall-clock "HH:MM" arithmetic on minute offsets
//! - **Reorder engine**: drag-and-drop reordering that re-derives a
//!   contiguous schedule from the new list order
//! - **Calendar encoder**: iCalendar export with floating event times
//! - **Templates**: fixed seed lists instantiated into fresh routines
//! - **Storage**: one JSON task blob plus TOML configuration
//!
//! The schedule computations are pure and infallible: bad input degrades
//! to local fallbacks (unknown ids are no-ops, corrupt durations become
//! 60 minutes, malformed persisted state loads as an empty routine).
//! Only storage and configuration return errors.

pub mod clock;
pub mod error;
pub mod ics;
pub mod reorder;
pub mod routine;
pub mod storage;
pub mod task;
pub mod template;

pub use error::{ConfigError, CoreError, StoreError};
pub use ics::{generate_ics, generate_ics_at};
pub use reorder::{reorder, FALLBACK_DURATION_MINUTES};
pub use routine::Routine;
pub use storage::{Config, TaskStore, DEFAULT_START_TIME};
pub use task::{Task, TaskDraft, DEFAULT_TASK_COLOR, TASK_COLORS};
pub use template::{instantiate, productivity_template, TemplateItem};
