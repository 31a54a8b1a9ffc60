//! Routine template commands.

use clap::Subcommand;
use routinely_core::{productivity_template, Config, Routine, TaskStore};

#[derive(Subcommand)]
pub enum TemplateAction {
    /// Show the built-in productivity template
    Show,
    /// Replace the current routine with the productivity template
    Load {
        /// Start time for the first block (HH:MM, defaults to the configured day start)
        #[arg(long)]
        start: Option<String>,
    },
}

pub fn run(action: TemplateAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TemplateAction::Show => {
            println!("{}", serde_json::to_string_pretty(&productivity_template())?);
        }
        TemplateAction::Load { start } => {
            let config = Config::load()?;
            let day_start = start.unwrap_or(config.default_start_time);

            let store = TaskStore::open()?;
            let mut routine = Routine::new(day_start);
            routine.load_template(&productivity_template());
            store.save(routine.tasks())?;

            println!("{}", serde_json::to_string_pretty(routine.tasks())?);
        }
    }

    Ok(())
}
