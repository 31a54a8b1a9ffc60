//! Calendar export command.

use std::path::PathBuf;

use clap::Args;
use routinely_core::{generate_ics, Config, TaskStore};

#[derive(Args)]
pub struct ExportArgs {
    /// Write the document to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Write the document to the configured export filename
    #[arg(long, conflicts_with = "output")]
    save: bool,
}

pub fn run(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let store = TaskStore::open()?;
    let document = generate_ics(&store.load());

    let target = if args.save {
        Some(PathBuf::from(config.export.filename))
    } else {
        args.output
    };

    match target {
        Some(path) => {
            std::fs::write(&path, document)?;
            println!("Calendar written to {}", path.display());
        }
        None => println!("{document}"),
    }

    Ok(())
}
