//! Crafting inventory simulator.
//!
//! Reads a script of starting items and craft commands, runs it against the
//! built-in recipe table and reports what happened along with the final
//! inventory.

pub mod config;
pub mod crafting;
pub mod error;
pub mod inventory;
pub mod item;
pub mod report;
pub mod script;
pub mod session;

use std::fs;
use std::io;

use tracing::info;

pub use config::SimConfig;
pub use error::SimError;
pub use inventory::Inventory;
pub use item::ItemKind;
pub use report::Report;

use crafting::CraftingRegistry;
use script::Script;
use session::Session;

/// Run the script named by `config` and write its report
pub fn run(config: &SimConfig) -> Result<Report, SimError> {
    let content = match fs::read_to_string(&config.input) {
        Ok(content) => content,
        Err(source) => {
            return Err(SimError::Input {
                path: config.input.clone(),
                source,
            });
        }
    };

    let script = Script::parse(&content)?;
    info!(
        "Read {:?}: {} starting items, {} commands",
        config.input,
        script.initial.len(),
        script.commands.len()
    );

    let registry = CraftingRegistry::builtin()?;
    let report = Session::run(&registry, config.initial_capacity, &script);

    if let Err(source) = write_report(&report, config) {
        return Err(SimError::Output {
            path: config.output.clone(),
            source,
        });
    }

    info!(
        "Finished: {}/{} slots used",
        report.inventory.occupied, report.inventory.capacity
    );

    Ok(report)
}

fn write_report(report: &Report, config: &SimConfig) -> io::Result<()> {
    if config.writes_to_stdout() {
        return report.write_to(io::stdout().lock());
    }
    let file = fs::File::create(&config.output)?;
    report.write_to(io::BufWriter::new(file))
}
