//! Multi-truck loading command.

use algolab_core::Config;
use algolab_core::algorithms::{KnapsackItem, allocate, apply_critical_bonus};
use anyhow::Result;

use super::knapsack::TruckOutput;
use crate::OutputFormat;
use crate::input::{ItemArg, Prompter, knapsack_items_or_prompt};
use crate::output::{self, Format};

/// Run the trucks command.
pub fn run(
    capacities: &[usize],
    items: Vec<ItemArg>,
    config: &Config,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let items = knapsack_items_or_prompt(items, &mut Prompter::stdio())?;
    let trucks = load(&items, capacities, config)?;

    let loaded: usize = trucks.iter().map(|t| t.items.len()).sum();
    tracing::info!(trucks = trucks.len(), items = items.len(), loaded, "trucks loaded");

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&trucks, quiet)?,
        Format::Table => {
            for (i, truck) in trucks.iter().enumerate() {
                truck.print_table(&format!("Truck {}:", i + 1), quiet);
            }
            if loaded < items.len() {
                output::status(&format!("{} item(s) left behind", items.len() - loaded), quiet);
            }
        }
    }
    Ok(())
}

fn load(items: &[KnapsackItem], capacities: &[usize], config: &Config) -> Result<Vec<TruckOutput>> {
    let boosted = apply_critical_bonus(items, config.critical_bonus);
    Ok(allocate(&boosted, capacities)?
        .iter()
        .map(|solution| TruckOutput::new(items, solution))
        .collect())
}
