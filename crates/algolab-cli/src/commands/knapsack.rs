//! Single-truck packing command.

use algolab_core::Config;
use algolab_core::algorithms::{KnapsackItem, KnapsackSolution, apply_critical_bonus, knapsack01};
use anyhow::Result;
use serde::Serialize;

use crate::OutputFormat;
use crate::input::{ItemArg, Prompter, knapsack_items_or_prompt};
use crate::output::{self, Format};

/// One packed item, with its utility before any bonus.
#[derive(Serialize)]
pub(super) struct PackedItem {
    name: String,
    weight: usize,
    utility: u64,
    critical: bool,
}

/// One loaded truck.
#[derive(Serialize)]
pub(super) struct TruckOutput {
    pub(super) capacity: usize,
    pub(super) score: u64,
    pub(super) total_weight: usize,
    pub(super) total_utility: u64,
    pub(super) items: Vec<PackedItem>,
}

impl TruckOutput {
    /// Resolves a solution's indices against the unboosted `items`.
    pub(super) fn new(items: &[KnapsackItem], solution: &KnapsackSolution) -> Self {
        let packed: Vec<PackedItem> = solution
            .selected
            .iter()
            .map(|&i| PackedItem {
                name: items[i].label(i),
                weight: items[i].weight,
                utility: items[i].utility,
                critical: items[i].critical,
            })
            .collect();
        Self {
            capacity: solution.capacity,
            score: solution.max_utility,
            total_weight: solution.total_weight,
            total_utility: packed.iter().fold(0, |acc, p| acc.saturating_add(p.utility)),
            items: packed,
        }
    }

    /// Prints the packed items followed by the totals.
    pub(super) fn print_table(&self, title: &str, quiet: bool) {
        output::status(title, quiet);
        if self.items.is_empty() {
            output::status("  (nothing fits)", quiet);
        } else {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Item", "Weight (kg)", "Utility", "Critical"]);
            for item in &self.items {
                table.add_row(vec![
                    item.name.clone(),
                    item.weight.to_string(),
                    item.utility.to_string(),
                    if item.critical { "yes" } else { "no" }.to_string(),
                ]);
            }
            output::print_table(&table, quiet);
        }
        output::print_key_value_table(
            &[
                ("Capacity (kg)", self.capacity.to_string()),
                ("Total weight (kg)", self.total_weight.to_string()),
                ("Total utility", self.total_utility.to_string()),
                ("Score with bonus", self.score.to_string()),
            ],
            quiet,
        );
    }
}

/// Run the knapsack command.
pub fn run(
    capacity: Option<usize>,
    items: Vec<ItemArg>,
    config: &Config,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let mut prompter = Prompter::stdio();
    let capacity = match capacity {
        Some(c) => c,
        None => prompter.ask("Enter truck capacity W (kg): ")?,
    };
    let items = knapsack_items_or_prompt(items, &mut prompter)?;

    let truck = pack(&items, capacity, config)?;
    tracing::info!(
        capacity,
        items = items.len(),
        packed = truck.items.len(),
        "truck packed"
    );

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&truck, quiet)?,
        Format::Table => truck.print_table("Selected items:", quiet),
    }
    Ok(())
}

fn pack(items: &[KnapsackItem], capacity: usize, config: &Config) -> Result<TruckOutput> {
    let boosted = apply_critical_bonus(items, config.critical_bonus);
    Ok(TruckOutput::new(items, &knapsack01(&boosted, capacity)?))
}
