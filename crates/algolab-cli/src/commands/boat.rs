//! Boat loading command (fractional knapsack).

use algolab_core::algorithms::{FractionalItem, FractionalPlan, TakeOutcome, fill_fractional};
use anyhow::Result;

use crate::OutputFormat;
use crate::input::{BoatItemArg, Prompter, prompt_boat_items};
use crate::output::{self, Format};

/// Run the boat command.
pub fn run(
    capacity: Option<f64>,
    items: Vec<BoatItemArg>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let mut prompter = Prompter::stdio();
    let capacity = match capacity {
        Some(c) => c,
        None => prompter.ask("Enter boat capacity W (kg): ")?,
    };
    let items: Vec<FractionalItem> = if items.is_empty() {
        prompt_boat_items(&mut prompter)?
    } else {
        items.into_iter().map(|BoatItemArg(item)| item).collect()
    };

    if capacity <= 0.0 || capacity.is_nan() {
        tracing::warn!(capacity, "boat capacity should be > 0, nothing loaded");
    }
    let plan = fill_fractional(&items, capacity);
    tracing::info!(
        items = items.len(),
        total_value = plan.total_value,
        remaining = plan.remaining,
        "boat loaded"
    );

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&plan, quiet)?,
        Format::Table => print_plan(&plan, quiet),
    }
    Ok(())
}

fn print_plan(plan: &FractionalPlan, quiet: bool) {
    let mut table = output::create_table();
    output::add_header(&mut table, &["Item", "Loaded (kg)", "Value", "Share"]);
    for take in &plan.takes {
        let row = match take.outcome {
            TakeOutcome::Taken {
                weight,
                value,
                fraction,
            } => vec![
                take.name.clone(),
                format!("{weight:.2}"),
                format!("{value:.2}"),
                format!("{:.0}%", fraction * 100.0),
            ],
            TakeOutcome::Skipped { needed, available } => vec![
                take.name.clone(),
                format!("skipped: needs {needed:.2}, {available:.2} left"),
                "-".to_string(),
                "0%".to_string(),
            ],
        };
        table.add_row(row);
    }
    output::print_table(&table, quiet);
    output::print_key_value_table(
        &[
            ("Capacity (kg)", format!("{:.2}", plan.capacity)),
            ("Total value", format!("{:.2}", plan.total_value)),
            ("Unused capacity (kg)", format!("{:.2}", plan.remaining)),
        ],
        quiet,
    );
}
