//! Order timestamp sort command.

use std::path::Path;
use std::time::Instant;

use algolab_adapters::ingest::load_orders;
use algolab_common::OrderRecord;
use algolab_core::Config;
use algolab_core::sort::merge_sort;
use anyhow::Result;
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};

#[derive(Serialize)]
struct OrdersOutput<'a> {
    total: usize,
    elapsed_ms: f64,
    earliest: &'a [OrderRecord],
}

/// Run the orders command.
pub fn run(path: &Path, config: &Config, format: OutputFormat, quiet: bool) -> Result<()> {
    let mut orders = load_orders(path)?;
    tracing::info!(records = orders.len(), "sorting orders by timestamp (merge sort)");

    let started = Instant::now();
    merge_sort(&mut orders, OrderRecord::key);
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    tracing::info!(records = orders.len(), elapsed_ms, "orders sorted");

    let shown = &orders[..config.top_n.min(orders.len())];
    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(
            &OrdersOutput {
                total: orders.len(),
                elapsed_ms,
                earliest: shown,
            },
            quiet,
        )?,
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["#", "Timestamp (ms)", "Row"]);
            for (i, order) in shown.iter().enumerate() {
                table.add_row(vec![
                    (i + 1).to_string(),
                    order.timestamp_ms.to_string(),
                    order.row.clone(),
                ]);
            }
            output::status(
                &format!("First {} of {} orders by timestamp:", shown.len(), orders.len()),
                quiet,
            );
            output::print_table(&table, quiet);
        }
    }

    Ok(())
}
