//! Order dataset: header line, then one order per row with the timestamp
//! in the second column.

use std::io::BufRead;
use std::path::Path;

use algolab_common::utils::error::Result;
use algolab_common::OrderRecord;

use super::timestamp::parse_timestamp;

const TIMESTAMP_COLUMN: usize = 1;

/// Loads every order row from the CSV file at `path`.
pub fn load_orders(path: impl AsRef<Path>) -> Result<Vec<OrderRecord>> {
    read_orders(super::open(path.as_ref())?)
}

/// Reads orders from any buffered reader, skipping the header line.
///
/// Rows without a timestamp column are skipped. Rows whose timestamp does
/// not parse are kept with key `0`.
pub fn read_orders(reader: impl BufRead) -> Result<Vec<OrderRecord>> {
    let mut orders = Vec::new();
    let mut bad_timestamps = 0usize;
    let mut skipped = 0usize;

    for (index, line) in super::lossy_lines(reader).enumerate().skip(1) {
        let line = line?;
        let Some(raw) = line.split(',').nth(TIMESTAMP_COLUMN) else {
            tracing::warn!(line = index + 1, "row has no timestamp column, skipped");
            skipped += 1;
            continue;
        };
        let timestamp_ms = parse_timestamp(raw).unwrap_or_else(|_| {
            bad_timestamps += 1;
            0
        });
        orders.push(OrderRecord::new(timestamp_ms, line));
    }

    if bad_timestamps > 0 {
        tracing::warn!(count = bad_timestamps, "rows with unparseable timestamps kept with key 0");
    }
    tracing::debug!(loaded = orders.len(), skipped, "orders read");
    Ok(orders)
}
