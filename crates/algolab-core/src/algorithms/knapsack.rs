//! 0/1 knapsack with item reconstruction and sequential multi-container
//! allocation.
//!
//! The DP table is `(N + 1) x (W' + 1)` where `W'` is the capacity capped at
//! the total item weight. Tables above [`MAX_TABLE_CELLS`] are refused.

use algolab_common::utils::error::{Error, Result};
use serde::Serialize;

/// Largest DP table (in cells) a solve will allocate.
pub const MAX_TABLE_CELLS: usize = 1 << 27;

/// An indivisible item with integer weight and utility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnapsackItem {
    /// Optional display name.
    pub name: Option<String>,
    /// Weight, always positive.
    pub weight: usize,
    /// Utility gained by packing the item.
    pub utility: u64,
    /// High-priority flag, see [`apply_critical_bonus`].
    pub critical: bool,
}

impl KnapsackItem {
    /// Creates an unnamed, non-critical item.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidItem`] if `weight` is zero.
    pub fn new(weight: usize, utility: u64) -> Result<Self> {
        if weight == 0 {
            return Err(Error::InvalidItem("weight must be > 0".to_string()));
        }
        Ok(Self {
            name: None,
            weight,
            utility,
            critical: false,
        })
    }

    /// Sets the display name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the critical flag.
    #[must_use]
    pub fn with_critical(mut self, critical: bool) -> Self {
        self.critical = critical;
        self
    }

    /// Returns the name, or `Item <n>` using the one-based position.
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Item {}", index + 1))
    }
}

/// Result of one 0/1 knapsack solve.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct KnapsackSolution {
    /// Capacity the solve ran with.
    pub capacity: usize,
    /// Best achievable utility.
    pub max_utility: u64,
    /// Indices of the chosen items, ascending.
    pub selected: Vec<usize>,
    /// Combined weight of the chosen items.
    pub total_weight: usize,
}

/// Returns a copy of `items` with `bonus` added to every critical item's utility.
#[must_use]
pub fn apply_critical_bonus(items: &[KnapsackItem], bonus: u64) -> Vec<KnapsackItem> {
    items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if item.critical {
                item.utility = item.utility.saturating_add(bonus);
            }
            item
        })
        .collect()
}

/// Solves 0/1 knapsack over `items` with the given `capacity`.
///
/// When packing an item ties with leaving it out, it is left out. That rule
/// fixes which optimal subset is reported. Utilities add saturating, so
/// totals cap at `u64::MAX`.
///
/// # Errors
///
/// Returns [`Error::TableTooLarge`] when the table would exceed
/// [`MAX_TABLE_CELLS`].
///
/// ```
/// use algolab_core::algorithms::{KnapsackItem, knapsack01};
///
/// let items: Vec<_> = [(2, 3), (3, 4), (4, 5), (5, 6)]
///     .into_iter()
///     .map(|(w, u)| KnapsackItem::new(w, u).unwrap())
///     .collect();
/// let sol = knapsack01(&items, 5)?;
/// assert_eq!(sol.max_utility, 7);
/// assert_eq!(sol.selected, [0, 1]);
/// # Ok::<(), algolab_common::Error>(())
/// ```
pub fn knapsack01(items: &[KnapsackItem], capacity: usize) -> Result<KnapsackSolution> {
    let refs: Vec<&KnapsackItem> = items.iter().collect();
    solve(&refs, capacity)
}

/// Fills each container in order, optimally for that container, using only
/// items no earlier container took.
///
/// Greedy across containers: the combined result is not guaranteed to be
/// globally optimal. Selected indices refer to positions in `items`.
///
/// # Errors
///
/// Same as [`knapsack01`], for any round.
pub fn allocate(items: &[KnapsackItem], capacities: &[usize]) -> Result<Vec<KnapsackSolution>> {
    let mut available: Vec<usize> = (0..items.len()).collect();
    let mut rounds = Vec::with_capacity(capacities.len());

    for (round, &capacity) in capacities.iter().enumerate() {
        let refs: Vec<&KnapsackItem> = available.iter().map(|&i| &items[i]).collect();
        let mut solution = solve(&refs, capacity)?;

        // Map positions in `available` back to positions in `items`.
        solution.selected = solution.selected.iter().map(|&k| available[k]).collect();
        available.retain(|i| solution.selected.binary_search(i).is_err());

        tracing::debug!(
            round,
            capacity,
            chosen = solution.selected.len(),
            left = available.len(),
            "container filled"
        );
        rounds.push(solution);
    }
    Ok(rounds)
}

fn solve(items: &[&KnapsackItem], capacity: usize) -> Result<KnapsackSolution> {
    let n = items.len();
    // Columns past the total weight repeat the last one.
    let total = items
        .iter()
        .fold(0usize, |acc, item| acc.saturating_add(item.weight));
    let limit = capacity.min(total);
    let cells = limit
        .checked_add(1)
        .and_then(|w| w.checked_mul(n + 1))
        .filter(|&cells| cells <= MAX_TABLE_CELLS)
        .ok_or(Error::TableTooLarge {
            items: n,
            capacity,
            max_cells: MAX_TABLE_CELLS,
        })?;
    let width = limit + 1;
    let mut dp = vec![0u64; cells];

    for i in 1..=n {
        let item = items[i - 1];
        let (prev, row) = dp.split_at_mut(i * width);
        let prev = &prev[(i - 1) * width..];
        let row = &mut row[..width];
        for w in 0..=limit {
            row[w] = prev[w];
            if item.weight <= w {
                let include = prev[w - item.weight].saturating_add(item.utility);
                if include > prev[w] {
                    row[w] = include;
                }
            }
        }
    }

    let mut selected = Vec::new();
    let mut w = limit;
    for i in (1..=n).rev() {
        if dp[i * width + w] != dp[(i - 1) * width + w] {
            selected.push(i - 1);
            w -= items[i - 1].weight;
        }
    }
    selected.reverse();

    let total_weight = selected.iter().map(|&i| items[i].weight).sum();
    tracing::debug!(items = n, capacity, cells = dp.len(), "knapsack table built");

    Ok(KnapsackSolution {
        capacity,
        max_utility: dp[n * width + limit],
        selected,
        total_weight,
    })
}
