//! Fractional knapsack by value density, with indivisible items.
//!
//! Optimal when every item is divisible; with indivisible items mixed in it
//! is a heuristic.

use algolab_common::utils::error::{Error, Result};
use serde::Serialize;

/// An item that may or may not be split.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FractionalItem {
    /// Display name.
    pub name: String,
    /// Weight, always positive and finite.
    pub weight: f64,
    /// Value of the whole item.
    pub value: f64,
    /// Whether a fraction of the item may be taken.
    pub divisible: bool,
}

impl FractionalItem {
    /// Creates an item.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidItem`] unless `weight` is positive and finite.
    pub fn new(name: impl Into<String>, weight: f64, value: f64, divisible: bool) -> Result<Self> {
        if !(weight > 0.0 && weight.is_finite()) {
            return Err(Error::InvalidItem(format!("weight must be > 0, got {weight}")));
        }
        Ok(Self {
            name: name.into(),
            weight,
            value,
            divisible,
        })
    }

    /// Value per unit of weight.
    #[must_use]
    pub fn density(&self) -> f64 {
        self.value / self.weight
    }
}

/// What happened to one item during the greedy pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TakeOutcome {
    /// All or part of the item was loaded.
    Taken {
        /// Weight loaded.
        weight: f64,
        /// Value gained.
        value: f64,
        /// Loaded share of the item, in `(0, 1]`.
        fraction: f64,
    },
    /// An indivisible item did not fit and was left behind.
    Skipped {
        /// The item's weight.
        needed: f64,
        /// Capacity left at that point.
        available: f64,
    },
}

/// One visited item, in density order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Take {
    /// Position of the item in the input slice.
    pub item: usize,
    /// Item name.
    pub name: String,
    /// Outcome.
    pub outcome: TakeOutcome,
}

/// Result of [`fill_fractional`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FractionalPlan {
    /// Capacity the plan was built for.
    pub capacity: f64,
    /// Total value loaded.
    pub total_value: f64,
    /// Capacity left unused.
    pub remaining: f64,
    /// Visited items, highest density first. Items never reached because
    /// capacity ran out are not listed.
    pub takes: Vec<Take>,
}

/// Loads items greedily by density, highest first.
///
/// Divisible items are taken up to the remaining capacity; an indivisible
/// item is taken whole if it fits and skipped otherwise, and the pass
/// continues with the next item. Equal densities keep input order.
/// A capacity `<= 0` yields an empty plan.
#[must_use]
pub fn fill_fractional(items: &[FractionalItem], capacity: f64) -> FractionalPlan {
    if capacity <= 0.0 || capacity.is_nan() {
        return FractionalPlan::default();
    }

    let mut order: Vec<usize> = (0..items.len()).collect();
    // `sort_by` is stable, so ties stay in input order.
    order.sort_by(|&a, &b| items[b].density().total_cmp(&items[a].density()));

    let mut plan = FractionalPlan {
        capacity,
        total_value: 0.0,
        remaining: capacity,
        takes: Vec::new(),
    };

    for index in order {
        if plan.remaining <= 0.0 {
            break;
        }
        let item = &items[index];
        let outcome = if item.divisible {
            let weight = item.weight.min(plan.remaining);
            let value = item.density() * weight;
            plan.total_value += value;
            plan.remaining -= weight;
            TakeOutcome::Taken {
                weight,
                value,
                fraction: weight / item.weight,
            }
        } else if item.weight <= plan.remaining {
            plan.total_value += item.value;
            plan.remaining -= item.weight;
            TakeOutcome::Taken {
                weight: item.weight,
                value: item.value,
                fraction: 1.0,
            }
        } else {
            tracing::debug!(item = %item.name, needed = item.weight, available = plan.remaining, "indivisible item skipped");
            TakeOutcome::Skipped {
                needed: item.weight,
                available: plan.remaining,
            }
        };
        plan.takes.push(Take {
            item: index,
            name: item.name.clone(),
            outcome,
        });
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(name: &str, weight: f64, value: f64, divisible: bool) -> FractionalItem {
        FractionalItem::new(name, weight, value, divisible).unwrap()
    }

    fn taken_weight(take: &Take) -> Option<f64> {
        match take.outcome {
            TakeOutcome::Taken { weight, .. } => Some(weight),
            TakeOutcome::Skipped { .. } => None,
        }
    }

    #[test]
    fn test_all_divisible() {
        let items = [
            item("A", 10.0, 60.0, true),
            item("B", 20.0, 100.0, true),
            item("C", 30.0, 120.0, true),
        ];
        let plan = fill_fractional(&items, 50.0);

        assert!((plan.total_value - 240.0).abs() < 1e-9);
        let weights: Vec<_> = plan.takes.iter().filter_map(taken_weight).collect();
        assert_eq!(weights, [10.0, 20.0, 20.0]);
        assert_eq!(plan.remaining, 0.0);
        match plan.takes[2].outcome {
            TakeOutcome::Taken { fraction, .. } => assert!((fraction - 2.0 / 3.0).abs() < 1e-12),
            TakeOutcome::Skipped { .. } => panic!("C should be partially taken"),
        }
    }

    #[test]
    fn test_indivisible_skip_continues() {
        let items = [
            item("generator", 40.0, 400.0, false),
            item("water", 10.0, 50.0, true),
            item("blankets", 5.0, 10.0, false),
        ];
        let plan = fill_fractional(&items, 30.0);

        let names: Vec<_> = plan.takes.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["generator", "water", "blankets"]);
        assert!(matches!(
            plan.takes[0].outcome,
            TakeOutcome::Skipped { needed, available } if needed == 40.0 && available == 30.0
        ));
        assert_eq!(plan.total_value, 60.0);
        assert_eq!(plan.remaining, 15.0);
    }

    #[test]
    fn test_stops_when_full() {
        let items = [item("A", 10.0, 100.0, true), item("B", 10.0, 1.0, true)];
        let plan = fill_fractional(&items, 10.0);
        assert_eq!(plan.takes.len(), 1);
        assert_eq!(plan.takes[0].item, 0);
    }

    #[test]
    fn test_equal_density_keeps_input_order() {
        let items = [item("x", 2.0, 4.0, true), item("y", 1.0, 2.0, true)];
        let plan = fill_fractional(&items, 1.0);
        assert_eq!(plan.takes[0].name, "x");
    }

    #[test]
    fn test_non_positive_capacity() {
        let items = [item("A", 1.0, 1.0, true)];
        let plan = fill_fractional(&items, 0.0);
        assert_eq!(plan.total_value, 0.0);
        assert!(plan.takes.is_empty());
        assert!(fill_fractional(&items, -5.0).takes.is_empty());
    }

    #[test]
    fn test_invalid_weight() {
        assert!(FractionalItem::new("bad", 0.0, 1.0, true).is_err());
        assert!(FractionalItem::new("bad", -1.0, 1.0, true).is_err());
        assert!(FractionalItem::new("bad", f64::NAN, 1.0, true).is_err());
    }

    /// LP optimum of the all-divisible case, computed independently.
    fn lp_optimum(items: &[FractionalItem], capacity: f64) -> f64 {
        let mut sorted: Vec<_> = items.iter().collect();
        sorted.sort_by(|a, b| b.density().total_cmp(&a.density()));
        let mut left = capacity;
        let mut value = 0.0;
        for it in sorted {
            let w = it.weight.min(left);
            value += it.value * (w / it.weight);
            left -= w;
        }
        value
    }

    proptest! {
        #[test]
        fn prop_divisible_matches_lp(
            pairs in prop::collection::vec((1u32..50, 0u32..200), 0..12),
            capacity in 1u32..150,
        ) {
            let items: Vec<_> = pairs
                .iter()
                .enumerate()
                .map(|(i, &(w, v))| item(&format!("i{i}"), f64::from(w), f64::from(v), true))
                .collect();
            let plan = fill_fractional(&items, f64::from(capacity));
            let expected = lp_optimum(&items, f64::from(capacity));
            prop_assert!((plan.total_value - expected).abs() < 1e-6);
            prop_assert!(plan.remaining >= -1e-9);
        }
    }
}
