//! Tunables shared by the engines and their drivers.

/// Default utility bonus added to critical knapsack items.
pub const DEFAULT_CRITICAL_BONUS: u64 = 50;

/// Default margin a relaxation must beat before Dijkstra accepts it.
pub const DEFAULT_RELAXATION_EPSILON: f64 = 1e-12;

/// Default number of rows printed by the sort drivers.
pub const DEFAULT_TOP_N: usize = 10;

/// Algolab configuration.
///
/// ```
/// use algolab_core::Config;
///
/// let config = Config::default().with_critical_bonus(80).with_top_n(5);
/// assert_eq!(config.critical_bonus, 80);
/// assert_eq!(config.top_n, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Utility added to items flagged critical before the 0/1 knapsack runs.
    pub critical_bonus: u64,
    /// Strict-improvement margin for Dijkstra relaxations.
    pub relaxation_epsilon: f64,
    /// Rows shown after sorting.
    pub top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            critical_bonus: DEFAULT_CRITICAL_BONUS,
            relaxation_epsilon: DEFAULT_RELAXATION_EPSILON,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl Config {
    /// Sets the critical-item bonus.
    #[must_use]
    pub fn with_critical_bonus(mut self, bonus: u64) -> Self {
        self.critical_bonus = bonus;
        self
    }

    /// Sets the Dijkstra relaxation margin. Negative values are clamped to 0.
    #[must_use]
    pub fn with_relaxation_epsilon(mut self, epsilon: f64) -> Self {
        self.relaxation_epsilon = epsilon.max(0.0);
        self
    }

    /// Sets the number of rows shown by the sort drivers.
    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}
