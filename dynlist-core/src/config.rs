//! Growth configuration for lists

use crate::constants::{GROWTH_FACTOR, MIN_NON_ZERO_CAPACITY};
use serde::{Deserialize, Serialize};

/// How a full list picks its next capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GrowthPolicy {
    /// Grow to exactly the required number of elements.
    ///
    /// Every append on a full list reallocates, so `n` appends cost O(n²)
    /// element moves in total. Suitable for small lists only.
    Exact,
    /// Multiply the capacity by [`GROWTH_FACTOR`], starting at
    /// [`MIN_NON_ZERO_CAPACITY`]
    #[default]
    Doubling,
}

impl GrowthPolicy {
    /// Capacity to grow to from `current` so that at least `required`
    /// elements fit. Returns `None` on arithmetic overflow.
    pub fn next_capacity(&self, current: usize, required: usize) -> Option<usize> {
        match self {
            GrowthPolicy::Exact => Some(required),
            GrowthPolicy::Doubling => {
                let doubled = current
                    .checked_mul(GROWTH_FACTOR)?
                    .max(MIN_NON_ZERO_CAPACITY);
                Some(doubled.max(required))
            }
        }
    }
}

/// Construction-time settings of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ListConfig {
    /// Growth policy used by appends and inserts
    #[serde(default)]
    pub growth: GrowthPolicy,

    /// Upper bound on the number of elements the buffer may hold.
    /// Requests beyond it fail as if the allocator refused them.
    #[serde(default)]
    pub max_elements: Option<usize>,
}

impl ListConfig {
    /// Create the default configuration (doubling, no ceiling)
    pub const fn new() -> Self {
        Self {
            growth: GrowthPolicy::Doubling,
            max_elements: None,
        }
    }

    /// Set the growth policy
    pub const fn growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Cap the buffer at `max` elements
    pub const fn max_elements(mut self, max: usize) -> Self {
        self.max_elements = Some(max);
        self
    }

    /// Check whether a buffer of `elements` is within the ceiling
    pub fn permits(&self, elements: usize) -> bool {
        self.max_elements.map_or(true, |max| elements <= max)
    }

    /// Capacity a full list of `current` capacity should grow to so that
    /// `required` elements fit, clamped to the ceiling.
    ///
    /// Returns `None` when `required` itself cannot be satisfied.
    pub fn grow_target(&self, current: usize, required: usize) -> Option<usize> {
        if !self.permits(required) {
            return None;
        }

        let target = self.growth.next_capacity(current, required)?;
        Some(match self.max_elements {
            Some(max) => target.min(max),
            None => target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_growth() {
        assert_eq!(GrowthPolicy::Exact.next_capacity(0, 1), Some(1));
        assert_eq!(GrowthPolicy::Exact.next_capacity(7, 8), Some(8));
    }

    #[test]
    fn test_doubling_growth() {
        assert_eq!(GrowthPolicy::Doubling.next_capacity(0, 1), Some(4));
        assert_eq!(GrowthPolicy::Doubling.next_capacity(4, 5), Some(8));
        assert_eq!(GrowthPolicy::Doubling.next_capacity(usize::MAX, 1), None);
    }

    #[test]
    fn test_ceiling_clamps_target() {
        let cfg = ListConfig::new().max_elements(6);
        assert_eq!(cfg.grow_target(4, 5), Some(6));
        assert_eq!(cfg.grow_target(6, 7), None);
        assert!(cfg.permits(6));
        assert!(!cfg.permits(7));
    }

    #[test]
    fn test_config_from_json() {
        let cfg: ListConfig =
            serde_json::from_str(r#"{"growth":"exact","max_elements":16}"#).unwrap();
        assert_eq!(cfg, ListConfig::new().growth(GrowthPolicy::Exact).max_elements(16));

        let defaults: ListConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, ListConfig::default());
    }
}
