//! Library entry for dynlist-cli used by integration tests and embedding.

pub mod commands;

// Re-export commands for convenience
pub use commands::*;

use dynlist_core::GrowthPolicy;

/// Growth policy selectable from the command line
#[derive(Copy, Clone, Debug, Default, clap::ValueEnum)]
pub enum GrowthArg {
    /// Grow by exactly the number of elements needed
    Exact,
    /// Double the capacity on each growth
    #[default]
    Doubling,
}

impl From<GrowthArg> for GrowthPolicy {
    fn from(arg: GrowthArg) -> Self {
        match arg {
            GrowthArg::Exact => GrowthPolicy::Exact,
            GrowthArg::Doubling => GrowthPolicy::Doubling,
        }
    }
}

// Re-export commonly used items
pub use crate::commands::build;
