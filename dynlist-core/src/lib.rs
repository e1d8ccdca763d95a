//! # Dynlist Core
//!
//! A generic growable list that reports every allocation outcome through an
//! explicit status instead of panicking or aborting.
//!
//! ## Modules
//!
//! - `constants`: Status codes and growth constants
//! - `error`: `ListError` and the recorded `Status`
//! - `config`: Growth policy and element ceiling
//! - `list`: The `List<T>` container and its lifecycle operations
//! - `macros`: `list_type!` for declaring named list types

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod config;
pub mod constants;
pub mod error;
pub mod list;
mod macros;

// Re-export commonly used types
pub use config::{GrowthPolicy, ListConfig};
pub use error::{ListError, Status};
pub use list::List;

/// Result type alias for list operations
pub type Result<T> = core::result::Result<T, ListError>;
