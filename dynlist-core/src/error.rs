//! Error and status types for list operations

use crate::constants::{
    LIST_ALLOCATION_ERROR, LIST_BAD_SIZE_ERROR, LIST_EMPTY_ERROR, LIST_INDEX_OUT_OF_RANGE_ERROR,
    LIST_OK, LIST_REALLOCATION_ERROR, LIST_UNINITIALIZED,
};
use serde::{Deserialize, Serialize};

/// Errors that can occur during list operations
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// Requested size was zero or negative
    #[cfg_attr(feature = "std", error("Requested size must be positive"))]
    BadSize,

    /// The initial buffer could not be obtained
    #[cfg_attr(feature = "std", error("Failed to allocate {requested} elements"))]
    Allocation {
        /// Number of elements requested.
        requested: usize,
    },

    /// The buffer could not be grown
    #[cfg_attr(feature = "std", error("Failed to grow buffer to {requested} elements"))]
    Reallocation {
        /// Capacity (in elements) that could not be reached.
        requested: usize,
    },

    /// Removal from a list with no elements
    #[cfg_attr(feature = "std", error("List is empty"))]
    Empty,

    /// Index outside the range accepted by the operation
    #[cfg_attr(feature = "std", error("Index {index} out of range for length {len}"))]
    IndexOutOfRange {
        /// The index that was passed in.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
}

impl ListError {
    /// The status this error records on the list
    pub const fn status(&self) -> Status {
        match self {
            ListError::BadSize => Status::BadSize,
            ListError::Allocation { .. } => Status::Allocation,
            ListError::Reallocation { .. } => Status::Reallocation,
            ListError::Empty => Status::Empty,
            ListError::IndexOutOfRange { .. } => Status::IndexOutOfRange,
        }
    }

    /// Stable integer code of this error
    pub const fn code(&self) -> i32 {
        self.status().code()
    }
}

/// Outcome of the most recent lifecycle call on a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    /// No lifecycle operation has run yet
    #[default]
    Uninitialized,
    /// Last operation succeeded
    Ok,
    /// Requested size was not positive
    BadSize,
    /// Removal from an empty list
    Empty,
    /// Initial allocation failed
    Allocation,
    /// Growth allocation failed
    Reallocation,
    /// Index outside the valid range
    IndexOutOfRange,
}

impl Status {
    /// Every status, in code table order
    pub const ALL: [Status; 7] = [
        Status::Ok,
        Status::Uninitialized,
        Status::BadSize,
        Status::Empty,
        Status::Allocation,
        Status::Reallocation,
        Status::IndexOutOfRange,
    ];

    /// Stable signed code consumers may branch on
    pub const fn code(&self) -> i32 {
        match self {
            Status::Ok => LIST_OK,
            Status::Uninitialized => LIST_UNINITIALIZED,
            Status::BadSize => LIST_BAD_SIZE_ERROR,
            Status::Empty => LIST_EMPTY_ERROR,
            Status::Allocation => LIST_ALLOCATION_ERROR,
            Status::Reallocation => LIST_REALLOCATION_ERROR,
            Status::IndexOutOfRange => LIST_INDEX_OUT_OF_RANGE_ERROR,
        }
    }

    /// Map a code back to its status
    pub const fn from_code(code: i32) -> Option<Status> {
        match code {
            LIST_OK => Some(Status::Ok),
            LIST_UNINITIALIZED => Some(Status::Uninitialized),
            LIST_BAD_SIZE_ERROR => Some(Status::BadSize),
            LIST_EMPTY_ERROR => Some(Status::Empty),
            LIST_ALLOCATION_ERROR => Some(Status::Allocation),
            LIST_REALLOCATION_ERROR => Some(Status::Reallocation),
            LIST_INDEX_OUT_OF_RANGE_ERROR => Some(Status::IndexOutOfRange),
            _ => None,
        }
    }

    /// Check if this status reports success
    pub const fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }

    /// Check if this status reports a failure
    pub const fn is_error(&self) -> bool {
        self.code() < 0
    }

    /// Short human-readable description
    pub const fn describe(&self) -> &'static str {
        match self {
            Status::Ok => "last operation succeeded",
            Status::Uninitialized => "no operation has run yet",
            Status::BadSize => "requested size was not positive",
            Status::Empty => "removal from an empty list",
            Status::Allocation => "initial allocation failed",
            Status::Reallocation => "growth allocation failed",
            Status::IndexOutOfRange => "index outside the valid range",
        }
    }
}

impl From<ListError> for Status {
    fn from(err: ListError) -> Self {
        err.status()
    }
}
