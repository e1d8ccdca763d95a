//! Status codes and growth constants for dynlist lists

/// Last operation succeeded
pub const LIST_OK: i32 = 0;

/// No lifecycle operation has run on the list yet
pub const LIST_UNINITIALIZED: i32 = 1;

/// Requested size was not positive
pub const LIST_BAD_SIZE_ERROR: i32 = -1;

/// Removal was attempted on a list with no elements
pub const LIST_EMPTY_ERROR: i32 = -2;

/// Initial allocation failed
pub const LIST_ALLOCATION_ERROR: i32 = -3;

/// Growth allocation failed
pub const LIST_REALLOCATION_ERROR: i32 = -4;

/// Index outside the valid range for the operation
pub const LIST_INDEX_OUT_OF_RANGE_ERROR: i32 = -5;

/// Smallest capacity the doubling policy allocates on first growth
pub const MIN_NON_ZERO_CAPACITY: usize = 4;

/// Multiplier applied to the capacity by the doubling policy
pub const GROWTH_FACTOR: usize = 2;
