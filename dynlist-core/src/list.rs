//! The growable list and its lifecycle operations

use crate::config::ListConfig;
use crate::error::{ListError, Status};
use crate::Result;
use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::ops::{Index, IndexMut};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Contiguous, heap-backed list of `T` that records the outcome of every
/// lifecycle call.
///
/// Each fallible operation returns a [`Result`] and also stores its outcome,
/// readable afterwards through [`List::status`] or [`List::error_code`].
/// A failed call never disturbs the elements already held.
///
/// Lists are move-only; [`Clone`] produces an independent deep copy.
pub struct List<T> {
    data: Vec<T>,
    status: Status,
    config: ListConfig,
}

impl<T> List<T> {
    /// Create an empty, unallocated list with the default configuration
    pub const fn new() -> Self {
        Self::with_config(ListConfig::new())
    }

    /// Create an empty, unallocated list with the given configuration
    pub const fn with_config(config: ListConfig) -> Self {
        Self {
            data: Vec::new(),
            status: Status::Uninitialized,
            config,
        }
    }

    /// Allocate a buffer of `requested` default-valued elements.
    ///
    /// Sizes that are zero, negative, or not representable as `usize` fail
    /// with [`ListError::BadSize`] and leave the list untouched. When the
    /// buffer cannot be obtained the call fails with
    /// [`ListError::Allocation`] and the previous buffer is kept. On success
    /// any previously held buffer is released.
    pub fn init<S>(&mut self, requested: S) -> Result<()>
    where
        S: TryInto<usize>,
        T: Default,
    {
        let requested = match requested.try_into() {
            Ok(n) if n > 0 => n,
            _ => return self.fail(ListError::BadSize),
        };

        if !self.config.permits(requested) {
            return self.fail(ListError::Allocation { requested });
        }

        let mut fresh = Vec::new();
        if fresh.try_reserve_exact(requested).is_err() {
            return self.fail(ListError::Allocation { requested });
        }
        fresh.resize_with(requested, T::default);

        #[cfg(feature = "logging")]
        debug!(
            "Initialized list with {} elements (released {} held)",
            requested,
            self.data.len()
        );

        self.data = fresh;
        self.succeed()
    }

    /// Append `value` at the end, growing the buffer if it is full.
    ///
    /// Fails with [`ListError::Reallocation`] when the buffer cannot grow;
    /// `value` is dropped and the existing elements are kept.
    pub fn append(&mut self, value: T) -> Result<()> {
        self.reserve_one()?;
        self.data.push(value);
        self.succeed()
    }

    /// Insert `value` at `index`, shifting the elements at `index..len`
    /// one slot toward the end.
    ///
    /// `index == len` appends. Larger indices fail with
    /// [`ListError::IndexOutOfRange`].
    pub fn insert_at(&mut self, value: T, index: usize) -> Result<()> {
        let len = self.data.len();
        if index > len {
            return self.fail(ListError::IndexOutOfRange { index, len });
        }

        self.reserve_one()?;
        self.data.insert(index, value);
        self.succeed()
    }

    /// Remove and return the last element.
    ///
    /// The allocation is kept; see [`List::shrink_to_fit`].
    pub fn remove(&mut self) -> Result<T> {
        match self.data.pop() {
            Some(value) => {
                self.status = Status::Ok;
                Ok(value)
            }
            None => self.fail(ListError::Empty),
        }
    }

    /// Remove and return the element at `index`, shifting the elements
    /// after it one slot toward the front.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.data.len();
        if index >= len {
            return self.fail(ListError::IndexOutOfRange { index, len });
        }

        let value = self.data.remove(index);
        self.status = Status::Ok;
        Ok(value)
    }

    /// Release the buffer and return to the empty, unallocated state.
    ///
    /// Calling this on a list that holds no buffer is a no-op that still
    /// reports success. The configuration is retained.
    pub fn deinit(&mut self) {
        let released = mem::take(&mut self.data);

        #[cfg(feature = "logging")]
        {
            if released.capacity() > 0 {
                debug!(
                    "Released list buffer ({} elements, capacity {})",
                    released.len(),
                    released.capacity()
                );
            }
        }

        drop(released);
        self.status = Status::Ok;
    }

    /// Drop spare capacity so the buffer holds exactly `len` elements
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
        self.status = Status::Ok;
    }

    /// Outcome of the most recent lifecycle call
    pub fn status(&self) -> Status {
        self.status
    }

    /// Stable integer code of the most recent lifecycle call
    pub fn error_code(&self) -> i32 {
        self.status.code()
    }

    /// Configuration fixed at construction
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Number of occupied elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the list holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the buffer can hold without growing
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Check if a buffer is currently held.
    ///
    /// Zero-sized element types never touch the allocator; for them a
    /// buffer counts as held while the list has elements.
    pub fn is_allocated(&self) -> bool {
        if mem::size_of::<T>() == 0 {
            !self.data.is_empty()
        } else {
            self.data.capacity() > 0
        }
    }

    /// Element at `index`, if any
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Mutable element at `index`, if any
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// The occupied elements in order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The occupied elements in order, mutably
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the list and return its elements
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Make room for one more element, honoring the growth policy and
    /// ceiling. Leaves the buffer untouched on failure.
    fn reserve_one(&mut self) -> Result<()> {
        let len = self.data.len();
        let capacity = self.data.capacity();

        let Some(required) = len.checked_add(1) else {
            return self.fail(ListError::Reallocation {
                requested: usize::MAX,
            });
        };

        if !self.config.permits(required) {
            return self.fail(ListError::Reallocation { requested: required });
        }

        if required <= capacity {
            return Ok(());
        }

        let Some(target) = self.config.grow_target(capacity, required) else {
            return self.fail(ListError::Reallocation { requested: required });
        };

        if self.data.try_reserve_exact(target - len).is_err() {
            return self.fail(ListError::Reallocation { requested: target });
        }

        #[cfg(feature = "logging")]
        debug!(
            "Grew list buffer from {} to {} elements",
            capacity,
            self.data.capacity()
        );

        Ok(())
    }

    fn succeed(&mut self) -> Result<()> {
        self.status = Status::Ok;
        Ok(())
    }

    fn fail<R>(&mut self, err: ListError) -> Result<R> {
        #[cfg(feature = "logging")]
        warn!("List operation failed: {:?} (len {})", err, self.data.len());

        self.status = err.status();
        Err(err)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            status: self.status,
            config: self.config,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("data", &self.data)
            .field("size", &self.data.len())
            .field("status", &self.status)
            .finish()
    }
}

/// Lists compare equal when they hold equal elements in the same order
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}
