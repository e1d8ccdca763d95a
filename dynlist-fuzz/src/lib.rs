//! Fuzzing entry points for dynlist-core
//!
//! `fuzz_ops` takes raw bytes and never panics unless the list diverges
//! from its `Vec` model, so any byte-driven harness can call it directly.

use dynlist_core::{GrowthPolicy, List, ListConfig};

/// Replay `data` as a sequence of list operations, checking the list
/// against a `Vec` model after every step.
///
/// Each operation consumes an opcode byte followed by an operand byte.
/// The first byte selects the growth policy and element ceiling.
pub fn fuzz_ops(data: &[u8]) {
    let Some((&setup, ops)) = data.split_first() else {
        return;
    };

    let growth = if setup & 1 == 0 {
        GrowthPolicy::Exact
    } else {
        GrowthPolicy::Doubling
    };
    let max = usize::from(setup >> 1);
    let mut config = ListConfig::new().growth(growth);
    if max > 0 {
        config = config.max_elements(max);
    }

    let mut list: List<u8> = List::with_config(config);
    let mut model: Vec<u8> = Vec::new();

    for pair in ops.chunks_exact(2) {
        let (op, arg) = (pair[0], pair[1]);
        let index = usize::from(arg);

        match op % 6 {
            0 => {
                if list.append(arg).is_ok() {
                    model.push(arg);
                }
            }
            1 => {
                if list.insert_at(arg, index).is_ok() {
                    model.insert(index, arg);
                }
            }
            2 => {
                assert_eq!(list.remove().ok(), model.pop());
            }
            3 => {
                let expected = (index < model.len()).then(|| model.remove(index));
                assert_eq!(list.remove_at(index).ok(), expected);
            }
            4 => {
                // operand reinterpreted as signed so non-positive sizes occur
                if list.init(arg as i8).is_ok() {
                    model = vec![0; usize::from(arg)];
                }
            }
            _ => {
                list.deinit();
                model.clear();
            }
        }

        assert_eq!(list.as_slice(), model.as_slice());
        if max > 0 {
            assert!(list.len() <= max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_ops_empty() {
        fuzz_ops(&[]);
    }

    #[test]
    fn test_fuzz_ops_appends() {
        fuzz_ops(&[0x01, 0, 10, 0, 20, 0, 30, 2, 0]);
    }

    #[test]
    fn test_fuzz_ops_ceiling() {
        // ceiling of 2 elements, exact growth
        fuzz_ops(&[0x04, 0, 1, 0, 2, 0, 3, 1, 0, 3, 1]);
    }

    #[test]
    fn test_fuzz_ops_random() {
        fuzz_ops(&[0xFF; 1024]);
        fuzz_ops(&[0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE]);
    }
}
