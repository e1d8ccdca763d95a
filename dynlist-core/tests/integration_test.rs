//! Integration tests for the init → append → deinit lifecycle

use dynlist_core::{GrowthPolicy, List, ListConfig, ListError, Status};

fn filled(k: usize, growth: GrowthPolicy) -> List<usize> {
    let mut list = List::with_config(ListConfig::new().growth(growth));
    for i in 0..k {
        list.append(i * 3 + 1).unwrap();
    }
    list
}

#[test]
fn test_end_to_end_append_and_release() {
    let mut list: List<i32> = List::new();

    list.append(10).unwrap();
    list.append(20).unwrap();
    list.append(30).unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(list.as_slice(), &[10, 20, 30]);
    assert_eq!(list.status(), Status::Ok);
    assert_eq!(list.error_code(), 0);

    list.deinit();

    assert_eq!(list.len(), 0);
    assert!(!list.is_allocated());
    assert_eq!(list.status(), Status::Ok);
}

#[test]
fn test_append_sequences_keep_order() {
    for growth in [GrowthPolicy::Exact, GrowthPolicy::Doubling] {
        for k in [0usize, 1, 10, 1000] {
            let list = filled(k, growth);

            assert_eq!(list.len(), k);
            for i in 0..k {
                assert_eq!(list.get(i), Some(&(i * 3 + 1)));
            }
            assert_eq!(list.get(k), None);
        }
    }
}

#[test]
fn test_init_then_inspect() {
    for n in [1usize, 2, 17, 256] {
        let mut list: List<String> = List::new();
        list.init(n).unwrap();

        assert_eq!(list.len(), n);
        assert_eq!(list.status(), Status::Ok);
        assert!(list.as_slice().iter().all(String::is_empty));
    }
}

#[test]
fn test_bad_sizes_do_not_allocate() {
    let mut list: List<i32> = List::new();

    list.init(0).unwrap_err();
    assert_eq!(list.status(), Status::BadSize);
    assert!(!list.is_allocated());

    list.init(-5).unwrap_err();
    assert_eq!(list.status(), Status::BadSize);
    assert!(!list.is_allocated());
    assert_eq!(list.len(), 0);
}

#[test]
fn test_deinit_on_fresh_list_is_noop() {
    let mut list: List<u8> = List::new();
    list.deinit();

    assert_eq!(list.status(), Status::Ok);
    assert_eq!(list.len(), 0);
}

#[test]
fn test_deinit_then_init_matches_fresh() {
    let mut reused: List<u64> = List::new();
    reused.append(99).unwrap();
    reused.deinit();
    reused.init(4).unwrap();

    let mut fresh: List<u64> = List::new();
    fresh.init(4).unwrap();

    assert_eq!(reused, fresh);
    assert_eq!(reused.status(), fresh.status());
    assert_eq!(reused.len(), fresh.len());
}

#[test]
fn test_failed_append_preserves_prior_elements() {
    let cfg = ListConfig::new().max_elements(5);
    let mut list = List::with_config(cfg);
    for v in 1..=5 {
        list.append(v).unwrap();
    }

    let err = list.append(6).unwrap_err();

    assert_eq!(err, ListError::Reallocation { requested: 6 });
    assert_eq!(list.status(), Status::Reallocation);
    assert_eq!(list.error_code(), -4);
    assert_eq!(list.as_slice(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_failure_does_not_block_later_calls() {
    let mut list: List<i32> = List::new();

    let _ = list.init(0);
    assert_eq!(list.status(), Status::BadSize);

    let _ = list.append(1);
    assert_eq!(list.status(), Status::Ok);
    assert_eq!(list.as_slice(), &[1]);
}

#[test]
fn test_caller_checks_status_instead_of_result() {
    let mut list = List::with_config(ListConfig::new().max_elements(1));

    let _ = list.append('x');
    assert!(list.status().is_ok());

    let _ = list.append('y');
    assert!(list.status().is_error());

    let _ = list.insert_at('z', 5);
    assert_eq!(list.status(), Status::IndexOutOfRange);

    assert_eq!(list.as_slice(), &['x']);
}

#[test]
fn test_insert_and_remove_round() {
    let mut list = List::new();
    for v in [1, 2, 4] {
        list.append(v).unwrap();
    }

    list.insert_at(3, 2).unwrap();
    assert_eq!(list.as_slice(), &[1, 2, 3, 4]);

    assert_eq!(list.remove_at(0), Ok(1));
    assert_eq!(list.remove(), Ok(4));
    assert_eq!(list.as_slice(), &[2, 3]);
}
