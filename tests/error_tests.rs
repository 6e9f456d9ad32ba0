use growvec::{growvec, GrowVec, GrowVecError};

#[test]
fn test_try_reserve_success() {
    let mut vec = growvec![1, 2, 3];

    assert!(vec.try_reserve(100).is_ok());
    assert!(vec.capacity() >= 103);
    assert_eq!(vec.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_try_reserve_capacity_overflow() {
    let mut vec: GrowVec<u64> = GrowVec::new();

    let result = vec.try_reserve(usize::MAX);
    assert!(matches!(
        result,
        Err(GrowVecError::CapacityOverflow { .. })
    ));
}

#[test]
fn test_try_reserve_length_overflow() {
    let mut vec = growvec![1u8];

    let result = vec.try_reserve(usize::MAX);
    assert_eq!(
        result,
        Err(GrowVecError::CapacityOverflow {
            requested: usize::MAX
        })
    );
}

#[test]
fn test_vector_unchanged_after_failed_reserve() {
    let mut vec = growvec![1, 2, 3];
    let capacity = vec.capacity();

    let _ = vec.try_reserve(usize::MAX);

    assert_eq!(vec.as_slice(), &[1, 2, 3]);
    assert_eq!(vec.capacity(), capacity);
}

#[test]
fn test_error_display() {
    let overflow = GrowVecError::CapacityOverflow { requested: 5 };
    assert_eq!(
        overflow.to_string(),
        "capacity overflow: cannot allocate 5 slots"
    );

    let failed = GrowVecError::AllocationFailed { bytes: 1024 };
    assert_eq!(failed.to_string(), "allocation failed: 1024 bytes requested");
}

#[test]
fn test_error_is_comparable_and_clonable() {
    let err = GrowVecError::CapacityOverflow { requested: 5 };

    assert_eq!(err.clone(), err);
    assert_ne!(err, GrowVecError::AllocationFailed { bytes: 5 });
}

#[test]
#[should_panic(expected = "index 3 out of bounds for vector of length 3")]
fn test_at_out_of_bounds() {
    let vec = growvec![1, 2, 3];
    let _ = vec.at(3);
}

#[test]
#[should_panic(expected = "index 0 out of bounds for vector of length 0")]
fn test_at_on_empty_vector() {
    let vec: GrowVec<i32> = GrowVec::new();
    let _ = vec.at(0);
}

#[test]
#[should_panic(expected = "insert index 5 out of bounds for vector of length 2")]
fn test_insert_out_of_bounds() {
    let mut vec = growvec![1, 2];
    vec.insert(5, 3);
}

#[test]
#[should_panic(expected = "remove index 2 out of bounds for vector of length 2")]
fn test_remove_out_of_bounds() {
    let mut vec = growvec![1, 2];
    vec.remove(2);
}

#[test]
#[should_panic(expected = "range 2..1 out of bounds for vector of length 3")]
fn test_remove_range_decreasing() {
    let mut vec = growvec![1, 2, 3];
    #[allow(clippy::reversed_empty_ranges)]
    vec.remove_range(2..1);
}

#[test]
#[should_panic(expected = "range 1..7 out of bounds for vector of length 3")]
fn test_remove_range_past_end() {
    let mut vec = growvec![1, 2, 3];
    vec.remove_range(1..7);
}

#[test]
#[should_panic(expected = "range 0..4 out of bounds for vector of length 3")]
fn test_slice_out_of_bounds() {
    let vec = growvec![1, 2, 3];
    let _ = vec.slice(0..4);
}
