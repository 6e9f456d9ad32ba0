use growvec::{growvec, GrowVec};

#[test]
fn test_push_front_order() {
    let mut vec = GrowVec::new();
    vec.push_front(3);
    vec.push_front(2);
    vec.push_front(1);

    assert_eq!(vec.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_pop_front_order() {
    let mut vec = growvec![1, 2, 3];

    assert_eq!(vec.pop_front(), Some(1));
    assert_eq!(vec.pop_front(), Some(2));
    assert_eq!(vec.pop_front(), Some(3));
    assert_eq!(vec.pop_front(), None);
}

#[test]
fn test_pop_back_order() {
    let mut vec = growvec![1, 2, 3];

    assert_eq!(vec.pop_back(), Some(3));
    assert_eq!(vec.pop_back(), Some(2));
    assert_eq!(vec.pop_back(), Some(1));
    assert_eq!(vec.pop_back(), None);
}

#[test]
fn test_mixed_ends() {
    let mut vec = GrowVec::new();
    vec.push_back(2);
    vec.push_front(1);
    vec.push_back(3);

    assert_eq!(vec.as_slice(), &[1, 2, 3]);
    assert_eq!(vec.pop_front(), Some(1));
    assert_eq!(vec.pop_back(), Some(3));
    assert_eq!(vec.as_slice(), &[2]);
}

#[test]
fn test_insert_at_each_position() {
    let mut vec = growvec![1, 3];
    vec.insert(1, 2);
    assert_eq!(vec.as_slice(), &[1, 2, 3]);

    vec.insert(0, 0);
    assert_eq!(vec.as_slice(), &[0, 1, 2, 3]);

    vec.insert(4, 4);
    assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 4]);
}

#[test]
fn test_insert_copies() {
    let mut vec = growvec![1, 5];
    vec.insert_copies(1, 3, 9);

    assert_eq!(vec.as_slice(), &[1, 9, 9, 9, 5]);
}

#[test]
fn test_insert_copies_zero_count() {
    let mut vec = growvec![1, 2];
    vec.insert_copies(1, 0, 9);

    assert_eq!(vec.as_slice(), &[1, 2]);
}

#[test]
fn test_insert_many_from_range() {
    let mut vec = growvec![0, 9];
    vec.insert_many(1, 1..=3);

    assert_eq!(vec.as_slice(), &[0, 1, 2, 3, 9]);
}

#[test]
fn test_insert_from_slice_at_end() {
    let mut vec = growvec![1, 2];
    vec.insert_from_slice(2, &[3, 4]);

    assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn test_remove_shifts_tail() {
    let mut vec = growvec![1, 2, 3, 4];

    assert_eq!(vec.remove(1), 2);
    assert_eq!(vec.as_slice(), &[1, 3, 4]);
    assert_eq!(vec.remove(2), 4);
    assert_eq!(vec.as_slice(), &[1, 3]);
}

#[test]
fn test_remove_range() {
    let mut vec = growvec![1, 2, 3, 4, 5, 6];
    vec.remove_range(1..4);

    assert_eq!(vec.as_slice(), &[1, 5, 6]);
}

#[test]
fn test_remove_range_empty_is_noop() {
    let mut vec = growvec![1, 2, 3];
    vec.remove_range(1..1);

    assert_eq!(vec.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_remove_range_whole_vector() {
    let mut vec = growvec![1, 2, 3];
    let capacity = vec.capacity();
    vec.remove_range(0..3);

    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), capacity);
}

#[test]
fn test_truncate_keeps_capacity() {
    let mut vec = growvec![1, 2, 3, 4, 5];
    let capacity = vec.capacity();

    vec.truncate(2);
    assert_eq!(vec.as_slice(), &[1, 2]);
    assert_eq!(vec.capacity(), capacity);

    // Truncating past the end does nothing.
    vec.truncate(10);
    assert_eq!(vec.len(), 2);
}

#[test]
fn test_resize_grow_and_shrink() {
    let mut vec: GrowVec<i32> = growvec![1, 2, 3];

    vec.resize(5);
    assert_eq!(vec.as_slice(), &[1, 2, 3, 0, 0]);

    let capacity = vec.capacity();
    vec.resize(1);
    assert_eq!(vec.as_slice(), &[1]);
    assert_eq!(vec.capacity(), capacity);
}

#[test]
fn test_sort() {
    let mut vec = growvec![5, 3, 1, 4, 2];
    vec.sort();

    assert_eq!(vec.as_slice(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_sort_by_descending() {
    let mut vec = growvec![5, 3, 1, 4, 2];
    vec.sort_by(|a, b| b.cmp(a));

    assert_eq!(vec.as_slice(), &[5, 4, 3, 2, 1]);
}

#[test]
fn test_slice_is_independent() {
    let mut vec = growvec![1, 2, 3, 4, 5];
    let middle = vec.slice(1..4);

    assert_eq!(middle.as_slice(), &[2, 3, 4]);

    vec[1] = 99;
    assert_eq!(middle.as_slice(), &[2, 3, 4]);
}

#[test]
fn test_slice_empty_range() {
    let vec = growvec![1, 2, 3];
    let empty = vec.slice(2..2);

    assert!(empty.is_empty());
}

#[test]
fn test_swap_exchanges_buffers() {
    let mut a = growvec![1, 2, 3];
    let mut b = growvec![9];

    a.swap(&mut b);

    assert_eq!(a.as_slice(), &[9]);
    assert_eq!(b.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_extend_from_slice() {
    let mut vec = growvec![1];
    vec.extend_from_slice(&[2, 3]);

    assert_eq!(vec.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_extend_from_iterator() {
    let mut vec = growvec![1];
    vec.extend(2..=4);

    assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn test_reserve_grows_capacity_only() {
    let mut vec = growvec![1, 2];
    vec.reserve(100);

    assert!(vec.capacity() >= 102);
    assert_eq!(vec.as_slice(), &[1, 2]);
}

#[test]
fn test_get_and_get_mut() {
    let mut vec = growvec![1, 2, 3];

    assert_eq!(vec.get(2), Some(&3));
    assert_eq!(vec.get(3), None);

    if let Some(value) = vec.get_mut(0) {
        *value = 10;
    }
    assert_eq!(vec.as_slice(), &[10, 2, 3]);
}

#[test]
fn test_front_back_mut() {
    let mut vec = growvec![1, 2, 3];

    *vec.front_mut().unwrap() = 10;
    *vec.back_mut().unwrap() = 30;

    assert_eq!(vec.as_slice(), &[10, 2, 30]);
}
