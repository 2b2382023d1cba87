use crate::Sequence;

fn sample() -> Sequence<i32> {
    let mut seq = Sequence::with_capacity(10);
    seq.push_back(2).push_back(42).push_back(1).push_back(87);
    seq
}

#[test]
fn test_index_operator() {
    let mut seq = sample();
    assert_eq!(seq[0], 2);
    assert_eq!(seq[3], 87);
    seq[2] = 5;
    assert_eq!(seq[2], 5);
    assert_eq!(seq.len(), 4);
}

#[test]
#[should_panic]
fn test_index_operator_past_len_panics() {
    let seq = sample();
    // Slot 4 is allocated but not part of the sequence.
    assert_eq!(seq[4], 0);
}

#[test]
fn test_at_is_checked() {
    let mut seq = sample();
    assert_eq!(*seq.at(1).unwrap(), 42);
    *seq.at_mut(1).unwrap() = 43;
    assert_eq!(seq[1], 43);

    let err = seq.at(87).unwrap_err();
    assert!(err.is_out_of_range());
    assert_eq!(err.to_string(), "at: index 87 out of range 4");
    assert!(seq.at(4).unwrap_err().is_out_of_range());
    assert!(seq.at_mut(4).is_err());
}

#[test]
fn test_get_stops_at_len() {
    let mut seq = sample();
    assert_eq!(seq.get(3), Some(&87));
    assert_eq!(seq.get(4), None);
    assert!(seq.get_mut(9).is_none());
    if let Some(v) = seq.get_mut(0) {
        *v = 20;
    }
    assert_eq!(seq[0], 20);
}

#[test]
fn test_from_slice() {
    let seq = Sequence::from_slice(&[3, 2, 8, 1], 5).unwrap();
    assert_eq!(seq[0], 3);
    assert_eq!(seq[3], 1);
    assert_eq!(seq.len(), 4);
    assert_eq!(seq.capacity(), 5);

    let seq = Sequence::from_slice(&[3, 2, 8], 3).unwrap();
    assert!(seq.is_full());

    let seq = Sequence::<i32>::from_slice(&[], 0).unwrap();
    assert_eq!(seq.capacity(), 0);
}

#[test]
fn test_from_slice_longer_than_capacity_fails() {
    let err = Sequence::from_slice(&[2, 9, 5, 0], 3).unwrap_err();
    assert!(err.is_invalid_arg());
}

#[test]
fn test_front_and_back() {
    let mut seq = sample();
    assert_eq!(*seq.front().unwrap(), 2);
    assert_eq!(*seq.back().unwrap(), 87);
    *seq.front_mut().unwrap() = 1;
    *seq.back_mut().unwrap() = 99;
    assert_eq!(seq.as_slice(), &[1, 42, 1, 99]);

    let single = Sequence::from(vec![7]);
    assert_eq!(single.front().unwrap(), single.back().unwrap());
}

#[test]
fn test_front_and_back_on_empty_fail() {
    let mut seq = Sequence::<i32>::new();
    assert!(seq.front().unwrap_err().is_out_of_range());
    assert!(seq.back().unwrap_err().is_out_of_range());
    assert!(seq.front_mut().is_err());
    assert!(seq.back_mut().is_err());
}
