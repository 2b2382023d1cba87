use crate::Sequence;

#[test]
fn test_contains_and_count() {
    let seq = Sequence::from(vec![4, 7, 4, 1, 4]);
    assert!(seq.contains(&7));
    assert!(!seq.contains(&8));
    assert_eq!(seq.count(&4), 3);
    assert_eq!(seq.count(&1), 1);
    assert_eq!(seq.count(&8), 0);
}

#[test]
fn test_find_first_and_last() {
    let seq = Sequence::from(vec![4, 7, 4, 1, 4, 7]);
    assert_eq!(seq.find(&4), 0);
    assert_eq!(seq.find_first(&7), 1);
    assert_eq!(seq.find_last(&4), 4);
    assert_eq!(seq.find_last(&7), 5);
    assert_eq!(seq.find_first(&1), seq.find_last(&1));
}

#[test]
fn test_find_returns_len_when_absent() {
    let seq = Sequence::from(vec![4, 7]);
    assert_eq!(seq.find(&9), 2);
    assert_eq!(seq.find_last(&9), 2);

    let empty = Sequence::<i32>::new();
    assert_eq!(empty.find(&0), 0);
    assert_eq!(empty.find_last(&0), 0);
}

#[test]
fn test_search_ignores_spare_slots() {
    // Spare slots hold `0`; they must not be reported.
    let mut seq = Sequence::with_capacity(10);
    seq.push_back(3).push_back(5);
    assert!(!seq.contains(&0));
    assert_eq!(seq.count(&0), 0);
    assert_eq!(seq.find(&0), 2);

    seq.pop_back();
    assert!(!seq.contains(&5));
}
