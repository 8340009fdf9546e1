use rstest::rstest;

use prepkit::topics::linked_list::{merge_sorted, merge_sorted_iterative, ListNode};

#[rstest]
fn test_from_slice_round_trips() {
    let list = ListNode::from_slice(&[1, 2, 4]);
    assert_eq!(ListNode::to_vec(list.as_deref()), vec![1, 2, 4]);
    assert!(ListNode::from_slice(&[]).is_none());
}

#[rstest]
fn test_len_counts_nodes() {
    let list = ListNode::from_slice(&[1, 2, 4]);
    assert_eq!(list.as_deref().map(ListNode::len), Some(3));
    assert_eq!(ListNode::new(7).len(), 1);
}

#[rstest]
fn test_display_uses_arrows() {
    let list = ListNode::from_slice(&[1, 2, 4]);
    let head = list.as_deref().map(ListNode::to_string);
    assert_eq!(head.as_deref(), Some("1 -> 2 -> 4"));
    assert_eq!(ListNode::new(5).to_string(), "5");
}

#[rstest]
#[case(&[1, 2, 4], &[1, 3, 4], &[1, 1, 2, 3, 4, 4])]
#[case(&[1, 3], &[2, 4, 5], &[1, 2, 3, 4, 5])]
#[case(&[], &[], &[])]
#[case(&[], &[0], &[0])]
#[case(&[2], &[], &[2])]
fn test_merge_sorted_variants_agree(
    #[case] a: &[i64],
    #[case] b: &[i64],
    #[case] expected: &[i64],
) {
    let merged = merge_sorted(ListNode::from_slice(a), ListNode::from_slice(b));
    assert_eq!(ListNode::to_vec(merged.as_deref()), expected);

    let merged = merge_sorted_iterative(ListNode::from_slice(a), ListNode::from_slice(b));
    assert_eq!(ListNode::to_vec(merged.as_deref()), expected);
}

#[rstest]
fn test_merge_preserves_remaining_tail() {
    let merged = merge_sorted(ListNode::from_slice(&[1, 2]), ListNode::from_slice(&[5, 6, 7]));
    assert_eq!(ListNode::to_vec(merged.as_deref()), vec![1, 2, 5, 6, 7]);
}
