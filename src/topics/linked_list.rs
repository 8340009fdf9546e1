//! Singly linked lists: owned-box nodes and the classic sorted merge, in
//! recursive and iterative form.

use std::fmt;

/// A singly linked list node with owned tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub value: i64,
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    pub fn new(value: i64) -> Self {
        Self { value, next: None }
    }

    /// Build a list from a slice, preserving order. Empty slice → `None`.
    pub fn from_slice(values: &[i64]) -> Option<Box<ListNode>> {
        let mut head = None;
        for &value in values.iter().rev() {
            head = Some(Box::new(ListNode { value, next: head }));
        }
        head
    }

    /// Collect the list values into a vector.
    pub fn to_vec(mut node: Option<&ListNode>) -> Vec<i64> {
        let mut values = Vec::new();
        while let Some(current) = node {
            values.push(current.value);
            node = current.next.as_deref();
        }
        values
    }

    /// Number of nodes reachable from this node, inclusive.
    pub fn len(&self) -> usize {
        1 + self.next.as_deref().map_or(0, ListNode::len)
    }
}

impl fmt::Display for ListNode {
    /// Arrow-separated rendering: `1 -> 2 -> 4`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        let mut node = self.next.as_deref();
        while let Some(current) = node {
            write!(f, " -> {}", current.value)?;
            node = current.next.as_deref();
        }
        Ok(())
    }
}

/// Merge two sorted lists recursively. Stable: on ties the left list's
/// node comes first.
///
/// `1 -> 2 -> 4` merged with `1 -> 3 -> 4` → `1 -> 1 -> 2 -> 3 -> 4 -> 4`
pub fn merge_sorted(
    a: Option<Box<ListNode>>,
    b: Option<Box<ListNode>>,
) -> Option<Box<ListNode>> {
    match (a, b) {
        (None, b) => b,
        (a, None) => a,
        (Some(mut x), Some(mut y)) => {
            if x.value <= y.value {
                x.next = merge_sorted(x.next.take(), Some(y));
                Some(x)
            } else {
                y.next = merge_sorted(Some(x), y.next.take());
                Some(y)
            }
        }
    }
}

/// Iterative merge with a cursor on the output tail; same ordering
/// guarantees as [`merge_sorted`], constant extra space.
pub fn merge_sorted_iterative(
    mut a: Option<Box<ListNode>>,
    mut b: Option<Box<ListNode>>,
) -> Option<Box<ListNode>> {
    let mut head = None;
    let mut tail = &mut head;
    while let (Some(x), Some(y)) = (&a, &b) {
        let source = if x.value <= y.value { &mut a } else { &mut b };
        if let Some(mut node) = source.take() {
            *source = node.next.take();
            tail = &mut tail.insert(node).next;
        }
    }
    *tail = a.or(b);
    head
}
