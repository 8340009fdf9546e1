//! Binary heap drills: the classic percolate-down step on a 1-based
//! array-backed min-heap.

/// Sift a value down into a min-heap until the heap property holds.
///
/// Layout convention: the heap occupies indices `1..len`, children of `i`
/// live at `2i` and `2i + 1`, and index 0 holds the value being placed.
/// `hole` is the currently empty slot; smaller children bubble up through
/// it until the held value fits, then the value lands in the hole. This is
/// the inner step of delete-min and of bottom-up heap construction.
///
/// # Examples
/// ```
/// use prepkit::topics::heaps::percolate_down;
/// let mut heap = vec![6, 0, 2, 3, 5, 4, 8];
/// percolate_down(&mut heap, 1);
/// assert_eq!(heap, vec![6, 2, 4, 3, 5, 6, 8]);
/// ```
pub fn percolate_down(heap: &mut [i64], mut hole: usize) {
    if heap.is_empty() {
        return;
    }
    let last = heap.len() - 1;
    while hole * 2 <= last {
        let mut child = hole * 2;
        if child != last && heap[child + 1] < heap[child] {
            child += 1;
        }
        if heap[child] < heap[0] {
            heap[hole] = heap[child];
        } else {
            break;
        }
        hole = child;
    }
    heap[hole] = heap[0];
}
