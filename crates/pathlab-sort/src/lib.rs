//! Textbook comparison sorts.
//!
//! All routines sort ascending in place and are stable.
//!
//! | Routine | Time | Extra space |
//! |---|---|---|
//! | [`bubble_sort`] | O(n²) | O(1) |
//! | [`shaker_sort`] | O(n²) | O(1) |
//! | [`insertion_sort`] | O(n²) | O(1) |
//! | [`merge_sort`] | O(n log n) | O(n) |

/// Repeatedly bubble the largest remaining element to the end. Stops early
/// once a pass makes no swap.
pub fn bubble_sort<T: Ord>(v: &mut [T]) {
    let mut end = v.len();
    while end > 1 {
        let mut swapped = false;
        for i in 1..end {
            if v[i - 1] > v[i] {
                v.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        end -= 1;
    }
}

/// Cocktail shaker sort: bubble sort alternating forward and backward
/// passes, shrinking the unsorted window from both ends.
pub fn shaker_sort<T: Ord>(v: &mut [T]) {
    if v.len() < 2 {
        return;
    }
    let (mut lo, mut hi) = (0, v.len() - 1);
    while lo < hi {
        let mut swapped = false;
        for i in lo..hi {
            if v[i] > v[i + 1] {
                v.swap(i, i + 1);
                swapped = true;
            }
        }
        hi -= 1;
        for i in (lo + 1..=hi).rev() {
            if v[i] < v[i - 1] {
                v.swap(i, i - 1);
                swapped = true;
            }
        }
        lo += 1;
        if !swapped {
            break;
        }
    }
}

/// Grow a sorted prefix by sinking each new element into place.
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && v[j - 1] > v[j] {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Top-down merge sort through a scratch buffer.
pub fn merge_sort<T: Ord + Clone>(v: &mut [T]) {
    if v.len() < 2 {
        return;
    }
    let mut scratch = v.to_vec();
    split_merge(&mut scratch, v);
    log::trace!("merge_sort: sorted {} elements", v.len());
}

// Sorts `dst` using `src` as a same-content buffer; the two swap roles at
// each level so no copy back is needed.
fn split_merge<T: Ord + Clone>(src: &mut [T], dst: &mut [T]) {
    let n = dst.len();
    if n < 2 {
        return;
    }
    let mid = n / 2;
    {
        let (src_lo, src_hi) = src.split_at_mut(mid);
        let (dst_lo, dst_hi) = dst.split_at_mut(mid);
        split_merge(dst_lo, src_lo);
        split_merge(dst_hi, src_hi);
    }
    merge(&src[..mid], &src[mid..], dst);
}

fn merge<T: Ord + Clone>(left: &[T], right: &[T], out: &mut [T]) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        // `<=` keeps equal elements in their original order.
        let take_left = j == right.len() || (i < left.len() && left[i] <= right[j]);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}
