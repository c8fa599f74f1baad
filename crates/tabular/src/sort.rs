//! Indirect in-place merge sort over `f64` keys.
//!
//! [`indirect_sort`] sorts the keys ascending and returns the permutation
//! that maps sorted positions back to original positions, so parallel
//! arrays can be reordered with [`sort_by_index`] without pairing keys and
//! payloads into one buffer.

/// Ranges at or below this length sort by exchange instead of recursing.
const SORT_THRESHOLD: usize = 7;

/// Sorts `data` ascending in place and returns the index permutation.
///
/// `perm[i]` is the original position of the value now at `i`.
///
/// # Example
///
/// ```
/// use tabular::sort::indirect_sort;
///
/// let mut keys = vec![9.0, 8.6, 0.2, 5.9];
/// let perm = indirect_sort(&mut keys);
/// assert_eq!(keys, vec![0.2, 5.9, 8.6, 9.0]);
/// assert_eq!(perm, vec![2, 3, 1, 0]);
/// ```
pub fn indirect_sort(data: &mut [f64]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..data.len()).collect();
    merge_sort(data, &mut idx, 0, data.len());
    idx
}

/// Rebuilds `data` in permutation order: element `i` of the result is
/// `data[perm[i]]`.
///
/// # Panics
///
/// When an index in `perm` is out of range for `data`.
pub fn sort_by_index<T: Clone>(data: &[T], perm: &[usize]) -> Vec<T> {
    perm.iter().map(|&i| data[i].clone()).collect()
}

fn exchange_sort(data: &mut [f64], idx: &mut [usize], l: usize, r: usize) {
    for x in l..r {
        for y in (x + 1)..r {
            if data[x] > data[y] {
                idx.swap(x, y);
                data.swap(x, y);
            }
        }
    }
}

fn merge_sort(data: &mut [f64], idx: &mut [usize], l: usize, r: usize) {
    if l + SORT_THRESHOLD >= r {
        exchange_sort(data, idx, l, r);
        return;
    }

    let mut c = (l + r) / 2;
    if (l + r) % 2 != 0 {
        c += 1;
    }

    merge_sort(data, idx, l, c);
    merge_sort(data, idx, c, r);

    // Already ordered across the seam.
    if data[c - 1] <= data[c] {
        return;
    }

    merge(data, idx, l, c, r);
}

/// Merges the sorted runs `[l, c)` and `[c, r)` in place by block swaps.
fn merge(data: &mut [f64], idx: &mut [usize], l: usize, c: usize, r: usize) {
    let mut x = l;
    let mut y = c;

    while x < r && y < r {
        if data[x] <= data[y] {
            x += 1;
            if x < y {
                continue;
            }
        } else {
            let ylast = run_end(data, x, y, r);
            multi_swap(data, idx, x, y, ylast);
        }

        // The left cursor caught up with the right run; pull the remaining
        // minimum forward until the tail is ordered.
        while x < r {
            y = last_min(data, x, r);
            if y == x {
                x += 1;
            } else {
                break;
            }
        }
    }
}

/// End of the run starting at `y` whose values belong before `data[x]`.
fn run_end(data: &[f64], x: usize, y: usize, r: usize) -> usize {
    let first = data[y];
    let mut end = y + 1;
    while end < r && !(data[end] >= data[x] || data[end] < first) {
        end += 1;
    }
    end
}

/// Swaps the run `[y, ylast)` into place at `x`, stopping early once the
/// sequence is locally ordered.
fn multi_swap(data: &mut [f64], idx: &mut [usize], mut x: usize, mut y: usize, ylast: usize) {
    while y < ylast {
        idx.swap(x, y);
        data.swap(x, y);
        x += 1;
        y += 1;
        if y >= ylast || data[x] <= data[y] {
            return;
        }
    }
}

/// Position of the last `<=`-minimum in `[l, r)`.
fn last_min(data: &[f64], l: usize, r: usize) -> usize {
    let mut m = l;
    for x in (l + 1)..r {
        if data[x] <= data[m] {
            m = x;
        }
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_is_permutation(perm: &[usize], len: usize) {
        let mut seen = vec![false; len];
        for &p in perm {
            assert!(p < len, "index {p} out of range");
            assert!(!seen[p], "index {p} repeated");
            seen[p] = true;
        }
    }

    #[test]
    fn test_small_ranges_use_exchange() {
        let mut data = vec![3.0, 1.0, 2.0];
        let perm = indirect_sort(&mut data);
        assert_eq!(data, vec![1.0, 2.0, 3.0]);
        assert_eq!(perm, vec![1, 2, 0]);
    }

    #[test]
    fn test_sort_interleaved() {
        let mut data = vec![5.0, 6.0, 7.0, 8.0, 9.0, 0.0, 1.0, 2.0, 3.0, 4.0];
        let perm = indirect_sort(&mut data);
        assert_eq!(data, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(perm, vec![5, 6, 7, 8, 9, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_reverse_descending() {
        let mut data: Vec<f64> = (0..32).rev().map(f64::from).collect();
        let orig = data.clone();
        let perm = indirect_sort(&mut data);
        for win in data.windows(2) {
            assert!(win[0] <= win[1]);
        }
        assert_is_permutation(&perm, 32);
        for (i, &p) in perm.iter().enumerate() {
            assert_eq!(orig[p], data[i]);
        }
    }

    #[test]
    fn test_sort_by_index_pairs_parallel_data() {
        let mut keys = vec![0.9, 0.1, 0.5, 0.3];
        let names = vec!["d", "a", "c", "b"];
        let perm = indirect_sort(&mut keys);
        assert_eq!(sort_by_index(&names, &perm), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_duplicate_keys() {
        let mut data = vec![2.0, 1.0, 2.0, 1.0, 0.0, 2.0, 1.0, 0.0, 2.0, 1.0, 0.0, 1.0];
        let orig = data.clone();
        let perm = indirect_sort(&mut data);
        for win in data.windows(2) {
            assert!(win[0] <= win[1]);
        }
        assert_is_permutation(&perm, orig.len());
        for (i, &p) in perm.iter().enumerate() {
            assert_eq!(orig[p], data[i]);
        }
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<f64> = Vec::new();
        assert!(indirect_sort(&mut empty).is_empty());

        let mut one = vec![4.2];
        assert_eq!(indirect_sort(&mut one), vec![0]);
        assert_eq!(one, vec![4.2]);
    }
}
