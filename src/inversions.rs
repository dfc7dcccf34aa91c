use crate::state::{State, Tile};

/// Counts pairs `i < j` where `values[i] > values[j]`.
///
/// Merge sort based so it stays O(n log n) on large boards.
pub fn count_inversions(values: &[Tile]) -> u64 {
    let mut values = values.to_vec();
    let mut scratch = values.clone();
    sort_and_count(&mut values, &mut scratch)
}

/// Inversions among the non-blank tiles in row-major order.
pub fn board_inversions(state: &State) -> u64 {
    let values: Vec<Tile> = state.tiles().iter().cloned().filter(|&t| t != 0).collect();
    count_inversions(&values)
}

fn sort_and_count(values: &mut [Tile], scratch: &mut [Tile]) -> u64 {
    let len = values.len();
    if len < 2 {
        return 0;
    }

    let mid = len / 2;
    let mut inversions = {
        let (left, right) = values.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        sort_and_count(left, left_scratch) + sort_and_count(right, right_scratch)
    };

    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < len {
        if values[i] <= values[j] {
            scratch[k] = values[i];
            i += 1;
        } else {
            scratch[k] = values[j];
            j += 1;
            // everything left in the left half is greater than values[j]
            inversions += (mid - i) as u64;
        }
        k += 1;
    }
    scratch[k..k + mid - i].copy_from_slice(&values[i..mid]);
    k += mid - i;
    scratch[k..].copy_from_slice(&values[j..]);

    values.copy_from_slice(scratch);
    inversions
}
