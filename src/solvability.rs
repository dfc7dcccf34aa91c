use crate::inversions::board_inversions;
use crate::state::State;

/// Whether the goal can be reached from `state` at all.
///
/// Sliding the blank horizontally never changes the inversion count,
/// sliding it vertically on an odd board changes it by an even number,
/// on an even board it flips its parity together with the blank's row.
pub fn is_solvable(state: &State) -> bool {
    let size = state.size();
    let inversions = board_inversions(state);
    // 1-indexed from the bottom
    let blank_row_from_bottom = size - state.empty_cell().r;

    let inversions_even = inversions % 2 == 0;
    if size % 2 == 1 {
        inversions_even
    } else {
        let row_even = blank_row_from_bottom % 2 == 0;
        (row_even && !inversions_even) || (!row_even && inversions_even)
    }
}
