use crate::config::Heuristic;
use crate::data::Pos;
use crate::state::State;

// less is better for all of these, the blank never contributes

impl Heuristic {
    pub fn estimate(self, state: &State) -> f64 {
        match self {
            Heuristic::Hamming => hamming(state),
            Heuristic::Manhattan => manhattan(state),
            Heuristic::Euclidean => euclidean(state),
            Heuristic::LinearConflict => linear_conflict(state),
        }
    }
}

/// Iterates over (current position, goal position) of non-blank tiles.
fn placements(state: &State) -> impl Iterator<Item = (Pos, Pos)> + '_ {
    let size = state.size();
    state
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(move |(i, &tile)| (Pos::from_index(i, size), state.goal_pos(tile)))
}

pub fn hamming(state: &State) -> f64 {
    placements(state).filter(|(pos, goal)| pos != goal).count() as f64
}

pub fn manhattan(state: &State) -> f64 {
    manhattan_sum(state) as f64
}

fn manhattan_sum(state: &State) -> usize {
    placements(state).map(|(pos, goal)| pos.dist(goal)).sum()
}

pub fn euclidean(state: &State) -> f64 {
    placements(state).map(|(pos, goal)| pos.euclidean_dist(goal)).sum()
}

pub fn linear_conflict(state: &State) -> f64 {
    (manhattan_sum(state) + 2 * linear_conflicts(state)) as f64
}

/// Number of tiles that have to leave their row or column to resolve all conflicts,
/// counted independently for rows and columns.
pub fn linear_conflicts(state: &State) -> usize {
    let size = state.size();
    let mut total = 0;

    for line in 0..size {
        // goal columns of tiles in this row that belong to this row, left to right
        let mut row_goals = Vec::new();
        // goal rows of tiles in this column that belong to this column, top to bottom
        let mut col_goals = Vec::new();

        for i in 0..size {
            let tile = state[Pos::new(line, i)];
            if tile != 0 {
                let goal = state.goal_pos(tile);
                if goal.r == line {
                    row_goals.push(goal.c);
                }
            }

            let tile = state[Pos::new(i, line)];
            if tile != 0 {
                let goal = state.goal_pos(tile);
                if goal.c == line {
                    col_goals.push(goal.r);
                }
            }
        }

        total += line_conflicts(&row_goals) + line_conflicts(&col_goals);
    }

    total
}

/// `goals` are the goal offsets of tiles sharing a line, in their current order.
///
/// Each reversed pair needs one of its tiles to leave the line.
/// With several tiles reversed against each other,
/// the fewest tiles that have to leave are the ones outside the longest increasing run,
/// counting pairs instead would overestimate.
fn line_conflicts(goals: &[usize]) -> usize {
    // longest strictly increasing subsequence, O(n^2) is fine for a single line
    let mut longest = vec![1; goals.len()];
    for i in 0..goals.len() {
        for j in 0..i {
            if goals[j] < goals[i] && longest[j] + 1 > longest[i] {
                longest[i] = longest[j] + 1;
            }
        }
    }
    goals.len() - longest.iter().max().cloned().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use fnv::FnvHashMap;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::data::DIRECTIONS;
    use crate::state::Tile;

    fn state(grid: Vec<Vec<Tile>>) -> State {
        State::new(grid.len(), &grid).unwrap()
    }

    /// Exact distance from every state reachable from the goal in at most `max_depth` moves.
    fn distances_from_goal(size: usize, max_depth: usize) -> FnvHashMap<State, usize> {
        let goal = State::goal(size).unwrap();
        let mut dists = FnvHashMap::default();
        let mut queue = VecDeque::new();
        dists.insert(goal.clone(), 0);
        queue.push_back(goal);
        while let Some(cur) = queue.pop_front() {
            let d = dists[&cur];
            if d == max_depth {
                continue;
            }
            for next in cur.neighbors() {
                if !dists.contains_key(&next) {
                    dists.insert(next.clone(), d + 1);
                    queue.push_back(next);
                }
            }
        }
        dists
    }

    #[test]
    fn goal_is_zero() {
        for size in 3..6 {
            let goal = State::goal(size).unwrap();
            for &heuristic in &Heuristic::ALL {
                assert_eq!(heuristic.estimate(&goal), 0.0, "{}", heuristic);
            }
        }
    }

    #[test]
    fn one_swap_from_goal() {
        let s = state(vec![vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]]);
        assert_eq!(hamming(&s), 2.0);
        assert_eq!(manhattan(&s), 2.0);
        assert_eq!(euclidean(&s), 2.0);
        assert_eq!(linear_conflict(&s), 2.0);
    }

    #[test]
    fn blank_is_ignored() {
        // blank in the opposite corner of its goal
        let s = state(vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]]);
        assert_eq!(hamming(&s), 8.0);
        assert_eq!(manhattan(&s), 1.0 + 1.0 + 3.0 + 1.0 + 1.0 + 3.0 + 1.0 + 1.0);
    }

    #[test]
    fn euclidean_diagonal() {
        // 1 is at the bottom right of its goal - one row and one column off
        let s = state(vec![vec![5, 2, 3], vec![4, 1, 6], vec![7, 8, 0]]);
        let expected = 2.0 * 2f64.sqrt();
        assert!((euclidean(&s) - expected).abs() < 1e-9);
        assert_eq!(manhattan(&s), 4.0);
    }

    #[test]
    fn single_row_conflict() {
        let s = state(vec![vec![2, 1, 3], vec![4, 5, 6], vec![7, 8, 0]]);
        assert_eq!(linear_conflicts(&s), 1);
        assert_eq!(manhattan(&s), 2.0);
        assert_eq!(linear_conflict(&s), 4.0);
    }

    #[test]
    fn single_column_conflict() {
        let s = state(vec![vec![4, 2, 3], vec![1, 5, 6], vec![7, 8, 0]]);
        assert_eq!(linear_conflicts(&s), 1);
        assert_eq!(linear_conflict(&s), 4.0);
    }

    #[test]
    fn row_and_column_counted_independently() {
        // 1 and 2 swapped in the first row, 3 and 6 swapped in the last column
        let s = state(vec![vec![2, 1, 6], vec![4, 5, 3], vec![7, 8, 0]]);
        assert_eq!(linear_conflicts(&s), 2);
        assert_eq!(linear_conflict(&s), manhattan(&s) + 4.0);
    }

    #[test]
    fn reversed_row_is_admissible() {
        // all three tiles in the first row reversed
        assert_eq!(line_conflicts(&[2, 1, 0]), 2);
        assert_eq!(line_conflicts(&[1, 0]), 1);
        assert_eq!(line_conflicts(&[0, 1, 2]), 0);
        assert_eq!(line_conflicts(&[]), 0);
        // one tile in front of three others
        assert_eq!(line_conflicts(&[3, 0, 1, 2]), 1);
    }

    #[test]
    fn reversed_lines_stay_below_true_distance() {
        // 26 moves from the goal, counting every reversed pair would give 28
        let s = state(vec![vec![7, 8, 0], vec![6, 5, 4], vec![1, 2, 3]]);
        assert_eq!(manhattan(&s), 14.0);
        assert_eq!(linear_conflicts(&s), 5);
        assert_eq!(linear_conflict(&s), 24.0);
        assert!(linear_conflict(&s) <= 26.0);
    }

    #[test]
    fn ordering_and_admissibility() {
        let dists = distances_from_goal(3, 14);
        for (s, &dist) in &dists {
            let m = manhattan(s);
            let lc = linear_conflict(s);
            assert!(lc >= m, "{:?}", s);
            assert!(lc <= dist as f64, "{:?} {} > {}", s, lc, dist);
            assert!(m <= dist as f64, "{:?}", s);
            assert!(euclidean(s) <= m + 1e-9, "{:?}", s);
            assert!(hamming(s) <= m, "{:?}", s);
        }
    }

    #[test]
    fn linear_conflict_dominates_manhattan_on_random_boards() {
        let mut rng = SmallRng::seed_from_u64(3);
        for size in 3..6 {
            let mut s = State::goal(size).unwrap();
            for _ in 0..500 {
                let dir = DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())];
                if let Some(next) = s.slide(dir) {
                    s = next;
                }
                assert!(linear_conflict(&s) >= manhattan(&s));
            }
        }
    }
}
