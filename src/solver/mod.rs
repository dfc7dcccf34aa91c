pub mod a_star;
mod backtracking;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use fnv::{FnvHashMap, FnvHashSet};
use typed_arena::Arena;

use crate::config::{Heuristic, Limits};
use crate::moves::Moves;
use crate::solvability::is_solvable;
use crate::state::State;
use crate::Solve;

use self::a_star::{SearchNode, Stats};
use self::backtracking::backtrack_path;

/// How a solve session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// States from start to goal, both included
    Solved(Vec<State>),
    /// Rejected by the parity check, nothing was searched
    Unsolvable,
    /// The frontier ran out without reaching the goal
    NoPath,
    BudgetExceeded,
    Cancelled,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::Solved(ref path) => write!(f, "Solved in {} moves", path.len() - 1),
            Outcome::Unsolvable => write!(f, "Puzzle unsolvable"),
            Outcome::NoPath => write!(f, "No path found"),
            Outcome::BudgetExceeded => write!(f, "Search budget exceeded"),
            Outcome::Cancelled => write!(f, "Search cancelled"),
        }
    }
}

pub struct SolverOk {
    pub heuristic: Heuristic,
    pub outcome: Outcome,
    pub stats: Stats,
    pub elapsed: Duration,
}

impl SolverOk {
    fn new(heuristic: Heuristic, outcome: Outcome, stats: Stats, elapsed: Duration) -> Self {
        Self {
            heuristic,
            outcome,
            stats,
            elapsed,
        }
    }

    pub fn path(&self) -> Option<&[State]> {
        match self.outcome {
            Outcome::Solved(ref path) => Some(path),
            _ => None,
        }
    }

    pub fn moves(&self) -> Option<Moves> {
        self.path().map(Moves::from_path)
    }

    /// Path length - 1
    pub fn move_cnt(&self) -> Option<usize> {
        self.path().map(|path| path.len() - 1)
    }

    pub fn nodes_explored(&self) -> usize {
        self.stats.nodes_explored()
    }

    pub fn nodes_expanded(&self) -> usize {
        self.stats.nodes_expanded()
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.heuristic, self.outcome)?;
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for State {
    fn solve(&self, heuristic: Heuristic, limits: &Limits) -> SolverOk {
        solve(self, heuristic, limits)
    }
}

/// One solve session: parity check, then A* with `heuristic`.
pub fn solve(start: &State, heuristic: Heuristic, limits: &Limits) -> SolverOk {
    let started = Instant::now();
    let mut stats = Stats::new();

    debug!("Solving using {}", heuristic);
    if !is_solvable(start) {
        debug!("Unsolvable, skipping search");
        return SolverOk::new(heuristic, Outcome::Unsolvable, stats, started.elapsed());
    }

    let goal = start.goal_state();
    let outcome = search(
        start,
        &goal,
        limits,
        started,
        |state| heuristic.estimate(state),
        &mut stats,
    );
    debug!("{} finished: {}", heuristic, outcome);

    SolverOk::new(heuristic, outcome, stats, started.elapsed())
}

/// Independent sessions, one thread each. Results are in the same order as `heuristics`.
pub fn solve_all(start: &State, heuristics: &[Heuristic], limits: &Limits) -> Vec<SolverOk> {
    thread::scope(|scope| {
        let handles: Vec<_> = heuristics
            .iter()
            .map(|&heuristic| scope.spawn(move || solve(start, heuristic, limits)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|err| panic::resume_unwind(err)))
            .collect()
    })
}

/// All sessions ended the same way and found paths of the same length.
///
/// With admissible heuristics a mismatch means one of them is broken.
pub fn consistent(solutions: &[SolverOk]) -> bool {
    solutions.windows(2).all(|pair| {
        mem::discriminant(&pair[0].outcome) == mem::discriminant(&pair[1].outcome)
            && pair[0].move_cnt() == pair[1].move_cnt()
    })
}

fn search<Estimate>(
    start: &State,
    goal: &State,
    limits: &Limits,
    started: Instant,
    heuristic: Estimate,
    stats: &mut Stats,
) -> Outcome
where
    Estimate: Fn(&State) -> f64,
{
    debug!("Search called");

    let arena = Arena::new();
    let mut closed: FnvHashSet<&State> = FnvHashSet::default();
    let mut f_scores: FnvHashMap<&State, f64> = FnvHashMap::default();
    let mut to_visit = BinaryHeap::new();
    let mut counter = 0;

    let start_node: &SearchNode<'_> =
        arena.alloc(SearchNode::new(start.clone(), None, 0, heuristic(start), counter));
    f_scores.insert(&start_node.state, start_node.cost());
    to_visit.push(Reverse(start_node));

    while let Some(Reverse(cur_node)) = to_visit.pop() {
        if closed.contains(&cur_node.state) {
            stats.add_reached_duplicate(cur_node);
            continue;
        }

        if limits.is_cancelled() {
            debug!("Cancelled");
            return Outcome::Cancelled;
        }

        if cur_node.state == *goal {
            debug!("Solved, backtracking path");
            return Outcome::Solved(backtrack_path(cur_node));
        }

        if limits
            .max_expanded
            .map_or(false, |max| stats.nodes_expanded() >= max)
            || limits
                .time_limit
                .map_or(false, |limit| started.elapsed() >= limit)
        {
            debug!("Out of budget after {} expansions", stats.nodes_expanded());
            return Outcome::BudgetExceeded;
        }

        closed.insert(&cur_node.state);
        if stats.add_expanded(cur_node) {
            trace!("Expanded new depth: {}", cur_node.dist);
            trace!("{:?}", stats);
        }

        for neighbor_state in cur_node.state.neighbors() {
            // first-closed-wins, even when an inconsistent estimate finds a cheaper way back
            if closed.contains(&neighbor_state) {
                continue;
            }

            // g lives on the node, only f needs a lookup by state
            let dist = cur_node.dist + 1;
            let h = heuristic(&neighbor_state);
            // `<=` so an equally good path is queued again,
            // the closed set still prevents expanding it twice
            let improved = match f_scores.get(&neighbor_state) {
                None => true,
                Some(&best) => f64::from(dist) + h <= best,
            };
            if !improved {
                continue;
            }

            counter += 1;
            let next_node: &SearchNode<'_> = arena.alloc(SearchNode::new(
                neighbor_state,
                Some(cur_node),
                dist,
                h,
                counter,
            ));
            f_scores.insert(&next_node.state, next_node.cost());
            stats.add_created(next_node);
            to_visit.push(Reverse(next_node));
        }
    }

    debug!("Frontier exhausted");
    Outcome::NoPath
}
