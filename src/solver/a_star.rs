use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use crate::state::State;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<usize>,
    expanded_states: Vec<usize>,
    duplicate_states: Vec<usize>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    /// Frontier insertions of generated neighbors, the start state is not counted.
    pub fn nodes_explored(&self) -> usize {
        self.created_states.iter().sum()
    }

    /// Pops that were not already closed.
    pub fn nodes_expanded(&self) -> usize {
        self.expanded_states.iter().sum()
    }

    /// Pops of states that were already closed.
    pub fn reached_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_expanded(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.expanded_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode<'_>) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    /// Returns true when this is the first node at its depth.
    fn add(counts: &mut Vec<usize>, node: &SearchNode<'_>) -> bool {
        let mut ret = false;

        let depth = node.dist as usize;
        // while because the start state is not counted as created so depth 0 can be skipped
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "expanded by depth: {:?}", self.expanded_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "total created: {}", self.nodes_explored().separated_string())?;
        writeln!(f, "total expanded: {}", self.nodes_expanded().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.reached_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States created total: {}", self.nodes_explored().separated_string())?;
        writeln!(f, "States expanded total: {}", self.nodes_expanded().separated_string())?;
        writeln!(
            f,
            "Reached duplicates total: {}",
            self.reached_duplicates().separated_string()
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{}",
            "Depth", "Created", "Expanded", "Duplicates"
        )?;
        let depths = self
            .created_states
            .len()
            .max(self.expanded_states.len())
            .max(self.duplicate_states.len());
        let get = |counts: &Vec<usize>, i: usize| counts.get(i).cloned().unwrap_or(0);
        for i in 0..depths {
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{}",
                format!("{}:", i),
                get(&self.created_states, i).separated_string(),
                get(&self.expanded_states, i).separated_string(),
                get(&self.duplicate_states, i).separated_string(),
            )?;
        }
        Ok(())
    }
}

/// A frontier entry.
///
/// Nodes live in an arena for the whole search so the parent links form a tree of plain references.
pub(crate) struct SearchNode<'a> {
    pub(crate) state: State,
    pub(crate) prev: Option<&'a SearchNode<'a>>,
    pub(crate) dist: u32,
    pub(crate) h: f64,
    /// insertion counter, unique per search
    order: u64,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(
        state: State,
        prev: Option<&'a SearchNode<'a>>,
        dist: u32,
        h: f64,
        order: u64,
    ) -> Self {
        Self {
            state,
            prev,
            dist,
            h,
            order,
        }
    }

    pub(crate) fn cost(&self) -> f64 {
        f64::from(self.dist) + self.h
    }
}

impl Debug for SearchNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dist: {}, h: {}, order: {}\n{}",
            self.dist, self.h, self.order, self.state
        )
    }
}

impl PartialOrd for SearchNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Smaller is better: by cost, then heuristic, then distance, then insertion order.
impl Ord for SearchNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost()
            .total_cmp(&other.cost())
            .then_with(|| self.h.total_cmp(&other.h))
            .then_with(|| self.dist.cmp(&other.dist))
            .then_with(|| self.order.cmp(&other.order))
    }
}

// the counter is unique so this agrees with Ord
impl PartialEq for SearchNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for SearchNode<'_> {}
