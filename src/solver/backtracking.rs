use crate::solver::a_star::SearchNode;
use crate::state::State;

/// Follows parent links back to the start, returns states in start -> `final_node` order.
pub(crate) fn backtrack_path(final_node: &SearchNode<'_>) -> Vec<State> {
    let mut ret = Vec::with_capacity(final_node.dist as usize + 1);
    let mut node = Some(final_node);
    while let Some(cur) = node {
        ret.push(cur.state.clone());
        node = cur.prev;
    }
    ret.reverse();
    ret
}
