use crate::move_list::MoveList;
use crate::rules::Rules;

/// Executes a perft run starting from the standard initial position.
///
/// # Arguments
///
/// * `depth` - Number of complete turns to expand from the initial position.
///   A depth of `1` counts the immediate legal turns; larger values walk the
///   tree recursively.
///
/// # Returns
///
/// The total leaf count of the tree.
pub fn perft_root(depth: u32) -> u64 {
    perft(&Rules::new(), depth)
}

/// Counts the leaves of the game tree below `rules`.
///
/// A jump chain is one turn. A position where the side to move has no legal
/// turn counts as a single leaf at any depth.
pub fn perft(rules: &Rules, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let move_list = MoveList::new(rules);
    if move_list.is_empty() {
        return 1;
    }
    if depth == 1 {
        return move_list.count() as u64;
    }

    move_list
        .successors()
        .map(|(_, next)| perft(next, depth - 1))
        .sum()
}
