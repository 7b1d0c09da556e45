mod tree;

use std::collections::HashMap;

use tracing::trace;

pub use tree::TreeNode;

/// Counts downward paths (from any node to any of its descendants, or a single
/// node) whose values sum to `target`, in one traversal.
///
/// The frequency map holds the prefix sums of the current root-to-node chain
/// only; a path ending at a node sums to `target` exactly when some ancestor's
/// prefix equals `prefix - target`. Prefixes are widened to `i128`, so no
/// `i64` input can overflow them.
pub fn count_paths(root: Option<&TreeNode>, target: i64) -> usize {
    let mut prefix_counts = HashMap::from([(0_i128, 1_usize)]);
    let target = i128::from(target);
    let count = root.map_or(0, |node| count_from(node, 0, target, &mut prefix_counts));
    trace!(goal = target, paths = count, "counted paths");
    count
}

fn count_from(
    node: &TreeNode,
    prefix: i128,
    target: i128,
    prefix_counts: &mut HashMap<i128, usize>,
) -> usize {
    let prefix = prefix + i128::from(node.val);
    let mut count = prefix_counts.get(&(prefix - target)).copied().unwrap_or(0);

    *prefix_counts.entry(prefix).or_insert(0) += 1;
    for child in [&node.left, &node.right].into_iter().flatten() {
        count += count_from(child, prefix, target, prefix_counts);
    }
    if let Some(seen) = prefix_counts.get_mut(&prefix) {
        *seen -= 1;
    }

    count
}

/// O(n * height) reference: starts a downward walk at every node.
pub fn count_paths_naive(root: Option<&TreeNode>, target: i64) -> usize {
    let Some(node) = root else {
        return 0;
    };
    let children = [&node.left, &node.right]
        .into_iter()
        .flatten()
        .map(|child| count_paths_naive(Some(&**child), target))
        .sum::<usize>();
    walks_from(node, 0, i128::from(target)) + children
}

fn walks_from(node: &TreeNode, sum: i128, target: i128) -> usize {
    let sum = sum + i128::from(node.val);
    let here = usize::from(sum == target);
    here + [&node.left, &node.right]
        .into_iter()
        .flatten()
        .map(|child| walks_from(child, sum, target))
        .sum::<usize>()
}
