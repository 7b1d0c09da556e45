use std::collections::VecDeque;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TreeNode {
    pub val: i64,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

struct Slot {
    val: i64,
    left: Option<usize>,
    right: Option<usize>,
}

impl TreeNode {
    pub fn leaf(val: i64) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    /// Builds a tree from level order with holes, where children are listed
    /// only for present nodes: `[1, None, 2, 3]` is `1 -> right 2 -> left 3`.
    ///
    /// Returns `None` for an empty slice or a missing root. Entries left over
    /// once every present node has its two child slots are ignored.
    pub fn from_level_order(values: &[Option<i64>]) -> Option<Box<TreeNode>> {
        let (&root_val, rest) = values.split_first()?;
        let mut slots = vec![Slot {
            val: root_val?,
            left: None,
            right: None,
        }];
        let mut queue = VecDeque::from([0_usize]);
        let mut pending = rest.iter().copied();

        'fill: while let Some(parent) = queue.pop_front() {
            for is_right in [false, true] {
                let Some(entry) = pending.next() else {
                    break 'fill;
                };
                let Some(val) = entry else {
                    continue;
                };
                let id = slots.len();
                slots.push(Slot {
                    val,
                    left: None,
                    right: None,
                });
                if is_right {
                    slots[parent].right = Some(id);
                } else {
                    slots[parent].left = Some(id);
                }
                queue.push_back(id);
            }
        }

        Some(Box::new(assemble(&slots, 0)))
    }

    pub fn node_count(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |n| n.node_count());
        let right = self.right.as_ref().map_or(0, |n| n.node_count());
        1 + left + right
    }
}

fn assemble(slots: &[Slot], id: usize) -> TreeNode {
    let slot = &slots[id];
    TreeNode {
        val: slot.val,
        left: slot.left.map(|c| Box::new(assemble(slots, c))),
        right: slot.right.map(|c| Box::new(assemble(slots, c))),
    }
}
