use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::course::Course;

/// Tree node in the arena-based search tree.
#[derive(Debug)]
pub struct TreeNode {
    /// Course record owned by this node
    pub course: Course,
    /// Index of the left child in the arena, None for absent
    pub left: Option<Index>,
    /// Index of the right child in the arena, None for absent
    pub right: Option<Index>,
}

/// Binary search tree over course records, keyed by course number.
///
/// Uses a generational arena for node storage: the tree holds the root
/// index and each node holds optional child indices, so dropping the
/// tree never recurses through the node graph. No balancing; adversarial
/// insertion order degrades the tree to a list.
///
/// Insertion is unconditional and keys comparing equal route RIGHT.
/// A duplicate key inserted after an equal original therefore lands in
/// the right subtree where `find` never reaches it; the first-inserted
/// record wins every lookup. This is a quirk of the source format
/// (duplicate course numbers are assumed not to occur) and is kept
/// as-is rather than being turned into update-in-place or rejection.
#[derive(Debug)]
pub struct CourseTree {
    arena: Arena<TreeNode>,
    root: Option<Index>,
}

impl Default for CourseTree {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a course, keeping the search-tree order by course number.
    ///
    /// Inserting into an empty tree is the base case, not an error.
    #[instrument(level = "trace", skip(self, course), fields(number = %course.number))]
    pub fn insert(&mut self, course: Course) {
        let key = course.number.clone();
        let node_idx = self.arena.insert(TreeNode {
            course,
            left: None,
            right: None,
        });

        let Some(mut current) = self.root else {
            self.root = Some(node_idx);
            return;
        };

        loop {
            let node = &mut self.arena[current];
            if key < node.course.number {
                match node.left {
                    Some(left) => current = left,
                    None => {
                        node.left = Some(node_idx);
                        return;
                    }
                }
            } else {
                // equal keys route right, see type-level docs
                match node.right {
                    Some(right) => current = right,
                    None => {
                        node.right = Some(node_idx);
                        return;
                    }
                }
            }
        }
    }

    /// Exact-match lookup by course number.
    ///
    /// Returns `None` on a miss; an empty tree is a normal miss.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, number: &str) -> Option<&Course> {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.arena[idx];
            if node.course.number == number {
                return Some(&node.course);
            }
            current = if number < node.course.number.as_str() {
                node.left
            } else {
                node.right
            };
        }
        None
    }

    /// In-order traversal yielding courses in ascending key order.
    ///
    /// Each call starts a fresh traversal; iteration is non-destructive.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> InOrderIter {
        InOrderIter::new(self)
    }
}

/// Iterative in-order traversal with an explicit stack of the pending
/// left spine, so deep (degenerate) trees cannot overflow the call
/// stack.
pub struct InOrderIter<'a> {
    tree: &'a CourseTree,
    stack: Vec<Index>,
}

impl<'a> InOrderIter<'a> {
    fn new(tree: &'a CourseTree) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<Index>) {
        while let Some(idx) = current {
            self.stack.push(idx);
            current = self.tree.arena[idx].left;
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let right = self.tree.arena[idx].right;
        self.push_left_spine(right);
        Some(&self.tree.arena[idx].course)
    }
}
