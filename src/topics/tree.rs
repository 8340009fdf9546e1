//! Arena-based binary tree and the traversal drills that go with it.
//!
//! Uses a generational arena for memory-safe node references instead of
//! `Rc<RefCell<..>>` chains; indices stay valid while the tree lives.

use std::collections::VecDeque;

use generational_arena::{Arena, Index};

/// Which child slot to attach a node to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Binary tree node stored in the arena.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub value: i64,
    pub left: Option<Index>,
    pub right: Option<Index>,
}

/// Arena-backed binary tree over integer payloads.
#[derive(Debug, Default)]
pub struct BinaryTree {
    arena: Arena<TreeNode>,
    root: Option<Index>,
}

impl BinaryTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn get(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    /// Insert the root node, replacing any existing tree.
    pub fn insert_root(&mut self, value: i64) -> Index {
        self.arena.clear();
        let idx = self.arena.insert(TreeNode {
            value,
            left: None,
            right: None,
        });
        self.root = Some(idx);
        idx
    }

    /// Attach a child under `parent`; returns the new index, or `None`
    /// when the parent does not exist.
    pub fn insert_child(&mut self, parent: Index, side: Side, value: i64) -> Option<Index> {
        self.arena.get(parent)?;
        let idx = self.arena.insert(TreeNode {
            value,
            left: None,
            right: None,
        });
        if let Some(node) = self.arena.get_mut(parent) {
            match side {
                Side::Left => node.left = Some(idx),
                Side::Right => node.right = Some(idx),
            }
        }
        Some(idx)
    }

    /// Build a tree from a LeetCode-style level-order listing where `None`
    /// marks a missing node. Missing nodes contribute no children slots.
    ///
    /// `[Some(3), Some(9), Some(20), None, None, Some(15), Some(7)]` builds
    /// the classic depth-3 example tree.
    pub fn from_level_order(values: &[Option<i64>]) -> Self {
        let mut tree = Self::new();
        let root_value = match values.first() {
            Some(&Some(value)) => value,
            _ => return tree,
        };
        let root = tree.insert_root(root_value);

        let mut queue = VecDeque::from([root]);
        let mut i = 1;
        while let Some(parent) = queue.pop_front() {
            if i >= values.len() {
                break;
            }
            if let Some(&Some(value)) = values.get(i) {
                if let Some(idx) = tree.insert_child(parent, Side::Left, value) {
                    queue.push_back(idx);
                }
            }
            i += 1;
            if let Some(&Some(value)) = values.get(i) {
                if let Some(idx) = tree.insert_child(parent, Side::Right, value) {
                    queue.push_back(idx);
                }
            }
            i += 1;
        }
        tree
    }

    /// Maximum depth, recursive: 1 + max of the child depths.
    ///
    /// Empty tree → 0, single node → 1.
    pub fn max_depth(&self) -> usize {
        self.depth_below(self.root)
    }

    fn depth_below(&self, idx: Option<Index>) -> usize {
        match idx.and_then(|i| self.arena.get(i)) {
            None => 0,
            Some(node) => 1 + self.depth_below(node.left).max(self.depth_below(node.right)),
        }
    }

    /// Maximum depth via level-by-level BFS; space bounded by tree width.
    pub fn max_depth_bfs(&self) -> usize {
        let mut queue: VecDeque<Index> = self.root.into_iter().collect();
        let mut depth = 0;
        while !queue.is_empty() {
            depth += 1;
            for _ in 0..queue.len() {
                if let Some(node) = queue.pop_front().and_then(|i| self.arena.get(i)) {
                    queue.extend(node.left);
                    queue.extend(node.right);
                }
            }
        }
        depth
    }

    /// Maximum depth with an explicit stack; avoids recursion on very
    /// deep, unbalanced trees.
    pub fn max_depth_iterative(&self) -> usize {
        let mut stack: Vec<(Index, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        let mut deepest = 0;
        while let Some((idx, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let Some(node) = self.arena.get(idx) {
                stack.extend(node.left.map(|l| (l, depth + 1)));
                stack.extend(node.right.map(|r| (r, depth + 1)));
            }
        }
        deepest
    }

    /// Preorder traversal: root, left, right.
    pub fn preorder(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len());
        self.walk(self.root, &mut |node, out| out.push(node.value), Order::Pre, &mut out);
        out
    }

    /// Inorder traversal: left, root, right.
    pub fn inorder(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len());
        self.walk(self.root, &mut |node, out| out.push(node.value), Order::In, &mut out);
        out
    }

    /// Postorder traversal: left, right, root.
    pub fn postorder(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len());
        self.walk(self.root, &mut |node, out| out.push(node.value), Order::Post, &mut out);
        out
    }

    fn walk(
        &self,
        idx: Option<Index>,
        visit: &mut impl FnMut(&TreeNode, &mut Vec<i64>),
        order: Order,
        out: &mut Vec<i64>,
    ) {
        if let Some(node) = idx.and_then(|i| self.arena.get(i)) {
            if order == Order::Pre {
                visit(node, out);
            }
            self.walk(node.left, visit, order, out);
            if order == Order::In {
                visit(node, out);
            }
            self.walk(node.right, visit, order, out);
            if order == Order::Post {
                visit(node, out);
            }
        }
    }

    /// Values grouped by level, top to bottom (tier traversal).
    pub fn levels(&self) -> Vec<Vec<i64>> {
        let mut queue: VecDeque<Index> = self.root.into_iter().collect();
        let mut tiers = Vec::new();
        while !queue.is_empty() {
            let mut tier = Vec::with_capacity(queue.len());
            for _ in 0..queue.len() {
                if let Some(node) = queue.pop_front().and_then(|i| self.arena.get(i)) {
                    tier.push(node.value);
                    queue.extend(node.left);
                    queue.extend(node.right);
                }
            }
            tiers.push(tier);
        }
        tiers
    }

    /// Root-to-leaf path ending at the deepest leaf; the left subtree wins
    /// ties. Empty tree → empty path.
    pub fn deepest_path(&self) -> Vec<i64> {
        self.path_below(self.root).1
    }

    fn path_below(&self, idx: Option<Index>) -> (usize, Vec<i64>) {
        match idx.and_then(|i| self.arena.get(i)) {
            None => (0, Vec::new()),
            Some(node) => {
                let (left_depth, left_path) = self.path_below(node.left);
                let (right_depth, right_path) = self.path_below(node.right);
                let (depth, mut path) = if left_depth >= right_depth {
                    (left_depth, left_path)
                } else {
                    (right_depth, right_path)
                };
                path.insert(0, node.value);
                (depth + 1, path)
            }
        }
    }

    /// Structural and value equality with another tree.
    pub fn same_tree(&self, other: &BinaryTree) -> bool {
        self.same_below(self.root, other, other.root)
    }

    fn same_below(&self, a: Option<Index>, other: &BinaryTree, b: Option<Index>) -> bool {
        match (
            a.and_then(|i| self.arena.get(i)),
            b.and_then(|i| other.arena.get(i)),
        ) {
            (None, None) => true,
            (Some(x), Some(y)) => {
                x.value == y.value
                    && self.same_below(x.left, other, y.left)
                    && self.same_below(x.right, other, y.right)
            }
            _ => false,
        }
    }

    /// Render the tree for terminal display via termtree.
    pub fn render(&self) -> String {
        match self.root {
            None => "(empty)".to_string(),
            Some(root) => self.render_below(root).to_string(),
        }
    }

    fn render_below(&self, idx: Index) -> termtree::Tree<String> {
        let node = match self.arena.get(idx) {
            Some(node) => node,
            None => return termtree::Tree::new("?".to_string()),
        };
        let mut tree = termtree::Tree::new(node.value.to_string());
        for child in [node.left, node.right].into_iter().flatten() {
            tree.push(self.render_below(child));
        }
        tree
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    Pre,
    In,
    Post,
}
