/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::mem;
use core::ops::Bound;
use log::trace;

/// A mutable [red-black tree](https://en.wikipedia.org/wiki/Red-Black_tree) holding distinct
/// values in ascending order.
///
/// # Complexity
///
/// Let *n* be the number of elements in the tree.
///
/// ## Temporal complexity
///
/// | Operation                  | Average   | Worst case  |
/// |:-------------------------- | ---------:| -----------:|
/// | `new()`                    |      Θ(1) |        Θ(1) |
/// | `insert()`                 | Θ(log(n)) |   Θ(log(n)) |
/// | `remove()`                 | Θ(log(n)) |   Θ(log(n)) |
/// | `contains()`               | Θ(log(n)) |   Θ(log(n)) |
/// | `ceiling()` and friends    | Θ(log(n)) |   Θ(log(n)) |
/// | `at_index()`, `rank()`     | Θ(log(n)) |   Θ(log(n)) |
/// | `size()`                   |      Θ(1) |        Θ(1) |
/// | `clone()`                  |      Θ(n) |        Θ(n) |
/// | iterator creation          |      Θ(1) |        Θ(1) |
/// | iterator step              |      Θ(1) |   Θ(log(n)) |
/// | iterator full              |      Θ(n) |        Θ(n) |
///
/// # Implementation details
///
/// Nodes live in an arena owned by the tree and refer to each other by index.  Child links own
/// their subtree; the parent link is only used to walk upwards while rebalancing.  Every node
/// caches the size of its subtree, which makes order statistics logarithmic.
///
/// Insertion and deletion follow the classic bottom-up algorithms described in "Introduction to
/// Algorithms" (Cormen et al.), chapter 13.  A node with two children is deleted by exchanging its
/// value with its in-order successor and unlinking the successor instead.
#[derive(Clone)]
pub struct RedBlackTree<T> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NodeId(usize);

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    color: Color,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
    /// Number of nodes in the subtree rooted at this node, this node included.
    size: usize,
}

impl<T> Node<T> {
    fn new_red(value: T, parent: NodeId) -> Node<T> {
        Node { value, color: Color::Red, parent: Some(parent), left: None, right: None, size: 1 }
    }

    fn new_black(value: T) -> Node<T> {
        Node { value, color: Color::Black, parent: None, left: None, right: None, size: 1 }
    }
}

impl<T> RedBlackTree<T> {
    #[must_use]
    pub fn new() -> RedBlackTree<T> {
        RedBlackTree { nodes: Vec::new(), root: None }
    }

    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.root.map(|r| &self.node(self.leftmost(r)).value)
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.root.map(|r| &self.node(self.rightmost(r)).value)
    }

    /// Removes and returns the smallest value.
    pub fn pop_first(&mut self) -> Option<T> {
        let first = self.leftmost(self.root?);

        Some(self.remove_node(first))
    }

    /// Removes and returns the largest value.
    pub fn pop_last(&mut self) -> Option<T> {
        let last = self.rightmost(self.root?);

        Some(self.remove_node(last))
    }

    /// Returns the value at position `index` in ascending order, or `None` if `index` is out of
    /// bounds.
    #[must_use]
    pub fn at_index(&self, index: usize) -> Option<&T> {
        let mut index = index;
        let mut current = self.root;

        while let Some(id) = current {
            let node = self.node(id);
            let left_size = self.subtree_size(node.left);

            current = match index.cmp(&left_size) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => {
                    index -= left_size + 1;
                    node.right
                }
            };
        }

        None
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }

    /// Absent children count as black.
    #[inline]
    fn is_red(&self, id: Option<NodeId>) -> bool {
        id.map_or(false, |id| self.node(id).color == Color::Red)
    }

    #[inline]
    fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = color;
    }

    #[inline]
    fn subtree_size(&self, id: Option<NodeId>) -> usize {
        id.map_or(0, |id| self.node(id).size)
    }

    fn update_size(&mut self, id: NodeId) {
        let node = self.node(id);
        let size = 1 + self.subtree_size(node.left) + self.subtree_size(node.right);

        self.node_mut(id).size = size;
    }

    /// Adds or removes one node to the cached size of `start` and all of its ancestors.
    fn resize_path(&mut self, start: Option<NodeId>, grow: bool) {
        let mut current = start;

        while let Some(id) = current {
            let node = self.node_mut(id);

            if grow {
                node.size += 1;
            } else {
                node.size -= 1;
            }

            current = node.parent;
        }
    }

    fn leftmost(&self, id: NodeId) -> NodeId {
        let mut id = id;

        while let Some(left) = self.node(id).left {
            id = left;
        }

        id
    }

    fn rightmost(&self, id: NodeId) -> NodeId {
        let mut id = id;

        while let Some(right) = self.node(id).right {
            id = right;
        }

        id
    }

    /// Makes `parent` point to `new` where it pointed to `old`.  A `parent` of `None` means `old`
    /// is the root.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let parent = self.node_mut(parent);

                if parent.left == Some(old) {
                    parent.left = new;
                } else {
                    parent.right = new;
                }
            }
        }
    }

    fn swap_values(&mut self, a: NodeId, b: NodeId) {
        debug_assert_ne!(a, b);

        let (low, high) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.nodes.split_at_mut(high);

        mem::swap(&mut head[low].value, &mut tail[0].value);
    }

    /// Rotates the subtree at `pivot` to the left.
    ///
    /// ```text
    ///       pivot                  promoted
    ///       ╱   ╲                  ╱      ╲
    ///      a   promoted    ══►   pivot     c
    ///          ╱    ╲            ╱   ╲
    ///      inner     c          a   inner
    /// ```
    fn rotate_left(&mut self, pivot: NodeId) {
        let promoted = self.node(pivot).right.expect("left rotation requires a right child");
        let inner = self.node(promoted).left;
        let parent = self.node(pivot).parent;

        self.node_mut(pivot).right = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(pivot);
        }

        self.node_mut(promoted).parent = parent;
        self.replace_child(parent, pivot, Some(promoted));

        self.node_mut(promoted).left = Some(pivot);
        self.node_mut(pivot).parent = Some(promoted);

        let size = self.node(pivot).size;
        self.node_mut(promoted).size = size;
        self.update_size(pivot);
    }

    /// Mirror image of `rotate_left()`.
    fn rotate_right(&mut self, pivot: NodeId) {
        let promoted = self.node(pivot).left.expect("right rotation requires a left child");
        let inner = self.node(promoted).right;
        let parent = self.node(pivot).parent;

        self.node_mut(pivot).left = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(pivot);
        }

        self.node_mut(promoted).parent = parent;
        self.replace_child(parent, pivot, Some(promoted));

        self.node_mut(promoted).right = Some(pivot);
        self.node_mut(pivot).parent = Some(promoted);

        let size = self.node(pivot).size;
        self.node_mut(promoted).size = size;
        self.update_size(pivot);
    }

    /// Restores the red-black invariants after `id` was attached as a red leaf.
    fn insert_fixup(&mut self, id: NodeId) {
        let mut id = id;

        while let Some(parent) = self.node(id).parent {
            if self.node(parent).color == Color::Black {
                break;
            }

            // A red node is never the root, so the grandparent exists.
            let Some(grandparent) = self.node(parent).parent else {
                break;
            };
            let parent_is_left = self.node(grandparent).left == Some(parent);
            let uncle = if parent_is_left {
                self.node(grandparent).right
            } else {
                self.node(grandparent).left
            };

            if let Some(uncle) = uncle {
                if self.node(uncle).color == Color::Red {
                    trace!("insert fixup: red uncle, recoloring below {:?}", grandparent);

                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);

                    id = grandparent;
                    continue;
                }
            }

            let id_is_left = self.node(parent).left == Some(id);

            // Straighten a zig-zag first so that a single rotation at the grandparent suffices.
            let top = match (parent_is_left, id_is_left) {
                (true, false) => {
                    self.rotate_left(parent);
                    id
                }
                (false, true) => {
                    self.rotate_right(parent);
                    id
                }
                _ => parent,
            };

            trace!("insert fixup: black uncle, rotating at {:?}", grandparent);

            self.set_color(top, Color::Black);
            self.set_color(grandparent, Color::Red);

            if parent_is_left {
                self.rotate_right(grandparent);
            } else {
                self.rotate_left(grandparent);
            }

            break;
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    /// Removes the node `id` from the tree and returns the value it held.
    fn remove_node(&mut self, id: NodeId) -> T {
        let mut id = id;

        if let (Some(_), Some(right)) = (self.node(id).left, self.node(id).right) {
            let successor = self.leftmost(right);

            self.swap_values(id, successor);
            id = successor;
        }

        let node = self.node(id);

        let unlinked = match node.left.or(node.right) {
            Some(child) => {
                // Black height forces a lone child to be a red leaf under a black node.
                debug_assert_eq!(node.color, Color::Black);
                debug_assert!(self.is_red(Some(child)));

                self.swap_values(id, child);
                child
            }
            None => {
                if node.color == Color::Black {
                    // Must run while `id` is still linked: the fixup needs its parent and sibling.
                    self.remove_fixup(id);
                }

                id
            }
        };

        self.unlink(unlinked)
    }

    /// Resolves the missing black on the path through `id`, a black leaf about to be unlinked.
    fn remove_fixup(&mut self, id: NodeId) {
        let mut id = id;

        while let Some(parent) = self.node(id).parent {
            let id_is_left = self.node(parent).left == Some(id);
            let sibling = if id_is_left {
                self.node(parent).right
            } else {
                self.node(parent).left
            };

            let Some(sibling) = sibling else {
                // Only reachable if black heights were already unbalanced.
                id = parent;
                continue;
            };

            if self.node(sibling).color == Color::Red {
                trace!("remove fixup: red sibling, rotating at {:?}", parent);

                let parent_color = self.node(parent).color;
                self.set_color(sibling, parent_color);
                self.set_color(parent, Color::Red);

                if id_is_left {
                    self.rotate_left(parent);
                } else {
                    self.rotate_right(parent);
                }

                continue;
            }

            let (near, far) = if id_is_left {
                (self.node(sibling).left, self.node(sibling).right)
            } else {
                (self.node(sibling).right, self.node(sibling).left)
            };

            if !self.is_red(near) && !self.is_red(far) {
                self.set_color(sibling, Color::Red);

                if self.node(parent).color == Color::Black {
                    trace!("remove fixup: black sibling, propagating to {:?}", parent);
                    id = parent;
                    continue;
                }

                self.set_color(parent, Color::Black);
                break;
            }

            let (sibling, far) = match (near, far) {
                (_, Some(far)) if self.node(far).color == Color::Red => (sibling, far),
                (Some(near), _) => {
                    // Turn the red near child into the sibling, with the old sibling as its far
                    // child.
                    if id_is_left {
                        self.rotate_right(sibling);
                    } else {
                        self.rotate_left(sibling);
                    }

                    (near, sibling)
                }
                (None, _) => unreachable!("sibling has a red child"),
            };

            trace!("remove fixup: red nephew, rotating at {:?}", parent);

            let parent_color = self.node(parent).color;
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            self.set_color(far, Color::Black);

            if id_is_left {
                self.rotate_left(parent);
            } else {
                self.rotate_right(parent);
            }

            break;
        }
    }

    /// Detaches the childless node `id` from its parent and frees its slot.
    fn unlink(&mut self, id: NodeId) -> T {
        debug_assert!(self.node(id).left.is_none() && self.node(id).right.is_none());

        let parent = self.node(id).parent;

        self.replace_child(parent, id, None);
        self.resize_path(parent, false);

        self.release(id)
    }

    /// Frees the arena slot of a detached node.  The last node of the arena is moved into the
    /// freed slot, so every link to it is redirected first.
    fn release(&mut self, id: NodeId) -> T {
        let last = NodeId(self.nodes.len() - 1);

        if id != last {
            let moved = self.node(last);
            let (parent, left, right) = (moved.parent, moved.left, moved.right);

            self.replace_child(parent, last, Some(id));

            for child in [left, right].into_iter().flatten() {
                self.node_mut(child).parent = Some(id);
            }
        }

        self.nodes.swap_remove(id.0).value
    }
}

impl<T> RedBlackTree<T>
where
    T: Ord,
{
    /// Inserts `value` and returns `true`, or returns `false` and leaves the tree untouched if an
    /// equal value is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut parent = None;
        let mut ordering = Ordering::Equal;
        let mut current = self.root;

        while let Some(id) = current {
            let node = self.node(id);

            ordering = value.cmp(&node.value);
            current = match ordering {
                Ordering::Less => node.left,
                Ordering::Equal => return false,
                Ordering::Greater => node.right,
            };
            parent = Some(id);
        }

        let id = NodeId(self.nodes.len());

        match parent {
            None => {
                self.nodes.push(Node::new_black(value));
                self.root = Some(id);
            }
            Some(parent) => {
                self.nodes.push(Node::new_red(value, parent));

                if ordering == Ordering::Less {
                    self.node_mut(parent).left = Some(id);
                } else {
                    self.node_mut(parent).right = Some(id);
                }

                self.resize_path(Some(parent), true);
                self.insert_fixup(id);
            }
        }

        true
    }

    /// Removes the value equal to `value` and returns it, or returns `None` if there is none.
    pub fn remove<Q: ?Sized>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord,
    {
        let id = self.find(value)?;

        Some(self.remove_node(id))
    }

    #[must_use]
    pub fn get<Q: ?Sized>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord,
    {
        self.find(value).map(|id| &self.node(id).value)
    }

    #[must_use]
    pub fn contains<Q: ?Sized>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord,
    {
        self.find(value).is_some()
    }

    /// Smallest value greater than or equal to `value`.
    #[must_use]
    pub fn ceiling<Q: ?Sized>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord,
    {
        self.seek_forward(Bound::Included(value))
    }

    /// Smallest value strictly greater than `value`.
    #[must_use]
    pub fn higher<Q: ?Sized>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord,
    {
        self.seek_forward(Bound::Excluded(value))
    }

    /// Largest value less than or equal to `value`.
    #[must_use]
    pub fn floor<Q: ?Sized>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord,
    {
        self.seek_backward(Bound::Included(value))
    }

    /// Largest value strictly less than `value`.
    #[must_use]
    pub fn lower<Q: ?Sized>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord,
    {
        self.seek_backward(Bound::Excluded(value))
    }

    /// Number of values strictly less than `value`.
    #[must_use]
    pub fn rank<Q: ?Sized>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord,
    {
        let mut rank = 0;
        let mut current = self.root;

        while let Some(id) = current {
            let node = self.node(id);

            current = match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left,
                Ordering::Equal => return rank + self.subtree_size(node.left),
                Ordering::Greater => {
                    rank += self.subtree_size(node.left) + 1;
                    node.right
                }
            };
        }

        rank
    }

    fn find<Q: ?Sized>(&self, value: &Q) -> Option<NodeId>
    where
        T: Borrow<Q>,
        Q: Ord,
    {
        let mut current = self.root;

        while let Some(id) = current {
            let node = self.node(id);

            current = match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }

        None
    }

    /// Returns the smallest value satisfying the lower bound `target`.
    fn seek_forward<Q: ?Sized>(&self, target: Bound<&Q>) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord,
    {
        let mut found = None;
        let mut current = self.root;

        while let Some(id) = current {
            let node = self.node(id);
            let good = match target {
                Bound::Included(x) => node.value.borrow() >= x,
                Bound::Excluded(x) => node.value.borrow() > x,
                Bound::Unbounded => true,
            };

            if good {
                found = Some(&node.value);
                current = node.left;
            } else {
                current = node.right;
            }
        }

        found
    }

    /// Returns the largest value satisfying the upper bound `target`.
    fn seek_backward<Q: ?Sized>(&self, target: Bound<&Q>) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord,
    {
        let mut found = None;
        let mut current = self.root;

        while let Some(id) = current {
            let node = self.node(id);
            let good = match target {
                Bound::Included(x) => node.value.borrow() <= x,
                Bound::Excluded(x) => node.value.borrow() < x,
                Bound::Unbounded => true,
            };

            if good {
                found = Some(&node.value);
                current = node.right;
            } else {
                current = node.left;
            }
        }

        found
    }
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> RedBlackTree<T> {
        RedBlackTree::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RedBlackTree<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RedBlackTree<T> {
    fn eq(&self, other: &RedBlackTree<T>) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RedBlackTree<T> {}

impl<T: PartialOrd> PartialOrd for RedBlackTree<T> {
    fn partial_cmp(&self, other: &RedBlackTree<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for RedBlackTree<T> {
    fn cmp(&self, other: &RedBlackTree<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for RedBlackTree<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Add the hash of length so that if two collections are added one after the other it
        // doesn't hash to the same thing as a single collection with the same elements in the same
        // order.
        self.size().hash(state);

        for v in self {
            v.hash(state);
        }
    }
}

impl<T: Ord> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(into_iter: I) -> RedBlackTree<T> {
        let mut tree = RedBlackTree::new();

        tree.extend(into_iter);

        tree
    }
}

impl<T: Ord> Extend<T> for RedBlackTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, into_iter: I) {
        for v in into_iter {
            self.insert(v);
        }
    }
}

impl<'a, T> IntoIterator for &'a RedBlackTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for RedBlackTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { tree: self }
    }
}

mod iter_utils {
    use core::mem::size_of;

    pub fn lg_floor(size: usize) -> usize {
        debug_assert!(size > 0);

        let c: usize = 8 * size_of::<usize>() - size.leading_zeros() as usize;

        c - 1
    }

    pub fn conservative_height(size: usize) -> usize {
        if size > 0 {
            2 * lg_floor(size + 1)
        } else {
            0
        }
    }
}

// This is a stack for navigating through the tree. It can be used to go either forwards or
// backwards, but not both: when you call `dig` or `advance`, you must use the same value of
// `backwards` for the entire lifetime of this stack.
#[derive(Clone, Debug)]
struct Stack {
    // The current node is at the top of the stack.  If we are moving forwards, the rest of the
    // stack consists of those ancestors of the current node that contain the current node in their
    // left subtree.  In other words, the values in the stack increase as we go from the top of the
    // stack to the bottom.
    stack: Vec<NodeId>,
}

impl Stack {
    fn new<T>(tree: &RedBlackTree<T>, backwards: bool) -> Stack {
        let capacity = iter_utils::conservative_height(tree.size()) + 1;
        let mut stack = Stack { stack: Vec::with_capacity(capacity) };

        if let Some(root) = tree.root {
            stack.stack.push(root);
            stack.dig(tree, backwards);
        }

        stack
    }

    #[inline]
    fn current(&self) -> Option<NodeId> {
        self.stack.last().copied()
    }

    fn dig<T>(&mut self, tree: &RedBlackTree<T>, backwards: bool) {
        while let Some(&id) = self.stack.last() {
            let node = tree.node(id);
            let child = if backwards { node.right } else { node.left };

            match child {
                Some(child) => self.stack.push(child),
                None => break,
            }
        }
    }

    fn advance<T>(&mut self, tree: &RedBlackTree<T>, backwards: bool) {
        if let Some(id) = self.stack.pop() {
            let node = tree.node(id);
            let child = if backwards { node.left } else { node.right };

            if let Some(child) = child {
                self.stack.push(child);
                self.dig(tree, backwards);
            }
        }
    }
}

/// Iterator over the values of a [`RedBlackTree`] in ascending order.  Reverse it to get the
/// values in descending order.
#[derive(Debug)]
pub struct Iter<'a, T> {
    tree: &'a RedBlackTree<T>,

    stack_forward: Option<Stack>,
    stack_backward: Option<Stack>,

    left_index: usize,  // inclusive
    right_index: usize, // exclusive
}

impl<'a, T> Iter<'a, T> {
    fn new(tree: &'a RedBlackTree<T>) -> Iter<'a, T> {
        Iter {
            tree,

            stack_forward: None,
            stack_backward: None,

            left_index: 0,
            right_index: tree.size(),
        }
    }

    #[inline]
    fn non_empty(&self) -> bool {
        self.left_index < self.right_index
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> {
        Iter {
            tree: self.tree,

            stack_forward: self.stack_forward.clone(),
            stack_backward: self.stack_backward.clone(),

            left_index: self.left_index,
            right_index: self.right_index,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if !self.non_empty() {
            return None;
        }

        let tree = self.tree;
        let stack = self.stack_forward.get_or_insert_with(|| Stack::new(tree, false));
        let current = stack.current().map(|id| &tree.node(id).value);

        stack.advance(tree, false);
        self.left_index += 1;

        current
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.right_index - self.left_index;

        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if !self.non_empty() {
            return None;
        }

        let tree = self.tree;
        let stack = self.stack_backward.get_or_insert_with(|| Stack::new(tree, true));
        let current = stack.current().map(|id| &tree.node(id).value);

        stack.advance(tree, true);
        self.right_index -= 1;

        current
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Owning iterator over the values of a [`RedBlackTree`] in ascending order.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    tree: RedBlackTree<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.tree.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.tree.size();

        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.tree.pop_last()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
