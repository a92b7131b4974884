/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::tree::{self, RedBlackTree};
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt::Display;
use core::hash::{Hash, Hasher};
use core::iter::Rev;

pub type Iter<'a, T> = tree::Iter<'a, T>;
pub type DescendingIter<'a, T> = Rev<tree::Iter<'a, T>>;
pub type IntoIter<T> = tree::IntoIter<T>;

/// Creates an [`OrderedSet`](crate::OrderedSet) containing the given arguments:
///
/// ```
/// # use rbset::*;
/// #
/// let mut s = OrderedSet::new();
///
/// s.add(1);
/// s.add(2);
/// s.add(3);
///
/// assert_eq!(ordered_set![1, 2, 3], s);
/// ```
#[macro_export]
macro_rules! ordered_set {
    ($($e:expr),*) => {
        {
            #[allow(unused_mut)]
            let mut s = $crate::OrderedSet::new();
            $(
                s.add($e);
            )*
            s
        }
    };
}

/// An ordered set without duplicates, backed by a
/// [red-black tree](https://en.wikipedia.org/wiki/Red-Black_tree).
///
/// # Complexity
///
/// Let *n* be the number of elements in the set.
///
/// ## Temporal complexity
///
/// | Operation                  | Average   | Worst case  |
/// |:-------------------------- | ---------:| -----------:|
/// | `new()`                    |      Θ(1) |        Θ(1) |
/// | `add()`                    | Θ(log(n)) |   Θ(log(n)) |
/// | `remove()`                 | Θ(log(n)) |   Θ(log(n)) |
/// | `contains()`               | Θ(log(n)) |   Θ(log(n)) |
/// | `first()`, `last()`        | Θ(log(n)) |   Θ(log(n)) |
/// | `ceiling()` and friends    | Θ(log(n)) |   Θ(log(n)) |
/// | `poll_first()`             | Θ(log(n)) |   Θ(log(n)) |
/// | `at_index()`               | Θ(log(n)) |   Θ(log(n)) |
/// | `size()`                   |      Θ(1) |        Θ(1) |
/// | `clone()`                  |      Θ(n) |        Θ(n) |
/// | iterator creation          |      Θ(1) |        Θ(1) |
/// | iterator step              |      Θ(1) |   Θ(log(n)) |
/// | iterator full              |      Θ(n) |        Θ(n) |
///
/// # Implementation details
///
/// This is a thin wrapper around a [`RedBlackTree`](crate::RedBlackTree).
#[derive(Debug)]
pub struct OrderedSet<T> {
    tree: RedBlackTree<T>,
}

impl<T> OrderedSet<T>
where
    T: Ord,
{
    #[must_use]
    pub fn new() -> OrderedSet<T> {
        OrderedSet { tree: RedBlackTree::new() }
    }

    /// Adds `v` to the set.  Returns `false`, leaving the set untouched, if an equal value is
    /// already present.
    ///
    /// ```
    /// # use rbset::OrderedSet;
    /// #
    /// let mut set = OrderedSet::new();
    ///
    /// assert!(set.add(5));
    /// assert!(!set.add(5));
    /// assert_eq!(set.size(), 1);
    /// ```
    pub fn add(&mut self, v: T) -> bool {
        self.tree.insert(v)
    }

    /// Adds every value of `values`.  Returns `true` if at least one of them was not already in
    /// the set.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, values: I) -> bool {
        values.into_iter().fold(false, |changed, v| self.add(v) | changed)
    }

    /// Removes the value equal to `v`.  Returns `false` if there is no such value.
    pub fn remove<V: ?Sized>(&mut self, v: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord,
    {
        self.take(v).is_some()
    }

    /// Removes the value equal to `v` and returns it.
    pub fn take<V: ?Sized>(&mut self, v: &V) -> Option<T>
    where
        T: Borrow<V>,
        V: Ord,
    {
        self.tree.remove(v)
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    #[must_use]
    pub fn contains<V: ?Sized>(&self, v: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord,
    {
        self.tree.contains(v)
    }

    #[must_use]
    pub fn get<V: ?Sized>(&self, v: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord,
    {
        self.tree.get(v)
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Returns the smallest value greater than or equal to `v`.
    ///
    /// ```
    /// # use rbset::ordered_set;
    /// #
    /// let set = ordered_set![5, 10, 15, 20];
    ///
    /// assert_eq!(set.ceiling(&12), Some(&15));
    /// assert_eq!(set.ceiling(&25), None);
    /// ```
    #[must_use]
    pub fn ceiling<V: ?Sized>(&self, v: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord,
    {
        self.tree.ceiling(v)
    }

    /// Returns the largest value less than or equal to `v`.
    #[must_use]
    pub fn floor<V: ?Sized>(&self, v: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord,
    {
        self.tree.floor(v)
    }

    /// Returns the smallest value strictly greater than `v`.
    #[must_use]
    pub fn higher<V: ?Sized>(&self, v: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord,
    {
        self.tree.higher(v)
    }

    /// Returns the largest value strictly less than `v`.
    #[must_use]
    pub fn lower<V: ?Sized>(&self, v: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord,
    {
        self.tree.lower(v)
    }

    /// Returns the `index`-th smallest value, starting from zero.
    ///
    /// ```
    /// # use rbset::ordered_set;
    /// #
    /// let set = ordered_set!['c', 'a', 'b'];
    ///
    /// assert_eq!(set.at_index(1), Some(&'b'));
    /// assert_eq!(set.at_index(3), None);
    /// ```
    #[must_use]
    pub fn at_index(&self, index: usize) -> Option<&T> {
        self.tree.at_index(index)
    }

    /// Returns the number of values strictly less than `v`, which is the index `v` has (or would
    /// have) in the set.
    #[must_use]
    pub fn rank<V: ?Sized>(&self, v: &V) -> usize
    where
        T: Borrow<V>,
        V: Ord,
    {
        self.tree.rank(v)
    }

    /// Removes and returns the smallest value.
    pub fn poll_first(&mut self) -> Option<T> {
        self.tree.pop_first()
    }

    /// Removes and returns the largest value.
    pub fn poll_last(&mut self) -> Option<T> {
        self.tree.pop_last()
    }

    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.tree.size()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.tree.iter()
    }

    #[must_use]
    pub fn descending_iter(&self) -> DescendingIter<'_, T> {
        self.tree.iter().rev()
    }
}

impl<T> Clone for OrderedSet<T>
where
    T: Clone,
{
    fn clone(&self) -> OrderedSet<T> {
        OrderedSet { tree: self.tree.clone() }
    }
}

impl<T> Default for OrderedSet<T>
where
    T: Ord,
{
    fn default() -> OrderedSet<T> {
        OrderedSet::new()
    }
}

impl<T> PartialEq for OrderedSet<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &OrderedSet<T>) -> bool {
        self.tree.eq(&other.tree)
    }
}

impl<T> Eq for OrderedSet<T> where T: Eq {}

impl<T> PartialOrd for OrderedSet<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &OrderedSet<T>) -> Option<Ordering> {
        self.tree.partial_cmp(&other.tree)
    }
}

impl<T> Ord for OrderedSet<T>
where
    T: Ord,
{
    fn cmp(&self, other: &OrderedSet<T>) -> Ordering {
        self.tree.cmp(&other.tree)
    }
}

impl<T> Hash for OrderedSet<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tree.hash(state);
    }
}

impl<T> Display for OrderedSet<T>
where
    T: Display,
{
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;

        fmt.write_str("{")?;

        for v in self.tree.iter() {
            if !first {
                fmt.write_str(", ")?;
            }
            v.fmt(fmt)?;
            first = false;
        }

        fmt.write_str("}")
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T>
where
    T: Ord,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        self.tree.into_iter()
    }
}

impl<T> FromIterator<T> for OrderedSet<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(into_iter: I) -> OrderedSet<T> {
        OrderedSet { tree: into_iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for OrderedSet<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, into_iter: I) {
        self.tree.extend(into_iter);
    }
}

#[cfg(test)]
mod test;
