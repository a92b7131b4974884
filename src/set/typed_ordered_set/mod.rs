/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::error::TypeMismatch;
use crate::set::ordered_set::{DescendingIter, Iter, OrderedSet};
use crate::value::{Value, ValueKind};
use core::fmt::Display;
use log::debug;

/// An ordered set of dynamically-typed [`Value`]s that all share one [`ValueKind`].
///
/// The first value added fixes the kind of the set.  Adding a value of another kind fails with
/// [`TypeMismatch`] and leaves the set unchanged.  The kind is forgotten only by
/// [`clear()`](TypedOrderedSet::clear).
///
/// ```
/// # use rbset::{TypedOrderedSet, ValueKind};
/// #
/// let mut set = TypedOrderedSet::new();
///
/// assert_eq!(set.add(3), Ok(true));
/// assert_eq!(set.kind(), Some(ValueKind::Int));
/// assert!(set.add("three").is_err());
///
/// set.clear();
///
/// assert_eq!(set.add("three"), Ok(true));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TypedOrderedSet {
    set: OrderedSet<Value>,
    kind: Option<ValueKind>,
}

impl TypedOrderedSet {
    #[must_use]
    pub fn new() -> TypedOrderedSet {
        TypedOrderedSet { set: OrderedSet::new(), kind: None }
    }

    /// Kind of the values held by this set, or `None` if no kind was established since creation
    /// or the last [`clear()`](TypedOrderedSet::clear).
    #[must_use]
    pub fn kind(&self) -> Option<ValueKind> {
        self.kind
    }

    /// Adds `v` to the set.  Returns `Ok(false)` if an equal value is already present.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] if `v` is not of the kind established by the first value added.
    pub fn add<V: Into<Value>>(&mut self, v: V) -> Result<bool, TypeMismatch> {
        let v = v.into();
        let found = v.kind();

        match self.kind {
            Some(expected) if expected != found => {
                debug!("rejected {} value {}: set holds {} values", found, v, expected);

                return Err(TypeMismatch { expected, found });
            }
            Some(_) => (),
            None => self.kind = Some(found),
        }

        Ok(self.set.add(v))
    }

    /// Adds the values of `values` in order, stopping at the first one of the wrong kind.  Values
    /// added before the failure stay in the set.  Returns `Ok(true)` if at least one value was
    /// inserted.
    ///
    /// # Errors
    ///
    /// Returns the [`TypeMismatch`] of the first rejected value.
    pub fn add_all<I>(&mut self, values: I) -> Result<bool, TypeMismatch>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut changed = false;

        for v in values {
            changed |= self.add(v)?;
        }

        Ok(changed)
    }

    /// Removes `v`.  Returns `false` if the set is empty, if `v` has a different kind than the
    /// set, or if `v` is absent.
    pub fn remove(&mut self, v: &Value) -> bool {
        if self.is_empty() || !self.holds(v) {
            return false;
        }

        self.set.remove(v)
    }

    /// Removes every value and forgets the kind of the set.
    pub fn clear(&mut self) {
        self.set.clear();
        self.kind = None;
    }

    #[must_use]
    pub fn contains(&self, v: &Value) -> bool {
        self.holds(v) && self.set.contains(v)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.set.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Value> {
        self.set.last()
    }

    #[must_use]
    pub fn ceiling(&self, v: &Value) -> Option<&Value> {
        self.query(v, OrderedSet::ceiling)
    }

    #[must_use]
    pub fn floor(&self, v: &Value) -> Option<&Value> {
        self.query(v, OrderedSet::floor)
    }

    #[must_use]
    pub fn higher(&self, v: &Value) -> Option<&Value> {
        self.query(v, OrderedSet::higher)
    }

    #[must_use]
    pub fn lower(&self, v: &Value) -> Option<&Value> {
        self.query(v, OrderedSet::lower)
    }

    #[must_use]
    pub fn at_index(&self, index: usize) -> Option<&Value> {
        self.set.at_index(index)
    }

    pub fn poll_first(&mut self) -> Option<Value> {
        self.set.poll_first()
    }

    pub fn poll_last(&mut self) -> Option<Value> {
        self.set.poll_last()
    }

    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        self.set.size()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_, Value> {
        self.set.iter()
    }

    #[must_use]
    pub fn descending_iter(&self) -> DescendingIter<'_, Value> {
        self.set.descending_iter()
    }

    /// Whether `v` could belong to this set.  Any kind fits a set that has none yet.
    fn holds(&self, v: &Value) -> bool {
        self.kind.map_or(true, |kind| kind == v.kind())
    }

    // Navigating with a value of another kind finds nothing.
    fn query<'a>(
        &'a self,
        v: &Value,
        f: fn(&'a OrderedSet<Value>, &Value) -> Option<&'a Value>,
    ) -> Option<&'a Value> {
        if self.holds(v) {
            f(&self.set, v)
        } else {
            None
        }
    }
}

impl Display for TypedOrderedSet {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.set, fmt)
    }
}

impl<'a> IntoIterator for &'a TypedOrderedSet {
    type Item = &'a Value;
    type IntoIter = Iter<'a, Value>;

    fn into_iter(self) -> Iter<'a, Value> {
        self.iter()
    }
}
