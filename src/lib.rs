/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

#![cfg_attr(feature = "fatal-warnings", deny(warnings))]
#![no_std]

// Note: Keep this in sync with `README.md`.  Note that the doc links must be removed.
//! # rbset
//!
//! An ordered set without duplicates, backed by a
//! [red-black tree](https://en.wikipedia.org/wiki/Red-Black_tree).  Besides membership it answers
//! navigation queries (`ceiling`, `floor`, `higher`, `lower`), order statistics (`at_index`,
//! `rank`) and iterates in ascending or descending order.
//!
//! This crate only depends on `alloc`, so it can be used in `no_std` environments.
//!
//! # Data Structures
//!
//! This crate implements the following data structures:
//!
//!   1. [`OrderedSet`](#orderedset)
//!   2. [`TypedOrderedSet`](#typedorderedset)
//!   3. [`RedBlackTree`](#redblacktree)
//!
//! ## `OrderedSet`
//! [![OrderedSet documentation](https://img.shields.io/badge/doc-OrderedSet-303070.svg)](set/ordered_set/struct.OrderedSet.html)
//!
//! A sorted set of values of one type.
//!
//! ### Example
//!
//! ```rust
//! use rbset::OrderedSet;
//!
//! let mut set = OrderedSet::new();
//!
//! set.add(15);
//! set.add(5);
//! set.add(10);
//!
//! assert_eq!(set.first(), Some(&5));
//! assert_eq!(set.ceiling(&11), Some(&15));
//! assert_eq!(set.lower(&10), Some(&5));
//! assert_eq!(set.at_index(1), Some(&10));
//!
//! assert_eq!(set.poll_last(), Some(15));
//! assert_eq!(set.descending_iter().collect::<Vec<_>>(), vec![&10, &5]);
//! ```
//!
//! ## `TypedOrderedSet`
//! [![TypedOrderedSet documentation](https://img.shields.io/badge/doc-TypedOrderedSet-303070.svg)](set/typed_ordered_set/struct.TypedOrderedSet.html)
//!
//! A sorted set of dynamically-typed [`Value`]s.  The first value added decides which kind of
//! value the set accepts until it is cleared.
//!
//! ### Example
//!
//! ```rust
//! use rbset::{TypeMismatch, TypedOrderedSet, ValueKind};
//!
//! let mut set = TypedOrderedSet::new();
//!
//! assert_eq!(set.add("kiwi"), Ok(true));
//! assert_eq!(set.add("kiwi"), Ok(false));
//! assert_eq!(
//!     set.add(42),
//!     Err(TypeMismatch { expected: ValueKind::Str, found: ValueKind::Int }),
//! );
//! ```
//!
//! ## `RedBlackTree`
//! [![RedBlackTree documentation](https://img.shields.io/badge/doc-RedBlackTree-303070.svg)](tree/struct.RedBlackTree.html)
//!
//! The tree both sets are built on.  It can be used directly when values need to be taken back
//! out of the collection.
//!
//! ### Example
//!
//! ```rust
//! use rbset::RedBlackTree;
//!
//! let mut tree: RedBlackTree<&str> = ["b", "c", "a"].into_iter().collect();
//!
//! assert_eq!(tree.remove("b"), Some("b"));
//! assert_eq!(tree.rank("c"), 1);
//! assert_eq!(tree.into_iter().collect::<Vec<_>>(), vec!["a", "c"]);
//! ```

extern crate alloc;

mod error;
pub mod set;
pub mod tree;
mod value;

pub use crate::error::TypeMismatch;
pub use crate::set::ordered_set::OrderedSet;
pub use crate::set::typed_ordered_set::TypedOrderedSet;
pub use crate::tree::RedBlackTree;
pub use crate::value::{Value, ValueKind};
