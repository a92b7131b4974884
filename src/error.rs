/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use crate::value::ValueKind;

/// Returned when a value of one kind is added to a
/// [`TypedOrderedSet`](crate::TypedOrderedSet) that already holds values of another kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("type mismatch: set holds {expected} values, got {found}")]
pub struct TypeMismatch {
    /// Kind established by the first value added to the set.
    pub expected: ValueKind,
    /// Kind of the rejected value.
    pub found: ValueKind,
}
