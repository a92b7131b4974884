/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt::Display;

/// A dynamically-typed element of a [`TypedOrderedSet`](crate::TypedOrderedSet).
///
/// Values of the same kind compare by their payload.  Values of different kinds never meet inside
/// one set, but still have a total order (by kind first) so that `Value` is `Ord`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Char(char),
    Str(String),
}

/// The discriminant of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Char,
    Str,
}

impl Value {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Char(_) => ValueKind::Char,
            Value::Str(_) => ValueKind::Str,
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Char(a), Value::Char(b)) => a.cmp(b),
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Value {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Bool(v) => v.fmt(fmt),
            Value::Int(v) => v.fmt(fmt),
            Value::Char(v) => v.fmt(fmt),
            Value::Str(v) => v.fmt(fmt),
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Char => "char",
            ValueKind::Str => "string",
        };

        fmt.write_str(name)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Value {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Value {
        Value::Int(i64::from(v))
    }
}

impl From<char> for Value {
    fn from(v: char) -> Value {
        Value::Char(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::Str(String::from(v))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind() {
        assert_eq!(Value::from(true).kind(), ValueKind::Bool);
        assert_eq!(Value::from(3).kind(), ValueKind::Int);
        assert_eq!(Value::from(3_u32).kind(), ValueKind::Int);
        assert_eq!(Value::from('x').kind(), ValueKind::Char);
        assert_eq!(Value::from("x").kind(), ValueKind::Str);
    }

    #[test]
    fn test_ord_within_kind() {
        assert!(Value::from(-4) < Value::from(2));
        assert!(Value::from(false) < Value::from(true));
        assert!(Value::from('a') < Value::from('b'));
        assert!(Value::from("apple") < Value::from("banana"));
    }

    #[test]
    fn test_ord_across_kinds() {
        assert!(Value::from(true) < Value::from(0));
        assert!(Value::from(i64::MAX) < Value::from('a'));
        assert!(Value::from('z') < Value::from(""));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(-7).to_string(), "-7");
        assert_eq!(Value::from("hi").to_string(), "hi");
        assert_eq!(Value::from('c').to_string(), "c");
        assert_eq!(ValueKind::Str.to_string(), "string");
    }
}
