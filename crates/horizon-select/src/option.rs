//! Selectable options.
//!
//! An option is an immutable `(label, key)` pair. The key is the option's
//! identity: two options with the same key are the same option for every
//! selection decision, regardless of label or of which list they came from.
//! Hosts can therefore rebuild their option lists freely without breaking
//! membership checks on the current selection.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// The identity key of a [`SelectOption`].
///
/// Keys are numbers or strings. They serialize untagged, so `value = 3`,
/// `value = 1.5` and `value = "three"` are all accepted in configuration
/// files. Whole numbers parse as [`OptionKey::Int`], anything with a
/// fractional part or exponent as [`OptionKey::Float`].
///
/// Keys of different variants never compare equal, even if they print the
/// same: `Int(1) != Float(1.0) != Text("1")`. Floats compare by bit
/// pattern, so `NaN` equals itself and `0.0 != -0.0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionKey {
    /// An integer key.
    Int(i64),
    /// A non-integer numeric key.
    Float(f64),
    /// A string key.
    Text(String),
}

impl PartialEq for OptionKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for OptionKey {}

impl Hash for OptionKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Int(n) => n.hash(state),
            Self::Float(f) => f.to_bits().hash(state),
            Self::Text(s) => s.hash(state),
        }
    }
}

impl Ord for OptionKey {
    /// Integers, then floats (IEEE total order), then strings.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for OptionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl OptionKey {
    fn rank(&self) -> u8 {
        match self {
            Self::Int(_) => 0,
            Self::Float(_) => 1,
            Self::Text(_) => 2,
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<f64> for OptionKey {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i64> for OptionKey {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for OptionKey {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for OptionKey {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<String> for OptionKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for OptionKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// A single selectable item: display text plus identity key.
///
/// Equality and hashing look at [`value`](Self::value) only.
///
/// # Example
///
/// ```
/// use horizon_select::SelectOption;
///
/// let a = SelectOption::new("First", 1);
/// let renamed = SelectOption::new("Primero", 1);
/// assert_eq!(a, renamed);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    /// The display text for this option.
    pub label: String,
    /// The identity key for this option.
    pub value: OptionKey,
}

impl SelectOption {
    /// Create a new option.
    pub fn new(label: impl Into<String>, value: impl Into<OptionKey>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// The display text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The identity key.
    pub fn key(&self) -> &OptionKey {
        &self.value
    }

    /// Whether this option has the given key.
    pub fn has_key(&self, key: &OptionKey) -> bool {
        self.value == *key
    }
}

impl PartialEq for SelectOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for SelectOption {}

impl Hash for SelectOption {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for SelectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Find the position of the option with `key` in `options`.
pub fn position_of(options: &[SelectOption], key: &OptionKey) -> Option<usize> {
    options.iter().position(|o| o.has_key(key))
}
