use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;

use crate::hash::{FixedHashState, HashMap};
use crate::value::Value;

/// An unordered map from field name to [`Value`].
///
/// This is the snapshot form of an aggregate: one entry per field, keyed by
/// the field name.
///
/// # Examples
///
/// ```
/// use vmc_schema::value::{Value, ValueMap};
///
/// let mut values = ValueMap::new();
/// values.insert("name", "Ada");
/// values.insert("age", 36);
///
/// assert_eq!(values.len(), 2);
/// assert_eq!(values.get("age"), Some(&Value::Int(36)));
/// assert_eq!(values.remove("name"), Some(Value::from("Ada")));
/// assert!(!values.contains_key("name"));
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct ValueMap(HashMap<Cow<'static, str>, Value>);

impl ValueMap {
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(FixedHashState))
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity_and_hasher(capacity, FixedHashState))
    }

    /// Inserts a value, returning the previous one under the same name.
    #[inline]
    pub fn insert(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    #[inline]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.0.get_mut(name)
    }

    #[inline]
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterates entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (&**k, v))
    }

    /// Iterates field names in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| &**k)
    }

    /// Returns the entries sorted by name.
    pub fn sorted(&self) -> Vec<(&str, &Value)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|(k, _)| *k);
        entries
    }
}

impl fmt::Debug for ValueMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.sorted()).finish()
    }
}

impl<K: Into<Cow<'static, str>>, V: Into<Value>> FromIterator<(K, V)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<Cow<'static, str>>, V: Into<Value>> Extend<(K, V)> for ValueMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for ValueMap {
    type Item = (Cow<'static, str>, Value);
    type IntoIter = hashbrown::hash_map::IntoIter<Cow<'static, str>, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
