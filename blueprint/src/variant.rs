//! Override sources accepted by [`crate::BlueprintFactory`].
//!
//! A single override is either a sibling instance or a field-name mapping
//! ([`Override`]). Batches of overrides use the tagged [`Variants`] union, so
//! a sequence of instances can never be confused with a sequence of maps.

use serde_json::{Map, Value};

use crate::{BlueprintError, BlueprintResult, Fields};

/// A sparse delta applied to one freshly created instance.
#[derive(Clone, Debug, PartialEq)]
pub enum Override<T> {
    /// Copy every field the instance holds a value for.
    Instance(T),
    /// Assign the non-null entries of a JSON object by field name.
    Map(Value),
}

impl<T: Fields> From<T> for Override<T> {
    fn from(instance: T) -> Self {
        Self::Instance(instance)
    }
}

impl<T: Fields> From<Value> for Override<T> {
    fn from(value: Value) -> Self {
        Self::Map(value)
    }
}

impl<T: Fields> From<Map<String, Value>> for Override<T> {
    fn from(map: Map<String, Value>) -> Self {
        Self::Map(Value::Object(map))
    }
}

impl<T: Fields> From<VariantMap> for Override<T> {
    fn from(map: VariantMap) -> Self {
        Self::Map(Value::Object(map.0))
    }
}

/// A single field-name to value mapping.
///
/// # Examples
///
/// ```rust
/// use blueprint::VariantMap;
/// use serde_json::json;
///
/// let toad = VariantMap::new().set("name", "toad").set("type", "toad");
/// assert_eq!(toad.get("name"), Some(&json!("toad")));
/// assert_eq!(toad.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariantMap(Map<String, Value>);

impl VariantMap {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Return the mapping with `key` set to `value`.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Borrow the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of entries in the mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the wrapper, returning the underlying JSON object.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for VariantMap {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for VariantMap {
    type Error = BlueprintError;

    fn try_from(value: Value) -> BlueprintResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(BlueprintError::unusable_override("VariantMap", &other)),
        }
    }
}

/// An ordered batch of overrides, one per created instance.
#[derive(Clone, Debug, PartialEq)]
pub enum Variants<T> {
    /// Sibling instances applied as instance overrides.
    Instances(Vec<T>),
    /// Field-name mappings applied as map overrides.
    Maps(Vec<VariantMap>),
}

impl<T> Variants<T> {
    /// Batch of instance overrides.
    #[must_use]
    pub fn instances(list: impl IntoIterator<Item = T>) -> Self {
        Self::Instances(list.into_iter().collect())
    }

    /// Batch of map overrides.
    #[must_use]
    pub fn maps(list: impl IntoIterator<Item = VariantMap>) -> Self {
        Self::Maps(list.into_iter().collect())
    }

    /// Number of instances the batch will produce.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Instances(list) => list.len(),
            Self::Maps(list) => list.len(),
        }
    }

    /// Returns `true` when the batch produces nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert the batch into single overrides, preserving order.
    #[must_use]
    pub fn into_overrides(self) -> Vec<Override<T>> {
        match self {
            Self::Instances(list) => list.into_iter().map(Override::Instance).collect(),
            Self::Maps(list) => list
                .into_iter()
                .map(|map| Override::Map(Value::Object(map.into_map())))
                .collect(),
        }
    }
}

impl<T: Fields> From<Vec<T>> for Variants<T> {
    fn from(list: Vec<T>) -> Self {
        Self::Instances(list)
    }
}

impl<T: Fields> From<Vec<VariantMap>> for Variants<T> {
    fn from(list: Vec<VariantMap>) -> Self {
        Self::Maps(list)
    }
}
