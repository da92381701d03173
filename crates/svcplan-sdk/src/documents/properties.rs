use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Free-form configuration attached to a plan or a job.
///
/// Integer literals anywhere in the bag are widened to floating point when
/// decoded, so `{"port": 8080}` reads back as `8080.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Properties(Map<String, Value>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Properties {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for Properties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self(widen_object(map)))
    }
}

fn widen_object(object: Map<String, Value>) -> Map<String, Value> {
    object
        .into_iter()
        .map(|(key, value)| (key, widen_numbers(value)))
        .collect()
}

fn widen_numbers(value: Value) -> Value {
    match value {
        Value::Number(number) if !number.is_f64() => {
            match number.as_f64().and_then(Number::from_f64) {
                Some(widened) => Value::Number(widened),
                None => Value::Number(number),
            }
        }
        Value::Array(items) => Value::Array(items.into_iter().map(widen_numbers).collect()),
        Value::Object(object) => Value::Object(widen_object(object)),
        other => other,
    }
}

#[cfg(test)]
#[path = "properties_test.rs"]
mod tests;
