//! The feature collaborator: an identified geometry with a property map.

use crate::geometry::Geometry;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A map feature as seen by filters and style resolution.
pub trait Feature {
    fn id(&self) -> Option<&str>;

    fn geometry(&self) -> Option<&Geometry>;

    fn property(&self, name: &str) -> Option<&Value>;
}

/// Looks up a named property of a feature.
///
/// Hosts inject this to control how attribute names map to feature data.
/// Any `Fn(&dyn Feature, &str) -> Option<Value>` closure implements it.
pub trait PropertyGetter {
    fn get(&self, feature: &dyn Feature, name: &str) -> Option<Value>;
}

impl<F> PropertyGetter for F
where
    F: Fn(&dyn Feature, &str) -> Option<Value>,
{
    fn get(&self, feature: &dyn Feature, name: &str) -> Option<Value> {
        self(feature, name)
    }
}

/// Reads properties straight from [`Feature::property`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectPropertyGetter;

impl PropertyGetter for DirectPropertyGetter {
    fn get(&self, feature: &dyn Feature, name: &str) -> Option<Value> {
        feature.property(name).cloned()
    }
}

/// A plain feature, deserializable from a GeoJSON `Feature` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleFeature {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default, deserialize_with = "deserialize_properties")]
    pub properties: Map<String, Value>,
}

impl SimpleFeature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

impl Feature for SimpleFeature {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

// GeoJSON allows numeric ids.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(property_to_string(&other)),
    })
}

fn deserialize_properties<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Stringifies a property value the way it is shown in labels and URLs:
/// strings verbatim, integral numbers without a fraction, null as empty.
pub fn property_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Coerces a property value to a number. Numeric strings are parsed;
/// anything else yields `None`.
pub fn property_to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_geojson_feature_with_numeric_id() {
        let feature: SimpleFeature = serde_json::from_value(json!({
            "type": "Feature",
            "id": 42,
            "geometry": { "type": "Point", "coordinates": [1.0, 2.0] },
            "properties": { "name": "Utrecht" }
        }))
        .unwrap();
        assert_eq!(feature.id(), Some("42"));
        assert_eq!(feature.property("name"), Some(&json!("Utrecht")));
        assert!(feature.geometry().is_some());
    }

    #[test]
    fn test_null_properties_become_empty() {
        let feature: SimpleFeature =
            serde_json::from_value(json!({ "geometry": null, "properties": null })).unwrap();
        assert!(feature.properties.is_empty());
        assert!(feature.geometry().is_none());
    }

    #[test]
    fn test_property_to_string() {
        assert_eq!(property_to_string(&json!(42)), "42");
        assert_eq!(property_to_string(&json!(42.0)), "42");
        assert_eq!(property_to_string(&json!(1.5)), "1.5");
        assert_eq!(property_to_string(&json!("abc")), "abc");
        assert_eq!(property_to_string(&Value::Null), "");
    }

    #[test]
    fn test_property_to_number() {
        assert_eq!(property_to_number(&json!("12.5")), Some(12.5));
        assert_eq!(property_to_number(&json!(3)), Some(3.0));
        assert_eq!(property_to_number(&json!("abc")), None);
    }

    #[test]
    fn test_closure_property_getter() {
        let feature = SimpleFeature::new().with_property("pop", 1000);
        let getter = |feature: &dyn Feature, name: &str| {
            feature.property(&name.to_lowercase()).cloned()
        };
        assert_eq!(getter.get(&feature, "POP"), Some(json!(1000)));
    }
}
