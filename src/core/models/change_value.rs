use serde_json::{Number, Value};

/// A before/after payload, decoded once from the stored JSON.
///
/// Settings are sometimes stored as JSON text inside a JSON string
/// (`"{\"en\":\"Hi\"}"`). `decode` unwraps that layer at the top level
/// only; nested strings stay text.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeValue {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    Array(Vec<ChangeValue>),
    /// Keys in stored order.
    Object(Vec<(String, ChangeValue)>),
}

impl ChangeValue {
    /// Decode a stored payload, unwrapping JSON-encoded objects and arrays.
    pub fn decode(raw: &Value) -> Self {
        match raw {
            Value::String(text) => Self::decode_text(text),
            other => Self::from_json(other),
        }
    }

    /// Decode free text: JSON objects and arrays become structured,
    /// anything else (including JSON scalars and malformed JSON) stays
    /// the literal text.
    pub fn decode_text(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(parsed @ (Value::Array(_) | Value::Object(_))) => Self::from_json(&parsed),
            _ => ChangeValue::Text(text.to_string()),
        }
    }

    /// Structural conversion without looking inside strings.
    pub fn from_json(raw: &Value) -> Self {
        match raw {
            Value::Null => ChangeValue::Null,
            Value::Bool(b) => ChangeValue::Bool(*b),
            Value::Number(n) => ChangeValue::Number(n.clone()),
            Value::String(s) => ChangeValue::Text(s.clone()),
            Value::Array(items) => ChangeValue::Array(items.iter().map(Self::from_json).collect()),
            Value::Object(map) => ChangeValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Self::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Look up a key on an object; `None` for every other variant.
    pub fn get(&self, key: &str) -> Option<&ChangeValue> {
        match self {
            ChangeValue::Object(fields) => fields.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ChangeValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_text_object_is_unwrapped() {
        let v = ChangeValue::decode(&json!("{\"en\":\"Hi\",\"ar\":\"أهلا\"}"));
        assert_eq!(v.get("en"), Some(&ChangeValue::Text("Hi".into())));
    }

    #[test]
    fn json_text_array_is_unwrapped() {
        let v = ChangeValue::decode(&json!("[1, 2, 3]"));
        assert!(matches!(v, ChangeValue::Array(ref items) if items.len() == 3));
    }

    #[test]
    fn json_text_scalar_stays_text() {
        assert_eq!(ChangeValue::decode(&json!("42")), ChangeValue::Text("42".into()));
        assert_eq!(ChangeValue::decode(&json!("true")), ChangeValue::Text("true".into()));
    }

    #[test]
    fn malformed_json_text_stays_text() {
        let raw = "{not json";
        assert_eq!(ChangeValue::decode(&json!(raw)), ChangeValue::Text(raw.into()));
    }

    #[test]
    fn nested_strings_are_not_unwrapped() {
        let v = ChangeValue::decode(&json!({"list": "[1,2]"}));
        assert_eq!(v.get("list"), Some(&ChangeValue::Text("[1,2]".into())));
    }

    #[test]
    fn object_keeps_stored_key_order() {
        let v = ChangeValue::decode(&json!("{\"zeta\":1,\"alpha\":2}"));
        let ChangeValue::Object(fields) = v else {
            panic!("expected object");
        };
        assert_eq!(fields[0].0, "zeta");
        assert_eq!(fields[1].0, "alpha");
    }

    #[test]
    fn get_on_non_object_is_none() {
        assert!(ChangeValue::Text("x".into()).get("x").is_none());
    }
}
