//! Reading jobconf files.
//!
//! A jobconf file is a flat JSON object of property name to string value.
//! Numbers and booleans are accepted and stored in their JSON spelling, since
//! Hadoop reads every property as a string anyway.

use std::collections::BTreeMap;
use std::path::Path;

pub(crate) fn load(path: &Path) -> Result<BTreeMap<String, String>, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("error reading file '{}': {}", path.display(), e))?;
    parse(&text).map_err(|e| format!("error: invalid jobconf in {}: {}", path.display(), e))
}

fn parse(text: &str) -> Result<BTreeMap<String, String>, String> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    let object = value
        .as_object()
        .ok_or_else(|| "expected a JSON object".to_string())?;

    let mut conf = BTreeMap::new();
    for (key, value) in object {
        let value = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            _ => return Err(format!("value of '{}' must be a string", key)),
        };
        conf.insert(key.clone(), value);
    }
    Ok(conf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_objects() {
        let conf = parse(r#"{"mapred.reduce.tasks": 4, "user.name": "dave", "x.y": true}"#).unwrap();
        assert_eq!(conf["mapred.reduce.tasks"], "4");
        assert_eq!(conf["user.name"], "dave");
        assert_eq!(conf["x.y"], "true");
    }

    #[test]
    fn rejects_nested_values_and_non_objects() {
        assert!(parse(r#"{"a": {"b": 1}}"#).unwrap_err().contains("'a'"));
        assert!(parse(r#"{"a": null}"#).is_err());
        assert_eq!(parse("[1, 2]").unwrap_err(), "expected a JSON object");
        assert!(parse("{").is_err());
    }
}
