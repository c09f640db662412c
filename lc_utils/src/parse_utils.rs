use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a pasted exercise literal as JSON. Anything that does not parse
/// comes back as the raw trimmed string.
pub fn parse(s: &str) -> Value {
    match serde_json::from_str(s) {
        Ok(v) => v,
        Err(_) => Value::String(s.trim().to_string()),
    }
}

pub fn parse_as<T: DeserializeOwned>(s: &str) -> serde_json::Result<T> {
    serde_json::from_str(s)
}

/// Remove one pair of surrounding double quotes, if present.
pub fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        return &s[1..s.len() - 1];
    }
    return s;
}
