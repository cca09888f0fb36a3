use serde::{Deserialize, Deserializer};

/// Deserialize a boolean that the API sometimes sends as `true`/`false`
/// and sometimes as `0`/`1`.
pub fn bool_from_int_or_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrInt {
        Bool(bool),
        Int(i64),
    }

    Ok(match BoolOrInt::deserialize(deserializer)? {
        BoolOrInt::Bool(b) => b,
        BoolOrInt::Int(n) => n != 0,
    })
}

/// Deserialize an identifier that may arrive as a JSON string or number.
pub fn string_from_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Int(i64),
        Float(f64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Int(n) => n.to_string(),
        StringOrNumber::Float(f) => f.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Flags {
        #[serde(deserialize_with = "super::bool_from_int_or_bool")]
        enabled: bool,
        #[serde(deserialize_with = "super::string_from_id")]
        id: String,
    }

    #[test]
    fn accepts_native_bool_and_string_id() {
        let f: Flags = serde_json::from_str(r#"{"enabled":true,"id":"-OJx1"}"#).unwrap();
        assert!(f.enabled);
        assert_eq!(f.id, "-OJx1");
    }

    #[test]
    fn accepts_numeric_bool_and_numeric_id() {
        let f: Flags = serde_json::from_str(r#"{"enabled":1,"id":1}"#).unwrap();
        assert!(f.enabled);
        assert_eq!(f.id, "1");

        let f: Flags = serde_json::from_str(r#"{"enabled":0,"id":7}"#).unwrap();
        assert!(!f.enabled);
    }
}
