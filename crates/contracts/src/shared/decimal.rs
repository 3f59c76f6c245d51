//! Deserialization helpers for DRF decimal fields.
//!
//! The backend serializes `DecimalField` model fields as JSON strings
//! (`"150.00"`) while values it computes on the fly arrive as plain
//! numbers. Fields that can be either deserialize through this module.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Number(f64),
    Text(String),
}

/// Accept `150.0`, `"150.00"` or `150` for an `f64` field.
pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Number(n) => Ok(n),
        StringOrNumber::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

/// Same as [`deserialize`] but for optional fields; `null` stays `None`.
pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::Number(n)) => Ok(Some(n)),
        Some(StringOrNumber::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Monto {
        #[serde(deserialize_with = "super::deserialize")]
        valor: f64,
    }

    #[test]
    fn test_number_and_string_forms() {
        let m: Monto = serde_json::from_str(r#"{"valor": 150.5}"#).unwrap();
        assert_eq!(m.valor, 150.5);
        let m: Monto = serde_json::from_str(r#"{"valor": "150.00"}"#).unwrap();
        assert_eq!(m.valor, 150.0);
        let m: Monto = serde_json::from_str(r#"{"valor": 300}"#).unwrap();
        assert_eq!(m.valor, 300.0);
    }

    #[test]
    fn test_garbage_string_is_an_error() {
        assert!(serde_json::from_str::<Monto>(r#"{"valor": "abc"}"#).is_err());
    }
}
