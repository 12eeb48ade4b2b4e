use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Decodes `null` (or a missing field, together with `#[serde(default)]`) as
/// `T::default()`. CloudStack sends `null` for some empty collections.
pub(crate) fn null_to_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::deserialize(d)?;
    Ok(opt.unwrap_or_default())
}

/// Ports and a few counters come back as numbers from some commands and as
/// strings from others.
pub(crate) fn lenient_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(d)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or a number, got {}",
            other
        ))),
    }
}

pub(crate) fn lenient_bool<'de, D>(d: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(d)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(b)),
        Some(Value::String(s)) => match s.to_ascii_lowercase().as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ => Err(de::Error::custom(format!("expected a boolean, got {:?}", s))),
        },
        Some(other) => Err(de::Error::custom(format!(
            "expected a boolean, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        #[serde(default, deserialize_with = "super::lenient_string")]
        port: Option<String>,
        #[serde(default, deserialize_with = "super::lenient_bool")]
        flag: Option<bool>,
        #[serde(default, deserialize_with = "super::null_to_default")]
        items: Vec<String>,
    }

    #[test]
    fn lenient_fields_accept_both_shapes() {
        let a: Sample = serde_json::from_str(r#"{"port": 22, "flag": "True", "items": null}"#).unwrap();
        let b: Sample = serde_json::from_str(r#"{"port": "22", "flag": true}"#).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.port.as_deref(), Some("22"));
        assert_eq!(a.flag, Some(true));
        assert!(a.items.is_empty());
    }

    #[test]
    fn lenient_bool_rejects_garbage() {
        let res: Result<Sample, _> = serde_json::from_str(r#"{"flag": "maybe"}"#);
        assert!(res.is_err());
    }
}
