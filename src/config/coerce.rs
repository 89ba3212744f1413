use std::fmt::Display;

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerInput {
    Native(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolInput {
    Native(bool),
    Text(String),
}

/// Accepts a native integer or a decimal string and narrows it to `T`.
pub fn integer<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
    <T as TryFrom<i64>>::Error: Display,
{
    let value = match IntegerInput::deserialize(deserializer)? {
        IntegerInput::Native(value) => value,
        IntegerInput::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("expected an integer, found `{text}`")))?,
    };

    T::try_from(value).map_err(|err| de::Error::custom(format!("integer {value} rejected: {err}")))
}

pub fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match BoolInput::deserialize(deserializer)? {
        BoolInput::Native(value) => Ok(value),
        BoolInput::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(de::Error::custom(format!(
                "expected a boolean, found `{text}`"
            ))),
        },
    }
}
