//! Raw record types as published in the seed dataset.
//!
//! The dataset is loosely typed: numbers sometimes arrive as strings and
//! optional fields may be missing or `null`. These types absorb that and
//! are converted to domain entities in `parsing`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// One record of the raw dataset array.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPokemon {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub height: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub weight: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub xp: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub pokemon_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub abilities: Vec<RawAbility>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stats: Vec<RawStat>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub types: Vec<RawType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAbility {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStat {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub base_stat: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawType {
    pub name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Accept a JSON integer, an integral float, or a numeric string.
/// `null` and the empty string read as 0.
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(0),
        Some(NumberOrString::Int(n)) => Ok(n),
        Some(NumberOrString::Float(f)) => {
            if f.fract() == 0.0 && f.abs() < 9.0e15 {
                #[allow(clippy::cast_possible_truncation)] // integral and in range
                let n = f as i64;
                Ok(n)
            } else {
                Err(D::Error::custom(format!("expected an integer, got {f}")))
            }
        }
        Some(NumberOrString::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed
                .parse()
                .map_err(|_| D::Error::custom(format!("expected an integer, got \"{s}\"")))
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrString {
    Bool(bool),
    Text(String),
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(false),
        Some(BoolOrString::Bool(b)) => Ok(b),
        Some(BoolOrString::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" | "" => Ok(false),
            other => Err(D::Error::custom(format!("expected a boolean, got \"{other}\""))),
        },
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
