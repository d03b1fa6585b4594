//! Movie records as they arrive from the catalog JSON.
//!
//! Decoding is lenient per field: a value of the wrong JSON type is treated
//! as absent rather than failing the whole catalog. Every consumer already
//! maps absent values to an empty string or the `N/A` sentinel.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One movie from the catalog. Identity is the record's position in the
/// catalog; any `id` field in the source document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "lenient_genres")]
    pub genres: Vec<String>,
    /// Average vote on a 0-10 scale.
    #[serde(default, deserialize_with = "lenient_number")]
    pub vote_average: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub release_date: Option<String>,
    /// Minutes.
    #[serde(default, deserialize_with = "lenient_number")]
    pub runtime: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub budget: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub revenue: Option<f64>,
}

impl MovieRecord {
    /// Build a record with only a title set.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Decode one catalog element. Anything that is not a JSON object becomes
    /// an empty record so positions in the catalog are preserved.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        if value.is_object() {
            serde_json::from_value(value).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn tagline(&self) -> &str {
        self.tagline.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn overview(&self) -> &str {
        self.overview.as_deref().unwrap_or_default()
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Genres come either as plain strings or as `{"id": .., "name": ".."}`
/// objects. Entries of any other shape are skipped.
fn lenient_genres<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(name) => Some(name),
            Value::Object(mut map) => match map.remove("name") {
                Some(Value::String(name)) => Some(name),
                _ => None,
            },
            _ => None,
        })
        .collect())
}
