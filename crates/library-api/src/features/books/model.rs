//! The `Book` resource
//!
//! [`Book`] is the validated row and the response body. Requests arrive as a
//! [`BookRequest`], which accepts any casing of the property names and keeps
//! missing or unparsable field values around so validation can report them
//! field by field instead of failing the whole body.

use chrono::NaiveDate;
use serde::{de, de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Book {
    #[schema(example = "978-0441172719")]
    pub isbn: String,

    #[schema(example = "Dune")]
    pub title: String,

    #[schema(example = "Frank Herbert")]
    pub author: String,

    pub short_description: Option<String>,

    #[schema(example = 617)]
    pub page_count: i32,

    #[serde(with = "release_date")]
    #[schema(value_type = String, format = Date, example = "1965-08-01")]
    pub release_date: NaiveDate,
}

/// Body of create and update requests, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    #[schema(example = "978-0441172719")]
    pub isbn: String,

    #[schema(example = "Dune")]
    pub title: String,

    #[schema(example = "Frank Herbert")]
    pub author: String,

    pub short_description: Option<String>,

    #[schema(example = 617)]
    pub page_count: i32,

    /// Must be exactly `YYYY-MM-DD`
    #[schema(format = Date, example = "1965-08-01")]
    pub release_date: Option<String>,
}

impl<'de> Deserialize<'de> for BookRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let properties = Map::<String, Value>::deserialize(deserializer)?;
        let mut request = BookRequest::default();

        for (name, value) in properties {
            match name.to_lowercase().as_str() {
                "isbn" => request.isbn = text(&name, value)?,
                "title" => request.title = text(&name, value)?,
                "author" => request.author = text(&name, value)?,
                "shortdescription" => request.short_description = typed(&name, value)?,
                "pagecount" => request.page_count = typed(&name, value)?,
                "releasedate" => request.release_date = typed(&name, value)?,
                _ => {},
            }
        }

        Ok(request)
    }
}

/// A string property where `null` counts as empty
fn text<E: de::Error>(name: &str, value: Value) -> Result<String, E> {
    typed::<Option<String>, E>(name, value).map(Option::unwrap_or_default)
}

fn typed<T: DeserializeOwned, E: de::Error>(name: &str, value: Value) -> Result<T, E> {
    serde_json::from_value(value).map_err(|e| E::custom(format!("'{}': {}", name, e)))
}

/// `releaseDate` is written and read as `YYYY-MM-DD`
pub mod release_date {
    use chrono::NaiveDate;
    use serde::Serializer;

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(FORMAT))
    }

    /// Only the exact ten-character form; times and offsets are rejected
    pub fn parse(raw: &str) -> Option<NaiveDate> {
        if raw.len() != 10 {
            return None;
        }
        NaiveDate::parse_from_str(raw, FORMAT).ok()
    }
}
