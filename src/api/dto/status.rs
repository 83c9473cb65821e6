//! DTOs for the click statistics endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::ClickRecord;

/// Query parameters of `GET /{code}/status`.
///
/// Parsed with `serde_with` since query strings carry everything as text.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct StatusQuery {
    /// Include the click list, not only the count.
    #[serde(default, deserialize_with = "flag_from_str")]
    pub full_info: bool,

    #[serde_as(as = "DisplayFromStr")]
    #[validate(range(min = 2, message = "max_result must be greater than 1"))]
    pub max_result: i64,

    #[serde_as(as = "DisplayFromStr")]
    #[validate(range(min = 1, message = "offset must be greater than 0"))]
    pub offset: i64,
}

/// Parses a query flag: `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`,
/// `t`/`f`, `y`/`n`, case-insensitive.
fn flag_from_str<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
        _ => Err(de::Error::invalid_value(
            de::Unexpected::Str(&value),
            &"a boolean flag",
        )),
    }
}

/// Click count, plus the clicks themselves when `full_info` was requested.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub count: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicks: Option<Vec<ClickInfo>>,
}

impl StatusResponse {
    pub fn new(clicks: Vec<ClickRecord>, full_info: bool) -> Self {
        Self {
            count: clicks.len(),
            clicks: full_info.then(|| clicks.into_iter().map(ClickInfo::from).collect()),
        }
    }
}

/// Single click summary.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub visited: DateTime<Utc>,
    pub client_data: String,
}

impl From<ClickRecord> for ClickInfo {
    fn from(click: ClickRecord) -> Self {
        Self {
            visited: click.created_at,
            client_data: click.client_descriptor,
        }
    }
}
