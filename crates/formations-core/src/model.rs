//! Formation record as exchanged with the REST API

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Server-assigned opaque identifier of a formation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormationId(String);

impl FormationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A formation as returned by the API.
///
/// The server names the identifier `_id`; `id` is accepted as well.
/// `imageUrl` is absent on records created before the field existed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formation {
    #[serde(rename = "_id", alias = "id")]
    pub id: FormationId,
    pub nom: String,
    #[serde(with = "formation_date")]
    pub date_formation: NaiveDate,
    pub nombre_utilisations: i64,
    pub thematique: String,
    pub prix: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Formation {
    /// Image URL if one is set and non-blank.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Parses a `GET /api/formations` body record by record. Records that do
/// not parse are logged and left out so the rest still show.
///
/// # Errors
/// Returns the JSON error if the body is not an array.
pub fn parse_formation_list(body: &str) -> Result<Vec<Formation>, serde_json::Error> {
    let records: Vec<serde_json::Value> = serde_json::from_str(body)?;
    Ok(records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Formation>(record) {
            Ok(formation) => Some(formation),
            Err(err) => {
                warn!(%err, "skipping unreadable formation");
                None
            }
        })
        .collect())
}

/// Body of create (POST) and update (PUT) requests: every field except the
/// identifier and the server timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormationPayload {
    pub nom: String,
    #[serde(with = "formation_date")]
    pub date_formation: NaiveDate,
    pub nombre_utilisations: i64,
    pub thematique: String,
    pub prix: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Parses a formation date given either as `YYYY-MM-DD` or as an RFC 3339
/// timestamp (taken in UTC).
#[must_use]
pub fn parse_formation_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, formation_date::FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
        })
}

/// Serde adapter for `dateFormation`: reads dates or timestamps, writes `YYYY-MM-DD`.
pub mod formation_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_formation_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid formation date '{raw}'")))
    }
}
