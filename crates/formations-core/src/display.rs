//! Formatting of formation values for cards and forms

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::{CURRENCY_SUFFIX, PLACEHOLDER_IMAGE};

const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";
const MISSING_VALUE: &str = "—";

/// Formats a number without a trailing `.0` for whole values: `100.0` → `"100"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Price followed by the currency suffix: `100.0` → `"100 €"`.
#[must_use]
pub fn format_price(prix: f64) -> String {
    format!("{} {CURRENCY_SUFFIX}", format_number(prix))
}

/// Day/month/year date.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Day/month/year of a server timestamp, or a dash when absent.
#[must_use]
pub fn format_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp.map_or_else(
        || MISSING_VALUE.to_string(),
        |ts| format_date(ts.date_naive()),
    )
}

/// What an `<img>` for a formation should load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(String),
    Placeholder,
}

impl ImageSource {
    /// Remote image when `url` starts with an http(s) scheme, placeholder otherwise.
    #[must_use]
    pub fn for_url(url: Option<&str>) -> Self {
        url.map(str::trim)
            .filter(|url| url.starts_with("http://") || url.starts_with("https://"))
            .map_or(Self::Placeholder, |url| Self::Remote(url.to_string()))
    }

    #[must_use]
    pub fn src(&self) -> &str {
        match self {
            Self::Remote(url) => url,
            Self::Placeholder => PLACEHOLDER_IMAGE,
        }
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Switches to the placeholder after a load failure. Returns true if the
    /// source changed, so a failing placeholder cannot loop.
    pub fn fall_back(&mut self) -> bool {
        if self.is_remote() {
            *self = Self::Placeholder;
            true
        } else {
            false
        }
    }
}
