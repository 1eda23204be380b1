//! User settings for Voyage
//!
//! A single process-wide record: currency, how amounts render, and the trip type
//! new trips start with. Settings are never deleted, only patched.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::models::{Currency, TripType};

/// Most decimal places an amount is rendered with
pub const MAX_DECIMAL_PLACES: u32 = 6;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// ISO currency code (e.g. "USD")
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Symbol prefixed to rendered amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Number of decimal places to render
    #[serde(
        default = "default_decimal_places",
        deserialize_with = "deserialize_decimal_places"
    )]
    pub decimal_places: u32,

    /// Trip type preselected for new trips
    #[serde(default)]
    pub default_trip_type: TripType,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

/// Out-of-range values in a stored record fall back to the default
fn deserialize_decimal_places<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let places = u64::deserialize(deserializer)?;
    if places > u64::from(MAX_DECIMAL_PLACES) {
        warn!(places, "decimal places out of range, using default");
        return Ok(default_decimal_places());
    }
    Ok(places as u32)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            currency_symbol: default_currency_symbol(),
            decimal_places: default_decimal_places(),
            default_trip_type: TripType::default(),
        }
    }
}

impl Settings {
    /// Shallow-merge a patch over these settings
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(symbol) = patch.currency_symbol {
            self.currency_symbol = symbol;
        }
        if let Some(places) = patch.decimal_places {
            self.decimal_places = places;
        }
        if let Some(trip_type) = patch.default_trip_type {
            self.default_trip_type = trip_type;
        }
    }

    /// Render an amount with the configured symbol and decimal places
    ///
    /// No thousands separators. Negative amounts render as `-$12.00`.
    pub fn format_currency(&self, amount: f64) -> String {
        let places = self.decimal_places.min(MAX_DECIMAL_PLACES) as usize;
        if amount < 0.0 {
            format!("-{}{:.*}", self.currency_symbol, places, amount.abs())
        } else {
            format!("{}{:.*}", self.currency_symbol, places, amount.abs())
        }
    }

    /// Look up the configured currency in the known-currency table
    ///
    /// Settings may hold a code that is not in the table.
    pub fn known_currency(&self) -> Option<&'static Currency> {
        Currency::find(&self.currency)
    }
}

/// Partial update for [`Settings`]; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub currency: Option<String>,
    pub currency_symbol: Option<String>,
    pub decimal_places: Option<u32>,
    pub default_trip_type: Option<TripType>,
}

impl SettingsPatch {
    /// Switch to a known currency, taking its code and symbol together
    pub fn for_currency(currency: &Currency) -> Self {
        Self {
            currency: Some(currency.code.to_string()),
            currency_symbol: Some(currency.symbol.to_string()),
            ..Self::default()
        }
    }

    /// Whether this patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.currency.is_none()
            && self.currency_symbol.is_none()
            && self.decimal_places.is_none()
            && self.default_trip_type.is_none()
    }
}
