use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use super::types::Symbol;

/// One entry of the price feed, exactly as it appears on the wire.
///
/// ```json
/// { "currency": "ETH", "date": "2023-08-29T07:10:52.000Z", "price": 1645.93 }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RawPriceEntry {
    pub currency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl RawPriceEntry {
    /// Converts the wire entry into an observation.
    ///
    /// A `date` that is not valid RFC 3339 is treated as absent.
    pub fn into_observation(self) -> PriceObservation {
        let observed_at = self.date.as_deref().and_then(|raw| {
            match DateTime::parse_from_rfc3339(raw) {
                Ok(ts) => Some(ts.with_timezone(&Utc)),
                Err(e) => {
                    debug!(
                        "Ignoring unparseable date '{}' for {}: {}",
                        raw, self.currency, e
                    );
                    None
                }
            }
        });

        PriceObservation {
            symbol: self.currency,
            price: self.price,
            observed_at,
        }
    }
}

/// A raw, untrusted price record for a symbol at a point in time.
///
/// A symbol may appear many times in a feed. An absent `price` means
/// "no observation", not zero.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceObservation {
    pub symbol: Symbol,
    pub price: Option<f64>,
    pub observed_at: Option<DateTime<Utc>>,
}

impl PriceObservation {
    pub fn new(
        symbol: impl Into<Symbol>,
        price: Option<f64>,
        observed_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            observed_at,
        }
    }

    /// Returns the price only when it is a usable number.
    pub fn usable_price(&self) -> Option<f64> {
        self.price.filter(|p| p.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_full_entry() {
        let entry: RawPriceEntry = serde_json::from_str(
            r#"{"currency":"ETH","date":"2023-08-29T07:10:52.000Z","price":1645.9337373737374}"#,
        )
        .unwrap();
        let obs = entry.into_observation();
        assert_eq!(obs.symbol, "ETH");
        assert_eq!(obs.price, Some(1645.9337373737374));
        assert_eq!(
            obs.observed_at,
            Some(Utc.with_ymd_and_hms(2023, 8, 29, 7, 10, 52).unwrap())
        );
    }

    #[test]
    fn test_missing_price_is_absent_not_zero() {
        let entry: RawPriceEntry =
            serde_json::from_str(r#"{"currency":"USC","date":"2023-08-29T07:10:52.000Z"}"#)
                .unwrap();
        let obs = entry.into_observation();
        assert_eq!(obs.price, None);
        assert_eq!(obs.usable_price(), None);
    }

    #[test]
    fn test_bad_date_is_treated_as_absent() {
        let entry = RawPriceEntry {
            currency: "ATOM".to_string(),
            price: Some(7.18),
            date: Some("yesterday".to_string()),
        };
        let obs = entry.into_observation();
        assert_eq!(obs.observed_at, None);
        assert_eq!(obs.price, Some(7.18));
    }

    #[test]
    fn test_offset_dates_normalize_to_utc() {
        let entry = RawPriceEntry {
            currency: "OSMO".to_string(),
            price: Some(0.37),
            date: Some("2023-08-29T09:10:52+02:00".to_string()),
        };
        let obs = entry.into_observation();
        assert_eq!(
            obs.observed_at,
            Some(Utc.with_ymd_and_hms(2023, 8, 29, 7, 10, 52).unwrap())
        );
    }
}
