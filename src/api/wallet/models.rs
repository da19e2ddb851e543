use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use thiserror::Error;
use crate::utils::format_js_number;

/// Response from GET /balance
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Balance {
    #[serde(rename = "BTC_balance")]
    pub btc_balance: Amount,
    #[serde(rename = "EUR_balance")]
    pub eur_balance: Amount,
}

/// Single entry of the GET /transactions array
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub amount: f64,
    pub spent: bool,
    pub created_at: CreatedAt,
}

impl Transaction {
    /// Unspent with a non-zero amount
    pub fn is_current(&self) -> bool {
        !self.spent && self.amount != 0.0
    }

    pub fn is_history(&self) -> bool {
        self.spent
    }
}

/// A decimal value that keeps the text it arrived as.
///
/// The backend may send balances either as JSON numbers or as decimal
/// strings (`"0.50000"`). Strings display exactly as received; numbers
/// display in JavaScript notation (`2.0` prints as `2`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawAmount")]
pub struct Amount(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(serde_json::Number),
    Text(String),
}

impl TryFrom<RawAmount> for Amount {
    type Error = String;

    fn try_from(raw: RawAmount) -> Result<Self, Self::Error> {
        match raw {
            RawAmount::Number(n) if n.is_f64() => match n.as_f64() {
                Some(v) => Ok(Amount(format_js_number(v))),
                None => Err(format!("invalid decimal amount: {}", n)),
            },
            RawAmount::Number(n) => Ok(Amount(n.to_string())),
            RawAmount::Text(s) => {
                let trimmed = s.trim();
                match trimmed.parse::<f64>() {
                    Ok(v) if v.is_finite() => Ok(Amount(trimmed.to_string())),
                    _ => Err(format!("invalid decimal amount: {:?}", s)),
                }
            }
        }
    }
}

impl Amount {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Creation time as stored by the backend: an ISO-8601 string or epoch milliseconds
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CreatedAt {
    Millis(f64),
    Text(String),
}

impl CreatedAt {
    /// Resolve into `tz`, or `None` when the value names no valid instant.
    ///
    /// Offset-less date-times are read as wall-clock time in `tz`; a bare
    /// date is UTC midnight. A wall-clock time skipped by a DST transition
    /// moves forward by an hour.
    pub fn to_datetime<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        match self {
            CreatedAt::Millis(ms) => {
                if !ms.is_finite() {
                    return None;
                }
                Utc.timestamp_millis_opt(ms.trunc() as i64)
                    .single()
                    .map(|dt| dt.with_timezone(tz))
            }
            CreatedAt::Text(s) => {
                let s = s.trim();
                if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                    return Some(dt.with_timezone(tz));
                }
                for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
                    if let Ok(naive) = NaiveDateTime::parse_from_str(s, pattern) {
                        return tz
                            .from_local_datetime(&naive)
                            .earliest()
                            .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest());
                    }
                }
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|naive| naive.and_utc().with_timezone(tz))
            }
        }
    }
}

/// Error type for wallet API operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// 404 Not Found
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    /// Other non-success HTTP status
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Body was not the expected JSON shape
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, LocalResult, Timelike};

    /// UTC+1 until 2024-03-31 02:00 local, then UTC+2; 02:00..03:00 never happens
    #[derive(Debug, Clone, Copy)]
    struct SpringForward;

    impl SpringForward {
        fn transition() -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap().and_hms_opt(2, 0, 0).unwrap()
        }

        fn winter() -> FixedOffset {
            FixedOffset::east_opt(3600).unwrap()
        }

        fn summer() -> FixedOffset {
            FixedOffset::east_opt(2 * 3600).unwrap()
        }
    }

    impl TimeZone for SpringForward {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            SpringForward
        }

        fn offset_from_local_date(&self, _local: &NaiveDate) -> LocalResult<FixedOffset> {
            LocalResult::Single(Self::winter())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let start = Self::transition();
            if *local < start {
                LocalResult::Single(Self::winter())
            } else if *local < start + Duration::hours(1) {
                LocalResult::None
            } else {
                LocalResult::Single(Self::summer())
            }
        }

        fn offset_from_utc_date(&self, _utc: &NaiveDate) -> FixedOffset {
            Self::winter()
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if *utc < Self::transition() - Duration::hours(1) {
                Self::winter()
            } else {
                Self::summer()
            }
        }
    }

    #[test]
    fn test_balance_accepts_numbers_and_strings() {
        let numeric: Balance =
            serde_json::from_str(r#"{"BTC_balance": 1.5, "EUR_balance": 1234567}"#).unwrap();
        assert_eq!(numeric.btc_balance.as_str(), "1.5");
        assert_eq!(numeric.eur_balance.as_str(), "1234567");

        let textual: Balance =
            serde_json::from_str(r#"{"BTC_balance": "0.50000", "EUR_balance": "12345.67"}"#)
                .unwrap();
        assert_eq!(textual.btc_balance.to_string(), "0.50000");
        assert_eq!(textual.eur_balance.to_string(), "12345.67");
    }

    #[test]
    fn test_float_typed_balance_numbers_drop_integral_fraction() {
        let balance: Balance =
            serde_json::from_str(r#"{"BTC_balance": 2.0, "EUR_balance": 1234567.0}"#).unwrap();
        assert_eq!(balance.btc_balance.as_str(), "2");
        assert_eq!(balance.eur_balance.as_str(), "1234567");

        let exponent: Balance =
            serde_json::from_str(r#"{"BTC_balance": 0.25, "EUR_balance": 1e3}"#).unwrap();
        assert_eq!(exponent.btc_balance.as_str(), "0.25");
        assert_eq!(exponent.eur_balance.as_str(), "1000");
    }

    #[test]
    fn test_balance_rejects_bad_shapes() {
        assert!(serde_json::from_str::<Balance>(r#"{"BTC_balance": 1.5}"#).is_err());
        assert!(serde_json::from_str::<Balance>(
            r#"{"BTC_balance": "lots", "EUR_balance": 1}"#
        )
        .is_err());
        assert!(serde_json::from_str::<Balance>("[]").is_err());
    }

    #[test]
    fn test_transaction_requires_all_fields() {
        let tx: Transaction = serde_json::from_str(
            r#"{"transaction_id":"t1","amount":100,"spent":false,"created_at":"2024-03-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(tx.transaction_id, "t1");
        assert_eq!(tx.amount, 100.0);
        assert!(tx.is_current());
        assert!(!tx.is_history());

        assert!(serde_json::from_str::<Transaction>(
            r#"{"transaction_id":"t1","amount":100,"spent":false}"#
        )
        .is_err());
    }

    #[test]
    fn test_zero_amount_unspent_is_neither_view() {
        let tx = Transaction {
            transaction_id: "z".to_string(),
            amount: 0.0,
            spent: false,
            created_at: CreatedAt::Millis(0.0),
        };
        assert!(!tx.is_current());
        assert!(!tx.is_history());
    }

    #[test]
    fn test_created_at_formats() {
        let utc = Utc;

        let rfc = CreatedAt::Text("2024-03-01T12:00:00+01:00".to_string());
        assert_eq!(rfc.to_datetime(&utc).unwrap().hour(), 11);

        let millis = CreatedAt::Millis(1_700_000_000_000.0);
        assert_eq!(millis.to_datetime(&utc).unwrap().timestamp(), 1_700_000_000);

        let date_only = CreatedAt::Text("2024-03-01".to_string());
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(date_only.to_datetime(&plus_two).unwrap().hour(), 2);

        let naive = CreatedAt::Text("2024-03-01T08:15:00".to_string());
        let resolved = naive.to_datetime(&plus_two).unwrap();
        assert_eq!(resolved.hour(), 8);
        assert_eq!(resolved.with_timezone(&utc).hour(), 6);

        assert!(CreatedAt::Text("yesterday".to_string()).to_datetime(&utc).is_none());
    }

    #[test]
    fn test_created_at_in_dst_gap_moves_forward() {
        let skipped = CreatedAt::Text("2024-03-31T02:30:00".to_string());
        let resolved = skipped.to_datetime(&SpringForward).unwrap();
        assert_eq!((resolved.hour(), resolved.minute()), (3, 30));
        assert_eq!(resolved.with_timezone(&Utc).hour(), 1);

        let before = CreatedAt::Text("2024-03-31T01:30:00".to_string());
        assert_eq!(before.to_datetime(&SpringForward).unwrap().with_timezone(&Utc).hour(), 0);
    }

    #[test]
    fn test_created_at_deserializes_both_encodings() {
        let from_number: CreatedAt = serde_json::from_str("1700000000000").unwrap();
        assert_eq!(from_number, CreatedAt::Millis(1_700_000_000_000.0));
        let from_text: CreatedAt = serde_json::from_str(r#""2024-03-01""#).unwrap();
        assert_eq!(from_text, CreatedAt::Text("2024-03-01".to_string()));
    }
}
