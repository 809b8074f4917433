use crate::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};

/// Aggregation periods the trend endpoint buckets by
pub const TREND_PERIODS: [&str; 4] = ["week", "month", "quarter", "year"];

pub fn is_known_period(period: &str) -> bool {
    TREND_PERIODS.contains(&period)
}

/// Query for `GET /api/trend/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendRequest {
    pub period: String,
}

/// Response for `GET /api/trend/`
///
/// The three arrays are parallel: `conversations[i]` and `seeds[i]` are the
/// counts for the bucket labelled `dates[i]`. Missing or `null` arrays
/// deserialize as empty so a malformed response renders as an empty chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub dates: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub conversations: Vec<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub seeds: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let json = r#"{"dates":["Jan 1","Jan 8"],"conversations":[3,4],"seeds":[1,0]}"#;
        let parsed: TrendResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.dates, vec!["Jan 1", "Jan 8"]);
        assert_eq!(parsed.conversations, vec![3.0, 4.0]);
        assert_eq!(parsed.seeds, vec![1.0, 0.0]);
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let parsed: TrendResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TrendResponse::default());
    }

    #[test]
    fn test_null_arrays_are_empty() {
        let json = r#"{"dates":null,"conversations":null,"seeds":null}"#;
        let parsed: TrendResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, TrendResponse::default());
    }

    #[test]
    fn test_known_periods() {
        assert!(is_known_period("week"));
        assert!(is_known_period("year"));
        assert!(!is_known_period("Week"));
        assert!(!is_known_period("decade"));
    }
}
