//! Review records.

use core::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use storefront_core::{DomainError, ProductId};

/// Star rating, `1..=5`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(1);
    pub const MAX: Rating = Rating(5);

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating::MIN
    }
}

impl TryFrom<i64> for Rating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Rating::MIN.0)..=i64::from(Rating::MAX.0)).contains(&value) {
            Ok(Rating(value as u8))
        } else {
            Err(DomainError::validation(format!("rating must be 1 to 5, got {value}")))
        }
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

impl FromStr for Rating {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: i64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::validation(format!("rating must be a number, got {s:?}")))?;
        Rating::try_from(n)
    }
}

impl core::fmt::Display for Rating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.0, Rating::MAX.0)
    }
}

const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn deserialize_created_at<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    // Page-rendered reviews may carry microseconds; the create endpoint does not.
    NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%d %H:%M:%S%.f")
        .map_err(serde::de::Error::custom)
}

fn serialize_created_at<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(CREATED_AT_FORMAT))
}

/// A confirmed review, as returned by `POST /add-review`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewEntry {
    pub first_name: String,
    pub last_name: String,
    pub rating: Rating,
    pub comment: String,
    #[serde(
        deserialize_with = "deserialize_created_at",
        serialize_with = "serialize_created_at"
    )]
    pub created_at: NaiveDateTime,
}

impl ReviewEntry {
    pub fn author(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn created_at_label(&self) -> String {
        self.created_at.format(CREATED_AT_FORMAT).to_string()
    }
}

/// A validated submission, ready for the create-review collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReview {
    pub product_id: ProductId,
    pub rating: Rating,
    /// Already trimmed and non-empty.
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert_eq!(Rating::try_from(1i64).unwrap(), Rating::MIN);
        assert_eq!(" 5 ".parse::<Rating>().unwrap(), Rating::MAX);
        assert!(Rating::try_from(0i64).is_err());
        assert!(Rating::try_from(6i64).is_err());
        assert!("five".parse::<Rating>().is_err());
        assert_eq!(Rating::try_from(4i64).unwrap().to_string(), "4/5");
    }

    #[test]
    fn parses_create_review_response() {
        let entry: ReviewEntry = serde_json::from_str(
            r#"{"first_name": "Ada", "last_name": "Lovelace", "rating": 4,
                "comment": "Lovely paper", "created_at": "2024-03-01 09:30:00"}"#,
        )
        .unwrap();
        assert_eq!(entry.author(), "Ada Lovelace");
        assert_eq!(entry.rating.get(), 4);
        assert_eq!(entry.created_at_label(), "2024-03-01 09:30:00");
    }

    #[test]
    fn accepts_fractional_seconds_from_page_seed() {
        let entry: ReviewEntry = serde_json::from_str(
            r#"{"first_name": "A", "last_name": "B", "rating": 2,
                "comment": "ok", "created_at": "2024-03-01 09:30:00.123456"}"#,
        )
        .unwrap();
        assert_eq!(entry.created_at_label(), "2024-03-01 09:30:00");
    }

    #[test]
    fn out_of_range_rating_fails_to_parse() {
        let res: Result<ReviewEntry, _> = serde_json::from_str(
            r#"{"first_name": "A", "last_name": "B", "rating": 9,
                "comment": "ok", "created_at": "2024-03-01 09:30:00"}"#,
        );
        assert!(res.is_err());
    }
}
