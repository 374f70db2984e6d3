//! Savings goal model

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ids::GoalId;
use super::money::{deserialize_blank_as_zero, Money};
use super::require;
use crate::error::LedgerResult;

/// A savings target with progress so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,

    pub name: String,

    pub target: Money,

    #[serde(default, deserialize_with = "deserialize_blank_as_zero")]
    pub current: Money,

    /// Target date; older records may have saved an empty string
    #[serde(
        default,
        serialize_with = "serialize_optional_date",
        deserialize_with = "deserialize_optional_date"
    )]
    pub date: Option<NaiveDate>,
}

impl Goal {
    /// Validate raw input and build a goal with a fresh id
    ///
    /// Name and target are required; a blank current amount means zero.
    pub fn from_input(name: &str, target: &str, current: &str, date: &str) -> LedgerResult<Self> {
        require(&[name, target])?;

        let current = if current.trim().is_empty() {
            Money::zero()
        } else {
            super::parse_amount(current)?
        };

        let date = if date.trim().is_empty() {
            None
        } else {
            Some(super::parse_date(date)?)
        };

        Ok(Self {
            id: GoalId::new(),
            name: name.trim().to_string(),
            target: super::parse_amount(target)?,
            current,
            date,
        })
    }
}

fn serialize_optional_date<S: Serializer>(
    date: &Option<NaiveDate>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match date {
        Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
        None => serializer.serialize_str(""),
    }
}

fn deserialize_optional_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_defaults() {
        let goal = Goal::from_input("Vacation", "1000", "", "").unwrap();
        assert_eq!(goal.target.cents(), 100_000);
        assert!(goal.current.is_zero());
        assert!(goal.date.is_none());
    }

    #[test]
    fn test_requires_name_and_target() {
        assert!(Goal::from_input("", "1000", "0", "").is_err());
        assert!(Goal::from_input("Car", "", "0", "").is_err());
    }

    #[test]
    fn test_reads_blank_legacy_fields() {
        let json = r#"{"id":"1","name":"Car","target":"5000","current":"","date":""}"#;
        let goal: Goal = serde_json::from_str(json).unwrap();
        assert!(goal.current.is_zero());
        assert!(goal.date.is_none());
    }

    #[test]
    fn test_json_layout() {
        let goal = Goal::from_input("Car", "5000", "250.5", "2026-06-30").unwrap();
        let value = serde_json::to_value(&goal).unwrap();
        assert_eq!(value["target"], "5000");
        assert_eq!(value["current"], "250.50");
        assert_eq!(value["date"], "2026-06-30");

        let undated = Goal::from_input("Car", "5000", "", "").unwrap();
        assert_eq!(serde_json::to_value(&undated).unwrap()["date"], "");
    }
}
