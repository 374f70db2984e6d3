//! Strongly-typed ID wrappers for all entity types
//!
//! Ids are the creation time in milliseconds since the Unix epoch, rendered
//! as a decimal string. Within one process the generator never hands out
//! the same value twice: if the clock has not advanced, the previous id plus
//! one is used instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Next strictly increasing timestamp-derived id value
fn next_timestamp_id() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = if now > last { now } else { last + 1 };
        match LAST_ID.compare_exchange_weak(last, candidate, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new id from the current time
            pub fn new() -> Self {
                Self(next_timestamp_id().to_string())
            }

            /// Wrap an existing id string
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

define_id!(TransactionId);
define_id!(BudgetId);
define_id!(GoalId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_millisecond_timestamp() {
        let before = Utc::now().timestamp_millis();
        let id = TransactionId::new();
        let value: i64 = id.as_str().parse().unwrap();
        assert!(value >= before);
    }

    #[test]
    fn test_ids_strictly_increase() {
        let ids: Vec<i64> = (0..1000)
            .map(|_| GoalId::new().as_str().parse().unwrap())
            .collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_id_serialization_is_plain_string() {
        let id = BudgetId::from_string("1736500000000");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1736500000000\"");

        let deserialized: BudgetId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_display() {
        let id = TransactionId::from("42");
        assert_eq!(id.to_string(), "42");
    }
}
