//! Storage key layout
//!
//! ```text
//! app_users                     all user records
//! app_current_user              session copy of the signed-in user
//! app_transactions_<partition>  per-user transactions
//! app_budgets_<partition>       per-user budgets
//! app_goals_<partition>         per-user goals
//! app_theme_mode                light | dark | system
//! ```

use std::fmt;

pub const USERS_KEY: &str = "app_users";
pub const SESSION_KEY: &str = "app_current_user";
pub const THEME_KEY: &str = "app_theme_mode";

/// The three per-user collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Transactions,
    Budgets,
    Goals,
}

impl CollectionKind {
    fn prefix(&self) -> &'static str {
        match self {
            Self::Transactions => "app_transactions_",
            Self::Budgets => "app_budgets_",
            Self::Goals => "app_goals_",
        }
    }

    /// Storage key of this collection for one partition
    pub fn key(&self, partition: &PartitionKey) -> String {
        format!("{}{}", self.prefix(), partition.as_str())
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transactions => write!(f, "transactions"),
            Self::Budgets => write!(f, "budgets"),
            Self::Goals => write!(f, "goals"),
        }
    }
}

/// Storage-key suffix namespacing one user's collections
///
/// Derived from the email by dropping every character outside
/// `[A-Za-z0-9]`. Emails differing only in those characters share a partition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartitionKey(String);

impl PartitionKey {
    pub fn from_email(email: &str) -> Self {
        Self(email.chars().filter(char::is_ascii_alphanumeric).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_key_strips_symbols() {
        assert_eq!(PartitionKey::from_email("alice@x.com").as_str(), "alicexcom");
        assert_eq!(
            PartitionKey::from_email("Bob.Smith+tag@mail.co.uk").as_str(),
            "BobSmithtagmailcouk"
        );
    }

    #[test]
    fn test_partition_key_drops_non_ascii() {
        assert_eq!(PartitionKey::from_email("zoë@x.com").as_str(), "zoxcom");
    }

    #[test]
    fn test_colliding_emails_share_partition() {
        assert_eq!(
            PartitionKey::from_email("a.b@x.com"),
            PartitionKey::from_email("ab@x.com")
        );
    }

    #[test]
    fn test_collection_keys() {
        let pk = PartitionKey::from_email("alice@x.com");
        assert_eq!(CollectionKind::Transactions.key(&pk), "app_transactions_alicexcom");
        assert_eq!(CollectionKind::Budgets.key(&pk), "app_budgets_alicexcom");
        assert_eq!(CollectionKind::Goals.key(&pk), "app_goals_alicexcom");
    }
}
