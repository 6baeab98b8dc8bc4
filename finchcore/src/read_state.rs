use crate::types::account::AccountId;
use std::fmt;

/// Base tags for read-position bookkeeping, one per counted content kind.
pub mod read_position_tag {
    pub const HOME_TIMELINE: &str = "home_timeline";
    pub const ACTIVITIES_ABOUT_ME: &str = "activities_about_me";
}

/// Composite read-position key: a content-kind base tag scoped to a single
/// account. The position recorded under a tag is a monotonically comparable
/// i64 (a timestamp or id), 0 when never recorded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReadPositionTag {
    pub base: &'static str,
    pub account: AccountId,
}

impl ReadPositionTag {
    pub fn new(base: &'static str, account: AccountId) -> Self {
        Self { base, account }
    }

    pub fn home_timeline(account: AccountId) -> Self {
        Self::new(read_position_tag::HOME_TIMELINE, account)
    }

    pub fn activities_about_me(account: AccountId) -> Self {
        Self::new(read_position_tag::ACTIVITIES_ABOUT_ME, account)
    }
}

impl fmt::Display for ReadPositionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.base, self.account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_composes_base_and_account() {
        let tag = ReadPositionTag::home_timeline(AccountId::new("42", "birdsite.example"));
        assert_eq!(tag.to_string(), "home_timeline:42@birdsite.example");
    }

    #[test]
    fn tags_for_different_accounts_are_distinct() {
        let a = ReadPositionTag::activities_about_me(AccountId::new("1", "h.example"));
        let b = ReadPositionTag::activities_about_me(AccountId::new("2", "h.example"));
        assert_ne!(a, b);
    }
}
