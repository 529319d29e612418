//! Prefixed Entity IDs
//!
//! Every persisted record is keyed by an opaque string of the form
//! `PREFIX-<uuid>`, e.g. `CHR-6fa1c4b2…` for characters. The prefix
//! makes IDs self-describing in logs and API payloads.

use uuid::Uuid;

/// Entity ID prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPrefix {
    User,
    Character,
    AbilityScore,
    Spell,
    Session,
}

impl IdPrefix {
    /// The literal prefix stored in front of the dash.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USR",
            Self::Character => "CHR",
            Self::AbilityScore => "ABL",
            Self::Spell => "SPL",
            Self::Session => "SES",
        }
    }
}

impl std::fmt::Display for IdPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Generate a new entity ID with the given prefix.
pub fn new_id(prefix: IdPrefix) -> String {
    format!("{}-{}", prefix.as_str(), Uuid::new_v4().simple())
}

/// Check that an ID carries the expected prefix and a non-empty body.
pub fn has_prefix(id: &str, prefix: IdPrefix) -> bool {
    match id.split_once('-') {
        Some((head, rest)) => head == prefix.as_str() && !rest.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_carries_prefix() {
        let id = new_id(IdPrefix::Character);
        assert!(id.starts_with("CHR-"));
        assert!(has_prefix(&id, IdPrefix::Character));
    }

    #[test]
    fn test_new_id_is_unique() {
        let a = new_id(IdPrefix::User);
        let b = new_id(IdPrefix::User);
        assert_ne!(a, b);
    }

    #[test]
    fn test_has_prefix_rejects_wrong_prefix() {
        let id = new_id(IdPrefix::Spell);
        assert!(!has_prefix(&id, IdPrefix::Character));
    }

    #[test]
    fn test_has_prefix_rejects_malformed() {
        assert!(!has_prefix("CHR", IdPrefix::Character));
        assert!(!has_prefix("CHR-", IdPrefix::Character));
        assert!(!has_prefix("", IdPrefix::Character));
    }

    #[test]
    fn test_prefix_values() {
        assert_eq!(IdPrefix::User.as_str(), "USR");
        assert_eq!(IdPrefix::Character.as_str(), "CHR");
        assert_eq!(IdPrefix::AbilityScore.as_str(), "ABL");
        assert_eq!(IdPrefix::Spell.as_str(), "SPL");
        assert_eq!(IdPrefix::Session.as_str(), "SES");
    }

    #[test]
    fn test_prefix_display() {
        assert_eq!(format!("{}", IdPrefix::Character), "CHR");
    }
}
