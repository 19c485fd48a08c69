//! Member levels, kinds, and status markers.
//!
//! A member record combines an identity, a kind (local user vs. external or
//! group identity), a level (rank inside the circle), and a status. Events
//! carry all three as loose integers/strings; this module gives them names.

use serde::{Deserialize, Serialize};

/// Not (or not yet) a member — invited or requesting.
pub const LEVEL_NONE: i64 = 0;
/// Regular member.
pub const LEVEL_MEMBER: i64 = 1;
/// Moderator.
pub const LEVEL_MODERATOR: i64 = 4;
/// Admin.
pub const LEVEL_ADMIN: i64 = 8;
/// Owner of the circle.
pub const LEVEL_OWNER: i64 = 9;

/// Status of a membership that exists but is still pending: the user asked
/// to join and waits for moderation.
pub const STATUS_REQUEST: &str = "Requesting";
/// Status of a membership created by an invitation not yet accepted.
pub const STATUS_INVITED: &str = "Invited";

/// Display label for a member level, to be localized before interpolation.
///
/// Returns `None` for levels without a label (e.g. [`LEVEL_NONE`]).
#[must_use]
pub fn level_label(level: i64) -> Option<&'static str> {
    match level {
        LEVEL_MEMBER => Some("Member"),
        LEVEL_MODERATOR => Some("Moderator"),
        LEVEL_ADMIN => Some("Admin"),
        LEVEL_OWNER => Some("Owner"),
        _ => None,
    }
}

/// Kind of identity behind a membership.
///
/// Carried on the wire as an integer; anything unknown decodes to the
/// default local-user kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    /// Local user account.
    #[default]
    User,
    /// Local group.
    Group,
    /// Plain mail address.
    Mail,
    /// Address-book contact.
    Contact,
    /// A circle joining another circle as a member.
    Circle,
}

impl MemberKind {
    /// Decode the wire integer. Unknown values fall back to [`Self::User`].
    #[must_use]
    pub fn from_wire(value: i64) -> Self {
        match value {
            2 => Self::Group,
            4 => Self::Mail,
            8 => Self::Contact,
            16 => Self::Circle,
            _ => Self::User,
        }
    }

    /// The wire integer for this kind.
    #[must_use]
    pub fn as_wire(self) -> i64 {
        match self {
            Self::User => 1,
            Self::Group => 2,
            Self::Mail => 4,
            Self::Contact => 8,
            Self::Circle => 16,
        }
    }

    /// Whether this kind is a local user account.
    #[must_use]
    pub fn is_local_user(self) -> bool {
        self == Self::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_labels() {
        assert_eq!(level_label(LEVEL_MEMBER), Some("Member"));
        assert_eq!(level_label(LEVEL_MODERATOR), Some("Moderator"));
        assert_eq!(level_label(LEVEL_ADMIN), Some("Admin"));
        assert_eq!(level_label(LEVEL_OWNER), Some("Owner"));
        assert_eq!(level_label(LEVEL_NONE), None);
        assert_eq!(level_label(42), None);
    }

    #[test]
    fn kind_wire_round_trip() {
        for kind in [
            MemberKind::User,
            MemberKind::Group,
            MemberKind::Mail,
            MemberKind::Contact,
            MemberKind::Circle,
        ] {
            assert_eq!(MemberKind::from_wire(kind.as_wire()), kind);
        }
    }

    #[test]
    fn unknown_wire_kind_defaults_to_user() {
        assert_eq!(MemberKind::from_wire(0), MemberKind::User);
        assert_eq!(MemberKind::from_wire(99), MemberKind::User);
    }
}
