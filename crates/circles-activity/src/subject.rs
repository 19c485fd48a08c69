//! Subject codes.
//!
//! The fine-grained identifier of what happened, as a closed enumeration.
//! Unknown codes are not an error: they parse to `None` and the event falls
//! through the pipeline unhandled.

/// Subject code of an activity event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    /// A circle was created.
    CircleCreate,
    /// A circle was deleted.
    CircleDelete,
    /// A user joined a circle on their own.
    MemberJoin,
    /// A user was added to a circle by a moderator.
    MemberAdded,
    /// A user left a circle on their own.
    MemberLeft,
    /// A user was removed from a circle by a moderator.
    MemberRemove,
    /// A user was invited to a circle.
    MemberInvited,
    /// A member's level was changed.
    MemberLevel,
    /// A user requested to join a circle.
    MemberRequestInvitation,
    /// Circle ownership was transferred.
    MemberOwner,
    /// A circle was made to join another circle.
    CircleMemberJoined,
    /// A circle was added as member to another circle.
    CircleMemberAdded,
    /// A circle was made to leave another circle.
    CircleMemberLeft,
    /// A circle was removed from another circle.
    CircleMemberRemoved,
}

impl Subject {
    /// Parse a wire subject code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "circle_create" => Some(Self::CircleCreate),
            "circle_delete" => Some(Self::CircleDelete),
            "member_join" => Some(Self::MemberJoin),
            "member_added" => Some(Self::MemberAdded),
            "member_left" => Some(Self::MemberLeft),
            "member_remove" => Some(Self::MemberRemove),
            "member_invited" => Some(Self::MemberInvited),
            "member_level" => Some(Self::MemberLevel),
            "member_request_invitation" => Some(Self::MemberRequestInvitation),
            "member_owner" => Some(Self::MemberOwner),
            "member_circle_joined" => Some(Self::CircleMemberJoined),
            "member_circle_added" => Some(Self::CircleMemberAdded),
            "member_circle_left" => Some(Self::CircleMemberLeft),
            "member_circle_removed" => Some(Self::CircleMemberRemoved),
            _ => None,
        }
    }

    /// The wire code for this subject.
    #[must_use]
    pub fn as_code(self) -> &'static str {
        match self {
            Self::CircleCreate => "circle_create",
            Self::CircleDelete => "circle_delete",
            Self::MemberJoin => "member_join",
            Self::MemberAdded => "member_added",
            Self::MemberLeft => "member_left",
            Self::MemberRemove => "member_remove",
            Self::MemberInvited => "member_invited",
            Self::MemberLevel => "member_level",
            Self::MemberRequestInvitation => "member_request_invitation",
            Self::MemberOwner => "member_owner",
            Self::CircleMemberJoined => "member_circle_joined",
            Self::CircleMemberAdded => "member_circle_added",
            Self::CircleMemberLeft => "member_circle_left",
            Self::CircleMemberRemoved => "member_circle_removed",
        }
    }

    /// All subject variants.
    #[must_use]
    pub fn all() -> &'static [Subject] {
        &[
            Self::CircleCreate,
            Self::CircleDelete,
            Self::MemberJoin,
            Self::MemberAdded,
            Self::MemberLeft,
            Self::MemberRemove,
            Self::MemberInvited,
            Self::MemberLevel,
            Self::MemberRequestInvitation,
            Self::MemberOwner,
            Self::CircleMemberJoined,
            Self::CircleMemberAdded,
            Self::CircleMemberLeft,
            Self::CircleMemberRemoved,
        ]
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}
