//! Activity event record and display references.
//!
//! An [`ActivityEvent`] is produced by the upstream event-authoring subsystem
//! and owned by the caller. The rendering pipeline only writes the output
//! fields: `rendered_subject`, `rendered_parameters`, and `icon`. The raw
//! parameter mapping stays untyped (`serde_json`) — the activity crate wraps
//! it in a typed read-only view at render time.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─────────────────────────────────────────────────────────────────────────────
// EventKind — coarse routing tag
// ─────────────────────────────────────────────────────────────────────────────

/// Coarse event-kind tag used for top-level routing.
///
/// Distinct from the fine-grained subject code: the kind selects which rule
/// groups are consulted, the subject selects the rule within them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Circle lifecycle announced to users outside the circle.
    #[serde(rename = "circles_as_non_member")]
    AsNonMember,
    /// Membership and circle lifecycle visible to circle members.
    #[serde(rename = "circles_as_member")]
    AsMember,
    /// Moderation actions visible to moderators and the affected member.
    #[serde(rename = "circles_as_moderator")]
    AsModerator,
}

impl EventKind {
    /// Parse a wire tag. Unknown tags are not an error — they simply match
    /// no rule group downstream.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "circles_as_non_member" => Some(Self::AsNonMember),
            "circles_as_member" => Some(Self::AsMember),
            "circles_as_moderator" => Some(Self::AsModerator),
            _ => None,
        }
    }

    /// The wire tag for this kind.
    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::AsNonMember => "circles_as_non_member",
            Self::AsMember => "circles_as_member",
            Self::AsModerator => "circles_as_moderator",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DisplayRef — placeholder substitution target
// ─────────────────────────────────────────────────────────────────────────────

/// Rendering hint for a [`DisplayRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefKind {
    /// Plain local user.
    #[serde(rename = "user")]
    User,
    /// A circle.
    #[serde(rename = "circle")]
    Circle,
    /// Non-local identity (mail address, contact, federated user).
    #[serde(rename = "external")]
    External,
    /// Group-typed member.
    #[serde(rename = "user-group")]
    Group,
}

/// A named-token substitution target: resolved identifier plus rendering
/// hint and the display name embedded in the event parameters.
///
/// Never stored persistently — built fresh per render and handed to the host
/// for final token substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRef {
    /// Rendering hint.
    #[serde(rename = "type")]
    pub kind: RefKind,
    /// Resolved identifier (may be empty for an anonymous actor).
    pub id: String,
    /// Display name as carried by the event parameters.
    pub name: String,
}

impl DisplayRef {
    /// Build a display ref.
    #[must_use]
    pub fn new(kind: RefKind, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            name: name.into(),
        }
    }

    /// An empty/anonymous ref of the given kind.
    #[must_use]
    pub fn empty(kind: RefKind) -> Self {
        Self::new(kind, "", "")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ActivityEvent
// ─────────────────────────────────────────────────────────────────────────────

/// One activity event, as emitted by the event-authoring subsystem.
///
/// Owned by the caller and mutated in place: the pipeline writes
/// `rendered_subject`, `rendered_parameters`, and `icon`, nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    /// Application identifier of the emitting app.
    pub app: String,
    /// Coarse event-kind tag (see [`EventKind`]).
    pub kind: String,
    /// Fine-grained subject code, e.g. `member_join`.
    pub subject: String,
    /// Raw parameter mapping.
    #[serde(default)]
    pub subject_params: Map<String, Value>,
    /// Event creation time.
    pub timestamp: DateTime<Utc>,
    /// Selected sentence template, `{token}` placeholders unresolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered_subject: Option<String>,
    /// Token → display-ref map for host-side substitution.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rendered_parameters: BTreeMap<String, DisplayRef>,
    /// Icon resource for the event's visual representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ActivityEvent {
    /// Create an event with empty output fields, stamped now.
    #[must_use]
    pub fn new(
        app: impl Into<String>,
        kind: impl Into<String>,
        subject: impl Into<String>,
        subject_params: Map<String, Value>,
    ) -> Self {
        Self {
            app: app.into(),
            kind: kind.into(),
            subject: subject.into(),
            subject_params,
            timestamp: Utc::now(),
            rendered_subject: None,
            rendered_parameters: BTreeMap::new(),
            icon: None,
        }
    }

    /// Whether a subject sentence has been rendered onto this event.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.rendered_subject.is_some()
    }
}
