//! Placeholder resolution.
//!
//! Builds the named-token substitution set for a rendered sentence. The
//! resolver never looks display names up — it forwards the identifier and
//! display data already embedded in the event parameters as
//! [`DisplayRef`] tuples; turning those into literal text is the host's
//! substitution step.

use std::collections::BTreeMap;

use circles_core::{DisplayRef, RefKind};

use crate::params::ParamView;

/// Token name for the acting user.
pub const TOKEN_AUTHOR: &str = "author";
/// Token name for the circle.
pub const TOKEN_CIRCLE: &str = "circle";
/// Token name for the target member.
pub const TOKEN_MEMBER: &str = "member";
/// Token name for the target member rendered as an external identity.
pub const TOKEN_EXTERNAL: &str = "external";
/// Token name for the target member rendered as a group.
pub const TOKEN_GROUP: &str = "group";

/// Tokens for circle-lifecycle sentences: `author` and `circle` only.
#[must_use]
pub fn resolve_circle(view: &ParamView<'_>) -> BTreeMap<String, DisplayRef> {
    let mut tokens = BTreeMap::new();
    let _ = tokens.insert(TOKEN_AUTHOR.to_owned(), author_ref(view));
    let _ = tokens.insert(TOKEN_CIRCLE.to_owned(), circle_ref(view));
    tokens
}

/// Tokens for membership sentences: the circle set plus `member`,
/// `external`, and `group` views of the target member.
///
/// All three member tokens resolve from the same source tuple; which one a
/// template names decides how the host renders the identity. Absent member
/// data yields empty refs, never an error.
#[must_use]
pub fn resolve_member(view: &ParamView<'_>) -> BTreeMap<String, DisplayRef> {
    let mut tokens = resolve_circle(view);
    let id = view.member_id().unwrap_or("");
    let name = view.member_name();
    let _ = tokens.insert(
        TOKEN_MEMBER.to_owned(),
        DisplayRef::new(RefKind::User, id, name),
    );
    let _ = tokens.insert(
        TOKEN_EXTERNAL.to_owned(),
        DisplayRef::new(RefKind::External, id, name),
    );
    let _ = tokens.insert(
        TOKEN_GROUP.to_owned(),
        DisplayRef::new(RefKind::Group, id, name),
    );
    tokens
}

fn author_ref(view: &ParamView<'_>) -> DisplayRef {
    match view.initiator_id() {
        Some(id) => DisplayRef::new(RefKind::User, id, view.initiator_name()),
        None => DisplayRef::empty(RefKind::User),
    }
}

fn circle_ref(view: &ParamView<'_>) -> DisplayRef {
    DisplayRef::new(RefKind::Circle, view.circle_id(), view.circle_name())
}
