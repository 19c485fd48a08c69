//! Legacy renderer for version-1 payloads.
//!
//! Events persisted under the old parameter schema keep rendering exactly as
//! they always did: this module is the only path for them, and its rule set
//! is frozen — interface preservation only, no redesign.
//!
//! ## The v1 wire format
//!
//! - `circle` — the circle model, either inline or as a JSON-encoded string
//!   (older emitters serialized the model before storing it): object with
//!   `id` and `name`.
//! - `author` — pre-resolved identifier of the acting user.
//! - `author_name` — optional display name of the acting user.
//! - `member` — optional member model, inline or JSON-encoded: object with
//!   `id` and `name`.
//! - `level` — optional integer for level changes.
//!
//! v1 sentences only distinguish own vs. others; the richer three-way
//! perspective split arrived with version 2.

use std::collections::BTreeMap;

use circles_core::{ActivityError, ActivityEvent, DisplayRef, RefKind, UserId, member};
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::ProviderConfig;
use crate::l10n::Localizer;
use crate::provider::RenderOutcome;

/// Renders version-1 payloads. Stateless; the v1 vocabulary lives in
/// [`Self::sentence`].
#[derive(Debug, Clone, Default)]
pub struct LegacyRenderer;

impl LegacyRenderer {
    /// Create a legacy renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Render a version-1 event. Same output contract as the current
    /// pipeline: icon always, subject and parameters on match.
    ///
    /// # Errors
    ///
    /// [`ActivityError::InvalidParams`] when the v1 `circle` or `member`
    /// payload cannot be decoded.
    pub fn parse(
        &self,
        config: &ProviderConfig,
        l10n: &dyn Localizer,
        viewer: &UserId,
        event: &mut ActivityEvent,
    ) -> Result<RenderOutcome, ActivityError> {
        let circle = decode_model(&event.subject_params, "circle")?
            .ok_or_else(|| ActivityError::invalid_params("missing 'circle' payload"))?;
        let member = decode_model(&event.subject_params, "member")?;

        event.icon = Some(config.icon_url.clone());

        let author_id = str_param(&event.subject_params, "author");
        let author_name = match str_param(&event.subject_params, "author_name") {
            "" => author_id,
            name => name,
        };
        let level = event
            .subject_params
            .get("level")
            .and_then(Value::as_i64)
            .unwrap_or(0);

        let viewer_is_author = !author_id.is_empty() && viewer.as_str() == author_id;
        let viewer_is_member = member
            .as_ref()
            .is_some_and(|m| !m.id.is_empty() && viewer.as_str() == m.id);

        let Some((template, args)) =
            Self::sentence(&event.subject, viewer_is_author, viewer_is_member, level, l10n)
        else {
            debug!(subject = %event.subject, "unknown v1 subject");
            return Ok(RenderOutcome::Unhandled);
        };

        let mut tokens = BTreeMap::new();
        let _ = tokens.insert(
            "author".to_owned(),
            DisplayRef::new(RefKind::User, author_id, author_name),
        );
        let _ = tokens.insert(
            "circle".to_owned(),
            DisplayRef::new(RefKind::Circle, circle.id, circle.name),
        );
        if let Some(member) = member {
            let _ = tokens.insert(
                "member".to_owned(),
                DisplayRef::new(RefKind::User, member.id, member.name),
            );
        }

        event.rendered_subject = Some(l10n.translate(template, &args));
        event.rendered_parameters = tokens;
        Ok(RenderOutcome::Rendered)
    }

    /// The frozen v1 sentence table.
    fn sentence(
        subject: &str,
        viewer_is_author: bool,
        viewer_is_member: bool,
        level: i64,
        l10n: &dyn Localizer,
    ) -> Option<(&'static str, Vec<String>)> {
        let own = viewer_is_author;
        let pick = |own_text: &'static str, others_text: &'static str| {
            if own { own_text } else { others_text }
        };
        let entry = match subject {
            "circle_create" => (
                pick(
                    "You created the circle {circle}",
                    "{author} created the circle {circle}",
                ),
                Vec::new(),
            ),
            "circle_delete" => (
                pick("You deleted {circle}", "{author} deleted {circle}"),
                Vec::new(),
            ),
            "member_join" => (
                pick("You joined {circle}", "{member} joined {circle}"),
                Vec::new(),
            ),
            "member_added" => (
                pick(
                    "You added {member} to {circle}",
                    "{author} added {member} to {circle}",
                ),
                Vec::new(),
            ),
            "member_left" => (
                pick("You left {circle}", "{member} left {circle}"),
                Vec::new(),
            ),
            "member_remove" => (
                pick(
                    "You removed {member} from {circle}",
                    "{author} removed {member} from {circle}",
                ),
                Vec::new(),
            ),
            "member_invited" => (
                pick(
                    "You invited {member} to {circle}",
                    "{author} invited {member} to {circle}",
                ),
                Vec::new(),
            ),
            "member_level" => {
                let label = l10n.translate(member::level_label(level).unwrap_or(""), &[]);
                (
                    pick(
                        "You changed the level of {member} in {circle} to %1$s",
                        "{author} changed the level of {member} in {circle} to %1$s",
                    ),
                    vec![label],
                )
            }
            "member_owner" => (
                if viewer_is_member {
                    "You are the new owner of {circle}"
                } else {
                    "{member} is the new owner of {circle}"
                },
                Vec::new(),
            ),
            _ => return None,
        };
        Some(entry)
    }
}

struct Model {
    id: String,
    name: String,
}

/// Decode a v1 model value: inline object or JSON-encoded string.
fn decode_model(params: &Map<String, Value>, key: &str) -> Result<Option<Model>, ActivityError> {
    let Some(value) = params.get(key) else {
        return Ok(None);
    };

    let decoded: Value = match value {
        Value::String(raw) => serde_json::from_str(raw).map_err(|e| {
            ActivityError::invalid_params(format!("'{key}' payload is not JSON: {e}"))
        })?,
        other => other.clone(),
    };

    let Value::Object(fields) = decoded else {
        return Err(ActivityError::invalid_params(format!(
            "'{key}' payload is not an object"
        )));
    };

    let field = |name: &str| {
        fields
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_owned()
    };
    Ok(Some(Model {
        id: field("id"),
        name: field("name"),
    }))
}

fn str_param<'a>(params: &'a Map<String, Value>, key: &str) -> &'a str {
    params.get(key).and_then(Value::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn v1_event(subject: &str, params: serde_json::Value) -> ActivityEvent {
        ActivityEvent::new(
            "circles",
            "circles_as_member",
            subject,
            params.as_object().cloned().expect("object literal"),
        )
    }

    fn render(
        event: &mut ActivityEvent,
        viewer: &str,
    ) -> Result<RenderOutcome, ActivityError> {
        LegacyRenderer::new().parse(
            &ProviderConfig::default(),
            &crate::l10n::EchoLocalizer,
            &UserId::from(viewer),
            event,
        )
    }

    #[test]
    fn inline_circle_object_renders() {
        let mut event = v1_event(
            "circle_create",
            json!({ "circle": { "id": "c1", "name": "Backend" }, "author": "alice" }),
        );
        let outcome = render(&mut event, "alice").unwrap();
        assert_eq!(outcome, RenderOutcome::Rendered);
        assert_eq!(
            event.rendered_subject.as_deref(),
            Some("You created the circle {circle}")
        );
        assert_eq!(event.rendered_parameters["circle"].name, "Backend");
    }

    #[test]
    fn json_encoded_circle_string_renders() {
        let mut event = v1_event(
            "circle_delete",
            json!({ "circle": "{\"id\":\"c1\",\"name\":\"Backend\"}", "author": "alice" }),
        );
        let outcome = render(&mut event, "carol").unwrap();
        assert_eq!(outcome, RenderOutcome::Rendered);
        assert_eq!(event.rendered_subject.as_deref(), Some("{author} deleted {circle}"));
    }

    #[test]
    fn undecodable_circle_payload_errors() {
        let mut event = v1_event(
            "circle_create",
            json!({ "circle": "not json", "author": "alice" }),
        );
        let err = render(&mut event, "alice").unwrap_err();
        assert_matches!(err, ActivityError::InvalidParams { .. });
    }

    #[test]
    fn non_object_circle_payload_errors() {
        let mut event = v1_event("circle_create", json!({ "circle": "[1,2]" }));
        let err = render(&mut event, "alice").unwrap_err();
        assert_matches!(err, ActivityError::InvalidParams { .. });
    }

    #[test]
    fn unknown_v1_subject_is_unhandled_with_icon() {
        let mut event = v1_event(
            "member_teleported",
            json!({ "circle": { "id": "c1", "name": "Backend" } }),
        );
        let outcome = render(&mut event, "alice").unwrap();
        assert_eq!(outcome, RenderOutcome::Unhandled);
        assert!(!event.is_rendered());
        assert!(event.icon.is_some());
    }

    #[test]
    fn member_level_interpolates_label() {
        let mut event = v1_event(
            "member_level",
            json!({
                "circle": { "id": "c1", "name": "Backend" },
                "member": { "id": "bob", "name": "Bob" },
                "author": "alice",
                "level": 4
            }),
        );
        let _ = render(&mut event, "carol").unwrap();
        assert_eq!(
            event.rendered_subject.as_deref(),
            Some("{author} changed the level of {member} in {circle} to Moderator")
        );
    }

    #[test]
    fn member_owner_is_member_directed() {
        let mut event = v1_event(
            "member_owner",
            json!({
                "circle": { "id": "c1", "name": "Backend" },
                "member": { "id": "bob", "name": "Bob" },
                "author": "alice"
            }),
        );
        let _ = render(&mut event, "bob").unwrap();
        assert_eq!(
            event.rendered_subject.as_deref(),
            Some("You are the new owner of {circle}")
        );
    }

    #[test]
    fn author_display_name_defaults_to_id() {
        let mut event = v1_event(
            "circle_create",
            json!({ "circle": { "id": "c1", "name": "Backend" }, "author": "alice" }),
        );
        let _ = render(&mut event, "carol").unwrap();
        assert_eq!(event.rendered_parameters["author"].name, "alice");
    }
}
