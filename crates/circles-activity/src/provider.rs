//! Activity provider — the pipeline entry point.
//!
//! One [`ActivityProvider::parse`] call handles exactly one event: gate on
//! app id and the mandatory `circle` key, route version-1 payloads to the
//! legacy renderer, otherwise consult the rule groups registered for the
//! event's kind tag in fixed order. The first matching rule renders and
//! terminates the pipeline; exhaustion is the normal `Unhandled` outcome,
//! not an error.

use circles_core::{ActivityError, ActivityEvent, EventKind, UserId};
use tracing::debug;

use crate::config::ProviderConfig;
use crate::group::RuleGroup;
use crate::l10n::Localizer;
use crate::legacy::LegacyRenderer;
use crate::params::ParamView;
use crate::rule::Rendering;
use crate::subject::Subject;
use crate::tables;

/// Tri-state render outcome. Rejection ("not mine") is the error case of
/// [`ActivityProvider::parse`], never a panic or control-flow exception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// A rule matched; the event's output fields are set.
    Rendered,
    /// Right domain, but no known sentence for this subject/condition
    /// combination. The event's subject text stays unset.
    Unhandled,
}

impl RenderOutcome {
    /// Whether a sentence was rendered.
    #[must_use]
    pub fn is_rendered(self) -> bool {
        self == Self::Rendered
    }
}

/// Renders activity events into localized notification sentences.
///
/// Rule tables are built once at construction and never mutated; a provider
/// can be shared across threads and used concurrently on distinct events.
pub struct ActivityProvider<L> {
    config: ProviderConfig,
    l10n: L,
    circle_lifecycle: RuleGroup,
    membership: RuleGroup,
    circle_membership: RuleGroup,
    moderation: RuleGroup,
    legacy: LegacyRenderer,
}

impl<L> std::fmt::Debug for ActivityProvider<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityProvider")
            .field("app_id", &self.config.app_id)
            .finish_non_exhaustive()
    }
}

impl<L: Localizer> ActivityProvider<L> {
    /// Create a provider with the built-in rule tables.
    #[must_use]
    pub fn new(config: ProviderConfig, l10n: L) -> Self {
        Self {
            config,
            l10n,
            circle_lifecycle: tables::circle_lifecycle(),
            membership: tables::membership(),
            circle_membership: tables::circle_membership(),
            moderation: tables::moderation(),
            legacy: LegacyRenderer::new(),
        }
    }

    /// Render the notification sentence for `event` from `viewer`'s point of
    /// view.
    ///
    /// # Errors
    ///
    /// [`ActivityError::UnrecognizedEvent`] when the event is not ours
    /// (wrong app id or no `circle` parameter) — the event is left
    /// untouched. [`ActivityError::InvalidParams`] when a version-1 payload
    /// cannot be decoded.
    pub fn parse(
        &self,
        viewer: &UserId,
        event: &mut ActivityEvent,
    ) -> Result<RenderOutcome, ActivityError> {
        if event.app != self.config.app_id {
            return Err(ActivityError::unrecognized(format!(
                "app '{}' is not '{}'",
                event.app, self.config.app_id
            )));
        }
        if !ParamView::new(&event.subject_params).has_circle() {
            return Err(ActivityError::unrecognized("missing 'circle' parameter"));
        }

        if ParamView::new(&event.subject_params).version() == 1 {
            debug!(subject = %event.subject, "version-1 payload, delegating to legacy renderer");
            return self.legacy.parse(&self.config, &self.l10n, viewer, event);
        }

        // From here the event is ours: the icon is set whether or not a
        // rule matches.
        event.icon = Some(self.config.icon_url.clone());

        let rendering = self.route(viewer, event);
        match rendering {
            Some(rendering) => {
                self.assign(event, rendering);
                Ok(RenderOutcome::Rendered)
            }
            None => {
                debug!(subject = %event.subject, kind = %event.kind, "no rule matched");
                Ok(RenderOutcome::Unhandled)
            }
        }
    }

    /// Consult the rule groups registered for the event's kind tag, in
    /// fixed order. First match wins globally.
    fn route(&self, viewer: &UserId, event: &ActivityEvent) -> Option<Rendering> {
        let kind = EventKind::from_tag(&event.kind)?;
        let subject = Subject::from_code(&event.subject)?;
        let view = ParamView::new(&event.subject_params);
        let render = |group: &RuleGroup| group.try_render(subject, &view, viewer, &self.l10n);

        match kind {
            EventKind::AsNonMember => render(&self.circle_lifecycle),
            EventKind::AsMember => render(&self.circle_lifecycle)
                .or_else(|| render(&self.membership))
                .or_else(|| render(&self.circle_membership)),
            EventKind::AsModerator => render(&self.moderation),
        }
    }

    fn assign(&self, event: &mut ActivityEvent, rendering: Rendering) {
        event.rendered_subject = Some(rendering.subject);
        event.rendered_parameters = rendering.tokens;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::l10n::EchoLocalizer;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn provider() -> ActivityProvider<EchoLocalizer> {
        ActivityProvider::new(ProviderConfig::default(), EchoLocalizer)
    }

    fn event(kind: &str, subject: &str, params: serde_json::Value) -> ActivityEvent {
        ActivityEvent::new(
            "circles",
            kind,
            subject,
            params.as_object().cloned().expect("object literal"),
        )
    }

    #[test]
    fn foreign_app_is_rejected_untouched() {
        let provider = provider();
        let mut event = event("circles_as_member", "member_join", json!({ "circle": {} }));
        event.app = "files".into();
        let err = provider.parse(&UserId::from("alice"), &mut event).unwrap_err();
        assert_matches!(err, ActivityError::UnrecognizedEvent { .. });
        assert!(event.icon.is_none());
        assert!(!event.is_rendered());
    }

    #[test]
    fn missing_circle_key_is_rejected_untouched() {
        let provider = provider();
        let mut event = event(
            "circles_as_member",
            "member_join",
            json!({ "ver": 2, "member": { "id": "bob" } }),
        );
        let err = provider.parse(&UserId::from("alice"), &mut event).unwrap_err();
        assert_matches!(err, ActivityError::UnrecognizedEvent { .. });
        assert!(event.icon.is_none());
    }

    #[test]
    fn unknown_subject_is_unhandled_with_icon() {
        let provider = provider();
        let mut event = event(
            "circles_as_member",
            "member_teleported",
            json!({ "ver": 2, "circle": { "id": "c1", "name": "Backend" } }),
        );
        let outcome = provider.parse(&UserId::from("alice"), &mut event).unwrap();
        assert_eq!(outcome, RenderOutcome::Unhandled);
        assert!(!event.is_rendered());
        assert_eq!(event.icon.as_deref(), Some("img/circles.svg"));
    }

    #[test]
    fn unknown_kind_tag_is_unhandled() {
        let provider = provider();
        let mut event = event(
            "circles_as_stranger",
            "member_join",
            json!({
                "ver": 2,
                "circle": { "id": "c1", "name": "Backend" },
                "member": { "id": "bob", "name": "Bob" }
            }),
        );
        let outcome = provider.parse(&UserId::from("bob"), &mut event).unwrap();
        assert_eq!(outcome, RenderOutcome::Unhandled);
    }

    #[test]
    fn moderator_kind_does_not_reach_membership_rules() {
        let provider = provider();
        let mut event = event(
            "circles_as_moderator",
            "member_join",
            json!({
                "ver": 2,
                "circle": { "id": "c1", "name": "Backend" },
                "member": { "id": "bob", "name": "Bob" }
            }),
        );
        let outcome = provider.parse(&UserId::from("bob"), &mut event).unwrap();
        assert_eq!(outcome, RenderOutcome::Unhandled);
    }

    #[test]
    fn member_join_renders_for_observer() {
        let provider = provider();
        let mut event = event(
            "circles_as_member",
            "member_join",
            json!({
                "ver": 2,
                "circle": { "id": "c1", "name": "Backend" },
                "initiator": { "id": "bob", "name": "Bob" },
                "member": { "id": "bob", "name": "Bob" }
            }),
        );
        let outcome = provider.parse(&UserId::from("carol"), &mut event).unwrap();
        assert!(outcome.is_rendered());
        assert_eq!(event.rendered_subject.as_deref(), Some("{member} joined {circle}"));
        assert_eq!(event.rendered_parameters.len(), 5);
    }
}
