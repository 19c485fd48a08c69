//! Template rules.
//!
//! A [`TemplateRule`] is an immutable data record: the subject code it
//! matches, an optional guard over the parameter view, a set of sentence
//! templates keyed by viewer perspective, and the token scope to resolve.
//! Rules are built once into static tables (see [`crate::tables`]) and
//! evaluated by the generic group engine — no per-rule dispatch code.

use std::collections::BTreeMap;

use circles_core::{DisplayRef, UserId};

use crate::l10n::Localizer;
use crate::params::ParamView;
use crate::placeholders;
use crate::subject::Subject;

/// Guard predicate over the parameter view. Pure and total: guards only use
/// defaulted accessors and can never fail.
pub type Guard = fn(&ParamView<'_>) -> bool;

/// Builder for positional template arguments (e.g. a localized level label).
///
/// Resolved scalars are interpolated by the localizer as ordinary `%N$s`
/// positional arguments, not as named tokens.
pub type ArgsFn = fn(&ParamView<'_>, &dyn Localizer) -> Vec<String>;

/// Whom a two-variant template addresses as "you".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfRef {
    /// The acting user (`initiator`).
    Actor,
    /// The target member — for self-directed subjects where the sentence is
    /// about the member, regardless of who triggered the event.
    Member,
}

/// Which placeholder tokens a rule resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenScope {
    /// `author` and `circle`.
    Circle,
    /// `author`, `circle`, `member`, `external`, `group`.
    Member,
}

/// Viewer perspective of a rendered sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    /// The viewer performed the action.
    Actor,
    /// The viewer is the target member.
    Target,
    /// Third-party observer.
    Observer,
}

/// Sentence templates keyed by viewer perspective.
#[derive(Debug, Clone, Copy)]
pub enum Templates {
    /// Two variants: self and third-party.
    Pair {
        /// Sentence when the viewer is the [`SelfRef`] party.
        own: &'static str,
        /// Sentence for everyone else.
        others: &'static str,
        /// Which party "you" refers to.
        self_ref: SelfRef,
    },
    /// Three variants: self-as-actor, self-as-target, third-party.
    Triple {
        /// Sentence when the viewer performed the action.
        own: &'static str,
        /// Sentence when the viewer is the target member.
        target: &'static str,
        /// Sentence for everyone else.
        others: &'static str,
    },
}

impl Templates {
    /// Resolve the viewer's perspective.
    ///
    /// Precedence for triples: actor, then target, then observer. An empty
    /// resolved identifier never matches any viewer, so an anonymous
    /// initiator always renders the third-party variant.
    #[must_use]
    pub fn perspective(&self, view: &ParamView<'_>, viewer: &UserId) -> Perspective {
        match self {
            Self::Pair { self_ref, .. } => {
                let own_id = match self_ref {
                    SelfRef::Actor => view.initiator_id(),
                    SelfRef::Member => view.member_id(),
                };
                if is_viewer(own_id, viewer) {
                    Perspective::Actor
                } else {
                    Perspective::Observer
                }
            }
            Self::Triple { .. } => {
                if is_viewer(view.initiator_id(), viewer) {
                    Perspective::Actor
                } else if is_viewer(view.member_id(), viewer) {
                    Perspective::Target
                } else {
                    Perspective::Observer
                }
            }
        }
    }

    /// Select the template string for the viewer.
    #[must_use]
    pub fn select(&self, view: &ParamView<'_>, viewer: &UserId) -> &'static str {
        let perspective = self.perspective(view, viewer);
        match *self {
            Self::Pair { own, others, .. } => match perspective {
                Perspective::Actor | Perspective::Target => own,
                Perspective::Observer => others,
            },
            Self::Triple {
                own,
                target,
                others,
            } => match perspective {
                Perspective::Actor => own,
                Perspective::Target => target,
                Perspective::Observer => others,
            },
        }
    }
}

fn is_viewer(id: Option<&str>, viewer: &UserId) -> bool {
    id.is_some_and(|id| !id.is_empty() && id == viewer.as_str())
}

/// One (subject, guard, templates) unit of the rule tables.
///
/// Created once at provider construction, never mutated, safe for concurrent
/// reads.
#[derive(Debug, Clone)]
pub struct TemplateRule {
    /// Subject code this rule matches.
    pub subject: Subject,
    /// Optional guard; `None` makes the rule the subject's fallback.
    pub guard: Option<Guard>,
    /// Token scope resolved for the sentence.
    pub scope: TokenScope,
    /// Sentence variants.
    pub templates: Templates,
    /// Optional positional-argument builder.
    pub args: Option<ArgsFn>,
}

/// A rendered sentence plus its token map, ready to assign onto the event's
/// output fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    /// Localized template with `{token}` placeholders left in place.
    pub subject: String,
    /// Token → display-ref substitution set.
    pub tokens: BTreeMap<String, DisplayRef>,
}

impl TemplateRule {
    /// Whether this rule applies: subject matches and the guard (if any)
    /// passes.
    #[must_use]
    pub fn matches(&self, subject: Subject, view: &ParamView<'_>) -> bool {
        self.subject == subject && self.guard.is_none_or(|guard| guard(view))
    }

    /// Render the sentence for the viewer.
    ///
    /// Only called after [`Self::matches`] returned `true`.
    #[must_use]
    pub fn apply(&self, view: &ParamView<'_>, viewer: &UserId, l10n: &dyn Localizer) -> Rendering {
        let tokens = match self.scope {
            TokenScope::Circle => placeholders::resolve_circle(view),
            TokenScope::Member => placeholders::resolve_member(view),
        };
        let args = self.args.map(|build| build(view, l10n)).unwrap_or_default();
        let template = self.templates.select(view, viewer);
        Rendering {
            subject: l10n.translate(template, &args),
            tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::l10n::EchoLocalizer;
    use serde_json::json;

    fn params(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        value.as_object().cloned().expect("object literal")
    }

    fn joined_params() -> serde_json::Map<String, serde_json::Value> {
        params(json!({
            "circle": { "id": "c1", "name": "Backend" },
            "initiator": { "id": "alice", "name": "Alice" },
            "member": { "id": "bob", "name": "Bob" }
        }))
    }

    const PAIR: Templates = Templates::Pair {
        own: "You did it in {circle}",
        others: "{author} did it in {circle}",
        self_ref: SelfRef::Actor,
    };

    const TRIPLE: Templates = Templates::Triple {
        own: "You acted on {member}",
        target: "{author} acted on you",
        others: "{author} acted on {member}",
    };

    #[test]
    fn pair_actor_perspective() {
        let params = joined_params();
        let view = ParamView::new(&params);
        assert_eq!(
            PAIR.perspective(&view, &UserId::from("alice")),
            Perspective::Actor
        );
        assert_eq!(PAIR.select(&view, &UserId::from("alice")), "You did it in {circle}");
    }

    #[test]
    fn pair_observer_perspective() {
        let params = joined_params();
        let view = ParamView::new(&params);
        assert_eq!(
            PAIR.perspective(&view, &UserId::from("carol")),
            Perspective::Observer
        );
    }

    #[test]
    fn pair_member_self_ref() {
        let templates = Templates::Pair {
            own: "own",
            others: "others",
            self_ref: SelfRef::Member,
        };
        let params = joined_params();
        let view = ParamView::new(&params);
        assert_eq!(templates.select(&view, &UserId::from("bob")), "own");
        assert_eq!(templates.select(&view, &UserId::from("alice")), "others");
    }

    #[test]
    fn triple_precedence_actor_then_target_then_observer() {
        let params = joined_params();
        let view = ParamView::new(&params);
        assert_eq!(TRIPLE.select(&view, &UserId::from("alice")), "You acted on {member}");
        assert_eq!(TRIPLE.select(&view, &UserId::from("bob")), "{author} acted on you");
        assert_eq!(TRIPLE.select(&view, &UserId::from("carol")), "{author} acted on {member}");
    }

    #[test]
    fn empty_initiator_never_matches_viewer() {
        let params = params(json!({
            "circle": { "id": "c1", "name": "Backend" },
            "initiator": { "id": "", "name": "" },
            "member": { "id": "bob", "name": "Bob" }
        }));
        let view = ParamView::new(&params);
        assert_eq!(PAIR.perspective(&view, &UserId::from("")), Perspective::Observer);
    }

    #[test]
    fn unguarded_rule_matches_its_subject_only() {
        let rule = TemplateRule {
            subject: Subject::MemberJoin,
            guard: None,
            scope: TokenScope::Member,
            templates: PAIR,
            args: None,
        };
        let params = joined_params();
        let view = ParamView::new(&params);
        assert!(rule.matches(Subject::MemberJoin, &view));
        assert!(!rule.matches(Subject::MemberLeft, &view));
    }

    #[test]
    fn guarded_rule_requires_guard_pass() {
        fn never(_: &ParamView<'_>) -> bool {
            false
        }
        let rule = TemplateRule {
            subject: Subject::MemberJoin,
            guard: Some(never),
            scope: TokenScope::Member,
            templates: PAIR,
            args: None,
        };
        let params = joined_params();
        assert!(!rule.matches(Subject::MemberJoin, &ParamView::new(&params)));
    }

    #[test]
    fn apply_renders_template_and_tokens() {
        let rule = TemplateRule {
            subject: Subject::MemberJoin,
            guard: None,
            scope: TokenScope::Member,
            templates: PAIR,
            args: None,
        };
        let params = joined_params();
        let view = ParamView::new(&params);
        let rendering = rule.apply(&view, &UserId::from("carol"), &EchoLocalizer);
        assert_eq!(rendering.subject, "{author} did it in {circle}");
        assert_eq!(rendering.tokens.len(), 5);
    }
}
