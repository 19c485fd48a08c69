//! Rule groups.
//!
//! An ordered, immutable list of [`TemplateRule`]s scoped to one event
//! category. Declaration order is part of the contract: it encodes
//! precedence, so a specific guard ("join caused by accepting an invite")
//! must be declared before the generic fallback for the same subject code.

use circles_core::UserId;
use tracing::debug;

use crate::l10n::Localizer;
use crate::params::ParamView;
use crate::rule::{Rendering, TemplateRule};
use crate::subject::Subject;

/// Ordered list of template rules for one event category.
#[derive(Debug, Clone)]
pub struct RuleGroup {
    name: &'static str,
    requires_member: bool,
    rules: Vec<TemplateRule>,
}

impl RuleGroup {
    /// Build a group. `requires_member` groups skip evaluation entirely when
    /// the event has no `member` parameter.
    #[must_use]
    pub fn new(name: &'static str, requires_member: bool, rules: Vec<TemplateRule>) -> Self {
        Self {
            name,
            requires_member,
            rules,
        }
    }

    /// Group name (for logs and audits).
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The rules, in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[TemplateRule] {
        &self.rules
    }

    /// Subject codes this group covers.
    #[must_use]
    pub fn subjects(&self) -> Vec<Subject> {
        let mut subjects: Vec<Subject> = self.rules.iter().map(|r| r.subject).collect();
        subjects.dedup();
        subjects
    }

    /// Evaluate rules in declaration order; the first rule whose subject and
    /// guard both match renders. `None` means no rule in this group handled
    /// the event.
    #[must_use]
    pub fn try_render(
        &self,
        subject: Subject,
        view: &ParamView<'_>,
        viewer: &UserId,
        l10n: &dyn Localizer,
    ) -> Option<Rendering> {
        if self.requires_member && !view.has_member() {
            return None;
        }

        for (index, rule) in self.rules.iter().enumerate() {
            if rule.matches(subject, view) {
                debug!(group = self.name, %subject, rule = index, "rule matched");
                return Some(rule.apply(view, viewer, l10n));
            }
        }
        None
    }
}
