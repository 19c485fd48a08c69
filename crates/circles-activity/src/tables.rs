//! Built-in rule tables.
//!
//! Four groups, one per event category. Within a group, rules for the same
//! subject go from most specific guard to unguarded fallback; the group
//! engine stops at the first match.
//!
//! ## Groups
//! - `circle-lifecycle` — circle created / deleted
//! - `membership` — members joining, being added, leaving, being removed
//! - `circle-membership` — circles joining other circles as members
//! - `moderation` — invitations, level changes, join requests, ownership

use circles_core::{circle, member};

use crate::group::RuleGroup;
use crate::l10n::Localizer;
use crate::params::ParamView;
use crate::rule::{SelfRef, TemplateRule, Templates, TokenScope};
use crate::subject::Subject;

fn pair(own: &'static str, others: &'static str) -> Templates {
    Templates::Pair {
        own,
        others,
        self_ref: SelfRef::Actor,
    }
}

fn member_pair(own: &'static str, others: &'static str) -> Templates {
    Templates::Pair {
        own,
        others,
        self_ref: SelfRef::Member,
    }
}

fn triple(own: &'static str, target: &'static str, others: &'static str) -> Templates {
    Templates::Triple { own, target, others }
}

fn circle_rule(subject: Subject, templates: Templates) -> TemplateRule {
    TemplateRule {
        subject,
        guard: None,
        scope: TokenScope::Circle,
        templates,
        args: None,
    }
}

fn member_rule(
    subject: Subject,
    guard: Option<crate::rule::Guard>,
    templates: Templates,
) -> TemplateRule {
    TemplateRule {
        subject,
        guard,
        scope: TokenScope::Member,
        templates,
        args: None,
    }
}

// Guards. All total: only defaulted accessors.

fn invite_circle(view: &ParamView<'_>) -> bool {
    view.circle_has_config(circle::CFG_INVITE)
}

fn request_circle(view: &ParamView<'_>) -> bool {
    view.circle_has_config(circle::CFG_REQUEST)
}

fn external_member(view: &ParamView<'_>) -> bool {
    !view.member_kind().is_local_user()
}

fn not_yet_member(view: &ParamView<'_>) -> bool {
    view.member_level() <= member::LEVEL_NONE
}

fn declined_invite(view: &ParamView<'_>) -> bool {
    invite_circle(view) && not_yet_member(view)
}

fn cancelled_request(view: &ParamView<'_>) -> bool {
    request_circle(view) && not_yet_member(view)
}

fn dismissed_request(view: &ParamView<'_>) -> bool {
    declined_invite(view) && view.member_status() == member::STATUS_REQUEST
}

/// Localized level label for `member_level` sentences, interpolated as an
/// ordinary positional argument.
fn level_args(view: &ParamView<'_>, l10n: &dyn Localizer) -> Vec<String> {
    let label = member::level_label(view.level()).unwrap_or("");
    vec![l10n.translate(label, &[])]
}

/// Circle lifecycle: creation and deletion.
pub fn circle_lifecycle() -> RuleGroup {
    RuleGroup::new(
        "circle-lifecycle",
        false,
        vec![
            circle_rule(
                Subject::CircleCreate,
                pair(
                    "You created the circle {circle}",
                    "{author} created the circle {circle}",
                ),
            ),
            circle_rule(
                Subject::CircleDelete,
                pair("You deleted {circle}", "{author} deleted {circle}"),
            ),
        ],
    )
}

/// Membership lifecycle: join, add, leave, remove.
pub fn membership() -> RuleGroup {
    RuleGroup::new(
        "membership",
        true,
        vec![
            // join: invitation acceptance wins over the generic join
            member_rule(
                Subject::MemberJoin,
                Some(invite_circle),
                pair(
                    "You accepted the invitation to join {circle}",
                    "{member} accepted the invitation to join {circle}",
                ),
            ),
            member_rule(
                Subject::MemberJoin,
                None,
                pair("You joined {circle}", "{member} joined {circle}"),
            ),
            // added: external identity, then confirmed join request, then generic
            member_rule(
                Subject::MemberAdded,
                Some(external_member),
                pair(
                    "You added {external} to {circle}",
                    "{external} has been added to {circle} by {author}",
                ),
            ),
            member_rule(
                Subject::MemberAdded,
                Some(request_circle),
                triple(
                    "You accepted {member}'s request to join {circle}",
                    "Your request to join {circle} has been accepted by {author}",
                    "{member}'s request to join {circle} has been accepted by {author}",
                ),
            ),
            member_rule(
                Subject::MemberAdded,
                None,
                triple(
                    "You added {member} as member to {circle}",
                    "You have been added as member to {circle} by {author}",
                    "{member} has been added as member to {circle} by {author}",
                ),
            ),
            // left: declined invitation / cancelled request, then generic
            member_rule(
                Subject::MemberLeft,
                Some(declined_invite),
                pair(
                    "You declined the invitation to join {circle}",
                    "{member} declined an invitation to join {circle}",
                ),
            ),
            member_rule(
                Subject::MemberLeft,
                Some(cancelled_request),
                pair(
                    "You cancelled your request to join {circle}",
                    "{member} cancelled a request to join {circle}",
                ),
            ),
            member_rule(
                Subject::MemberLeft,
                None,
                pair("You left {circle}", "{member} left {circle}"),
            ),
            // remove: external identity, dismissed request, cancelled
            // invitation, then generic
            member_rule(
                Subject::MemberRemove,
                Some(external_member),
                pair(
                    "You removed {external} from {circle}",
                    "{external} has been removed from {circle} by {author}",
                ),
            ),
            member_rule(
                Subject::MemberRemove,
                Some(dismissed_request),
                triple(
                    "You dismissed {member}'s request to join {circle}",
                    "Your request to join {circle} has been dismissed by {author}",
                    "{member}'s request to join {circle} has been dismissed by {author}",
                ),
            ),
            member_rule(
                Subject::MemberRemove,
                Some(declined_invite),
                triple(
                    "You cancelled {member}'s invitation to join {circle}",
                    "Your invitation to join {circle} has been cancelled by {author}",
                    "{author} cancelled {member}'s invitation to join {circle}",
                ),
            ),
            member_rule(
                Subject::MemberRemove,
                None,
                triple(
                    "You removed {member} from {circle}",
                    "You have been removed from {circle} by {author}",
                    "{member} has been removed from {circle} by {author}",
                ),
            ),
        ],
    )
}

/// Circle-membership lifecycle: a circle joining another circle. `{member}`
/// names the nested circle.
pub fn circle_membership() -> RuleGroup {
    RuleGroup::new(
        "circle-membership",
        true,
        vec![
            member_rule(
                Subject::CircleMemberJoined,
                None,
                pair(
                    "You made {member} join {circle}",
                    "{author} made {member} join {circle}",
                ),
            ),
            member_rule(
                Subject::CircleMemberAdded,
                None,
                pair(
                    "You added team {member} as member to {circle}",
                    "{author} added team {member} as member to {circle}",
                ),
            ),
            member_rule(
                Subject::CircleMemberLeft,
                None,
                pair(
                    "You made {member} leave {circle}",
                    "{author} made {member} leave {circle}",
                ),
            ),
            member_rule(
                Subject::CircleMemberRemoved,
                None,
                pair(
                    "You removed {member} from {circle}",
                    "{author} removed {member} from {circle}",
                ),
            ),
        ],
    )
}

/// Moderation: invitations, level changes, join requests, ownership.
pub fn moderation() -> RuleGroup {
    RuleGroup::new(
        "moderation",
        true,
        vec![
            member_rule(
                Subject::MemberInvited,
                None,
                triple(
                    "You invited {member} to join {circle}",
                    "You have been invited to join {circle} by {author}",
                    "{member} has been invited to join {circle} by {author}",
                ),
            ),
            TemplateRule {
                subject: Subject::MemberLevel,
                guard: None,
                scope: TokenScope::Member,
                templates: triple(
                    "You changed {member}'s level in {circle} to %1$s",
                    "{author} changed your level in {circle} to %1$s",
                    "{author} changed {member}'s level in {circle} to %1$s",
                ),
                args: Some(level_args),
            },
            member_rule(
                Subject::MemberRequestInvitation,
                None,
                member_pair(
                    "You sent a request to join {circle}",
                    "{member} sent a request to join {circle}",
                ),
            ),
            member_rule(
                Subject::MemberOwner,
                None,
                member_pair(
                    "You are the new owner of {circle}",
                    "{member} is the new owner of {circle}",
                ),
            ),
        ],
    )
}
