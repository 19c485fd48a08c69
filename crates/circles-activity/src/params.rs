//! Read-only typed view over the raw parameter mapping.
//!
//! Every accessor is total: a missing or mis-typed key yields its documented
//! default instead of failing. Guards in the rule tables rely on this — guard
//! evaluation must never be able to error. Numeric fields accept both JSON
//! numbers and numeric strings, since the upstream authoring subsystem emits
//! both.

use circles_core::member::MemberKind;
use serde_json::{Map, Value};

/// Default member level when the event omits it: just above
/// [`LEVEL_NONE`](circles_core::member::LEVEL_NONE), i.e. a regular member.
const DEFAULT_MEMBER_LEVEL: i64 = 1;

/// Read-only accessor over an event's `subject_params` mapping.
#[derive(Debug, Clone, Copy)]
pub struct ParamView<'a> {
    params: &'a Map<String, Value>,
}

impl<'a> ParamView<'a> {
    /// Wrap a raw parameter mapping.
    #[must_use]
    pub fn new(params: &'a Map<String, Value>) -> Self {
        Self { params }
    }

    /// Schema version of the parameter mapping. Default 1 (legacy).
    #[must_use]
    pub fn version(&self) -> i64 {
        self.params.get("ver").and_then(as_int).unwrap_or(1)
    }

    /// Whether the mandatory `circle` key is present.
    #[must_use]
    pub fn has_circle(&self) -> bool {
        self.params.contains_key("circle")
    }

    /// Circle identifier. Default empty.
    #[must_use]
    pub fn circle_id(&self) -> &str {
        self.nested_str("circle", "id")
    }

    /// Circle display name. Default empty.
    #[must_use]
    pub fn circle_name(&self) -> &str {
        self.nested_str("circle", "name")
    }

    /// Circle configuration bitmask. Default 0.
    #[must_use]
    pub fn circle_config(&self) -> u32 {
        self.nested_int("circle", "config")
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0)
    }

    /// Whether the circle configuration has `bit` set.
    #[must_use]
    pub fn circle_has_config(&self, bit: u32) -> bool {
        circles_core::circle::has_config(self.circle_config(), bit)
    }

    /// Identifier of the acting user, if any.
    #[must_use]
    pub fn initiator_id(&self) -> Option<&str> {
        self.params
            .get("initiator")
            .and_then(|v| v.get("id"))
            .and_then(Value::as_str)
    }

    /// Display name of the acting user. Default empty.
    #[must_use]
    pub fn initiator_name(&self) -> &str {
        self.nested_str("initiator", "name")
    }

    /// Whether the `member` key is present.
    #[must_use]
    pub fn has_member(&self) -> bool {
        self.params.contains_key("member")
    }

    /// Identifier of the target member, if any.
    #[must_use]
    pub fn member_id(&self) -> Option<&str> {
        self.params
            .get("member")
            .and_then(|v| v.get("id"))
            .and_then(Value::as_str)
    }

    /// Display name of the target member. Default empty.
    #[must_use]
    pub fn member_name(&self) -> &str {
        self.nested_str("member", "name")
    }

    /// Kind of the target member. Default local user.
    #[must_use]
    pub fn member_kind(&self) -> MemberKind {
        self.nested_int("member", "type")
            .map_or(MemberKind::User, MemberKind::from_wire)
    }

    /// Level of the target member. Default 1 (just above "none"): an event
    /// that omits the level describes an established member.
    #[must_use]
    pub fn member_level(&self) -> i64 {
        self.nested_int("member", "level")
            .unwrap_or(DEFAULT_MEMBER_LEVEL)
    }

    /// Status of the target member. Default empty.
    #[must_use]
    pub fn member_status(&self) -> &str {
        self.nested_str("member", "status")
    }

    /// Top-level `level` key of level-change events. Default 0.
    #[must_use]
    pub fn level(&self) -> i64 {
        self.params.get("level").and_then(as_int).unwrap_or(0)
    }

    fn nested_str(&self, key: &str, field: &str) -> &'a str {
        self.params
            .get(key)
            .and_then(|v| v.get(field))
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    fn nested_int(&self, key: &str, field: &str) -> Option<i64> {
        self.params.get(key).and_then(|v| v.get(field)).and_then(as_int)
    }
}

/// Integer out of a JSON number or a numeric string.
fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
