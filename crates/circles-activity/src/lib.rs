//! # circles-activity
//!
//! Rendering pipeline that turns circle membership events into localized,
//! human-readable notification sentences.
//!
//! ## Pipeline
//!
//! [`ActivityProvider::parse`](provider::ActivityProvider::parse) gates on
//! the application id and the mandatory `circle` parameter, routes
//! version-1 payloads to the [`legacy`] renderer, and otherwise evaluates
//! ordered [`RuleGroup`](group::RuleGroup)s of guarded
//! [`TemplateRule`](rule::TemplateRule)s. The first rule whose subject code
//! and guard both match renders exactly one sentence — wording picked by the
//! viewer's perspective (actor, target, or bystander) — plus the named-token
//! substitution set the host merges in its own render step.
//!
//! ## Outcomes
//!
//! - `Ok(Rendered)` — a rule matched; subject, tokens, and icon are set.
//! - `Ok(Unhandled)` — right domain, unknown subject/condition; only the
//!   icon is set.
//! - `Err(UnrecognizedEvent)` — not ours; the event is untouched.

#![deny(unsafe_code)]

pub mod config;
pub mod group;
pub mod l10n;
pub mod legacy;
pub mod params;
pub mod placeholders;
pub mod provider;
pub mod rule;
pub mod subject;
pub mod tables;

pub use config::ProviderConfig;
pub use l10n::{EchoLocalizer, Localizer};
pub use params::ParamView;
pub use provider::{ActivityProvider, RenderOutcome};
pub use subject::Subject;
