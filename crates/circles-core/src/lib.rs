//! # circles-core
//!
//! Foundation types, errors, branded IDs, and domain constants for the
//! circles stack.
//!
//! This crate provides the shared vocabulary the rendering crates depend on:
//!
//! - **Branded IDs**: [`UserId`](ids::UserId), [`CircleId`](ids::CircleId),
//!   [`MemberId`](ids::MemberId) as newtypes for type safety
//! - **Events**: [`ActivityEvent`](events::ActivityEvent) with its raw
//!   parameter mapping and rendered output fields
//! - **Display refs**: [`DisplayRef`](events::DisplayRef) placeholder targets
//!   handed back to the host for token substitution
//! - **Domain constants**: circle configuration bits, member levels, member
//!   kinds and status markers
//! - **Errors**: [`ActivityError`](errors::ActivityError) via `thiserror`
//! - **Logging**: [`init_subscriber`](logging::init_subscriber) for `tracing`
//!   setup

#![deny(unsafe_code)]

pub mod circle;
pub mod errors;
pub mod events;
pub mod ids;
pub mod logging;
pub mod member;

pub use errors::ActivityError;
pub use events::{ActivityEvent, DisplayRef, EventKind, RefKind};
pub use ids::{CircleId, MemberId, UserId};
