//! # festreg-core — Domain types and registration validation
//!
//! Foundational types for the festreg event-registration stack, plus the
//! registration validator: pure decision functions that gate a registration
//! submission against event rules before anything touches the network.
//!
//! ## Design
//!
//! - Records arriving from the backend deserialize through validating
//!   constructors — malformed events (inverted team bounds, empty ids) are
//!   rejected at the boundary, not deep in the call chain.
//! - The validator never performs I/O and never panics for expected invalid
//!   states; it returns decision values ([`SubmissionGate`]) or typed errors
//!   ([`ValidationError`]) the caller turns into user-facing messages.

pub mod error;
pub mod event;
pub mod member;
pub mod registration;
pub mod roster;

pub use error::ValidationError;
pub use event::{Event, EventId, EventKind, SubFest, SubmissionGate, TeamBounds};
pub use member::TeamMember;
pub use registration::RegistrationAttempt;
pub use roster::TeamRoster;
