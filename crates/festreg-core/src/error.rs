//! Validation errors for domain construction and registration checks.

/// Errors produced by validating constructors and the registration
/// validator. These are expected-invalid states, surfaced to the caller as
/// inline messages — never panics, never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Fewer complete team members than the event's minimum.
    #[error("at least {minimum} team members with complete details are required (have {complete})")]
    TooFewMembers { minimum: u32, complete: u32 },

    /// More complete team members than the event's maximum.
    #[error("at most {maximum} team members are allowed (have {complete})")]
    TooManyMembers { maximum: u32, complete: u32 },

    /// The same email appears for more than one team member.
    #[error("duplicate team member: {email}")]
    DuplicateMember { email: String },

    /// Team size bounds must satisfy `1 <= min <= max`.
    #[error("invalid team size bounds: min {min}, max {max}")]
    InvalidTeamBounds { min: u32, max: u32 },

    /// An identifier or required field was empty or whitespace-only.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// A member's year of study must be between 1 and 4.
    #[error("year of study must be between 1 and 4, got {0}")]
    InvalidYear(u8),
}
