//! Team member form records.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One row of the team-member form.
///
/// Unlike the other domain types this record is deliberately permissive:
/// it mirrors in-progress form state, so fields may be empty while the
/// student is still typing. Completeness is checked by
/// [`TeamMember::is_complete`] when the roster is validated — a
/// partially-filled member never counts toward the team-size minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roll_number: String,
    #[serde(default)]
    pub department: String,
    /// Year of study, 1–4. Always carries a value in form state; values
    /// outside the range are rejected at deserialization time.
    #[serde(default = "default_year", deserialize_with = "deserialize_year")]
    pub year: u8,
    #[serde(default)]
    pub mobile_number: String,
}

fn default_year() -> u8 {
    1
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let year = u8::deserialize(deserializer)?;
    if !(1..=4).contains(&year) {
        return Err(serde::de::Error::custom(ValidationError::InvalidYear(year)));
    }
    Ok(year)
}

impl TeamMember {
    /// An empty row, as appended by the "add member" action.
    pub fn blank() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            roll_number: String::new(),
            department: String::new(),
            year: 1,
            mobile_number: String::new(),
        }
    }

    /// Completeness is all-or-nothing: every one of the five text fields
    /// must be non-empty after trimming whitespace for the member to count
    /// toward the team-size requirement.
    pub fn is_complete(&self) -> bool {
        !self.full_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.roll_number.trim().is_empty()
            && !self.department.trim().is_empty()
            && !self.mobile_number.trim().is_empty()
    }
}

impl Default for TeamMember {
    fn default() -> Self {
        Self::blank()
    }
}
