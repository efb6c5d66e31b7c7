//! Team roster: the in-progress member list behind the registration form.

use crate::error::ValidationError;
use crate::event::TeamBounds;
use crate::member::TeamMember;

/// Ordered, mutable list of team-member rows.
///
/// The roster owns the array-shaping rules: it starts pre-filled to the
/// event's minimum size, grows only up to the maximum, and shrinks only
/// down to the minimum. Hitting either bound is a no-op, not an error —
/// when `min == max` the roster is effectively frozen at that size.
#[derive(Debug, Clone, Default)]
pub struct TeamRoster {
    members: Vec<TeamMember>,
}

impl TeamRoster {
    /// An empty roster (individual events, or tests).
    pub fn new() -> Self {
        Self::default()
    }

    /// A roster pre-filled with `bounds.min()` blank rows, matching the
    /// initial form state shown for a team event.
    pub fn for_bounds(bounds: TeamBounds) -> Self {
        Self {
            members: (0..bounds.min()).map(|_| TeamMember::blank()).collect(),
        }
    }

    /// Build a roster from existing member rows.
    pub fn from_members(members: Vec<TeamMember>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Mutable access to one row, for field edits.
    pub fn member_mut(&mut self, index: usize) -> Option<&mut TeamMember> {
        self.members.get_mut(index)
    }

    /// Append one blank row, only while below `bounds.max()`.
    ///
    /// Returns whether a row was added; at the ceiling this is a no-op.
    pub fn add_blank(&mut self, bounds: TeamBounds) -> bool {
        if self.members.len() < bounds.max() as usize {
            self.members.push(TeamMember::blank());
            true
        } else {
            false
        }
    }

    /// Remove the row at `index`, only while above `bounds.min()`.
    ///
    /// Returns whether a row was removed; at the floor, or for an
    /// out-of-range index, this is a no-op.
    pub fn remove(&mut self, index: usize, bounds: TeamBounds) -> bool {
        if self.members.len() > bounds.min() as usize && index < self.members.len() {
            self.members.remove(index);
            true
        } else {
            false
        }
    }

    /// Number of members with all required fields filled in.
    pub fn complete_count(&self) -> u32 {
        self.members.iter().filter(|m| m.is_complete()).count() as u32
    }

    /// The complete members, in form order.
    pub fn complete_members(&self) -> Vec<TeamMember> {
        self.members
            .iter()
            .filter(|m| m.is_complete())
            .cloned()
            .collect()
    }

    /// Gate a team submission against the event's size bounds.
    ///
    /// Only complete members count: a row with some-but-not-all fields
    /// filled never satisfies the minimum. Duplicate emails among complete
    /// members are rejected here as well, before the backend would.
    pub fn validate(&self, bounds: TeamBounds) -> Result<(), ValidationError> {
        let complete = self.complete_count();
        if complete < bounds.min() {
            return Err(ValidationError::TooFewMembers {
                minimum: bounds.min(),
                complete,
            });
        }
        if complete > bounds.max() {
            return Err(ValidationError::TooManyMembers {
                maximum: bounds.max(),
                complete,
            });
        }
        let mut seen = Vec::new();
        for member in self.members.iter().filter(|m| m.is_complete()) {
            let email = member.email.trim().to_ascii_lowercase();
            if seen.contains(&email) {
                return Err(ValidationError::DuplicateMember {
                    email: member.email.trim().to_string(),
                });
            }
            seen.push(email);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_member(email: &str) -> TeamMember {
        TeamMember {
            full_name: "Asha Rao".into(),
            email: email.into(),
            roll_number: "21CS042".into(),
            department: "CSE".into(),
            year: 3,
            mobile_number: "9876543210".into(),
        }
    }

    fn bounds(min: u32, max: u32) -> TeamBounds {
        TeamBounds::new(min, max).unwrap()
    }

    #[test]
    fn for_bounds_prefills_minimum_rows() {
        let roster = TeamRoster::for_bounds(bounds(3, 5));
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.complete_count(), 0);
    }

    #[test]
    fn add_blank_is_noop_at_ceiling() {
        let b = bounds(2, 3);
        let mut roster = TeamRoster::for_bounds(b);
        assert!(roster.add_blank(b));
        assert_eq!(roster.len(), 3);
        // Idempotent at the ceiling: list is unchanged.
        assert!(!roster.add_blank(b));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn remove_is_noop_at_floor() {
        let b = bounds(2, 4);
        let mut roster = TeamRoster::for_bounds(b);
        assert!(!roster.remove(0, b));
        assert_eq!(roster.len(), 2);

        roster.add_blank(b);
        assert!(roster.remove(1, b));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let b = bounds(1, 4);
        let mut roster = TeamRoster::from_members(vec![complete_member("a@x.edu"), complete_member("b@x.edu")]);
        assert!(!roster.remove(7, b));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn fixed_size_team_freezes_roster() {
        let b = bounds(3, 3);
        let mut roster = TeamRoster::for_bounds(b);
        assert!(!roster.add_blank(b));
        assert!(!roster.remove(0, b));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn incomplete_rows_do_not_satisfy_minimum() {
        let b = bounds(2, 4);
        let mut roster = TeamRoster::from_members(vec![
            complete_member("a@x.edu"),
            complete_member("b@x.edu"),
        ]);
        // A ghost teammate with only an email must not count.
        roster.add_blank(b);
        if let Some(ghost) = roster.member_mut(2) {
            ghost.email = "ghost@x.edu".into();
        }
        assert_eq!(roster.complete_count(), 2);
        assert!(roster.validate(b).is_ok());
    }

    #[test]
    fn validate_reports_too_few() {
        let b = bounds(2, 4);
        let roster = TeamRoster::from_members(vec![complete_member("a@x.edu")]);
        assert_eq!(
            roster.validate(b),
            Err(ValidationError::TooFewMembers {
                minimum: 2,
                complete: 1
            })
        );
    }

    #[test]
    fn validate_reports_too_many() {
        let b = bounds(1, 2);
        let roster = TeamRoster::from_members(vec![
            complete_member("a@x.edu"),
            complete_member("b@x.edu"),
            complete_member("c@x.edu"),
        ]);
        assert_eq!(
            roster.validate(b),
            Err(ValidationError::TooManyMembers {
                maximum: 2,
                complete: 3
            })
        );
    }

    #[test]
    fn validate_rejects_duplicate_emails() {
        let b = bounds(2, 4);
        let roster = TeamRoster::from_members(vec![
            complete_member("a@x.edu"),
            complete_member("A@X.edu "),
        ]);
        assert!(matches!(
            roster.validate(b),
            Err(ValidationError::DuplicateMember { .. })
        ));
    }

    #[test]
    fn validate_accepts_in_range_roster() {
        let b = bounds(2, 4);
        let roster = TeamRoster::from_members(vec![
            complete_member("a@x.edu"),
            complete_member("b@x.edu"),
            complete_member("c@x.edu"),
        ]);
        assert!(roster.validate(b).is_ok());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Bounds are inclusive on both ends: a roster of n complete
            // members validates iff min <= n <= max.
            #[test]
            fn validation_matches_inclusive_bounds(
                min in 1u32..6,
                span in 0u32..4,
                n in 0usize..12,
            ) {
                let max = min + span;
                let b = TeamBounds::new(min, max).unwrap();
                let members: Vec<TeamMember> = (0..n)
                    .map(|i| complete_member(&format!("m{i}@x.edu")))
                    .collect();
                let roster = TeamRoster::from_members(members);
                let result = roster.validate(b);
                match result {
                    Ok(()) => prop_assert!(b.contains(n as u32)),
                    Err(ValidationError::TooFewMembers { .. }) => {
                        prop_assert!((n as u32) < min)
                    }
                    Err(ValidationError::TooManyMembers { .. }) => {
                        prop_assert!((n as u32) > max)
                    }
                    Err(other) => prop_assert!(false, "unexpected error: {other}"),
                }
            }

            // add_blank never exceeds max; remove never drops below min.
            #[test]
            fn shaping_respects_bounds(
                min in 1u32..4,
                span in 0u32..4,
                ops in proptest::collection::vec(any::<bool>(), 0..20),
            ) {
                let b = TeamBounds::new(min, min + span).unwrap();
                let mut roster = TeamRoster::for_bounds(b);
                for grow in ops {
                    if grow {
                        roster.add_blank(b);
                    } else {
                        roster.remove(0, b);
                    }
                    prop_assert!(roster.len() >= b.min() as usize);
                    prop_assert!(roster.len() <= b.max() as usize);
                }
            }
        }
    }
}
