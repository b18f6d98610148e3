use crate::domain::model::{Assignment, AssignmentMap, FacultyRoster, FreeSlotMap};

/// Cycles through roster names in insertion order, wrapping at the end.
#[derive(Debug, Clone)]
pub struct RoundRobin<'a> {
    names: Vec<&'a str>,
    cursor: usize,
}

impl<'a> RoundRobin<'a> {
    pub fn new(roster: &'a FacultyRoster) -> Self {
        Self {
            names: roster.values().map(String::as_str).collect(),
            cursor: 0,
        }
    }

    pub fn next_assignment(&mut self) -> Assignment {
        if self.names.is_empty() {
            return Assignment::Unassigned;
        }
        let name = self.names[self.cursor];
        self.cursor = (self.cursor + 1) % self.names.len();
        Assignment::Faculty(name.to_string())
    }
}

/// Assigns one roster member to every free (day, slot), day order first.
pub fn assign(free_slots: &FreeSlotMap, roster: &FacultyRoster) -> AssignmentMap {
    let mut rotation = RoundRobin::new(roster);
    let mut assignments = AssignmentMap::with_capacity(free_slots.values().map(Vec::len).sum());

    for (day, slots) in free_slots {
        for slot in slots {
            let assignment = rotation.next_assignment();
            tracing::debug!("Assigning {:?} to {} {}", assignment, day, slot);
            assignments.insert((day.clone(), slot.clone()), assignment);
        }
    }

    assignments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(entries: &[(&str, &str)]) -> FacultyRoster {
        entries
            .iter()
            .map(|(a, n)| (a.to_string(), n.to_string()))
            .collect()
    }

    fn free(entries: Vec<(&str, Vec<&str>)>) -> FreeSlotMap {
        entries
            .into_iter()
            .map(|(day, slots)| (day.to_string(), slots.into_iter().map(str::to_string).collect()))
            .collect()
    }

    #[test]
    fn test_round_robin_wraps_after_roster_exhausted() {
        let roster = roster(&[("AA", "A"), ("BB", "B"), ("CC", "C")]);
        let free = free(vec![
            ("Monday", vec!["09:00-10:00 AM", "10:00-11:00 AM"]),
            ("Tuesday", vec!["09:00-10:00 AM", "11:00-12:00 PM", "05:00-06:00 PM"]),
        ]);

        let assignments = assign(&free, &roster);
        let names: Vec<_> = assignments.values().map(|a| a.label("-")).collect();
        assert_eq!(names, vec!["A", "B", "C", "A", "B"]);
        assert_eq!(
            assignments[&("Tuesday".to_string(), "05:00-06:00 PM".to_string())],
            Assignment::Faculty("B".to_string())
        );
    }

    #[test]
    fn test_empty_roster_leaves_every_slot_unassigned() {
        let free = free(vec![
            ("Monday", vec!["09:00-10:00 AM"]),
            ("Friday", vec!["01:00-02:00 PM"]),
        ]);
        let assignments = assign(&free, &FacultyRoster::new());
        assert_eq!(assignments.len(), 2);
        assert!(assignments.values().all(|a| *a == Assignment::Unassigned));
    }

    #[test]
    fn test_only_free_pairs_are_assigned() {
        let roster = roster(&[("AB", "Alice Smith")]);
        let free = free(vec![("Monday", vec!["09:00-10:00 AM"]), ("Tuesday", vec![])]);
        let assignments = assign(&free, &roster);
        assert_eq!(assignments.len(), 1);
        assert!(assignments.keys().all(|(day, _)| day == "Monday"));
    }

    #[test]
    fn test_assignment_is_deterministic() {
        let roster = roster(&[("AB", "Alice"), ("CD", "Bob")]);
        let free = free(vec![(
            "Monday",
            vec!["09:00-10:00 AM", "10:00-11:00 AM", "11:00-12:00 PM"],
        )]);
        assert_eq!(assign(&free, &roster), assign(&free, &roster));
    }
}
