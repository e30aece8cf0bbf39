mod saved;

pub(crate) use saved::SavedJokes;

use crate::models::Joke;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AddOutcome {
    Added,
    /// Not an error: the UI shows an "already saved" notice.
    AlreadyPresent,
}

/// Append `candidate` unless a joke with the same id is already saved.
pub(crate) fn try_add(mut existing: Vec<Joke>, candidate: Joke) -> (Vec<Joke>, AddOutcome) {
    if existing.iter().any(|j| j.id == candidate.id) {
        return (existing, AddOutcome::AlreadyPresent);
    }
    existing.push(candidate);
    (existing, AddOutcome::Added)
}

/// Drop the joke with `id`. Removing an id that is not there is a no-op.
pub(crate) fn remove(mut existing: Vec<Joke>, id: &str) -> Vec<Joke> {
    existing.retain(|j| j.id != id);
    existing
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(jokes: &[Joke]) -> Vec<&str> {
        jokes.iter().map(|j| j.id.as_str()).collect()
    }

    #[test]
    fn adding_same_id_twice_keeps_one() {
        let (c, first) = try_add(vec![], Joke::new("a1", "X"));
        let (c, second) = try_add(c, Joke::new("a1", "X"));
        assert_eq!(first, AddOutcome::Added);
        assert_eq!(second, AddOutcome::AlreadyPresent);
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn identity_is_id_not_text() {
        let (c, _) = try_add(vec![], Joke::new("a1", "original"));
        let (c, outcome) = try_add(c, Joke::new("a1", "edited upstream"));
        assert_eq!(outcome, AddOutcome::AlreadyPresent);
        assert_eq!(c[0].text, "original");
    }

    #[test]
    fn adds_append_in_order() {
        let (c, _) = try_add(vec![], Joke::new("a1", "X"));
        let (c, _) = try_add(c, Joke::new("b2", "Y"));
        assert_eq!(ids(&c), ["a1", "b2"]);
    }

    #[test]
    fn mixed_adds_never_duplicate_ids() {
        let mut c = Vec::new();
        for id in ["a", "b", "a", "c", "b", "b", "d", "a"] {
            c = try_add(c, Joke::new(id, format!("joke {id}"))).0;
        }
        let unique: HashSet<_> = c.iter().map(|j| j.id.clone()).collect();
        assert_eq!(unique.len(), c.len());
        assert_eq!(ids(&c), ["a", "b", "c", "d"]);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let c = vec![Joke::new("a1", "X"), Joke::new("b2", "Y"), Joke::new("c3", "Z")];
        assert_eq!(ids(&remove(c, "b2")), ["a1", "c3"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let c = vec![Joke::new("a1", "X"), Joke::new("x", "Y")];
        let once = remove(c, "x");
        let twice = remove(once.clone(), "x");
        assert_eq!(once, twice);
        assert_eq!(remove(once.clone(), "missing"), once);
    }

    #[test]
    fn remove_from_empty_is_empty() {
        assert!(remove(Vec::new(), "a1").is_empty());
    }
}
