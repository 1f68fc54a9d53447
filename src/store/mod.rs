//! In-memory user record store
//!
//! Records are kept in insertion order in a plain `Vec`. Lookups are linear
//! scans by exact, case-sensitive name and always resolve to the first match,
//! so duplicate names are legal but only the earliest one is ever edited or
//! removed.

use log::debug;

use crate::core::error::{Result, UsersAppError};
use crate::core::types::{User, UserPatch};

#[derive(Debug, Default, Clone)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current collection in insertion order
    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// First user whose name equals `name` exactly
    pub fn find(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|user| user.name == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.users.iter().position(|user| user.name == name)
    }

    /// Append `candidate` if it has a non-empty name and a positive age
    pub fn add(&mut self, candidate: User) -> Result<()> {
        if !candidate.is_valid() {
            debug!("Rejected user {candidate}");
            return Err(UsersAppError::Validation(format!(
                "name must not be empty and age must be positive, got {candidate:?}"
            )));
        }

        debug!("Adding user {candidate}");
        self.users.push(candidate);
        Ok(())
    }

    /// Merge `patch` into the first user named `name`.
    ///
    /// The merged record is not re-validated: an edit may leave an empty
    /// name or a non-positive age behind.
    pub fn edit(&mut self, name: &str, patch: &UserPatch) -> Result<()> {
        let index = self
            .position(name)
            .ok_or_else(|| UsersAppError::NotFound(name.to_string()))?;

        let updated = self.users[index].merged(patch);
        debug!("Updating user at index {index}: {} -> {updated}", self.users[index]);
        self.users[index] = updated;
        Ok(())
    }

    /// Remove the first user named `name`, keeping the order of the rest
    pub fn remove(&mut self, name: &str) -> Result<User> {
        let index = self
            .position(name)
            .ok_or_else(|| UsersAppError::NotFound(name.to_string()))?;

        let removed = self.users.remove(index);
        debug!("Removed user at index {index}: {removed}");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(users: &[(&str, i64)]) -> UserStore {
        let mut store = UserStore::new();
        for (name, age) in users {
            store.add(User::new(*name, *age)).unwrap();
        }
        store
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = UserStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_add_valid_user_appends() {
        let mut store = store_with(&[("Anna", 30)]);
        store.add(User::new("Max", 20)).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.list().last(), Some(&User::new("Max", 20)));
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut store = store_with(&[("Anna", 30)]);
        let result = store.add(User::new("", 20));

        assert!(matches!(result, Err(UsersAppError::Validation(_))));
        assert_eq!(store.list(), &[User::new("Anna", 30)]);
    }

    #[test]
    fn test_add_rejects_non_positive_age() {
        let mut store = UserStore::new();

        assert!(matches!(
            store.add(User::new("Anna", 0)),
            Err(UsersAppError::Validation(_))
        ));
        assert!(matches!(
            store.add(User::new("Anna", -3)),
            Err(UsersAppError::Validation(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_edit_merges_patch_into_first_match() {
        let mut store = store_with(&[("Max", 20)]);
        store.edit("Max", &UserPatch::new().age(21)).unwrap();

        assert_eq!(store.list(), &[User::new("Max", 21)]);
    }

    #[test]
    fn test_edit_leaves_other_records_in_place() {
        let mut store = store_with(&[("Anna", 30), ("Max", 20), ("Max", 40), ("Bob", 50)]);
        store
            .edit("Max", &UserPatch::new().name("Maxine").age(22))
            .unwrap();

        assert_eq!(
            store.list(),
            &[
                User::new("Anna", 30),
                User::new("Maxine", 22),
                User::new("Max", 40),
                User::new("Bob", 50),
            ]
        );
    }

    #[test]
    fn test_edit_is_case_sensitive() {
        let mut store = store_with(&[("Max", 20)]);
        let result = store.edit("max", &UserPatch::new().age(21));

        assert!(matches!(result, Err(UsersAppError::NotFound(name)) if name == "max"));
        assert_eq!(store.list(), &[User::new("Max", 20)]);
    }

    #[test]
    fn test_edit_missing_name_leaves_store_unchanged() {
        let mut store = store_with(&[("Anna", 30)]);
        let before = store.list().to_vec();

        assert!(matches!(
            store.edit("Ghost", &UserPatch::new().age(1)),
            Err(UsersAppError::NotFound(_))
        ));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_edit_skips_validation() {
        let mut store = store_with(&[("Max", 20)]);
        store.edit("Max", &UserPatch::new().name("").age(0)).unwrap();

        assert_eq!(store.list(), &[User::new("", 0)]);
    }

    #[test]
    fn test_remove_first_match_preserves_order() {
        let mut store = store_with(&[("Anna", 30), ("Max", 20), ("Bob", 50), ("Max", 40)]);
        let removed = store.remove("Max").unwrap();

        assert_eq!(removed, User::new("Max", 20));
        assert_eq!(
            store.list(),
            &[User::new("Anna", 30), User::new("Bob", 50), User::new("Max", 40)]
        );
    }

    #[test]
    fn test_remove_missing_name() {
        let mut store = store_with(&[("Anna", 30)]);

        assert!(matches!(
            store.remove("Ghost"),
            Err(UsersAppError::NotFound(name)) if name == "Ghost"
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_find_returns_first_match() {
        let store = store_with(&[("Max", 20), ("Max", 40)]);

        assert_eq!(store.find("Max"), Some(&User::new("Max", 20)));
        assert_eq!(store.find("Ghost"), None);
    }

    #[test]
    fn test_scenario_rejected_add_is_not_listed() {
        let mut store = UserStore::new();
        store.add(User::new("Anna", 30)).unwrap();
        assert!(store.add(User::new("", 20)).is_err());

        assert_eq!(store.list(), &[User::new("Anna", 30)]);
    }
}
