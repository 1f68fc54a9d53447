use std::fmt;

/// A single user record.
///
/// There is no identifier field; `name` is used as the lookup key and
/// duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub age: i64,
}

impl User {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// A user may be inserted only with a non-empty name and a positive age
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.age > 0
    }

    /// Shallow merge: fields present in `patch` override, absent ones are kept
    pub fn merged(&self, patch: &UserPatch) -> Self {
        Self {
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            age: patch.age.unwrap_or(self.age),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

/// Partial user used by edit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl UserPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }
}
