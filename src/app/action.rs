use std::fmt;
use std::str::FromStr;

use crate::core::constants::actions;
use crate::core::error::UsersAppError;
use crate::core::types::{User, UserPatch};

/// Operator action selected at the main prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Add,
    Edit,
    Remove,
    Quit,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => actions::LIST,
            Self::Add => actions::ADD,
            Self::Edit => actions::EDIT,
            Self::Remove => actions::REMOVE,
            Self::Quit => actions::QUIT,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = UsersAppError;

    /// Case-sensitive, no trimming: " list" and "List" are not actions
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            actions::LIST => Ok(Self::List),
            actions::ADD => Ok(Self::Add),
            actions::EDIT => Ok(Self::Edit),
            actions::REMOVE => Ok(Self::Remove),
            actions::QUIT => Ok(Self::Quit),
            _ => Err(UsersAppError::UnrecognizedCommand(s.to_string())),
        }
    }
}

/// A fully specified request, ready to be applied to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List,
    Add(User),
    Edit { name: String, patch: UserPatch },
    Remove(String),
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_actions() {
        for name in actions::ALL {
            let action: Action = name.parse().unwrap();
            assert_eq!(action.as_str(), name);
            assert_eq!(action.to_string(), name);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(matches!(
            "List".parse::<Action>(),
            Err(UsersAppError::UnrecognizedCommand(cmd)) if cmd == "List"
        ));
        assert!("QUIT".parse::<Action>().is_err());
    }

    #[test]
    fn test_parse_does_not_trim() {
        assert!(" list".parse::<Action>().is_err());
        assert!("list ".parse::<Action>().is_err());
        assert!("".parse::<Action>().is_err());
    }
}
