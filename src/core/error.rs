use std::fmt;

/// Error types for usersapp operations
#[derive(Debug)]
pub enum UsersAppError {
    /// Candidate user rejected by `add` (empty name or non-positive age)
    Validation(String),

    /// No user with the given name exists
    NotFound(String),

    /// Action string outside the known vocabulary
    UnrecognizedCommand(String),

    /// Severity level outside success/error/info
    InvalidSeverity(String),

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// IO error on the prompt or output streams
    Io(std::io::Error),

    /// Dialoguer interaction error
    Dialog(dialoguer::Error),

    /// The input stream was closed before the session ended
    InputClosed,
}

impl fmt::Display for UsersAppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsersAppError::Validation(msg) => write!(f, "Validation error: {msg}"),
            UsersAppError::NotFound(name) => write!(f, "User not found: {name}"),
            UsersAppError::UnrecognizedCommand(cmd) => write!(f, "Command not found: {cmd}"),
            UsersAppError::InvalidSeverity(level) => write!(f, "Invalid severity: {level}"),
            UsersAppError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UsersAppError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            UsersAppError::Io(err) => write!(f, "IO error: {err}"),
            UsersAppError::Dialog(err) => write!(f, "Dialog error: {err}"),
            UsersAppError::InputClosed => write!(f, "Input stream closed"),
        }
    }
}

impl std::error::Error for UsersAppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UsersAppError::TomlParsing(err) => Some(err),
            UsersAppError::Io(err) => Some(err),
            UsersAppError::Dialog(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UsersAppError {
    fn from(err: std::io::Error) -> Self {
        UsersAppError::Io(err)
    }
}

impl From<dialoguer::Error> for UsersAppError {
    fn from(err: dialoguer::Error) -> Self {
        UsersAppError::Dialog(err)
    }
}

impl From<toml::de::Error> for UsersAppError {
    fn from(err: toml::de::Error) -> Self {
        UsersAppError::TomlParsing(err)
    }
}

impl UsersAppError {
    /// Whether the error is an expected outcome of a single loop iteration
    /// rather than a failure of the session itself
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            UsersAppError::Validation(_)
                | UsersAppError::NotFound(_)
                | UsersAppError::UnrecognizedCommand(_)
                | UsersAppError::InvalidSeverity(_)
        )
    }
}

/// Type alias for Results using UsersAppError
pub type Result<T> = std::result::Result<T, UsersAppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let validation = UsersAppError::Validation("age must be positive".to_string());
        assert_eq!(
            format!("{validation}"),
            "Validation error: age must be positive"
        );

        let not_found = UsersAppError::NotFound("Ghost".to_string());
        assert_eq!(format!("{not_found}"), "User not found: Ghost");

        let command = UsersAppError::UnrecognizedCommand("lst".to_string());
        assert_eq!(format!("{command}"), "Command not found: lst");

        assert_eq!(format!("{}", UsersAppError::InputClosed), "Input stream closed");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "test");
        let error = UsersAppError::from(io_error);

        match error {
            UsersAppError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Table>("color = = true").unwrap_err();
        let error = UsersAppError::from(toml_error);

        assert!(matches!(error, UsersAppError::TomlParsing(_)));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_source() {
        let io_error = std::io::Error::other("boom");
        assert!(UsersAppError::from(io_error).source().is_some());
        assert!(UsersAppError::NotFound("x".to_string()).source().is_none());
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(UsersAppError::Validation(String::new()).is_recoverable());
        assert!(UsersAppError::NotFound(String::new()).is_recoverable());
        assert!(UsersAppError::UnrecognizedCommand(String::new()).is_recoverable());
        assert!(UsersAppError::InvalidSeverity(String::new()).is_recoverable());
        assert!(!UsersAppError::InputClosed.is_recoverable());
        assert!(!UsersAppError::Config(String::new()).is_recoverable());
    }
}
