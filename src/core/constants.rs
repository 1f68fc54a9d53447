/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Every string the operator sees lives here so the loop, the presenter and
/// the tests agree on the exact wording.
/// Action vocabulary accepted at the main prompt
pub mod actions {
    pub const LIST: &str = "list";
    pub const ADD: &str = "add";
    pub const EDIT: &str = "edit";
    pub const REMOVE: &str = "remove";
    pub const QUIT: &str = "quit";

    /// All valid actions, in the order they are listed in the banner
    pub const ALL: [&str; 5] = [LIST, ADD, EDIT, REMOVE, QUIT];
}

/// Severity level names
pub mod severities {
    pub const SUCCESS: &str = "success";
    pub const ERROR: &str = "error";
    pub const INFO: &str = "info";
}

/// Prompt texts
pub mod prompts {
    pub const ACTION: &str = "How can I help you?";
    pub const NAME: &str = "Enter name";
    pub const AGE: &str = "Enter age";
    pub const EDIT_TARGET: &str = "Enter name of user to edit";
    pub const NEW_NAME: &str = "Enter new name";
    pub const NEW_AGE: &str = "Enter new age";
}

/// Status and banner messages
pub mod messages {
    pub const USER_ADDED: &str = "User has been successfully added!";
    pub const USER_UPDATED: &str = "User has been successfully updated!";
    pub const USER_DELETED: &str = "User deleted!";
    pub const USER_NOT_FOUND: &str = "User not found...";
    pub const WRONG_DATA: &str = "Wrong data!";
    pub const COMMAND_NOT_FOUND: &str = "Command not found";
    pub const INVALID_OPTION: &str = "Invalid option";
    pub const INVALID_NUMBER: &str = "Please enter a valid number";
    pub const BYE: &str = "Bye bye!";
    pub const USERS_DATA: &str = "Users data";
    pub const NO_DATA: &str = "No data...";
    pub const WELCOME: &str = "Welcome to the UsersApp!";
    pub const AVAILABLE_ACTIONS: &str = "Available actions";
    pub const RULE: &str = "====================================";
}

/// Configuration file lookup
pub mod config_files {
    /// Name of the configuration file searched for at startup
    pub const FILE_NAME: &str = ".usersapp.toml";
    /// How many parent directories are searched after the current one
    pub const PARENT_SEARCH_DEPTH: usize = 3;
}
