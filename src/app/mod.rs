//! Interaction loop
//!
//! The session is an explicit state machine driven by a plain `loop`:
//!
//! ```text
//! AwaitingAction -> AwaitingFields(action) -> Dispatch(request) -> AwaitingAction
//!                                                                -> Terminated
//! ```
//!
//! Store failures, unknown commands and malformed answers are reported to the
//! operator and the loop carries on. Only a failing prompt or output stream
//! ends the session early; a closed input stream ends it cleanly.

pub mod action;

pub use action::{Action, Request};

use std::io::Write;

use log::{debug, warn};

use crate::core::constants::{messages, prompts};
use crate::core::error::{Result, UsersAppError};
use crate::core::types::{User, UserPatch};
use crate::store::UserStore;
use crate::ui::output::Presenter;
use crate::ui::prompt::Prompter;

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    AwaitingAction,
    AwaitingFields(Action),
    Dispatch(Request),
    Terminated,
}

/// How a session came to an end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The operator chose `quit`
    Quit,
    /// The input stream ran out before `quit`
    InputClosed,
}

pub struct App<P: Prompter, W: Write> {
    store: UserStore,
    prompter: P,
    presenter: Presenter<W>,
    show_banner: bool,
}

impl<P: Prompter, W: Write> App<P, W> {
    pub fn new(prompter: P, presenter: Presenter<W>) -> Self {
        Self {
            store: UserStore::new(),
            prompter,
            presenter,
            show_banner: true,
        }
    }

    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn presenter(&self) -> &Presenter<W> {
        &self.presenter
    }

    pub fn into_parts(self) -> (UserStore, P, Presenter<W>) {
        (self.store, self.prompter, self.presenter)
    }

    /// Run the session until the operator quits or the input is closed
    pub fn run(&mut self) -> Result<SessionEnd> {
        if self.show_banner {
            self.presenter.banner()?;
        }

        let mut state = State::AwaitingAction;
        loop {
            state = match self.step(state) {
                Ok(State::Terminated) => return Ok(SessionEnd::Quit),
                Ok(next) => next,
                Err(UsersAppError::InputClosed) => {
                    debug!("Input closed, ending session");
                    return Ok(SessionEnd::InputClosed);
                }
                Err(e) => return Err(e),
            };
        }
    }

    fn step(&mut self, state: State) -> Result<State> {
        match state {
            State::AwaitingAction => self.await_action(),
            State::AwaitingFields(action) => self.await_fields(action),
            State::Dispatch(request) => self.dispatch(request),
            State::Terminated => Ok(State::Terminated),
        }
    }

    fn await_action(&mut self) -> Result<State> {
        let answer = self.prompter.text(prompts::ACTION)?;
        match answer.parse::<Action>() {
            Ok(action) => {
                debug!("Selected action: {action}");
                Ok(State::AwaitingFields(action))
            }
            Err(e) => {
                warn!("{e}");
                self.presenter.error(messages::COMMAND_NOT_FOUND)?;
                Ok(State::AwaitingAction)
            }
        }
    }

    fn await_fields(&mut self, action: Action) -> Result<State> {
        let request = match action {
            Action::List => Request::List,
            Action::Quit => Request::Quit,
            Action::Add => {
                let name = self.prompter.text(prompts::NAME)?;
                let age = self.prompter.number(prompts::AGE)?;
                Request::Add(User::new(name, age))
            }
            Action::Edit => {
                let name = self.prompter.text(prompts::EDIT_TARGET)?;
                if self.store.find(&name).is_none() {
                    warn!("Edit target '{name}' not found, skipping field prompts");
                    self.presenter.error(messages::USER_NOT_FOUND)?;
                    return Ok(State::AwaitingAction);
                }
                let new_name = self.prompter.text(prompts::NEW_NAME)?;
                let new_age = self.prompter.number(prompts::NEW_AGE)?;
                Request::Edit {
                    name,
                    patch: UserPatch::new().name(new_name).age(new_age),
                }
            }
            Action::Remove => Request::Remove(self.prompter.text(prompts::NAME)?),
        };

        Ok(State::Dispatch(request))
    }

    fn dispatch(&mut self, request: Request) -> Result<State> {
        debug!("Dispatching {request:?}");
        match request {
            Request::List => {
                self.presenter.list(self.store.list())?;
            }
            Request::Add(user) => match self.store.add(user) {
                Ok(()) => self.presenter.success(messages::USER_ADDED)?,
                Err(e) => self.report(e, messages::WRONG_DATA)?,
            },
            Request::Edit { name, patch } => match self.store.edit(&name, &patch) {
                Ok(()) => self.presenter.success(messages::USER_UPDATED)?,
                Err(e) => self.report(e, messages::USER_NOT_FOUND)?,
            },
            Request::Remove(name) => match self.store.remove(&name) {
                Ok(_) => self.presenter.success(messages::USER_DELETED)?,
                Err(e) => self.report(e, messages::USER_NOT_FOUND)?,
            },
            Request::Quit => {
                self.presenter.info(messages::BYE)?;
                return Ok(State::Terminated);
            }
        }

        Ok(State::AwaitingAction)
    }

    /// Show a recoverable store error to the operator, propagate anything else
    fn report(&mut self, error: UsersAppError, message: &str) -> Result<()> {
        if !error.is_recoverable() {
            return Err(error);
        }
        warn!("{error}");
        self.presenter.error(message)?;
        Ok(())
    }
}
