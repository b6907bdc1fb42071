/// UIStore manages UI-specific state (help visibility, status line, exit flag)
use crate::actions::Action;
use std::sync::{Arc, PoisonError, RwLock};

/// Internal state for UI
#[derive(Debug, Clone, Default)]
pub struct UIState {
    /// Whether help overlay is visible
    pub show_help: bool,

    /// Message shown in the footer (if any)
    pub status_message: Option<String>,

    /// Whether the application should exit
    pub should_exit: bool,
}

/// Store that holds UI-related state
#[derive(Clone, Default)]
pub struct UIStore {
    state: Arc<RwLock<UIState>>,
}

impl UIStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> UIState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        match action {
            Action::ToggleHelp => {
                state.show_help = !state.show_help;
            }

            Action::ShowStatus(message) => {
                state.status_message = Some(message.clone());
            }

            Action::ClearSelection => {
                state.status_message = Some("Selection cleared".to_string());
            }

            Action::Quit => {
                state.should_exit = true;
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }

    /// Check if the application should exit
    pub fn should_exit(&self) -> bool {
        self.get_state().should_exit
    }
}
