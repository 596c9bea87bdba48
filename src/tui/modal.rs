// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// Confirm the mint (Preview modal only)
    Confirm,
}

/// Available modal types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Preview surface - identifier, placeholder art, selected traits, mint control
    Preview,
    /// Help overlay - shows keyboard shortcuts
    Help,
}

impl Modal {
    /// Handle keyboard input, return action for caller to execute
    ///
    /// The preview surface is stateless presentation: it only reports intent
    /// (confirm/dismiss); all validation happens in the selection core.
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Preview => match key {
                KeyCode::Esc | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Enter | KeyCode::Char('m') | KeyCode::Char('M') => ModalAction::Confirm,
                _ => ModalAction::None,
            },
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_modal_confirms_and_closes() {
        let mut modal = Modal::Preview;
        assert_eq!(modal.handle_input(KeyCode::Enter), ModalAction::Confirm);
        assert_eq!(modal.handle_input(KeyCode::Char('m')), ModalAction::Confirm);
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('x')), ModalAction::None);
    }

    #[test]
    fn help_modal_only_closes() {
        let mut modal = Modal::Help;
        assert_eq!(modal.handle_input(KeyCode::Enter), ModalAction::None);
        assert_eq!(modal.handle_input(KeyCode::Char('?')), ModalAction::Close);
    }
}
