//! Fixed copy the view layer renders.

use crate::types::SignUpViewAction;

/// Screen heading
pub const SCREEN_TITLE: &str = "Sign Up";

/// Submit button label
pub const SUBMIT_LABEL: &str = "Sign Up";

/// Text of a modal dialog with a single dismiss control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogContent {
    /// Dialog title
    pub title: &'static str,
    /// Dialog body
    pub message: &'static str,
    /// Label of the dismiss button
    pub dismiss_label: &'static str,
}

/// Dialog shown for [`SignUpViewAction::ShowErrorDialog`]
pub const ERROR_DIALOG: DialogContent = DialogContent {
    title: "Error",
    message: "Please fill all the required fields.",
    dismiss_label: "OK",
};

impl SignUpViewAction {
    /// Dialog to present, if this action opens one
    #[must_use]
    pub const fn dialog(&self) -> Option<&'static DialogContent> {
        match self {
            Self::ShowErrorDialog => Some(&ERROR_DIALOG),
            Self::ShowToast(_) => None,
        }
    }
}
