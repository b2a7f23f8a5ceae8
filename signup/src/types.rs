//! Domain types for the sign-up screen.
//!
//! [`FormState`] is the snapshot the view renders. It changes only through
//! [`FormState::update_field`] (user edits) and [`FormState::apply`]
//! (state-transition actions), both called by the reducer.

use serde::{Deserialize, Serialize};

/// One form input: its text and whether it currently shows an error
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Current text
    pub value: String,
    /// Whether the input is flagged as invalid
    pub is_error: bool,
    /// Message shown under the input; the reducer never writes it
    pub error_message: String,
}

impl Field {
    /// A field holding `value`, flagged when it is empty
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            is_error: value.is_empty(),
            value,
            error_message: String::new(),
        }
    }

    /// Whether the required value is missing
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.value.is_empty()
    }
}

/// Identifies one of the four inputs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldId {
    /// Full name
    FullName,
    /// Email address
    Email,
    /// Password
    Password,
    /// Password confirmation
    ConfirmPassword,
}

impl FieldId {
    /// Every field, in screen order
    pub const ALL: [Self; 4] = [
        Self::FullName,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
    ];

    /// Input label as shown on screen
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Enter Your Name:",
            Self::Email => "Enter Your Email:",
            Self::Password => "Enter Your Password:",
            Self::ConfirmPassword => "Confirm Your Password:",
        }
    }

    /// Whether the view should mask the input
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        };
        f.write_str(name)
    }
}

/// Per-field error flags, one per input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    /// Full name is missing
    pub full_name: bool,
    /// Email is missing
    pub email: bool,
    /// Password is missing
    pub password: bool,
    /// Password confirmation is missing
    pub confirm_password: bool,
}

impl FieldErrors {
    /// Whether any field failed
    #[must_use]
    pub const fn any(&self) -> bool {
        self.full_name || self.email || self.password || self.confirm_password
    }

    /// Flag for a single field
    #[must_use]
    pub const fn get(&self, id: FieldId) -> bool {
        match id {
            FieldId::FullName => self.full_name,
            FieldId::Email => self.email,
            FieldId::Password => self.password,
            FieldId::ConfirmPassword => self.confirm_password,
        }
    }
}

/// Replacement text for all four inputs
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues {
    /// Full name
    pub full_name: String,
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
    /// Password confirmation
    pub confirm_password: String,
}

/// State of the sign-up screen
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    /// True only while a submission is in flight
    pub is_loading: bool,
    /// Full name input
    pub full_name: Field,
    /// Email input
    pub email: Field,
    /// Password input
    pub password: Field,
    /// Password confirmation input
    pub confirm_password: Field,
}

impl FormState {
    /// Borrow a field by id
    #[must_use]
    pub const fn field(&self, id: FieldId) -> &Field {
        match id {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut Field {
        match id {
            FieldId::FullName => &mut self.full_name,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
            FieldId::ConfirmPassword => &mut self.confirm_password,
        }
    }

    /// Fields in screen order
    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &Field)> {
        FieldId::ALL.into_iter().map(|id| (id, self.field(id)))
    }

    /// Replace one field after a user edit
    ///
    /// The new value is flagged immediately when empty; other fields are
    /// left untouched.
    pub fn update_field(&mut self, id: FieldId, value: String) {
        let field = self.field_mut(id);
        field.is_error = value.is_empty();
        field.value = value;
    }

    /// Check every field for a missing value
    ///
    /// All four fields are evaluated; nothing short-circuits.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        FieldErrors {
            full_name: self.full_name.is_missing(),
            email: self.email.is_missing(),
            password: self.password.is_missing(),
            confirm_password: self.confirm_password.is_missing(),
        }
    }

    /// Apply a state-transition action
    pub fn apply(&mut self, action: &FormAction) {
        match action {
            FormAction::SetLoading(is_loading) => {
                self.is_loading = *is_loading;
            },
            FormAction::SetValidation(errors) => {
                for id in FieldId::ALL {
                    self.field_mut(id).is_error = errors.get(id);
                }
            },
            FormAction::ReplaceFields(values) => {
                self.full_name.value.clone_from(&values.full_name);
                self.email.value.clone_from(&values.email);
                self.password.value.clone_from(&values.password);
                self.confirm_password.value.clone_from(&values.confirm_password);
            },
        }
    }
}

/// User-originated requests
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignUpIntent {
    /// The text of an input changed
    UpdateField {
        /// Which input
        field: FieldId,
        /// Its new text
        value: String,
    },
    /// The sign-up button was pressed
    SubmitClicked,
}

/// State-transition requests
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormAction {
    /// Replace `is_loading` only
    SetLoading(bool),
    /// Replace each field's `is_error` only
    SetValidation(FieldErrors),
    /// Replace each field's `value` only
    ReplaceFields(FieldValues),
}

/// One-shot instructions for the view
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignUpViewAction {
    /// Show an auto-dismissing message
    ShowToast(String),
    /// Show the modal error dialog
    ShowErrorDialog,
}

/// Everything the sign-up reducer processes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpAction {
    /// A user intent
    Intent(SignUpIntent),
    /// A direct state transition
    Form(FormAction),
    /// The simulated request finished
    SubmissionFinished,
}

impl From<SignUpIntent> for SignUpAction {
    fn from(intent: SignUpIntent) -> Self {
        Self::Intent(intent)
    }
}

impl From<FormAction> for SignUpAction {
    fn from(action: FormAction) -> Self {
        Self::Form(action)
    }
}
