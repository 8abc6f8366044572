//! The single explicit state value owned by the controller.

use shared::{domain::ContactMethod, error::ValidationError};

use crate::scheduler::TimerId;

/// The mutually exclusive panel currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Initial,
    RejectionModalOpen,
    ContactFormOpen,
    SuccessShown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub method: ContactMethod,
    pub handle: String,
    pub phone: String,
}

impl FormFields {
    pub fn value(&self, method: ContactMethod) -> &str {
        match method {
            ContactMethod::Handle => &self.handle,
            ContactMethod::PhoneNumber => &self.phone,
        }
    }

    pub fn active_value(&self) -> &str {
        self.value(self.method)
    }

    pub(crate) fn set(&mut self, method: ContactMethod, value: String) {
        match method {
            ContactMethod::Handle => self.handle = value,
            ContactMethod::PhoneNumber => self.phone = value,
        }
    }
}

/// Inline annotation attached to one input until its timer fires or the
/// input changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub error: ValidationError,
    pub(crate) timer: TimerId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessSummary {
    pub method: ContactMethod,
    pub text: String,
    pub(crate) timer: TimerId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub message: String,
    pub(crate) timer: TimerId,
}

#[derive(Debug, Clone, Default)]
pub struct FlowState {
    pub(crate) view: ViewState,
    pub(crate) form: FormFields,
    pub(crate) handle_error: Option<FieldError>,
    pub(crate) phone_error: Option<FieldError>,
    pub(crate) success: Option<SuccessSummary>,
    pub(crate) banner: Option<StatusBanner>,
}

impl FlowState {
    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn field_error(&self, method: ContactMethod) -> Option<&FieldError> {
        match method {
            ContactMethod::Handle => self.handle_error.as_ref(),
            ContactMethod::PhoneNumber => self.phone_error.as_ref(),
        }
    }

    pub(crate) fn field_error_slot(&mut self, method: ContactMethod) -> &mut Option<FieldError> {
        match method {
            ContactMethod::Handle => &mut self.handle_error,
            ContactMethod::PhoneNumber => &mut self.phone_error,
        }
    }

    pub fn success(&self) -> Option<&SuccessSummary> {
        self.success.as_ref()
    }

    pub fn banner(&self) -> Option<&StatusBanner> {
        self.banner.as_ref()
    }

    pub fn scroll_locked(&self) -> bool {
        self.view == ViewState::RejectionModalOpen
    }
}
