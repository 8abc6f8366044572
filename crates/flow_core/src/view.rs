//! Declarative description of what the frontend should show.

use shared::domain::ContactMethod;

use crate::state::{FlowState, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    AcceptButton,
    Input(ContactMethod),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub method: ContactMethod,
    pub value: String,
    pub placeholder: &'static str,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub selected: ContactMethod,
    /// Only the input matching `selected` is ever described.
    pub input: InputView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessView {
    pub icon: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDescription {
    pub buttons_visible: bool,
    pub rejection_modal_visible: bool,
    pub scroll_locked: bool,
    pub contact_form: Option<FormView>,
    pub success: Option<SuccessView>,
    pub banner: Option<String>,
    pub focus: Option<FocusTarget>,
}

pub fn render(state: &FlowState) -> ViewDescription {
    let view = state.view();

    let contact_form = (view == ViewState::ContactFormOpen).then(|| {
        let form = state.form();
        let method = form.method;
        FormView {
            selected: method,
            input: InputView {
                method,
                value: form.active_value().to_string(),
                placeholder: method.placeholder(),
                error: state
                    .field_error(method)
                    .map(|annotation| annotation.error.to_string()),
            },
        }
    });

    let success = match (view, state.success()) {
        (ViewState::SuccessShown, Some(summary)) => Some(SuccessView {
            icon: summary.method.icon(),
            text: summary.text.clone(),
        }),
        _ => None,
    };

    let focus = match view {
        ViewState::Initial => Some(FocusTarget::AcceptButton),
        ViewState::ContactFormOpen => Some(FocusTarget::Input(state.form().method)),
        ViewState::RejectionModalOpen | ViewState::SuccessShown => None,
    };

    ViewDescription {
        // The modal overlays the buttons rather than replacing them.
        buttons_visible: matches!(view, ViewState::Initial | ViewState::RejectionModalOpen),
        rejection_modal_visible: view == ViewState::RejectionModalOpen,
        scroll_locked: state.scroll_locked(),
        contact_form,
        success,
        banner: state.banner().map(|banner| banner.message.clone()),
        focus,
    }
}
