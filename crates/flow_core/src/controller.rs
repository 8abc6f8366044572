//! Contact flow controller: named transitions over one [`FlowState`].
//!
//! Every mutation goes through [`Controller::handle`], [`Controller::advance`]
//! or [`Controller::delivery_failed`]. Callers pass a monotonic `now` so
//! timers are fully deterministic.

use std::time::Duration;

use shared::{
    domain::{ContactMethod, ContactSubmission},
    error::SinkError,
};
use tracing::{debug, info};

use crate::{
    sanitize::sanitize,
    scheduler::{Scheduler, TimerKind},
    state::{FieldError, FlowState, FormFields, StatusBanner, SuccessSummary, ViewState},
    validate::validate,
    view::{render, ViewDescription},
};

pub const ERROR_DISPLAY_WINDOW: Duration = Duration::from_secs(3);
pub const SUCCESS_DISPLAY_WINDOW: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    Accept,
    Reject,
    CloseModal,
    /// A click on the dimmed area around the rejection modal, not the modal itself.
    OverlayBackgroundClicked,
    Back,
    Submit,
    SelectMethod(ContactMethod),
    InputChanged {
        method: ContactMethod,
        value: String,
    },
    KeyPressed(Key),
}

/// Work the frontend must carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Deliver(ContactSubmission),
}

#[derive(Debug, Default)]
pub struct Controller {
    state: FlowState,
    scheduler: Scheduler,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn render(&self) -> ViewDescription {
        render(&self.state)
    }

    /// Earliest moment a pending timer needs [`Controller::advance`].
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    pub fn handle(&mut self, event: FlowEvent, now: Duration) -> Vec<Effect> {
        self.advance(now);

        let from = self.state.view;
        let mut effects = Vec::new();
        match (from, event) {
            (ViewState::Initial, FlowEvent::Accept) => self.enter_contact_form(),
            (ViewState::Initial, FlowEvent::Reject) => self.set_view(ViewState::RejectionModalOpen),
            (
                ViewState::RejectionModalOpen,
                FlowEvent::CloseModal
                | FlowEvent::OverlayBackgroundClicked
                | FlowEvent::KeyPressed(Key::Escape),
            ) => self.enter_initial(),
            (ViewState::ContactFormOpen, FlowEvent::Back) => self.enter_initial(),
            (ViewState::ContactFormOpen, FlowEvent::Submit | FlowEvent::KeyPressed(Key::Enter)) => {
                effects.extend(self.submit(now));
            }
            (ViewState::ContactFormOpen, FlowEvent::SelectMethod(method)) => {
                self.select_method(method);
            }
            (ViewState::ContactFormOpen, FlowEvent::InputChanged { method, value }) => {
                self.input_changed(method, &value);
            }
            (ViewState::SuccessShown, FlowEvent::Back) => self.enter_initial(),
            (view, event) => debug!(?view, ?event, "ignoring event for current view"),
        }
        effects
    }

    /// Fires every timer due at `now`.
    pub fn advance(&mut self, now: Duration) {
        for kind in self.scheduler.drain_due(now) {
            match kind {
                TimerKind::ClearFieldError(method) => {
                    *self.state.field_error_slot(method) = None;
                }
                TimerKind::ClearBanner => self.state.banner = None,
                TimerKind::ReturnToInitial => {
                    if self.state.view == ViewState::SuccessShown {
                        self.state.success = None;
                        self.set_view(ViewState::Initial);
                    }
                }
            }
        }
    }

    /// Surfaces a sink failure as a status banner without touching the view.
    pub fn delivery_failed(&mut self, error: &SinkError, now: Duration) {
        self.advance(now);
        if let Some(previous) = self.state.banner.take() {
            self.scheduler.cancel(previous.timer);
        }
        let timer = self
            .scheduler
            .schedule(now, ERROR_DISPLAY_WINDOW, TimerKind::ClearBanner);
        self.state.banner = Some(StatusBanner {
            message: format!("We couldn't pass on your contact details ({error}). Please try again."),
            timer,
        });
    }

    fn set_view(&mut self, next: ViewState) {
        let from = self.state.view;
        if from != next {
            debug!(?from, to = ?next, "view transition");
        }
        self.state.view = next;
    }

    fn enter_initial(&mut self) {
        if let Some(summary) = self.state.success.take() {
            self.scheduler.cancel(summary.timer);
        }
        self.clear_field_errors();
        self.set_view(ViewState::Initial);
    }

    fn enter_contact_form(&mut self) {
        self.clear_field_errors();
        self.state.form = FormFields::default();
        self.set_view(ViewState::ContactFormOpen);
    }

    fn select_method(&mut self, method: ContactMethod) {
        if self.state.form.method != method {
            debug!(?method, "contact method switched");
        }
        self.state.form.method = method;
    }

    fn input_changed(&mut self, method: ContactMethod, raw: &str) {
        if method != self.state.form.method {
            debug!(?method, "ignoring input for hidden contact field");
            return;
        }
        self.clear_field_error(method);
        self.state.form.set(method, sanitize(method, raw));
    }

    fn submit(&mut self, now: Duration) -> Option<Effect> {
        let method = self.state.form.method;
        match validate(method, self.state.form.active_value()) {
            Ok(value) => {
                self.clear_field_errors();
                let submission = ContactSubmission::new(method, value);
                let timer = self
                    .scheduler
                    .schedule(now, SUCCESS_DISPLAY_WINDOW, TimerKind::ReturnToInitial);
                self.state.success = Some(SuccessSummary {
                    method,
                    text: submission.display_text(),
                    timer,
                });
                self.set_view(ViewState::SuccessShown);
                info!(?method, "contact submission accepted");
                Some(Effect::Deliver(submission))
            }
            Err(error) => {
                debug!(?method, %error, "contact submission rejected");
                self.clear_field_error(method);
                let timer = self.scheduler.schedule(
                    now,
                    ERROR_DISPLAY_WINDOW,
                    TimerKind::ClearFieldError(method),
                );
                *self.state.field_error_slot(method) = Some(FieldError { error, timer });
                None
            }
        }
    }

    fn clear_field_error(&mut self, method: ContactMethod) {
        if let Some(previous) = self.state.field_error_slot(method).take() {
            self.scheduler.cancel(previous.timer);
        }
    }

    fn clear_field_errors(&mut self) {
        for method in ContactMethod::ALL {
            self.clear_field_error(method);
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
