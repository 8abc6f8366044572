//! UI-agnostic core of the contact flow: sanitizers, validator, timers, the
//! view state machine and its pure render function.

pub mod controller;
pub mod sanitize;
pub mod scheduler;
pub mod sink;
pub mod state;
pub mod validate;
pub mod view;

pub use controller::{
    Controller, Effect, FlowEvent, Key, ERROR_DISPLAY_WINDOW, SUCCESS_DISPLAY_WINDOW,
};
pub use sink::{LogSink, SubmissionSink};
pub use state::{FlowState, ViewState};
pub use view::{render, FocusTarget, ViewDescription};
