//! Events flowing from the backend worker back to the UI thread.

use shared::{domain::ContactMethod, error::SinkError};

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    Delivered { method: ContactMethod },
    DeliveryFailed(SinkError),
}
