//! UI layer for the desktop frontend: app shell and the panels it draws.

pub mod app;
pub mod panels;

pub use app::ContactFlowApp;
