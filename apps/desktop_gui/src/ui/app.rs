use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use flow_core::{Controller, Effect, FlowEvent, FocusTarget, Key, ViewDescription, ViewState};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent, input::key_events, orchestration::dispatch_backend_command,
};
use crate::ui::panels;

pub struct ContactFlowApp {
    controller: Controller,
    started: Instant,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    applied_focus: Option<FocusTarget>,
}

impl ContactFlowApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            controller: Controller::new(),
            started: Instant::now(),
            cmd_tx,
            ui_rx,
            applied_focus: None,
        }
    }

    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => tracing::info!("{message}"),
                UiEvent::Delivered { method } => {
                    tracing::debug!(?method, "submission delivered")
                }
                UiEvent::DeliveryFailed(err) => {
                    let now = self.now();
                    self.controller.delivery_failed(&err, now);
                }
            }
        }
    }

    fn dispatch(&mut self, event: FlowEvent) {
        let now = self.now();
        let submitting = matches!(event, FlowEvent::Submit | FlowEvent::KeyPressed(Key::Enter));
        let effects = self.controller.handle(event, now);

        // A single-line edit gives up focus on Enter; hand it back after a rejected submit.
        if submitting && self.controller.state().view() == ViewState::ContactFormOpen {
            self.applied_focus = None;
        }

        for effect in effects {
            match effect {
                Effect::Deliver(submission) => {
                    let cmd = BackendCommand::Deliver(submission);
                    if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd) {
                        tracing::warn!("could not queue submission: {err}");
                        self.controller.delivery_failed(&err, now);
                    }
                }
            }
        }
    }

    /// Focus is requested once per change so the user can tab away freely.
    fn pending_focus(&mut self, view: &ViewDescription) -> Option<FocusTarget> {
        if view.focus == self.applied_focus {
            return None;
        }
        self.applied_focus = view.focus;
        view.focus
    }

    fn show_flow(&mut self, ctx: &egui::Context, view: &ViewDescription) -> Vec<FlowEvent> {
        let mut events = ctx.input(|i| key_events(&i.events));
        let focus = self.pending_focus(view);

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut body = |ui: &mut egui::Ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    if let Some(message) = &view.banner {
                        panels::show_banner(ui, message);
                    }
                    if view.buttons_visible {
                        panels::show_choice_buttons(ui, focus, &mut events);
                    }
                    if let Some(form) = &view.contact_form {
                        panels::show_contact_form(ui, form, focus, &mut events);
                    }
                    if let Some(success) = &view.success {
                        panels::show_success(ui, success, &mut events);
                    }
                });
            };

            if view.scroll_locked {
                body(ui);
            } else {
                egui::ScrollArea::vertical().show(ui, |ui| body(ui));
            }
        });

        if view.rejection_modal_visible {
            panels::show_rejection_modal(ctx, &mut events);
        }

        events
    }
}

impl eframe::App for ContactFlowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        let now = self.now();
        self.controller.advance(now);

        let view = self.controller.render();
        for event in self.show_flow(ctx, &view) {
            self.dispatch(event);
        }

        if let Some(deadline) = self.controller.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_sub(self.now()));
        }
        // Backend events arrive off-thread; poll for them at a relaxed pace.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
