//! One function per panel of the flow. Each draws from the view description
//! and records the flow events the user triggered this frame.

use eframe::egui;
use flow_core::{
    view::{FormView, SuccessView},
    FlowEvent, FocusTarget,
};
use shared::domain::ContactMethod;

const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(244, 67, 54);
const SUCCESS_GREEN: egui::Color32 = egui::Color32::from_rgb(76, 175, 80);

pub fn show_banner(ui: &mut egui::Ui, message: &str) {
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, ERROR_RED))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(message).color(ERROR_RED));
        });
    ui.add_space(8.0);
}

pub fn show_choice_buttons(
    ui: &mut egui::Ui,
    focus: Option<FocusTarget>,
    events: &mut Vec<FlowEvent>,
) {
    ui.heading("Can I get your contact?");
    ui.add_space(16.0);
    ui.horizontal(|ui| {
        let accept = ui.button("Yes 😊");
        if focus == Some(FocusTarget::AcceptButton) {
            accept.request_focus();
        }
        if accept.clicked() {
            events.push(FlowEvent::Accept);
        }
        if ui.button("No").clicked() {
            events.push(FlowEvent::Reject);
        }
    });
}

pub fn show_rejection_modal(ctx: &egui::Context, events: &mut Vec<FlowEvent>) {
    let modal = egui::Modal::new(egui::Id::new("rejection_modal")).show(ctx, |ui| {
        ui.set_width(280.0);
        ui.heading("No worries!");
        ui.label("Thanks for letting me know. Have a great day.");
        ui.add_space(12.0);
        ui.button("Close").clicked()
    });

    if modal.inner {
        events.push(FlowEvent::CloseModal);
    } else if modal.backdrop_response.clicked() {
        events.push(FlowEvent::OverlayBackgroundClicked);
    }
}

pub fn show_contact_form(
    ui: &mut egui::Ui,
    form: &FormView,
    focus: Option<FocusTarget>,
    events: &mut Vec<FlowEvent>,
) {
    ui.heading("How can I reach you?");
    ui.add_space(8.0);

    let mut selected = form.selected;
    ui.horizontal(|ui| {
        for method in ContactMethod::ALL {
            ui.radio_value(
                &mut selected,
                method,
                format!("{} {}", method.icon(), method.label()),
            );
        }
    });
    if selected != form.selected {
        events.push(FlowEvent::SelectMethod(selected));
    }

    let input = &form.input;
    let mut value = input.value.clone();
    let edit = ui.add(
        egui::TextEdit::singleline(&mut value)
            .hint_text(input.placeholder)
            .desired_width(260.0),
    );
    if focus == Some(FocusTarget::Input(input.method)) {
        edit.request_focus();
    }
    if edit.changed() {
        events.push(FlowEvent::InputChanged {
            method: input.method,
            value,
        });
    }
    if let Some(error) = &input.error {
        ui.label(egui::RichText::new(error).color(ERROR_RED).small());
    }

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("Back").clicked() {
            events.push(FlowEvent::Back);
        }
        if ui.button("Submit").clicked() {
            events.push(FlowEvent::Submit);
        }
    });
}

pub fn show_success(ui: &mut egui::Ui, success: &SuccessView, events: &mut Vec<FlowEvent>) {
    ui.heading(egui::RichText::new("Thank you!").color(SUCCESS_GREEN));
    ui.add_space(8.0);
    ui.label(format!("{} {}", success.icon, success.text));
    ui.small("Taking you back in a few seconds…");
    ui.add_space(12.0);
    if ui.button("Done").clicked() {
        events.push(FlowEvent::Back);
    }
}
