//! Create/edit form and delete confirmation windows.

use client_core::{DivisionDraft, FormDialog, PendingOperation, ViewState};
use eframe::egui;
use shared::domain::DivisionStatus;

pub const DELETE_CONFIRMATION: &str =
    "Are you sure you want to delete this division? This action cannot be undone.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Submit,
    CloseForm,
    ConfirmDelete,
    CancelDelete,
}

pub fn form_title(form: &FormDialog) -> &'static str {
    match form {
        FormDialog::Edit(_) => "Edit Division",
        _ => "Create Division",
    }
}

pub fn show_form(ctx: &egui::Context, state: &mut ViewState) -> Option<DialogAction> {
    if !state.form().is_open() {
        return None;
    }
    let title = form_title(state.form());
    let saving = state.pending() == Some(PendingOperation::Save);
    let mut action = None;
    let mut open = true;

    egui::Window::new(title)
        .id(egui::Id::new("division_form_window"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .open(&mut open)
        .show(ctx, |ui| {
            ui.set_min_width(420.0);
            ui.add_enabled_ui(!saving, |ui| {
                draft_fields(ui, state.draft_mut());
            });
            ui.separator();
            ui.horizontal(|ui| {
                let submit_label = if saving { "Saving..." } else { title };
                if ui
                    .add_enabled(!saving, egui::Button::new(submit_label))
                    .clicked()
                {
                    action = Some(DialogAction::Submit);
                }
                if ui.button("Cancel").clicked() {
                    action = Some(DialogAction::CloseForm);
                }
                if saving {
                    ui.spinner();
                }
            });
        });

    if !open {
        action = Some(DialogAction::CloseForm);
    }
    action
}

fn draft_fields(ui: &mut egui::Ui, draft: &mut DivisionDraft) {
    egui::Grid::new("division_form_fields")
        .num_columns(2)
        .spacing(egui::vec2(12.0, 8.0))
        .show(ui, |ui| {
            text_row(ui, "Division ID *", "DIV-001", &mut draft.division_id);
            text_row(ui, "Name *", "Division name", &mut draft.name);

            ui.label("Description");
            ui.add(
                egui::TextEdit::multiline(&mut draft.description)
                    .hint_text("What this division is responsible for")
                    .desired_rows(3)
                    .desired_width(280.0),
            );
            ui.end_row();

            text_row(ui, "Head", "Division head", &mut draft.head);
            text_row(
                ui,
                "Parent Organization",
                "Global Corp",
                &mut draft.parent_organization,
            );
            text_row(ui, "Budget", "0.00", &mut draft.budget);

            ui.label("Status");
            egui::ComboBox::from_id_salt("division_form_status")
                .selected_text(draft.status.label())
                .show_ui(ui, |ui| {
                    for status in DivisionStatus::ALL {
                        ui.selectable_value(&mut draft.status, status, status.label());
                    }
                });
            ui.end_row();
        });
}

fn text_row(ui: &mut egui::Ui, label: &str, hint: &str, value: &mut String) {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(280.0),
    );
    ui.end_row();
}

pub fn show_confirm(ctx: &egui::Context, state: &ViewState) -> Option<DialogAction> {
    if !state.confirm().is_open() {
        return None;
    }
    let deleting = state.pending() == Some(PendingOperation::Delete);
    let mut action = None;

    egui::Window::new("Delete Division")
        .id(egui::Id::new("division_confirm_window"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_max_width(360.0);
            ui.label(DELETE_CONFIRMATION);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let delete = egui::Button::new(
                    egui::RichText::new("Delete").color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_rgb(185, 28, 28));
                if ui.add_enabled(!deleting, delete).clicked() {
                    action = Some(DialogAction::ConfirmDelete);
                }
                if ui
                    .add_enabled(!deleting, egui::Button::new("Cancel"))
                    .clicked()
                {
                    action = Some(DialogAction::CancelDelete);
                }
                if deleting {
                    ui.spinner();
                }
            });
        });

    action
}
