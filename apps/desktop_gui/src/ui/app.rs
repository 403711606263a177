//! Division management screen.

use std::time::Duration;

use client_core::ViewState;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent, orchestration::dispatch_backend_command, reducer::apply_ui_event,
};
use crate::ui::{
    dialogs::{self, DialogAction},
    filter_bar,
    table::{self, RowAction},
};

pub const APP_TITLE: &str = "Division Management";
const APP_SUBTITLE: &str = "Manage organizational divisions, their leadership and budgets";

pub struct DivisionAdminApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: ViewState,
    status: String,
    status_dropdown_open: bool,
}

impl DivisionAdminApp {
    /// Builds the screen and queues the initial load.
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            state: ViewState::new(),
            status: String::new(),
            status_dropdown_open: false,
        };
        app.reload();
        app
    }

    fn reload(&mut self) {
        let request = self.state.begin_load();
        dispatch_backend_command(&self.cmd_tx, request, &mut self.state);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_ui_event(&mut self.state, &mut self.status, event);
        }
    }

    fn handle_row_action(&mut self, action: RowAction) {
        match action {
            RowAction::Edit(id) => {
                self.state.open_edit(&id);
            }
            RowAction::Delete(id) => self.state.request_delete(id),
        }
    }

    fn handle_dialog_action(&mut self, action: DialogAction) {
        let request = match action {
            DialogAction::Submit => self.state.submit(),
            DialogAction::ConfirmDelete => self.state.confirm_delete(),
            DialogAction::CloseForm => {
                self.state.close_form();
                return;
            }
            DialogAction::CancelDelete => {
                self.state.cancel_delete();
                return;
            }
        };

        match request {
            Ok(request) => dispatch_backend_command(&self.cmd_tx, request, &mut self.state),
            Err(err) => tracing::debug!(%err, "dialog action refused"),
        }
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading(egui::RichText::new(APP_TITLE).strong());
                ui.label(egui::RichText::new(APP_SUBTITLE).weak());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("➕ Create Division").clicked() {
                    self.state.open_create();
                }
                if ui
                    .add_enabled(!self.state.is_loading(), egui::Button::new("⟳ Refresh"))
                    .clicked()
                {
                    self.reload();
                }
            });
        });
    }

    fn show_error_banner(&mut self, ui: &mut egui::Ui) {
        let Some(message) = self.state.error().map(str::to_owned) else {
            return;
        };

        egui::Frame::NONE
            .fill(egui::Color32::from_rgb(111, 53, 53))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(message).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.state.dismiss_error();
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    fn show_results_card(&mut self, ui: &mut egui::Ui) -> Option<RowAction> {
        let visible = self.state.filtered();
        let actions_enabled = !self.state.is_busy();
        let empty_message = self.state.empty_state_message();
        let mut action = None;

        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(
                    egui::RichText::new(format!("Divisions ({})", visible.len()))
                        .strong()
                        .size(16.0),
                );
                ui.separator();
                if visible.is_empty() {
                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(empty_message).weak());
                    });
                    ui.add_space(24.0);
                } else {
                    action = table::show(ui, &visible, actions_enabled);
                }
            });

        action
    }
}

impl eframe::App for DivisionAdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        if self.state.is_loading() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.add(egui::Spinner::new().size(48.0));
                });
            });
            ctx.request_repaint_after(Duration::from_millis(16));
            return;
        }

        egui::TopBottomPanel::bottom("status_strip")
            .resizable(false)
            .show(ctx, |ui| {
                ui.small(egui::RichText::new(&self.status).weak());
            });

        let mut row_action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_header(ui);
            ui.add_space(12.0);
            self.show_error_banner(ui);
            filter_bar::show(ui, &mut self.state, &mut self.status_dropdown_open);
            ui.add_space(12.0);
            row_action = self.show_results_card(ui);
        });
        if let Some(action) = row_action {
            self.handle_row_action(action);
        }

        if let Some(action) = dialogs::show_form(ctx, &mut self.state) {
            self.handle_dialog_action(action);
        }
        if let Some(action) = dialogs::show_confirm(ctx, &self.state) {
            self.handle_dialog_action(action);
        }

        if self.state.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
