//! Results table for the filtered division list.

use eframe::egui;
use shared::{
    domain::{Division, DivisionStatus, RecordId},
    format::{display_or_dash, format_currency, format_date, parent_organization_label},
};

pub const COLUMNS: [&str; 8] = [
    "Division ID",
    "Name",
    "Head",
    "Parent Organization",
    "Budget",
    "Status",
    "Created",
    "Actions",
];

#[derive(Debug, Clone, PartialEq)]
pub enum RowAction {
    Edit(RecordId),
    Delete(RecordId),
}

pub fn show(
    ui: &mut egui::Ui,
    divisions: &[&Division],
    actions_enabled: bool,
) -> Option<RowAction> {
    let mut action = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("divisions_table")
                .striped(true)
                .num_columns(COLUMNS.len())
                .spacing(egui::vec2(18.0, 10.0))
                .show(ui, |ui| {
                    for column in COLUMNS {
                        ui.label(egui::RichText::new(column).strong().small());
                    }
                    ui.end_row();

                    for division in divisions {
                        if let Some(row_action) = show_row(ui, division, actions_enabled) {
                            action = Some(row_action);
                        }
                        ui.end_row();
                    }
                });
        });

    action
}

fn show_row(ui: &mut egui::Ui, division: &Division, actions_enabled: bool) -> Option<RowAction> {
    ui.label(egui::RichText::new(&division.division_id).monospace());

    ui.vertical(|ui| {
        ui.label(egui::RichText::new(&division.name).strong());
        if let Some(description) = division.description.as_deref().filter(|d| !d.is_empty()) {
            ui.label(egui::RichText::new(description).small().weak());
        }
    });

    ui.label(display_or_dash(division.head.as_deref()));
    ui.label(parent_organization_label(
        division.parent_organization.as_deref(),
    ));
    ui.label(format_currency(division.budget));
    status_badge(ui, division.status);
    ui.label(format_date(division.created_at.as_deref()));

    let mut action = None;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(actions_enabled, egui::Button::new("✏ Edit"))
            .clicked()
        {
            action = Some(RowAction::Edit(division.id.clone()));
        }
        if ui
            .add_enabled(actions_enabled, egui::Button::new("🗑 Delete"))
            .clicked()
        {
            action = Some(RowAction::Delete(division.id.clone()));
        }
    });
    action
}

fn status_badge(ui: &mut egui::Ui, status: DivisionStatus) {
    let (fill, text) = match status {
        DivisionStatus::Active => (
            egui::Color32::from_rgb(220, 252, 231),
            egui::Color32::from_rgb(22, 101, 52),
        ),
        DivisionStatus::Inactive => (
            egui::Color32::from_rgb(254, 226, 226),
            egui::Color32::from_rgb(153, 27, 27),
        ),
    };

    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(status.label()).small().color(text));
        });
}
