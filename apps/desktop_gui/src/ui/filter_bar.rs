//! Search input and the status filter dropdown.

use client_core::ViewState;
use eframe::egui;
use shared::domain::StatusFilter;

pub const SEARCH_PLACEHOLDER: &str = "Search divisions by name, description, or head...";
const DROPDOWN_WIDTH: f32 = 150.0;

/// True when a pointer press landed outside every region belonging to the
/// open dropdown (its toggle button and its popup).
pub fn should_close_dropdown(pressed_at: Option<egui::Pos2>, regions: &[egui::Rect]) -> bool {
    match pressed_at {
        Some(pos) => !regions.iter().any(|region| region.contains(pos)),
        None => false,
    }
}

/// Any pick closes the dropdown, including one that re-selects the current
/// filter.
pub fn select_status(state: &mut ViewState, open: &mut bool, choice: StatusFilter) {
    state.set_status_filter(choice);
    *open = false;
}

pub fn show(ui: &mut egui::Ui, state: &mut ViewState, dropdown_open: &mut bool) {
    ui.horizontal(|ui| {
        let search_width = (ui.available_width() - DROPDOWN_WIDTH - 12.0).max(160.0);
        ui.add_sized(
            [search_width, 30.0],
            egui::TextEdit::singleline(state.search_term_mut())
                .id_salt("division_search")
                .hint_text(SEARCH_PLACEHOLDER),
        );
        show_status_dropdown(ui, state, dropdown_open);
    });
}

fn show_status_dropdown(ui: &mut egui::Ui, state: &mut ViewState, open: &mut bool) {
    let toggle = ui.add_sized(
        [DROPDOWN_WIDTH, 30.0],
        egui::Button::new(format!("{}  ⏷", state.status_filter().label())),
    );
    if toggle.clicked() {
        *open = !*open;
    }
    if !*open {
        return;
    }

    let mut selected = state.status_filter();
    let mut picked = None;
    let popup = egui::Area::new(egui::Id::new("status_filter_dropdown"))
        .order(egui::Order::Foreground)
        .fixed_pos(toggle.rect.left_bottom() + egui::vec2(0.0, 4.0))
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(DROPDOWN_WIDTH - 12.0);
                for option in StatusFilter::OPTIONS {
                    let text = if option == selected {
                        format!("✔ {}", option.label())
                    } else {
                        format!("    {}", option.label())
                    };
                    if ui.selectable_value(&mut selected, option, text).clicked() {
                        picked = Some(option);
                    }
                }
            });
        });

    if let Some(choice) = picked {
        select_status(state, open, choice);
        return;
    }

    let pressed_at = ui.ctx().input(|i| {
        if i.pointer.any_pressed() {
            i.pointer.interact_pos()
        } else {
            None
        }
    });
    if should_close_dropdown(pressed_at, &[toggle.rect, popup.response.rect]) {
        *open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::DivisionStatus;

    fn regions() -> [egui::Rect; 2] {
        [
            egui::Rect::from_min_size(egui::pos2(100.0, 10.0), egui::vec2(150.0, 30.0)),
            egui::Rect::from_min_size(egui::pos2(100.0, 44.0), egui::vec2(150.0, 90.0)),
        ]
    }

    #[test]
    fn no_press_keeps_dropdown_open() {
        assert!(!should_close_dropdown(None, &regions()));
    }

    #[test]
    fn press_inside_toggle_or_popup_keeps_dropdown_open() {
        assert!(!should_close_dropdown(Some(egui::pos2(120.0, 20.0)), &regions()));
        assert!(!should_close_dropdown(Some(egui::pos2(200.0, 100.0)), &regions()));
    }

    #[test]
    fn picking_the_current_filter_still_closes_dropdown() {
        let mut state = ViewState::new();
        state.set_status_filter(StatusFilter::Only(DivisionStatus::Active));
        let mut open = true;

        select_status(&mut state, &mut open, StatusFilter::Only(DivisionStatus::Active));

        assert!(!open);
        assert_eq!(
            state.status_filter(),
            StatusFilter::Only(DivisionStatus::Active)
        );

        open = true;
        select_status(&mut state, &mut open, StatusFilter::All);
        assert!(!open);
        assert_eq!(state.status_filter(), StatusFilter::All);
    }

    #[test]
    fn press_outside_every_region_closes_dropdown() {
        assert!(should_close_dropdown(Some(egui::pos2(20.0, 20.0)), &regions()));
        assert!(should_close_dropdown(Some(egui::pos2(200.0, 400.0)), &regions()));
        assert!(should_close_dropdown(Some(egui::pos2(0.0, 0.0)), &[]));
    }
}
