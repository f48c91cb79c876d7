use audit_business::{AuditAction, AuditDisplay, TimeFormat};
use egui::{ComboBox, TextEdit, Ui};

const SEARCH_WIDTH: f32 = 320.0;

/// Heading, search box and date/time format selector on one row.
pub fn render_toolbar(ui: &mut Ui, display: &AuditDisplay, actions: &mut Vec<AuditAction>) {
    ui.horizontal(|ui| {
        ui.heading(display.heading);
        ui.add_space(16.0);

        let mut text = display.search.text.clone();
        let search = ui.add(
            TextEdit::singleline(&mut text)
                .hint_text(display.search.placeholder)
                .desired_width(SEARCH_WIDTH),
        );
        if search.changed() {
            actions.push(AuditAction::Search(text));
        }

        ui.add_space(16.0);
        ui.label(display.format.label);

        let mut selected = display.format.selected;
        ComboBox::from_id_salt("date_time_format")
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for option in display.format.options {
                    ui.selectable_value(&mut selected, option, option.label());
                }
            });
        if selected != display.format.selected {
            actions.push(AuditAction::SetTimeFormat(selected));
        }
    });
}
