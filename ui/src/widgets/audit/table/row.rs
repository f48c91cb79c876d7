//! Row rendering for the audit users table.

use audit_business::audit::RowDisplay;
use egui::RichText;
use egui_extras::TableRow;

use super::columns::COLUMN_COUNT;

#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, data: &RowDisplay) {
    row.col(|ui| {
        ui.label(&data.first_name);
    });
    row.col(|ui| {
        ui.label(&data.last_name);
    });
    row.col(|ui| {
        ui.label(&data.username);
    });
    row.col(|ui| {
        ui.label(RichText::new(&data.created).monospace());
    });
}

/// Spinner in the first column, remaining cells left blank.
#[inline]
pub fn render_loading_row(row: &mut TableRow<'_, '_>) {
    row.col(|ui| {
        ui.spinner();
    });
    for _ in 1..COLUMN_COUNT {
        row.col(|_| {});
    }
}
