//! Header rendering for the audit users table.

use audit_business::AuditAction;
use audit_business::audit::HeaderCell;
use egui::{Button, RichText, Ui};
use egui_extras::TableRow;

/// One cell per header; sortable headers are buttons that emit `AuditAction::Sort`.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    cells: &[HeaderCell],
    actions: &mut Vec<AuditAction>,
) {
    for cell in cells {
        header.col(|ui| {
            if let Some(action) = render_header_cell(ui, cell) {
                actions.push(action);
            }
        });
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, cell: &HeaderCell) -> Option<AuditAction> {
    match cell.sort {
        Some(column) => {
            let clicked = ui
                .add(Button::new(RichText::new(&cell.label).strong()).frame(false))
                .on_hover_text("Sort")
                .clicked();
            clicked.then_some(AuditAction::Sort(column))
        }
        None => {
            ui.strong(&cell.label);
            None
        }
    }
}
