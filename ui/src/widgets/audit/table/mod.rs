//! Users table for the audit page.
//!
//! - `columns`: column definitions and row heights
//! - `header`: sortable header cells
//! - `row`: data rows and the loading row

pub mod columns;
pub mod header;
pub mod row;

use audit_business::{AuditAction, AuditDisplay};
use egui::Ui;
use egui_extras::TableBuilder;

use columns::{COLUMN_COUNT, HEADER_HEIGHT, ROW_HEIGHT, table_column};

/// Renders the header, the current page of rows and, while loading, a spinner row.
pub fn render_table(ui: &mut Ui, display: &AuditDisplay, actions: &mut Vec<AuditAction>) {
    TableBuilder::new(ui)
        .id_salt("audit_users_table")
        .striped(true)
        .resizable(false)
        .columns(table_column(), COLUMN_COUNT)
        .header(HEADER_HEIGHT, |mut header| {
            header::render_table_header(&mut header, &display.headers, actions);
        })
        .body(|mut body| {
            for data in &display.rows {
                body.row(ROW_HEIGHT, |mut row| {
                    row::render_user_row(&mut row, data);
                });
            }
            if display.show_spinner {
                body.row(ROW_HEIGHT, |mut row| {
                    row::render_loading_row(&mut row);
                });
            }
        });
}
