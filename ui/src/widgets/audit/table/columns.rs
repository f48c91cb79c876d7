//! Column definitions for the audit users table.

use egui_extras::Column;

/// First name, last name, username, date.
pub const COLUMN_COUNT: usize = 4;
pub const MIN_COLUMN_WIDTH: f32 = 100.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 26.0;

/// All columns share the available width evenly.
#[inline]
pub fn table_column() -> Column {
    Column::remainder().at_least(MIN_COLUMN_WIDTH)
}
