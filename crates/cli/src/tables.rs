use comfy_table::{
    ContentArrangement, Row, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL_CONDENSED,
};

/// Rounded, condensed table that wraps to the terminal width
pub(crate) struct PackageTable(Table);

impl PackageTable {
    pub(crate) fn with_header(header: impl Into<Row>) -> Self {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(header);
        Self(table)
    }

    pub(crate) fn add_row(&mut self, row: impl Into<Row>) {
        self.0.add_row(row);
    }

    pub(crate) fn render(&self) -> String {
        self.0.to_string()
    }
}
