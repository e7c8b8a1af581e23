//! Table output formatting

use tabled::{
    Table, Tabled,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Format a single record as a two-column table of field name and value
pub fn format_item<T: Tabled>(item: &T) -> String {
    let mut builder = Builder::default();
    for (header, value) in T::headers().into_iter().zip(item.fields()) {
        builder.push_record([header.into_owned(), value.into_owned()]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}
