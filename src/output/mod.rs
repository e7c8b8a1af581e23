//! Output formatting for CLI results

use std::path::Path;

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod structured;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;
}

impl<T: Tabled + Serialize> Formattable for [T] {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(structured::format_json(self)?),
            OutputFormat::Yaml => Ok(structured::format_yaml(self)?),
        }
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        self.as_slice().format(format)
    }
}

/// A single API record.
///
/// Tables are drawn from `view`'s field definitions, one row per field.
/// JSON and YAML carry the record exactly as the API returned it.
pub struct Detail<'a, R, D> {
    pub record: &'a R,
    pub view: D,
}

impl<'a, R, D> Detail<'a, R, D> {
    pub fn new(record: &'a R, view: D) -> Self {
        Self { record, view }
    }
}

impl<R: Serialize, D: Tabled> Formattable for Detail<'_, R, D> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_item(&self.view)),
            OutputFormat::Json => Ok(structured::format_json(self.record)?),
            OutputFormat::Yaml => Ok(structured::format_yaml(self.record)?),
        }
    }
}

/// Format data and write it to stdout, or to `destination` when given
pub fn print<T: Formattable + ?Sized>(
    data: &T,
    format: OutputFormat,
    destination: Option<&Path>,
) -> Result<()> {
    let output = data.format(format)?;
    match destination {
        Some(path) => {
            log::debug!("Writing output to {}", path.display());
            std::fs::write(path, format!("{}\n", output))?;
        }
        None => println!("{}", output),
    }
    Ok(())
}
