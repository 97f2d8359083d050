use crate::app::render;
use crate::config::cli::Command;
use crate::config::toml_config::{CatalogConfig, OutputFormat};
use crate::core::catalog::ItemCatalog;
use crate::domain::model::{Record, Scope};
use crate::utils::error::Result;
use std::io::Write;

/// Runs one command against the catalog and writes its result to `out`.
pub fn execute(
    command: &Command,
    catalog: &ItemCatalog,
    config: &CatalogConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let format = config.display.format;
    let columns = catalog.columns();
    match command {
        Command::Get { id, all: false } => match catalog.get_by_id(id) {
            Some(record) => render::write_records(out, columns, &[record], format),
            None if format == OutputFormat::Json => {
                render::write_records(out, columns, &[], format)
            }
            None => {
                writeln!(out, "No item with ID {}", id)?;
                Ok(())
            }
        },
        Command::Get { id, all: true } => {
            render::write_records(out, columns, &catalog.find_all_by_id(id), format)
        }
        Command::Search { name } => {
            render::write_records(out, columns, &catalog.search_by_name(name), format)
        }
        Command::Page { size, number } => {
            let size = size.unwrap_or(config.display.page_size);
            let page = catalog.page(size, *number)?;
            tracing::debug!(
                "Page {} (size {}) holds {} of {} items",
                page.number,
                page.size,
                page.records.len(),
                page.total_records
            );
            render::write_page(out, columns, &page, format)
        }
        Command::Filter { field, value } => {
            let matches: Vec<&Record> = catalog.filter_by_field(field, value);
            render::write_records(out, columns, &matches, format)
        }
        Command::Conditions { name } => {
            let scope = match name {
                Some(name) => Scope::FilteredByName(name),
                None => Scope::AllItems,
            };
            let percentages = catalog.condition_percentages(scope)?;
            render::write_percentages(out, &percentages, format)
        }
    }
}
