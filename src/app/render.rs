use crate::config::toml_config::OutputFormat;
use crate::core::pagination::Page;
use crate::domain::model::{
    ConditionPercentages, Record, FIELD_AMOUNT, FIELD_CONDITION, FIELD_ID, FIELD_NAME, FIELD_TYPE,
};
use crate::utils::error::Result;
use comfy_table::{Cell, ColumnConstraint, Table, Width};
use std::io::Write;

pub const NO_ITEMS: &str = "No items to display.";

fn min_width(field: &str) -> Option<u16> {
    match field {
        FIELD_ID => Some(5),
        FIELD_NAME => Some(15),
        FIELD_TYPE => Some(12),
        FIELD_CONDITION => Some(10),
        FIELD_AMOUNT => Some(8),
        _ => None,
    }
}

/// One column per name in `columns`; cells a record lacks are left blank.
pub fn records_table(columns: &[String], records: &[&Record]) -> Table {
    let mut table = Table::new();
    if columns.is_empty() {
        return table;
    }

    let headers: Vec<&str> = columns.iter().map(String::as_str).collect();
    table.set_header(headers.iter().map(|h| Cell::new(h)).collect::<Vec<_>>());
    table.set_constraints(headers.iter().map(|h| match min_width(h) {
        Some(width) => ColumnConstraint::LowerBoundary(Width::Fixed(width)),
        None => ColumnConstraint::ContentWidth,
    }));

    for record in records {
        table.add_row(
            headers
                .iter()
                .map(|h| Cell::new(record.get(h).unwrap_or("")))
                .collect::<Vec<_>>(),
        );
    }
    table
}

pub fn write_records(
    out: &mut dyn Write,
    columns: &[String],
    records: &[&Record],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
        OutputFormat::Table if records.is_empty() => writeln!(out, "{}", NO_ITEMS)?,
        OutputFormat::Table => writeln!(out, "{}", records_table(columns, records))?,
    }
    Ok(())
}

pub fn write_page(
    out: &mut dyn Write,
    columns: &[String],
    page: &Page<'_>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, page)?;
            writeln!(out)?;
        }
        OutputFormat::Table if page.is_empty() => writeln!(out, "{}", NO_ITEMS)?,
        OutputFormat::Table => {
            let records: Vec<&Record> = page.records.iter().collect();
            writeln!(out, "{}", records_table(columns, &records))?;
            writeln!(out, "Page {} of {}", page.number, page.total_pages())?;
        }
    }
    Ok(())
}

pub fn write_percentages(
    out: &mut dyn Write,
    percentages: &ConditionPercentages,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, percentages)?;
            writeln!(out)?;
        }
        OutputFormat::Table if percentages.is_empty() => writeln!(out, "{}", NO_ITEMS)?,
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_header(vec!["Condition", "Percentage"]);
            for (condition, percentage) in percentages {
                table.add_row(vec![
                    Cell::new(condition.as_str()),
                    Cell::new(format!("{:.2}%", percentage)),
                ]);
            }
            writeln!(out, "{}", table)?;
        }
    }
    Ok(())
}
