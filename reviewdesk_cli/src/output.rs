use std::io::Write;

use anyhow::Result;
use reviewdesk_lib::data_table::{DataTable, PaginationFooter, TableBody, TableState};
use reviewdesk_lib::form_field::{FieldPart, FormFieldLayout};
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

/// One labelled value of a record shown vertically.
#[derive(Tabled, Serialize, Debug, PartialEq, Eq)]
pub struct FieldRow {
    #[tabled(rename = "Field")]
    #[serde(rename = "Field")]
    pub field: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    pub value: String,
}

impl FieldRow {
    pub fn new(field: &str, value: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

// -- Table rendering --

pub fn render_body(body: &TableBody, markdown: bool) -> String {
    let mut builder = Builder::default();
    builder.push_record(body.headers.iter().cloned());
    for row in &body.rows {
        builder.push_record(row.iter().cloned());
    }
    let mut table = builder.build();
    if markdown {
        table.with(Style::markdown());
    }
    table.to_string()
}

pub fn render_fields(rows: &[FieldRow], markdown: bool) -> String {
    let mut table = Table::new(rows);
    if markdown {
        table.with(Style::markdown());
    }
    table.to_string()
}

// -- CSV output --

pub fn write_body_csv<W: Write>(body: &TableBody, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&body.headers)?;
    for row in &body.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_fields_csv<W: Write>(rows: &[FieldRow], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- Combined printers --

/// Prints one page of a list. JSON gets the raw items; the other formats get
/// the table's rendered cells. The pagination footer goes to stderr.
pub fn print_list<T: Serialize>(
    table: &DataTable<'_, T>,
    items: &[T],
    format: &OutputFormat,
) -> Result<()> {
    if *format == OutputFormat::Json {
        print_json(&items);
        return Ok(());
    }

    match table.state() {
        TableState::Loading => eprintln!("Loading..."),
        TableState::Empty(message) => println!("{}", message),
        TableState::Rows => {
            let body = table.body();
            match format {
                OutputFormat::Csv => write_body_csv(&body, std::io::stdout())?,
                OutputFormat::Markdown => println!("{}", render_body(&body, true)),
                _ => println!("{}", render_body(&body, false)),
            }
            if let Some(footer) = table.footer() {
                eprintln!("{}", footer_hint(&footer));
            }
        }
    }
    Ok(())
}

fn footer_hint(footer: &PaginationFooter) -> String {
    let mut hint = footer.label.clone();
    let mut moves = Vec::new();
    if !footer.prev_disabled {
        moves.push("previous");
    }
    if !footer.next_disabled {
        moves.push("next");
    }
    if !moves.is_empty() {
        hint.push_str(&format!(" (--page for {})", moves.join("/")));
    }
    hint
}

/// Prints a record vertically; JSON gets `value` itself.
pub fn print_record<T: Serialize>(value: &T, rows: &[FieldRow], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Csv => write_fields_csv(rows, std::io::stdout())?,
        OutputFormat::Markdown => println!("{}", render_fields(rows, true)),
        OutputFormat::Table => println!("{}", render_fields(rows, false)),
    }
    Ok(())
}

// -- Form fields --

/// Plain-text rendering of a composed form field, used for input errors.
pub fn render_form_field(layout: &FormFieldLayout) -> String {
    let mut lines = Vec::new();
    for part in &layout.parts {
        match part {
            FieldPart::Label {
                text,
                visually_hidden,
                ..
            } if !visually_hidden => lines.push(format!("{}:", text)),
            FieldPart::Label { .. } => {}
            FieldPart::Description { text, .. } => lines.push(format!("  {}", text)),
            FieldPart::Input { markup } => lines.push(format!("  > {}", markup)),
            FieldPart::Error { text, .. } => lines.push(format!("  ! {}", text)),
        }
    }
    lines.join("\n")
}
