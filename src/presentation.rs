// src/presentation.rs
use std::io::{self, Write};

use anyhow::Result;
use chrono::Local;
use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use pdirfile_core::{DirectoryListing, EntryDescriptor};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Jsonl,
}

/// Print `listing` to stdout in `format`.
///
/// # Errors
///
/// Returns `Err` when serialization or writing to stdout fails.
pub fn print_listing(listing: &DirectoryListing, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_listing(&mut out, listing, format)?;
    out.flush()?;
    Ok(())
}

/// # Errors
///
/// Returns `Err` when serialization or writing fails.
pub fn write_listing<W: Write>(out: &mut W, listing: &DirectoryListing, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(out, listing.entries()),
        OutputFormat::Json => write_json(out, listing.entries()),
        OutputFormat::Jsonl => write_jsonl(out, listing.entries()),
    }
}

fn write_table<W: Write>(out: &mut W, entries: &[EntryDescriptor]) -> Result<()> {
    if entries.is_empty() {
        writeln!(out, "(no entries)")?;
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED).set_header(["MODIFIED", "TYPE", "PATH"]);
    for entry in entries {
        let kind = if entry.is_directory() { "dir" } else { "file" };
        table.add_row([local_time(entry), kind.to_owned(), entry.full_path().to_owned()]);
    }
    writeln!(out, "{table}")?;
    writeln!(out, "{} entries", entries.len())?;
    Ok(())
}

fn write_json<W: Write>(out: &mut W, entries: &[EntryDescriptor]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, entries)?;
    writeln!(out)?;
    Ok(())
}

fn write_jsonl<W: Write>(out: &mut W, entries: &[EntryDescriptor]) -> Result<()> {
    for entry in entries {
        serde_json::to_writer(&mut *out, entry)?;
        writeln!(out)?;
    }
    Ok(())
}

fn local_time(entry: &EntryDescriptor) -> String {
    entry.modified_at().with_timezone(&Local).format(TIME_FORMAT).to_string()
}
