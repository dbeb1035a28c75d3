// src/export.rs
use std::io::{self, Write};

use crate::config::options::{ExportOptions, OutputFormat};
use crate::data::DataSet;

/* ---------------- Row writers ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Fields separated by single spaces, no quoting.
pub fn write_plain_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    writeln!(w, "{}", row.join(" "))
}

fn write_table<W: Write>(mut w: W, headers: Option<&[String]>, rows: &[Vec<String>]) -> io::Result<()> {
    let cols = headers
        .map(<[String]>::len)
        .into_iter()
        .chain(rows.iter().map(Vec::len))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; cols];
    for row in headers.into_iter().chain(rows.iter().map(Vec::as_slice)) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |w: &mut W, row: &[String]| -> io::Result<()> {
        let cells: Vec<String> = (0..cols)
            .map(|i| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                format!("{cell:<width$}", width = widths[i])
            })
            .collect();
        writeln!(w, "{}", cells.join(" | ").trim_end())
    };

    if let Some(h) = headers {
        line(&mut w, h)?;
        let rule: Vec<String> = widths.iter().map(|n| "-".repeat(*n)).collect();
        writeln!(w, "{}", rule.join("-+-"))?;
    }
    for row in rows {
        line(&mut w, row)?;
    }
    Ok(())
}

/* ---------------- Whole datasets ---------------- */

/// Write `ds` in the requested format. Headers are emitted only when asked for.
pub fn write_dataset<W: Write>(mut w: W, ds: &DataSet, opts: &ExportOptions) -> io::Result<()> {
    let headers = opts.include_headers.then_some(ds.headers.as_slice());

    match opts.format {
        OutputFormat::Plain => {
            for row in headers.into_iter().chain(ds.rows.iter().map(Vec::as_slice)) {
                write_plain_row(&mut w, row)?;
            }
        }
        OutputFormat::Csv | OutputFormat::Tsv => {
            let sep = opts.format.delim().unwrap_or(',');
            for row in headers.into_iter().chain(ds.rows.iter().map(Vec::as_slice)) {
                write_row(&mut w, row, sep)?;
            }
        }
        OutputFormat::Table => write_table(&mut w, headers, &ds.rows)?,
    }
    w.flush()
}
