// ABOUTME: Film exports: CSV with header row, JSON array with 4-space indent, and a console table.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::FilmError;
use crate::models::{Film, COLUMNS};

/// CSV with an `Average Rank,Film,Year` header row.
pub fn to_csv_string(films: &[Film]) -> Result<String, FilmError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for film in films {
        writer.serialize(film)?;
    }
    if films.is_empty() {
        writer.write_record(COLUMNS)?;
    }
    let bytes = writer.into_inner().map_err(|e| FilmError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| FilmError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// JSON array of records, indented with four spaces.
pub fn to_json_string(films: &[Film]) -> Result<String, FilmError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    films.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| FilmError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

pub fn write_csv(films: &[Film], path: &Path) -> Result<(), FilmError> {
    fs::write(path, to_csv_string(films)?)?;
    Ok(())
}

pub fn write_json(films: &[Film], path: &Path) -> Result<(), FilmError> {
    fs::write(path, to_json_string(films)?)?;
    Ok(())
}

/// Right-aligned text table of the films, one line per row, no index column.
pub fn render_table(films: &[Film]) -> String {
    let rows: Vec<[String; 3]> = films
        .iter()
        .map(|f| [f.average_rank.to_string(), f.film.clone(), f.year.to_string()])
        .collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let format_line = |cells: [&str; 3]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{:>w$}", cell, w = w))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut lines = vec![format_line(COLUMNS)];
    for row in &rows {
        lines.push(format_line([row[0].as_str(), row[1].as_str(), row[2].as_str()]));
    }
    lines.join("\n")
}
