// ABOUTME: Film ETL library for gleaner: parses a ranked-films HTML table and exports CSV/JSON.
// ABOUTME: Fetching is left to the caller; everything here works on HTML text and file paths.

pub mod error;
pub mod export;
pub mod models;
pub mod parser;

pub use error::FilmError;
pub use export::{render_table, to_csv_string, to_json_string, write_csv, write_json};
pub use models::{Film, COLUMNS};
pub use parser::{parse_films, DEFAULT_ROW_LIMIT};
