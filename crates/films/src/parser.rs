// ABOUTME: Ranked-films table parser: first tbody, td cells per row, first N non-empty rows.
// ABOUTME: Rank and year come from each cell's first child; the title is the stripped cell text.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::error::FilmError;
use crate::models::Film;

/// Rows kept from the table.
pub const DEFAULT_ROW_LIMIT: usize = 50;

static TBODY: Lazy<Selector> = Lazy::new(|| Selector::parse("tbody").expect("valid selector"));
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("valid selector"));
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("valid selector"));

/// Parses the first table body of `html` into at most `limit` films.
///
/// Rows without `td` cells (header rows) are skipped and do not count
/// toward the limit. Parsing stops once `limit` films are collected, so
/// malformed rows past the limit are never looked at.
pub fn parse_films(html: &str, limit: usize) -> Result<Vec<Film>, FilmError> {
    let doc = Html::parse_document(html);
    let tbody = doc.select(&TBODY).next().ok_or(FilmError::MissingTable)?;

    let mut films = Vec::with_capacity(limit.min(DEFAULT_ROW_LIMIT));
    for (idx, row) in tbody.select(&ROW).enumerate() {
        if films.len() >= limit {
            break;
        }
        let cells: Vec<ElementRef> = row.select(&CELL).collect();
        if cells.is_empty() {
            continue;
        }
        films.push(parse_row(idx + 1, &cells)?);
    }
    tracing::debug!(rows = films.len(), "parsed film table");
    Ok(films)
}

fn parse_row(row: usize, cells: &[ElementRef]) -> Result<Film, FilmError> {
    if cells.len() < 3 {
        return Err(FilmError::invalid_row(
            row,
            format!("expected 3 cells, found {}", cells.len()),
        ));
    }

    let rank_text = first_child_text(&cells[0]);
    let average_rank = rank_text
        .trim()
        .parse::<u32>()
        .map_err(|e| FilmError::invalid_row(row, format!("rank {:?}: {}", rank_text, e)))?;

    let year_text = first_child_text(&cells[2]);
    let year = year_text
        .trim()
        .parse::<i32>()
        .map_err(|e| FilmError::invalid_row(row, format!("year {:?}: {}", year_text, e)))?;

    Ok(Film {
        average_rank,
        film: stripped_text(&cells[1]),
        year,
    })
}

/// Text of the cell's first child node: the node itself if it is text, its
/// descendant text if it is an element.
fn first_child_text(cell: &ElementRef) -> String {
    let Some(child) = cell.children().next() else {
        return String::new();
    };
    if let Some(text) = child.value().as_text() {
        return (&**text).to_string();
    }
    ElementRef::wrap(child)
        .map(|el| el.text().collect())
        .unwrap_or_default()
}

/// Every text fragment trimmed, then joined without separators.
fn stripped_text(cell: &ElementRef) -> String {
    cell.text().map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(rows: &str) -> String {
        format!("<html><body><table><tbody>{rows}</tbody></table></body></html>")
    }

    #[test]
    fn test_parses_cells() {
        let html = table(
            r#"<tr><th>Average Rank</th><th>Film</th><th>Year</th></tr>
               <tr><td>1</td><td><a href="/wiki/The_Godfather">The Godfather</a></td><td>1972</td></tr>"#,
        );
        let films = parse_films(&html, DEFAULT_ROW_LIMIT).unwrap();
        assert_eq!(
            films,
            vec![Film {
                average_rank: 1,
                film: "The Godfather".into(),
                year: 1972,
            }]
        );
    }

    #[test]
    fn test_film_text_is_stripped_per_fragment() {
        let html = table("<tr><td>2</td><td> Citizen <i> Kane </i> </td><td>1941\n</td></tr>");
        let films = parse_films(&html, DEFAULT_ROW_LIMIT).unwrap();
        assert_eq!(films[0].film, "CitizenKane");
        assert_eq!(films[0].year, 1941);
    }

    #[test]
    fn test_missing_tbody() {
        let err = parse_films("<html><body><p>gone</p></body></html>", 50).unwrap_err();
        assert!(matches!(err, FilmError::MissingTable));
    }

    #[test]
    fn test_short_row_is_invalid() {
        let html = table("<tr><td>1</td><td>Only two</td></tr>");
        let err = parse_films(&html, 50).unwrap_err();
        assert!(matches!(err, FilmError::InvalidRow { row: 1, .. }));
    }

    #[test]
    fn test_non_numeric_rank_is_invalid() {
        let html = table("<tr><th>h</th></tr><tr><td>one</td><td>X</td><td>1999</td></tr>");
        let err = parse_films(&html, 50).unwrap_err();
        assert!(matches!(err, FilmError::InvalidRow { row: 2, .. }));
        assert!(err.to_string().contains("rank"));
    }

    #[test]
    fn test_rows_past_limit_are_not_parsed() {
        let html = table(
            "<tr><td>1</td><td>A</td><td>2000</td></tr>
             <tr><td>bad</td><td>B</td><td>x</td></tr>",
        );
        let films = parse_films(&html, 1).unwrap();
        assert_eq!(films.len(), 1);
    }
}
