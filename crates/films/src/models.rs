// ABOUTME: Film record produced by the table parser, with the exported column names.

use serde::{Deserialize, Serialize};

/// One ranked film. Field names match the exported CSV header and JSON keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    #[serde(rename = "Average Rank")]
    pub average_rank: u32,
    #[serde(rename = "Film")]
    pub film: String,
    #[serde(rename = "Year")]
    pub year: i32,
}

/// Column headers in output order.
pub const COLUMNS: [&str; 3] = ["Average Rank", "Film", "Year"];
