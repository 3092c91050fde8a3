//! Page content compiled into the binary.
//!
//! Slides and FAQ entries are kept as CSV next to this module so editors can
//! change the copy without touching Rust. Rows that fail to deserialize are
//! skipped and logged; a file without its required columns is an error.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;

pub const SLIDES_CSV: &str = include_str!("content/slides.csv");
pub const FAQ_CSV: &str = include_str!("content/faq.csv");

/// Content loading error types
#[derive(Debug)]
pub enum ContentError {
    Csv(String),
    MissingColumn {
        kind: &'static str,
        column: &'static str,
    },
    Empty(&'static str),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Csv(msg) => write!(f, "Malformed CSV: {}", msg),
            ContentError::MissingColumn { kind, column } => {
                write!(f, "{} content is missing the '{}' column", kind, column)
            }
            ContentError::Empty(kind) => write!(f, "No {} entries found", kind),
        }
    }
}

impl std::error::Error for ContentError {}

impl From<csv::Error> for ContentError {
    fn from(err: csv::Error) -> Self {
        ContentError::Csv(err.to_string())
    }
}

/// A row type that can be read from one of the content files.
pub trait Record: DeserializeOwned {
    const KIND: &'static str;
    const COLUMNS: &'static [&'static str];
}

/// One carousel card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Slide {
    pub title: String,
    /// Short label shown above the title (month, category).
    pub tag: String,
    pub body: String,
}

impl Record for Slide {
    const KIND: &'static str = "slide";
    const COLUMNS: &'static [&'static str] = &["title", "tag", "body"];
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl Record for FaqEntry {
    const KIND: &'static str = "FAQ";
    const COLUMNS: &'static [&'static str] = &["question", "answer"];
}

/// Parse every valid row of `csv_content` into `T`.
pub fn read_records<T: Record>(csv_content: &str) -> Result<Vec<T>, ContentError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    let headers = reader.headers()?.clone();
    for &column in T::COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ContentError::MissingColumn {
                kind: T::KIND,
                column,
            });
        }
    }

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<T>().enumerate() {
        match row {
            Ok(record) => records.push(record),
            // header is line 1
            Err(e) => warn!("Skipping {} row {}: {}", T::KIND, i + 2, e),
        }
    }

    if records.is_empty() {
        return Err(ContentError::Empty(T::KIND));
    }
    debug!("Loaded {} {} entries", records.len(), T::KIND);
    Ok(records)
}

pub fn load_slides() -> Result<Vec<Slide>, ContentError> {
    read_records(SLIDES_CSV)
}

pub fn load_faq() -> Result<Vec<FaqEntry>, ContentError> {
    read_records(FAQ_CSV)
}
