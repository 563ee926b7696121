//! Document transfer object and template metadata.

use serde::{Deserialize, Serialize};

use super::Paragraph;
use crate::error::{Error, Result};

/// Metadata pulled from the leading paragraphs of a talk transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document code
    pub id: String,

    /// Talk title
    pub title: String,

    /// Date as written in the document
    pub date: String,

    /// Location as written in the document
    pub location: String,

    /// Talk type
    #[serde(rename = "type", default)]
    pub doc_type: String,

    /// Category
    #[serde(default)]
    pub category: String,

    /// Image reference
    #[serde(default, alias = "img")]
    pub image: String,
}

/// One leading paragraph of the template, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField {
    /// Boilerplate label, discarded
    Label,
    /// Flattened text is the title
    Title,
    /// `<location>, <date>`
    LocationDate,
    /// `Code: <id>`
    Id,
    /// `Typ: <type>`
    Type,
    /// `Kategorie: <category>`
    Category,
    /// Raw image reference
    Image,
}

impl MetadataField {
    /// Literal prefix stripped from the paragraph text, if the field has one.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            MetadataField::Id => Some("Code:"),
            MetadataField::Type => Some("Typ:"),
            MetadataField::Category => Some("Kategorie:"),
            _ => None,
        }
    }
}

/// The fixed sequence of leading paragraphs consumed by metadata extraction.
pub const METADATA_TEMPLATE: [MetadataField; 7] = [
    MetadataField::Label,
    MetadataField::Title,
    MetadataField::LocationDate,
    MetadataField::Id,
    MetadataField::Type,
    MetadataField::Category,
    MetadataField::Image,
];

/// Separator between location and date.
pub const LOCATION_DATE_SEPARATOR: &str = ", ";

/// Structured form of a converted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDto {
    /// Template metadata, set by [`DocumentDto::extract_metadata`]
    pub metadata: Option<Metadata>,

    /// Paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
}

impl DocumentDto {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished paragraph.
    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Get the number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::to_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Move the leading template paragraphs into [`Metadata`].
    ///
    /// Only valid for documents following the transcript template. All
    /// fields are parsed before anything is removed, so on error the
    /// paragraphs are left exactly as they were.
    pub fn extract_metadata(&mut self) -> Result<()> {
        let required = METADATA_TEMPLATE.len();
        if self.paragraphs.len() < required {
            return Err(Error::Underflow {
                required,
                available: self.paragraphs.len(),
            });
        }

        let mut metadata = Metadata::default();
        for (field, paragraph) in METADATA_TEMPLATE.iter().zip(&self.paragraphs) {
            let text = paragraph.to_text();
            match field {
                MetadataField::Label => {}
                MetadataField::Title => metadata.title = text,
                MetadataField::LocationDate => {
                    let (location, date) = split_location_date(&text)?;
                    metadata.location = location.to_string();
                    metadata.date = date.to_string();
                }
                MetadataField::Id => metadata.id = strip_field_prefix(&text, *field),
                MetadataField::Type => metadata.doc_type = strip_field_prefix(&text, *field),
                MetadataField::Category => metadata.category = strip_field_prefix(&text, *field),
                MetadataField::Image => metadata.image = text,
            }
        }

        self.paragraphs.drain(..required);
        log::debug!(
            "extracted metadata for {:?}, {} paragraphs remain",
            metadata.id,
            self.paragraphs.len()
        );
        self.metadata = Some(metadata);
        Ok(())
    }
}

fn split_location_date(text: &str) -> Result<(&str, &str)> {
    let parts: Vec<&str> = text.split(LOCATION_DATE_SEPARATOR).collect();
    match parts.as_slice() {
        [location, date] => Ok((*location, *date)),
        _ => Err(Error::SplitFormat(text.to_string())),
    }
}

fn strip_field_prefix(text: &str, field: MetadataField) -> String {
    let text = text.trim();
    let text = match field.prefix() {
        Some(prefix) => text.strip_prefix(prefix).unwrap_or(text),
        None => text,
    };
    text.trim().to_string()
}
