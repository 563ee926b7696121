//! Plain text rendering for transfer objects.

use crate::dto::DocumentDto;

/// Convert a transfer object to plain text.
///
/// Paragraphs are separated by a blank line; metadata is not included.
pub fn to_text(doc: &DocumentDto) -> String {
    doc.plain_text().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::Paragraph;

    #[test]
    fn test_to_text() {
        let mut doc = DocumentDto::new();
        doc.push_paragraph(Paragraph::with_text("Hello, world!"));
        doc.push_paragraph(Paragraph::with_text("Second paragraph.\n"));

        assert_eq!(to_text(&doc), "Hello, world!\n\nSecond paragraph.");
    }
}
