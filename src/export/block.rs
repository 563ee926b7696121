//! Block-level export: node lists, tables and numbered lists.

use super::{Exporter, Scope};
use crate::markup::{Events, Tag};
use crate::model::{Node, NumberingItem, NumberingSpan, Table, TableCell, TableRow};

impl<'a> Exporter<'a> {
    pub(super) fn nodes(self, nodes: &'a [Node], scope: Scope<'a>) -> Events<'a> {
        Box::new(nodes.iter().flat_map(move |node| self.node(node, scope)))
    }

    /// Like [`Exporter::nodes`], with a `<br />` between consecutive paragraphs.
    pub(super) fn nodes_with_line_breaks(self, nodes: &'a [Node], scope: Scope<'a>) -> Events<'a> {
        Box::new(nodes.iter().enumerate().flat_map(move |(i, node)| {
            let follows_paragraph = i > 0 && nodes[i - 1].is_paragraph() && node.is_paragraph();
            let separator = follows_paragraph.then(|| line_break().open());
            separator.into_iter().chain(self.node(node, scope))
        }))
    }

    fn node(self, node: &'a Node, scope: Scope<'a>) -> Events<'a> {
        match node {
            Node::Paragraph(paragraph) => self.paragraph(paragraph, scope),
            Node::Table(table) => self.table(table, scope),
            Node::NumberingSpan(span) => self.numbering_span(span, scope),
            Node::ContentControl { children } => {
                let scope = Scope {
                    in_content_control: true,
                    ..scope
                };
                self.nodes(children, scope)
            }
        }
    }

    fn table(self, table: &'a Table, scope: Scope<'a>) -> Events<'a> {
        let rows = table.rows.iter().flat_map(move |row| self.table_row(row, scope));
        Box::new(Tag::new("table").with_attr("border", "1").apply(rows, true))
    }

    fn table_row(self, row: &'a TableRow, scope: Scope<'a>) -> Events<'a> {
        let cells = row.cells.iter().flat_map(move |cell| self.table_cell(cell, scope));
        Box::new(Tag::new("tr").apply(cells, true))
    }

    fn table_cell(self, cell: &'a TableCell, scope: Scope<'a>) -> Events<'a> {
        let scope = Scope {
            in_table_cell: true,
            ..scope
        };
        let content = self.nodes_with_line_breaks(&cell.children, scope);
        if cell.continues_vertical_merge {
            return content;
        }

        let mut tag = Tag::new("td");
        if cell.colspan > 1 {
            tag = tag.with_attr("colspan", cell.colspan.to_string());
        }
        if cell.rowspan > 1 {
            tag = tag.with_attr("rowspan", cell.rowspan.to_string());
        }
        Box::new(tag.apply(content, true))
    }

    fn numbering_span(self, span: &'a NumberingSpan, scope: Scope<'a>) -> Events<'a> {
        let tag = if span.bullet {
            Tag::new("ul")
        } else {
            Tag::new("ol").with_attr(
                "class",
                format!("pydocx-list-style-type-{}", span.num_format),
            )
        };
        let items = span
            .items
            .iter()
            .flat_map(move |item| self.numbering_item(item, scope));
        Box::new(tag.apply(items, true))
    }

    fn numbering_item(self, item: &'a NumberingItem, scope: Scope<'a>) -> Events<'a> {
        let scope = Scope {
            in_numbering_item: true,
            ..scope
        };
        Box::new(Tag::new("li").apply(self.nodes_with_line_breaks(&item.children, scope), true))
    }
}

pub(super) fn line_break() -> Tag {
    Tag::new("br").self_closing().allow_whitespace()
}
