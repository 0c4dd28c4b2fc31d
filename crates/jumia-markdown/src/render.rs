//! Block rendering
//!
//! Converts [`Block`]s into Markdown text. The output format is fixed: ATX
//! headings, `- ` bullets, `1. ` ordered items, pipe tables with a `---`
//! separator per column, and `> ` quote prefixes.

use crate::block::Block;

/// Render a sequence of blocks to one Markdown document.
///
/// Blocks are rendered in order, each followed by a blank line. An empty
/// sequence renders to the empty string.
pub fn render(blocks: &[Block]) -> String {
    let mut out = String::with_capacity(blocks.len() * 64);

    for block in blocks {
        render_into(block, &mut out);
        out.push_str("\n\n");
    }

    out
}

/// Render a single block without the trailing block separator.
pub fn render_block(block: &Block) -> String {
    let mut out = String::new();
    render_into(block, &mut out);
    out
}

fn render_into(block: &Block, out: &mut String) {
    match block {
        Block::Text(text) | Block::Paragraph(text) => out.push_str(text),

        Block::Heading { level, text } => {
            for _ in 0..*level {
                out.push('#');
            }
            out.push(' ');
            out.push_str(text);
        }

        Block::Table { headers, rows } => render_table(headers, rows, out),

        Block::UnorderedList(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str("- ");
                out.push_str(item);
            }
        }

        Block::OrderedList(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&(i + 1).to_string());
                out.push_str(". ");
                out.push_str(item);
            }
        }

        Block::Blockquote(lines) => {
            for (i, line) in lines.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str("> ");
                out.push_str(line);
            }
        }
    }
}

/// Pipe table: header row, one `---` per header column, then body rows.
/// Each row ends with a newline, so the table block itself is
/// newline-terminated before the document separator is appended.
fn render_table(headers: &[String], rows: &[Vec<String>], out: &mut String) {
    out.push_str("| ");
    out.push_str(&headers.join(" | "));
    out.push_str(" |\n");

    out.push_str("| ");
    out.push_str(&vec!["---"; headers.len()].join(" | "));
    out.push_str(" |\n");

    for row in rows {
        out.push_str("| ");
        out.push_str(&row.join(" | "));
        out.push_str(" |\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_paragraph() {
        let blocks = vec![
            Block::Heading {
                level: 1,
                text: "Title".to_string(),
            },
            Block::Paragraph("Hello world".to_string()),
        ];
        assert_eq!(render(&blocks), "# Title\n\nHello world\n\n");
    }

    #[test]
    fn heading_levels() {
        for level in 1..=6u8 {
            let block = Block::Heading {
                level,
                text: "Section".to_string(),
            };
            let expected = format!("{} Section", "#".repeat(level as usize));
            assert_eq!(render_block(&block), expected);
        }
    }

    #[test]
    fn bare_text() {
        let block = Block::Text("loose text".to_string());
        assert_eq!(render_block(&block), "loose text");
    }

    #[test]
    fn unordered_list() {
        let block = Block::UnorderedList(vec!["A".to_string(), "B".to_string()]);
        assert_eq!(render_block(&block), "- A\n- B");
    }

    #[test]
    fn ordered_list() {
        let block = Block::OrderedList(vec!["First".to_string(), "Second".to_string()]);
        assert_eq!(render_block(&block), "1. First\n2. Second");
    }

    #[test]
    fn table() {
        let block = Block::Table {
            headers: vec!["X".to_string(), "Y".to_string()],
            rows: vec![vec!["1".to_string(), "2".to_string()]],
        };
        assert_eq!(render_block(&block), "| X | Y |\n| --- | --- |\n| 1 | 2 |\n");
    }

    #[test]
    fn table_without_body_rows() {
        let block = Block::Table {
            headers: vec!["X".to_string()],
            rows: vec![],
        };
        assert_eq!(render_block(&block), "| X |\n| --- |\n");
    }

    #[test]
    fn blockquote() {
        let block = Block::Blockquote(vec!["line one".to_string(), "line two".to_string()]);
        assert_eq!(render_block(&block), "> line one\n> line two");
    }

    #[test]
    fn empty_document() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn separator_after_every_block() {
        let blocks = vec![
            Block::UnorderedList(vec!["A".to_string(), "B".to_string()]),
            Block::Paragraph("after".to_string()),
        ];
        assert_eq!(render(&blocks), "- A\n- B\n\nafter\n\n");
    }

    #[test]
    fn rendering_is_stable() {
        let blocks = vec![
            Block::Heading {
                level: 3,
                text: "Specs".to_string(),
            },
            Block::Table {
                headers: vec!["Size".to_string()],
                rows: vec![vec!["M".to_string()]],
            },
        ];
        assert_eq!(render(&blocks), render(&blocks));
    }
}
