//! Description markup to Markdown conversion
//!
//! The marketplace renders product descriptions as a flat `div.markup`
//! container whose children are plain text, paragraphs, headings, tables,
//! lists and block quotes. Each direct child is classified into a
//! [`Block`]; anything else is skipped. Children of `table`, `ul`, `ol` and
//! `blockquote` are flattened here, never fed back into the dispatch.

use jumia_markdown::{render, Block};
use scraper::{ElementRef, Node};

use crate::{Result, ScrapeError};

/// Convert the description's main content block into one Markdown document.
///
/// Children are visited once, in document order; every recognized child
/// contributes its rendering plus a blank-line separator, unrecognized
/// children contribute nothing. The input tree is not modified and the
/// conversion holds no state, so converting the same tree twice yields
/// byte-identical output.
///
/// Tables are assumed well formed: a `thead` with one header row and a
/// `tbody`. That is a precondition, not a recoverable case — a table
/// missing either section fails the whole conversion with
/// [`ScrapeError::MalformedTable`] rather than producing partial output.
pub fn convert(main_block: ElementRef<'_>) -> Result<String> {
    let mut blocks = Vec::new();

    for child in main_block.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.text.trim();
                if !trimmed.is_empty() {
                    blocks.push(Block::Text(trimmed.to_string()));
                }
            }
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    if let Some(block) = classify(element)? {
                        blocks.push(block);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(render(&blocks))
}

/// Classify one element child of the main block. `None` means the tag is
/// not part of the description element set and is skipped.
fn classify(element: ElementRef<'_>) -> Result<Option<Block>> {
    let tag = element.value().name();

    let block = match tag {
        "p" => Some(Block::Paragraph(trimmed_text(element))),

        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = tag[1..].parse().unwrap_or(1);
            Some(Block::Heading {
                level,
                text: trimmed_text(element),
            })
        }

        "table" => Some(table_block(element)?),

        "ul" => Some(Block::UnorderedList(list_items(element))),

        "ol" => Some(Block::OrderedList(list_items(element))),

        "blockquote" => Some(Block::Blockquote(stripped_lines(element))),

        _ => None,
    };

    Ok(block)
}

/// Header cells from the single `thead` row, body cells row by row.
fn table_block(table: ElementRef<'_>) -> Result<Block> {
    let thead = child_elements(table, "thead")
        .next()
        .ok_or(ScrapeError::MalformedTable("thead"))?;
    let header_row = child_elements(thead, "tr")
        .next()
        .ok_or(ScrapeError::MalformedTable("header row"))?;
    let headers = child_elements(header_row, "th").map(trimmed_text).collect();

    let tbody = child_elements(table, "tbody")
        .next()
        .ok_or(ScrapeError::MalformedTable("tbody"))?;
    let rows = child_elements(tbody, "tr")
        .map(|tr| child_elements(tr, "td").map(trimmed_text).collect())
        .collect();

    Ok(Block::Table { headers, rows })
}

fn list_items(list: ElementRef<'_>) -> Vec<String> {
    child_elements(list, "li").map(trimmed_text).collect()
}

fn child_elements<'a>(
    parent: ElementRef<'a>,
    tag: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |element| element.value().name() == tag)
}

/// Full descendant text, trimmed at both ends.
pub(crate) fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Non-empty trimmed text runs of the subtree, in document order.
fn stripped_lines(element: ElementRef<'_>) -> Vec<String> {
    element
        .text()
        .map(str::trim)
        .filter(|run| !run.is_empty())
        .map(str::to_string)
        .collect()
}
