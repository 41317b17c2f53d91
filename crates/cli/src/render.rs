use std::io::{self, Write};

use stockroom_inventory::Item;

use crate::config::OutputFormat;

/// Writes item listings in the configured format.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Write a non-empty listing. Text output puts `header` on its own line first;
    /// JSON output is the bare array.
    pub fn listing<W: Write>(&self, out: &mut W, header: &str, items: &[Item]) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(out, "{header}")?;
                for item in items {
                    writeln!(out, "{item}")?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, items)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Write the "nothing to show" outcome: `message` as text, `[]` as JSON.
    pub fn empty<W: Write>(&self, out: &mut W, message: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{message}"),
            OutputFormat::Json => writeln!(out, "[]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_inventory::ItemId;

    fn widget() -> Item {
        Item::new(ItemId::FIRST, "Widget", "Tools", 5)
    }

    #[test]
    fn text_listing_has_header_and_lines() {
        let mut out = Vec::new();
        Renderer::new(OutputFormat::Text)
            .listing(&mut out, "All Items in Inventory:", &[widget()])
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "All Items in Inventory:\nItem{id=1, name='Widget', category='Tools', quantity=5}\n"
        );
    }

    #[test]
    fn json_listing_is_a_single_array() {
        let mut out = Vec::new();
        Renderer::new(OutputFormat::Json)
            .listing(&mut out, "ignored", &[widget()])
            .unwrap();
        let parsed: Vec<Item> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, vec![widget()]);
    }

    #[test]
    fn empty_json_is_empty_array() {
        let mut out = Vec::new();
        Renderer::new(OutputFormat::Json)
            .empty(&mut out, "Inventory is empty.")
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
