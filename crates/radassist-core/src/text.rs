//! Plain-text rendition of a page, for terminals.

use std::fmt::{self, Write};

use crate::page::{Element, Page};

/// Render a page as plain text, one element per block.
pub fn render_text(page: &Page) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_elements(&mut out, &page.elements);
    out
}

fn write_elements(out: &mut String, elements: &[Element]) -> fmt::Result {
    for element in elements {
        match element {
            Element::Title(title) => writeln!(
                out,
                "{title}\n{}\n",
                "=".repeat(title.chars().count().max(1))
            )?,
            Element::Text(text) => writeln!(out, "{text}\n")?,
            Element::TextInput { label, value } => writeln!(out, "{label}: [{value}]")?,
            Element::Button { label } => writeln!(out, "[ {label} ]")?,
            Element::Greeting(greeting) => writeln!(out, "\n{greeting}")?,
        }
    }
    Ok(())
}
