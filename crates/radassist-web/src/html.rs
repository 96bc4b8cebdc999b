//! HTML rendition of a rendered page.
//!
//! The form posts back to `/`. The submit button is named `say_hello`, so a
//! click (or Enter in the input, which submits with the first submit button)
//! arrives as an activation.

use std::fmt::{self, Write};

use radassist_core::{Element, Page};

/// Form field carrying the input value.
pub const NAME_FIELD: &str = "name";

/// Form field present only when the button was clicked.
pub const ACTIVATE_FIELD: &str = "say_hello";

const STYLE: &str = "body{font-family:sans-serif;max-width:42rem;margin:3rem auto;padding:0 1rem}\
label{display:block;margin-bottom:.25rem}\
input{width:100%;padding:.4rem;margin-bottom:.75rem}\
.greeting{margin-top:1rem;padding:.75rem;background:#e8f4ea;border-radius:4px}";

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Render a page as a complete HTML document.
pub fn render_page(page: &Page) -> String {
    let mut body = String::new();
    // Writing to a String cannot fail.
    let _ = write_body(&mut body, &page.elements);

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n\
         <body>\n\
         {body}\
         </body>\n\
         </html>\n",
        escape(&page.page_title)
    )
}

fn write_body(body: &mut String, elements: &[Element]) -> fmt::Result {
    let mut in_form = false;
    for element in elements {
        match element {
            Element::Title(title) => writeln!(body, "<h1>{}</h1>", escape(title))?,
            Element::Text(text) => writeln!(body, "<p>{}</p>", escape(text))?,
            Element::TextInput { label, value } => {
                if !in_form {
                    in_form = true;
                    body.push_str("<form method=\"post\" action=\"/\">\n");
                }
                writeln!(
                    body,
                    "<label for=\"{NAME_FIELD}\">{}</label>\n\
                     <input type=\"text\" id=\"{NAME_FIELD}\" name=\"{NAME_FIELD}\" value=\"{}\">",
                    escape(label),
                    escape(value)
                )?;
            }
            Element::Button { label } => {
                writeln!(
                    body,
                    "<button type=\"submit\" name=\"{ACTIVATE_FIELD}\" value=\"1\">{}</button>",
                    escape(label)
                )?;
                if in_form {
                    in_form = false;
                    body.push_str("</form>\n");
                }
            }
            Element::Greeting(greeting) => {
                writeln!(body, "<p class=\"greeting\">{}</p>", escape(greeting))?;
            }
        }
    }
    if in_form {
        body.push_str("</form>\n");
    }
    Ok(())
}
