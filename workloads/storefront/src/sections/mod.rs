//! HTML section renderers.
//!
//! Every section returns a complete HTML string with all dynamic data
//! escaped; the page orchestrators concatenate sections and hand the
//! result to the shell. Only `description_html` from the commerce
//! backend is inserted raw - it is the shop's own rich text.

pub mod brands;
pub mod carousel;
pub mod cart;
pub mod categories;
pub mod errors;
pub mod footer;
pub mod header;
pub mod product_detail;
pub mod products;
pub mod shell;

/// Escape text for interpolation into HTML bodies and attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"l'encre" & co</b>"#),
            "&lt;b&gt;&quot;l&#39;encre&quot; &amp; co&lt;/b&gt;"
        );
        assert_eq!(escape_html("Aiguilles & Tubes"), "Aiguilles &amp; Tubes");
    }
}
