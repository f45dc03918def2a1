//! The Next-curl homepage.
//!
//! Rendering takes no inputs and touches no state: every call produces the
//! same markup.

use super::markup::Element;

/// Site name shown in the header and the document title.
pub const SITE_NAME: &str = "Next-curl";

/// Homepage heading text.
pub const HEADING: &str = "Welcome to Next-curl";

/// Homepage welcome paragraph.
pub const INTRO: &str = "This is the homepage of the Next-curl educational platform.";

/// Site-wide header with the brand link.
#[must_use]
pub fn site_header() -> Element {
    Element::new("header").child(
        Element::new("nav").child(Element::new("a").attr("href", "/home").text(SITE_NAME)),
    )
}

/// Homepage tree: header followed by the heading and welcome paragraph.
#[must_use]
pub fn home() -> Element {
    Element::new("div").child(site_header()).child(
        Element::new("main")
            .child(Element::new("h1").text(HEADING))
            .child(Element::new("p").text(INTRO)),
    )
}

/// Renders the homepage fragment.
#[must_use]
pub fn render_home() -> String {
    home().render()
}

/// Renders the homepage as a complete HTML5 document.
#[must_use]
pub fn render_home_document() -> String {
    let html = Element::new("html")
        .attr("lang", "en")
        .child(
            Element::new("head")
                .child(Element::new("meta").attr("charset", "utf-8"))
                .child(Element::new("title").text(SITE_NAME)),
        )
        .child(Element::new("body").child(home()));
    format!("<!DOCTYPE html>{}", html.render())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render_home(), render_home());
        assert_eq!(render_home_document(), render_home_document());
    }

    #[test]
    fn fragment_has_exact_shape() {
        assert_eq!(
            render_home(),
            "<div><header><nav><a href=\"/home\">Next-curl</a></nav></header>\
             <main><h1>Welcome to Next-curl</h1>\
             <p>This is the homepage of the Next-curl educational platform.</p></main></div>"
        );
    }

    #[test]
    fn tree_has_header_heading_and_paragraph() {
        let page = home();
        assert!(page.find("header").is_some());
        let Some(h1) = page.find("h1") else {
            panic!("heading missing");
        };
        assert_eq!(h1.text_content(), HEADING);
        let Some(p) = page.find("p") else {
            panic!("paragraph missing");
        };
        assert_eq!(p.text_content(), INTRO);
    }

    #[test]
    fn document_wraps_fragment() {
        let doc = render_home_document();
        assert!(doc.starts_with("<!DOCTYPE html><html lang=\"en\">"));
        assert!(doc.contains("<title>Next-curl</title>"));
        assert!(doc.contains(&render_home()));
    }
}
