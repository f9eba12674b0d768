//! The filtering-window page skeleton.
//!
//! The page holds two elements the rest of the system relies on: the sidebar
//! container ([`FILTER_CONTAINER_ID`]) and the download trigger
//! ([`DOWNLOAD_TRIGGER_ID`]). The collection whose analysis the page shows is
//! exposed on the trigger as `data-collection`, and the trigger links to
//! [`DOWNLOAD_ROUTE`] so a browser saves `<name>_analysis.json` on click.

use filterbar_core::{CollectionName, DOWNLOAD_ROUTE, DOWNLOAD_TRIGGER_ID, FILTER_CONTAINER_ID};

use crate::dom::{Document, Element};

/// Title of the filtering page.
pub const PAGE_TITLE: &str = "Resume Filters";

/// Stylesheet linked from the page head.
pub const STYLESHEET_HREF: &str = "/static/css/output.css";

/// Attribute on the trigger carrying the collection name.
pub const COLLECTION_ATTR: &str = "data-collection";

/// Link the trigger points at for `collection`.
pub fn download_href(collection: &CollectionName) -> String {
    format!("{DOWNLOAD_ROUTE}?collection={collection}")
}

/// Build the empty filtering page: header, empty sidebar container, and the
/// download trigger.
pub fn filter_window_document(collection: Option<&CollectionName>) -> Document {
    let mut doc = Document::new(PAGE_TITLE).with_stylesheet(STYLESHEET_HREF);

    let mut trigger = Element::new("a")
        .with_id(DOWNLOAD_TRIGGER_ID)
        .with_attr("role", "button")
        .with_classes("px-4 py-2 rounded-md bg-slate-800 text-slate-50 hover:bg-slate-700")
        .with_text("Download analysis");
    match collection {
        Some(name) => {
            trigger.set_attr("href", download_href(name));
            trigger.set_attr("download", name.artifact_file_name());
            trigger.set_attr(COLLECTION_ATTR, name.as_str());
        }
        // Without a collection there is nothing to download.
        None => trigger.set_attr("aria-disabled", "true"),
    }

    let header = Element::new("header")
        .with_classes("flex flex-row items-center justify-between p-4")
        .with_child(
            Element::new("h1")
                .with_classes("font-bold text-2xl")
                .with_text(PAGE_TITLE),
        )
        .with_child(trigger);

    let container = Element::new("aside")
        .with_id(FILTER_CONTAINER_ID)
        .with_classes("p-4 mask-gradient-bottom");

    doc.body_mut()
        .append_child(Element::new("main").with_child(header).with_child(container));
    doc
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_container_and_trigger() {
        let doc = filter_window_document(None);
        let container = doc.element_by_id(FILTER_CONTAINER_ID).unwrap();
        assert!(container.children().is_empty());
        let trigger = doc.element_by_id(DOWNLOAD_TRIGGER_ID).unwrap();
        assert_eq!(trigger.tag(), "a");
        assert_eq!(trigger.attr(COLLECTION_ATTR), None);
        assert_eq!(trigger.attr("href"), None);
        assert_eq!(trigger.attr("aria-disabled"), Some("true"));
    }

    #[test]
    fn test_page_carries_collection() {
        let name = CollectionName::new("Q7K2ZP0M4X").unwrap();
        let doc = filter_window_document(Some(&name));
        let trigger = doc.element_by_id(DOWNLOAD_TRIGGER_ID).unwrap();
        assert_eq!(trigger.attr(COLLECTION_ATTR), Some("Q7K2ZP0M4X"));
        assert!(doc.to_html().contains(r#"data-collection="Q7K2ZP0M4X""#));
    }

    #[test]
    fn test_trigger_links_to_download() {
        let name = CollectionName::new("demo").unwrap();
        let doc = filter_window_document(Some(&name));
        let trigger = doc.element_by_id(DOWNLOAD_TRIGGER_ID).unwrap();
        assert_eq!(
            trigger.attr("href"),
            Some("/download_analysis?collection=demo")
        );
        assert_eq!(trigger.attr("download"), Some("demo_analysis.json"));
        assert!(doc.to_html().contains(
            r#"href="/download_analysis?collection=demo" download="demo_analysis.json""#
        ));
    }
}
