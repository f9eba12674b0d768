//! Sidebar renderer.
//!
//! For every category of a [`FilterDataset`] the renderer builds:
//!
//! ```text
//! div.border-b.pb-2.mb-4                     (section)
//! ├── h3.font-bold.mb-4.text-xl              (category name)
//! └── div.grid.items-center.grid-cols-4      (grid)
//!     └── div.<chip classes>                 (one per label)
//!         ├── input[type=checkbox]#filter-<category>-<label>.mr-2
//!         └── label.text-sm[for=filter-<category>-<label>]
//! ```
//!
//! and appends the sections, in mapping order, to a container element.
//!
//! # Usage
//!
//! ```rust
//! use filterbar_core::FilterDataset;
//! use filterbar_render::{Element, SidebarRenderer};
//!
//! let dataset = FilterDataset::from_json_slice(br#"{"Languages": ["python", "go"]}"#).unwrap();
//! let mut container = Element::new("div").with_id("filter-container");
//!
//! let summary = SidebarRenderer::default().render_sidebar(&mut container, &dataset);
//! assert_eq!(summary.sections, 1);
//! assert_eq!(summary.checkboxes, 2);
//! assert!(container.find_by_id("filter-Languages-go").is_some());
//! ```

use filterbar_core::{Category, FilterDataset, IdAllocator, filter_control_id};

use crate::dom::Element;

// ============================================================================
// SidebarClasses
// ============================================================================

/// Class lists attached to the generated elements.
///
/// Each field is a whitespace-separated class list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarClasses {
    /// Section wrapper (one per category).
    pub section: String,
    /// Section title.
    pub title: String,
    /// Grid holding the chips of one section.
    pub grid: String,
    /// Chip wrapping one checkbox and its label.
    pub chip: String,
    /// Checkbox input.
    pub checkbox: String,
    /// Label next to the checkbox.
    pub label: String,
}

impl Default for SidebarClasses {
    fn default() -> Self {
        Self {
            section: "border-b pb-2 mb-4".to_string(),
            title: "font-bold mb-4 text-xl".to_string(),
            grid: "grid items-center grid-cols-4".to_string(),
            chip: "overflow-hidden p-1 px-2 mr-4 mb-2 text-slate-50 rounded-full rounded-md \
                   rounded-sm border-2 ring-1 ring-black shadow-md flex flex-row items-center \
                   hover:bg-white hover:text-gray-900 transition ease-in-out"
                .to_string(),
            checkbox: "mr-2".to_string(),
            label: "text-sm".to_string(),
        }
    }
}

// ============================================================================
// RenderSummary
// ============================================================================

/// What a render pass produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Number of sections appended.
    pub sections: usize,
    /// Number of checkboxes appended.
    pub checkboxes: usize,
}

// ============================================================================
// SidebarRenderer
// ============================================================================

/// Builds sidebar sections from a dataset.
#[derive(Debug, Clone, Default)]
pub struct SidebarRenderer {
    classes: SidebarClasses,
}

impl SidebarRenderer {
    /// Create a renderer with custom class lists.
    pub fn new(classes: SidebarClasses) -> Self {
        Self { classes }
    }

    /// The class lists in use.
    pub fn classes(&self) -> &SidebarClasses {
        &self.classes
    }

    /// Append one section per category to `container`.
    ///
    /// Existing children are left alone, so calling this twice shows the
    /// sidebar twice. Use [`render_sidebar`](Self::render_sidebar) to
    /// replace the previous output instead.
    pub fn append_sidebar(&self, container: &mut Element, dataset: &FilterDataset) -> RenderSummary {
        log::debug!(
            "Rendering {} categories ({} labels) into #{}",
            dataset.len(),
            dataset.label_count(),
            container.id().unwrap_or("<anonymous>")
        );

        let mut ids = IdAllocator::new();
        let mut summary = RenderSummary::default();
        for category in dataset.categories() {
            let section = self.section(category, &mut ids);
            summary.sections += 1;
            summary.checkboxes += category.len();
            container.append_child(section);
        }
        summary
    }

    /// Replace the contents of `container` with a freshly rendered sidebar.
    pub fn render_sidebar(&self, container: &mut Element, dataset: &FilterDataset) -> RenderSummary {
        let removed = container.clear_children();
        if removed > 0 {
            log::debug!("Cleared {removed} previously rendered nodes");
        }
        self.append_sidebar(container, dataset)
    }

    /// Build the section for one category.
    pub fn section(&self, category: &Category, ids: &mut IdAllocator) -> Element {
        let title = Element::new("h3")
            .with_classes(&self.classes.title)
            .with_text(category.name());

        let mut grid = Element::new("div").with_classes(&self.classes.grid);
        for label in category.labels() {
            let id = ids.claim(filter_control_id(category.name(), label));
            grid.append_child(self.checkbox_chip(label, id));
        }

        Element::new("div")
            .with_classes(&self.classes.section)
            .with_child(title)
            .with_child(grid)
    }

    /// Build one chip: a checkbox and the label pointing at it.
    pub fn checkbox_chip(&self, label: &str, id: String) -> Element {
        let checkbox = Element::new("input")
            .with_attr("type", "checkbox")
            .with_id(id.clone())
            .with_classes(&self.classes.checkbox);

        let label_element = Element::new("label")
            .with_attr("for", id)
            .with_classes(&self.classes.label)
            .with_text(label);

        Element::new("div")
            .with_classes(&self.classes.chip)
            .with_child(checkbox)
            .with_child(label_element)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use filterbar_core::default_dataset;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn container() -> Element {
        Element::new("div").with_id("filter-container")
    }

    fn languages() -> FilterDataset {
        FilterDataset::from_json_slice(br#"{"Languages": ["python", "go"]}"#).unwrap()
    }

    fn checkbox_ids(container: &Element) -> Vec<String> {
        container
            .select_by_tag("input")
            .iter()
            .filter_map(|e| e.id().map(str::to_string))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------------

    #[test]
    fn test_languages_end_to_end() {
        let mut root = container();
        let summary = SidebarRenderer::default().render_sidebar(&mut root, &languages());
        assert_eq!(summary, RenderSummary { sections: 1, checkboxes: 2 });

        let sections: Vec<&Element> = root.child_elements().collect();
        assert_eq!(sections.len(), 1);

        let title = sections[0].select_by_tag("h3");
        assert_eq!(title.len(), 1);
        assert_eq!(title[0].text_content(), "Languages");

        assert_eq!(
            checkbox_ids(&root),
            ["filter-Languages-python", "filter-Languages-go"]
        );

        let labels: Vec<String> = root
            .select_by_tag("label")
            .iter()
            .map(|l| l.text_content())
            .collect();
        assert_eq!(labels, ["python", "go"]);
    }

    #[test]
    fn test_label_for_matches_checkbox_id() {
        let mut root = container();
        SidebarRenderer::default().render_sidebar(&mut root, &default_dataset());
        for chip in root.select_by_tag("input") {
            let id = chip.id().unwrap();
            let label = root
                .select_by_tag("label")
                .into_iter()
                .find(|l| l.attr("for") == Some(id));
            assert!(label.is_some(), "no label for {id}");
        }
    }

    #[test]
    fn test_classes_applied() {
        let mut root = container();
        SidebarRenderer::default().render_sidebar(&mut root, &languages());
        let section = root.child_elements().next().unwrap();
        assert_eq!(section.classes(), ["border-b", "pb-2", "mb-4"]);

        let input = &root.select_by_tag("input")[0];
        assert_eq!(input.attr("type"), Some("checkbox"));
        assert!(input.has_class("mr-2"));

        let chip = root
            .descendants()
            .into_iter()
            .find(|e| e.has_class("ring-black"))
            .unwrap();
        assert_eq!(chip.children().len(), 2);
    }

    #[test]
    fn test_section_order_follows_dataset() {
        let dataset = FilterDataset::new()
            .with_category("zeta", ["z"])
            .unwrap()
            .with_category("alpha", ["a"])
            .unwrap();
        let mut root = container();
        SidebarRenderer::default().render_sidebar(&mut root, &dataset);
        let titles: Vec<String> = root
            .select_by_tag("h3")
            .iter()
            .map(|h| h.text_content())
            .collect();
        assert_eq!(titles, ["zeta", "alpha"]);
    }

    #[test]
    fn test_empty_category_renders_title_only() {
        let dataset = FilterDataset::new()
            .with_category("empty", Vec::<String>::new())
            .unwrap();
        let mut root = container();
        let summary = SidebarRenderer::default().render_sidebar(&mut root, &dataset);
        assert_eq!(summary, RenderSummary { sections: 1, checkboxes: 0 });
        assert_eq!(root.select_by_tag("h3").len(), 1);
    }

    #[test]
    fn test_colliding_ids_are_suffixed() {
        let dataset = FilterDataset::new()
            .with_category("a-b", ["c"])
            .unwrap()
            .with_category("a", ["b-c"])
            .unwrap();
        let mut root = container();
        SidebarRenderer::default().render_sidebar(&mut root, &dataset);
        assert_eq!(checkbox_ids(&root), ["filter-a-b-c", "filter-a-b-c-2"]);
    }

    // ------------------------------------------------------------------------
    // Append vs. render
    // ------------------------------------------------------------------------

    #[test]
    fn test_append_twice_duplicates() {
        let renderer = SidebarRenderer::default();
        let mut root = container();
        renderer.append_sidebar(&mut root, &languages());
        renderer.append_sidebar(&mut root, &languages());
        assert_eq!(root.child_elements().count(), 2);
        assert_eq!(root.select_by_tag("input").len(), 4);
    }

    #[test]
    fn test_render_twice_is_idempotent() {
        let renderer = SidebarRenderer::default();
        let mut root = container();
        renderer.render_sidebar(&mut root, &languages());
        let first = root.to_html();
        renderer.render_sidebar(&mut root, &languages());
        assert_eq!(root.to_html(), first);
    }

    #[test]
    fn test_render_replaces_previous_dataset() {
        let renderer = SidebarRenderer::default();
        let mut root = container();
        renderer.render_sidebar(&mut root, &default_dataset());
        renderer.render_sidebar(&mut root, &languages());
        assert_eq!(root.child_elements().count(), 1);
    }

    #[test]
    fn test_custom_classes() {
        let classes = SidebarClasses {
            section: "my-section".to_string(),
            ..SidebarClasses::default()
        };
        let renderer = SidebarRenderer::new(classes);
        let mut root = container();
        renderer.render_sidebar(&mut root, &languages());
        assert!(root.child_elements().next().unwrap().has_class("my-section"));
        assert_eq!(renderer.classes().section, "my-section");
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    fn arb_dataset() -> impl Strategy<Value = FilterDataset> {
        proptest::collection::vec(
            ("[a-z_-]{0,6}", proptest::collection::vec("[a-z -]{0,6}", 0..6)),
            0..6,
        )
        .prop_map(|entries| {
            let mut dataset = FilterDataset::new();
            for (name, labels) in entries {
                // Repeated names are simply skipped.
                let _ = dataset.push(Category::new(name, labels));
            }
            dataset
        })
    }

    proptest! {
        #[test]
        fn test_render_counts_and_unique_ids(dataset in arb_dataset()) {
            let mut root = container();
            let summary = SidebarRenderer::default().render_sidebar(&mut root, &dataset);

            prop_assert_eq!(summary.sections, dataset.len());
            prop_assert_eq!(summary.checkboxes, dataset.label_count());
            prop_assert_eq!(root.child_elements().count(), dataset.len());

            let ids = checkbox_ids(&root);
            prop_assert_eq!(ids.len(), dataset.label_count());
            let unique: HashSet<&String> = ids.iter().collect();
            prop_assert_eq!(unique.len(), ids.len());
        }

        #[test]
        fn test_render_is_deterministic(dataset in arb_dataset()) {
            let renderer = SidebarRenderer::default();
            let mut a = container();
            let mut b = container();
            renderer.render_sidebar(&mut a, &dataset);
            renderer.render_sidebar(&mut b, &dataset);
            prop_assert_eq!(a, b);
        }
    }
}
