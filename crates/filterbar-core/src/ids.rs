//! Element identifiers used by the filter page.
//!
//! Checkbox ids are composed as `filter-<category>-<label>` from the raw
//! category and label text. The label element's `for` attribute points at
//! the same string, so the composition must be stable.

use std::collections::HashSet;

/// Id of the element the sidebar sections are appended to.
pub const FILTER_CONTAINER_ID: &str = "filter-container";

/// Id of the element that triggers the analysis download.
pub const DOWNLOAD_TRIGGER_ID: &str = "download";

/// Server path answering `?collection=<name>` with the analysis artifact as
/// an attachment. The download trigger links here.
pub const DOWNLOAD_ROUTE: &str = "/download_analysis";

/// Prefix of every checkbox id.
pub const FILTER_ID_PREFIX: &str = "filter";

/// Compose the checkbox id for a (category, label) pair.
///
/// # Examples
///
/// ```
/// use filterbar_core::filter_control_id;
///
/// assert_eq!(filter_control_id("Languages", "python"), "filter-Languages-python");
/// assert_eq!(filter_control_id("tools", "vs code"), "filter-tools-vs code");
/// ```
pub fn filter_control_id(category: &str, label: &str) -> String {
    format!("{FILTER_ID_PREFIX}-{category}-{label}")
}

/// Hands out page-unique ids.
///
/// Two distinct (category, label) pairs can compose to the same id
/// (`("a-b", "c")` and `("a", "b-c")`). The first claim keeps the plain id;
/// later claims get `-2`, `-3`, ... appended.
#[derive(Debug, Default)]
pub struct IdAllocator {
    taken: HashSet<String>,
}

impl IdAllocator {
    /// Create an empty allocator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `base`, or the first free suffixed variant of it.
    pub fn claim(&mut self, base: String) -> String {
        if !self.taken.contains(&base) {
            self.taken.insert(base.clone());
            return base;
        }

        let mut n = 2usize;
        loop {
            let candidate = format!("{base}-{n}");
            if self.taken.insert(candidate.clone()) {
                log::debug!("Id '{base}' already taken, using '{candidate}'");
                return candidate;
            }
            n += 1;
        }
    }

    /// Number of ids handed out so far.
    pub fn len(&self) -> usize {
        self.taken.len()
    }

    /// Returns `true` if nothing has been claimed.
    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}
