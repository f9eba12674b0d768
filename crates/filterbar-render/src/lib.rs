//! # filterbar-render
//!
//! Builds the filter page as an owned element tree.
//!
//! - [`dom`]: a small document model (`Document`, `Element`, `Node`) with
//!   lookup by id and HTML serialization
//! - [`sidebar`]: turns a [`FilterDataset`](filterbar_core::FilterDataset)
//!   into one section per category and one checkbox per label
//! - [`page`]: the filtering-window page skeleton the sidebar is rendered into

#![warn(clippy::all)]

pub mod dom;
pub mod page;
pub mod sidebar;

pub use dom::{Document, Element, Node};
pub use page::filter_window_document;
pub use sidebar::{RenderSummary, SidebarClasses, SidebarRenderer};
