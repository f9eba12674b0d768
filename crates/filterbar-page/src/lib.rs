//! # filterbar-page
//!
//! The filter page as an owned value: the document, the active dataset, and
//! the policy that decides whether the dataset is loaded before or after the
//! sidebar is first rendered.
//!
//! ```rust,no_run
//! # async fn run() -> filterbar_page::Result<()> {
//! use filterbar_client::FilterbarClient;
//! use filterbar_page::{FilterPage, Sequencing};
//!
//! let client = FilterbarClient::from_base_url("http://localhost:8000").unwrap();
//! let mut page = FilterPage::for_collection(None).with_sequencing(Sequencing::LoadThenRender);
//! let report = page.on_ready(&client).await?;
//! println!("{} sections", report.render.sections);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod page;
pub mod sequencing;

pub use error::{Error, Result};
pub use page::{FilterPage, ReadyReport};
pub use sequencing::Sequencing;
