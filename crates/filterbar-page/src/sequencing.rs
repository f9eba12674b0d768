//! Order of load and render on page-ready.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// When the dataset fetch happens relative to the first render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sequencing {
    /// Await the fetch, then render whatever dataset is active.
    #[default]
    LoadThenRender,
    /// Render the active dataset, then fetch. A successful fetch replaces the
    /// dataset but the sidebar on the page is left as it was.
    RenderThenLoad,
    /// Render, fetch, and render again if the fetch replaced the dataset.
    RenderThenRefresh,
}

impl Sequencing {
    /// All policies.
    pub const ALL: [Sequencing; 3] = [
        Sequencing::LoadThenRender,
        Sequencing::RenderThenLoad,
        Sequencing::RenderThenRefresh,
    ];

    /// Kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Sequencing::LoadThenRender => "load-then-render",
            Sequencing::RenderThenLoad => "render-then-load",
            Sequencing::RenderThenRefresh => "render-then-refresh",
        }
    }

    /// Returns `true` if the sidebar is rendered before the fetch.
    pub fn renders_first(self) -> bool {
        !matches!(self, Sequencing::LoadThenRender)
    }
}

impl fmt::Display for Sequencing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sequencing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s)
            .ok_or_else(|| Error::UnknownSequencing(s.to_string()))
    }
}
