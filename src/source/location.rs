//! `SourceLocation` enum for lockfile sources
//!
//! Where a locked cookbook is fetched from.

use std::fmt;

/// Resolved location of a cookbook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// Community site or any other site API
    Site {
        /// Site API URL
        site: String,
    },
    /// Local directory
    Path {
        /// Path to the cookbook directory
        path: String,
    },
    /// Git repository
    Git {
        /// Repository URL
        git: String,
        /// Branch, tag or SHA
        git_ref: Option<String>,
        /// Subdirectory within the repository
        rel: Option<String>,
    },
    /// Chef server
    ChefApi {
        /// Chef server URL
        chef_api: String,
        /// Client name used to authenticate
        node_name: Option<String>,
    },
}

impl SourceLocation {
    /// Create a site location
    pub fn site(url: impl Into<String>) -> Self {
        Self::Site { site: url.into() }
    }

    /// Create a local path location
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path { path: path.into() }
    }

    /// Create a git location, optionally pinned to a ref
    pub fn git(url: impl Into<String>, git_ref: Option<&str>) -> Self {
        Self::Git {
            git: url.into(),
            git_ref: git_ref.map(str::to_string),
            rel: None,
        }
    }

    /// Key under which this location's primary value is stored
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Site { .. } => "site",
            Self::Path { .. } => "path",
            Self::Git { .. } => "git",
            Self::ChefApi { .. } => "chef_api",
        }
    }

    /// URL or path identifying the location
    pub fn target(&self) -> &str {
        match self {
            Self::Site { site } => site,
            Self::Path { path } => path,
            Self::Git { git, .. } => git,
            Self::ChefApi { chef_api, .. } => chef_api,
        }
    }

    /// Number of fields this location contributes to a serialized source
    pub(crate) fn field_count(&self) -> usize {
        match self {
            Self::Site { .. } | Self::Path { .. } => 1,
            Self::Git { git_ref, rel, .. } => {
                1 + usize::from(git_ref.is_some()) + usize::from(rel.is_some())
            }
            Self::ChefApi { node_name, .. } => 1 + usize::from(node_name.is_some()),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Git {
                git,
                git_ref: Some(git_ref),
                ..
            } => write!(f, "git: {git} ({git_ref})"),
            _ => write!(f, "{}: {}", self.kind(), self.target()),
        }
    }
}
