//! `LockedCookbook` struct for lockfile
//!
//! A resolved cookbook as recorded in `Berksfile.lock`.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BerksError, Result};
use crate::source::{CookbookSource, SourceLocation};

/// A resolved cookbook in the lockfile
///
/// Two cookbooks are equal when they declare the same dependency: same
/// name, constraint and location. The locked version is resolution output
/// and does not take part in equality.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawCookbook")]
pub struct LockedCookbook {
    /// Cookbook name
    pub name: String,

    /// Version picked by the resolver
    pub locked_version: Option<String>,

    /// Version constraint from the manifest
    pub constraint: Option<String>,

    /// Where the cookbook comes from (default site when absent)
    pub location: Option<SourceLocation>,
}

/// Wire shape of a cookbook entry before its location is checked
#[derive(Deserialize)]
struct RawCookbook {
    name: String,
    #[serde(default)]
    locked_version: Option<String>,
    #[serde(default)]
    constraint: Option<String>,
    #[serde(default)]
    site: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    git: Option<String>,
    #[serde(default, rename = "ref")]
    git_ref: Option<String>,
    #[serde(default)]
    rel: Option<String>,
    #[serde(default)]
    chef_api: Option<String>,
    #[serde(default)]
    node_name: Option<String>,
}

impl TryFrom<RawCookbook> for LockedCookbook {
    type Error = String;

    fn try_from(raw: RawCookbook) -> std::result::Result<Self, Self::Error> {
        let orphans = [
            ("ref", raw.git_ref.is_some() && raw.git.is_none(), "git"),
            ("rel", raw.rel.is_some() && raw.git.is_none(), "git"),
            (
                "node_name",
                raw.node_name.is_some() && raw.chef_api.is_none(),
                "chef_api",
            ),
        ];
        if let Some((field, _, owner)) = orphans.iter().find(|(_, orphaned, _)| *orphaned) {
            return Err(format!(
                "cookbook '{}' has '{field}' without '{owner}'",
                raw.name
            ));
        }

        let mut locations = Vec::new();
        if let Some(site) = raw.site {
            locations.push(SourceLocation::Site { site });
        }
        if let Some(path) = raw.path {
            locations.push(SourceLocation::Path { path });
        }
        if let Some(git) = raw.git {
            locations.push(SourceLocation::Git {
                git,
                git_ref: raw.git_ref,
                rel: raw.rel,
            });
        }
        if let Some(chef_api) = raw.chef_api {
            locations.push(SourceLocation::ChefApi {
                chef_api,
                node_name: raw.node_name,
            });
        }

        if locations.len() > 1 {
            let kinds: Vec<_> = locations.iter().map(SourceLocation::kind).collect();
            return Err(format!(
                "cookbook '{}' has conflicting locations: {}",
                raw.name,
                kinds.join(", ")
            ));
        }

        Ok(Self {
            name: raw.name,
            locked_version: raw.locked_version,
            constraint: raw.constraint,
            location: locations.pop(),
        })
    }
}

fn serialize_location<S>(
    state: &mut S::SerializeStruct,
    location: &SourceLocation,
) -> std::result::Result<(), S::Error>
where
    S: serde::Serializer,
{
    match location {
        SourceLocation::Site { site } => state.serialize_field("site", site),
        SourceLocation::Path { path } => state.serialize_field("path", path),
        SourceLocation::Git { git, git_ref, rel } => {
            state.serialize_field("git", git)?;
            if let Some(git_ref) = git_ref {
                state.serialize_field("ref", git_ref)?;
            }
            if let Some(rel) = rel {
                state.serialize_field("rel", rel)?;
            }
            Ok(())
        }
        SourceLocation::ChefApi {
            chef_api,
            node_name,
        } => {
            state.serialize_field("chef_api", chef_api)?;
            if let Some(node_name) = node_name {
                state.serialize_field("node_name", node_name)?;
            }
            Ok(())
        }
    }
}

impl Serialize for LockedCookbook {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let field_count = 1
            + usize::from(self.locked_version.is_some())
            + usize::from(self.constraint.is_some())
            + self.location.as_ref().map_or(0, SourceLocation::field_count);

        let mut state = serializer.serialize_struct("LockedCookbook", field_count)?;
        state.serialize_field("name", &self.name)?;
        if let Some(ref locked_version) = self.locked_version {
            state.serialize_field("locked_version", locked_version)?;
        }
        if let Some(ref constraint) = self.constraint {
            state.serialize_field("constraint", constraint)?;
        }
        if let Some(ref location) = self.location {
            serialize_location::<S>(&mut state, location)?;
        }
        state.end()
    }
}

impl PartialEq for LockedCookbook {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.constraint == other.constraint
            && self.location == other.location
    }
}

impl Eq for LockedCookbook {}

impl LockedCookbook {
    /// Create a cookbook fetched from the default site
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locked_version: None,
            constraint: None,
            location: None,
        }
    }

    /// Create a cookbook fetched from an explicit site
    pub fn site(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(name).with_location(SourceLocation::site(url))
    }

    /// Create a cookbook read from a local directory
    pub fn path(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name).with_location(SourceLocation::path(path))
    }

    /// Create a cookbook cloned from git
    pub fn git(name: impl Into<String>, url: impl Into<String>, git_ref: Option<&str>) -> Self {
        Self::new(name).with_location(SourceLocation::git(url, git_ref))
    }

    #[must_use]
    pub fn with_locked_version(mut self, version: impl Into<String>) -> Self {
        self.locked_version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = Some(constraint.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}

impl CookbookSource for LockedCookbook {
    fn from_decoded(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| BerksError::SourceDecodeFailed {
            reason: e.to_string(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.name.is_empty() {
            return Err("cookbook name cannot be empty".to_string());
        }
        if self.name.chars().any(char::is_whitespace) {
            return Err(format!("cookbook name '{}' contains whitespace", self.name));
        }
        if matches!(self.constraint.as_deref(), Some(c) if c.trim().is_empty()) {
            return Err(format!("cookbook '{}' has an empty constraint", self.name));
        }
        if let Some(ref location) = self.location {
            if location.target().is_empty() {
                return Err(format!(
                    "cookbook '{}' has an empty {} location",
                    self.name,
                    location.kind()
                ));
            }
        }
        Ok(())
    }
}
