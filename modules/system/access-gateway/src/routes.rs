//! Static route classification.
//!
//! Every request path falls into exactly one [`RouteClass`]. Paths that match
//! nothing are `Protected`, so forgetting to register a page can only make it
//! stricter.

use ridegate_security::Role;
use thiserror::Error;

use crate::config::{AccessConfig, SectionConfig};

/// Errors found while building a [`RouteTable`] from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route path '{0}' must start with '/'")]
    NotAbsolute(String),

    #[error("route path '{0}' must not end with '/'")]
    TrailingSlash(String),

    #[error("auth-only path '{0}' is not listed as public")]
    AuthOnlyNotPublic(String),

    #[error("section '{0}' is registered more than once")]
    DuplicateSection(String),

    #[error("section '{0}' overlaps public path '{1}'")]
    SectionIsPublic(String, String),
}

/// Request paths that cannot be reduced to a canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("request path is not valid percent-encoded UTF-8")]
    InvalidEncoding,

    #[error("request path contains a '.' or '..' segment")]
    DotSegment,
}

/// Extensions that mark a file as a page rather than an asset.
const PAGE_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// A role-restricted part of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    path: String,
    role: Role,
    require_driver_approval: bool,
}

impl Section {
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn requires_driver_approval(&self) -> bool {
        self.require_driver_approval
    }
}

impl From<&SectionConfig> for Section {
    fn from(cfg: &SectionConfig) -> Self {
        Self {
            path: cfg.path.clone(),
            role: cfg.role,
            require_driver_approval: cfg.require_driver_approval,
        }
    }
}

/// Classification of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass<'a> {
    /// Public, but an authenticated visitor is sent home.
    AuthOnly,
    Public,
    /// Needs a credential; any principal may proceed.
    Protected,
    /// Needs a principal holding the section's role.
    RoleRestricted(&'a Section),
}

/// Segment-aware prefix match: `prefix` matches `path` when they are equal or
/// `path` continues `prefix` with a `/`.
///
/// The root path only matches itself.
#[must_use]
pub fn path_matches(prefix: &str, path: &str) -> bool {
    if prefix == "/" {
        return path == "/";
    }
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Reduce a raw request path to the form the site's file server resolves.
///
/// The path is percent-decoded and empty segments are collapsed, so
/// `/%61dmin/` and `//admin/` both become `/admin/`. A trailing `/` is kept.
///
/// # Errors
/// Returns [`PathError`] for invalid encodings and for `.` or `..` segments.
pub fn canonical_path(raw: &str) -> Result<String, PathError> {
    let decoded = urlencoding::decode(raw).map_err(|_| PathError::InvalidEncoding)?;

    let mut canonical = String::with_capacity(decoded.len() + 1);
    for segment in decoded.split('/').filter(|s| !s.is_empty()) {
        if segment == "." || segment == ".." {
            return Err(PathError::DotSegment);
        }
        canonical.push('/');
        canonical.push_str(segment);
    }
    if canonical.is_empty() || decoded.ends_with('/') {
        canonical.push('/');
    }
    Ok(canonical)
}

/// Whether the last segment names a non-page file (`app.js`, `logo.svg`).
fn names_asset_file(path: &str) -> bool {
    let name = path.rsplit_once('/').map_or(path, |(_, name)| name);
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        !ext.is_empty() && !PAGE_EXTENSIONS.iter().any(|page| ext.eq_ignore_ascii_case(page))
    })
}

/// Immutable route table shared by all requests.
#[derive(Debug, Clone)]
pub struct RouteTable {
    public: Vec<String>,
    auth_only: Vec<String>,
    static_prefixes: Vec<String>,
    // Sorted by descending path length so the first match is the most specific.
    sections: Vec<Section>,
}

impl RouteTable {
    /// Build and validate the route table.
    ///
    /// # Errors
    /// Returns [`RouteTableError`] when a path is malformed, an auth-only path is
    /// not public, or a section is duplicated or shadowed by a public path.
    pub fn from_config(cfg: &AccessConfig) -> Result<Self, RouteTableError> {
        for path in cfg
            .public_paths
            .iter()
            .chain(&cfg.auth_only_paths)
            .chain(&cfg.static_prefixes)
            .chain(cfg.sections.iter().map(|s| &s.path))
        {
            validate_path(path)?;
        }

        if let Some(path) = cfg
            .auth_only_paths
            .iter()
            .find(|p| !cfg.public_paths.contains(p))
        {
            return Err(RouteTableError::AuthOnlyNotPublic(path.clone()));
        }

        let mut sections: Vec<Section> = cfg.sections.iter().map(Section::from).collect();
        sections.sort_by(|a, b| b.path.len().cmp(&a.path.len()).then(a.path.cmp(&b.path)));
        if let Some(dup) = sections.windows(2).find(|w| w[0].path == w[1].path) {
            return Err(RouteTableError::DuplicateSection(dup[0].path.clone()));
        }

        for section in &sections {
            if let Some(public) = cfg
                .public_paths
                .iter()
                .find(|p| path_matches(p, &section.path) || path_matches(&section.path, p))
            {
                return Err(RouteTableError::SectionIsPublic(
                    section.path.clone(),
                    public.clone(),
                ));
            }
        }

        Ok(Self {
            public: cfg.public_paths.clone(),
            auth_only: cfg.auth_only_paths.clone(),
            static_prefixes: cfg.static_prefixes.clone(),
            sections,
        })
    }

    /// Framework-internal directories, and paths whose last segment names a
    /// file other than an HTML page.
    ///
    /// Expects a path produced by [`canonical_path`].
    #[must_use]
    pub fn is_static_asset(&self, path: &str) -> bool {
        self.static_prefixes.iter().any(|p| path_matches(p, path)) || names_asset_file(path)
    }

    #[must_use]
    pub fn classify(&self, path: &str) -> RouteClass<'_> {
        if self.auth_only.iter().any(|p| path_matches(p, path)) {
            return RouteClass::AuthOnly;
        }
        if self.public.iter().any(|p| path_matches(p, path)) {
            return RouteClass::Public;
        }
        self.sections
            .iter()
            .find(|s| path_matches(&s.path, path))
            .map_or(RouteClass::Protected, RouteClass::RoleRestricted)
    }

    #[must_use]
    pub fn is_public(&self, path: &str) -> bool {
        matches!(
            self.classify(path),
            RouteClass::AuthOnly | RouteClass::Public
        )
    }

    #[must_use]
    pub fn is_auth_only(&self, path: &str) -> bool {
        matches!(self.classify(path), RouteClass::AuthOnly)
    }
}

fn validate_path(path: &str) -> Result<(), RouteTableError> {
    if !path.starts_with('/') {
        return Err(RouteTableError::NotAbsolute(path.to_owned()));
    }
    if path.len() > 1 && path.ends_with('/') {
        return Err(RouteTableError::TrailingSlash(path.to_owned()));
    }
    Ok(())
}
