//! Page view models derived from proxy-injected identity headers

use http::{HeaderMap, Request};
use serde::Serialize;

/// Header carrying the authenticated username
pub const CURRENT_USER_HEADER: &str = "x-current-user";

/// Header carrying the comma-separated role list
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Header carrying the upstream access decision
pub const USER_METADATA_HEADER: &str = "x-user-metadata";

/// Status glyph shown on public pages
pub const GLOBE_GLYPH: &str = "🌐";

/// Status glyph shown on private pages
pub const CHECKMARK_GLYPH: &str = "✓";

/// Decision placeholder on public pages, where no access decision applies
pub const DECISION_NOT_APPLICABLE: &str = "N/A";

/// Render-ready data for a single portal page
///
/// Built fresh per request and handed to the template layer. Identity
/// fields are taken verbatim from the headers injected by the upstream
/// proxy; an absent header becomes an empty string, so construction never
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageData {
    /// Whether the page is publicly visible
    pub is_public: bool,

    /// Status glyph, a function of `is_public` only
    pub status_icon: String,

    /// Request URL path, verbatim
    pub path: String,

    /// Authenticated username, empty if the proxy sent none
    pub username: String,

    /// Raw comma-separated role header
    pub roles: String,

    /// Parsed roles, trimmed, in header order
    pub role_list: Vec<String>,

    /// Upstream access decision; `"N/A"` on public pages
    pub decision: String,
}

impl PageData {
    /// Build the view model for a request.
    pub fn from_request<B>(request: &Request<B>, is_public: bool) -> Self {
        Self::from_parts(request.uri().path(), request.headers(), is_public)
    }

    /// Build the view model from an already-decomposed path and header map.
    pub fn from_parts(path: &str, headers: &HeaderMap, is_public: bool) -> Self {
        let username = header_value(headers, CURRENT_USER_HEADER);
        let roles = header_value(headers, USER_ROLE_HEADER);
        let role_list = split_roles(&roles);

        let status_icon = if is_public { GLOBE_GLYPH } else { CHECKMARK_GLYPH };

        let decision = if is_public {
            DECISION_NOT_APPLICABLE.to_string()
        } else {
            header_value(headers, USER_METADATA_HEADER)
        };

        PageData {
            is_public,
            status_icon: status_icon.to_string(),
            path: path.to_string(),
            username,
            roles,
            role_list,
            decision,
        }
    }
}

/// Read a header as a string, treating absent or non-ASCII values as empty.
fn header_value(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Split the raw role header into trimmed segments.
///
/// An empty header means zero roles, not one empty role, so the empty
/// input is handled before splitting.
fn split_roles(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|role| role.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_roles_empty_input_yields_no_roles() {
        assert!(split_roles("").is_empty());
    }

    #[test]
    fn test_split_roles_trims_whitespace() {
        assert_eq!(split_roles(" admin , editor "), vec!["admin", "editor"]);
    }

    #[test]
    fn test_split_roles_preserves_order() {
        assert_eq!(
            split_roles("admin,editor,viewer"),
            vec!["admin", "editor", "viewer"]
        );
    }

    #[test]
    fn test_split_roles_keeps_interior_empty_segments() {
        assert_eq!(split_roles("admin,,viewer"), vec!["admin", "", "viewer"]);
    }

    #[test]
    fn test_split_roles_single_role() {
        assert_eq!(split_roles("auditor"), vec!["auditor"]);
    }
}
