//! GitHub GraphQL endpoint aliases and resolution logic.

use anyhow::Result;

use crate::error::Error;

// ---------------------------------------------------------------------------
// Known endpoints
// ---------------------------------------------------------------------------

/// Short alias → GraphQL endpoint for well-known GitHub instances.
pub const KNOWN_ENDPOINTS: &[(&str, &str)] = &[("github", "https://api.github.com/graphql")];

/// Path GitHub Enterprise Server mounts its GraphQL API under.
const ENTERPRISE_GRAPHQL_PATH: &str = "/api/graphql";

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve an `--api` value to a GraphQL endpoint URL.
///
/// - **Short alias** → `"github"` gives `https://api.github.com/graphql`.
/// - **URL ending in `/graphql`** → used as-is, trailing `/` stripped.
/// - **Bare host URL** (`https://ghe.corp.com`) → GitHub Enterprise layout,
///   `/api/graphql` appended.
///
/// Returns [`Error::UnknownEndpoint`] for unrecognised short names.
pub fn resolve(s: &str) -> Result<String> {
    let s = s.trim();

    if s.starts_with("http://") || s.starts_with("https://") {
        let url = s.trim_end_matches('/');
        if url.ends_with("/graphql") {
            return Ok(url.to_owned());
        }
        let has_path = url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .contains('/');
        if has_path {
            return Ok(format!("{url}/graphql"));
        }
        return Ok(format!("{url}{ENTERPRISE_GRAPHQL_PATH}"));
    }

    KNOWN_ENDPOINTS
        .iter()
        .find(|(alias, _)| *alias == s)
        .map(|(_, url)| (*url).to_owned())
        .ok_or_else(|| Error::UnknownEndpoint(s.to_owned()).into())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_alias() {
        assert_eq!(resolve("github").unwrap(), "https://api.github.com/graphql");
    }

    #[test]
    fn resolve_alias_ignores_surrounding_whitespace() {
        assert_eq!(resolve("  github ").unwrap(), "https://api.github.com/graphql");
    }

    #[test]
    fn resolve_full_graphql_url_is_kept() {
        assert_eq!(
            resolve("https://api.github.com/graphql/").unwrap(),
            "https://api.github.com/graphql"
        );
    }

    #[test]
    fn resolve_bare_enterprise_host_appends_api_path() {
        assert_eq!(
            resolve("https://ghe.corp.com").unwrap(),
            "https://ghe.corp.com/api/graphql"
        );
        assert_eq!(
            resolve("https://ghe.corp.com/").unwrap(),
            "https://ghe.corp.com/api/graphql"
        );
    }

    #[test]
    fn resolve_url_with_path_appends_graphql() {
        assert_eq!(
            resolve("http://127.0.0.1:8080/api").unwrap(),
            "http://127.0.0.1:8080/api/graphql"
        );
    }

    #[test]
    fn resolve_unknown_alias_errors() {
        let err = resolve("gitlab").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::UnknownEndpoint(name)) if name == "gitlab"
        ));
        assert!(err.to_string().contains("github"), "error should name the alias");
    }
}
