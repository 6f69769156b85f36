//! Typed errors surfaced by the summary pipeline and the GitHub client.
//!
//! Fallible edges return `anyhow::Result`; callers that need to branch on a
//! specific failure can `downcast_ref::<Error>()`.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid date {0:?}: expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate(String),

    #[error("missing GitHub token (pass --token or set GITHUB_TOKEN)")]
    MissingToken,

    #[error("GitHub returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("GitHub GraphQL error: {0}")]
    Graphql(String),

    #[error("GitHub user not found: {0}")]
    UserNotFound(String),

    #[error("unknown theme {0:?}; valid names: light, dark, auto")]
    UnknownTheme(String),

    #[error("unknown API endpoint {0:?}; pass a full URL or `github`")]
    UnknownEndpoint(String),
}
