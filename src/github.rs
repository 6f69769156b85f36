//! GitHub GraphQL API client and response types.
//!
//! A single query fetches everything the summary card needs: the
//! contribution calendar, contribution totals, pull-request and issue counts,
//! and the user's owned (non-fork) repositories.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::error::Error;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of owned repositories requested.  GitHub caps a connection page at
/// 100, and the language breakdown only needs a representative sample.
const REPOSITORY_PAGE_SIZE: u32 = 100;

/// The summary query.  The login travels as a GraphQL variable so it is never
/// spliced into the query text.
const USER_QUERY: &str = r#"query($login: String!, $first: Int!) {
  user(login: $login) {
    name
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            date
            contributionCount
          }
        }
      }
      totalCommitContributions
      restrictedContributionsCount
      totalRepositoriesWithContributedCommits
    }
    pullRequests { totalCount }
    issues { totalCount }
    repositories(first: $first, isFork: false, ownerAffiliations: OWNER) {
      nodes {
        stargazerCount
        primaryLanguage { name }
      }
    }
  }
}"#;

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client bound to a single GitHub GraphQL endpoint.
pub struct GithubClient {
    /// Full endpoint URL, e.g. `https://api.github.com/graphql`.
    endpoint: String,
    http: Client,
    /// Personal access token sent as `Authorization: Bearer`.
    token: Option<String>,
}

impl GithubClient {
    /// Construct a client for the given GraphQL endpoint (see
    /// [`crate::endpoint::resolve`]).
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
            token: None,
        })
    }

    /// Attach a personal access token.  GitHub's GraphQL API rejects
    /// anonymous requests, so [`fetch_user`](Self::fetch_user) requires one.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    // -----------------------------------------------------------------------
    // Public API
    // -----------------------------------------------------------------------

    /// Fetch the raw activity data for `login`.
    pub async fn fetch_user(&self, login: &str) -> Result<User> {
        let token = self.token.as_deref().ok_or(Error::MissingToken)?;

        let body = serde_json::json!({
            "query": USER_QUERY,
            "variables": { "login": login, "first": REPOSITORY_PAGE_SIZE },
        });

        log::debug!("POST {} (login={login})", self.endpoint);
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("POST {}", self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            // Keep the body for the error message, but don't fail if reading
            // it errors out.
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let text = response.text().await?;
        parse_user_response(&text, login)
    }
}

/// Decode a GraphQL response body into the requested [`User`].
fn parse_user_response(text: &str, login: &str) -> Result<User> {
    let resp: GraphqlResponse<UserData> = serde_json::from_str(text)
        .with_context(|| format!("deserialising GraphQL response for {login:?}"))?;

    if !resp.errors.is_empty() {
        let messages = resp
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(Error::Graphql(messages).into());
    }

    resp.data
        .and_then(|d| d.user)
        .ok_or_else(|| Error::UserNotFound(login.to_owned()).into())
}

// ---------------------------------------------------------------------------
// Serde types
// ---------------------------------------------------------------------------

/// Standard GraphQL envelope: `data` may be `null` when `errors` is set.
#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct UserData {
    user: Option<User>,
}

/// The fields of a GitHub `User` the summary is built from.
///
/// Every nested object is required: a response missing the calendar or the
/// repository list fails deserialisation instead of producing a partial card.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Display name; `None` when the profile has no name set.
    pub name: Option<String>,
    pub contributions_collection: ContributionsCollection,
    pub pull_requests: TotalCount,
    pub issues: TotalCount,
    pub repositories: RepositoryConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    pub contribution_calendar: ContributionCalendar,
    pub total_commit_contributions: u64,
    /// Contributions to private repositories the viewer cannot see.
    pub restricted_contributions_count: u64,
    pub total_repositories_with_contributed_commits: u64,
}

/// Past-year contribution calendar, as GitHub's profile graph shows it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    pub total_contributions: u64,
    /// Weeks in chronological order, each Sunday-first.
    pub weeks: Vec<ContributionWeek>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    pub contribution_days: Vec<ContributionDay>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub contribution_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    pub total_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct RepositoryConnection {
    pub nodes: Vec<Repository>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub stargazer_count: u64,
    /// `None` for repositories GitHub could not classify (empty, docs-only…).
    pub primary_language: Option<Language>,
}

impl Repository {
    /// Name of the primary language, if GitHub detected one.
    pub fn language(&self) -> Option<&str> {
        self.primary_language.as_ref().map(|l| l.name.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Language {
    pub name: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
