use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use ghsummary::github::GithubClient;
use ghsummary::render::{markdown, svg, text};
use ghsummary::{endpoint, summary};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(
    name = "ghsummary",
    version,
    about = "Fetch GitHub contribution stats and render a profile summary card"
)]
struct Args {
    /// GitHub login to summarise.
    #[arg(long)]
    user: String,

    /// Personal access token; GitHub's GraphQL API rejects anonymous calls.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// `github`, a GraphQL endpoint URL, or a GitHub Enterprise base URL.
    #[arg(long, default_value = "github")]
    api: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// SVG theme: light, dark or auto (follows the viewer's colour scheme).
    #[arg(long, default_value = "light")]
    theme: String,

    /// Write the result here instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Svg,
    Markdown,
    Text,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let url = endpoint::resolve(&args.api)?;
    let client = GithubClient::new(&url)?.with_token(&args.token);

    log::info!("fetching activity for {} from {url} …", args.user);
    let user = client
        .fetch_user(&args.user)
        .await
        .with_context(|| format!("fetching GitHub data for {:?}", args.user))?;

    let s = summary::compute(&args.user, &user);
    log::info!(
        "  {} contributions, longest streak {} days, rank {}",
        s.total_contributions,
        s.streak.max_streak,
        s.score.rank,
    );

    let rendered = match args.format {
        Format::Svg => svg::render(&s, &svg::SvgOptions { theme: &args.theme })?,
        Format::Markdown => markdown::render(&s)?,
        Format::Text => text::render(&s),
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
