use anyhow::{Context, Result};
use chrono::DateTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use repo_tags::config::Config;
use repo_tags::github::{CreateTagRequest, GitHubClient, Tagger, Timestamp};

#[derive(Parser)]
#[command(name = "repo-tags")]
#[command(about = "List, inspect and create tags in a GitHub repository")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// GitHub token (can also be set via GITHUB_TOKEN env var)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// API root, e.g. https://ghe.example.com/api/v3
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Repository owner (user or organization)
    #[arg(short, long)]
    owner: String,

    /// Repository name
    #[arg(short, long)]
    repo: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the repository's tags
    List,

    /// Show an annotated tag object
    Get {
        /// SHA of the tag object
        #[arg(short, long)]
        sha: String,
    },

    /// Create an annotated tag object (does not create the ref)
    Create {
        /// Tag name
        #[arg(short, long)]
        tag: String,

        #[arg(short, long)]
        message: Option<String>,

        /// SHA of the object to tag
        #[arg(long)]
        object: String,

        /// Type of the tagged object
        #[arg(long = "type", default_value = "commit")]
        kind: String,

        #[arg(long)]
        tagger_name: Option<String>,

        #[arg(long)]
        tagger_email: Option<String>,

        /// RFC 3339 timestamp
        #[arg(long)]
        tagger_date: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.merge_overrides(cli.api_url.clone(), cli.token.clone());

    let github_client = GitHubClient::new(&config.github)?;
    let tags = github_client.tags(cli.owner.as_str(), cli.repo.as_str());

    match cli.command {
        Commands::List => {
            let response = tags.list_tags().await?;
            println!("{}", serde_json::to_string_pretty(&response.value)?);
        }
        Commands::Get { sha } => match tags.get_tag(&sha).await {
            Ok(response) => println!("{}", serde_json::to_string_pretty(&response.value)?),
            Err(e) if e.is_not_found() => {
                eprintln!("✗ {}/{}: no tag object {}", cli.owner, cli.repo, sha);
                std::process::exit(1);
            }
            Err(e) => return Err(e.into()),
        },
        Commands::Create {
            tag,
            message,
            object,
            kind,
            tagger_name,
            tagger_email,
            tagger_date,
        } => {
            let mut request = CreateTagRequest::new(tag, object).kind(kind);
            if let Some(message) = message {
                request = request.message(message);
            }
            if tagger_name.is_some() || tagger_email.is_some() || tagger_date.is_some() {
                let date = tagger_date
                    .map(|d| {
                        DateTime::parse_from_rfc3339(&d)
                            .map(|dt| Timestamp::from(dt.with_timezone(&chrono::Utc)))
                            .with_context(|| format!("invalid --tagger-date: {}", d))
                    })
                    .transpose()?;
                request = request.tagger(Tagger {
                    name: tagger_name,
                    email: tagger_email,
                    date,
                });
            }

            let response = tags.create_tag(&request).await?;
            println!("{}", serde_json::to_string_pretty(&response.value)?);
            if let Some(sha) = &response.value.sha {
                eprintln!("Created tag object {}; create refs/tags/<name> pointing at it to publish.", sha);
            }
        }
    }

    Ok(())
}
