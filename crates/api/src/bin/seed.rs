//! Replace the stories table with the contents of two story files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use companion_api::seed::{build_records, parse_story_file};
use companion_core::language::Language;
use companion_db::models::story::CreateStory;
use companion_db::repositories::StoryRepo;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Italian story file.
    #[arg(long, default_value = "data/claudiate-it.json")]
    italian: PathBuf,

    /// English story file.
    #[arg(long, default_value = "data/claudiate-en.json")]
    english: PathBuf,
}

fn load(path: &Path, language: Language) -> anyhow::Result<Vec<CreateStory>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let stories =
        parse_story_file(&json).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(build_records(language, stories))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "companion_seed=info,companion_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut records = load(&args.italian, Language::It)?;
    records.extend(load(&args.english, Language::En)?);

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = companion_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    companion_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let inserted = StoryRepo::replace_all(&pool, &records).await?;
    tracing::info!(inserted, "Stories table replaced");

    for language in [Language::It, Language::En] {
        let count = StoryRepo::count_by_language(&pool, language).await?;
        tracing::info!(language = %language, count, "Stories seeded");
    }

    Ok(())
}
