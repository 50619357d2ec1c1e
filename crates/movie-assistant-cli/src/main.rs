use std::io::Write;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use movie_assistant_core::config_file::{self, ApiSettings};
use movie_assistant_core::{
    ApiClient, CompletionOutcome, Movie, PreferenceField, RecommendationApi, Session,
};

mod output;

use output::ColorMode;

/// Movie Assistant: ask the recommendation service for films that fit your mood
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the recommendation service
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the genres and moods the service accepts
    Options {
        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },

    /// Ask for movie recommendations
    Recommend {
        /// Genre (default: first genre offered by the service)
        #[arg(long)]
        genre: Option<String>,

        /// Mood or vibe (default: first mood offered by the service)
        #[arg(long)]
        mood: Option<String>,

        /// What the movie is about, as a few keywords
        #[arg(long, default_value = "")]
        content: String,

        /// A specific detail the movie must have
        #[arg(long, default_value = "")]
        element: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Preferences given on the command line. `None` selectors are seeded from
/// the service's option lists.
#[derive(Debug, Default)]
struct RecommendArgs {
    genre: Option<String>,
    mood: Option<String>,
    content: String,
    element: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "movie_assistant=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Resolve config: CLI flags > env vars > config file > defaults
    let file_cfg = config_file::load_config();
    let settings = ApiSettings::resolve(cli.api_url, cli.timeout, &file_cfg);
    let client = ApiClient::new(&settings.base_url, settings.timeout)?;
    tracing::debug!(base_url = %settings.base_url, "using recommendation service");

    let color = ColorMode(!cli.no_color);
    let mut stdout = std::io::stdout();
    match cli.command {
        Command::Options { json } => {
            let options = client.fetch_options().await?;
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&options)?)?;
            } else {
                output::print_options(&mut stdout, &options, color)?;
            }
        }
        Command::Recommend {
            genre,
            mood,
            content,
            element,
            json,
        } => {
            let args = RecommendArgs {
                genre,
                mood,
                content,
                element,
            };
            let movies = recommend(&client, args).await?;
            if json {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&movies)?)?;
            } else {
                output::print_recommendations(&mut stdout, &movies, color)?;
            }
        }
    }

    Ok(())
}

/// Run one search the way the form does: seed the selectors from the option
/// lists, overlay what the user gave, submit, and take the completion.
async fn recommend(api: &dyn RecommendationApi, args: RecommendArgs) -> anyhow::Result<Vec<Movie>> {
    let mut session = Session::new();

    // A failed fetch is logged and leaves the selectors empty, as in the form.
    if args.genre.is_none() || args.mood.is_none() {
        session.apply_options(api.fetch_options().await);
    }
    if let Some(genre) = args.genre {
        session.update_field(PreferenceField::Genre, genre);
    }
    if let Some(mood) = args.mood {
        session.update_field(PreferenceField::Mood, mood);
    }
    session.update_field(PreferenceField::Content, args.content);
    session.update_field(PreferenceField::Element, args.element);

    let ticket = session.begin_search();
    tracing::info!(
        genre = %ticket.preferences.genre,
        mood = %ticket.preferences.mood,
        "requesting recommendations"
    );
    let result = api.recommend(&ticket.preferences).await;

    match result {
        Ok(movies) => match session.complete_search(ticket.seq, Ok(movies)) {
            CompletionOutcome::Applied { .. } => Ok(session.results),
            outcome => anyhow::bail!("search was not applied: {:?}", outcome),
        },
        Err(e) => {
            let message = e.to_string();
            session.complete_search(ticket.seq, Err(e));
            anyhow::bail!(message)
        }
    }
}
