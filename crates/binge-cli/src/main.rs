use clap::{ArgAction, Parser, Subcommand};
use commands::{account, browse, detail, history, home, my_list, profile, search};

mod app;
mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "binge")]
#[command(about = "Binge - browse a streaming catalog from your terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the home screen (featured title, rows, continue watching)
    Home,
    /// Browse the catalog by genre with sorting and pagination
    Browse {
        /// Genre slug to filter by ('all' for everything)
        #[arg(long)]
        genre: Option<String>,

        /// Sort order: newest, oldest, popular, rating, a-z, z-a
        #[arg(long, default_value = "popular")]
        sort: String,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Search titles by text, type, genre, and year
    Search {
        /// Free-text query over titles, descriptions, genres, and cast
        query: Option<String>,

        /// Content type: movie, series, documentary, or all
        #[arg(long = "type", value_name = "TYPE")]
        content_type: Option<String>,

        /// Genre id to filter by
        #[arg(long)]
        genre: Option<String>,

        /// Release year to filter by
        #[arg(long)]
        year: Option<u32>,

        /// Sort order: newest, oldest, popular, rating, a-z, z-a
        #[arg(long)]
        sort: Option<String>,

        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show everything about one title
    Detail {
        /// Content id, e.g. c-12
        content_id: String,
    },
    /// Manage the active profile's list
    #[command(subcommand)]
    List(ListCommands),
    /// Watch history and playback progress
    #[command(subcommand)]
    History(HistoryCommands),
    /// Manage profiles and the active session
    #[command(subcommand)]
    Profile(ProfileCommands),
    /// Account settings and subscription
    #[command(subcommand)]
    Account(AccountCommands),
}

#[derive(Subcommand)]
enum ListCommands {
    /// Show the active profile's list
    Show,
    /// Add a title to the list (no-op if already present)
    Add { content_id: String },
    /// Remove a title from the list (no-op if absent)
    Remove { content_id: String },
    /// Flip a title's membership and report the new state
    Toggle { content_id: String },
}

#[derive(Subcommand)]
enum HistoryCommands {
    /// Show the active profile's watch history, newest first
    Show,
    /// Show only titles that are partway through
    Continue,
    /// Record playback progress for a title
    Set {
        content_id: String,
        /// Progress percentage, 0-100
        progress: u8,
        /// Episode id the progress refers to (series only)
        #[arg(long)]
        episode: Option<String>,
        #[arg(long)]
        season_number: Option<u32>,
        #[arg(long)]
        episode_number: Option<u32>,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// List profiles and show which one is active
    List,
    /// Switch the active profile
    Select { profile_id: String },
    /// Create a profile (prompts unless flags are given)
    Create {
        #[arg(long)]
        name: Option<String>,
        /// Create as a kids profile (locks maturity to TV-Y)
        #[arg(long, action = ArgAction::SetTrue)]
        kids: bool,
    },
    /// Delete a profile; the last one cannot be removed
    Delete {
        profile_id: String,
        /// Skip the confirmation prompt
        #[arg(long, action = ArgAction::SetTrue)]
        yes: bool,
    },
    /// Edit a profile's display attributes
    Edit {
        profile_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        language: Option<String>,
        /// Maturity level, e.g. TV-14 or TV-MA
        #[arg(long)]
        maturity: Option<String>,
    },
}

#[derive(Subcommand)]
enum AccountCommands {
    /// Show account, membership, and subscription details
    Show,
    /// List the available subscription plans
    Plans,
    /// Change the subscription plan: basic, standard, or premium
    SetPlan { plan: String },
    /// Show or change the active profile's notification settings
    Notifications {
        #[arg(long)]
        email: Option<bool>,
        #[arg(long)]
        push: Option<bool>,
        #[arg(long)]
        new_releases: Option<bool>,
        #[arg(long)]
        recommendations: Option<bool>,
        #[arg(long)]
        account_updates: Option<bool>,
    },
    /// Show or change the active profile's playback settings
    Playback {
        #[arg(long)]
        auto_play_next: Option<bool>,
        #[arg(long)]
        auto_play_previews: Option<bool>,
        /// auto, low, medium, or high
        #[arg(long)]
        data_usage: Option<String>,
        /// standard or high
        #[arg(long)]
        download_quality: Option<String>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);
    let app = app::App::init().await?;

    match cli.command {
        Commands::Home => home::run(&app, &output).await,
        Commands::Browse { genre, sort, page } => {
            browse::run(&app, &output, genre, &sort, page).await
        }
        Commands::Search {
            query,
            content_type,
            genre,
            year,
            sort,
            page,
        } => search::run(&app, &output, query, content_type, genre, year, sort, page).await,
        Commands::Detail { content_id } => detail::run(&app, &output, &content_id).await,
        Commands::List(cmd) => match cmd {
            ListCommands::Show => my_list::show(&app, &output).await,
            ListCommands::Add { content_id } => my_list::add(&app, &output, &content_id).await,
            ListCommands::Remove { content_id } => {
                my_list::remove(&app, &output, &content_id).await
            }
            ListCommands::Toggle { content_id } => {
                my_list::toggle(&app, &output, &content_id).await
            }
        },
        Commands::History(cmd) => match cmd {
            HistoryCommands::Show => history::show(&app, &output, false).await,
            HistoryCommands::Continue => history::show(&app, &output, true).await,
            HistoryCommands::Set {
                content_id,
                progress,
                episode,
                season_number,
                episode_number,
            } => {
                history::set(
                    &app,
                    &output,
                    &content_id,
                    progress,
                    episode,
                    season_number,
                    episode_number,
                )
                .await
            }
        },
        Commands::Profile(cmd) => match cmd {
            ProfileCommands::List => profile::list(&app, &output).await,
            ProfileCommands::Select { profile_id } => {
                profile::select(&app, &output, &profile_id).await
            }
            ProfileCommands::Create { name, kids } => {
                profile::create(&app, &output, name, kids).await
            }
            ProfileCommands::Delete { profile_id, yes } => {
                profile::delete(&app, &output, &profile_id, yes).await
            }
            ProfileCommands::Edit {
                profile_id,
                name,
                language,
                maturity,
            } => profile::edit(&app, &output, &profile_id, name, language, maturity).await,
        },
        Commands::Account(cmd) => match cmd {
            AccountCommands::Show => account::show(&app, &output).await,
            AccountCommands::Plans => account::plans(&app, &output).await,
            AccountCommands::SetPlan { plan } => account::set_plan(&app, &output, &plan).await,
            AccountCommands::Notifications {
                email,
                push,
                new_releases,
                recommendations,
                account_updates,
            } => {
                account::notifications(
                    &app,
                    &output,
                    email,
                    push,
                    new_releases,
                    recommendations,
                    account_updates,
                )
                .await
            }
            AccountCommands::Playback {
                auto_play_next,
                auto_play_previews,
                data_usage,
                download_quality,
            } => {
                account::playback(
                    &app,
                    &output,
                    auto_play_next,
                    auto_play_previews,
                    data_usage,
                    download_quality,
                )
                .await
            }
        },
    }
}
