use catalog_core::views::ResumeItem;
use catalog_store::{ContentRepository, EpisodePointer, UserRepository};
use color_eyre::Result;

use crate::app::App;
use crate::commands::confirm;
use crate::output::Output;

pub async fn show(app: &App, output: &Output, only_in_progress: bool) -> Result<()> {
    let session = app.session().await?;

    let spinner = output.spinner("Loading history...");
    let result = load_entries(app, &session.profile_id, only_in_progress).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
    let entries = result?;

    output.view(&entries, || {
        let title = if only_in_progress {
            "Continue Watching"
        } else {
            "Watch History"
        };
        output.heading(title);
        if entries.is_empty() {
            println!("  nothing here yet");
            return;
        }
        for entry in &entries {
            let episode = match (
                entry.history.current_season_number,
                entry.history.current_episode_number,
            ) {
                (Some(s), Some(e)) => format!(" S{}E{}", s, e),
                _ => String::new(),
            };
            println!(
                "  {:6} {} ({}%{}, {})",
                entry.content.id,
                entry.content.title,
                entry.history.progress,
                episode,
                entry.history.watched_at.format("%Y-%m-%d")
            );
        }
    });

    Ok(())
}

async fn load_entries(
    app: &App,
    profile_id: &str,
    only_in_progress: bool,
) -> Result<Vec<ResumeItem>, catalog_store::StoreError> {
    let history = if only_in_progress {
        app.catalog.continue_watching(profile_id).await?
    } else {
        app.catalog.watch_history(profile_id).await?
    };
    let catalog = app.catalog.all_content().await?;

    Ok(history
        .into_iter()
        .filter_map(|history| {
            catalog
                .iter()
                .find(|c| c.id == history.content_id)
                .cloned()
                .map(|content| ResumeItem { content, history })
        })
        .collect())
}

pub async fn set(
    app: &App,
    output: &Output,
    content_id: &str,
    progress: u8,
    episode: Option<String>,
    season_number: Option<u32>,
    episode_number: Option<u32>,
) -> Result<()> {
    let session = app.session().await?;
    let content = app.catalog.content_by_id(content_id).await?;

    let pointer = if episode.is_some() || season_number.is_some() || episode_number.is_some() {
        Some(EpisodePointer {
            episode_id: episode,
            season_number,
            episode_number,
        })
    } else {
        None
    };

    let record = app
        .catalog
        .upsert_progress(&session.profile_id, content_id, progress, pointer)
        .await?;
    confirm(
        output,
        &record,
        format!("{} progress set to {}%", content.title, record.progress),
    );
    Ok(())
}
