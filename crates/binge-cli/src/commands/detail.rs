use catalog_core::views::detail_view;
use color_eyre::Result;

use crate::app::App;
use crate::output::Output;

pub async fn run(app: &App, output: &Output, content_id: &str) -> Result<()> {
    let session = app.session().await?;

    let spinner = output.spinner("Loading title...");
    let result = detail_view(&app.catalog, &session, content_id).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
    let view = result?;

    output.view(&view, || {
        let content = &view.content;
        output.heading(format!("{} ({})", content.title, content.release_year));
        println!(
            "  {} | {} | {} min | ★ {:.1} ({} ratings)",
            content.content_type,
            content.rating,
            content.duration_minutes,
            content.average_rating,
            content.total_ratings
        );
        if let Some(pct) = content.match_percentage {
            println!("  {}% match", pct);
        }
        println!();
        println!("  {}", content.description);

        let genres: Vec<&str> = content.genres.iter().map(|g| g.name.as_str()).collect();
        println!();
        println!("  Genres: {}", genres.join(", "));
        if let Some(director) = &content.director {
            println!("  Director: {}", director);
        }
        if !content.cast.is_empty() {
            let cast: Vec<String> = content
                .cast
                .iter()
                .map(|m| format!("{} ({})", m.name, m.character))
                .collect();
            println!("  Cast: {}", cast.join(", "));
        }

        println!();
        if view.is_in_watchlist {
            println!("  ✓ in your list");
        }
        if let Some(progress) = &view.watch_progress {
            println!("  watched to {}%", progress.progress);
        }

        if let Some(seasons) = &view.seasons {
            output.heading("Seasons");
            for season in seasons {
                println!(
                    "  {} ({}, {} episodes)",
                    season.title,
                    season.release_year,
                    season.episodes.len()
                );
            }
        }

        if !view.similar.is_empty() {
            output.heading("More like this");
            for similar in &view.similar {
                println!(
                    "  {:6} {} ({})",
                    similar.id, similar.title, similar.release_year
                );
            }
        }
    });

    Ok(())
}
