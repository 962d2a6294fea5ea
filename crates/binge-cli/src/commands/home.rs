use catalog_core::views::home_view;
use color_eyre::Result;

use crate::app::App;
use crate::output::Output;

pub async fn run(app: &App, output: &Output) -> Result<()> {
    let session = app.session().await?;

    let spinner = output.spinner("Loading home...");
    let result = home_view(&app.catalog, &session).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
    let view = result?;

    output.view(&view, || {
        let featured = &view.featured;
        output.heading(format!(
            "Featured: {} ({})",
            featured.content.title, featured.content.release_year
        ));
        if let Some(headline) = &featured.headline {
            println!("  {}", headline);
        }

        if !view.continue_watching.is_empty() {
            output.heading("Continue Watching");
            for item in &view.continue_watching {
                let episode = match (
                    item.history.current_season_number,
                    item.history.current_episode_number,
                ) {
                    (Some(s), Some(e)) => format!("  S{}E{}", s, e),
                    _ => String::new(),
                };
                println!(
                    "  {:6} {} ({}%{})",
                    item.content.id, item.content.title, item.history.progress, episode
                );
            }
        }

        for row in &view.rows {
            output.heading(&row.title);
            for content in &row.contents {
                println!(
                    "  {:6} {} ({})",
                    content.id, content.title, content.release_year
                );
            }
        }
    });

    Ok(())
}
