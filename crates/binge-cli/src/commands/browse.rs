use catalog_core::views::{browse_view, BrowseParams};
use catalog_core::SortKey;
use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::app::App;
use crate::output::{content_table, page_summary, Output};

pub async fn run(
    app: &App,
    output: &Output,
    genre: Option<String>,
    sort: &str,
    page: u32,
) -> Result<()> {
    let sort_by: SortKey = sort.parse().map_err(|e: String| eyre!(e))?;
    let params = BrowseParams {
        genre_slug: genre,
        sort_by,
        page,
        per_page: app.config.catalog.per_page,
    };

    let spinner = output.spinner("Loading catalog...");
    let result = browse_view(&app.catalog, &params).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
    let view = result?;

    output.view(&view, || {
        let heading = match &view.selected_genre {
            Some(genre) => format!("Browse: {} ({})", genre.name, view.sort_by),
            None => format!("Browse: all titles ({})", view.sort_by),
        };
        output.heading(heading);

        if view.results.items.is_empty() {
            println!("  no titles on this page");
        } else {
            println!("{}", content_table(&view.results.items));
        }
        println!(
            "{}",
            page_summary(
                view.results.page,
                view.results.total_pages,
                view.results.total_count
            )
        );
    });

    Ok(())
}
