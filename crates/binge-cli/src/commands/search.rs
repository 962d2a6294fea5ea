use catalog_core::views::{search_view, SearchParams};
use catalog_core::{ContentFilter, SortKey};
use catalog_models::ContentType;
use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::app::App;
use crate::output::{content_table, page_summary, Output};

#[allow(clippy::too_many_arguments)]
pub async fn run(
    app: &App,
    output: &Output,
    query: Option<String>,
    content_type: Option<String>,
    genre: Option<String>,
    year: Option<u32>,
    sort: Option<String>,
    page: u32,
) -> Result<()> {
    let content_type = match content_type.as_deref() {
        None | Some("all") => None,
        Some(raw) => Some(raw.parse::<ContentType>().map_err(|e| eyre!(e))?),
    };
    let sort_by = match sort {
        Some(raw) => Some(raw.parse::<SortKey>().map_err(|e: String| eyre!(e))?),
        None => None,
    };

    let params = SearchParams {
        filter: ContentFilter {
            query,
            content_type,
            genre_id: genre,
            year,
            ..Default::default()
        },
        sort_by,
        page,
        per_page: app.config.catalog.per_page,
    };

    // Even a one-shot invocation goes through the ticket flow, so the
    // debounce interval and the last-request-wins guard apply uniformly.
    let ticket = app.debouncer.issue();
    let spinner = output.spinner("Searching...");
    if !app.debouncer.settle(&ticket).await {
        if let Some(s) = spinner {
            s.finish_and_clear();
        }
        return Ok(());
    }
    let result = search_view(&app.catalog, &params).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
    let view = result?;
    if !app.debouncer.try_apply(&ticket) {
        return Ok(());
    }

    output.view(&view, || {
        if view.query.is_empty() {
            output.heading("Search results");
        } else {
            output.heading(format!("Search results for \"{}\"", view.query));
        }

        if view.results.items.is_empty() {
            println!("  no titles matched");
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

        if !view.recent_searches.is_empty() {
            output.heading("Recent searches");
            println!("  {}", view.recent_searches.join(", "));
        }
    });

    Ok(())
}
