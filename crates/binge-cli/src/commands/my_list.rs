use catalog_core::views::my_list_view;
use catalog_store::{ContentRepository, UserRepository};
use color_eyre::Result;
use serde::Serialize;

use crate::app::App;
use crate::commands::confirm;
use crate::output::{content_table, Output};

/// JSON-mode record for membership changes that have no watchlist item to
/// return (remove, toggle-off)
#[derive(Debug, Serialize)]
struct MembershipRecord<'a> {
    content_id: &'a str,
    in_list: bool,
}

pub async fn show(app: &App, output: &Output) -> Result<()> {
    let session = app.session().await?;

    let spinner = output.spinner("Loading your list...");
    let result = my_list_view(&app.catalog, &session).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
    let view = result?;

    output.view(&view, || {
        output.heading(format!("My List ({} titles)", view.total_count));
        if view.items.is_empty() {
            println!("  your list is empty");
            return;
        }
        let contents: Vec<_> = view.items.iter().map(|e| e.content.clone()).collect();
        println!("{}", content_table(&contents));
    });

    Ok(())
}

pub async fn add(app: &App, output: &Output, content_id: &str) -> Result<()> {
    let session = app.session().await?;
    let content = app.catalog.content_by_id(content_id).await?;
    let item = app
        .catalog
        .add_to_watchlist(&session.profile_id, content_id)
        .await?;
    confirm(output, &item, format!("{} is in your list", content.title));
    Ok(())
}

pub async fn remove(app: &App, output: &Output, content_id: &str) -> Result<()> {
    let session = app.session().await?;
    let content = app.catalog.content_by_id(content_id).await?;
    app.catalog
        .remove_from_watchlist(&session.profile_id, content_id)
        .await?;
    confirm(
        output,
        &MembershipRecord {
            content_id: &content.id,
            in_list: false,
        },
        format!("{} removed from your list", content.title),
    );
    Ok(())
}

pub async fn toggle(app: &App, output: &Output, content_id: &str) -> Result<()> {
    let session = app.session().await?;
    let content = app.catalog.content_by_id(content_id).await?;
    let in_list = app
        .catalog
        .toggle_watchlist(&session.profile_id, content_id)
        .await?;
    let msg = if in_list {
        format!("{} added to your list", content.title)
    } else {
        format!("{} removed from your list", content.title)
    };
    confirm(
        output,
        &MembershipRecord {
            content_id: &content.id,
            in_list,
        },
        msg,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_record_carries_the_id_and_state() {
        let record = MembershipRecord {
            content_id: "c-9",
            in_list: false,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["content_id"], "c-9");
        assert_eq!(json["in_list"], false);
    }
}
