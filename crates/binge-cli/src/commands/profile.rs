use catalog_core::views::{delete_profile, profile_select_view, select_profile};
use catalog_models::ContentRating;
use catalog_store::{NewProfile, ProfilePatch, UserRepository};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use dialoguer::{Confirm, Input};
use owo_colors::OwoColorize;

use crate::app::App;
use crate::commands::confirm;
use crate::output::Output;

const AVATAR_COLORS: &[&str] = &["#e50914", "#1f6feb", "#f5c518", "#2ea043", "#8957e5"];

pub async fn list(app: &App, output: &Output) -> Result<()> {
    let session = app.session().await?;
    let view = profile_select_view(&app.catalog, &session).await?;

    output.view(&view, || {
        output.heading("Who's watching?");
        for profile in &view.profiles {
            let marker = if profile.id == view.current_profile_id {
                "*"
            } else {
                " "
            };
            let kids = if profile.is_kids_profile { " (kids)" } else { "" };
            println!(
                "  {} {:10} {}{} [{}]",
                marker.green(),
                profile.id,
                profile.name,
                kids,
                profile.maturity_level
            );
        }
        println!(
            "  {} of {} profile slots used",
            view.profiles.len(),
            view.max_profiles
        );
    });

    Ok(())
}

pub async fn select(app: &App, output: &Output, profile_id: &str) -> Result<()> {
    let session = select_profile(&app.catalog, profile_id).await?;
    app.save_session(&session)?;

    let profile = app.catalog.profile_by_id(profile_id).await?;
    confirm(
        output,
        &profile,
        format!("Now watching as {}", profile.name),
    );
    Ok(())
}

pub async fn create(app: &App, output: &Output, name: Option<String>, kids: bool) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None if output.is_human() => Input::new().with_prompt("Profile name").interact_text()?,
        None => return Err(eyre!("--name is required in non-interactive output modes")),
    };

    let existing = app.catalog.profiles().await?;
    let color = AVATAR_COLORS[existing.len() % AVATAR_COLORS.len()];
    let profile = app
        .catalog
        .create_profile(NewProfile {
            avatar_url: format!("avatar://{}", if kids { "kids-new" } else { "classic-new" }),
            avatar_color: color.to_string(),
            is_kids_profile: kids,
            name,
        })
        .await?;

    confirm(
        output,
        &profile,
        format!("Created profile {} ({})", profile.name, profile.id),
    );
    Ok(())
}

pub async fn delete(app: &App, output: &Output, profile_id: &str, yes: bool) -> Result<()> {
    let profile = app.catalog.profile_by_id(profile_id).await?;

    if !yes {
        if !output.is_human() {
            return Err(eyre!("--yes is required in non-interactive output modes"));
        }
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete profile {}? Its list and history go with it",
                profile.name
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            output.info("Nothing deleted");
            return Ok(());
        }
    }

    let session = app.session().await?;
    let next = delete_profile(&app.catalog, &session, profile_id).await?;
    app.save_session(&next)?;

    confirm(
        output,
        &next,
        format!("Deleted profile {}", profile.name),
    );
    Ok(())
}

pub async fn edit(
    app: &App,
    output: &Output,
    profile_id: &str,
    name: Option<String>,
    language: Option<String>,
    maturity: Option<String>,
) -> Result<()> {
    let maturity_level = match maturity {
        Some(raw) => Some(raw.parse::<ContentRating>().map_err(|e| eyre!(e))?),
        None => None,
    };

    let patch = ProfilePatch {
        name,
        language,
        maturity_level,
        ..Default::default()
    };
    let profile = app.catalog.update_profile(profile_id, patch).await?;

    confirm(
        output,
        &profile,
        format!("Updated profile {}", profile.name),
    );
    Ok(())
}
