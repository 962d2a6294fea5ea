use catalog_core::views::account_view;
use catalog_models::{DataUsage, DownloadQuality, SubscriptionPlan};
use catalog_store::{AccountRepository, NotificationPatch, PlaybackPatch};
use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::app::App;
use crate::commands::confirm;
use crate::output::Output;

pub async fn show(app: &App, output: &Output) -> Result<()> {
    let session = app.session().await?;

    let spinner = output.spinner("Loading account...");
    let result = account_view(&app.catalog, &session).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
    let view = result?;

    output.view(&view, || {
        output.heading("Account");
        println!("  {} <{}>", view.user.name, view.user.email);
        println!("  member since {}", view.member_since);
        println!("  active profile: {}", view.current_profile.name);

        output.heading("Subscription");
        println!(
            "  {} ({}/month), {} on up to {} screens",
            view.subscription.plan_name,
            view.subscription.price,
            view.subscription.video_quality,
            view.subscription.max_screens
        );
        println!("  next billing date: {}", view.next_billing_date);
    });

    Ok(())
}

pub async fn plans(app: &App, output: &Output) -> Result<()> {
    let plans = app.catalog.subscription_plans().await?;

    output.view(&plans, || {
        output.heading("Plans");
        for details in &plans {
            println!(
                "  {:10} {}/month, {}, {} screens",
                details.plan.to_string(),
                details.price,
                details.video_quality,
                details.max_screens
            );
            for feature in &details.features {
                println!("             - {}", feature);
            }
        }
    });

    Ok(())
}

pub async fn set_plan(app: &App, output: &Output, plan: &str) -> Result<()> {
    let plan: SubscriptionPlan = plan.parse().map_err(|e: String| eyre!(e))?;
    app.catalog.change_plan(plan).await?;
    confirm(output, &plan, format!("Switched to the {} plan", plan));
    Ok(())
}

pub async fn notifications(
    app: &App,
    output: &Output,
    email: Option<bool>,
    push: Option<bool>,
    new_releases: Option<bool>,
    recommendations: Option<bool>,
    account_updates: Option<bool>,
) -> Result<()> {
    let session = app.session().await?;

    let patch = NotificationPatch {
        email_notifications: email,
        push_notifications: push,
        new_releases,
        recommendations,
        account_updates,
    };
    let no_changes = patch.email_notifications.is_none()
        && patch.push_notifications.is_none()
        && patch.new_releases.is_none()
        && patch.recommendations.is_none()
        && patch.account_updates.is_none();

    if no_changes {
        let settings = app.catalog.notification_settings(&session.profile_id).await?;
        output.view(&settings, || {
            output.heading("Notifications");
            println!("  email:           {}", on_off(settings.email_notifications));
            println!("  push:            {}", on_off(settings.push_notifications));
            println!("  new releases:    {}", on_off(settings.new_releases));
            println!("  recommendations: {}", on_off(settings.recommendations));
            println!("  account updates: {}", on_off(settings.account_updates));
        });
        return Ok(());
    }

    let settings = app
        .catalog
        .update_notification_settings(&session.profile_id, patch)
        .await?;
    confirm(output, &settings, "Notification settings updated");
    Ok(())
}

pub async fn playback(
    app: &App,
    output: &Output,
    auto_play_next: Option<bool>,
    auto_play_previews: Option<bool>,
    data_usage: Option<String>,
    download_quality: Option<String>,
) -> Result<()> {
    let session = app.session().await?;

    let data_usage = match data_usage {
        Some(raw) => Some(raw.parse::<DataUsage>().map_err(|e| eyre!(e))?),
        None => None,
    };
    let download_quality = match download_quality {
        Some(raw) => Some(raw.parse::<DownloadQuality>().map_err(|e| eyre!(e))?),
        None => None,
    };

    let patch = PlaybackPatch {
        auto_play_next,
        auto_play_previews,
        data_usage,
        download_quality,
    };
    let no_changes = patch.auto_play_next.is_none()
        && patch.auto_play_previews.is_none()
        && patch.data_usage.is_none()
        && patch.download_quality.is_none();

    if no_changes {
        let settings = app.catalog.playback_settings(&session.profile_id).await?;
        output.view(&settings, || {
            output.heading("Playback");
            println!("  auto-play next:     {}", on_off(settings.auto_play_next));
            println!("  auto-play previews: {}", on_off(settings.auto_play_previews));
            println!("  data usage:         {:?}", settings.data_usage);
            println!("  download quality:   {:?}", settings.download_quality);
        });
        return Ok(());
    }

    let settings = app
        .catalog
        .update_playback_settings(&session.profile_id, patch)
        .await?;
    confirm(output, &settings, "Playback settings updated");
    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
