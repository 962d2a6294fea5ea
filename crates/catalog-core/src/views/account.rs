use catalog_models::{SubscriptionDetails, User, UserProfile};
use catalog_store::{AccountRepository, EntityKind, StoreError, UserRepository};
use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::session::Session;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccountView {
    pub user: User,
    pub current_profile: UserProfile,
    /// e.g. "March 2024"
    pub member_since: String,
    /// e.g. "September 15, 2026"
    pub next_billing_date: String,
    pub subscription: SubscriptionDetails,
}

pub async fn account_view<S>(store: &S, session: &Session) -> Result<AccountView, StoreError>
where
    S: UserRepository + AccountRepository,
{
    let user = store.current_user().await?;
    let current_profile = store.profile_by_id(&session.profile_id).await?;

    let subscription = store
        .subscription_plans()
        .await?
        .into_iter()
        .find(|p| p.plan == user.subscription)
        .ok_or_else(|| StoreError::not_found(EntityKind::User, user.subscription.to_string()))?;

    Ok(AccountView {
        member_since: user.created_at.format("%B %Y").to_string(),
        next_billing_date: format_billing_date(next_billing_date(Utc::now().date_naive())),
        user,
        current_profile,
        subscription,
    })
}

/// Billing lands on the 15th of the following month
fn next_billing_date(today: NaiveDate) -> NaiveDate {
    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 15).expect("the 15th exists in every month")
}

fn format_billing_date(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_store::MemoryCatalog;

    #[tokio::test]
    async fn account_view_matches_user_plan() {
        let catalog = MemoryCatalog::seeded();
        let session = Session::new("profile-2");
        let view = account_view(&catalog, &session).await.unwrap();

        assert_eq!(view.subscription.plan, view.user.subscription);
        assert_eq!(view.current_profile.id, "profile-2");
        assert!(!view.member_since.is_empty());
    }

    #[test]
    fn billing_date_rolls_into_next_month() {
        let july = NaiveDate::from_ymd_opt(2026, 7, 28).unwrap();
        assert_eq!(next_billing_date(july), NaiveDate::from_ymd_opt(2026, 8, 15).unwrap());
    }

    #[test]
    fn billing_date_crosses_the_year_boundary() {
        let december = NaiveDate::from_ymd_opt(2026, 12, 2).unwrap();
        assert_eq!(next_billing_date(december), NaiveDate::from_ymd_opt(2027, 1, 15).unwrap());
    }

    #[test]
    fn billing_date_formats_without_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 15).unwrap();
        assert_eq!(format_billing_date(date), "September 15, 2026");
    }
}
