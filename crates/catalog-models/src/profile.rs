use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::content::ContentRating;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub subscription: SubscriptionPlan,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    Basic,
    Standard,
    Premium,
}

impl std::fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionPlan::Basic => write!(f, "basic"),
            SubscriptionPlan::Standard => write!(f, "standard"),
            SubscriptionPlan::Premium => write!(f, "premium"),
        }
    }
}

impl std::str::FromStr for SubscriptionPlan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(SubscriptionPlan::Basic),
            "standard" => Ok(SubscriptionPlan::Standard),
            "premium" => Ok(SubscriptionPlan::Premium),
            other => Err(format!(
                "unknown plan '{}', expected basic, standard, or premium",
                other
            )),
        }
    }
}

/// A viewing persona under one account. One user owns 1..=5 profiles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub avatar_url: String,
    pub avatar_color: String,
    pub is_kids_profile: bool,
    pub language: String,
    pub maturity_level: ContentRating,
    pub auto_play_next: bool,
    pub auto_play_previews: bool,
}
