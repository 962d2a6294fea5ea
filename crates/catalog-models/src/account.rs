use serde::{Deserialize, Serialize};

use crate::profile::SubscriptionPlan;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub new_releases: bool,
    pub recommendations: bool,
    pub account_updates: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            new_releases: true,
            recommendations: true,
            account_updates: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaybackSettings {
    pub auto_play_next: bool,
    pub auto_play_previews: bool,
    pub data_usage: DataUsage,
    pub download_quality: DownloadQuality,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            auto_play_next: true,
            auto_play_previews: true,
            data_usage: DataUsage::Auto,
            download_quality: DownloadQuality::High,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataUsage {
    Auto,
    Low,
    Medium,
    High,
}

impl std::str::FromStr for DataUsage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(DataUsage::Auto),
            "low" => Ok(DataUsage::Low),
            "medium" => Ok(DataUsage::Medium),
            "high" => Ok(DataUsage::High),
            other => Err(format!(
                "unknown data usage '{}', expected auto, low, medium, or high",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DownloadQuality {
    Standard,
    High,
}

impl std::str::FromStr for DownloadQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(DownloadQuality::Standard),
            "high" => Ok(DownloadQuality::High),
            other => Err(format!(
                "unknown download quality '{}', expected standard or high",
                other
            )),
        }
    }
}

/// Marketing-facing description of one subscription tier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubscriptionDetails {
    pub plan: SubscriptionPlan,
    pub plan_name: String,
    pub price: String,
    pub features: Vec<String>,
    pub max_screens: u32,
    pub video_quality: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Language {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MaturityLevel {
    pub rating: crate::content::ContentRating,
    pub description: String,
}
