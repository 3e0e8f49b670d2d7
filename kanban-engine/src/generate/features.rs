//! Feature tag extraction by keyword

use super::classify::ProjectType;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A feature a prompt asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    Authentication,
    Search,
    Payments,
    Notifications,
    ResponsiveDesign,
    DarkMode,
    Analytics,
    ApiIntegration,
    UserProfiles,
    DataVisualization,
    FileUpload,
    Comments,
    SocialSharing,
    Cart,
    AdminPanel,
    RealTime,
    Subscription,
    MultiLanguage,
    #[serde(rename = "seo")]
    Seo,
    UserPermissions,
    ProductListings,
    ContentManagement,
}

impl Feature {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::Search => "search",
            Self::Payments => "payments",
            Self::Notifications => "notifications",
            Self::ResponsiveDesign => "responsive design",
            Self::DarkMode => "dark mode",
            Self::Analytics => "analytics",
            Self::ApiIntegration => "api integration",
            Self::UserProfiles => "user profiles",
            Self::DataVisualization => "data visualization",
            Self::FileUpload => "file upload",
            Self::Comments => "comments",
            Self::SocialSharing => "social sharing",
            Self::Cart => "cart",
            Self::AdminPanel => "admin panel",
            Self::RealTime => "real-time",
            Self::Subscription => "subscription",
            Self::MultiLanguage => "multi-language",
            Self::Seo => "SEO",
            Self::UserPermissions => "user permissions",
            Self::ProductListings => "product listings",
            Self::ContentManagement => "content management",
        }
    }

    /// Tag slug: lowercase, whitespace runs replaced by `-`
    pub fn slug(&self) -> String {
        self.name()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Check if the feature is purely presentational (no server-side work)
    pub fn is_presentation_only(&self) -> bool {
        matches!(self, Self::ResponsiveDesign | Self::DarkMode | Self::Seo)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Keyword table. Every entry is tested; all matches are kept in table order.
const FEATURES: &[(Feature, &[&str])] = &[
    (
        Feature::Authentication,
        &["auth", "login", "signin", "register", "user accounts"],
    ),
    (Feature::Search, &["search", "filter", "find"]),
    (Feature::Payments, &["payment", "checkout", "stripe", "paypal"]),
    (Feature::Notifications, &["notification", "alert", "message"]),
    (
        Feature::ResponsiveDesign,
        &["responsive", "mobile", "desktop"],
    ),
    (Feature::DarkMode, &["dark mode", "theme", "light mode"]),
    (Feature::Analytics, &["analytics", "tracking", "statistics"]),
    (
        Feature::ApiIntegration,
        &["api", "integration", "third party"],
    ),
    (Feature::UserProfiles, &["profile", "user info", "accounts"]),
    (
        Feature::DataVisualization,
        &["chart", "graph", "visualization"],
    ),
    (
        Feature::FileUpload,
        &["upload", "file", "image", "document"],
    ),
    (Feature::Comments, &["comment", "discussion", "reply"]),
    (
        Feature::SocialSharing,
        &["social", "share", "facebook", "twitter"],
    ),
    (Feature::Cart, &["cart", "basket", "shopping"]),
    (Feature::AdminPanel, &["admin", "dashboard", "management"]),
    (Feature::RealTime, &["real-time", "live", "websocket"]),
    (
        Feature::Subscription,
        &["subscription", "recurring", "plan"],
    ),
    (
        Feature::MultiLanguage,
        &["localization", "language", "translation"],
    ),
    (Feature::Seo, &["seo", "search engine", "metadata"]),
    (
        Feature::UserPermissions,
        &["permission", "role", "access control"],
    ),
];

/// Features every project of a given type needs, whether or not the prompt says so
fn implied_features(project_type: ProjectType) -> &'static [Feature] {
    match project_type {
        ProjectType::ECommerce => &[Feature::Cart, Feature::Payments, Feature::ProductListings],
        ProjectType::Blog => &[Feature::ContentManagement, Feature::Comments],
        _ => &[],
    }
}

/// Extract the features a prompt mentions.
///
/// Keyword matches come first, in table order, followed by any features the
/// project type implies that were not already found. No feature repeats.
pub fn extract_features(prompt: &str, project_type: ProjectType) -> Vec<Feature> {
    extract_lowercase(&prompt.to_lowercase(), project_type)
}

pub(crate) fn extract_lowercase(prompt: &str, project_type: ProjectType) -> Vec<Feature> {
    let mut features: Vec<Feature> = FEATURES
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| prompt.contains(k)))
        .map(|(feature, _)| *feature)
        .collect();

    for feature in implied_features(project_type) {
        if !features.contains(feature) {
            features.push(*feature);
        }
    }

    debug!(?features, "extracted features");
    features
}
