//! Project type classification by keyword

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The kind of project a prompt describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    #[serde(rename = "e-commerce")]
    ECommerce,
    Blog,
    Portfolio,
    SocialNetwork,
    MobileApp,
    Dashboard,
    Game,
    Productivity,
    WebApplication,
}

impl ProjectType {
    /// Human-readable label, as used in task titles
    pub fn label(&self) -> &'static str {
        match self {
            Self::ECommerce => "e-commerce",
            Self::Blog => "blog",
            Self::Portfolio => "portfolio",
            Self::SocialNetwork => "social network",
            Self::MobileApp => "mobile app",
            Self::Dashboard => "dashboard",
            Self::Game => "game",
            Self::Productivity => "productivity",
            Self::WebApplication => "web application",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered keyword table. The first entry with a matching keyword wins, so the
/// order decides ties ("shop dashboard" is e-commerce, not dashboard).
const PROJECT_TYPES: &[(ProjectType, &[&str])] = &[
    (
        ProjectType::ECommerce,
        &["e-commerce", "ecommerce", "online store", "shop", "marketplace"],
    ),
    (
        ProjectType::Blog,
        &["blog", "content management", "articles", "posts"],
    ),
    (
        ProjectType::Portfolio,
        &["portfolio", "showcase", "personal site"],
    ),
    (
        ProjectType::SocialNetwork,
        &["social network", "social media", "community"],
    ),
    (
        ProjectType::MobileApp,
        &["mobile app", "ios", "android", "application"],
    ),
    (
        ProjectType::Dashboard,
        &["dashboard", "admin panel", "analytics"],
    ),
    (ProjectType::Game, &["game", "interactive", "gaming"]),
    (
        ProjectType::Productivity,
        &["productivity", "todo", "task manager", "calendar"],
    ),
];

/// Classify a prompt into a project type.
///
/// Matching is a case-insensitive substring test. Prompts that match nothing
/// are [`ProjectType::WebApplication`].
pub fn classify_project_type(prompt: &str) -> ProjectType {
    classify_lowercase(&prompt.to_lowercase())
}

pub(crate) fn classify_lowercase(prompt: &str) -> ProjectType {
    let project_type = PROJECT_TYPES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| prompt.contains(k)))
        .map(|(project_type, _)| *project_type)
        .unwrap_or(ProjectType::WebApplication);
    debug!(%project_type, "classified prompt");
    project_type
}
