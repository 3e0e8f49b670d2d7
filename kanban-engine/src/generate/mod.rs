//! Prompt-to-task generation.
//!
//! A free-text project description is classified into a [`ProjectType`] and a
//! set of [`Feature`]s by keyword matching, then expanded into a batch of
//! starter tasks. There is no inference here: the same prompt on the same day
//! always yields the same titles, priorities, tags, assignees and due dates
//! (only the ids differ).
//!
//! Generation never fails and never returns an empty batch. A prompt that
//! matches nothing, including `""`, gets a generic fallback batch.

mod classify;
mod features;
mod synthesize;

pub use classify::{classify_project_type, ProjectType};
pub use features::{extract_features, Feature};

use crate::config::GeneratorConfig;
use crate::types::Task;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use synthesize::TaskSynthesizer;
use tracing::info;

/// Rough size of a project, judged by how many features it asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    /// More than 8 features is high, more than 4 is medium
    pub fn from_feature_count(count: usize) -> Self {
        if count > 8 {
            Self::High
        } else if count > 4 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// What the keyword matcher found in a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptAnalysis {
    pub project_type: ProjectType,
    pub features: Vec<Feature>,
    pub complexity: Complexity,
}

/// Classify a prompt and extract its features
pub fn analyze_prompt(prompt: &str) -> PromptAnalysis {
    let lower = prompt.to_lowercase();
    let project_type = classify::classify_lowercase(&lower);
    let features = features::extract_lowercase(&lower, project_type);
    let complexity = Complexity::from_feature_count(features.len());
    PromptAnalysis {
        project_type,
        features,
        complexity,
    }
}

/// Generate a task batch for a prompt with default settings, dated from today
pub fn generate_tasks(prompt: &str) -> Vec<Task> {
    TaskGenerator::default().generate(prompt)
}

/// Expands prompts into task batches.
#[derive(Debug, Clone)]
pub struct TaskGenerator {
    min_tasks: usize,
    base_date: Option<NaiveDate>,
}

impl Default for TaskGenerator {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

impl TaskGenerator {
    /// Create a generator from configuration
    pub fn new(config: &GeneratorConfig) -> Self {
        Self {
            min_tasks: config.min_tasks,
            base_date: None,
        }
    }

    /// Date due dates are counted from (defaults to today, UTC)
    pub fn with_base_date(mut self, base_date: NaiveDate) -> Self {
        self.base_date = Some(base_date);
        self
    }

    /// Analyse the prompt and generate its task batch
    pub fn generate(&self, prompt: &str) -> Vec<Task> {
        let analysis = analyze_prompt(prompt);
        self.generate_from_analysis(&analysis)
    }

    /// Generate the task batch for an existing analysis
    pub fn generate_from_analysis(&self, analysis: &PromptAnalysis) -> Vec<Task> {
        let base_date = self.base_date.unwrap_or_else(|| Utc::now().date_naive());
        let mut batch = TaskSynthesizer::new(base_date);

        batch.setup(analysis.project_type);
        batch.design(analysis.project_type);

        let before_features = batch.len();
        for (index, feature) in analysis.features.iter().enumerate() {
            batch.feature(index, *feature);
        }
        if batch.len() > before_features {
            batch.wrap_up();
        }

        if batch.len() < self.min_tasks {
            batch.fallback();
        }

        let tasks = batch.finish();
        info!(
            project_type = %analysis.project_type,
            features = analysis.features.len(),
            complexity = %analysis.complexity,
            tasks = tasks.len(),
            "generated tasks"
        );
        tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;
    use std::collections::HashSet;

    fn generator() -> TaskGenerator {
        TaskGenerator::default().with_base_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    }

    #[test]
    fn test_analyze_ecommerce() {
        let analysis = analyze_prompt("Build an e-commerce website with cart and checkout");
        assert_eq!(analysis.project_type, ProjectType::ECommerce);
        assert!(analysis.features.contains(&Feature::Cart));
        assert!(analysis.features.contains(&Feature::Payments));
        assert_eq!(analysis.complexity, Complexity::Low);
    }

    #[test]
    fn test_complexity_thresholds() {
        assert_eq!(Complexity::from_feature_count(0), Complexity::Low);
        assert_eq!(Complexity::from_feature_count(4), Complexity::Low);
        assert_eq!(Complexity::from_feature_count(5), Complexity::Medium);
        assert_eq!(Complexity::from_feature_count(8), Complexity::Medium);
        assert_eq!(Complexity::from_feature_count(9), Complexity::High);
    }

    #[test]
    fn test_ecommerce_batch() {
        let tasks = generator().generate("Build an e-commerce website with cart and checkout");

        assert_eq!(tasks[0].title, "Initial project setup for e-commerce");
        assert_eq!(tasks[1].title, "Create UI/UX design mockups for the e-commerce");
        assert!(tasks.iter().any(|t| t.title.to_lowercase().contains("cart")));
        assert!(tasks.iter().any(|t| t.title.to_lowercase().contains("checkout")));
        // setup + design + (payments, cart, product listings) x 2 + wrap-up x 2
        assert_eq!(tasks.len(), 10);
        assert_eq!(tasks.last().unwrap().title, "Write project documentation");
    }

    #[test]
    fn test_empty_prompt_gets_fallback_batch() {
        let tasks = generator().generate("");
        let titles: Vec<_> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Initial project setup for web application",
                "Create UI/UX design mockups for the web application",
                "Configure development environment",
                "Establish design system",
                "Write project documentation",
            ]
        );
    }

    #[test]
    fn test_min_tasks_is_configurable() {
        let config = GeneratorConfig {
            min_tasks: 20,
            ..GeneratorConfig::default()
        };
        let tasks = TaskGenerator::new(&config).generate("a blog");
        assert!(tasks.iter().any(|t| t.has_tag("design-system")));

        let config = GeneratorConfig {
            min_tasks: 1,
            ..GeneratorConfig::default()
        };
        assert_eq!(TaskGenerator::new(&config).generate("").len(), 2);
    }

    #[test]
    fn test_batch_invariants() {
        for prompt in ["", "blog", "A social network with chat, search and uploads", "?!"] {
            let tasks = generator().generate(prompt);
            assert!(!tasks.is_empty());
            let ids: HashSet<_> = tasks.iter().map(|t| t.id.as_str()).collect();
            assert_eq!(ids.len(), tasks.len());
            assert!(tasks.iter().all(|t| !t.id.as_str().is_empty()));
            assert!(tasks.iter().all(|t| matches!(
                t.priority,
                Priority::Low | Priority::Medium | Priority::High
            )));
        }
    }

    #[test]
    fn test_same_prompt_same_content() {
        let a = generator().generate("dashboard with charts and login");
        let b = generator().generate("dashboard with charts and login");
        let strip = |tasks: &[Task]| -> Vec<(String, Priority, Vec<String>)> {
            tasks
                .iter()
                .map(|t| (t.title.clone(), t.priority, t.tags.clone()))
                .collect()
        };
        assert_eq!(strip(&a), strip(&b));
    }
}
