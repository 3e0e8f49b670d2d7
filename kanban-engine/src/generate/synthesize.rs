//! Turn a prompt analysis into concrete task records

use super::classify::ProjectType;
use super::features::Feature;
use crate::types::{Assignee, Priority, Task, TaskId};
use chrono::{Days, NaiveDate};
use ulid::Generator;

/// The team generated tasks are handed out to
const ROSTER: &[(&str, &str)] = &[
    ("user-1", "Alex Johnson"),
    ("user-2", "Taylor Smith"),
    ("user-3", "Jordan Lee"),
    ("user-4", "Morgan Chen"),
];

fn roster(index: usize) -> Assignee {
    let (id, name) = ROSTER[index % ROSTER.len()];
    Assignee::new(id, name)
}

/// Priority for the tasks of the feature at `index`: earlier features matter more
fn feature_priority(index: usize) -> Priority {
    match index {
        0..=2 => Priority::High,
        3..=5 => Priority::Medium,
        _ => Priority::Low,
    }
}

/// Mints task ids that are unique within one batch.
///
/// ULIDs from a monotonic generator never repeat, even within a millisecond.
struct IdMinter(Generator);

impl IdMinter {
    fn next(&mut self) -> TaskId {
        let ulid = self.0.generate().unwrap_or_else(|_| ulid::Ulid::new());
        TaskId::from_string(format!("task-{}", ulid))
    }
}

/// Builds one batch of tasks, all dated relative to `base_date`.
pub(crate) struct TaskSynthesizer {
    base_date: NaiveDate,
    ids: IdMinter,
    tasks: Vec<Task>,
}

impl TaskSynthesizer {
    pub(crate) fn new(base_date: NaiveDate) -> Self {
        Self {
            base_date,
            ids: IdMinter(Generator::new()),
            tasks: Vec::new(),
        }
    }

    fn due_in(&self, days: u64) -> NaiveDate {
        self.base_date
            .checked_add_days(Days::new(days))
            .unwrap_or(self.base_date)
    }

    fn push(
        &mut self,
        title: String,
        description: String,
        priority: Priority,
        tags: Vec<String>,
        due_in_days: u64,
    ) -> &mut Task {
        let task = Task {
            id: self.ids.next(),
            title,
            description: Some(description),
            priority,
            tags,
            assignee: None,
            due_date: Some(self.due_in(due_in_days)),
        };
        self.tasks.push(task);
        let last = self.tasks.len() - 1;
        &mut self.tasks[last]
    }

    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Project setup, always first
    pub(crate) fn setup(&mut self, project_type: ProjectType) {
        self.push(
            format!("Initial project setup for {}", project_type),
            "Set up the basic project structure, configure build tools, and establish the main architecture.".into(),
            Priority::High,
            tags(&["setup", "architecture"]),
            2,
        );
    }

    /// Design mockups tailored to the project type
    pub(crate) fn design(&mut self, project_type: ProjectType) {
        self.push(
            format!("Create UI/UX design mockups for the {}", project_type),
            format!(
                "Design mockups for all key screens and user flows of the {}.",
                project_type
            ),
            Priority::High,
            tags(&["design", "ui/ux"]),
            3,
        );
    }

    /// Frontend work for a feature, plus backend work unless it is presentation-only
    pub(crate) fn feature(&mut self, index: usize, feature: Feature) {
        let priority = feature_priority(index);
        let offset = index as u64;
        let label = feature_label(feature);

        let mut frontend_tags = tags(&["frontend", "ui"]);
        frontend_tags.extend(feature_tags(feature));
        self.push(
            format!("Implement {} UI components", label),
            format!(
                "Create and style all UI components needed for the {} feature.",
                label
            ),
            priority,
            frontend_tags,
            3 + offset,
        )
        .assignee = Some(roster(index));

        if feature.is_presentation_only() {
            return;
        }

        let mut backend_tags = tags(&["backend", "api"]);
        backend_tags.extend(feature_tags(feature));
        self.push(
            format!("Develop {} backend functionality", label),
            format!(
                "Implement server-side logic and API endpoints for the {} feature.",
                label
            ),
            priority,
            backend_tags,
            4 + offset,
        )
        .assignee = Some(roster(index + 2));
    }

    /// Deployment and documentation, closing a batch that has feature work
    pub(crate) fn wrap_up(&mut self) {
        self.push(
            "Setup deployment pipeline".into(),
            "Configure CI/CD pipeline for automated testing and deployment.".into(),
            Priority::Medium,
            tags(&["devops", "deployment"]),
            10,
        );
        self.documentation(12);
    }

    /// Generic tasks that keep a batch from being near-empty
    pub(crate) fn fallback(&mut self) {
        self.push(
            "Configure development environment".into(),
            "Set up the repository, tooling, and local development environment.".into(),
            Priority::High,
            tags(&["setup"]),
            1,
        );
        self.push(
            "Establish design system".into(),
            "Define colors, typography, and reusable components for a consistent look.".into(),
            Priority::Medium,
            tags(&["design-system"]),
            5,
        );
        self.documentation(7);
    }

    fn documentation(&mut self, due_in_days: u64) {
        self.push(
            "Write project documentation".into(),
            "Create comprehensive documentation for the project, including setup instructions and API docs.".into(),
            Priority::Low,
            tags(&["documentation"]),
            due_in_days,
        );
    }

    pub(crate) fn finish(self) -> Vec<Task> {
        self.tasks
    }
}

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Wording used in task titles; payments work is checkout work
fn feature_label(feature: Feature) -> &'static str {
    match feature {
        Feature::Payments => "checkout and payments",
        other => other.name(),
    }
}

fn feature_tags(feature: Feature) -> Vec<String> {
    match feature {
        Feature::Payments => vec![feature.slug(), "checkout".into()],
        other => vec![other.slug()],
    }
}
