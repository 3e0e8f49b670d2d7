//! A single-user board session: the current board plus in-flight generations.
//!
//! Generation may be slowed down to look like a remote call. While it runs the
//! user can cancel it or submit another prompt, so every request carries a
//! [`GenerationTicket`] and only the newest ticket may replace the board. A
//! completion that arrives late is rejected and the board keeps its newer
//! state.

use crate::board::DropOutcome;
use crate::config::KanbanConfig;
use crate::error::{KanbanError, Result};
use crate::generate::{analyze_prompt, PromptAnalysis, TaskGenerator};
use crate::types::{Board, DropResult, Task};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Token identifying one generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket(u64);

impl GenerationTicket {
    /// Sequence number of the request
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// Releases the in-flight slot if a generation is dropped before it commits
struct ActiveGeneration<'a> {
    active: &'a mut Option<u64>,
    ticket: GenerationTicket,
}

impl Drop for ActiveGeneration<'_> {
    fn drop(&mut self) {
        if *self.active == Some(self.ticket.0) {
            *self.active = None;
            debug!(ticket = self.ticket.0, "abandoned generation");
        }
    }
}

async fn run_stages(
    generator: &TaskGenerator,
    stage_delays: &[Duration],
    prompt: &str,
) -> (PromptAnalysis, Vec<Task>) {
    let mut delays = stage_delays.iter();

    if let Some(delay) = delays.next() {
        debug!("analyzing project description");
        tokio::time::sleep(*delay).await;
    }
    let analysis = analyze_prompt(prompt);

    if let Some(delay) = delays.next() {
        debug!("identifying key features");
        tokio::time::sleep(*delay).await;
    }
    let tasks = generator.generate_from_analysis(&analysis);

    for delay in delays {
        debug!("creating kanban board");
        tokio::time::sleep(*delay).await;
    }
    (analysis, tasks)
}

/// The board being edited and the generation state around it
#[derive(Debug)]
pub struct BoardSession {
    board: Board,
    template: Board,
    generator: TaskGenerator,
    stage_delays: Vec<Duration>,
    /// Sequence of the newest ticket handed out
    issued: u64,
    /// Sequence of the ticket allowed to commit, if any
    active: Option<u64>,
}

impl Default for BoardSession {
    fn default() -> Self {
        Self::new(&KanbanConfig::default())
    }
}

impl BoardSession {
    /// Start a session on an empty board shaped by the configuration
    pub fn new(config: &KanbanConfig) -> Self {
        let template = config.board_template();
        Self {
            board: template.clone(),
            template,
            generator: TaskGenerator::new(&config.generator),
            stage_delays: config.generator.stage_delays(),
            issued: 0,
            active: None,
        }
    }

    /// Replace the board being edited
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Use a specific generator (e.g. one pinned to a base date)
    pub fn with_generator(mut self, generator: TaskGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Take the board out of the session
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Check if a generation is in flight
    pub fn is_generating(&self) -> bool {
        self.active.is_some()
    }

    /// Start a generation request. Any older in-flight request becomes stale.
    pub fn begin_generation(&mut self) -> GenerationTicket {
        self.issued += 1;
        if let Some(previous) = self.active.replace(self.issued) {
            debug!(previous, current = self.issued, "superseded generation");
        }
        GenerationTicket(self.issued)
    }

    /// Abandon the in-flight request, if any
    pub fn cancel_generation(&mut self) {
        if let Some(cancelled) = self.active.take() {
            info!(ticket = cancelled, "cancelled generation");
        }
    }

    /// Replace the board with a generated batch, if the ticket is still current.
    pub fn commit_generation(&mut self, ticket: GenerationTicket, tasks: Vec<Task>) -> Result<()> {
        if self.active != Some(ticket.0) {
            warn!(
                ticket = ticket.0,
                current = self.issued,
                "discarding stale generation"
            );
            return Err(KanbanError::StaleGeneration {
                ticket: ticket.0,
                current: self.issued,
            });
        }

        self.active = None;
        self.board = Board::from_generated_with_columns(self.template.clone(), tasks);
        info!(tasks = self.board.tasks.len(), "board generated");
        Ok(())
    }

    /// Analyse `prompt` and build its batch, pausing between the simulated stages.
    ///
    /// Returns the analysis and the batch without touching the board.
    pub async fn run_generation(&self, prompt: &str) -> (PromptAnalysis, Vec<Task>) {
        run_stages(&self.generator, &self.stage_delays, prompt).await
    }

    /// Generate a board from a prompt and commit it.
    ///
    /// The board is only replaced once the whole generation has finished.
    /// Dropping the returned future abandons the request and clears the
    /// in-flight state.
    pub async fn generate(&mut self, prompt: &str) -> Result<PromptAnalysis> {
        let ticket = self.begin_generation();
        let guard = ActiveGeneration {
            active: &mut self.active,
            ticket,
        };
        let (analysis, tasks) = run_stages(&self.generator, &self.stage_delays, prompt).await;
        // commit_generation releases the slot from here on
        std::mem::forget(guard);
        self.commit_generation(ticket, tasks)?;
        Ok(analysis)
    }

    /// Apply a drop result to the current board
    pub fn apply_drop(&mut self, drop: &DropResult) -> Result<DropOutcome> {
        self.board.apply_drop(drop)
    }
}
