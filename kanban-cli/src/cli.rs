use clap::{Parser, Subcommand, ValueEnum};
use kanban_engine::{DragLocation, BOARD_DROPPABLE_ID};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(name = "kanban")]
#[command(version)]
#[command(about = "Generate kanban boards from project descriptions and rearrange them")]
#[command(long_about = "
kanban drives an in-memory kanban board from the command line. It can turn a
free-text project description into a starter board of tasks, and apply
drag-and-drop results to a board snapshot.

Global arguments can be used with any command:
  --verbose     Show debug output from the engine
  --quiet       Suppress all output except errors
  --format      Output format (table, json, yaml)
  --config      Read configuration from this file

Example usage:
  kanban analyze \"An online store with cart and checkout\"
  kanban generate \"A personal blog with comments\"
  kanban --format json demo > board.json
  kanban drop --board board.json --from column-1:1 --to column-2:0 --item task-6
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable trace logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with_all = ["verbose", "debug"])]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Configuration file, instead of discovering `.kanban/config.*`
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show how a project description is classified
    Analyze {
        /// Free-text project description
        prompt: String,
    },
    /// Generate a board from a project description
    #[command(long_about = "
Generate a starter board from a free-text project description.

The description is matched against keyword tables to find the project type and
the features it asks for; each feature becomes frontend and backend tasks.
Every task lands in the first column.

Examples:
  kanban generate \"Build an e-commerce website with cart and checkout\"
  kanban generate --simulate-latency \"A dashboard with charts\"
  kanban --format json generate \"\" > board.json
")]
    Generate {
        /// Free-text project description
        prompt: String,

        /// Pause between generation stages as a remote service would
        #[arg(long)]
        simulate_latency: bool,
    },
    /// Print the demo board
    Demo,
    /// Apply a drop result to a board snapshot
    #[command(long_about = "
Apply one drag-and-drop result to a board read from a JSON file (or `-` for
stdin) and print the outcome and the updated board.

Locations are COLUMN:INDEX. Omit --to to report a drop outside any column.
With --column the dragged item is a column and locations are positions in the
column order; the COLUMN part may be left out.

Examples:
  kanban drop --board board.json --from column-1:1 --to column-2:0 --item task-6
  kanban drop --board - --column --from 0 --to 2 --item column-1 < board.json
")]
    Drop {
        /// Board snapshot in JSON, or `-` for stdin
        #[arg(long, value_name = "FILE|-")]
        board: String,

        /// Where the drag started
        #[arg(long, value_name = "COL:IDX", value_parser = parse_location)]
        from: DragLocation,

        /// Where the item was dropped
        #[arg(long, value_name = "COL:IDX", value_parser = parse_location)]
        to: Option<DragLocation>,

        /// Id of the dragged task or column
        #[arg(long, value_name = "ID")]
        item: String,

        /// The dragged item is a column
        #[arg(long)]
        column: bool,
    },
}

/// Parse `COLUMN:INDEX`, or a bare `INDEX` addressing the column order
pub fn parse_location(s: &str) -> Result<DragLocation, String> {
    let (column, index) = match s.rsplit_once(':') {
        Some((column, index)) => (column.trim(), index.trim()),
        None => (BOARD_DROPPABLE_ID, s.trim()),
    };
    if column.is_empty() {
        return Err(format!("missing column in '{}'", s));
    }
    let index = index
        .parse::<usize>()
        .map_err(|e| format!("invalid index in '{}': {}", s, e))?;
    Ok(DragLocation::new(column, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location() {
        let loc = parse_location("column-2:3").unwrap();
        assert_eq!(loc.droppable_id.as_str(), "column-2");
        assert_eq!(loc.index, 3);

        let loc = parse_location("4").unwrap();
        assert_eq!(loc.droppable_id.as_str(), BOARD_DROPPABLE_ID);
        assert_eq!(loc.index, 4);
    }

    #[test]
    fn test_parse_location_errors() {
        assert!(parse_location(":1").is_err());
        assert!(parse_location("column-1:").is_err());
        assert!(parse_location("column-1:-1").is_err());
        assert!(parse_location("column-1:x").is_err());
    }

    #[test]
    fn test_cli_parses_drop() {
        let cli = Cli::try_parse_from([
            "kanban", "drop", "--board", "-", "--from", "column-1:0", "--to", "column-2:1",
            "--item", "task-3",
        ])
        .unwrap();
        match cli.command {
            Commands::Drop { from, to, item, column, .. } => {
                assert_eq!(from.index, 0);
                assert_eq!(to.unwrap().droppable_id.as_str(), "column-2");
                assert_eq!(item, "task-3");
                assert!(!column);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["kanban", "-q", "-v", "demo"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
