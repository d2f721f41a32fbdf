//! Command-line interface driving a tile session from arguments, a script or stdin

use crate::io::command::Action;
use crate::io::configuration::{DEFAULT_MAX_PIP, DEFAULT_SEED, SCRIPT_COMMENT_PREFIX, SEED_TILES};
use crate::io::error::{DominoError, Result, file_system};
use crate::io::logging::Verbosity;
use crate::io::render::{render_list, render_summary};
use crate::io::session::Session;
use crate::tiles::domino::{Pips, Tile};
use crate::tiles::generate::{parse_tile_list, random_hand};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const HELP_TEXT: &str = "\
actions:
  sort-asc | sort-desc | sort <asc|desc>   sort by total, then smaller half
  flip                                     turn every tile around
  dedup                                    drop duplicate dominoes
  remove <total> | remove <a>,<b>          remove by total or exact pair
  reset                                    restore the source list
  show | help | quit";

#[derive(Parser)]
#[command(name = "dominoes")]
#[command(
    author,
    version,
    about = "Sort, flip, deduplicate and filter a list of domino tiles"
)]
/// Command-line arguments for the domino tile demo
pub struct Cli {
    /// Actions to apply in order; reads stdin interactively when omitted
    #[arg(value_name = "ACTION")]
    pub actions: Vec<String>,

    /// Read actions from a file, one per line, up to a `quit` line
    #[arg(short = 'f', long, value_name = "FILE", conflicts_with = "actions")]
    pub script: Option<PathBuf>,

    /// Start from this tile list instead of the built-in one (e.g. "6-1,4-3")
    #[arg(short, long, value_name = "LIST", conflicts_with = "random")]
    pub tiles: Option<String>,

    /// Start from a random hand of this many tiles
    #[arg(short, long, value_name = "COUNT")]
    pub random: Option<usize>,

    /// Highest pip count in a random hand
    #[arg(short, long, default_value_t = DEFAULT_MAX_PIP)]
    pub max_pip: Pips,

    /// Random seed for reproducible hands
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Print the list after every action, not just the last
    #[arg(short, long)]
    pub each: bool,

    /// Log every applied action to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Diagnostic verbosity selected by the flags
    pub const fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// Tiles the session starts from and resets to
    ///
    /// # Errors
    ///
    /// Returns an error if the tile list does not parse or the random hand
    /// parameters are out of range
    pub fn seed_tiles(&self) -> Result<Vec<Tile>> {
        match (&self.tiles, self.random) {
            (Some(list), _) => parse_tile_list(list),
            (None, Some(count)) => random_hand(count, self.max_pip, self.seed),
            (None, None) => Ok(SEED_TILES.to_vec()),
        }
    }
}

/// Control understood by the interactive loop
enum Line {
    Action(Action),
    Show,
    Help,
    Quit,
    Skip,
}

impl Line {
    fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(SCRIPT_COMMENT_PREFIX) {
            return Ok(Self::Skip);
        }
        match line.to_ascii_lowercase().as_str() {
            "show" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => line.parse().map(Self::Action),
        }
    }
}

/// Owns the session and feeds it actions from the selected source
pub struct Runner {
    cli: Cli,
    session: Session,
}

impl Runner {
    /// Build the session from the seed chosen on the command line
    ///
    /// # Errors
    ///
    /// Returns an error if the seed tiles cannot be built
    pub fn new(cli: Cli) -> Result<Self> {
        let seed = cli.seed_tiles()?;
        info!(tiles = seed.len(), "starting session");
        Ok(Self {
            session: Session::new(seed),
            cli,
        })
    }

    /// The session as it stands
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Run against the process's stdin and stdout
    ///
    /// # Errors
    ///
    /// Returns an error if an action is unknown, the script cannot be read or
    /// stdout cannot be written
    pub fn run(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run with explicit input and output streams
    ///
    /// Positional actions take priority, then the script; the interactive
    /// loop reads `input` only when neither is given.
    ///
    /// # Errors
    ///
    /// Returns an error if an action is unknown, the script cannot be read or
    /// `output` cannot be written
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        if !self.cli.actions.is_empty() {
            let actions = self
                .cli
                .actions
                .iter()
                .map(|text| text.parse())
                .collect::<Result<Vec<Action>>>()?;
            self.apply_all(&actions, &mut output)
        } else if let Some(path) = self.cli.script.clone() {
            let actions = Self::read_script(&path)?;
            self.apply_all(&actions, &mut output)
        } else {
            self.interactive(input, &mut output)
        }
    }

    fn apply_all<W: Write>(&mut self, actions: &[Action], output: &mut W) -> Result<()> {
        for action in actions {
            self.session.apply(action);
            if self.cli.each {
                writeln!(output, "{}", render_list(self.session.tiles()))?;
            }
        }
        writeln!(output, "{}", render_summary(&self.session))?;
        Ok(())
    }

    fn read_script(path: &Path) -> Result<Vec<Action>> {
        let content =
            std::fs::read_to_string(path).map_err(|err| file_system(path, "read script", err))?;

        let mut actions = Vec::new();
        for (index, line) in content.lines().enumerate() {
            match Line::parse(line) {
                Ok(Line::Action(action)) => actions.push(action),
                Ok(Line::Quit) => break,
                Ok(Line::Show | Line::Help) => {
                    warn!(path = %path.display(), line = index + 1, "ignoring interactive command");
                }
                Ok(Line::Skip) => {}
                Err(err) => {
                    warn!(path = %path.display(), line = index + 1, "skipping: {err}");
                }
            }
        }
        Ok(actions)
    }

    fn interactive<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        writeln!(output, "{}", render_summary(&self.session))?;

        for line in input.lines() {
            match Line::parse(&line?) {
                Ok(Line::Action(action)) => {
                    self.session.apply(&action);
                    writeln!(output, "{}", render_summary(&self.session))?;
                }
                Ok(Line::Show) => writeln!(output, "{}", render_summary(&self.session))?,
                Ok(Line::Help) => writeln!(output, "{HELP_TEXT}")?,
                Ok(Line::Quit) => break,
                Ok(Line::Skip) => {}
                Err(err @ (DominoError::UnknownAction { .. } | DominoError::InvalidArgument { .. })) => {
                    writeln!(output, "{err}")?;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }
}
