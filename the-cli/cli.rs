use std::path::{
  Path,
  PathBuf,
};

use anyhow::Result;
use clap::{
  ArgAction,
  Parser,
};
use the_blocks_lib::{
  command::BlockCommand,
  position::Position,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
  pub file:        PathBuf,
  pub cursor:      Position,
  pub commands:    Vec<BlockCommand>,
  pub print_text:  bool,
  pub verbosity:   u8,
  pub log_file:    Option<PathBuf>,
  pub config_file: Option<PathBuf>,
}

impl CliOptions {
  pub fn parse() -> Result<Self> {
    let raw = RawCli::parse();
    raw.try_into()
  }

  pub fn try_parse_from<I, T>(args: I) -> Result<Self>
  where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
  {
    let raw = RawCli::try_parse_from(args)?;
    raw.try_into()
  }
}

#[derive(Parser, Debug)]
#[command(
  name = "the-blocks",
  about = "Select contiguous blocks of non-empty lines in a file",
  long_about = None,
  version
)]
struct RawCli {
  /// Command to run, repeat to run several in order (default: expand-forward)
  #[arg(short = 'c', long = "command", value_name = "COMMAND", value_parser = parse_command)]
  commands: Vec<BlockCommand>,

  /// Print the selected text after each command
  #[arg(short = 'p', long = "print-text")]
  print_text: bool,

  /// Increase logging verbosity (repeat for more detail)
  #[arg(short = 'v', action = ArgAction::Count)]
  verbosity: u8,

  /// Save logs to a specific file
  #[arg(long = "log", value_name = "FILE")]
  log_file: Option<PathBuf>,

  /// Load configuration from a specific file
  #[arg(long = "config", value_name = "FILE")]
  config_file: Option<PathBuf>,

  /// File to select in (optionally with :row[:col] suffix, 1-based), and an
  /// optional +LINE moving the cursor to that 1-based line
  #[arg(value_name = "FILE", required = true, num_args = 1..=2)]
  inputs: Vec<String>,
}

impl TryFrom<RawCli> for CliOptions {
  type Error = anyhow::Error;

  fn try_from(raw: RawCli) -> Result<Self> {
    let mut line_override: Option<usize> = None;
    let mut file: Option<(PathBuf, Position)> = None;

    for input in raw.inputs {
      if let Some(line) = parse_line_override(&input) {
        line_override = Some(line);
        continue;
      }
      if file.is_some() {
        anyhow::bail!("expected a single file, got another: '{input}'");
      }
      file = Some(parse_file(&input));
    }

    let Some((file, mut cursor)) = file else {
      anyhow::bail!("no file given");
    };
    if let Some(line) = line_override {
      cursor = Position::new(line, 0);
    }

    let commands = if raw.commands.is_empty() {
      vec![BlockCommand::ExpandForward]
    } else {
      raw.commands
    };

    Ok(Self {
      file,
      cursor,
      commands,
      print_text: raw.print_text,
      verbosity: raw.verbosity,
      log_file: raw.log_file,
      config_file: raw.config_file,
    })
  }
}

fn parse_command(value: &str) -> std::result::Result<BlockCommand, String> {
  value.parse().map_err(|err| {
    let known = BlockCommand::ALL
      .iter()
      .map(|command| command.short_name())
      .collect::<Vec<_>>()
      .join(", ");
    format!("{err} (expected one of: {known})")
  })
}

fn parse_line_override(value: &str) -> Option<usize> {
  let stripped = value.strip_prefix('+')?;
  if stripped.is_empty() {
    return None;
  }

  stripped
    .parse::<usize>()
    .ok()
    .map(|line| line.saturating_sub(1))
}

fn parse_file(argument: &str) -> (PathBuf, Position) {
  let default_position = || (PathBuf::from(argument), Position::default());

  if Path::new(argument).exists() {
    return default_position();
  }

  split_path_row_col(argument)
    .or_else(|| split_path_row(argument))
    .unwrap_or_else(default_position)
}

fn split_path_row_col(argument: &str) -> Option<(PathBuf, Position)> {
  let mut parts = argument.trim_end_matches(':').rsplitn(3, ':');
  let col: usize = parts.next()?.parse().ok()?;
  let row: usize = parts.next()?.parse().ok()?;
  let path = parts.next()?.into();
  let position = Position::new(row.saturating_sub(1), col.saturating_sub(1));
  Some((path, position))
}

fn split_path_row(argument: &str) -> Option<(PathBuf, Position)> {
  let (path, row) = argument.trim_end_matches(':').rsplit_once(':')?;
  let row: usize = row.parse().ok()?;
  let position = Position::new(row.saturating_sub(1), 0);
  Some((path.into(), position))
}
