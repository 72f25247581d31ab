use std::io::{
  self,
  Write,
};

use anyhow::Result;
use the_blocks_lib::command::BlockSelectSession;

use crate::{
  buffer::Buffer,
  cli::CliOptions,
  config::Config,
};

mod buffer;
mod cli;
mod config;
mod logging;

fn main() -> Result<()> {
  let options = CliOptions::parse()?;
  logging::setup_logging(options.verbosity, options.log_file.as_deref())?;
  let config = Config::load_or_default(options.config_file.as_deref())?;

  let stdout = io::stdout();
  run(&options, &config, &mut stdout.lock())
}

/// Open the file, run every command in order and write one line per result.
fn run<W: Write>(options: &CliOptions, config: &Config, out: &mut W) -> Result<()> {
  let mut buffer = Buffer::open(&options.file, options.cursor)?;
  let mut session = BlockSelectSession::new(config.block_select);

  for &command in &options.commands {
    session.run(command, &mut buffer);
    if let Some(pos) = buffer.revealed() {
      log::debug!("{command}: revealed {pos}");
    }

    let selection = buffer.selection_label();
    writeln!(out, "{} {selection}", command.short_name())?;
    if options.print_text {
      for line in buffer.selected_text().lines() {
        writeln!(out, "  {line}")?;
      }
    }
  }

  out.flush()?;
  Ok(())
}
