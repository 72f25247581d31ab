use std::path::Path;

use anyhow::{
  Context,
  Result,
};
use log::LevelFilter;

pub fn level_for(verbosity: u8) -> LevelFilter {
  match verbosity {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  }
}

/// Install the global logger. Logs go to `log_file` when given, stderr
/// otherwise, so stdout stays clean for selection output.
pub fn setup_logging(verbosity: u8, log_file: Option<&Path>) -> Result<()> {
  let base = fern::Dispatch::new()
    .level(level_for(verbosity))
    .format(|out, message, record| {
      out.finish(format_args!(
        "{} {} [{}] {}",
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        message
      ))
    });

  let dispatch = match log_file {
    Some(path) => {
      let file = fern::log_file(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
      base.chain(file)
    },
    None => base.chain(std::io::stderr()),
  };

  dispatch.apply().context("failed to install logger")?;
  Ok(())
}
