use clap::Parser;
use std::io;
use thiserror::Error;

use crate::models::ImportError;
use crate::store::config::ConfigError;

pub mod apply;
pub mod serve;

#[derive(Parser)]
pub enum SubCommand {
  Apply(apply::ApplyCommand),
  Serve(serve::ServeCommand),
}

#[derive(Debug, Error)]
pub enum CommandError {
  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error(transparent)]
  Import(#[from] ImportError),

  #[error("unable to encode board: {0}")]
  Json(#[from] serde_json::Error),

  #[error("io error: {0}")]
  Io(#[from] io::Error),
}

pub fn run_command(sub: SubCommand) -> Result<(), CommandError> {
  match sub {
    SubCommand::Apply(cmd) => cmd.execute(),
    SubCommand::Serve(cmd) => cmd.execute()
  }
}
