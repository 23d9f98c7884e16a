mod commands;
mod models;
mod store;
mod view;

use clap::Parser;
use log::error;
use std::process;

use crate::commands::{run_command, SubCommand};


/// domino board
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
  #[clap(subcommand)]
  command: SubCommand,
}



fn main() {
  env_logger::init();
  let args = Args::parse();
  if let Err(err) = run_command(args.command) {
    error!("{}", err);
    process::exit(1);
  }
}
