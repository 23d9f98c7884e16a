use clap::Parser;
use log::{error, info};

use crate::commands::CommandError;
use crate::store::config::load_defaults;
use crate::store::{Action, Board, Outcome};

/// Runs a pipeline of actions against a board and prints the result.
#[derive(Parser)]
pub struct ApplyCommand {
  // YAML file with the default board
  #[clap(long)]
  config: Option<String>,

  // Starting board as JSON, e.g. [[1,2],[3,4]]
  #[clap(long)]
  tiles: Option<String>,

  // sort-asc, sort-desc, flip, remove-duplicate, reset,
  // remove:<total>, add:<top>,<bottom>, update:<json>
  actions: Vec<Action>,
}

impl ApplyCommand {
  pub fn execute(&self) -> Result<(), CommandError> {
    let board = self.run()?;
    println!("{}", board.literal()?);
    println!("doubles: {}", board.doubles());
    Ok(())
  }

  fn run(&self) -> Result<Board, CommandError> {
    let mut board = Board::new(load_defaults(self.config.as_deref())?);
    if let Some(tiles) = &self.tiles {
      board.dispatch(&Action::Update(tiles.clone()))?;
    }

    for action in self.actions.iter() {
      match board.dispatch(action) {
        Ok(Outcome::Applied) => {}
        Ok(Outcome::Ignored) => info!("{} ignored", action),
        // the board keeps its last valid state, carry on from there
        Err(err) => error!("{}: {}", action, err),
      }
    }
    Ok(board)
  }
}
