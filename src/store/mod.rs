pub mod config;
pub mod transform;

use log::{debug, info, warn};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::models::{parse_int, parse_tiles, Ignored, ImportError, Tile};

/// Everything a user can do to the board. Inputs stay raw text until the
/// action is dispatched, so parse failures are handled in one place.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
  SortAsc,
  SortDesc,
  Flip,
  RemoveDuplicate,
  RemoveByTotal(String),
  AddTile(String, String),
  Update(String),
  Reset,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
  Applied,
  Ignored,
}

/// The single owner of the tile sequence. Transforms never touch it in
/// place; every dispatch computes a new sequence and assigns it once.
#[derive(Debug)]
pub struct Board {
  tiles: Vec<Tile>,
  defaults: Vec<Tile>,
}

impl Board {
  pub fn new(defaults: Vec<Tile>) -> Self {
    Self { tiles: defaults.clone(), defaults }
  }

  pub fn tiles(&self) -> &[Tile] {
    &self.tiles
  }

  pub fn doubles(&self) -> usize {
    transform::doubles(&self.tiles)
  }

  /// Literal JSON form of the current sequence, e.g. `[[1,2],[3,4]]`.
  pub fn literal(&self) -> serde_json::Result<String> {
    serde_json::to_string(&self.tiles)
  }

  pub fn dispatch(&mut self, action: &Action) -> Result<Outcome, ImportError> {
    let next = match self.compute(action) {
      Ok(Ok(next)) => next,
      Ok(Err(Ignored)) => {
        debug!("Ignoring {} with unparseable input", action);
        return Ok(Outcome::Ignored);
      }
      Err(err) => {
        warn!("Rejected {}: {}", action, err);
        return Err(err);
      }
    };

    info!("Applied {}: {} -> {} tiles", action, self.tiles.len(), next.len());
    self.tiles = next;
    Ok(Outcome::Applied)
  }

  fn compute(&self, action: &Action) -> Result<Result<Vec<Tile>, Ignored>, ImportError> {
    let tiles = &self.tiles;
    let next = match action {
      Action::SortAsc => transform::sort_asc(tiles),
      Action::SortDesc => transform::sort_desc(tiles),
      Action::Flip => transform::flip(tiles),
      Action::RemoveDuplicate => transform::remove_duplicate(tiles),
      Action::RemoveByTotal(text) => match parse_int(text) {
        Ok(target) => transform::remove_by_total(tiles, target),
        Err(ignored) => return Ok(Err(ignored)),
      },
      Action::AddTile(top, bottom) => match (parse_int(top), parse_int(bottom)) {
        (Ok(top), Ok(bottom)) => transform::add_tile(tiles, Tile::new(top, bottom)),
        _ => return Ok(Err(Ignored)),
      },
      Action::Update(text) => parse_tiles(text)?,
      Action::Reset => self.defaults.clone(),
    };
    Ok(Ok(next))
  }
}

impl fmt::Display for Action {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Action::SortAsc => write!(f, "sort-asc"),
      Action::SortDesc => write!(f, "sort-desc"),
      Action::Flip => write!(f, "flip"),
      Action::RemoveDuplicate => write!(f, "remove-duplicate"),
      Action::RemoveByTotal(total) => write!(f, "remove:{}", total),
      Action::AddTile(top, bottom) => write!(f, "add:{},{}", top, bottom),
      Action::Update(text) => write!(f, "update:{}", text),
      Action::Reset => write!(f, "reset"),
    }
  }
}

#[derive(Debug, Error)]
#[error("unknown action '{0}', expected one of sort-asc, sort-desc, flip, remove-duplicate, reset, remove:<total>, add:<top>,<bottom>, update:<json>")]
pub struct UnknownAction(String);

impl FromStr for Action {
  type Err = UnknownAction;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let action = match s.split_once(':') {
      None => match s {
        "sort-asc" => Action::SortAsc,
        "sort-desc" => Action::SortDesc,
        "flip" => Action::Flip,
        "remove-duplicate" => Action::RemoveDuplicate,
        "reset" => Action::Reset,
        _ => return Err(UnknownAction(s.to_string())),
      },
      Some(("remove", total)) => Action::RemoveByTotal(total.to_string()),
      Some(("add", halves)) => {
        let (top, bottom) = halves.split_once(',').unwrap_or((halves, ""));
        Action::AddTile(top.to_string(), bottom.to_string())
      }
      Some(("update", text)) => Action::Update(text.to_string()),
      Some(_) => return Err(UnknownAction(s.to_string())),
    };
    Ok(action)
  }
}
