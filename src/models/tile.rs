use serde::{Deserialize, Serialize};

/// A domino: two numbers, read top to bottom.
///
/// Serialized as a two element array, `[top, bottom]`, which is also the
/// literal form shown on the board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Tile {
  pub top: i32,
  pub bottom: i32,
}

impl Tile {
  pub const fn new(top: i32, bottom: i32) -> Self {
    Self { top, bottom }
  }

  /// Sum of both halves. Widened so two `i32` halves never overflow.
  pub fn total(&self) -> i64 {
    self.top as i64 + self.bottom as i64
  }

  /// Orientation independent key, `(min, max)`.
  pub fn shape(&self) -> (i32, i32) {
    (self.top.min(self.bottom), self.top.max(self.bottom))
  }

  pub fn is_double(&self) -> bool {
    self.top == self.bottom
  }

  pub fn flipped(&self) -> Self {
    Self::new(self.bottom, self.top)
  }
}

impl From<[i32; 2]> for Tile {
  fn from([top, bottom]: [i32; 2]) -> Self {
    Self::new(top, bottom)
  }
}

impl From<Tile> for [i32; 2] {
  fn from(tile: Tile) -> Self {
    [tile.top, tile.bottom]
  }
}
