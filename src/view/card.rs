use std::fmt::{self, Write};

use crate::models::Tile;

/// One domino: top number, divider, bottom number.
pub fn write_card(out: &mut String, tile: &Tile) -> fmt::Result {
  write!(
    out,
    concat!(
      "<div class=\"domino-card\">",
      "<div class=\"domino-number\">{}</div>",
      "<div class=\"domino-divider\"></div>",
      "<div class=\"domino-number\">{}</div>",
      "</div>"
    ),
    tile.top, tile.bottom
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn shows_both_halves_in_order() {
    let mut out = String::new();
    write_card(&mut out, &Tile::new(-2, 5)).unwrap();
    let top = out.find(">-2<").unwrap();
    let bottom = out.find(">5<").unwrap();
    assert!(top < bottom);
    assert!(out.starts_with("<div class=\"domino-card\">"));
  }
}
