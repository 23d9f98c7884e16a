//! Pure transforms over a sequence of tiles. Each one returns a new sequence
//! and leaves its input alone; the board swaps the result in.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::Tile;

pub fn sort_asc(tiles: &[Tile]) -> Vec<Tile> {
  sorted(tiles, |a, b| a.total().cmp(&b.total()).then(a.top.cmp(&b.top)))
}

pub fn sort_desc(tiles: &[Tile]) -> Vec<Tile> {
  sorted(tiles, |a, b| b.total().cmp(&a.total()).then(b.top.cmp(&a.top)))
}

// sort_by is stable, full ties keep their input order.
fn sorted<F>(tiles: &[Tile], compare: F) -> Vec<Tile>
where
  F: FnMut(&Tile, &Tile) -> Ordering,
{
  let mut out = tiles.to_vec();
  out.sort_by(compare);
  out
}

pub fn flip(tiles: &[Tile]) -> Vec<Tile> {
  tiles.iter().map(Tile::flipped).collect()
}

/// Keeps a tile only when no other tile has its shape and no other tile has
/// its total. Two different shapes that add up to the same number are both
/// dropped.
pub fn remove_duplicate(tiles: &[Tile]) -> Vec<Tile> {
  let mut shapes: HashMap<(i32, i32), usize> = HashMap::new();
  let mut totals: HashMap<i64, usize> = HashMap::new();
  for tile in tiles {
    *shapes.entry(tile.shape()).or_default() += 1;
    *totals.entry(tile.total()).or_default() += 1;
  }

  tiles.iter()
    .filter(|t| shapes[&t.shape()] == 1 && totals[&t.total()] == 1)
    .copied()
    .collect()
}

pub fn remove_by_total(tiles: &[Tile], target: i64) -> Vec<Tile> {
  tiles.iter().filter(|t| t.total() != target).copied().collect()
}

pub fn add_tile(tiles: &[Tile], tile: Tile) -> Vec<Tile> {
  let mut out = Vec::with_capacity(tiles.len() + 1);
  out.extend_from_slice(tiles);
  out.push(tile);
  out
}

pub fn doubles(tiles: &[Tile]) -> usize {
  tiles.iter().filter(|t| t.is_double()).count()
}
