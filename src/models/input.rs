use serde_json::Value;
use thiserror::Error;

use crate::models::tile::Tile;

/// Marker for input that was dropped on purpose. Callers skip the update
/// instead of reporting anything.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Ignored;

/// Errors surfaced to the user when replacing the whole board from text.
#[derive(Debug, Error)]
pub enum ImportError {
  #[error("Invalid JSON format")]
  Malformed(#[from] serde_json::Error),

  #[error("Invalid format. Please use [[a,b], [c,d]]")]
  Shape,
}

/// Lenient integer parsing, the way number inputs are read from a form:
/// leading whitespace, an optional sign, then as many digits as there are.
/// Anything after the digits is dropped, so `"12abc"` is 12 and `"3.9"` is 3.
pub fn parse_int<T: TryFrom<i64>>(text: &str) -> Result<T, Ignored> {
  let text = text.trim_start();
  let (negative, digits) = match text.as_bytes().first() {
    Some(b'-') => (true, &text[1..]),
    Some(b'+') => (false, &text[1..]),
    _ => (false, text),
  };

  let mut value: i64 = 0;
  let mut seen = false;
  for d in digits.bytes().take_while(u8::is_ascii_digit) {
    seen = true;
    let d = (d - b'0') as i64;
    value = value.checked_mul(10)
      .and_then(|v| if negative { v.checked_sub(d) } else { v.checked_add(d) })
      .ok_or(Ignored)?;
  }

  if !seen {
    return Err(Ignored);
  }
  T::try_from(value).map_err(|_| Ignored)
}

/// Decodes a JSON array of `[a, b]` pairs.
pub fn parse_tiles(text: &str) -> Result<Vec<Tile>, ImportError> {
  let value: Value = serde_json::from_str(text)?;
  let items = match value {
    Value::Array(items) => items,
    _ => return Err(ImportError::Shape),
  };

  items.iter().map(pair).collect::<Option<Vec<_>>>().ok_or(ImportError::Shape)
}

fn pair(item: &Value) -> Option<Tile> {
  match item.as_array()?.as_slice() {
    [top, bottom] => Some(Tile::new(half(top)?, half(bottom)?)),
    _ => None,
  }
}

// Whole numbers written as floats (`1.0`, `1e0`) still count.
fn half(value: &Value) -> Option<i32> {
  if let Some(v) = value.as_i64() {
    return i32::try_from(v).ok();
  }
  let v = value.as_f64()?;
  if v.fract() != 0.0 || v < i32::MIN as f64 || v > i32::MAX as f64 {
    return None;
  }
  Some(v as i32)
}
