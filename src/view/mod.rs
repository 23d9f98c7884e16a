//! Server-rendered board page. Forms post to `/actions/*`.

pub mod card;

use std::fmt::{self, Write};
use thiserror::Error;

use crate::store::Board;

#[derive(Debug, Error)]
pub enum RenderError {
  #[error("unable to encode board: {0}")]
  Json(#[from] serde_json::Error),

  #[error("unable to write page")]
  Fmt(#[from] fmt::Error),
}

const STYLE: &str = "\
body{font-family:sans-serif;background:#f4f5f7;color:#1f2933;margin:0}\
.container{max-width:960px;margin:0 auto;padding:2rem}\
.section-card{background:#fff;border-radius:12px;padding:1.5rem;margin-bottom:1.5rem}\
.section-title{margin-top:0}\
.code-block{font-family:monospace;background:#1f2933;color:#e4e7eb;padding:1rem;border-radius:8px;overflow-x:auto}\
.row{display:flex;gap:1rem;flex-wrap:wrap;margin-top:1rem;align-items:center}\
.input-group{display:flex;gap:.5rem;align-items:center}\
.counter{background:#4c63b6;color:#fff;padding:.25rem 1rem;border-radius:99px;font-weight:bold;font-size:1.25rem}\
.alert{background:#fde8e8;color:#9b1c1c;padding:1rem;border-radius:8px;margin-bottom:1.5rem}\
.domino-list{display:flex;flex-wrap:wrap;gap:1rem}\
.domino-card{display:flex;flex-direction:column;align-items:center;border:2px solid #1f2933;border-radius:8px;padding:.5rem 1rem}\
.domino-number{font-size:1.5rem;font-weight:bold}\
.domino-divider{width:100%;height:2px;background:#1f2933;margin:.25rem 0}\
.empty-state{color:#7b8794}";

/// Renders the whole page. `error` is shown above the board when a bulk
/// update was rejected.
pub fn render_page(board: &Board, error: Option<&str>) -> Result<String, RenderError> {
  let mut out = String::with_capacity(4096);
  out.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Dominoes</title>");
  write!(out, "<style>{}</style></head><body><div class=\"container\">", STYLE)?;
  out.push_str("<h1 class=\"page-title\">Dominoes</h1>");

  if let Some(error) = error {
    write!(out, "<div class=\"alert\" role=\"alert\">{}</div>", escape(error))?;
  }

  out.push_str("<div class=\"section-card\"><h2 class=\"section-title\">Source Data</h2>");
  write!(out, "<div class=\"code-block\">{}</div>", escape(&board.literal()?))?;
  out.push_str(concat!(
    "<div class=\"row\">",
    "<form class=\"input-group\" method=\"post\" action=\"/actions/add\">",
    "<input name=\"top\" type=\"number\" placeholder=\"0\" style=\"width:64px\">",
    "<span>-</span>",
    "<input name=\"bottom\" type=\"number\" placeholder=\"1\" style=\"width:64px\">",
    "<button type=\"submit\">Add Card</button></form>",
    "<form class=\"input-group\" method=\"post\" action=\"/actions/update\">",
    "<input name=\"tiles\" type=\"text\" placeholder=\"e.g. [[1,2], [3,4]]\" style=\"width:220px\">",
    "<button type=\"submit\">Update Array</button></form>",
    "</div></div>"
  ));

  out.push_str("<div class=\"section-card row\"><h2 class=\"section-title\">Double Numbers</h2>");
  write!(out, "<div class=\"counter\">{}</div></div>", board.doubles())?;

  write_controls(&mut out)?;

  out.push_str("<div class=\"section-card\"><h2 class=\"section-title\">Board</h2><div class=\"domino-list\">");
  for tile in board.tiles() {
    card::write_card(&mut out, tile)?;
  }
  if board.tiles().is_empty() {
    out.push_str("<div class=\"empty-state\">No dominoes on the board. Add some or reset!</div>");
  }
  out.push_str("</div></div></div></body></html>");
  Ok(out)
}

fn write_controls(out: &mut String) -> fmt::Result {
  out.push_str("<div class=\"section-card\"><h2 class=\"section-title\">Controls</h2><div class=\"row\">");
  for (action, label) in [
    ("sort-asc", "Sort (ASC)"),
    ("sort-desc", "Sort (DESC)"),
    ("flip", "Flip"),
    ("remove-duplicate", "Remove Duplicate"),
    ("reset", "Reset"),
  ] {
    write!(
      out,
      "<form method=\"post\" action=\"/actions/{}\"><button type=\"submit\">{}</button></form>",
      action, label
    )?;
  }
  out.push_str(concat!(
    "</div>",
    "<form class=\"input-group row\" method=\"post\" action=\"/actions/remove\">",
    "<input name=\"total\" type=\"number\" placeholder=\"Input Number\" style=\"width:140px\">",
    "<button type=\"submit\">Remove</button></form>",
    "</div>"
  ));
  Ok(())
}

fn escape(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      _ => out.push(c),
    }
  }
  out
}
