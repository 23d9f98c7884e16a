use actix_web::{get, middleware, post, web, App, HttpServer, HttpResponse, Responder};
use actix_web::http::header::{self, ContentType};
use actix_web::http::StatusCode;
use clap::Parser;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::runtime::Runtime;

use crate::commands::CommandError;
use crate::models::Tile;
use crate::store::config::load_defaults;
use crate::store::{Action, Board};
use crate::view::render_page;

#[derive(Parser)]
pub struct ServeCommand {
  // Port to listen on
  #[clap(long, default_value_t = 3000)]
  port: u16,

  // Host to listen on
  #[clap(long, default_value = "localhost")]
  host: String,

  // YAML file with the default board
  #[clap(long)]
  config: Option<String>,
}

impl ServeCommand {
  pub fn execute(&self) -> Result<(), CommandError> {
    let defaults = load_defaults(self.config.as_deref())?;
    let board = web::Data::new(Mutex::new(Board::new(defaults)));

    // create http server
    let rt = Runtime::new()?;
    rt.block_on(server(&self.host, self.port, board))?;
    Ok(())
  }
}

type BoardCell = Mutex<Board>;

#[derive(Serialize)]
struct Snapshot<'a> {
  tiles: &'a [Tile],
  doubles: usize,
}

#[derive(Deserialize)]
struct RemoveForm {
  #[serde(default)]
  total: String,
}

#[derive(Deserialize)]
struct AddForm {
  #[serde(default)]
  top: String,
  #[serde(default)]
  bottom: String,
}

#[derive(Deserialize)]
struct UpdateForm {
  #[serde(default)]
  tiles: String,
}

// A panic mid-request never leaves a half-written board, the sequence is
// only ever swapped whole.
fn lock(board: &BoardCell) -> MutexGuard<'_, Board> {
  board.lock().unwrap_or_else(PoisonError::into_inner)
}

fn page(status: StatusCode, board: &Board, message: Option<&str>) -> HttpResponse {
  match render_page(board, message) {
    Ok(body) => HttpResponse::build(status)
      .content_type(ContentType(mime::TEXT_HTML_UTF_8))
      .body(body),
    Err(err) => {
      error!("Failed to render board: {}", err);
      HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
        .content_type(ContentType(mime::TEXT_PLAIN))
        .body("unable to render board")
    }
  }
}

fn apply(board: &BoardCell, action: Action) -> HttpResponse {
  let mut board = lock(board);
  match board.dispatch(&action) {
    Ok(_) => HttpResponse::SeeOther()
      .append_header((header::LOCATION, "/"))
      .finish(),
    Err(err) => page(StatusCode::BAD_REQUEST, &board, Some(&err.to_string())),
  }
}

#[get("/")]
async fn index(board: web::Data<BoardCell>) -> impl Responder {
  page(StatusCode::OK, &lock(&board), None)
}

#[get("/board.json")]
async fn board_json(board: web::Data<BoardCell>) -> impl Responder {
  let board = lock(&board);
  HttpResponse::Ok().json(Snapshot { tiles: board.tiles(), doubles: board.doubles() })
}

#[post("/actions/remove")]
async fn remove_by_total(board: web::Data<BoardCell>, form: web::Form<RemoveForm>) -> impl Responder {
  apply(&board, Action::RemoveByTotal(form.into_inner().total))
}

#[post("/actions/add")]
async fn add_tile(board: web::Data<BoardCell>, form: web::Form<AddForm>) -> impl Responder {
  let form = form.into_inner();
  apply(&board, Action::AddTile(form.top, form.bottom))
}

#[post("/actions/update")]
async fn update(board: web::Data<BoardCell>, form: web::Form<UpdateForm>) -> impl Responder {
  apply(&board, Action::Update(form.into_inner().tiles))
}

// Parameterless actions, named the same as on the command line.
#[post("/actions/{name}")]
async fn simple_action(board: web::Data<BoardCell>, path: web::Path<String>) -> impl Responder {
  match path.into_inner().parse::<Action>() {
    Ok(action @ (Action::SortAsc | Action::SortDesc | Action::Flip | Action::RemoveDuplicate | Action::Reset)) => {
      apply(&board, action)
    }
    _ => HttpResponse::build(StatusCode::NOT_FOUND)
      .content_type(ContentType(mime::TEXT_PLAIN))
      .body("action not found"),
  }
}

/// Routes for the board. The specific `/actions/*` routes must come before
/// the `{name}` catch-all.
pub fn routes(cfg: &mut web::ServiceConfig) {
  cfg
    .service(index)
    .service(board_json)
    .service(remove_by_total)
    .service(add_tile)
    .service(update)
    .service(simple_action);
}

async fn server(host: &str, port: u16, board: web::Data<BoardCell>) -> std::io::Result<()> {
  info!("Starting server on {}:{}", host, port);
  HttpServer::new(move || {
      App::new()
        .app_data(board.clone())
        .wrap(middleware::Logger::default())
        .configure(routes)
  })
  .bind((host, port))?
  .run()
  .await
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::test;
  use serde_json::{json, Value};

  fn cell(pairs: &[(i32, i32)]) -> web::Data<BoardCell> {
    let tiles = pairs.iter().map(|&(a, b)| Tile::new(a, b)).collect();
    web::Data::new(Mutex::new(Board::new(tiles)))
  }

  macro_rules! app {
    ($board:expr) => {
      test::init_service(App::new().app_data($board.clone()).configure(routes)).await
    };
  }

  #[actix_web::test]
  async fn board_json_reports_tiles_and_doubles() {
    let board = cell(&[(1, 1), (2, 3)]);
    let app = app!(board);
    let req = test::TestRequest::get().uri("/board.json").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "tiles": [[1, 1], [2, 3]], "doubles": 1 }));
  }

  #[actix_web::test]
  async fn index_renders_the_board() {
    let board = cell(&[(4, 5)]);
    let app = app!(board);
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let page = std::str::from_utf8(&body).unwrap();
    assert!(page.contains("[[4,5]]"));
  }

  #[actix_web::test]
  async fn simple_actions_redirect_home() {
    let board = cell(&[(5, 1), (2, 4)]);
    let app = app!(board);
    let req = test::TestRequest::post().uri("/actions/sort-asc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap().to_str().unwrap(), "/");
    assert_eq!(lock(&board).literal().unwrap(), "[[2,4],[5,1]]");

    let req = test::TestRequest::post().uri("/actions/flip").to_request();
    test::call_service(&app, req).await;
    assert_eq!(lock(&board).literal().unwrap(), "[[4,2],[1,5]]");
  }

  #[actix_web::test]
  async fn unknown_action_is_not_found() {
    let board = cell(&[(1, 2)]);
    let app = app!(board);
    for uri in ["/actions/shuffle", "/actions/remove:3", "/actions/add:1,2", "/actions/update:%5B%5D"] {
      let req = test::TestRequest::post().uri(uri).to_request();
      let resp = test::call_service(&app, req).await;
      assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
    }
    assert_eq!(lock(&board).literal().unwrap(), "[[1,2]]");
  }

  #[actix_web::test]
  async fn remove_and_add_use_form_fields() {
    let board = cell(&[(1, 1), (2, 2)]);
    let app = app!(board);

    let req = test::TestRequest::post().uri("/actions/remove")
      .set_form(&[("total", "abc")]).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::SEE_OTHER);
    assert_eq!(lock(&board).literal().unwrap(), "[[1,1],[2,2]]");

    let req = test::TestRequest::post().uri("/actions/remove")
      .set_form(&[("total", "2")]).to_request();
    test::call_service(&app, req).await;
    assert_eq!(lock(&board).literal().unwrap(), "[[2,2]]");

    let req = test::TestRequest::post().uri("/actions/add")
      .set_form(&[("top", "6"), ("bottom", "")]).to_request();
    test::call_service(&app, req).await;
    assert_eq!(lock(&board).literal().unwrap(), "[[2,2]]");

    let req = test::TestRequest::post().uri("/actions/add")
      .set_form(&[("top", "6"), ("bottom", "0")]).to_request();
    test::call_service(&app, req).await;
    assert_eq!(lock(&board).literal().unwrap(), "[[2,2],[6,0]]");
  }

  #[actix_web::test]
  async fn bad_update_shows_error_and_keeps_board() {
    let board = cell(&[(3, 3)]);
    let app = app!(board);

    let req = test::TestRequest::post().uri("/actions/update")
      .set_form(&[("tiles", "[1,2]")]).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(resp).await;
    let page = std::str::from_utf8(&body).unwrap();
    assert!(page.contains("Invalid format. Please use [[a,b], [c,d]]"));
    assert_eq!(lock(&board).literal().unwrap(), "[[3,3]]");

    let req = test::TestRequest::post().uri("/actions/update")
      .set_form(&[("tiles", "not json")]).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(resp).await;
    assert!(std::str::from_utf8(&body).unwrap().contains("Invalid JSON format"));

    let req = test::TestRequest::post().uri("/actions/update")
      .set_form(&[("tiles", "[[1,2],[3,4]]")]).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::SEE_OTHER);
    assert_eq!(lock(&board).literal().unwrap(), "[[1,2],[3,4]]");
  }

  #[actix_web::test]
  async fn reset_restores_initial_board() {
    let board = cell(&[(1, 2), (2, 1)]);
    let app = app!(board);
    let req = test::TestRequest::post().uri("/actions/remove-duplicate").to_request();
    test::call_service(&app, req).await;
    assert_eq!(lock(&board).literal().unwrap(), "[]");

    let req = test::TestRequest::post().uri("/actions/reset").to_request();
    test::call_service(&app, req).await;
    assert_eq!(lock(&board).literal().unwrap(), "[[1,2],[2,1]]");
  }
}
