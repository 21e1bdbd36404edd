mod dto;
mod error;
pub mod handlers;
pub(crate) mod repo;
mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
