//! HTTP-like route handlers called from `handle_request`.

pub mod arcana;
pub mod fusion;
pub mod util;
