//! Velvet Room in-browser WASM server.
//!
//! Exports `handle_request(method, path, query, body)` for the Web Worker
//! bridge to call. Uses `matchit` for URL routing, the same router engine
//! that powers Axum.
//!
//! The fusion guide asks two questions of the arcana fusion table: what two
//! arcanas fuse into, and which pairs fuse into a given arcana. Both are
//! answered by [`fusion`]; the routes only parse and render.

use wasm_bindgen::prelude::*;

pub mod arcana;
pub mod fusion;
pub mod routes;

pub use arcana::{Arcana, ParseArcanaError};
pub use fusion::{FusionPair, FusionTable, find_pairs_producing, resolve};

/// Process an HTTP-like request and return an HTML fragment (or JSON).
///
/// # Arguments
/// * `method` — HTTP method (e.g., "GET")
/// * `path`   — URL path (e.g., "/api/fusion/result")
/// * `query`  — Query string (e.g., "?a=Fool&b=Magician")
/// * `body`   — Request body. Empty string for GET requests.
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    let mut router = matchit::Router::new();

    router.insert("/api/arcana", "arcana_list").ok();
    router.insert("/api/fusion/result", "fusion_result").ok();
    router.insert("/api/fusion/pairs", "fusion_pairs").ok();
    router.insert("/api/fusion/partners", "fusion_partners").ok();
    router.insert("/api/fusion/chart", "fusion_chart").ok();

    tracing::debug!(method, path, query, body_len = body.len(), "handle_request");

    match router.at(path) {
        Ok(matched) => match (*matched.value, method) {
            ("arcana_list", "GET") => routes::arcana::handle_list(),
            ("fusion_result", "GET") => routes::fusion::handle_result(query),
            ("fusion_pairs", "GET") => routes::fusion::handle_pairs(query),
            ("fusion_partners", "GET") => routes::fusion::handle_partners(query),
            ("fusion_chart", "GET") => routes::fusion::handle_chart(),
            _ => method_not_allowed(),
        },
        Err(_) => not_found(),
    }
}

fn not_found() -> String {
    r#"<span class="text-velvet-red">404 — route not found</span>"#.to_string()
}

fn method_not_allowed() -> String {
    r#"<span class="text-velvet-red">405 — method not allowed</span>"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_fusion_result() {
        let html = handle_request("GET", "/api/fusion/result", "?a=Fool&b=Magician", "");
        assert!(html.contains("Fortune"));
    }

    #[test]
    fn routes_fusion_pairs() {
        let html = handle_request("GET", "/api/fusion/pairs", "?target=Magician", "");
        assert!(html.contains("Moon × Sun"));
    }

    #[test]
    fn routes_fusion_partners() {
        let html = handle_request("GET", "/api/fusion/partners", "?arcana=Star", "");
        assert!(html.contains("<td>Sun</td><td>Devil</td>"));
    }

    #[test]
    fn routes_fusion_chart() {
        let html = handle_request("GET", "/api/fusion/chart", "", "");
        assert!(html.contains("fusion-chart"));
    }

    #[test]
    fn routes_arcana_list() {
        let json = handle_request("GET", "/api/arcana", "", "");
        assert!(json.starts_with("[\"Fool\""));
    }

    #[test]
    fn returns_404_for_unknown_route() {
        let html = handle_request("GET", "/api/nonexistent", "", "");
        assert!(html.contains("404"));
    }

    #[test]
    fn returns_405_for_wrong_method() {
        let html = handle_request("POST", "/api/fusion/result", "", "a=Fool&b=Magician");
        assert!(html.contains("405"));
    }

    #[test]
    fn reexports_cover_the_resolver() {
        assert_eq!(resolve(Arcana::Moon, Arcana::Sun), Some(Arcana::Magician));
        assert!(find_pairs_producing(Arcana::Magician)
            .iter()
            .any(|p| p.first() == Arcana::Moon && p.second() == Arcana::Sun));
    }
}
