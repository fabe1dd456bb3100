//! Moni Talk visual-novel panel, in-browser WASM worker.
//!
//! Exports `handle_request(method, path, query, body)` for the Web Worker
//! bridge to call, plus `update_affinity_panel` / `hide_affinity_panel` for
//! direct use. Uses `matchit` for URL routing.
//!
//! The worker keeps a mirror of the panel elements the page mounted. Each
//! call runs a binder from [`panel`] against that mirror and returns the
//! resulting DOM patches as JSON for the page to replay.

use wasm_bindgen::prelude::*;

pub mod dom;
pub mod error;
pub mod panel;
pub mod routes;

use error::BridgeError;

/// Process an HTTP-like request and return a JSON response.
///
/// # Arguments
/// * `method` — HTTP method (e.g., "GET", "POST")
/// * `path`   — URL path (e.g., "/api/vn/affinity")
/// * `query`  — Query string, may be empty
/// * `body`   — Request body (JSON or form data). Empty string for GET requests.
///
/// # Returns
/// A JSON patch list, a JSON document snapshot, or a JSON error object.
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    let mut router = matchit::Router::new();

    router.insert("/api/vn/mount", "mount").ok();
    router.insert("/api/vn/document", "document").ok();
    router.insert("/api/vn/affinity", "affinity").ok();
    router.insert("/api/vn/affinity/hide", "affinity_hide").ok();
    router.insert("/api/vn/ticks", "ticks").ok();
    router.insert("/api/vn/route", "route").ok();
    router.insert("/api/vn/dynamics", "dynamics").ok();
    router.insert("/api/vn/sprites", "sprites").ok();
    router.insert("/api/vn/day", "day").ok();
    router.insert("/api/vn/panel", "panel").ok();

    match router.at(path) {
        Ok(matched) => match (*matched.value, method) {
            ("document", "GET") => routes::vn::handle_document_get(query),

            ("mount", "POST") => routes::vn::handle_mount_post(body),
            ("affinity", "POST") => routes::vn::handle_affinity_post(body),
            ("affinity_hide", "POST") => routes::vn::handle_affinity_hide_post(body),
            ("ticks", "POST") => routes::vn::handle_ticks_post(body),
            ("route", "POST") => routes::vn::handle_route_post(body),
            ("dynamics", "POST") => routes::vn::handle_dynamics_post(body),
            ("sprites", "POST") => routes::vn::handle_sprites_post(body),
            ("day", "POST") => routes::vn::handle_day_post(body),
            ("panel", "POST") => routes::vn::handle_panel_post(body),

            _ => BridgeError::MethodNotAllowed {
                method: method.to_string(),
                path: path.to_string(),
            }
            .to_json(),
        },
        Err(_) => BridgeError::NotFound(path.to_string()).to_json(),
    }
}

/// Project an affinity snapshot (JSON object, `null`, or empty) onto the
/// mounted panel. Returns the JSON patch list.
#[wasm_bindgen]
pub fn update_affinity_panel(affinity_json: &str) -> String {
    routes::vn::handle_affinity_post(affinity_json)
}

/// Hide the affinity panel. Returns the JSON patch list.
#[wasm_bindgen]
pub fn hide_affinity_panel() -> String {
    routes::vn::handle_affinity_hide_post("")
}
