//! `/api/vn/*` routes — run a panel binder against the worker's document
//! mirror and answer with the patches for the page to apply.
//!
//! Every handler returns either a JSON array of patches or a JSON error
//! object (see [`BridgeError::to_json`]).

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dom::{ElementSpec, Patch, state};
use crate::error::BridgeError;
use crate::panel::{self, AffinityMap, StorySnapshot, dynamics, route, scene, ticks};
use crate::routes::util::{get_param, parse_form_body, parse_optional_json};

/// Body of `POST /api/vn/mount`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MountRequest {
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
}

#[derive(Debug, Serialize)]
struct MountResponse {
    mounted: usize,
}

fn respond(route: &str, result: Result<Vec<Patch>, BridgeError>) -> String {
    match result {
        Ok(patches) => {
            debug!(route, patches = patches.len(), "panel updated");
            serde_json::to_string(&patches).unwrap_or_else(|_| "[]".to_string())
        }
        Err(e) => {
            warn!(route, error = %e, "rejected panel request");
            e.to_json()
        }
    }
}

// ── POST /api/vn/mount ─────────────────────────────────────────────

/// Handle POST /api/vn/mount
/// Body: `{"elements":[{"id":"vnAffinitySayori"},{"id":"affinityPanel","classes":["visible"]}]}`
/// Replaces the mirror with the elements the page's markup contains.
pub fn handle_mount_post(body: &str) -> String {
    match serde_json::from_str::<MountRequest>(body) {
        Ok(req) => {
            let mounted = state::with_document_mut(|doc| doc.mount(req.elements));
            debug!(mounted, "document mounted");
            serde_json::to_string(&MountResponse { mounted })
                .unwrap_or_else(|_| r#"{"mounted":0}"#.to_string())
        }
        Err(e) => {
            let e = BridgeError::from(e);
            warn!(error = %e, "rejected mount request");
            e.to_json()
        }
    }
}

// ── GET /api/vn/document ───────────────────────────────────────────

/// Handle GET /api/vn/document
/// Returns the mirrored elements as JSON, keyed by id.
pub fn handle_document_get(_query: &str) -> String {
    state::with_document(|doc| doc.snapshot_json())
}

// ── POST /api/vn/affinity ──────────────────────────────────────────

/// Handle POST /api/vn/affinity
/// Body: affinity map JSON (`{"sayori":15,"yuri":1}`), `null`, or empty.
pub fn handle_affinity_post(body: &str) -> String {
    let result = parse_optional_json::<AffinityMap>(body).map(|affinity| {
        state::apply(|doc| panel::update_affinity_panel(doc, affinity.as_ref()))
    });
    respond("affinity", result)
}

/// Handle POST /api/vn/affinity/hide
pub fn handle_affinity_hide_post(_body: &str) -> String {
    respond("affinity_hide", Ok(state::apply(|doc| panel::hide_affinity_panel(doc))))
}

// ── POST /api/vn/ticks ─────────────────────────────────────────────

pub fn handle_ticks_post(_body: &str) -> String {
    respond("ticks", Ok(state::apply(|doc| ticks::init_vn_ticks(doc))))
}

// ── POST /api/vn/route, /api/vn/dynamics ───────────────────────────

/// Handle POST /api/vn/route
/// Body: the story chat JSON, `null`, or empty.
pub fn handle_route_post(body: &str) -> String {
    let result = parse_optional_json::<StorySnapshot>(body).map(|chat| {
        state::apply(|doc| route::update_route_indicator(doc, chat.as_ref()))
    });
    respond("route", result)
}

/// Handle POST /api/vn/dynamics
/// Body: the story chat JSON, `null`, or empty.
pub fn handle_dynamics_post(body: &str) -> String {
    let result = parse_optional_json::<StorySnapshot>(body).map(|chat| {
        state::apply(|doc| dynamics::update_dynamics_panel(doc, chat.as_ref()))
    });
    respond("dynamics", result)
}

// ── POST /api/vn/sprites ───────────────────────────────────────────

/// Handle POST /api/vn/sprites
/// Body params: `narrative={text}`
pub fn handle_sprites_post(body: &str) -> String {
    let params = parse_form_body(body);
    let narrative = get_param(&params, "narrative").unwrap_or("").to_string();
    respond(
        "sprites",
        Ok(state::apply(|doc| scene::update_vn_sprites(doc, &narrative))),
    )
}

// ── POST /api/vn/day ───────────────────────────────────────────────

/// Handle POST /api/vn/day
/// Body params: `day={n}` and optional `event={name}`
pub fn handle_day_post(body: &str) -> String {
    let params = parse_form_body(body);
    let result = match get_param(&params, "day") {
        None | Some("") => Err(BridgeError::MissingParam("day")),
        Some(raw) => match raw.parse::<u32>() {
            Ok(day) => {
                let event = get_param(&params, "event").filter(|e| !e.is_empty());
                Ok(state::apply(|doc| scene::update_vn_day(doc, day, event)))
            }
            Err(_) => Err(BridgeError::InvalidParam {
                name: "day",
                value: raw.to_string(),
            }),
        },
    };
    respond("day", result)
}

// ── POST /api/vn/panel ─────────────────────────────────────────────

/// Handle POST /api/vn/panel
/// Body params:
///   - action=toggle → flip the side panel and backdrop
///   - action=close  → close both
pub fn handle_panel_post(body: &str) -> String {
    let params = parse_form_body(body);
    let result = match get_param(&params, "action") {
        Some("toggle") => Ok(state::apply(|doc| scene::toggle_vn_panel(doc))),
        Some("close") => Ok(state::apply(|doc| scene::close_vn_panel(doc))),
        Some(other) => Err(BridgeError::InvalidParam {
            name: "action",
            value: other.to_string(),
        }),
        None => Err(BridgeError::MissingParam("action")),
    };
    respond("panel", result)
}
