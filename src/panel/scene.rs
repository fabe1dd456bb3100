//! Scene chrome around the affinity bars: character sprites, the day badge,
//! and the slide-out side panel.

use crate::dom::{ACTIVE, ElementHandle, ElementRegistry, OPEN};

use super::cast::{CAST, capitalize};

pub const DAY_NUMBER_ID: &str = "vnDayNumber";
pub const DAY_LABEL_ID: &str = "vnDayLabel";
pub const SIDE_PANEL_ID: &str = "vnSidePanel";
pub const BACKDROP_ID: &str = "vnPanelBackdrop";

/// Label shown on days without a special event.
pub const DEFAULT_DAY_LABEL: &str = "School Day";

pub fn sprite_id(key: &str) -> String {
    format!("sprite{}", capitalize(key))
}

/// Highlight the sprites of characters mentioned in `narrative`
/// (case-insensitive) and dim the rest.
pub fn update_vn_sprites<R: ElementRegistry>(ui: &mut R, narrative: &str) {
    let lower = narrative.to_lowercase();
    for member in CAST {
        if let Some(mut sprite) = ui.get_element_by_id(&sprite_id(member.key)) {
            sprite.toggle_class(ACTIVE, lower.contains(member.key));
        }
    }
}

/// Show the day number and the name of today's event, if any.
pub fn update_vn_day<R: ElementRegistry>(ui: &mut R, day: u32, event_name: Option<&str>) {
    if let Some(mut el) = ui.get_element_by_id(DAY_NUMBER_ID) {
        el.set_text_content(&day.to_string());
    }
    if let Some(mut label) = ui.get_element_by_id(DAY_LABEL_ID) {
        label.set_text_content(event_name.unwrap_or(DEFAULT_DAY_LABEL));
    }
}

fn set_side_panel_open<R: ElementRegistry>(ui: &mut R, open: bool) {
    for id in [SIDE_PANEL_ID, BACKDROP_ID] {
        if let Some(mut el) = ui.get_element_by_id(id) {
            el.toggle_class(OPEN, open);
        }
    }
}

/// Flip the side panel and its backdrop together, keyed off the panel.
pub fn toggle_vn_panel<R: ElementRegistry>(ui: &mut R) {
    let is_open = ui
        .get_element_by_id(SIDE_PANEL_ID)
        .is_some_and(|panel| panel.has_class(OPEN));
    set_side_panel_open(ui, !is_open);
}

pub fn close_vn_panel<R: ElementRegistry>(ui: &mut R) {
    set_side_panel_open(ui, false);
}
