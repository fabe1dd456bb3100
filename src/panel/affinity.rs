//! Affinity panel binder — projects a per-character affinity snapshot onto
//! the fill bars and value labels of the side panel.
//!
//! Each character key `k` is bound to two optional elements:
//! `vnAffinity<K>` (fill bar, `width: <value>%`) and `vnAffinity<K>Val`
//! (label, text `<value>`), where `<K>` is `k` with its first letter
//! capitalized. Elements that the page doesn't have are skipped.
//!
//! Values are written as given. Nothing clamps them to 0–100.

use std::collections::BTreeMap;

use crate::dom::{ElementHandle, ElementRegistry, VISIBLE};

use super::cast::capitalize;

/// Character key → affinity value (0–100 by convention).
pub type AffinityMap = BTreeMap<String, f64>;

pub const FILL_PREFIX: &str = "vnAffinity";
pub const VALUE_SUFFIX: &str = "Val";
pub const PANEL_ID: &str = "affinityPanel";

/// Id of the fill bar bound to `key`.
pub fn fill_id(key: &str) -> String {
    format!("{}{}", FILL_PREFIX, capitalize(key))
}

/// Id of the value label bound to `key`.
pub fn value_id(key: &str) -> String {
    format!("{}{}{}", FILL_PREFIX, capitalize(key), VALUE_SUFFIX)
}

/// Literal rendering of an affinity value: `42` for whole numbers, `42.5`
/// otherwise.
pub fn format_value(value: f64) -> String {
    value.to_string()
}

/// Update every bound element for each entry in `affinity`.
/// `None` means no data yet and does nothing.
pub fn update_affinity_panel<R: ElementRegistry>(ui: &mut R, affinity: Option<&AffinityMap>) {
    let Some(affinity) = affinity else {
        return;
    };
    for (key, &value) in affinity {
        let text = format_value(value);
        if let Some(mut fill) = ui.get_element_by_id(&fill_id(key)) {
            fill.set_style("width", &format!("{}%", text));
        }
        if let Some(mut label) = ui.get_element_by_id(&value_id(key)) {
            label.set_text_content(&text);
        }
    }
}

/// Remove the visibility marker from the affinity panel, if the page has one.
pub fn hide_affinity_panel<R: ElementRegistry>(ui: &mut R) {
    if let Some(mut panel) = ui.get_element_by_id(PANEL_ID) {
        panel.remove_class(VISIBLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Document, ElementSpec};
    use pretty_assertions::assert_eq;

    fn map(entries: &[(&str, f64)]) -> AffinityMap {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn ids_follow_naming_convention() {
        assert_eq!(fill_id("alice"), "vnAffinityAlice");
        assert_eq!(value_id("alice"), "vnAffinityAliceVal");
    }

    #[test]
    fn bound_character_gets_width_and_label() {
        let mut doc = Document::with_ids(["vnAffinityAlice", "vnAffinityAliceVal"]);
        update_affinity_panel(&mut doc, Some(&map(&[("alice", 42.0), ("bob", 7.0)])));

        assert_eq!(doc.element("vnAffinityAlice").unwrap().style["width"], "42%");
        assert_eq!(doc.element("vnAffinityAliceVal").unwrap().text, "42");
        // bob has no elements; only alice's two writes happen
        assert_eq!(doc.patches().len(), 2);
        assert!(doc.patches().iter().all(|p| p.id().starts_with("vnAffinityAlice")));
    }

    #[test]
    fn fill_without_label_is_still_updated() {
        let mut doc = Document::with_ids(["vnAffinityYuri"]);
        update_affinity_panel(&mut doc, Some(&map(&[("yuri", 12.0)])));
        assert_eq!(doc.element("vnAffinityYuri").unwrap().style["width"], "12%");
    }

    #[test]
    fn absent_map_is_a_no_op() {
        let mut doc = Document::with_ids(["vnAffinityAlice", "vnAffinityAliceVal"]);
        update_affinity_panel(&mut doc, None);
        assert!(doc.patches().is_empty());
    }

    #[test]
    fn empty_map_is_a_no_op() {
        let mut doc = Document::with_ids(["vnAffinityAlice", "vnAffinityAliceVal"]);
        update_affinity_panel(&mut doc, Some(&AffinityMap::new()));
        assert!(doc.patches().is_empty());
    }

    #[test]
    fn unbound_keys_touch_nothing() {
        let mut doc = Document::with_ids(["vnAffinityAlice", "affinityPanel"]);
        let before = doc.clone();
        update_affinity_panel(&mut doc, Some(&map(&[("carol", 50.0), ("dave", 3.0)])));
        assert!(doc.patches().is_empty());
        assert_eq!(doc.element("vnAffinityAlice"), before.element("vnAffinityAlice"));
        assert_eq!(doc.element("affinityPanel"), before.element("affinityPanel"));
    }

    #[test]
    fn second_update_overwrites_first() {
        let mut doc = Document::with_ids(["vnAffinityMonika", "vnAffinityMonikaVal"]);
        update_affinity_panel(&mut doc, Some(&map(&[("monika", 10.0)])));
        update_affinity_panel(&mut doc, Some(&map(&[("monika", 68.0)])));
        assert_eq!(doc.element("vnAffinityMonika").unwrap().style["width"], "68%");
        assert_eq!(doc.element("vnAffinityMonikaVal").unwrap().text, "68");
    }

    #[test]
    fn repeated_identical_update_changes_nothing() {
        let mut doc = Document::with_ids(["vnAffinitySayori", "vnAffinitySayoriVal"]);
        let snapshot = map(&[("sayori", 15.0)]);
        update_affinity_panel(&mut doc, Some(&snapshot));
        doc.take_patches();
        update_affinity_panel(&mut doc, Some(&snapshot));
        assert!(doc.patches().is_empty());
        assert_eq!(doc.element("vnAffinitySayori").unwrap().style["width"], "15%");
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let mut doc = Document::with_ids([
            "vnAffinityNatsuki",
            "vnAffinityNatsukiVal",
            "vnAffinityYuri",
            "vnAffinityYuriVal",
        ]);
        update_affinity_panel(&mut doc, Some(&map(&[("natsuki", 120.0), ("yuri", -5.0)])));
        assert_eq!(doc.element("vnAffinityNatsuki").unwrap().style["width"], "120%");
        assert_eq!(doc.element("vnAffinityYuri").unwrap().style["width"], "-5%");
        assert_eq!(doc.element("vnAffinityYuriVal").unwrap().text, "-5");
    }

    #[test]
    fn fractional_values_render_literally() {
        let mut doc = Document::with_ids(["vnAffinityYuri", "vnAffinityYuriVal"]);
        update_affinity_panel(&mut doc, Some(&map(&[("yuri", 33.5)])));
        assert_eq!(doc.element("vnAffinityYuri").unwrap().style["width"], "33.5%");
        assert_eq!(doc.element("vnAffinityYuriVal").unwrap().text, "33.5");
    }

    #[test]
    fn hide_removes_visible_marker() {
        let mut doc = Document::new();
        doc.mount([ElementSpec::new("affinityPanel").with_class("visible")]);
        hide_affinity_panel(&mut doc);
        assert!(!doc.element("affinityPanel").unwrap().classes.contains("visible"));
        assert_eq!(doc.take_patches().len(), 1);

        hide_affinity_panel(&mut doc);
        assert!(doc.patches().is_empty());
    }

    #[test]
    fn hide_without_panel_is_a_no_op() {
        let mut doc = Document::with_ids(["vnAffinityAlice"]);
        hide_affinity_panel(&mut doc);
        assert!(doc.patches().is_empty());
    }
}
