//! Milestone tick marks under each affinity bar.

use crate::dom::{ElementHandle, ElementRegistry};

use super::cast::{CAST, capitalize};

/// Affinity values that get a tick and label on every bar.
pub const MILESTONES: [u32; 3] = [25, 50, 75];

pub fn ticks_id(key: &str) -> String {
    format!("vnTicks{}", capitalize(key))
}

/// Markup for one bar's ticks and labels.
pub fn render_ticks() -> String {
    let mut html = String::with_capacity(256);
    for m in MILESTONES {
        html.push_str(&format!(
            r#"<div class="vn-affinity-tick" style="left:{m}%"></div><div class="vn-affinity-milestone" style="left:{m}%">{m}</div>"#
        ));
    }
    html
}

/// Fill every `vnTicks<Name>` container the page has. Re-running replaces
/// the content rather than stacking a second set of ticks.
pub fn init_vn_ticks<R: ElementRegistry>(ui: &mut R) {
    let html = render_ticks();
    for member in CAST {
        if let Some(mut container) = ui.get_element_by_id(&ticks_id(member.key)) {
            container.set_inner_html(&html);
        }
    }
}
