//! Route indicator — names the character whose route the player is on once
//! one of them pulls clearly ahead.

use crate::dom::{ElementHandle, ElementRegistry};

use super::cast::standings;
use super::snapshot::StorySnapshot;

pub const ROUTE_ID: &str = "routeIndicator";

/// Points the leader must be ahead of the runner-up.
pub const ROUTE_LEAD: f64 = 5.0;

/// Show or hide the route indicator for `snapshot`.
pub fn update_route_indicator<R: ElementRegistry>(ui: &mut R, snapshot: Option<&StorySnapshot>) {
    let Some(mut el) = ui.get_element_by_id(ROUTE_ID) else {
        return;
    };

    let chat = match snapshot {
        Some(chat) if chat.is_story() && chat.day() >= 2 => chat,
        _ => {
            el.set_style("display", "none");
            return;
        }
    };

    let ranked = standings(&chat.affinity());
    let (leader, second) = (ranked[0], ranked[1]);
    if leader.value - second.value < ROUTE_LEAD {
        el.set_style("display", "none");
        return;
    }

    let color = leader.member.color;
    el.set_style("display", "");
    el.set_inner_html(&format!(
        r#"<span class="route-dot" style="background:{color};box-shadow:0 0 8px {color}"></span>{}'s Route"#,
        leader.name()
    ));
    el.set_style("border-color", &format!("{color}66"));
}
