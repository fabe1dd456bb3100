//! Relationship dynamics — short lines describing rivalries, jealousy and how
//! each character currently feels, derived from affinity alone.

use crate::dom::{ElementHandle, ElementRegistry};

use super::affinity::AffinityMap;
use super::cast::{Standing, standings};
use super::snapshot::StorySnapshot;

pub const SECTION_ID: &str = "dynamicsSection";
pub const LIST_ID: &str = "vnDynamicsList";

/// One rendered line in the dynamics list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicsItem {
    pub icon: &'static str,
    pub text: String,
    pub gradient: String,
    pub border: &'static str,
}

impl DynamicsItem {
    fn render(&self) -> String {
        format!(
            r#"<div class="vn-dynamics-item" style="border-left-color:{};background:{};"><span class="vn-dynamics-icon">{}</span> {}</div>"#,
            self.border, self.gradient, self.icon, self.text
        )
    }
}

/// Tier line for a character, or `None` below the first tier.
pub fn tier_description(value: f64) -> Option<&'static str> {
    if value >= 76.0 {
        Some("Deep feelings for MC")
    } else if value >= 51.0 {
        Some("Romantic feelings for MC")
    } else if value >= 31.0 {
        Some("Close friends with MC")
    } else if value >= 16.0 {
        Some("Warming up to MC")
    } else {
        None
    }
}

fn tier_icon(value: f64) -> &'static str {
    if value >= 51.0 {
        "\u{2764}\u{FE0F}" // ❤️
    } else if value >= 31.0 {
        "\u{1F49B}" // 💛
    } else {
        "\u{2728}" // ✨
    }
}

fn rivalry(ranked: &[Standing]) -> Option<DynamicsItem> {
    let (leader, second) = (ranked[0], ranked[1]);
    if leader.value >= 25.0 && second.value >= 25.0 && leader.value - second.value <= 8.0 {
        Some(DynamicsItem {
            icon: "\u{2694}\u{FE0F}",
            text: format!(
                "{} & {} — Competing for MC's attention",
                leader.name(),
                second.name()
            ),
            gradient: format!(
                "linear-gradient(90deg, {}33, {}33)",
                leader.member.color, second.member.color
            ),
            border: leader.member.color,
        })
    } else {
        None
    }
}

/// The leader notices when someone else gained ground since yesterday.
fn jealousy(ranked: &[Standing], yesterday: &AffinityMap) -> Option<DynamicsItem> {
    let leader = ranked[0];
    if leader.value < 40.0 {
        return None;
    }
    let other = ranked.iter().find(|other| {
        let prev = yesterday.get(other.member.key).copied().unwrap_or(0.0);
        other.member != leader.member && other.value - prev >= 5.0 && other.value >= 16.0
    })?;
    Some(DynamicsItem {
        icon: "\u{1F440}",
        text: format!(
            "{} notices MC getting closer to {}",
            leader.name(),
            other.name()
        ),
        gradient: format!(
            "linear-gradient(90deg, {}33, {}22)",
            leader.member.color, other.member.color
        ),
        border: leader.member.color,
    })
}

/// All dynamics lines for a story snapshot, in display order.
pub fn dynamics_items(chat: &StorySnapshot) -> Vec<DynamicsItem> {
    let ranked = standings(&chat.affinity());
    let mut items = Vec::new();

    items.extend(rivalry(&ranked));
    if let Some(yesterday) = chat.yesterday_affinity() {
        items.extend(jealousy(&ranked, yesterday));
    }
    for s in &ranked {
        let Some(desc) = tier_description(s.value) else {
            continue;
        };
        items.push(DynamicsItem {
            icon: tier_icon(s.value),
            text: format!("{} — {}", s.name(), desc),
            gradient: format!("linear-gradient(90deg, {}22, transparent)", s.member.color),
            border: s.member.color,
        });
    }
    items
}

/// Render the dynamics section. Needs both the section and its list; hides
/// the section outside story mode, before day 2, or when there is nothing
/// to say.
pub fn update_dynamics_panel<R: ElementRegistry>(ui: &mut R, snapshot: Option<&StorySnapshot>) {
    if ui.get_element_by_id(SECTION_ID).is_none() || ui.get_element_by_id(LIST_ID).is_none() {
        return;
    }

    let items = match snapshot {
        Some(chat) if chat.is_story() && chat.day() >= 2 => dynamics_items(chat),
        _ => Vec::new(),
    };

    if items.is_empty() {
        if let Some(mut section) = ui.get_element_by_id(SECTION_ID) {
            section.set_style("display", "none");
        }
        return;
    }

    let html: String = items.iter().map(DynamicsItem::render).collect();
    if let Some(mut section) = ui.get_element_by_id(SECTION_ID) {
        section.set_style("display", "");
    }
    if let Some(mut list) = ui.get_element_by_id(LIST_ID) {
        list.set_inner_html(&html);
    }
}
