//! Read-only view of the story chat that the page passes in.
//!
//! Field names match the chat objects the front end already stores
//! (`storyDay`, `storyAffinity`, ...). Unknown fields are ignored.

use serde::Deserialize;

use super::affinity::AffinityMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorySnapshot {
    /// `"story"` for visual-novel chats; anything else hides story widgets.
    pub mode: String,
    pub story_day: Option<u32>,
    pub story_affinity: Option<AffinityMap>,
    pub story_yesterday: Option<Yesterday>,
}

/// Summary of the previous day, as recorded when the journal closed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Yesterday {
    pub affinity_snapshot: Option<AffinityMap>,
}

impl StorySnapshot {
    pub fn is_story(&self) -> bool {
        self.mode == "story"
    }

    /// Current day; missing or zero reads as day 1.
    pub fn day(&self) -> u32 {
        match self.story_day {
            Some(d) if d > 0 => d,
            _ => 1,
        }
    }

    pub fn affinity(&self) -> AffinityMap {
        self.story_affinity.clone().unwrap_or_default()
    }

    pub fn yesterday_affinity(&self) -> Option<&AffinityMap> {
        self.story_yesterday
            .as_ref()
            .and_then(|y| y.affinity_snapshot.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chat_object_fields() {
        let snap: StorySnapshot = serde_json::from_str(
            r#"{"mode":"story","storyDay":3,"storyAffinity":{"yuri":35},
                "storyYesterday":{"day":2,"affinitySnapshot":{"yuri":20}},
                "messages":[]}"#,
        )
        .unwrap();
        assert!(snap.is_story());
        assert_eq!(snap.day(), 3);
        assert_eq!(snap.affinity()["yuri"], 35.0);
        assert_eq!(snap.yesterday_affinity().unwrap()["yuri"], 20.0);
    }

    #[test]
    fn missing_day_defaults_to_one() {
        let snap: StorySnapshot = serde_json::from_str(r#"{"mode":"chat"}"#).unwrap();
        assert!(!snap.is_story());
        assert_eq!(snap.day(), 1);
        assert!(snap.affinity().is_empty());

        let zero: StorySnapshot = serde_json::from_str(r#"{"storyDay":0}"#).unwrap();
        assert_eq!(zero.day(), 1);
    }
}
