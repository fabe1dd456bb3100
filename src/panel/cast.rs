//! The club members shown in the side panel, and the naming rule that ties a
//! character key to its element ids.

use std::cmp::Ordering;

use super::affinity::AffinityMap;

/// A character the side panel has fixed markup for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastMember {
    /// Lowercase key as used in affinity maps.
    pub key: &'static str,
    /// Accent color for dots, borders and gradients.
    pub color: &'static str,
}

/// Panel order. Ties in affinity keep this order.
pub const CAST: [CastMember; 4] = [
    CastMember {
        key: "sayori",
        color: "#FF91A4",
    },
    CastMember {
        key: "natsuki",
        color: "#FF69B4",
    },
    CastMember {
        key: "yuri",
        color: "#9370DB",
    },
    CastMember {
        key: "monika",
        color: "#3CB371",
    },
];

/// Uppercase the first character (ASCII only) and keep the rest unchanged.
///
/// `"alice"` → `"Alice"`, `"dr_who"` → `"Dr_who"`, `""` → `""`.
pub fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(key.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// A cast member paired with their current affinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Standing {
    pub member: CastMember,
    pub value: f64,
}

impl Standing {
    pub fn name(&self) -> String {
        capitalize(self.member.key)
    }
}

/// Cast ordered by affinity, highest first. Missing entries count as 0.
pub fn standings(affinity: &AffinityMap) -> Vec<Standing> {
    let mut out: Vec<Standing> = CAST
        .iter()
        .map(|&member| Standing {
            member,
            value: affinity.get(member.key).copied().unwrap_or(0.0),
        })
        .collect();
    // stable: equal values keep panel order
    out.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_ascii_letter() {
        assert_eq!(capitalize("sayori"), "Sayori");
        assert_eq!(capitalize("mONIKA"), "MONIKA");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn capitalize_leaves_non_ascii_alone() {
        assert_eq!(capitalize("émile"), "émile");
        assert_eq!(capitalize("1st"), "1st");
    }

    #[test]
    fn standings_sort_desc_and_keep_ties_in_cast_order() {
        let aff = AffinityMap::from([
            ("yuri".to_string(), 30.0),
            ("natsuki".to_string(), 10.0),
            ("sayori".to_string(), 10.0),
        ]);
        let keys: Vec<_> = standings(&aff).iter().map(|s| s.member.key).collect();
        assert_eq!(keys, ["yuri", "sayori", "natsuki", "monika"]);
    }
}
