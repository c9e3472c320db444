//! Static developmental-milestone catalog browsed by parents and
//! referenced by per-child achievement records.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct MilestoneEntry {
    pub id: &'static str,
    pub title: &'static str,
    /// Typical age range, e.g. "2-3 months".
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MilestoneCategory {
    pub name: &'static str,
    pub milestones: &'static [MilestoneEntry],
}

pub const MILESTONE_CATEGORIES: [MilestoneCategory; 4] = [
    MilestoneCategory {
        name: "Physical",
        milestones: &[
            MilestoneEntry { id: "1", title: "Holds head up", description: "2-3 months" },
            MilestoneEntry { id: "2", title: "Rolls over", description: "4-6 months" },
            MilestoneEntry { id: "3", title: "Sits without support", description: "6 months" },
            MilestoneEntry { id: "4", title: "Crawls", description: "8-10 months" },
            MilestoneEntry { id: "5", title: "Walks", description: "12-15 months" },
        ],
    },
    MilestoneCategory {
        name: "Cognitive",
        milestones: &[
            MilestoneEntry { id: "6", title: "Recognizes faces", description: "2-3 months" },
            MilestoneEntry { id: "7", title: "Responds to their name", description: "6-9 months" },
            MilestoneEntry { id: "8", title: "Understands object permanence", description: "8-12 months" },
            MilestoneEntry { id: "9", title: "Points at objects", description: "12-15 months" },
        ],
    },
    MilestoneCategory {
        name: "Social",
        milestones: &[
            MilestoneEntry { id: "10", title: "Social smile", description: "2-3 months" },
            MilestoneEntry { id: "11", title: "Laughs out loud", description: "3-4 months" },
            MilestoneEntry { id: "12", title: "Shows affection", description: "6-12 months" },
            MilestoneEntry { id: "13", title: "Waves goodbye", description: "12-15 months" },
        ],
    },
    MilestoneCategory {
        name: "Language",
        milestones: &[
            MilestoneEntry { id: "14", title: "Coos and babbles", description: "2-4 months" },
            MilestoneEntry { id: "15", title: "Says \"mama\" and \"dada\"", description: "6-12 months" },
            MilestoneEntry { id: "16", title: "First words", description: "12-18 months" },
            MilestoneEntry { id: "17", title: "Two-word phrases", description: "18-24 months" },
        ],
    },
];

/// Look up a catalog entry by id.
pub fn find_entry(id: &str) -> Option<&'static MilestoneEntry> {
    MILESTONE_CATEGORIES
        .iter()
        .flat_map(|c| c.milestones.iter())
        .find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_spans_seventeen_milestones() {
        let total: usize = MILESTONE_CATEGORIES.iter().map(|c| c.milestones.len()).sum();
        assert_eq!(total, 17);
    }

    #[test]
    fn test_entry_ids_are_unique() {
        let mut ids: Vec<&str> = MILESTONE_CATEGORIES
            .iter()
            .flat_map(|c| c.milestones.iter().map(|m| m.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 17);
    }

    #[test]
    fn test_find_entry() {
        assert_eq!(find_entry("5").unwrap().title, "Walks");
        assert!(find_entry("99").is_none());
    }
}
