//! Symptom catalog and the rule-based severity classifier backing the
//! emergency triage screen.
//!
//! The thresholds (severe subset, 3+ symptoms => urgent) are product
//! heuristics carried over as-is; the classifier is a pure, total
//! function over any set of selected ids.

use serde::{Deserialize, Serialize};

/// A selectable symptom in the triage checklist.
#[derive(Debug, Clone, Serialize)]
pub struct Symptom {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const SYMPTOMS: [Symptom; 8] = [
    Symptom { id: "1", name: "High Fever", description: "Temperature above 103°F (39.4°C)" },
    Symptom { id: "2", name: "Difficulty Breathing", description: "Labored or fast breathing" },
    Symptom { id: "3", name: "Severe Rash", description: "Widespread rash that won't fade" },
    Symptom { id: "4", name: "Choking", description: "Unable to breathe or cry" },
    Symptom { id: "5", name: "Unresponsiveness", description: "Baby won't wake up or respond" },
    Symptom { id: "6", name: "Severe Pain", description: "Continuous severe crying" },
    Symptom { id: "7", name: "Dehydration", description: "No wet diapers for 8+ hours" },
    Symptom { id: "8", name: "Seizures", description: "Convulsions or unusual jerking" },
];

/// Symptom ids that trigger the critical tier on their own.
const SEVERE_IDS: [&str; 6] = ["1", "2", "3", "4", "5", "8"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Urgent,
    Monitor,
    Info,
}

/// Triage outcome shown to the parent.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub title: &'static str,
    pub description: &'static str,
    pub action: Option<&'static str>,
}

/// Classify a selection of symptom ids into a severity tier.
///
/// Rule: any severe id => critical; else three or more selected =>
/// urgent; else at least one => monitor; empty selection => info.
pub fn assess(selected: &[String]) -> Recommendation {
    if selected.is_empty() {
        return Recommendation {
            severity: Severity::Info,
            title: "Select Symptoms",
            description: "Please select the symptoms your child is experiencing",
            action: None,
        };
    }

    let has_severe = selected.iter().any(|id| SEVERE_IDS.contains(&id.as_str()));

    if has_severe {
        return Recommendation {
            severity: Severity::Critical,
            title: "Call Emergency Services Immediately",
            description: "Based on the symptoms selected, your child needs immediate emergency medical attention.",
            action: Some("Call 911 or your local emergency number"),
        };
    }

    if selected.len() >= 3 {
        return Recommendation {
            severity: Severity::Urgent,
            title: "Seek Urgent Care",
            description: "Your child should be evaluated by a healthcare professional as soon as possible.",
            action: Some("Contact your pediatrician or visit an urgent care clinic"),
        };
    }

    Recommendation {
        severity: Severity::Monitor,
        title: "Monitor Your Child",
        description: "Keep a close watch on your child's symptoms and contact your pediatrician if they worsen.",
        action: Some("Schedule a doctor's appointment if symptoms persist"),
    }
}
