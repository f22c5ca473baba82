// =============================================================================
// Aarohan Web - Open Positions
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opening {
    pub title: &'static str,
    pub vertical: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub summary: &'static str,
}

pub const OPENINGS: &[Opening] = &[
    Opening {
        title: "Senior Rust Engineer",
        vertical: "tech",
        location: "Bengaluru / Remote",
        kind: "Full-time",
        summary: "Build the data platform behind our analytics products.",
    },
    Opening {
        title: "Project Manager, Civil",
        vertical: "infra",
        location: "Pune",
        kind: "Full-time",
        summary: "Lead delivery of mid-size commercial builds end to end.",
    },
    Opening {
        title: "Ayurvedic Product Specialist",
        vertical: "ojas",
        location: "Rishikesh",
        kind: "Full-time",
        summary: "Shape formulations and training for the Ojas product line.",
    },
    Opening {
        title: "Post-Production Editor",
        vertical: "media",
        location: "Mumbai",
        kind: "Contract",
        summary: "Edit long-form documentary and branded content.",
    },
    Opening {
        title: "Investment Associate",
        vertical: "ventures",
        location: "Delhi NCR",
        kind: "Full-time",
        summary: "Source and evaluate early-stage opportunities.",
    },
];
