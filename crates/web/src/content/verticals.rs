// =============================================================================
// Aarohan Web - Business Verticals
// =============================================================================

/// One line of business within the group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vertical {
    /// Stable id used in URL fragments (`/services#ojas`) and categories.
    pub id: &'static str,
    pub name: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub offerings: &'static [&'static str],
    pub image: &'static str,
}

pub const VERTICALS: &[Vertical] = &[
    Vertical {
        id: "ojas",
        name: "Ojas Wellness",
        headline: "Vitality, rooted in tradition",
        summary: "Ayurvedic nutrition, wellness retreats and a growing line of clean-label \
                  consumer products built on time-tested formulations.",
        offerings: &[
            "Ayurvedic nutrition products",
            "Wellness retreats",
            "Corporate wellness programs",
            "Practitioner training",
        ],
        image: "/assets/verticals/ojas.jpg",
    },
    Vertical {
        id: "tech",
        name: "Aarohan Digital",
        headline: "Software that runs the business",
        summary: "Product engineering, cloud platforms and data services for enterprises \
                  modernising their core systems.",
        offerings: &[
            "Product engineering",
            "Cloud migration",
            "Data platforms and analytics",
            "Managed services",
        ],
        image: "/assets/verticals/tech.jpg",
    },
    Vertical {
        id: "infra",
        name: "Aarohan Infra",
        headline: "Foundations for the next century",
        summary: "Design-build delivery of commercial, residential and public infrastructure \
                  with a focus on durable, low-carbon materials.",
        offerings: &[
            "Commercial construction",
            "Urban infrastructure",
            "Project management",
            "Green retrofits",
        ],
        image: "/assets/verticals/infra.jpg",
    },
    Vertical {
        id: "media",
        name: "Aarohan Media",
        headline: "Stories that travel",
        summary: "Film, digital content and brand studios producing work for audiences \
                  across languages and screens.",
        offerings: &[
            "Film and series production",
            "Brand content studio",
            "Digital publishing",
            "Event production",
        ],
        image: "/assets/verticals/media.jpg",
    },
    Vertical {
        id: "ventures",
        name: "Aarohan Ventures",
        headline: "Patient capital for founders",
        summary: "Early-stage investment and operating support for companies building in \
                  health, climate and the digital economy.",
        offerings: &[
            "Seed and Series A investment",
            "Founder operating support",
            "Incubation programs",
            "Strategic partnerships",
        ],
        image: "/assets/verticals/ventures.jpg",
    },
];

impl Vertical {
    /// Look up a vertical by its id.
    pub fn find(id: &str) -> Option<&'static Vertical> {
        VERTICALS.iter().find(|v| v.id == id)
    }

    /// Vertical selected by a `#<id>` fragment, or the first one.
    pub fn from_fragment(fragment: &str) -> &'static Vertical {
        Self::find(fragment.trim_start_matches('#')).unwrap_or(&VERTICALS[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_selects_vertical() {
        assert_eq!(Vertical::from_fragment("#media").id, "media");
        assert_eq!(Vertical::from_fragment("infra").id, "infra");
    }

    #[test]
    fn unknown_or_empty_fragment_falls_back_to_first() {
        assert_eq!(Vertical::from_fragment("").id, "ojas");
        assert_eq!(Vertical::from_fragment("#nope").id, "ojas");
    }

    #[test]
    fn ids_are_unique() {
        for (i, a) in VERTICALS.iter().enumerate() {
            assert!(VERTICALS[i + 1..].iter().all(|b| b.id != a.id));
        }
    }
}
