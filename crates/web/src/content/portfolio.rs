// =============================================================================
// Aarohan Web - Portfolio Projects
// =============================================================================

/// Category value that disables filtering.
pub const ALL_CATEGORIES: &str = "all";

/// A showcased project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    /// Vertical id this project belongs to.
    pub category: &'static str,
    pub year: u16,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Ojas Daily Essentials",
        description: "A clean-label nutrition range now stocked in over 2,000 stores.",
        image: "/assets/portfolio/ojas-essentials.jpg",
        category: "ojas",
        year: 2024,
    },
    Project {
        title: "Riverside Business Park",
        description: "A 40-acre campus delivered with net-zero operational energy.",
        image: "/assets/portfolio/riverside.jpg",
        category: "infra",
        year: 2023,
    },
    Project {
        title: "Ledgerline Banking Core",
        description: "Core banking modernisation for a regional cooperative bank.",
        image: "/assets/portfolio/ledgerline.jpg",
        category: "tech",
        year: 2024,
    },
    Project {
        title: "Ojas Himalayan Retreat",
        description: "A 60-room wellness retreat focused on restorative programs.",
        image: "/assets/portfolio/ojas-retreat.jpg",
        category: "ojas",
        year: 2022,
    },
    Project {
        title: "Voices of the Delta",
        description: "A six-part documentary series on river communities.",
        image: "/assets/portfolio/delta.jpg",
        category: "media",
        year: 2023,
    },
    Project {
        title: "Metro Line 4 Stations",
        description: "Design-build delivery of eight elevated metro stations.",
        image: "/assets/portfolio/metro.jpg",
        category: "infra",
        year: 2025,
    },
    Project {
        title: "FieldSense Analytics",
        description: "Crop-yield forecasting platform serving 30,000 farmers.",
        image: "/assets/portfolio/fieldsense.jpg",
        category: "tech",
        year: 2025,
    },
];

/// Projects in `category`, in original order. `"all"` returns everything.
pub fn filter_projects<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| category == ALL_CATEGORIES || project.category == category)
        .collect()
}

/// Filter buttons shown above the grid: `"all"` first, then each vertical.
pub fn filter_categories() -> impl Iterator<Item = (&'static str, &'static str)> {
    std::iter::once((ALL_CATEGORIES, "All"))
        .chain(super::VERTICALS.iter().map(|v| (v.id, v.name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ojas_yields_only_ojas_projects() {
        let filtered = filter_projects(PROJECTS, "ojas");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| p.category == "ojas"));
    }

    #[test]
    fn all_yields_full_list_in_order() {
        let filtered = filter_projects(PROJECTS, "all");
        let titles: Vec<_> = filtered.iter().map(|p| p.title).collect();
        let expected: Vec<_> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn category_without_projects_is_empty() {
        assert!(filter_projects(PROJECTS, "ventures").is_empty());
        assert!(filter_projects(PROJECTS, "").is_empty());
    }

    #[test]
    fn filter_preserves_relative_order() {
        let filtered = filter_projects(PROJECTS, "infra");
        assert_eq!(filtered[0].title, "Riverside Business Park");
        assert_eq!(filtered[1].title, "Metro Line 4 Stations");
    }

    #[test]
    fn filter_categories_start_with_all() {
        let cats: Vec<_> = filter_categories().collect();
        assert_eq!(cats[0], ("all", "All"));
        assert_eq!(cats.len(), super::super::VERTICALS.len() + 1);
    }
}
