// =============================================================================
// Aarohan Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. Link Builders
// 2. Format Utilities
// =============================================================================

use crate::routes::Page;

// -----------------------------------------------------------------------------
// 1. Link Builders
// -----------------------------------------------------------------------------

/// Contact page link with the inquiry category preselected.
pub fn contact_link(service: &str) -> String {
    format!("{}?service={}", Page::Contact.path(), urlencoding::encode(service))
}

/// Contact page link for a free-form topic (e.g. a job title).
pub fn contact_topic_link(topic: &str) -> String {
    format!("{}?topic={}", Page::Contact.path(), urlencoding::encode(topic))
}

/// Services page link with a vertical's tab open.
pub fn services_link(vertical: &str) -> String {
    format!("{}#{}", Page::Services.path(), vertical)
}

/// Strip the leading `#` from a location hash.
pub fn fragment(hash: &str) -> &str {
    hash.strip_prefix('#').unwrap_or(hash)
}

// -----------------------------------------------------------------------------
// 2. Format Utilities
// -----------------------------------------------------------------------------

/// "1 project" / "3 projects".
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_links_are_encoded() {
        assert_eq!(contact_link("tech"), "/contact?service=tech");
        assert_eq!(
            contact_topic_link("Project Manager, Civil"),
            "/contact?topic=Project%20Manager%2C%20Civil"
        );
    }

    #[test]
    fn services_link_round_trips_through_fragment() {
        let link = services_link("media");
        assert_eq!(Page::from_path(&link), Page::Services);
        assert_eq!(fragment(link.split_once('#').map(|(_, h)| h).unwrap_or_default()), "media");
        assert_eq!(fragment("#ojas"), "ojas");
        assert_eq!(fragment(""), "");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(pluralize(1, "project", "projects"), "1 project");
        assert_eq!(pluralize(0, "project", "projects"), "0 projects");
    }
}
