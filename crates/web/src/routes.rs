// =============================================================================
// Aarohan Web - View Registry
// =============================================================================
// Every routable page, its path and its title. The route table in `app.rs`
// renders each page through this list and resolves anything it does not
// match with `Page::from_path`. Nav and footer links come from it as well.
// =============================================================================

/// A page the site can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Services,
    Portfolio,
    Innovation,
    Contact,
    Career,
    Privacy,
    Terms,
    Cookies,
    NotFound,
}

impl Page {
    /// Routable pages, in navigation order.
    pub const ALL: [Page; 10] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Portfolio,
        Page::Innovation,
        Page::Contact,
        Page::Career,
        Page::Privacy,
        Page::Terms,
        Page::Cookies,
    ];

    /// Exact path for this page. `NotFound` has no path of its own.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Services => "/services",
            Page::Portfolio => "/portfolio",
            Page::Innovation => "/innovation",
            Page::Contact => "/contact",
            Page::Career => "/career",
            Page::Privacy => "/privacy",
            Page::Terms => "/terms",
            Page::Cookies => "/cookies",
            Page::NotFound => "/404",
        }
    }

    /// Resolve a location to a page.
    ///
    /// Matching is exact; query and fragment are ignored and one trailing
    /// slash is tolerated.
    pub fn from_path(path: &str) -> Page {
        let path = path
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let path = match path {
            "" => "/",
            "/" => "/",
            p => p.strip_suffix('/').unwrap_or(p),
        };

        Page::ALL
            .into_iter()
            .find(|page| page.path() == path)
            .unwrap_or(Page::NotFound)
    }

    /// Document title segment.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About Us",
            Page::Services => "Services",
            Page::Portfolio => "Portfolio",
            Page::Innovation => "Innovation",
            Page::Contact => "Contact",
            Page::Career => "Careers",
            Page::Privacy => "Privacy Policy",
            Page::Terms => "Terms of Service",
            Page::Cookies => "Cookie Policy",
            Page::NotFound => "Page Not Found",
        }
    }

    /// Short label used in navigation links.
    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Career => "Career",
            Page::About => "About",
            Page::Privacy => "Privacy",
            Page::Terms => "Terms",
            Page::Cookies => "Cookies",
            other => other.title(),
        }
    }

    /// Pages listed in the top navigation. Legal pages live in the footer.
    pub fn in_primary_nav(self) -> bool {
        !matches!(
            self,
            Page::Privacy | Page::Terms | Page::Cookies | Page::NotFound
        )
    }

    pub fn is_legal(self) -> bool {
        matches!(self, Page::Privacy | Page::Terms | Page::Cookies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_round_trips_through_its_path() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), page);
        }
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Page::from_path("/does-not-exist"), Page::NotFound);
        assert_eq!(Page::from_path("/about/team"), Page::NotFound);
        assert_eq!(Page::from_path("/404"), Page::NotFound);
        assert_eq!(Page::from_path("/ABOUT"), Page::NotFound);
    }

    #[test]
    fn query_fragment_and_trailing_slash_are_ignored() {
        assert_eq!(Page::from_path("/services#ojas"), Page::Services);
        assert_eq!(Page::from_path("/contact?service=tech"), Page::Contact);
        assert_eq!(Page::from_path("/about/"), Page::About);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/?ref=nav"), Page::Home);
    }

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<_> = Page::ALL.iter().map(|p| p.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Page::ALL.len());
    }

    #[test]
    fn legal_pages_stay_out_of_primary_nav() {
        let nav: Vec<_> = Page::ALL.into_iter().filter(|p| p.in_primary_nav()).collect();
        assert_eq!(nav.len(), 7);
        assert!(nav.iter().all(|p| !p.is_legal()));
    }
}
