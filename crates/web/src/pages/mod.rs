// =============================================================================
// Aarohan Web - Page Components
// =============================================================================
// Table of Contents:
// 1. Main Pages
// 2. Legal Pages
// 3. Fallback
// =============================================================================

pub mod about;
pub mod career;
pub mod contact;
pub mod home;
pub mod innovation;
pub mod portfolio;
pub mod services;

pub mod cookies;
pub mod legal;
pub mod privacy;
pub mod terms;

pub mod not_found;

pub use about::AboutPage;
pub use career::CareerPage;
pub use contact::ContactPage;
pub use cookies::CookiesPage;
pub use home::HomePage;
pub use innovation::InnovationPage;
pub use not_found::NotFoundPage;
pub use portfolio::PortfolioPage;
pub use privacy::PrivacyPage;
pub use services::ServicesPage;
pub use terms::TermsPage;
