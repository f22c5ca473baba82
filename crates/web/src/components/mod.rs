// =============================================================================
// Aarohan Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Page Chrome
// 2. Common Components
// 3. Form Components
// =============================================================================

pub mod common;
pub mod footer;
pub mod forms;
pub mod layout;
pub mod nav;

pub use common::{
    typewriter_prefix, ButtonVariant, LinkButton, LoadingScreen, SectionHeader, SubmitButton,
    Typewriter,
};
pub use footer::Footer;
pub use forms::{Select, SelectOption, TextArea, TextInput};
pub use layout::PageShell;
pub use nav::SiteNav;
