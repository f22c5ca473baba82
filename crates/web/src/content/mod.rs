// =============================================================================
// Aarohan Web - Static Content
// =============================================================================
// Table of Contents:
// 1. Verticals (services tabs, contact categories)
// 2. Portfolio
// 3. Careers
// 4. Contact Form Model
// =============================================================================
//
// Content records are compiled into the bundle and never mutated.

pub mod careers;
pub mod contact;
pub mod portfolio;
pub mod verticals;

pub use careers::{Opening, OPENINGS};
pub use contact::{ContactForm, InquiryCategory, RequiredField, INQUIRY_CATEGORIES};
pub use portfolio::{filter_projects, Project, PROJECTS};
pub use verticals::{Vertical, VERTICALS};
