// =============================================================================
// Aarohan Web - Contact Form Model
// =============================================================================
// Table of Contents:
// 1. Inquiry Categories
// 2. Form Field Set
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Inquiry Categories
// -----------------------------------------------------------------------------

/// Option in the inquiry category select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InquiryCategory {
    pub id: &'static str,
    pub label: &'static str,
}

pub const DEFAULT_CATEGORY: &str = "general";

pub const INQUIRY_CATEGORIES: &[InquiryCategory] = &[
    InquiryCategory { id: "general", label: "General Inquiry" },
    InquiryCategory { id: "ojas", label: "Ojas Wellness" },
    InquiryCategory { id: "tech", label: "Aarohan Digital" },
    InquiryCategory { id: "infra", label: "Aarohan Infra" },
    InquiryCategory { id: "media", label: "Aarohan Media" },
    InquiryCategory { id: "ventures", label: "Aarohan Ventures" },
    InquiryCategory { id: "careers", label: "Careers" },
    InquiryCategory { id: "partnership", label: "Partnerships" },
];

impl InquiryCategory {
    pub fn find(id: &str) -> Option<&'static InquiryCategory> {
        INQUIRY_CATEGORIES.iter().find(|c| c.id == id)
    }

    /// Category preselected by `?service=<id>` or `?topic=<id>`.
    ///
    /// `service` wins when both name a known category. Unknown ids are
    /// ignored rather than rejected.
    pub fn preselect(service: Option<&str>, topic: Option<&str>) -> &'static str {
        [service, topic]
            .into_iter()
            .flatten()
            .find_map(|id| Self::find(id.trim()))
            .map(|c| c.id)
            .unwrap_or(DEFAULT_CATEGORY)
    }
}

// -----------------------------------------------------------------------------
// 2. Form Field Set
// -----------------------------------------------------------------------------

/// A required field left empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
    Category,
    Message,
}

/// Current values of the contact form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
    pub category: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            message: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl ContactForm {
    /// Empty form with `category` preselected.
    pub fn with_category(category: &str) -> Self {
        Self {
            category: category.to_string(),
            ..Self::default()
        }
    }

    /// Required fields that are blank, in form order.
    pub fn missing_required(&self) -> Vec<RequiredField> {
        [
            (RequiredField::Name, &self.name),
            (RequiredField::Email, &self.email),
            (RequiredField::Category, &self.category),
            (RequiredField::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn is_submittable(&self) -> bool {
        self.missing_required().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: String::new(),
            company: String::new(),
            message: "Tell me about Ojas.".into(),
            category: "ojas".into(),
        }
    }

    #[test]
    fn default_category_is_general() {
        assert_eq!(ContactForm::default().category, "general");
    }

    #[test]
    fn optional_fields_are_not_required() {
        assert!(filled().is_submittable());
    }

    #[test]
    fn blank_required_fields_are_reported() {
        let mut form = filled();
        form.name = "   ".into();
        form.message.clear();
        assert_eq!(
            form.missing_required(),
            vec![RequiredField::Name, RequiredField::Message]
        );
        assert!(!form.is_submittable());
    }

    #[test]
    fn query_preselects_known_category() {
        assert_eq!(InquiryCategory::preselect(Some("tech"), None), "tech");
        assert_eq!(InquiryCategory::preselect(None, Some("careers")), "careers");
        assert_eq!(InquiryCategory::preselect(Some("bogus"), Some("media")), "media");
    }

    #[test]
    fn unknown_query_falls_back_to_general() {
        assert_eq!(InquiryCategory::preselect(Some("bogus"), None), "general");
        assert_eq!(InquiryCategory::preselect(None, None), "general");
    }

    #[test]
    fn preselected_form_is_otherwise_empty() {
        let form = ContactForm::with_category("infra");
        assert_eq!(form.category, "infra");
        assert!(form.name.is_empty() && form.message.is_empty());
        assert_ne!(form, filled());
    }
}
