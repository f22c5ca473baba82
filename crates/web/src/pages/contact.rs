// =============================================================================
// Aarohan Web - Contact Page
// =============================================================================
// Table of Contents:
// 1. Form Signals
// 2. Contact Page
// =============================================================================
//
// Submission is simulated: nothing leaves the browser. After a short delay
// a success toast is shown and every field returns to its default.

use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::{PageShell, Select, SelectOption, SubmitButton, TextArea, TextInput};
use crate::content::{ContactForm, InquiryCategory, INQUIRY_CATEGORIES};
use crate::routes::Page;
use crate::services::ToastService;
use crate::state::use_app_state;

// -----------------------------------------------------------------------------
// 1. Form Signals
// -----------------------------------------------------------------------------

/// One signal per field of a `ContactForm`.
#[derive(Clone, Copy)]
struct FormSignals {
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    company: RwSignal<String>,
    message: RwSignal<String>,
    category: RwSignal<String>,
}

impl FormSignals {
    fn new(initial: ContactForm) -> Self {
        Self {
            name: RwSignal::new(initial.name),
            email: RwSignal::new(initial.email),
            phone: RwSignal::new(initial.phone),
            company: RwSignal::new(initial.company),
            message: RwSignal::new(initial.message),
            category: RwSignal::new(initial.category),
        }
    }

    fn snapshot(&self) -> ContactForm {
        ContactForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            company: self.company.get_untracked(),
            message: self.message.get_untracked(),
            category: self.category.get_untracked(),
        }
    }

    fn reset(&self, to: ContactForm) {
        self.name.try_set(to.name);
        self.email.try_set(to.email);
        self.phone.try_set(to.phone);
        self.company.try_set(to.company);
        self.message.try_set(to.message);
        self.category.try_set(to.category);
    }
}

// -----------------------------------------------------------------------------
// 2. Contact Page
// -----------------------------------------------------------------------------

#[component]
pub fn ContactPage() -> impl IntoView {
    let app_state = use_app_state();
    let toasts = expect_context::<ToastService>();
    let (form_delay, email) = app_state.with_config(|c| (c.form_delay_ms, c.contact_email.clone()));

    // `?service=<id>` or `?topic=<id>` preselects the category
    let query = use_query_map();
    let preselected = query.with_untracked(|q| {
        InquiryCategory::preselect(q.get("service").as_deref(), q.get("topic").as_deref())
    });

    let fields = FormSignals::new(ContactForm::with_category(preselected));
    let submitting = RwSignal::new(false);
    let pending = StoredValue::new_local(None::<Timeout>);

    on_cleanup(move || {
        // Leaving mid-submission cancels it
        pending.try_update_value(|t| t.take());
    });

    // Native validation already blocks blanks; the check here mirrors it
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let form = fields.snapshot();
        let missing = form.missing_required();
        if !missing.is_empty() {
            log::debug!("Contact form blocked, missing {:?}", missing);
            return;
        }

        submitting.set(true);
        log::debug!("Contact form submitted ({})", form.category);

        pending.set_value(Some(Timeout::new(form_delay, move || {
            toasts.success(
                "Message sent",
                "Thanks for reaching out. We'll get back to you shortly.",
            );
            fields.reset(ContactForm::default());
            submitting.try_set(false);
        })));
    };

    let category_options = INQUIRY_CATEGORIES
        .iter()
        .map(|c| SelectOption { value: c.id, label: c.label })
        .collect::<Vec<_>>();
    let mailto = format!("mailto:{}", email);

    view! {
        <PageShell page=Page::Contact>
            <section class="page-hero contact-hero">
                <span class="hero-eyebrow reveal">"Contact"</span>
                <h1 class="reveal" data-reveal-delay="100">"Let's talk"</h1>
                <p class="reveal" data-reveal-delay="200">
                    "Tell us what you are working on and the right team will get back to you."
                </p>
            </section>

            <section class="section contact-layout">
                <form class="contact-form reveal" on:submit=on_submit>
                    <fieldset class="form-fieldset" disabled=move || submitting.get()>
                        <div class="form-row">
                            <TextInput label="Name" name="name" value=fields.name required=true />
                            <TextInput
                                label="Email"
                                name="email"
                                input_type="email"
                                value=fields.email
                                required=true
                            />
                        </div>
                        <div class="form-row">
                            <TextInput label="Phone" name="phone" input_type="tel" value=fields.phone />
                            <TextInput label="Company" name="company" value=fields.company />
                        </div>
                        <Select
                            label="Inquiry type"
                            name="category"
                            value=fields.category
                            options=category_options
                            required=true
                        />
                        <TextArea
                            label="Message"
                            name="message"
                            value=fields.message
                            placeholder="How can we help?"
                            required=true
                        />
                    </fieldset>
                    <SubmitButton label="Send message" busy_label="Sending..." busy=submitting />
                </form>

                <aside class="contact-info reveal" data-reveal-delay="150">
                    <h3>"Reach us directly"</h3>
                    <a href=mailto class="contact-link">{email}</a>
                    <p>"We typically respond within two business days."</p>
                </aside>
            </section>
        </PageShell>
    }
}
