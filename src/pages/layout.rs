use yew::prelude::*;

use crate::components::{
    action::ActionSection,
    cards::{MissionSection, PrinciplesSection},
    contact::ContactSection,
    education::EducationSection,
};
use crate::config::Layout;
use crate::notice;
use crate::state::form::{FormField, FormState};
use crate::state::view::Section;

pub static SCROLL_NAV: [Section; 5] = [
    Section::Home,
    Section::Mission,
    Section::Principles,
    Section::Action,
    Section::Contact,
];

pub static TABS_NAV: [Section; 6] = Section::ALL;

pub const PAGE_STYLE: &str = r#"
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.peace-website {
    min-height: 100vh;
    background: linear-gradient(135deg, #eff6ff, #faf5ff);
    color: #1f2937;
}
html {
    scroll-behavior: smooth;
}
"#;

/// Content blocks to render below the statistics, in page order.
///
/// The scroll layout stacks its four blocks no matter what is active. The tab
/// layout shows only the active block, and nothing at all for `Home`.
pub fn visible_sections(layout: Layout, active: Section) -> Vec<Section> {
    match layout {
        Layout::Scroll => vec![
            Section::Mission,
            Section::Principles,
            Section::Action,
            Section::Contact,
        ],
        Layout::Tabs => match active {
            Section::Home => Vec::new(),
            section => vec![section],
        },
    }
}

pub fn content_section(
    section: Section,
    form: &FormState,
    on_field: &Callback<(FormField, String)>,
    on_submit: &Callback<()>,
) -> Html {
    match section {
        // The hero doubles as the home block and is always rendered.
        Section::Home => html! {},
        Section::Mission => html! { <MissionSection key={section.id()} /> },
        Section::Principles => html! { <PrinciplesSection key={section.id()} /> },
        Section::Education => html! { <EducationSection key={section.id()} /> },
        Section::Action => html! { <ActionSection key={section.id()} /> },
        Section::Contact => html! {
            <ContactSection
                key={section.id()}
                draft={form.draft.clone()}
                messages={form.messages().to_vec()}
                on_field={on_field.clone()}
                on_submit={on_submit.clone()}
            />
        },
    }
}

/// Raises the blocking acknowledgment once per submit attempt.
#[hook]
pub fn use_submission_acknowledgment(form: &UseReducerHandle<FormState>) {
    let outcome = form.last_outcome.clone();
    use_effect_with_deps(
        move |submissions| {
            if *submissions > 0 {
                if let Some(outcome) = outcome {
                    notice::acknowledge(&outcome);
                }
            }
            || ()
        },
        form.submissions,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_layout_ignores_active_section() {
        let expected = [
            Section::Mission,
            Section::Principles,
            Section::Action,
            Section::Contact,
        ];
        for active in Section::ALL {
            assert_eq!(visible_sections(Layout::Scroll, active), expected);
        }
    }

    #[test]
    fn tab_layout_shows_only_active_block() {
        assert!(visible_sections(Layout::Tabs, Section::Home).is_empty());
        for active in &Section::ALL[1..] {
            assert_eq!(visible_sections(Layout::Tabs, *active), [*active]);
        }
    }

    #[test]
    fn tab_nav_offers_every_section() {
        assert_eq!(TABS_NAV.len(), Section::ALL.len());
        assert!(!SCROLL_NAV.contains(&Section::Education));
    }
}
