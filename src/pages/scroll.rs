use chrono::Local;
use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::{footer::Footer, hero::Hero, nav::Nav, stats::Statistics};
use crate::config::{submission_policy, Layout};
use crate::content::Icon;
use crate::pages::layout::{
    content_section, use_submission_acknowledgment, visible_sections, PAGE_STYLE, SCROLL_NAV,
};
use crate::state::form::{FormAction, FormField, FormState};
use crate::state::view::{Section, ViewAction, ViewState};

/// Smooth-scrolls the section's anchor into view. Returns false when the
/// anchor is not on the page.
fn scroll_to_section(section: Section) -> bool {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section.id()));

    match element {
        Some(element) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            warn!("No element with id `{}` to scroll to", section.id());
            false
        }
    }
}

#[function_component(ScrollPage)]
pub fn scroll_page() -> Html {
    let view = use_reducer(ViewState::default);
    let form = use_reducer(FormState::default);

    use_submission_acknowledgment(&form);

    let on_navigate = {
        let view = view.clone();
        Callback::from(move |section: Section| {
            if scroll_to_section(section) {
                view.dispatch(ViewAction::SetActiveSection(section));
                view.dispatch(ViewAction::SetMobileMenuOpen(false));
            }
        })
    };

    let on_toggle_menu = {
        let view = view.clone();
        Callback::from(move |_: ()| view.dispatch(ViewAction::ToggleMobileMenu))
    };

    let on_scroll = {
        let view = view.clone();
        Callback::from(move |scrolled: bool| view.dispatch(ViewAction::SetScrolled(scrolled)))
    };

    let on_field = {
        let form = form.clone();
        Callback::from(move |(field, value): (FormField, String)| {
            form.dispatch(FormAction::UpdateField(field, value))
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |_: ()| {
            debug!("Submitting peace message");
            form.dispatch(FormAction::Submit {
                policy: submission_policy(Layout::Scroll),
                now: Local::now(),
            })
        })
    };

    html! {
        <div class="peace-website">
            <style>{PAGE_STYLE}</style>
            <Nav
                items={&SCROLL_NAV[..]}
                active={view.active_section}
                scrolled={view.scrolled}
                menu_open={view.mobile_menu_open}
                on_navigate={on_navigate.clone()}
                {on_toggle_menu}
                {on_scroll}
            />
            <Hero
                icon={Icon::Dove}
                primary={Section::Mission}
                secondary={Section::Principles}
                on_cta={on_navigate}
            />
            <Statistics />
            {
                for visible_sections(Layout::Scroll, view.active_section)
                    .into_iter()
                    .map(|section| content_section(section, &form, &on_field, &on_submit))
            }
            <Footer icon={Icon::PeaceSign} anchors={true} />
        </div>
    }
}
