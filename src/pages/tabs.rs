use chrono::Local;
use log::{debug, warn};
use yew::prelude::*;

use crate::components::{footer::Footer, hero::Hero, nav::Nav, stats::Statistics};
use crate::config::{submission_policy, Layout};
use crate::content::Icon;
use crate::pages::layout::{
    content_section, use_submission_acknowledgment, visible_sections, PAGE_STYLE, TABS_NAV,
};
use crate::state::form::{FormAction, FormField, FormState};
use crate::state::view::{Section, ViewAction, ViewState};

/// Section named by the URL fragment, e.g. `/tabs#education`.
fn section_from_hash() -> Option<Section> {
    let hash = web_sys::window()?.location().hash().ok()?;
    if hash.is_empty() {
        return None;
    }
    match hash.parse() {
        Ok(section) => Some(section),
        Err(e) => {
            warn!("Ignoring fragment: {}", e);
            None
        }
    }
}

#[function_component(TabsPage)]
pub fn tabs_page() -> Html {
    let view = use_reducer(ViewState::default);
    let form = use_reducer(FormState::default);

    use_submission_acknowledgment(&form);

    {
        let view = view.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(section) = section_from_hash() {
                    view.dispatch(ViewAction::SetActiveSection(section));
                }
                || ()
            },
            (),
        );
    }

    let on_select = {
        let view = view.clone();
        Callback::from(move |section: Section| {
            debug!("Selecting tab {}", section);
            view.dispatch(ViewAction::Navigate(section));
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
            form.dispatch(FormAction::Submit {
                policy: submission_policy(Layout::Tabs),
                now: Local::now(),
            })
        })
    };

    html! {
        <div class="peace-website">
            <style>{PAGE_STYLE}</style>
            <Nav
                items={&TABS_NAV[..]}
                active={view.active_section}
                scrolled={view.scrolled}
                menu_open={view.mobile_menu_open}
                on_navigate={on_select.clone()}
                {on_toggle_menu}
                {on_scroll}
            />
            <Hero
                icon={Icon::Heart}
                primary={Section::Mission}
                secondary={Section::Education}
                on_cta={on_select}
            />
            <Statistics />
            {
                for visible_sections(Layout::Tabs, view.active_section)
                    .into_iter()
                    .map(|section| content_section(section, &form, &on_field, &on_submit))
            }
            <Footer icon={Icon::Heart} />
        </div>
    }
}
