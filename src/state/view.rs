use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use thiserror::Error;
use yew::Reducible;

use crate::config::SCROLL_THRESHOLD;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Mission,
    Principles,
    Education,
    Action,
    Contact,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section `{0}`")]
pub struct UnknownSection(pub String);

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Mission,
        Section::Principles,
        Section::Education,
        Section::Action,
        Section::Contact,
    ];

    /// Anchor id of the section's element on the page.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Mission => "mission",
            Section::Principles => "principles",
            Section::Education => "education",
            Section::Action => "action",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Mission => "Mission",
            Section::Principles => "Principles",
            Section::Education => "Education",
            Section::Action => "Action",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('#');
        Section::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Whether a vertical scroll offset counts as "scrolled" for the nav bar.
pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub active_section: Section,
    pub scrolled: bool,
    pub mobile_menu_open: bool,
}

pub enum ViewAction {
    SetActiveSection(Section),
    SetScrolled(bool),
    SetMobileMenuOpen(bool),
    ToggleMobileMenu,
    /// Nav click: select the section and fold the mobile menu away.
    Navigate(Section),
}

impl ViewState {
    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::SetActiveSection(section) => self.active_section = section,
            ViewAction::SetScrolled(scrolled) => self.scrolled = scrolled,
            ViewAction::SetMobileMenuOpen(open) => self.mobile_menu_open = open,
            ViewAction::ToggleMobileMenu => self.mobile_menu_open = !self.mobile_menu_open,
            ViewAction::Navigate(section) => {
                self.active_section = section;
                self.mobile_menu_open = false;
            }
        }
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        // Scroll events fire constantly; skip the re-render when nothing changes.
        if let ViewAction::SetScrolled(scrolled) = action {
            if self.scrolled == scrolled {
                return self;
            }
        }
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_home_with_flags_off() {
        let state = ViewState::default();
        assert_eq!(state.active_section, Section::Home);
        assert!(!state.scrolled);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn active_section_tracks_last_assignment() {
        let mut state = ViewState::default();
        for section in [Section::Contact, Section::Mission, Section::Education, Section::Mission] {
            state.apply(ViewAction::SetActiveSection(section));
        }
        assert_eq!(state.active_section, Section::Mission);
    }

    #[test]
    fn scroll_threshold_is_strict() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn navigate_closes_mobile_menu() {
        let mut state = ViewState::default();
        state.apply(ViewAction::ToggleMobileMenu);
        assert!(state.mobile_menu_open);

        state.apply(ViewAction::Navigate(Section::Principles));
        assert_eq!(state.active_section, Section::Principles);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn toggle_flips_and_set_overrides() {
        let mut state = ViewState::default();
        state.apply(ViewAction::ToggleMobileMenu);
        state.apply(ViewAction::ToggleMobileMenu);
        assert!(!state.mobile_menu_open);

        state.apply(ViewAction::SetMobileMenuOpen(true));
        state.apply(ViewAction::SetMobileMenuOpen(true));
        assert!(state.mobile_menu_open);
    }

    #[test]
    fn reducer_reuses_state_when_scroll_flag_unchanged() {
        let state = Rc::new(ViewState::default());
        let next = state.clone().reduce(ViewAction::SetScrolled(false));
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.reduce(ViewAction::SetScrolled(true));
        assert!(next.scrolled);
    }

    #[test]
    fn parses_anchor_ids() {
        assert_eq!("mission".parse::<Section>(), Ok(Section::Mission));
        assert_eq!(" #Contact ".parse::<Section>(), Ok(Section::Contact));
        assert_eq!(
            "donate".parse::<Section>(),
            Err(UnknownSection("donate".to_string()))
        );
    }

    #[test]
    fn ids_round_trip_through_display() {
        for section in Section::ALL {
            assert_eq!(section.to_string().parse::<Section>(), Ok(section));
        }
    }
}
