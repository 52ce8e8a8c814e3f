use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl SectionId {
    /// Anchor id of the section element on the page.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no such section: {0}")]
pub struct ParseSectionError(pub String);

impl FromStr for SectionId {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);
        SECTIONS
            .iter()
            .find(|section| section.id.anchor() == s)
            .map(|section| section.id)
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub label: &'static str,
}

/// Navigation order, top to bottom.
pub static SECTIONS: [Section; 4] = [
    Section {
        id: SectionId::Home,
        label: "Home",
    },
    Section {
        id: SectionId::About,
        label: "About",
    },
    Section {
        id: SectionId::Projects,
        label: "Projects",
    },
    Section {
        id: SectionId::Contact,
        label: "Contact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMsg {
    Select(SectionId),
    ToggleMenu,
}

/// Side effects the navbar has to perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    ScrollTo(SectionId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    active: SectionId,
    menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: SECTIONS[0].id,
            menu_open: false,
        }
    }
}

impl NavState {
    pub fn is_active(&self, id: SectionId) -> bool {
        self.active == id
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn apply(&mut self, msg: NavMsg) -> Option<NavEffect> {
        match msg {
            NavMsg::Select(id) => {
                self.active = id;
                self.menu_open = false;
                Some(NavEffect::ScrollTo(id))
            }
            NavMsg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_section() {
        let nav = NavState::default();
        assert!(nav.is_active(SectionId::Home));
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_select_every_section() {
        for section in SECTIONS.iter() {
            let mut nav = NavState::default();
            let effect = nav.apply(NavMsg::Select(section.id));
            assert!(nav.is_active(section.id));
            assert_eq!(effect, Some(NavEffect::ScrollTo(section.id)));
        }
    }

    #[test]
    fn test_select_closes_menu() {
        let mut nav = NavState::default();
        assert_eq!(nav.apply(NavMsg::ToggleMenu), None);
        assert!(nav.menu_open());

        nav.apply(NavMsg::Select(SectionId::Projects));
        assert!(nav.is_active(SectionId::Projects));
        assert!(!nav.menu_open());
        assert!(!nav.is_active(SectionId::Home));
    }

    #[test]
    fn test_toggle_menu_flips() {
        let mut nav = NavState::default();
        nav.apply(NavMsg::ToggleMenu);
        nav.apply(NavMsg::ToggleMenu);
        assert!(!nav.menu_open());
        assert!(nav.is_active(SectionId::Home));
    }

    #[test]
    fn test_section_ids_unique_and_parse() {
        for (i, a) in SECTIONS.iter().enumerate() {
            for b in SECTIONS.iter().skip(i + 1) {
                assert_ne!(a.id.anchor(), b.id.anchor());
            }
            assert_eq!(a.id.anchor().parse::<SectionId>(), Ok(a.id));
        }
        assert_eq!("#contact".parse::<SectionId>(), Ok(SectionId::Contact));
        assert_eq!(
            "blog".parse::<SectionId>(),
            Err(ParseSectionError("blog".to_string()))
        );
    }
}
