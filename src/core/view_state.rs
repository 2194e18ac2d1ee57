//! Per-section UI state.
//!
//! Each page section owns one of these and feeds it events from its own
//! handlers. `apply` reports whether anything changed so a view can skip
//! notifying its children.

use crate::catalog::{SkillItem, Section};
use crate::filter::{filter_by_category, Category, CategorySet};

/// Page offset past which the navigation bar switches to its compact style.
pub const NAV_SCROLL_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillsEvent {
    /// Ignored unless the category belongs to the panel's set.
    Select(Category),
    HoverEnter(String),
    HoverLeave,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillsPanel {
    categories: CategorySet,
    active: Category,
    hovered: Option<String>,
}

impl SkillsPanel {
    pub fn new(items: &[SkillItem]) -> Self {
        Self {
            categories: CategorySet::derive(items),
            active: Category::All,
            hovered: None,
        }
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn active(&self) -> &Category {
        &self.active
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn apply(&mut self, event: SkillsEvent) -> bool {
        match event {
            SkillsEvent::Select(category) => {
                if category == self.active || !self.categories.contains(&category) {
                    return false;
                }
                self.active = category;
                // The hovered card may not survive the new filter.
                self.hovered = None;
                true
            }
            SkillsEvent::HoverEnter(name) => {
                if self.hovered.as_deref() == Some(name.as_str()) {
                    return false;
                }
                self.hovered = Some(name);
                true
            }
            SkillsEvent::HoverLeave => self.hovered.take().is_some(),
        }
    }

    pub fn visible<'a>(&self, items: &'a [SkillItem]) -> Vec<&'a SkillItem> {
        filter_by_category(items, &self.active)
    }

    pub fn is_active(&self, category: &Category) -> bool {
        &self.active == category
    }

    pub fn is_hovered(&self, name: &str) -> bool {
        self.hovered.as_deref() == Some(name)
    }

    /// Width of the level bar: the full level while hovered, collapsed
    /// otherwise.
    pub fn level_width(&self, item: &SkillItem) -> String {
        if self.is_hovered(item.name) {
            format!("{}%", item.level.min(100))
        } else {
            "0%".to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
    Activate(Section),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
    threshold: f64,
}

impl Default for NavState {
    fn default() -> Self {
        Self::with_threshold(NAV_SCROLL_THRESHOLD)
    }
}

impl NavState {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            scrolled: false,
            menu_open: false,
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn apply(&mut self, event: NavEvent) -> bool {
        let before = *self;
        match event {
            NavEvent::Scrolled(y) => self.scrolled = y > self.threshold,
            NavEvent::ToggleMenu => self.menu_open = !self.menu_open,
            NavEvent::CloseMenu | NavEvent::Activate(_) => self.menu_open = false,
        }
        *self != before
    }
}

/// Which project card the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectHover {
    hovered: Option<u32>,
}

impl ProjectHover {
    pub fn enter(&mut self, id: u32) -> bool {
        let changed = self.hovered != Some(id);
        self.hovered = Some(id);
        changed
    }

    pub fn leave(&mut self, id: u32) -> bool {
        if self.hovered == Some(id) {
            self.hovered = None;
            true
        } else {
            false
        }
    }

    pub fn is_hovered(&self, id: u32) -> bool {
        self.hovered == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::skills;

    #[test]
    fn selecting_a_category_filters_and_clears_hover() {
        let items = skills();
        let mut panel = SkillsPanel::new(&items);
        assert_eq!(panel.visible(&items).len(), items.len());

        assert!(panel.apply(SkillsEvent::HoverEnter("Python".into())));
        assert_eq!(panel.level_width(&items[0]), "100%");

        assert!(panel.apply(SkillsEvent::Select(Category::parse("DevOps"))));
        assert_eq!(panel.hovered(), None);
        let names: Vec<&str> = panel.visible(&items).iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Cloud Deployment", "Docker"]);
    }

    #[test]
    fn reselecting_or_unknown_category_is_not_a_change() {
        let items = skills();
        let mut panel = SkillsPanel::new(&items);
        assert!(!panel.apply(SkillsEvent::Select(Category::All)));
        assert!(!panel.apply(SkillsEvent::Select(Category::parse("Cooking"))));
        assert!(panel.is_active(&Category::All));
    }

    #[test]
    fn hover_leave_collapses_level_bar() {
        let items = skills();
        let mut panel = SkillsPanel::new(&items);
        panel.apply(SkillsEvent::HoverEnter("Rust".into()));
        let rust = items.iter().find(|s| s.name == "Rust").unwrap();
        assert_eq!(panel.level_width(rust), "40%");
        assert!(panel.apply(SkillsEvent::HoverLeave));
        assert!(!panel.apply(SkillsEvent::HoverLeave));
        assert_eq!(panel.level_width(rust), "0%");
    }

    #[test]
    fn nav_compacts_past_threshold_and_links_close_menu() {
        let mut nav = NavState::default();
        assert!(!nav.apply(NavEvent::Scrolled(100.0)));
        assert!(nav.apply(NavEvent::Scrolled(100.5)));
        assert!(nav.scrolled);

        assert!(nav.apply(NavEvent::ToggleMenu));
        assert!(nav.menu_open);
        assert!(nav.apply(NavEvent::Activate(Section::Skills)));
        assert!(!nav.menu_open);
        assert!(!nav.apply(NavEvent::CloseMenu));
    }

    #[test]
    fn custom_threshold_is_respected() {
        let mut nav = NavState::with_threshold(20.0);
        assert!(nav.apply(NavEvent::Scrolled(21.0)));
        assert!(!nav.apply(NavEvent::Scrolled(50.0)));
        assert!(nav.apply(NavEvent::Scrolled(0.0)));
        assert!(!nav.scrolled);
    }

    #[test]
    fn project_hover_ignores_stale_leave() {
        let mut hover = ProjectHover::default();
        assert!(hover.enter(1));
        assert!(hover.enter(2));
        assert!(!hover.leave(1));
        assert!(hover.is_hovered(2));
        assert!(hover.leave(2));
    }
}
