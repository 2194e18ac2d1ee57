//! Category derivation and filtering for the skills grid.

use core::fmt;

use hashbrown::HashSet;

use crate::catalog::SkillItem;

/// Display label of the sentinel category.
pub const ALL_LABEL: &str = "Tutti";

/// A selectable category. `All` matches every item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    /// Parse a user-facing label. `"Tutti"` and `"all"` (any case) are the
    /// sentinel; anything else is taken verbatim.
    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case(ALL_LABEL) || trimmed.eq_ignore_ascii_case("all") {
            Category::All
        } else {
            Category::Named(trimmed.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::All => ALL_LABEL,
            Category::Named(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Category::All)
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => name == category,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Anything that carries a category label.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for SkillItem {
    fn category(&self) -> &str {
        self.category
    }
}

impl<T: Categorized + ?Sized> Categorized for &T {
    fn category(&self) -> &str {
        (**self).category()
    }
}

/// The categories present in a list, with `All` first and the rest in order
/// of first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    ordered: Vec<Category>,
}

impl CategorySet {
    pub fn derive<T: Categorized>(items: &[T]) -> Self {
        let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
        let mut ordered = Vec::with_capacity(items.len() + 1);
        ordered.push(Category::All);
        for item in items {
            let c = item.category();
            if seen.insert(c) {
                ordered.push(Category::Named(c.to_string()));
            }
        }
        Self { ordered }
    }

    /// Look up a member by label. Returns `None` for labels the items never
    /// used, so callers can reject them before filtering.
    pub fn resolve(&self, label: &str) -> Option<Category> {
        let candidate = Category::parse(label);
        self.contains(&candidate).then_some(candidate)
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.ordered.iter().any(|c| c == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Never true: `All` is always present.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Items whose category equals `selected`, or every item for `All`.
/// Relative order is preserved. No match yields an empty vector.
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], selected: &Category) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| selected.matches(item.category()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{skills, SkillIcon};

    fn sample() -> Vec<SkillItem> {
        vec![
            SkillItem::new("Python", SkillIcon::Code, 100, "Linguaggi"),
            SkillItem::new("SQL", SkillIcon::Database, 90, "Linguaggi"),
            SkillItem::new("Docker", SkillIcon::Terminal, 90, "DevOps"),
        ]
    }

    fn names<T: std::ops::Deref<Target = SkillItem>>(items: &[T]) -> Vec<&'static str> {
        items.iter().map(|s| s.name).collect()
    }

    #[test]
    fn devops_scenario_yields_only_docker() {
        let items = sample();
        let out = filter_by_category(&items, &Category::parse("DevOps"));
        assert_eq!(out.len(), 1);
        assert_eq!(*out[0], items[2]);
    }

    #[test]
    fn tutti_scenario_yields_everything_in_order() {
        let items = sample();
        let out = filter_by_category(&items, &Category::parse("Tutti"));
        assert_eq!(names(&out), vec!["Python", "SQL", "Docker"]);
    }

    #[test]
    fn named_category_keeps_exact_matches_in_order() {
        let items = skills();
        let set = CategorySet::derive(&items);
        for c in set.iter().filter(|c| !c.is_all()) {
            let out = filter_by_category(&items, c);
            let expected: Vec<&SkillItem> =
                items.iter().filter(|s| s.category == c.label()).collect();
            assert_eq!(out, expected, "category {c}");
            assert!(!out.is_empty());
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let items: Vec<SkillItem> = Vec::new();
        assert!(filter_by_category(&items, &Category::All).is_empty());
        assert!(filter_by_category(&items, &Category::parse("AI")).is_empty());
    }

    #[test]
    fn unmatched_category_is_empty_not_error() {
        let items = sample();
        assert!(filter_by_category(&items, &Category::parse("Cooking")).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let items = skills();
        let c = Category::parse("ML/AI");
        let once = filter_by_category(&items, &c);
        let twice = filter_by_category(&once, &c);
        assert_eq!(names(&once), twice.iter().map(|s| s.name).collect::<Vec<_>>());
    }

    #[test]
    fn derived_set_starts_with_all_and_keeps_first_appearance_order() {
        let set = CategorySet::derive(&skills());
        let labels: Vec<&str> = set.iter().map(Category::label).collect();
        assert_eq!(
            labels,
            vec![
                "Tutti",
                "Linguaggi",
                "ML/AI",
                "AI",
                "Analytics",
                "Orchestration",
                "Dev",
                "DevOps",
                "Database",
                "Tools",
            ]
        );
    }

    #[test]
    fn every_item_category_is_in_the_set() {
        let items = skills();
        let set = CategorySet::derive(&items);
        for s in &items {
            assert!(set.resolve(s.category).is_some(), "{}", s.category);
        }
        assert_eq!(set.resolve("all"), Some(Category::All));
        assert_eq!(set.resolve("Cooking"), None);
    }
}
