// Filter selection for the gallery: the `Filter` value itself, the
// equality filter over works, and the `.filters` button menu that keeps
// track of which button is highlighted.

use crate::api::{Category, Work};

/// Class every filter button carries.
pub const BUTTON_CLASS: &str = "filtersNone";
/// Class of the single highlighted button.
pub const ACTIVE_CLASS: &str = "filterActive";
/// Label of the button that shows every work.
pub const ALL_LABEL: &str = "Tous";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(i64),
}

impl Filter {
    pub fn matches(&self, work: &Work) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(id) => work.category_id == *id,
        }
    }
}

/// Works matching `filter`, in their original order.
pub fn filter_works(works: &[Work], filter: Filter) -> Vec<&Work> {
    works.iter().filter(|w| filter.matches(w)).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterButton {
    pub label: String,
    pub filter: Filter,
    classes: Vec<String>,
}

impl FilterButton {
    fn new(label: impl Into<String>, filter: Filter) -> Self {
        FilterButton {
            label: label.into(),
            filter,
            classes: vec![BUTTON_CLASS.to_string()],
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn is_active(&self) -> bool {
        self.classes.iter().any(|c| c == ACTIVE_CLASS)
    }

    fn set_active(&mut self, active: bool) {
        self.classes.retain(|c| c != ACTIVE_CLASS);
        if active {
            self.classes.push(ACTIVE_CLASS.to_string());
        }
    }
}

/// The `.filters` menu: an "all" button followed by one button per category.
#[derive(Debug, Clone, Default)]
pub struct FilterMenu {
    buttons: Vec<FilterButton>,
}

impl FilterMenu {
    pub fn from_categories(categories: &[Category]) -> Self {
        let mut all = FilterButton::new(ALL_LABEL, Filter::All);
        all.set_active(true);

        let mut buttons = Vec::with_capacity(categories.len() + 1);
        buttons.push(all);
        buttons.extend(
            categories
                .iter()
                .map(|c| FilterButton::new(c.name.clone(), Filter::Category(c.id))),
        );
        FilterMenu { buttons }
    }

    pub fn buttons(&self) -> &[FilterButton] {
        &self.buttons
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Highlight the button at `index` and return its filter. Out-of-range
    /// indices leave the menu untouched.
    pub fn activate(&mut self, index: usize) -> Option<Filter> {
        if index >= self.buttons.len() {
            return None;
        }
        for (i, button) in self.buttons.iter_mut().enumerate() {
            button.set_active(i == index);
        }
        Some(self.buttons[index].filter)
    }

    /// Highlight the first button bound to `filter`.
    pub fn activate_filter(&mut self, filter: Filter) -> Option<usize> {
        let index = self.buttons.iter().position(|b| b.filter == filter)?;
        self.activate(index);
        Some(index)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.buttons.iter().position(FilterButton::is_active)
    }

    pub fn active(&self) -> Option<&FilterButton> {
        self.buttons.iter().find(|b| b.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work(id: i64, category_id: i64) -> Work {
        Work {
            id,
            title: format!("Work {id}"),
            image_url: format!("{id}.png"),
            category_id,
            user_id: None,
            category: None,
        }
    }

    fn categories() -> Vec<Category> {
        vec![
            Category { id: 1, name: "Objets".into() },
            Category { id: 2, name: "Appartements".into() },
            Category { id: 3, name: "Hotels & restaurants".into() },
        ]
    }

    #[test]
    fn filter_keeps_exact_matches_in_order() {
        let works = vec![work(1, 1), work(2, 2), work(3, 1), work(4, 3)];
        let ids: Vec<i64> = filter_works(&works, Filter::Category(1))
            .iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(filter_works(&works, Filter::Category(42)).is_empty());
        assert_eq!(filter_works(&works, Filter::All).len(), 4);
    }

    #[test]
    fn menu_starts_with_all_active() {
        let menu = FilterMenu::from_categories(&categories());
        assert_eq!(menu.len(), 4);
        assert_eq!(menu.buttons()[0].label, ALL_LABEL);
        assert_eq!(menu.active_index(), Some(0));
        assert_eq!(
            menu.buttons()[0].classes(),
            &[BUTTON_CLASS.to_string(), ACTIVE_CLASS.to_string()]
        );
        for button in &menu.buttons()[1..] {
            assert_eq!(button.classes(), &[BUTTON_CLASS.to_string()]);
        }
    }

    #[test]
    fn exactly_one_active_after_clicks() {
        let mut menu = FilterMenu::from_categories(&categories());
        assert_eq!(menu.activate(2), Some(Filter::Category(2)));
        assert_eq!(menu.active_index(), Some(2));
        assert_eq!(menu.buttons().iter().filter(|b| b.is_active()).count(), 1);

        assert_eq!(menu.activate(0), Some(Filter::All));
        assert_eq!(menu.active().map(|b| b.label.as_str()), Some(ALL_LABEL));
        assert_eq!(menu.buttons().iter().filter(|b| b.is_active()).count(), 1);
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let mut menu = FilterMenu::from_categories(&categories());
        menu.activate(3);
        assert_eq!(menu.activate(10), None);
        assert_eq!(menu.active_index(), Some(3));
    }

    #[test]
    fn activate_by_filter() {
        let mut menu = FilterMenu::from_categories(&categories());
        assert_eq!(menu.activate_filter(Filter::Category(3)), Some(3));
        assert_eq!(menu.activate_filter(Filter::Category(99)), None);
        assert_eq!(menu.active_index(), Some(3));
    }
}
