use crate::api::PortfolioSource;
use crate::error::Result;
use crate::filters::{filter_works, Filter, FilterMenu};
use crate::gallery::Gallery;

/// The gallery page: a `.filters` menu and a `.gallery` container fed by a
/// `PortfolioSource`. Every render fetches fresh data; nothing is cached.
pub struct Page<S> {
    source: S,
    menu: FilterMenu,
    gallery: Gallery,
}

impl<S: PortfolioSource> Page<S> {
    pub fn new(source: S) -> Self {
        Page {
            source,
            menu: FilterMenu::default(),
            gallery: Gallery::new(),
        }
    }

    /// Build the filter menu from the categories and show every work. Both
    /// fetches always run; a failed categories call leaves only the "all"
    /// button. The first error is returned once both have been attempted.
    pub fn load(&mut self) -> Result<()> {
        let categories = match self.source.list_categories() {
            Ok(categories) => Ok(categories),
            Err(e) => {
                tracing::warn!(error = %e, "could not load categories");
                Err(e)
            }
        };
        self.menu = FilterMenu::from_categories(categories.as_deref().unwrap_or_default());
        let works = self.show_all();
        if let Err(e) = &works {
            tracing::warn!(error = %e, "could not load works");
        }
        categories.and(works)
    }

    pub fn show_all(&mut self) -> Result<()> {
        let works = self.source.list_works()?;
        self.gallery.render(&works);
        Ok(())
    }

    pub fn show_category(&mut self, category_id: i64) -> Result<()> {
        let works = self.source.list_works()?;
        let filtered = filter_works(&works, Filter::Category(category_id));
        tracing::debug!(category_id, matched = filtered.len(), "filtered works");
        self.gallery.render(filtered);
        Ok(())
    }

    /// Apply `filter` without touching the menu highlight.
    pub fn show(&mut self, filter: Filter) -> Result<()> {
        match filter {
            Filter::All => self.show_all(),
            Filter::Category(id) => self.show_category(id),
        }
    }

    /// Click the filter button at `index`. Returns `false` when there is no
    /// such button.
    pub fn click(&mut self, index: usize) -> Result<bool> {
        match self.menu.activate(index) {
            Some(filter) => {
                tracing::info!(index, ?filter, "filter selected");
                self.show(filter)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Highlight the button bound to `filter` and render it.
    pub fn select(&mut self, filter: Filter) -> Result<bool> {
        match self.menu.activate_filter(filter) {
            Some(index) => self.click(index),
            None => Ok(false),
        }
    }

    pub fn menu(&self) -> &FilterMenu {
        &self.menu
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
