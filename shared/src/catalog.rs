use crate::filter::{self, Category, FilterBar};
use crate::render::{self, RenderTarget};
use crate::rom::Rom;
use crate::search;

/// All state of one page session.
///
/// Collections are replaced wholesale by a successful load and are otherwise
/// read-only. What is on screen is kept as positions into `roms`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    roms: Vec<Rom>,
    tags: Vec<String>,
    filter_bar: FilterBar,
    displayed: Vec<usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roms(&self) -> &[Rom] {
        &self.roms
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn filter_bar(&self) -> &FilterBar {
        &self.filter_bar
    }

    pub fn displayed(&self) -> impl Iterator<Item = &Rom> + '_ {
        self.displayed.iter().map(move |&i| &self.roms[i])
    }

    /// Commit the outcome of fetching the tag vocabulary. A failure keeps
    /// whatever was there before and is handed back for reporting.
    pub fn load_tags<E>(&mut self, fetched: Result<Vec<String>, E>) -> Result<(), E> {
        self.tags = fetched?;
        Ok(())
    }

    /// Commit the outcome of fetching the catalog entries. On success the
    /// whole collection is displayed again.
    pub fn load_roms<E>(&mut self, fetched: Result<Vec<Rom>, E>) -> Result<(), E> {
        self.roms = fetched?;
        self.show_all();
        Ok(())
    }

    pub fn show_all(&mut self) {
        self.displayed = (0..self.roms.len()).collect();
    }

    pub fn select_category(&mut self, index: usize) -> Option<&'static Category> {
        let category = self.filter_bar.click(index)?;
        self.displayed = filter::by_category(&self.roms, category.value);
        Some(category)
    }

    /// Display the entries whose name contains `keyword`, ignoring case.
    /// The active category button is left as it is.
    pub fn search(&mut self, keyword: &str) {
        self.displayed = search::search(&self.roms, keyword);
    }

    pub fn render(&self, target: &mut impl RenderTarget) {
        render::render_filters(&self.filter_bar, target);
        render::render_roms(self.displayed(), target);
        render::render_tags(&self.tags, target);
    }
}
