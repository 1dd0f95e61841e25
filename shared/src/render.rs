//! View-model records and the capability that displays them.
//!
//! Nothing here knows about a document. A [`RenderTarget`] receives finished
//! records per region and decides how to show them; the browser front end is
//! one such target, the tests below use a recording one.

use crate::filter::FilterBar;
use crate::rom::Rom;

/// Shown in place of the cards when nothing is selected.
pub const EMPTY_MESSAGE: &str = "No ROMs found.";

pub const DOWNLOAD_TARGET: &str = "_blank";

/// The three insertion points of the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Filters,
    Roms,
    Tags,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Filters, Region::Roms, Region::Tags];

    pub fn id(self) -> &'static str {
        match self {
            Region::Filters => "filter-container",
            Region::Roms => "rom-container",
            Region::Tags => "upload-tags",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub index: usize,
    pub label: &'static str,
    pub value: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomCard<'a> {
    pub thumbnail: &'a str,
    pub alt: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub tags: &'a [String],
    pub download: &'a str,
}

impl<'a> From<&'a Rom> for RomCard<'a> {
    fn from(rom: &'a Rom) -> Self {
        RomCard {
            thumbnail: &rom.thumbnail,
            alt: &rom.name,
            name: &rom.name,
            description: &rom.description,
            tags: rom.tags(),
            download: &rom.download,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<'a> {
    /// Render [`EMPTY_MESSAGE`] and nothing else.
    Empty,
    /// One card per entry, in input order. Never empty.
    Cards(Vec<RomCard<'a>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOption<'a> {
    pub value: &'a str,
}

/// Something that can display the three regions.
///
/// Renders into a region the target reports absent are skipped.
pub trait RenderTarget {
    fn has_region(&self, _region: Region) -> bool {
        true
    }

    fn filters(&mut self, buttons: &[FilterButton]);

    fn roms(&mut self, listing: &Listing<'_>);

    fn tags(&mut self, options: &[TagOption<'_>]);
}

pub fn filter_buttons(bar: &FilterBar) -> Vec<FilterButton> {
    bar.categories()
        .iter()
        .enumerate()
        .map(|(index, category)| FilterButton {
            index,
            label: category.label,
            value: category.value,
            active: bar.is_active(index),
        })
        .collect()
}

pub fn listing<'a, I>(roms: I) -> Listing<'a>
where
    I: IntoIterator<Item = &'a Rom>,
{
    let cards: Vec<_> = roms.into_iter().map(RomCard::from).collect();
    if cards.is_empty() {
        Listing::Empty
    } else {
        Listing::Cards(cards)
    }
}

pub fn tag_options(tags: &[String]) -> Vec<TagOption<'_>> {
    tags.iter().map(|tag| TagOption { value: tag }).collect()
}

pub fn render_filters(bar: &FilterBar, target: &mut impl RenderTarget) {
    if target.has_region(Region::Filters) {
        target.filters(&filter_buttons(bar));
    }
}

pub fn render_roms<'a, I>(roms: I, target: &mut impl RenderTarget)
where
    I: IntoIterator<Item = &'a Rom>,
{
    if target.has_region(Region::Roms) {
        target.roms(&listing(roms));
    }
}

pub fn render_tags(tags: &[String], target: &mut impl RenderTarget) {
    if target.has_region(Region::Tags) {
        target.tags(&tag_options(tags));
    }
}
