pub mod catalog;
pub mod filter;
pub mod render;
pub mod rom;
pub mod search;

pub use catalog::Catalog;
pub use filter::{Category, FilterBar, CATEGORIES};
pub use render::{FilterButton, Listing, Region, RenderTarget, RomCard, TagOption};
pub use rom::Rom;

pub const TAGS_URL: &str = "tags.json";

pub const ROMS_URL: &str = "roms.json";
