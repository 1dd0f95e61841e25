use crate::rom::Rom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub label: &'static str,
    pub value: &'static str,
}

/// The fixed quick filters, in button order. Independent of the tag vocabulary.
pub const CATEGORIES: [Category; 3] = [
    Category {
        label: "HyperOS",
        value: "HyperOS",
    },
    Category {
        label: "OxygenOS",
        value: "OxygenOS",
    },
    Category {
        label: "Hypermint",
        value: "Hypermint",
    },
];

/// Which category button is active. Exactly one is, at all times.
///
/// Every state accepts the same event, a click on button `index`, which moves
/// the active marker there. There is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBar {
    categories: &'static [Category],
    active: usize,
}

impl Default for FilterBar {
    fn default() -> Self {
        FilterBar {
            categories: &CATEGORIES,
            active: 0,
        }
    }
}

impl FilterBar {
    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Click on button `index`. Out of range clicks leave the state alone.
    pub fn click(&mut self, index: usize) -> Option<&'static Category> {
        let categories = self.categories;
        let category = categories.get(index)?;
        self.active = index;
        Some(category)
    }
}

pub fn by_category(roms: &[Rom], tag: &str) -> Vec<usize> {
    roms.iter()
        .enumerate()
        .filter(|(_, rom)| rom.has_tag(tag))
        .map(|(i, _)| i)
        .collect()
}
