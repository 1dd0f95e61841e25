use crate::rom::Rom;

pub fn matches(rom: &Rom, keyword: &str) -> bool {
    rom.name.to_lowercase().contains(&keyword.to_lowercase())
}

/// Positions of the entries whose name contains `keyword`, in catalog order.
/// An empty keyword selects everything.
pub fn search(roms: &[Rom], keyword: &str) -> Vec<usize> {
    roms.iter()
        .enumerate()
        .filter(|(_, rom)| matches(rom, keyword))
        .map(|(i, _)| i)
        .collect()
}
