//! Seeding configuration and generated row shapes.

pub struct CountrySeed {
    pub name: String,
    pub code: String,
}

/// A district bound to an already-inserted country.
pub struct DistrictSeed {
    pub name: String,
    pub country_id_hash: String,
    pub country_name: String,
}

#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub countries: usize,
    /// Total districts, assigned round-robin across the seeded countries.
    pub districts: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            countries: 10,
            districts: 50,
        }
    }
}

impl SeedConfig {
    pub fn new(countries: usize, districts: usize) -> Self {
        Self {
            countries,
            districts,
        }
    }
}
