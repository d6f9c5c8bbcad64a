use crate::options::City;
use std::path::PathBuf;

/// City → source file name. Fixed for the lifetime of the process.
pub const CITY_DATA: [(City, &str); 3] = [
    (City::Chicago, "chicago.csv"),
    (City::NewYorkCity, "new_york_city.csv"),
    (City::Washington, "washington.csv"),
];

impl City {
    /// Source file name from [`CITY_DATA`].
    pub fn file_name(&self) -> &'static str {
        CITY_DATA
            .iter()
            .find(|(city, _)| city == self)
            .map(|(_, file)| *file)
            .unwrap_or_default()
    }
}

/// Resolves cities to data sources inside a data directory.
#[derive(Debug, Clone)]
pub struct DatasetRegistry {
    root: PathBuf,
}

impl DatasetRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, city: City) -> PathBuf {
        self.root.join(city.file_name())
    }
}
