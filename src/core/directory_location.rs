// src/core/directory_location.rs

use std::path::Path;

use serde::{Deserialize, Serialize};

pub const ULAM_FILENAME: &str = "Ulam_Coeff.txt";
pub const ONE_REPRESENTATION_FILENAME: &str = "Ulam_One_Rep.txt";
pub const MULTIPLE_REPRESENTATION_FILENAME: &str = "Ulam_Multiple_Rep.txt";
pub const EXCLUSIONS_FILENAME: &str = "Exclusions_Data.txt";
pub const SUMMARY_FILENAME: &str = "summary.json";

/// Where a run keeps its persisted state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryLocations {
    pub save_directory: String,
    pub ulam_filepath: String,
    pub one_representation_filepath: String,
    pub multiple_representation_filepath: String,
    pub exclusions_filepath: String,
    pub summary_filepath: String,
}

impl DirectoryLocations {
    pub fn new(save_directory: &str) -> Self {
        let save_directory = save_directory.trim_end_matches('/').to_string();
        let in_directory = |filename: &str| {
            Path::new(&save_directory)
                .join(filename)
                .to_string_lossy()
                .into_owned()
        };

        DirectoryLocations {
            ulam_filepath: in_directory(ULAM_FILENAME),
            one_representation_filepath: in_directory(ONE_REPRESENTATION_FILENAME),
            multiple_representation_filepath: in_directory(MULTIPLE_REPRESENTATION_FILENAME),
            exclusions_filepath: in_directory(EXCLUSIONS_FILENAME),
            summary_filepath: in_directory(SUMMARY_FILENAME),
            save_directory,
        }
    }

    /// Whether a previous run left an Ulam collection behind.
    pub fn has_saved_state(&self) -> bool {
        Path::new(&self.ulam_filepath).exists()
    }
}

impl Default for DirectoryLocations {
    fn default() -> Self {
        DirectoryLocations::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_joined() {
        let locations = DirectoryLocations::new("data/");
        assert_eq!(locations.save_directory, "data");
        assert_eq!(locations.ulam_filepath, "data/Ulam_Coeff.txt");
        assert_eq!(locations.exclusions_filepath, "data/Exclusions_Data.txt");
        assert_eq!(locations.summary_filepath, "data/summary.json");
    }
}
