//! Common test utilities for iconseek integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway SDE layout for integration tests: the two YAML tables plus an
/// image directory
#[allow(dead_code)]
pub struct TestSde {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the fixture root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestSde {
    /// Create an empty fixture
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("images")).expect("Failed to create images directory");
        Self { temp, path }
    }

    /// Create a fixture seeded with one resolvable group
    ///
    /// Group 1436 "Manufacture & Research" -> icon 27 -> 27_64_1.png, present
    /// on disk at images/icons/27_64_1.png.
    pub fn seeded() -> Self {
        let sde = Self::new();
        sde.write_groups(
            "1436:\n  nameID:\n    en: Manufacture & Research\n  iconID: 27\n\
             2:\n  nameID:\n    en: Blueprints\n\
             9:\n  nameID:\n    en: Ships\n  iconID: 99\n",
        );
        sde.write_icons("27:\n  iconFile: res:/ui/texture/icons/27_64_1.png\n");
        sde.add_image("icons/27_64_1.png");
        sde
    }

    /// Write the market group table
    pub fn write_groups(&self, yaml: &str) -> PathBuf {
        let path = self.path.join("marketGroups.yaml");
        std::fs::write(&path, yaml).expect("Failed to write group table");
        path
    }

    /// Write the icon id table
    pub fn write_icons(&self, yaml: &str) -> PathBuf {
        let path = self.path.join("iconIDs.yaml");
        std::fs::write(&path, yaml).expect("Failed to write icon table");
        path
    }

    /// Create an image file under the images directory
    pub fn add_image(&self, relative: &str) -> PathBuf {
        let path = self.images_dir().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, b"\x89PNG").expect("Failed to write image file");
        path
    }

    pub fn groups_path(&self) -> PathBuf {
        self.path.join("marketGroups.yaml")
    }

    pub fn icons_path(&self) -> PathBuf {
        self.path.join("iconIDs.yaml")
    }

    pub fn images_dir(&self) -> PathBuf {
        self.path.join("images")
    }
}
