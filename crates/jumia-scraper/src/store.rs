//! Archive writer
//!
//! One folder per product: `description.md`, `info.json` and an `images/`
//! directory with the downloaded files numbered in download order.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::product::ProductRecord;
use crate::Result;

const DESCRIPTION_FILE: &str = "description.md";
const INFO_FILE: &str = "info.json";
const IMAGES_DIR: &str = "images";

/// The on-disk folder of one archived product.
pub struct ProductDir {
    root: PathBuf,
}

impl ProductDir {
    /// Create (or reuse) the folder for `name` under `parent`, including
    /// its `images/` subdirectory. Path separators in the name are replaced
    /// so a product name cannot escape the archive tree.
    pub fn create(parent: &Path, name: &str) -> Result<Self> {
        let root = parent.join(dir_name(name));
        fs::create_dir_all(root.join(IMAGES_DIR))?;
        debug!("product folder {}", root.display());
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write the Markdown description; returns the path stored in
    /// `info.json`, relative to the product folder.
    pub fn write_description(&self, markdown: &str) -> Result<String> {
        fs::write(self.root.join(DESCRIPTION_FILE), markdown)?;
        Ok(DESCRIPTION_FILE.to_string())
    }

    /// Write one downloaded image; `index` numbers files from 0 in
    /// download order. Returns the relative path stored in `info.json`.
    pub fn write_image(&self, index: usize, bytes: &[u8]) -> Result<String> {
        let filename = format!("{IMAGES_DIR}/{index}.jpg");
        fs::write(self.root.join(&filename), bytes)?;
        Ok(filename)
    }

    /// Serialize the record as pretty-printed `info.json`.
    pub fn write_record(&self, record: &ProductRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(record)?;
        fs::write(self.root.join(INFO_FILE), json)?;
        Ok(())
    }
}

fn dir_name(name: &str) -> String {
    name.trim().replace(['/', '\\'], "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProductRecord {
        ProductRecord {
            name: "Test Product".to_string(),
            price: Some("5 000 FCFA".to_string()),
            old_price: None,
            discount: None,
            description: Some(DESCRIPTION_FILE.to_string()),
            images: vec!["images/0.jpg".to_string()],
        }
    }

    #[test]
    fn creates_folder_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = ProductDir::create(tmp.path(), "Test Product").unwrap();

        assert!(dir.path().is_dir());
        assert!(dir.path().join(IMAGES_DIR).is_dir());
        assert_eq!(dir.path(), tmp.path().join("Test Product"));
    }

    #[test]
    fn path_separators_in_name_are_replaced() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = ProductDir::create(tmp.path(), "T-Shirt 90/60").unwrap();
        assert_eq!(dir.path(), tmp.path().join("T-Shirt 90-60"));
    }

    #[test]
    fn writes_description_and_images() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = ProductDir::create(tmp.path(), "p").unwrap();

        let description = dir.write_description("# Title\n\n").unwrap();
        assert_eq!(description, "description.md");
        assert_eq!(
            fs::read_to_string(dir.path().join(description)).unwrap(),
            "# Title\n\n"
        );

        let image = dir.write_image(0, b"jpeg bytes").unwrap();
        assert_eq!(image, "images/0.jpg");
        assert_eq!(fs::read(dir.path().join(image)).unwrap(), b"jpeg bytes");
    }

    #[test]
    fn info_json_is_pretty_printed() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = ProductDir::create(tmp.path(), "p").unwrap();

        dir.write_record(&record()).unwrap();
        let raw = fs::read_to_string(dir.path().join(INFO_FILE)).unwrap();
        assert!(raw.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["name"], "Test Product");
        assert_eq!(value["price"], "5 000 FCFA");
        assert_eq!(value["old_price"], serde_json::Value::Null);
        assert_eq!(value["images"][0], "images/0.jpg");
    }
}
