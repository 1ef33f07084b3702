use anyhow::{Context, Result};
use std::path::PathBuf;
use tempfile::TempDir;

/// Jay Chou discography subset used as the on-disk fixture
pub const CATALOG_JSON: &str = r#"{
  "albums": {
    "Jay": ["可爱女人", "星晴", "黑色幽默"],
    "范特西": ["双截棍", "简单爱"],
    "八度空间": ["半岛铁盒"],
    "叶惠美": ["晴天", "东风破"],
    "七里香": ["七里香"]
  }
}
"#;

/// Temporary directory holding catalog and notes files
#[allow(dead_code)]
pub struct TestWorkspace {
    _temp_dir: TempDir,
    pub catalog_path: PathBuf,
    pub notes_path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Empty workspace; neither data file exists yet
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let catalog_path = temp_dir.path().join("catalog.json");
        let notes_path = temp_dir.path().join("notes.json");
        Ok(Self {
            _temp_dir: temp_dir,
            catalog_path,
            notes_path,
        })
    }

    /// Workspace with the fixture catalog written out
    pub fn with_catalog() -> Result<Self> {
        let workspace = Self::new()?;
        workspace.write_catalog(CATALOG_JSON)?;
        Ok(workspace)
    }

    pub fn write_catalog(&self, content: &str) -> Result<()> {
        std::fs::write(&self.catalog_path, content).context("Failed to write catalog fixture")
    }

    pub fn write_notes(&self, content: &str) -> Result<()> {
        std::fs::write(&self.notes_path, content).context("Failed to write notes fixture")
    }

    pub fn read_catalog(&self) -> Result<String> {
        std::fs::read_to_string(&self.catalog_path).context("Failed to read catalog")
    }

    pub fn read_notes(&self) -> Result<String> {
        std::fs::read_to_string(&self.notes_path).context("Failed to read notes")
    }
}
