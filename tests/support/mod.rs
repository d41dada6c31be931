#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use category_sync::{CATALOG_FILE_NAME, ROOT_HINT_ENV};
use serde_yaml::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Temporary catalog root: `categories.yaml` plus category data directories.
pub struct CatalogFixture {
    dir: TempDir,
}

impl CatalogFixture {
    pub fn new(catalog: &str) -> Result<Self> {
        let dir = TempDir::new().context("failed to allocate catalog root")?;
        fs::write(dir.path().join(CATALOG_FILE_NAME), catalog)
            .context("failed to write catalog fixture")?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root().join(CATALOG_FILE_NAME)
    }

    /// Create `<root>/<relative>` and drop the named data files into it.
    pub fn add_files(&self, relative: &str, names: &[&str]) -> Result<()> {
        let dir = self.root().join(relative);
        fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
        for name in names {
            fs::write(dir.join(name), "model: fixture\n")
                .with_context(|| format!("writing {name}"))?;
        }
        Ok(())
    }

    pub fn catalog_text(&self) -> Result<String> {
        fs::read_to_string(self.catalog_path()).context("reading catalog back")
    }

    pub fn catalog_value(&self) -> Result<Value> {
        serde_yaml::from_str(&self.catalog_text()?).context("parsing catalog back")
    }

    /// Run the `update-categories` binary against this root.
    pub fn run_update(&self) -> Result<Output> {
        self.run_update_with_hint(self.root().as_os_str())
    }

    /// Run the binary from inside this root with an arbitrary root hint.
    pub fn run_update_with_hint(&self, hint: &OsStr) -> Result<Output> {
        let mut cmd = Command::new(update_binary());
        cmd.current_dir(self.root())
            .env(ROOT_HINT_ENV, hint)
            .env_remove("RUST_LOG");
        cmd.output()
            .with_context(|| format!("failed to run command: {:?}", cmd))
    }
}

pub fn update_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_update-categories"))
}

pub fn expect_success(output: Output) -> Result<Output> {
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "update-categories failed: status {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}
