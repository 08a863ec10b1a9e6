use std::path::{Path, PathBuf};

use super::loader::SUPPORTED_EXTENSIONS;

/// Datasets offered when the data directory has nothing better to show.
pub const DEFAULT_DATASETS: &[&str] = &["sales_data1.csv", "sales_data2.csv", "sales_data3.csv"];

// ---------------------------------------------------------------------------
// Dataset catalog
// ---------------------------------------------------------------------------

/// The pre-packaged datasets a user can pick from.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetCatalog {
    pub data_dir: PathBuf,
    pub entries: Vec<PathBuf>,
}

impl DatasetCatalog {
    /// Scan `data_dir` for loadable files, sorted by name.
    ///
    /// An unreadable or empty directory yields the default file names inside
    /// it, so picking one still produces a clear "not found" later.
    pub fn scan(data_dir: &Path) -> Self {
        let mut entries: Vec<PathBuf> = match std::fs::read_dir(data_dir) {
            Ok(dir) => dir
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && is_supported(p))
                .collect(),
            Err(e) => {
                log::warn!("Cannot scan data directory {}: {e}", data_dir.display());
                Vec::new()
            }
        };

        if entries.is_empty() {
            entries = DEFAULT_DATASETS.iter().map(|n| data_dir.join(n)).collect();
        }
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        DatasetCatalog {
            data_dir: data_dir.to_path_buf(),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 1-based lookup, matching the numbers shown in the menu.
    pub fn get(&self, number: usize) -> Option<&Path> {
        number
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(PathBuf::as_path)
    }

    /// Menu labels: the file name of each entry.
    pub fn labels(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| p.display().to_string())
            })
            .collect()
    }
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
