//! Sources of playlist names for the "Add to" menu

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Supplies the names of existing playlists
pub trait PlaylistProvider: Send + Sync {
    fn playlist_names(&self) -> Result<Vec<String>>;
}

/// Playlists stored as `<name>.json` files in one folder
#[derive(Debug, Clone)]
pub struct DirPlaylistProvider {
    dir: PathBuf,
}

impl DirPlaylistProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `Playlists` folder next to the platform data directory
    pub fn default_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "songcard", "Songcard")
            .map(|dirs| dirs.data_dir().join("Playlists"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PlaylistProvider for DirPlaylistProvider {
    fn playlist_names(&self) -> Result<Vec<String>> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = entry.with_context(|| format!("failed to read {}", self.dir.display()))?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        tracing::debug!(count = names.len(), dir = %self.dir.display(), "playlists listed");
        Ok(names)
    }
}

/// Fixed list of names
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticPlaylistProvider(pub Vec<String>);

#[cfg(test)]
impl PlaylistProvider for StaticPlaylistProvider {
    fn playlist_names(&self) -> Result<Vec<String>> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "songcard-test-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn lists_json_stems_and_creates_folder() {
        let dir = scratch_dir("playlists");
        let provider = DirPlaylistProvider::new(&dir);
        assert!(provider.playlist_names().unwrap().is_empty());
        assert!(dir.is_dir());

        std::fs::write(dir.join("Road trip.json"), "{}").unwrap();
        std::fs::write(dir.join("Chill.json"), "{}").unwrap();
        std::fs::write(dir.join("notes.txt"), "").unwrap();
        std::fs::create_dir_all(dir.join("nested.json")).unwrap();

        let names = provider.playlist_names().unwrap();
        assert_eq!(names, vec!["Chill".to_string(), "Road trip".to_string()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn static_provider_returns_its_names() {
        let provider = StaticPlaylistProvider(vec!["A".into()]);
        assert_eq!(provider.playlist_names().unwrap(), vec!["A".to_string()]);
    }
}
