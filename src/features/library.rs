//! Song library snapshot
//!
//! The song list shows whatever `library.json` in the data directory
//! describes: a JSON array of song records. Producing that file (tag
//! reading, folder scanning) happens outside this application.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::song_card::SongRecord;

/// Environment variable that overrides the library file location
pub const LIBRARY_ENV: &str = "SONGCARD_LIBRARY";

pub fn library_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(LIBRARY_ENV) {
        return Some(PathBuf::from(path));
    }
    directories::ProjectDirs::from("org", "songcard", "Songcard")
        .map(|dirs| dirs.data_dir().join("library.json"))
}

pub fn load_from_file(path: &Path) -> Result<Vec<SongRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let songs: Vec<SongRecord> = serde_json::from_str(&content)
        .with_context(|| format!("invalid library file {}", path.display()))?;
    Ok(songs)
}

/// Load the library off the UI thread; a missing file is an empty library
pub async fn load() -> Result<Vec<SongRecord>> {
    let Some(path) = library_path() else {
        return Ok(Vec::new());
    };
    tokio::task::spawn_blocking(move || {
        if !path.exists() {
            tracing::info!("No library at {}", path.display());
            return Ok(Vec::new());
        }
        load_from_file(&path)
    })
    .await
    .context("library loader panicked")?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_records() {
        let path = std::env::temp_dir().join(format!("songcard-library-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"file":"/m/a.flac","name":"A","trackNumber":3,"artist":"X","duration":125}]"#,
        )
        .unwrap();

        let songs = load_from_file(&path).unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].track_number, 3);
        assert_eq!(songs[0].duration, 125);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("songcard-bad-{}.json", std::process::id()));
        std::fs::write(&path, "not json").unwrap();
        let err = load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("invalid library file"));
        std::fs::remove_file(&path).unwrap();
    }
}
