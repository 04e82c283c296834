use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::episode::Episode;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("cannot read episode feed {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed episode feed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON array of episodes.
pub fn parse_episodes(json: &str) -> Result<Vec<Episode>, FeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Load the episodes listed in a JSON feed file.
pub fn load_episodes(path: &Path) -> Result<Vec<Episode>, FeedError> {
    let content = fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let episodes = parse_episodes(&content)?;
    log::info!("Loaded {} episodes from {:?}", episodes.len(), path);
    Ok(episodes)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const FEED: &str = r#"[
        {
            "title": "Pilot",
            "members": "Ana, Bruno",
            "thumbnail": "https://cdn.example.com/pilot.jpg",
            "duration": 3600,
            "url": "https://cdn.example.com/pilot.mp3"
        },
        {
            "title": "Second",
            "members": "Ana",
            "thumbnail": "https://cdn.example.com/second.jpg",
            "duration": 1800,
            "url": "https://cdn.example.com/second.mp3"
        }
    ]"#;

    #[test]
    fn parses_episode_array() {
        let episodes = parse_episodes(FEED).unwrap();
        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].title, "Pilot");
        assert_eq!(episodes[0].members, "Ana, Bruno");
        assert_eq!(episodes[1].duration, 1800);
    }

    #[test]
    fn empty_array_is_an_empty_feed() {
        assert!(parse_episodes("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_missing_fields() {
        let err = parse_episodes(r#"[{ "title": "No url" }]"#).unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FEED.as_bytes()).unwrap();

        let episodes = load_episodes(file.path()).unwrap();
        assert_eq!(episodes[1].url, "https://cdn.example.com/second.mp3");
    }

    #[test]
    fn reports_missing_file_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = load_episodes(&path).unwrap_err();
        match err {
            FeedError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
