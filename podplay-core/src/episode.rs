use serde::{Deserialize, Serialize};

/// A playable podcast episode as supplied by the feed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Episode {
    pub title: String,
    /// Credited hosts and guests
    pub members: String,
    /// Artwork URL
    pub thumbnail: String,
    /// Length in seconds
    pub duration: u64,
    /// Media source URL
    pub url: String,
}

impl Episode {
    pub fn new(title: impl Into<String>, url: impl Into<String>, duration: u64) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            duration,
            ..Default::default()
        }
    }

    pub fn with_members(mut self, members: impl Into<String>) -> Self {
        self.members = members.into();
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    /// Duration as `HH:MM:SS`, or `MM:SS` below one hour
    pub fn formatted_duration(&self) -> String {
        format_seconds(self.duration)
    }
}

/// Format a number of seconds for display.
pub fn format_seconds(seconds: u64) -> String {
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}
