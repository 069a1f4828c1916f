/// Presentation layer
///
/// Renders the archiver state; never holds any of it.

pub mod dialog;
pub mod pane;

use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

use crate::state::archiver::Pane;

/// Two presses on the same entry within this window count as a double-click
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

pub const INSTRUCTIONS: &str = "Please select a source folder from which you wish to back up recently modified text files.\n\
Next, hit the Check Files button to see if there are files that need to be archived.\n\
Then, select the destination folder for archived files.\n\
Finally, click the Copy Files button to archive the listed files.";

/// Render an archive timestamp like ctime, in local time
pub fn format_archive_time(timestamp: i64) -> String {
    if timestamp == 0 {
        return "Never".to_string();
    }

    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.with_timezone(&Local).format("%a %b %e %H:%M:%S %Y").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Last press on a browser entry, for double-click detection
#[derive(Debug, Clone)]
pub struct Click {
    pub pane: Pane,
    pub name: String,
    pub at: Instant,
}

impl Click {
    pub fn new(pane: Pane, name: String) -> Self {
        Click { pane, name, at: Instant::now() }
    }

    /// True if `other` hits the same entry soon enough after this one
    pub fn is_double(&self, other: &Click) -> bool {
        self.pane == other.pane
            && self.name == other.name
            && other.at.saturating_duration_since(self.at) <= DOUBLE_CLICK_WINDOW
    }
}
