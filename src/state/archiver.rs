/// Application state for the archiver
///
/// Owns both browsers, the candidate list and the archive tracker.
/// The UI reads from here and routes every user action through it.

use chrono::Utc;

use super::archive::{self, CopyReport};
use super::browser::DirectoryBrowser;
use super::data::CandidateList;
use super::tracker::ArchiveTracker;
use crate::error::Result;

/// Which of the two browsers an action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Source,
    Destination,
}

pub struct Archiver {
    source: DirectoryBrowser,
    destination: DirectoryBrowser,
    candidates: CandidateList,
    tracker: Box<dyn ArchiveTracker>,
    last_archive: i64,
}

impl Archiver {
    pub fn new(
        tracker: Box<dyn ArchiveTracker>,
        source: DirectoryBrowser,
        destination: DirectoryBrowser,
    ) -> Result<Self> {
        let last_archive = tracker.last_archive_time()?;
        Ok(Archiver {
            source,
            destination,
            candidates: CandidateList::new(),
            tracker,
            last_archive,
        })
    }

    pub fn browser(&self, pane: Pane) -> &DirectoryBrowser {
        match pane {
            Pane::Source => &self.source,
            Pane::Destination => &self.destination,
        }
    }

    fn browser_mut(&mut self, pane: Pane) -> &mut DirectoryBrowser {
        match pane {
            Pane::Source => &mut self.source,
            Pane::Destination => &mut self.destination,
        }
    }

    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    /// Last archive time as of the latest read or copy
    pub fn last_archive_time(&self) -> i64 {
        self.last_archive
    }

    /// Go up one level. Any source navigation drops the candidate list.
    pub fn ascend(&mut self, pane: Pane) -> Result<bool> {
        self.invalidate(pane);
        self.browser_mut(pane).ascend()
    }

    /// Open the child folder `name`. Any source navigation drops the candidate list.
    pub fn descend(&mut self, pane: Pane, name: &str) -> Result<()> {
        self.invalidate(pane);
        self.browser_mut(pane).descend(name)
    }

    fn invalidate(&mut self, pane: Pane) {
        if pane == Pane::Source {
            self.candidates.clear();
        }
    }

    /// Rebuild the candidate list from the current source folder
    pub fn check_files(&mut self) -> Result<&CandidateList> {
        self.candidates.clear();
        self.last_archive = self.tracker.last_archive_time()?;
        self.candidates = archive::check_files(self.source.current_path(), self.last_archive)?;
        Ok(&self.candidates)
    }

    /// Copy the candidates to the destination and record the archive time.
    ///
    /// The recorded time is now, or one second past the previous record if
    /// that is later, so it always moves forward.
    pub fn copy_files(&mut self) -> Result<CopyReport> {
        let prior = self.tracker.last_archive_time()?;
        let report = archive::copy_files(
            &self.candidates,
            self.source.current_path(),
            self.destination.current_path(),
        )?;

        let now = Utc::now().timestamp().max(prior + 1);
        self.tracker.record_archive(now)?;
        self.last_archive = now;
        self.candidates.clear();

        if let Err(e) = self.destination.refresh() {
            log::warn!("⚠️  Could not refresh destination listing: {}", e);
        }

        Ok(report)
    }
}

impl std::fmt::Debug for Archiver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Archiver")
            .field("source", &self.source.current_path())
            .field("destination", &self.destination.current_path())
            .field("candidates", &self.candidates.len())
            .field("last_archive", &self.last_archive)
            .finish()
    }
}
