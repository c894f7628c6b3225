//! Upload screen state: the intake list and the simulated analysis run.
//!
//! The analysis is a stand-in for a long-running job. A run advances by a
//! fixed step per timer tick and completes at 100%; nothing is computed.

use crate::models::UploadedFile;

/// Progress of the simulated analysis.
///
/// `running` and `complete` are never both set. Progress only moves while
/// running, and reaching 100 ends the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisRun {
    progress: u8,
    running: bool,
    complete: bool,
}

impl AnalysisRun {
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

/// Result of a single timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Progress moved to the given percentage; keep ticking.
    Advanced(u8),
    /// Progress reached 100 and the run is complete.
    Finished,
    /// No run in progress; the tick was ignored.
    Idle,
}

/// Which view the upload screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Collecting,
    Analyzing,
    Complete,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadSession {
    files: Vec<UploadedFile>,
    run: AnalysisRun,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn run(&self) -> AnalysisRun {
        self.run
    }

    pub fn phase(&self) -> Phase {
        if self.run.is_complete() {
            Phase::Complete
        } else if self.run.is_running() {
            Phase::Analyzing
        } else {
            Phase::Collecting
        }
    }

    /// Append files in the order given. Duplicates are kept.
    pub fn add_files<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = UploadedFile>,
    {
        let before = self.files.len();
        self.files.extend(files);
        self.files.len() - before
    }

    /// Remove the entry at `index`. Out-of-range indices are ignored.
    pub fn remove_file(&mut self, index: usize) -> Option<UploadedFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn can_start(&self) -> bool {
        !self.files.is_empty() && !self.run.is_running()
    }

    /// Begin a run. Returns `false` and leaves state untouched if there are
    /// no files or a run is already in progress.
    pub fn start(&mut self) -> bool {
        if !self.can_start() {
            return false;
        }
        self.run = AnalysisRun {
            progress: 0,
            running: true,
            complete: false,
        };
        true
    }

    /// Advance a running analysis by `step` points, clamping at 100. A zero
    /// step counts as one so a run always finishes.
    pub fn tick(&mut self, step: u8) -> TickOutcome {
        if !self.run.running {
            return TickOutcome::Idle;
        }
        let next = self.run.progress.saturating_add(step.max(1)).min(100);
        self.run.progress = next;
        if next >= 100 {
            self.run.running = false;
            self.run.complete = true;
            TickOutcome::Finished
        } else {
            TickOutcome::Advanced(next)
        }
    }

    /// Back to an empty intake with no run.
    pub fn reset(&mut self) {
        self.files.clear();
        self.run = AnalysisRun::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> UploadedFile {
        UploadedFile::new(name, 1024, "application/pdf")
    }

    fn names(session: &UploadSession) -> Vec<&str> {
        session.files().iter().map(|f| f.name.as_str()).collect()
    }

    fn run_to_completion(session: &mut UploadSession, step: u8) -> Vec<TickOutcome> {
        let mut outcomes = Vec::new();
        loop {
            let outcome = session.tick(step);
            outcomes.push(outcome);
            if outcome != TickOutcome::Advanced(session.run().progress()) {
                break;
            }
        }
        outcomes
    }

    #[test]
    fn test_drop_then_picker_preserves_order() {
        let mut session = UploadSession::new();
        assert_eq!(session.add_files(vec![file("a.pdf"), file("b.pdf")]), 2);
        assert_eq!(session.add_files(vec![file("c.png"), file("d.csv"), file("e.txt")]), 3);

        assert_eq!(session.files().len(), 5);
        assert_eq!(names(&session), ["a.pdf", "b.pdf", "c.png", "d.csv", "e.txt"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut session = UploadSession::new();
        session.add_files(vec![file("same.pdf")]);
        session.add_files(vec![file("same.pdf")]);
        assert_eq!(names(&session), ["same.pdf", "same.pdf"]);

        session.remove_file(1);
        assert_eq!(names(&session), ["same.pdf"]);
    }

    #[test]
    fn test_remove_shifts_later_entries() {
        let mut session = UploadSession::new();
        session.add_files(vec![file("a"), file("b"), file("c"), file("d")]);

        let removed = session.remove_file(1).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(names(&session), ["a", "c", "d"]);
        assert_eq!(session.files()[1].name, "c");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut session = UploadSession::new();
        session.add_files(vec![file("a")]);
        assert!(session.remove_file(3).is_none());
        assert_eq!(names(&session), ["a"]);
    }

    #[test]
    fn test_remove_all_empties_list() {
        let mut session = UploadSession::new();
        session.add_files(vec![file("a"), file("b"), file("c")]);
        while session.remove_file(0).is_some() {}
        assert!(session.files().is_empty());
        assert_eq!(session.phase(), Phase::Collecting);
    }

    #[test]
    fn test_start_with_no_files_is_noop() {
        let mut session = UploadSession::new();
        let before = session.clone();
        assert!(!session.start());
        assert_eq!(session, before);
        assert_eq!(session.tick(10), TickOutcome::Idle);
        assert_eq!(session, before);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut session = UploadSession::new();
        session.add_files(vec![file("a")]);
        assert!(session.start());
        session.tick(10);
        session.tick(10);

        let before = session.clone();
        assert!(!session.start());
        assert_eq!(session, before);
        assert_eq!(session.run().progress(), 20);
    }

    #[test]
    fn test_progress_steps_by_ten_and_completes_at_hundred() {
        let mut session = UploadSession::new();
        session.add_files(vec![file("a")]);
        assert!(session.start());
        assert_eq!(session.phase(), Phase::Analyzing);
        assert_eq!(session.run().progress(), 0);

        for expected in (10..100).step_by(10) {
            assert_eq!(session.tick(10), TickOutcome::Advanced(expected as u8));
            assert!(session.run().is_running());
            assert!(!session.run().is_complete());
        }

        assert_eq!(session.tick(10), TickOutcome::Finished);
        assert_eq!(session.run().progress(), 100);
        assert!(!session.run().is_running());
        assert!(session.run().is_complete());
        assert_eq!(session.phase(), Phase::Complete);

        assert_eq!(session.tick(10), TickOutcome::Idle);
        assert_eq!(session.run().progress(), 100);
    }

    #[test]
    fn test_uneven_step_is_clamped() {
        let mut session = UploadSession::new();
        session.add_files(vec![file("a")]);
        session.start();

        let outcomes = run_to_completion(&mut session, 30);
        assert_eq!(
            outcomes,
            [
                TickOutcome::Advanced(30),
                TickOutcome::Advanced(60),
                TickOutcome::Advanced(90),
                TickOutcome::Finished,
            ]
        );
        assert_eq!(session.run().progress(), 100);
    }

    #[test]
    fn test_progress_is_monotonic_and_flags_exclusive() {
        let mut session = UploadSession::new();
        session.add_files(vec![file("a")]);
        session.start();

        let mut last = session.run().progress();
        while session.tick(7) != TickOutcome::Finished {
            let run = session.run();
            assert!(run.progress() > last);
            assert!(!(run.is_running() && run.is_complete()));
            last = run.progress();
        }
        assert_eq!(session.run().progress(), 100);
    }

    #[test]
    fn test_zero_step_still_advances() {
        let mut session = UploadSession::new();
        session.add_files(vec![file("a")]);
        session.start();
        assert_eq!(session.tick(0), TickOutcome::Advanced(1));
    }

    #[test]
    fn test_reset_after_completion() {
        let mut session = UploadSession::new();
        session.add_files(vec![file("a"), file("b")]);
        session.start();
        run_to_completion(&mut session, 10);
        assert_eq!(session.phase(), Phase::Complete);

        session.reset();
        assert_eq!(session, UploadSession::new());
        assert_eq!(session.run().progress(), 0);
        assert!(!session.run().is_complete());
        assert_eq!(session.phase(), Phase::Collecting);
    }
}
