//! The serial command listener: the worker thread's supervising loop.
//!
//! Reads one command line per iteration, dispatches on its literal value,
//! and answers with exactly one final status token per command. Errors in a
//! single iteration are absorbed: they are logged, reported to the display,
//! and followed by a pause before the next poll. The loop only stops on an
//! explicit shutdown request or when the control channel disconnects.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use lawwatch_client::LawSource;
use lawwatch_core::{Command, Status, UpdateTracker, distinct_categories, sort_newest_first};
use lawwatch_serial::{PortError, SerialLink};
use tracing::{debug, info, warn};

use crate::analysis::spawn_viewer;
use crate::config::{BridgeConfig, CheckMode};
use crate::message::{Control, Event};

pub struct Listener<S, L> {
    link: S,
    source: L,
    mode: CheckMode,
    tracker: UpdateTracker,
    selected_category: Option<String>,
    analysis_command: Option<String>,
    poll_interval: Duration,
    retry_pause: Duration,
    control: Receiver<Control>,
    events: Sender<Event>,
}

impl<S: SerialLink, L: LawSource> Listener<S, L> {
    pub fn new(
        link: S,
        source: L,
        config: &BridgeConfig,
        control: Receiver<Control>,
        events: Sender<Event>,
    ) -> Self {
        Self {
            link,
            source,
            mode: config.mode,
            tracker: UpdateTracker::new(),
            selected_category: config.category.clone(),
            analysis_command: config.analysis_command.clone(),
            poll_interval: config.poll_interval(),
            retry_pause: config.retry_pause(),
            control,
            events,
        }
    }

    /// Run the listener loop until shutdown.
    pub fn run(mut self) {
        if self.mode == CheckMode::Category {
            self.populate_categories();
        }

        info!("listener running");
        loop {
            if !self.drain_control() {
                break;
            }
            match self.step() {
                Ok(true) => {}
                Ok(false) => thread::sleep(self.poll_interval),
                Err(err) => {
                    warn!(error = %err, "listener iteration failed");
                    self.display(format!("Serial error: {err}"));
                    thread::sleep(self.retry_pause);
                }
            }
        }
        info!("listener stopped");
    }

    /// Apply pending control messages. Returns `false` on shutdown.
    fn drain_control(&mut self) -> bool {
        loop {
            match self.control.try_recv() {
                Ok(Control::SelectCategory(category)) => {
                    info!(category = %category, "category selected");
                    self.selected_category = Some(category);
                }
                Ok(Control::Shutdown) => return false,
                Err(TryRecvError::Empty) => return true,
                Err(TryRecvError::Disconnected) => return false,
            }
        }
    }

    /// One poll iteration. Returns `true` if a line was handled.
    fn step(&mut self) -> Result<bool, PortError> {
        match self.link.poll_line()? {
            Some(line) => {
                self.dispatch(&line)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn dispatch(&mut self, line: &str) -> Result<(), PortError> {
        debug!(line = %line, "command received");
        match Command::parse(line) {
            Some(Command::CheckUpdate) => {
                self.link.write_line(&Status::Processing.token())?;
                let status = self.check_update();
                self.link.write_line(&status.token())
            }
            Some(Command::RunAnalysis) => {
                self.link.write_line(&Status::Processing.token())?;
                let status = self.run_analysis();
                self.link.write_line(&status.token())
            }
            None => {
                self.display(format!("Unknown command from device: {line}"));
                Ok(())
            }
        }
    }

    fn check_update(&mut self) -> Status {
        match self.mode {
            CheckMode::Latest => self.check_latest(),
            CheckMode::Category => self.check_category(),
        }
    }

    /// Mode A: compare the newest law on the backend against last-seen.
    fn check_latest(&mut self) -> Status {
        let laws = match self.source.laws(true) {
            Ok(laws) => laws,
            Err(err) => {
                warn!(error = %err, "law fetch failed");
                self.display(format!("Error fetching updates: {err}"));
                return Status::NoUpdate;
            }
        };
        let Some(latest) = laws.first() else {
            self.display("No data from backend".to_string());
            return Status::NoUpdate;
        };
        match self.tracker.observe(&latest.created_at) {
            Ok(true) => {
                info!(law = %latest.name, "new law");
                self.display(latest.headline());
                Status::Update(Some(latest.name.clone()))
            }
            Ok(false) => Status::NoUpdate,
            Err(err) => {
                warn!(error = %err, "bad timestamp from backend");
                self.display(format!("Error fetching updates: {err}"));
                Status::NoUpdate
            }
        }
    }

    /// Mode B: search recent laws in the currently selected category.
    fn check_category(&mut self) -> Status {
        let Some(category) = self.selected_category.clone() else {
            self.display("No category selected".to_string());
            return Status::NoUpdate;
        };
        let mut results = match self.source.search(&category) {
            Ok(results) => results,
            Err(err) => {
                warn!(error = %err, "law search failed");
                self.display(format!("Error fetching updates: {err}"));
                return Status::NoUpdate;
            }
        };
        if results.is_empty() {
            self.display(format!(
                "No new laws in the last 30 days for category: {category}"
            ));
            return Status::NoUpdate;
        }

        sort_newest_first(&mut results);
        self.display(format!("New laws for category: {category}"));
        for law in &results {
            self.display(law.detail_line());
        }
        Status::Update(None)
    }

    fn run_analysis(&mut self) -> Status {
        let Some(command) = self.analysis_command.clone() else {
            self.display("No analysis viewer configured".to_string());
            return Status::AnalysisError;
        };
        match spawn_viewer(&command) {
            Ok(()) => {
                info!(command = %command, "analysis viewer launched");
                self.display(format!("Launched analysis viewer: {command}"));
                Status::AnalysisDone
            }
            Err(err) => {
                warn!(error = %err, "analysis viewer launch failed");
                self.display(format!("Failed to launch analysis viewer: {err}"));
                Status::AnalysisError
            }
        }
    }

    /// One-shot startup fetch that derives the selectable category list.
    fn populate_categories(&mut self) {
        match self.source.laws(false) {
            Ok(laws) => {
                let categories = distinct_categories(&laws);
                if self.selected_category.is_none() {
                    self.selected_category = categories.first().cloned();
                }
                if !categories.is_empty() {
                    self.display("Select a law category to filter updates".to_string());
                }
                let _ = self.events.send(Event::Categories(categories));
            }
            Err(err) => {
                warn!(error = %err, "category fetch failed");
                self.display(format!("Error fetching law categories: {err}"));
            }
        }
    }

    fn display(&self, line: String) {
        let _ = self.events.send(Event::Display(line));
    }
}
