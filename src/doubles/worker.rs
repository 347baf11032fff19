use std::cell::RefCell;
use std::rc::Rc;

use standin_core::Worker;

/// Shared view of the tasks a [`RecordingWorker`] received.
///
/// Stays readable after the worker has been moved into a `Company`.
#[derive(Debug, Clone, Default)]
pub struct TaskLog(Rc<RefCell<Vec<String>>>);

impl TaskLog {
    pub fn tasks(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// [`Worker`] that records its tasks and answers with a fixed report.
#[derive(Debug, Default)]
pub struct RecordingWorker {
    report: String,
    log: TaskLog,
}

impl RecordingWorker {
    pub fn new(report: impl Into<String>) -> Self {
        Self {
            report: report.into(),
            log: TaskLog::default(),
        }
    }

    pub fn log(&self) -> TaskLog {
        self.log.clone()
    }
}

impl Worker for RecordingWorker {
    fn work(&mut self, tasks: &[&str]) -> String {
        self.log.0.borrow_mut().extend(tasks.iter().map(|t| t.to_string()));
        self.report.clone()
    }

    fn completed(&self) -> usize {
        self.log.len()
    }
}
