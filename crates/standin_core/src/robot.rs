//! Robots, and a company that hires anything implementing [`Worker`].

use std::fmt;

use crate::contract::Worker;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robot {
    model: String,
    serial_id: u32,
    work_counter: usize,
}

impl Robot {
    pub fn new(model: impl Into<String>, serial_id: u32) -> Self {
        Self {
            model: model.into(),
            serial_id,
            work_counter: 0,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn serial_id(&self) -> u32 {
        self.serial_id
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Robot {} serialID {}", self.model, self.serial_id)
    }
}

impl Worker for Robot {
    fn work(&mut self, tasks: &[&str]) -> String {
        let mut report = format!("{self} work:");
        for task in tasks {
            report.push_str("\n I do ");
            report.push_str(task);
        }
        self.work_counter += tasks.len();
        report
    }

    fn completed(&self) -> usize {
        self.work_counter
    }
}

/// Owns hired workers and hands them work.
#[derive(Default)]
pub struct Company {
    staff: Vec<Box<dyn Worker>>,
}

impl Company {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hire(&mut self, worker: Box<dyn Worker>) {
        self.staff.push(worker);
    }

    pub fn headcount(&self) -> usize {
        self.staff.len()
    }

    /// Give every worker the same tasks, returning their reports in hiring order.
    pub fn assign(&mut self, tasks: &[&str]) -> Vec<String> {
        self.staff.iter_mut().map(|worker| worker.work(tasks)).collect()
    }

    /// Tasks completed across all staff.
    pub fn total_completed(&self) -> usize {
        self.staff.iter().map(|worker| worker.completed()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robot_display() {
        assert_eq!(Robot::new("R2", 42).to_string(), "Robot R2 serialID 42");
    }

    #[test]
    fn test_robot_work_report_and_counter() {
        let mut robot = Robot::new("R2", 42);
        let report = robot.work(&["sweep", "weld"]);
        assert_eq!(report, "Robot R2 serialID 42 work:\n I do sweep\n I do weld");
        assert_eq!(robot.completed(), 2);

        robot.work(&[]);
        assert_eq!(robot.completed(), 2);
    }

    #[test]
    fn test_company_assigns_to_all_staff() {
        let mut company = Company::new();
        company.hire(Box::new(Robot::new("A", 1)));
        company.hire(Box::new(Robot::new("B", 2)));

        let reports = company.assign(&["paint"]);
        assert_eq!(reports.len(), 2);
        assert!(reports[0].starts_with("Robot A serialID 1"));
        assert!(reports[1].starts_with("Robot B serialID 2"));
        assert_eq!(company.total_completed(), 2);
        assert_eq!(company.headcount(), 2);
    }
}
