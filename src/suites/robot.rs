//! `Robot` and `Company` through the [`Worker`] contract.

use standin_core::{Company, Robot, Worker};

use crate::doubles::RecordingWorker;
use crate::harness::check::{check, check_eq};
use crate::harness::{CaseReporter, CaseResult, CaseRunner, CaseTable, RunReport};

pub const SUITE: &str = "robot";

#[derive(Debug, Clone)]
pub enum RobotCase {
    /// A robot works `tasks` and reports `want`.
    Report {
        model: &'static str,
        serial_id: u32,
        tasks: Vec<&'static str>,
        want: &'static str,
    },
    /// A company with `workers` recording doubles hands each of them `tasks`.
    Staff { workers: usize, tasks: Vec<&'static str> },
}

pub fn table() -> CaseTable<RobotCase> {
    CaseTable::new(SUITE)
        .case(
            "robot reports each task",
            RobotCase::Report {
                model: "T-800",
                serial_id: 101,
                tasks: vec!["weld", "paint"],
                want: "Robot T-800 serialID 101 work:\n I do weld\n I do paint",
            },
        )
        .case(
            "robot with no tasks",
            RobotCase::Report {
                model: "R2",
                serial_id: 2,
                tasks: vec![],
                want: "Robot R2 serialID 2 work:",
            },
        )
        .case(
            "company reaches every worker",
            RobotCase::Staff {
                workers: 3,
                tasks: vec!["sweep", "mop"],
            },
        )
        .case(
            "empty company does nothing",
            RobotCase::Staff {
                workers: 0,
                tasks: vec!["sweep"],
            },
        )
}

pub fn case_names() -> Vec<String> {
    table().names().map(str::to_string).collect()
}

pub fn check_case(case: &RobotCase) -> CaseResult {
    match case {
        RobotCase::Report {
            model,
            serial_id,
            tasks,
            want,
        } => {
            let mut robot = Robot::new(*model, *serial_id);
            check_eq(robot.work(tasks).as_str(), *want)?;
            check_eq(robot.completed(), tasks.len())
        }
        RobotCase::Staff { workers, tasks } => {
            let mut company = Company::new();
            let mut logs = Vec::with_capacity(*workers);
            for i in 0..*workers {
                let worker = RecordingWorker::new(format!("worker {i} done"));
                logs.push(worker.log());
                company.hire(Box::new(worker));
            }

            let reports = company.assign(tasks);
            check_eq(reports.len(), *workers)?;
            for log in &logs {
                check_eq(log.tasks(), tasks.iter().map(|t| t.to_string()).collect::<Vec<_>>())?;
            }
            check(
                company.total_completed() == workers * tasks.len(),
                format!("expected {} completed tasks", workers * tasks.len()),
            )
        }
    }
}

pub fn run(runner: &CaseRunner, reporter: &mut dyn CaseReporter) -> RunReport {
    runner.run(&table(), reporter, check_case)
}
