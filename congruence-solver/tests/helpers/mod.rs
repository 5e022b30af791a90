//! Helpers to run the `congruence-solver` binary in integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

#[derive(Debug)]
pub(crate) struct Files {
    pub(crate) log_file: PathBuf,
    pub(crate) err_file: PathBuf,
}

impl Files {
    pub(crate) fn read_log(&self) -> String {
        std::fs::read_to_string(&self.log_file).expect("the log file exists")
    }

    pub(crate) fn cleanup(self) -> std::io::Result<()> {
        std::fs::remove_file(self.log_file)?;
        std::fs::remove_file(self.err_file)?;

        Ok(())
    }
}

/// The output of the solver for one instance.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct InstanceOutput {
    pub(crate) instance_id: usize,
    pub(crate) solutions: Vec<Vec<i32>>,
    pub(crate) unsatisfiable: bool,
    pub(crate) unknown: bool,
}

pub(crate) fn instance_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("instances")
        .join(format!("{name}.txt"))
}

/// Runs the solver on the instance file, writing stdout and stderr next to it in files named
/// after `prefix`.
pub(crate) fn run_solver_with_options<'a>(
    instance_path: impl AsRef<Path>,
    args: impl IntoIterator<Item = &'a str>,
    prefix: &str,
) -> Files {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let instance_path = instance_path.as_ref();
    let solver = PathBuf::from(env!("CARGO_BIN_EXE_congruence-solver"));

    let log_file_path = instance_path.with_extension(format!("{prefix}.log"));
    let err_file_path = instance_path.with_extension(format!("{prefix}.err"));

    let mut command = Command::new(solver);
    for arg in args {
        let _ = command.arg(arg);
    }

    let mut child = command
        .arg(instance_path)
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(File::create(&err_file_path).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) if status.success() => {}
        Ok(Some(e)) => panic!("error solving instance {e}"),
        Err(e) => panic!("error starting solver: {e}"),
    }

    Files {
        log_file: log_file_path,
        err_file: err_file_path,
    }
}

/// Splits the output of the solver into the outputs per instance. Log and statistic lines are
/// skipped.
pub(crate) fn parse_output(output: &str) -> Vec<InstanceOutput> {
    let mut instances: Vec<InstanceOutput> = vec![];

    for line in output.lines().map(str::trim) {
        if let Some(id) = line.strip_prefix("% instance ") {
            instances.push(InstanceOutput {
                instance_id: id.parse().expect("instance id is an integer"),
                ..Default::default()
            });
            continue;
        }

        let Some(current) = instances.last_mut() else {
            continue;
        };

        if let Some(values) = line.strip_prefix("x[] = ") {
            let values = values
                .trim_start_matches('[')
                .trim_end_matches(']')
                .split(',')
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(|value| value.parse::<i32>().expect("solution values are integers"))
                .collect();
            current.solutions.push(values);
        } else if line == "=====UNSATISFIABLE=====" {
            current.unsatisfiable = true;
        } else if line == "=====UNKNOWN=====" {
            current.unknown = true;
        }
    }

    instances
}
