//! `tw run` behavior

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn run_prints_fired_triggers_in_order() {
    let project = Project::empty();
    let scenario = project.file("cascade.toml", CASCADE);

    let stdout = stdout_of(tw().arg("run").arg(&scenario));

    assert_eq!(
        stdout,
        "fired Relay.b\nfired Relay.d\nfired Relay.e\nfired Relay.c\nprocessed 5 events\ndrained\n"
    );
}

#[test]
fn run_json_reports_progress() {
    let project = Project::empty();
    let scenario = project.file("cascade.toml", CASCADE);

    let stdout = stdout_of(tw().args(["run", "--format", "json"]).arg(&scenario));

    assert!(stdout.contains("\"owner\": \"alice\""));
    assert!(stdout.contains("\"drained\": true"));
    assert!(stdout.contains("\"processed\": 5"));
}

#[test]
fn run_stops_cycles_at_max_steps() {
    let project = Project::empty();
    let scenario = project.file("cycle.toml", CYCLE);

    let output = tw()
        .args(["run", "--max-steps", "5"])
        .arg(&scenario)
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(
        stdout,
        "fired Loop.again\nfired Loop.again\nfired Loop.again\nfired Loop.again\nfired Loop.again\nprocessed 5 events\nstep budget exhausted (1 pending)\n"
    );
    assert!(stderr.contains("step limit reached"));
}

#[test]
fn run_without_start_uses_null_engine() {
    let project = Project::empty();
    let content = format!("{}start = false\n", CASCADE);
    let scenario = project.file("idle.toml", &content);

    let stdout = stdout_of(tw().arg("run").arg(&scenario));

    assert_eq!(
        stdout,
        "engine not started for owner alice\nprocessed 0 events\ndrained\n"
    );
}

#[test]
fn run_owner_flag_overrides_scenario() {
    let project = Project::empty();
    let content = format!("{}start = false\n", CASCADE);
    let scenario = project.file("idle.toml", &content);

    let stdout = stdout_of(tw().args(["run", "--owner", "bob"]).arg(&scenario));

    assert!(stdout.contains("engine not started for owner bob"));
}

#[test]
fn run_writes_logs_to_file() {
    let project = Project::empty();
    let scenario = project.file("cascade.toml", CASCADE);
    let log = project.path("logs/tw.log");

    tw().args(["-v", "run"])
        .arg(&scenario)
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success();

    let logs = std::fs::read_to_string(&log).unwrap();
    assert!(logs.contains("event engine installed"));
    assert!(logs.contains("immediate listener triggered"));
}
