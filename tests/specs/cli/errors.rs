//! Error reporting at the CLI boundary

use crate::prelude::*;

#[test]
fn missing_scenario_file_fails() {
    let project = Project::empty();

    let output = tw()
        .arg("run")
        .arg(project.path("missing.toml"))
        .assert()
        .failure()
        .get_output()
        .clone();

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("missing.toml"));
}

#[test]
fn zero_max_steps_is_rejected() {
    let project = Project::empty();
    let scenario = project.file("cycle.toml", CYCLE);

    tw().args(["run", "--max-steps", "0"])
        .arg(&scenario)
        .assert()
        .failure();
}

#[test]
fn unknown_subcommand_fails() {
    tw().arg("explode").assert().failure();
}
