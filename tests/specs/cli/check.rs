//! `tw check` behavior

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn check_counts_triggers_and_classes() {
    let project = Project::empty();
    let scenario = project.file("cascade.toml", CASCADE);

    let stdout = stdout_of(tw().arg("check").arg(&scenario));

    assert_eq!(stdout, "ok: 4 triggers across 1 classes\n");
}

#[test]
fn check_rejects_inconsistent_trigger() {
    let project = Project::empty();
    let scenario = project.file(
        "bad.toml",
        "[[trigger]]\nclass = \"C\"\nname = \"t\"\nkind = \"delayed\"\nsource = \"A\"\n",
    );

    let output = tw().arg("check").arg(&scenario).assert().failure().get_output().clone();

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("needs `delay`"), "{}", stderr);
}
