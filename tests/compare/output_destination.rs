use crate::common::command::{Workbench, run_comparison, workbench};
use crate::common::file::{list_directory, write_tree};
use crate::common::script;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn stdout_sentinel_writes_no_file(workbench: Workbench) -> Result<(), Box<dyn std::error::Error>> {
    write_tree(&workbench.source(), &["x.txt"]);
    write_tree(&workbench.target(), &["x.txt"]);

    run_comparison(&workbench, &["--output", "-"])
        .assert()
        .success()
        .stdout(predicate::eq(script(
            &workbench.source(),
            &workbench.target(),
            &["x.txt"],
        )));

    pretty_assertions::assert_eq!(
        list_directory(workbench.root()),
        vec![workbench.home(), workbench.source(), workbench.target()]
    );

    Ok(())
}

#[rstest]
fn default_output_is_an_executable_script_in_the_working_directory(
    workbench: Workbench,
) -> Result<(), Box<dyn std::error::Error>> {
    write_tree(&workbench.source(), &["a/x.txt", "b.txt"]);
    write_tree(&workbench.target(), &["a/x.txt", "b.txt"]);

    run_comparison(&workbench, &[])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Comparison script generated"));

    let output = workbench.output();
    pretty_assertions::assert_eq!(
        std::fs::read_to_string(&output)?,
        script(&workbench.source(), &workbench.target(), &["a/x.txt", "b.txt"])
    );
    assert!(is_executable::is_executable(&output));

    Ok(())
}

#[rstest]
fn output_path_may_point_into_another_directory(
    workbench: Workbench,
) -> Result<(), Box<dyn std::error::Error>> {
    write_tree(&workbench.source(), &["x.txt"]);
    write_tree(&workbench.target(), &["x.txt"]);
    let output = workbench.home().join("review.sh");

    run_comparison(&workbench, &["--output", &output.display().to_string()])
        .assert()
        .success();

    pretty_assertions::assert_eq!(
        std::fs::read_to_string(&output)?,
        script(&workbench.source(), &workbench.target(), &["x.txt"])
    );
    pretty_assertions::assert_eq!(list_directory(&workbench.home()), vec![output]);

    Ok(())
}

#[rstest]
fn existing_output_is_overwritten(workbench: Workbench) -> Result<(), Box<dyn std::error::Error>> {
    write_tree(&workbench.source(), &["x.txt"]);
    write_tree(&workbench.target(), &["x.txt"]);
    std::fs::write(workbench.output(), "echo stale\n")?;

    run_comparison(&workbench, &[]).assert().success();

    pretty_assertions::assert_eq!(
        std::fs::read_to_string(workbench.output())?,
        script(&workbench.source(), &workbench.target(), &["x.txt"])
    );

    Ok(())
}

#[rstest]
fn failed_walk_leaves_no_output_behind(
    workbench: Workbench,
) -> Result<(), Box<dyn std::error::Error>> {
    let missing_source = workbench.root().join("missing");

    crate::common::command::run_creepymatrix(
        &workbench,
        &[
            "--source",
            &missing_source.display().to_string(),
            "--target",
            &workbench.target().display().to_string(),
        ],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("error walking source tree"));

    pretty_assertions::assert_eq!(
        list_directory(workbench.root()),
        vec![workbench.home(), workbench.source(), workbench.target()]
    );

    Ok(())
}

#[rstest]
fn failed_walk_keeps_the_previous_script(
    workbench: Workbench,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(workbench.output(), "echo previous\n")?;
    let missing_source = workbench.root().join("missing");

    crate::common::command::run_creepymatrix(
        &workbench,
        &[
            "--source",
            &missing_source.display().to_string(),
            "--target",
            &workbench.target().display().to_string(),
        ],
    )
    .assert()
    .failure();

    pretty_assertions::assert_eq!(std::fs::read_to_string(workbench.output())?, "echo previous\n");

    Ok(())
}

#[rstest]
fn failed_walk_prints_nothing_to_stdout(
    workbench: Workbench,
) -> Result<(), Box<dyn std::error::Error>> {
    let missing_source = workbench.root().join("missing");

    crate::common::command::run_creepymatrix(
        &workbench,
        &[
            "--source",
            &missing_source.display().to_string(),
            "--target",
            &workbench.target().display().to_string(),
            "--output",
            "-",
        ],
    )
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("error walking source tree"));

    Ok(())
}

#[cfg(unix)]
#[rstest]
fn walk_failing_midway_keeps_the_previous_script(
    workbench: Workbench,
) -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    write_tree(&workbench.source(), &["a.txt", "b/c.txt", "z.txt"]);
    write_tree(&workbench.target(), &["a.txt", "b/c.txt", "z.txt"]);
    std::fs::write(workbench.output(), "echo previous\n")?;

    let blocked = workbench.source().join("b");
    std::fs::set_permissions(&blocked, std::fs::Permissions::from_mode(0o000))?;
    if std::fs::read_dir(&blocked).is_ok() {
        // permission bits are not enforced for this user
        std::fs::set_permissions(&blocked, std::fs::Permissions::from_mode(0o755))?;
        return Ok(());
    }

    let assert = run_comparison(&workbench, &[]).assert();
    std::fs::set_permissions(&blocked, std::fs::Permissions::from_mode(0o755))?;

    assert
        .failure()
        .stderr(predicate::str::contains("error walking source tree"));
    pretty_assertions::assert_eq!(std::fs::read_to_string(workbench.output())?, "echo previous\n");
    pretty_assertions::assert_eq!(
        list_directory(workbench.root()),
        vec![
            workbench.output(),
            workbench.home(),
            workbench.source(),
            workbench.target()
        ]
    );

    Ok(())
}

#[rstest]
fn output_inside_the_source_tree_is_not_compared_with_itself(
    workbench: Workbench,
) -> Result<(), Box<dyn std::error::Error>> {
    write_tree(workbench.root(), &["x.txt"]);

    crate::common::command::run_creepymatrix(&workbench, &["--source", ".", "--target", "."])
        .assert()
        .success();

    pretty_assertions::assert_eq!(
        std::fs::read_to_string(workbench.output())?,
        script(workbench.root(), workbench.root(), &["x.txt"])
    );
    pretty_assertions::assert_eq!(
        list_directory(workbench.root()),
        vec![
            workbench.output(),
            workbench.home(),
            workbench.source(),
            workbench.target(),
            workbench.root().join("x.txt")
        ]
    );

    Ok(())
}

#[rstest]
fn unwritable_destination_is_reported(
    workbench: Workbench,
) -> Result<(), Box<dyn std::error::Error>> {
    write_tree(&workbench.source(), &["x.txt"]);
    let output = workbench.root().join("no/such/dir/out.sh");

    run_comparison(&workbench, &["--output", &output.display().to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error writing comparison script to"));

    assert!(!output.exists());

    Ok(())
}
