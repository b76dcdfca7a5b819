use pretty_assertions::assert_eq;

use super::*;

#[test]
fn strict_masks_rejects_unknown_mask() {
    let dir = tempdir().expect("tempdir");
    let input = write_inventory(
        dir.path(),
        "hosts.csv",
        "h01,10.0.0.1,255.255.255.255,\nh02,10.0.0.0,24,\n",
    );

    bin()
        .arg(path_as_str(&input))
        .arg("--strict-masks")
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 2: unknown subnet mask '24'"));

    assert!(!dir.path().join("hosts.txt").exists());
}

#[test]
fn explicit_output_path_is_used() {
    let dir = tempdir().expect("tempdir");
    let input = write_inventory(dir.path(), "hosts.csv", "h01,10.0.0.1,255.255.255.255,\n");
    let output = dir.path().join("fortigate.conf");

    bin()
        .arg(path_as_str(&input))
        .arg("--output")
        .arg(path_as_str(&output))
        .assert()
        .success();

    assert!(output.exists());
    assert!(!dir.path().join("hosts.txt").exists());
}

#[test]
fn refuses_to_overwrite_input() {
    let dir = tempdir().expect("tempdir");
    let input = write_inventory(dir.path(), "hosts.csv", "h01,10.0.0.1,255.255.255.255,\n");

    bin()
        .arg(path_as_str(&input))
        .arg("--output")
        .arg(path_as_str(&input))
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite inventory"));

    let unchanged = fs::read_to_string(&input).expect("read input");
    assert!(unchanged.starts_with(HEADER));
}

#[test]
fn stdout_mode_prints_configuration() {
    let dir = tempdir().expect("tempdir");
    let input = write_inventory(dir.path(), "hosts.csv", "h01,10.0.0.1,255.255.255.255,\n");

    bin()
        .arg(path_as_str(&input))
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("config firewall address\n"))
        .stdout(predicate::str::ends_with("config firewall addrgrp\nend\n"));

    assert!(!dir.path().join("hosts.txt").exists());
}

#[test]
fn summary_reports_counts() {
    let dir = tempdir().expect("tempdir");
    let input = write_inventory(
        dir.path(),
        "hosts.csv",
        "web01,10.0.0.1,255.255.255.255,\nweb02,10.0.0.2,255.255.255.255,\nedge,10.9.0.0,255.255.0.0,\n",
    );

    bin()
        .arg(path_as_str(&input))
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "convert_summary addresses=3 groups=1 grouped_members=2 unknown_masks=0",
        ));
}

#[test]
fn summary_goes_to_stderr_in_stdout_mode() {
    let dir = tempdir().expect("tempdir");
    let input = write_inventory(dir.path(), "hosts.csv", "web01,10.0.0.1,255.255.255.255,\n");

    let output = bin()
        .arg(path_as_str(&input))
        .arg("--stdout")
        .arg("--summary")
        .arg("--format")
        .arg("json")
        .output()
        .expect("run");
    assert!(output.status.success(), "convert should succeed");

    let stdout = String::from_utf8(output.stdout).expect("utf-8");
    assert!(stdout.ends_with("config firewall addrgrp\nend\n"));
    assert!(!stdout.contains('{'));

    let summary: serde_json::Value = serde_json::from_slice(&output.stderr).expect("json parse");
    assert_eq!(summary["addresses"], 1);
    assert_eq!(summary["groups"], 0);
}

#[test]
fn config_file_renames_columns_and_sets_policy() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("export.csv");
    fs::write(
        &input,
        "Name,Address,Mask,Notes\nfw01,10.9.0.1,255.255.255.255,edge\nfw02,10.9.0.2,bogus,\n",
    )
    .expect("write inventory");
    let settings = dir.path().join("layout.toml");
    fs::write(
        &settings,
        "[columns]\nhostname = \"Name\"\nip = \"Address\"\nmask = \"Mask\"\ncomment = \"Notes\"\n\n[masks]\nunknown = \"strict\"\n",
    )
    .expect("write settings");

    bin()
        .arg(path_as_str(&input))
        .arg("--config")
        .arg(path_as_str(&settings))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown subnet mask 'bogus'"));
}

#[test]
fn bad_config_file_is_fatal() {
    let dir = tempdir().expect("tempdir");
    let input = write_inventory(dir.path(), "hosts.csv", "h01,10.0.0.1,255.255.255.255,\n");
    let settings = dir.path().join("layout.toml");
    fs::write(&settings, "[columns\n").expect("write settings");

    bin()
        .arg(path_as_str(&input))
        .arg("--config")
        .arg(path_as_str(&settings))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse settings file"));
}
