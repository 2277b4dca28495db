use std::fs::{create_dir_all, read, read_dir, read_to_string, write};
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

/// A fake SteamApps directory with a workshop folder and a maps folder
struct SteamApps {
    root: TempDir,
}

impl SteamApps {
    fn new(files: &[(&str, &[u8])]) -> Self {
        let root = tempdir().expect("Failed to create temp directory");
        let steamapps = SteamApps { root };
        create_dir_all(steamapps.maps_dir()).expect("Failed to create maps directory");
        for (relative, contents) in files {
            let source = steamapps.workshop_dir().join(relative);
            create_dir_all(source.parent().unwrap()).expect("Failed to create workshop item");
            write(source, contents).expect("Failed to write workshop file");
        }
        steamapps
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    fn arg(&self) -> String {
        self.path().to_str().unwrap().to_string()
    }

    fn workshop_dir(&self) -> PathBuf {
        self.path().join("workshop").join("content").join("440")
    }

    fn maps_dir(&self) -> PathBuf {
        self.path()
            .join("common")
            .join("Team Fortress 2")
            .join("tf")
            .join("maps")
    }

    fn copied_maps(&self) -> Vec<String> {
        let mut names: Vec<String> = read_dir(self.maps_dir())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

fn workshop_maps() -> Command {
    Command::cargo_bin("workshop-maps").expect("binary should be built")
}

#[test]
fn test_help_ignores_other_arguments() {
    let steamapps = SteamApps::new(&[("1/cp_gorge.bsp", b"gorge")]);

    workshop_maps()
        .args([steamapps.arg().as_str(), "/does/not/exist", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "USAGE: workshop-maps [--help] [steamapps_dir]",
        ))
        .stdout(predicate::str::contains("ERROR").not());

    assert!(steamapps.copied_maps().is_empty());
}

#[test]
fn test_too_many_arguments() {
    let steamapps = SteamApps::new(&[("1/cp_gorge.bsp", b"gorge")]);

    workshop_maps()
        .args([steamapps.arg(), steamapps.arg()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ERROR: Too many arguments."))
        .stdout(predicate::str::contains("USAGE:"));

    assert!(steamapps.copied_maps().is_empty());
}

#[test]
fn test_missing_directory_argument() {
    workshop_maps()
        .arg("/no/such/steamapps/anywhere")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "ERROR: Specified SteamApps directory does not exist.",
        ))
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn test_copies_maps_from_explicit_directory() {
    let steamapps = SteamApps::new(&[
        ("100/a.bsp", b"map a"),
        ("100/b.txt", b"not a map"),
        ("200/sub/c.bsp", b"map c"),
    ]);

    workshop_maps()
        .arg(steamapps.arg())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{} => {}",
            steamapps.workshop_dir().join("100").join("a.bsp").display(),
            steamapps.maps_dir().join("a.bsp").display()
        )))
        .stdout(predicate::str::contains("c.bsp"));

    assert_eq!(steamapps.copied_maps(), vec!["a.bsp", "c.bsp"]);
    assert_eq!(read(steamapps.maps_dir().join("a.bsp")).unwrap(), b"map a");
    assert_eq!(read(steamapps.maps_dir().join("c.bsp")).unwrap(), b"map c");
}

#[test]
fn test_same_name_collision_keeps_one_copy() {
    let steamapps = SteamApps::new(&[("sub1/x.bsp", b"first"), ("sub2/x.bsp", b"second")]);

    workshop_maps().arg(steamapps.arg()).assert().success();

    assert_eq!(steamapps.copied_maps(), vec!["x.bsp"]);
    let contents = read(steamapps.maps_dir().join("x.bsp")).unwrap();
    assert!(contents == b"first" || contents == b"second");
}

#[test]
fn test_running_twice_is_idempotent() {
    let steamapps = SteamApps::new(&[("1/pl_upward.bsp", b"upward"), ("2/koth_harvest.bsp", b"harvest")]);

    workshop_maps().arg(steamapps.arg()).assert().success();
    let first = steamapps.copied_maps();
    let first_contents: Vec<Vec<u8>> = first
        .iter()
        .map(|name| read(steamapps.maps_dir().join(name)).unwrap())
        .collect();

    workshop_maps().arg(steamapps.arg()).assert().success();
    let second = steamapps.copied_maps();
    let second_contents: Vec<Vec<u8>> = second
        .iter()
        .map(|name| read(steamapps.maps_dir().join(name)).unwrap())
        .collect();

    assert_eq!(first, second);
    assert_eq!(first_contents, second_contents);
}

#[test]
fn test_missing_maps_folder_fails() {
    let steamapps = SteamApps::new(&[("1/a.bsp", b"a")]);
    std::fs::remove_dir(steamapps.maps_dir()).unwrap();

    workshop_maps()
        .arg(steamapps.arg())
        .assert()
        .failure()
        .stdout(predicate::str::contains("ERROR: Failed to copy file"));

    assert!(!steamapps.maps_dir().exists());
}

#[test]
fn test_keep_going_reports_failures() {
    let steamapps = SteamApps::new(&[("1/a.bsp", b"a"), ("2/b.bsp", b"b")]);
    std::fs::remove_dir(steamapps.maps_dir()).unwrap();

    workshop_maps()
        .args(["--keep-going", steamapps.arg().as_str()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ERROR: 2 map(s) could not be copied"));
}

#[test]
fn test_dry_run_copies_nothing() {
    let steamapps = SteamApps::new(&[("1/ctf_turbine.bsp", b"turbine")]);

    workshop_maps()
        .args(["-n", steamapps.arg().as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("[dry run]"))
        .stdout(predicate::str::contains("ctf_turbine.bsp"));

    assert!(steamapps.copied_maps().is_empty());
}

#[test]
fn test_empty_workshop_succeeds_quietly() {
    let steamapps = SteamApps::new(&[]);

    workshop_maps()
        .arg(steamapps.arg())
        .assert()
        .success()
        .stdout(predicate::str::contains("=>").not());
}

#[test]
fn test_log_file_receives_copy_lines() {
    let steamapps = SteamApps::new(&[("1/cp_process.bsp", b"process")]);
    let log_dir = tempdir().unwrap();
    let log_file = log_dir.path().join("copy.log");

    workshop_maps()
        .args(["--log-file", log_file.to_str().unwrap(), steamapps.arg().as_str()])
        .assert()
        .success();

    let log = read_to_string(&log_file).unwrap();
    assert!(log.contains("INFO"));
    assert!(log.contains("cp_process.bsp =>"));
}

#[test]
fn test_version_flag() {
    workshop_maps()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("workshop-maps "));
}

#[test]
fn test_unknown_option_is_rejected() {
    workshop_maps()
        .arg("--frobnicate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("ERROR:"))
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn test_directory_starting_with_dash() {
    let parent = tempdir().unwrap();
    let steamapps = parent.path().join("-steamapps");
    let workshop_item = steamapps.join("workshop").join("content").join("440").join("7");
    let maps_dir = steamapps.join("common").join("Team Fortress 2").join("tf").join("maps");
    create_dir_all(&workshop_item).unwrap();
    create_dir_all(&maps_dir).unwrap();
    write(workshop_item.join("koth_lakeside.bsp"), b"lakeside").unwrap();

    workshop_maps()
        .current_dir(parent.path())
        .arg("-steamapps")
        .assert()
        .success()
        .stdout(predicate::str::contains("koth_lakeside.bsp =>"));

    assert_eq!(read(maps_dir.join("koth_lakeside.bsp")).unwrap(), b"lakeside");
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_directory_name() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let parent = tempdir().unwrap();
    let steamapps = parent.path().join(OsStr::from_bytes(b"Steam\xffApps"));
    let workshop_item = steamapps.join("workshop").join("content").join("440").join("1");
    let maps_dir = steamapps.join("common").join("Team Fortress 2").join("tf").join("maps");
    create_dir_all(&workshop_item).unwrap();
    create_dir_all(&maps_dir).unwrap();
    write(workshop_item.join("cp_x.bsp"), b"x").unwrap();

    workshop_maps()
        .arg(&steamapps)
        .assert()
        .success()
        .stdout(predicate::str::contains("cp_x.bsp =>"))
        .stdout(predicate::str::contains("ERROR").not());

    assert_eq!(read(maps_dir.join("cp_x.bsp")).unwrap(), b"x");
}
