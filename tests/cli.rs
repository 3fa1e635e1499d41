use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("passproof"));
    cmd.env_remove("PASSPROOF_PRF")
        .env_remove("PASSPROOF_ITERATIONS")
        .env_remove("PASSPROOF_SALT_LEN");
    cmd
}

fn hash(password: &str) -> String {
    let output = bin()
        .env("PASSPROOF_PASSWORD", password)
        .arg("hash")
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[test]
fn hash_prints_stored_form() {
    bin()
        .env("PASSPROOF_PASSWORD", "welcome123")
        .arg("hash")
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[A-Za-z0-9+/]+=*\n$").unwrap());
}

#[test]
fn hash_and_verify_roundtrip() {
    let stored = hash("welcome123");

    bin()
        .env("PASSPROOF_PASSWORD", "welcome123")
        .arg("verify")
        .arg(&stored)
        .assert()
        .success()
        .stdout(predicate::str::contains("password verified"))
        .stdout(predicate::str::contains("rehash").not());
}

#[test]
fn wrong_password_fails() {
    let stored = hash("welcome123");

    bin()
        .env("PASSPROOF_PASSWORD", "welcome124")
        .arg("verify")
        .arg(&stored)
        .assert()
        .failure()
        .stderr(predicate::str::contains("password does not match"));
}

#[test]
fn password_from_stdin() {
    let stored = hash("piped");

    bin()
        .env_remove("PASSPROOF_PASSWORD")
        .arg("verify")
        .arg(&stored)
        .write_stdin("piped\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("password verified"));
}

#[test]
fn missing_password_fails() {
    bin()
        .env_remove("PASSPROOF_PASSWORD")
        .arg("hash")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No password provided"));
}

#[test]
fn garbage_hash_does_not_verify() {
    bin()
        .env("PASSPROOF_PASSWORD", "pw")
        .arg("verify")
        .arg("AQAAAA==")
        .assert()
        .failure()
        .stderr(predicate::str::contains("password does not match"));
}

#[test]
fn custom_parameters_are_recorded() {
    let output = bin()
        .env("PASSPROOF_PASSWORD", "pw")
        .arg("hash")
        .arg("--prf")
        .arg("sha512")
        .arg("--iterations")
        .arg("2000")
        .arg("--salt-len")
        .arg("32")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stored = String::from_utf8(output.stdout).unwrap();

    let output = bin()
        .arg("inspect")
        .arg("--json")
        .arg(stored.trim())
        .output()
        .unwrap();
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["version"], 1);
    assert_eq!(info["prf"], "sha512");
    assert_eq!(info["iterations"], 2000);
    assert_eq!(info["salt_len"], 32);
    assert_eq!(info["subkey_len"], 32);
}

#[test]
fn parameters_from_environment() {
    let output = bin()
        .env("PASSPROOF_PASSWORD", "pw")
        .env("PASSPROOF_PRF", "sha1")
        .arg("hash")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stored = String::from_utf8(output.stdout).unwrap();

    bin()
        .arg("inspect")
        .arg(stored.trim())
        .assert()
        .success()
        .stdout(predicate::str::contains("sha1"));
}

#[test]
fn weaker_hash_recommends_rehash() {
    let output = bin()
        .env("PASSPROOF_PASSWORD", "pw")
        .arg("hash")
        .arg("--iterations")
        .arg("10")
        .output()
        .unwrap();
    let stored = String::from_utf8(output.stdout).unwrap();

    bin()
        .env("PASSPROOF_PASSWORD", "pw")
        .arg("verify")
        .arg(stored.trim())
        .assert()
        .success()
        .stdout(predicate::str::contains("rehash recommended"));
}

#[test]
fn invalid_parameters_are_rejected() {
    bin()
        .env("PASSPROOF_PASSWORD", "pw")
        .arg("hash")
        .arg("--salt-len")
        .arg("8")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hash parameters"));

    bin()
        .env("PASSPROOF_PASSWORD", "pw")
        .arg("hash")
        .arg("--prf")
        .arg("md5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown PRF"));
}

#[test]
fn inspect_rejects_malformed_hash() {
    bin()
        .arg("inspect")
        .arg("!!!")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unreadable password hash"));
}
