//! End-to-end tests of the `sealcheck` binary (offline paths only).

use assert_cmd::Command;
use predicates::prelude::*;
use sealcheck::{bound_domain, leaf_hash, SealProof};
use tempfile::TempDir;

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("sealcheck").unwrap();
        cmd.env("SEALCHECK_CONFIG", self.dir.path().join("config.toml"))
            .env_remove("SEALCHECK_CRTSH_URL")
            .env_remove("RUST_LOG")
            .arg("--no-color");
        cmd
    }

    fn write_proof(&self, proof: &SealProof) -> std::path::PathBuf {
        let path = self.dir.path().join("proof.json");
        std::fs::write(&path, serde_json::to_vec_pretty(proof).unwrap()).unwrap();
        path
    }
}

fn x_proof() -> SealProof {
    let root = leaf_hash("x");
    SealProof {
        log_value: "x".into(),
        root_hash: root.to_base64(),
        domain: bound_domain(&root, "seal.example"),
        proof: vec![],
    }
}

#[test]
fn offline_validate_succeeds() {
    let env = Env::new();
    let path = env.write_proof(&x_proof());

    env.cmd()
        .args(["validate", "--offline"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("SealCheck:"))
        .stdout(predicate::str::contains("ah22wd1IH3qrKtucJishDtzKNWJOxkwp/8poV7HjAlM="))
        .stdout(predicate::str::contains("Validation OK"));
}

#[test]
fn offline_validate_json_output() {
    let env = Env::new();
    let path = env.write_proof(&x_proof());

    let out = env
        .cmd()
        .args(["-o", "json", "validate", "--offline"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["valid"], true);
    assert_eq!(report["root_hash"], "ah22wd1IH3qrKtucJishDtzKNWJOxkwp/8poV7HjAlM=");
    assert!(report.get("certificate").is_none());
}

#[test]
fn flipped_root_fails() {
    let env = Env::new();
    let mut proof = x_proof();
    proof.root_hash = leaf_hash("y").to_base64();
    let path = env.write_proof(&proof);

    env.cmd()
        .args(["validate", "--offline"])
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Validation OK").not())
        .stderr(predicate::str::contains("validation failed"))
        .stderr(predicate::str::contains("root hash mismatches"));
}

#[test]
fn foreign_domain_fails() {
    let env = Env::new();
    let mut proof = x_proof();
    proof.domain = bound_domain(&leaf_hash("y"), "seal.example");
    let path = env.write_proof(&proof);

    env.cmd()
        .args(["validate", "--offline"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("root hash in domain mismatches"));
}

#[test]
fn malformed_json_fails() {
    let env = Env::new();
    let path = env.dir.path().join("broken.json");
    std::fs::write(&path, "{\"logValue\": ").unwrap();

    env.cmd()
        .args(["validate", "--offline"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to unmarshal proof"));
}

#[test]
fn missing_file_fails() {
    let env = Env::new();

    env.cmd()
        .args(["validate", "--offline"])
        .arg(env.dir.path().join("nope.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read json file"));
}

#[test]
fn offline_rejects_print_cert() {
    let env = Env::new();
    let path = env.write_proof(&x_proof());

    env.cmd()
        .args(["validate", "--offline", "--print-cert"])
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn print_cert_rejected_with_structured_output() {
    let env = Env::new();
    let path = env.write_proof(&x_proof());

    env.cmd()
        .args(["-o", "json", "validate", "--print-cert"])
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--print-cert requires pretty output"));
}

#[test]
fn config_set_then_show() {
    let env = Env::new();

    env.cmd()
        .args(["config", "set", "output_format", "json"])
        .assert()
        .success();

    let out = env.cmd().args(["config", "show"]).output().unwrap();
    assert!(out.status.success());
    let shown: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(shown["output_format"], "json");

    env.cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
