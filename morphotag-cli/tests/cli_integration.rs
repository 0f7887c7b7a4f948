//! Integration tests for the morphotag CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DEMO_MODEL: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../models/czech-demo.toml");

fn morphotag() -> Command {
    let mut cmd = Command::cargo_bin("morphotag").unwrap();
    cmd.env_remove("MORPHOTAG_MODEL").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_tag_stdin_vertical() {
    morphotag()
        .args(["tag", "--model", DEMO_MODEL, "--sentences"])
        .write_stdin("Je zima. Bude sněžit.")
        .assert()
        .success()
        .stdout(
            "Je\tbýt\tVB-S---3P-AA---\n\
             zima\tzima-1\tNNFS1-----A----\n\
             .\t.\tZ:-------------\n\
             \n\
             Bude\tbýt\tVB-S---3F-AA---\n\
             sněžit\tsněžit_:T\tVf--------A----\n\
             .\t.\tZ:-------------\n\
             \n",
        );
}

#[test]
fn test_tag_inline_sentences() {
    morphotag()
        .args(["tag", "-m", DEMO_MODEL, "-s", "-f", "inline"])
        .write_stdin("Je zima. Bude sněžit.")
        .assert()
        .success()
        .stdout(
            "Je/být/VB-S---3P-AA--- zima/zima-1/NNFS1-----A---- ././Z:-------------\n\
             Bude/být/VB-S---3F-AA--- sněžit/sněžit_:T/Vf--------A---- ././Z:-------------\n",
        );
}

#[test]
fn test_tag_json_flat_and_grouped() {
    let flat = morphotag()
        .args(["tag", "-m", DEMO_MODEL, "-f", "json"])
        .write_stdin("Je zima. Bude sněžit.")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let flat: serde_json::Value = serde_json::from_slice(&flat).unwrap();
    assert_eq!(flat.as_array().unwrap().len(), 6);
    assert_eq!(flat[4]["lemma"], "sněžit_:T");

    let grouped = morphotag()
        .args(["tag", "-m", DEMO_MODEL, "-f", "json", "--sentences"])
        .write_stdin("Je zima. Bude sněžit.")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let grouped: serde_json::Value = serde_json::from_slice(&grouped).unwrap();
    let sizes: Vec<_> = grouped
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_array().unwrap().len())
        .collect();
    assert_eq!(sizes, [3, 3]);
}

#[test]
fn test_tag_pretokenized_json_input() {
    morphotag()
        .args(["tag", "-m", DEMO_MODEL, "--input-format", "json", "-s", "-f", "inline"])
        .write_stdin(r#"[["Je", "zima"], ["."]]"#)
        .assert()
        .success()
        .stdout("Je/být/VB-S---3P-AA--- zima/zima-1/NNFS1-----A----\n././Z:-------------\n");
}

#[test]
fn test_tag_rejects_flat_word_list() {
    morphotag()
        .args(["tag", "-m", DEMO_MODEL, "--input-format", "json"])
        .write_stdin(r#"["Je", "zima"]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn test_tag_vertical_input_with_guesser() {
    morphotag()
        .args(["tag", "-m", DEMO_MODEL, "--input-format", "vertical", "--guesser", "-f", "inline"])
        .write_stdin("Je\nkrásná\nzima\n\npracovat\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("pracovat/pracovat/Vf--------A----"))
        .stdout(predicate::str::contains("krásná/krásná/X@-------------"));
}

#[test]
fn test_missing_model() {
    morphotag()
        .args(["tag", "-m", "/nonexistent/model.toml"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load model"));
}

#[test]
fn test_model_required() {
    morphotag()
        .args(["tag"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no model given"));
}

#[test]
fn test_model_without_tokenizer_needs_pretokenized_input() {
    let dir = TempDir::new().unwrap();
    let model = dir.path().join("bare.toml");
    fs::write(&model, "[model]\nname = \"bare\"\n").unwrap();

    morphotag()
        .args(["tag", "-m"])
        .arg(&model)
        .write_stdin("Je zima.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no tokenizer defined"));

    morphotag()
        .args(["tag", "--input-format", "vertical", "-m"])
        .arg(&model)
        .write_stdin("Je\nzima\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Je\tJe\tX@-------------"));
}

#[test]
fn test_multiple_files_keep_input_order() {
    let dir = TempDir::new().unwrap();
    let texts = ["Je zima.", "Bude sněžit.", "Děti pijí mléko."];
    for (i, text) in texts.iter().enumerate() {
        fs::write(dir.path().join(format!("doc{i}.txt")), text).unwrap();
    }
    let pattern = dir.path().join("doc*.txt");

    morphotag()
        .args(["tag", "-m", DEMO_MODEL, "-q", "-j", "3", "-f", "inline", "-i"])
        .arg(&pattern)
        .assert()
        .success()
        .stdout(
            "Je/být/VB-S---3P-AA--- zima/zima-1/NNFS1-----A---- ././Z:-------------\n\
             Bude/být/VB-S---3F-AA--- sněžit/sněžit_:T/Vf--------A---- ././Z:-------------\n\
             Děti/dítě/NNFP1-----A---- pijí/pít/VB-P---3P-AA--- mléko/mléko/NNNS4-----A---- ././Z:-------------\n",
        );
}

#[test]
fn test_output_file_and_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("morphotag.toml");
    let output = dir.path().join("out.json");
    fs::write(
        &config,
        format!(
            "[tagger]\nmodel = {:?}\n\n[output]\nformat = \"json\"\npretty_json = false\n",
            DEMO_MODEL
        ),
    )
    .unwrap();

    morphotag()
        .args(["tag", "--config"])
        .arg(&config)
        .arg("--output")
        .arg(&output)
        .write_stdin("Je zima.")
        .assert()
        .success()
        .stdout("");

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written.lines().count(), 1);
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value[1]["word"], "zima");
}

#[test]
fn test_tokenize_command() {
    morphotag()
        .args(["tokenize", "--tokenizer", "czech"])
        .write_stdin("Je zima. Bude sněžit.")
        .assert()
        .success()
        .stdout("Je zima .\nBude sněžit .\n");
}

#[test]
fn test_tokenize_unknown_tokenizer() {
    morphotag()
        .args(["tokenize", "--tokenizer", "klingon"])
        .write_stdin("Qapla'")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tokenizer 'klingon'"));
}

#[test]
fn test_list_commands() {
    morphotag()
        .args(["list", "tokenizers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("czech"))
        .stdout(predicate::str::contains("vertical"));

    morphotag()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("inline"));
}

#[test]
fn test_generate_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("generated.toml");

    morphotag()
        .args(["generate-config", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration template written"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[tagger]"));
    assert!(content.contains("worker_threads = 0"));
}
