use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn labelscan(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("labelscan").unwrap();
    cmd.env("HOME", home).env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

fn ocr_json(text: &str) -> String {
    serde_json::json!({
        "responses": [{"fullTextAnnotation": {"text": text}}]
    })
    .to_string()
}

#[test]
fn extract_directory_writes_one_line_per_document_with_insights() {
    let home = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();

    let product = data.path().join("326").join("385").join("000").join("1234");
    fs::create_dir_all(&product).unwrap();
    fs::write(product.join("1.json"), ocr_json("Net weight: 250 g")).unwrap();
    fs::write(product.join("2.json"), ocr_json("Lorem ipsum")).unwrap();
    fs::write(product.join("3.json"), r#"{"responses": []}"#).unwrap();
    fs::write(product.join("4.json"), "not json").unwrap();

    let output = labelscan(home.path())
        .arg("extract")
        .arg(data.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);

    let record: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(record["code"], "3263850001234");
    assert_eq!(record["insights"]["weights"]["values"][0]["value"], "250");
    assert_eq!(record["insights"]["weights"]["mentions"][0]["text"], "Net weight:");
    assert!(record["file_path"].as_str().unwrap().ends_with("1.json"));
}

#[test]
fn extract_single_file_to_output_file() {
    let home = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();

    let input = data.path().join("label.json");
    fs::write(&input, ocr_json("EMB 12345A FR\nà conserver entre 2°C et 4°C")).unwrap();
    let out = data.path().join("insights.jsonl");

    labelscan(home.path())
        .arg("extract")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let record: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
    assert_eq!(record["code"], serde_json::Value::Null);
    assert_eq!(record["insights"]["packager_codes"][0]["type"], "fr_emb");
    assert_eq!(
        record["insights"]["storage_instructions"][0]["between"]["max"]["value"],
        "4"
    );
}

#[test]
fn extract_rejects_unrecognized_input() {
    let home = TempDir::new().unwrap();

    labelscan(home.path())
        .arg("extract")
        .arg("no/such/path")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized input"));
}

#[test]
fn text_command_reads_stdin() {
    let home = TempDir::new().unwrap();

    labelscan(home.path())
        .args(["text", "-"])
        .write_stdin("Nutri-Score\n12 Jun 2024")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""nutriscore":[{"text":"Nutri-Score"}]"#))
        .stdout(predicate::str::contains(r#""type":"en""#));
}

#[test]
fn text_command_empty_input_prints_empty_object() {
    let home = TempDir::new().unwrap();

    labelscan(home.path())
        .args(["text", "-"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn text_command_respects_enabled_categories() {
    let home = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();

    let config = data.path().join("config.json");
    fs::write(&config, r#"{"extraction": {"categories": ["best_before_date"]}}"#).unwrap();

    labelscan(home.path())
        .arg("--config")
        .arg(&config)
        .args(["text", "-"])
        .write_stdin("Nutri-Score\n12 Jun 2024")
        .assert()
        .success()
        .stdout(predicate::str::contains("best_before_date"))
        .stdout(predicate::str::contains("nutriscore").not());
}

#[test]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();

    labelscan(home.path())
        .args(["config", "set", "source.timeout_secs", "5"])
        .assert()
        .success();

    labelscan(home.path())
        .args(["config", "get", "source.timeout_secs"])
        .assert()
        .success()
        .stdout(predicate::str::diff("5\n"));
}
