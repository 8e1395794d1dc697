use predicates::prelude::*;

use crate::common::{FileAssert, SAMPLE_TOKEN, TestProject};

#[test]
fn test_missing_configuration_explains_options() {
    let project = TestProject::new().unwrap();
    project.write_token(SAMPLE_TOKEN).unwrap();

    project
        .command()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"))
        .stderr(predicate::str::contains("swift-token-gen.yml"))
        .stderr(predicate::str::contains("-c <config path>"));
}

#[test]
fn test_missing_token_explains_options() {
    let project = TestProject::new().unwrap();
    project.write_config("files: []\n").unwrap();

    project
        .command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Design token file not found"))
        .stderr(predicate::str::contains("-t <token path>"));
}

#[test]
fn test_malformed_token_is_decode_failure() {
    let project = TestProject::new().unwrap();
    project.write_config("files: []\n").unwrap();
    project.write_token("{ not json").unwrap();

    project.command().assert().failure().stderr(predicate::str::contains("Failed to decode"));
}

#[test]
fn test_unknown_top_level_section_is_skipped() {
    let project = TestProject::new().unwrap();
    project.write_token(SAMPLE_TOKEN).unwrap();
    project
        .write_config(
            "\
fonts:
  - output: Fonts.swift
xcassets:
  colors:
    - output: Colors.xcassets
      input:
        keys: [colors, light]
",
        )
        .unwrap();

    project
        .command()
        .assert()
        .success()
        .stderr(predicate::str::contains("Couldn't find a parser for key \"fonts\""));
    FileAssert::exists(project.path("Colors.xcassets/background.colorset/Contents.json"));
    FileAssert::not_exists(project.path("Fonts.swift"));
}

#[test]
fn test_explicit_paths_and_multiple_configs() {
    let project = TestProject::new().unwrap();
    project.write_file("design/tokens.json", SAMPLE_TOKEN).unwrap();
    project.write_file("config/colors.yml", "xcassets:\n  colors:\n    - output: Colors.xcassets\n      input:\n        keys: [colors, light]\n").unwrap();
    project
        .write_file(
            "config/grid.yml",
            "files:\n  - inputs:\n      - keys: [grid, tv]\n    outputs:\n      - template: swift-constants\n        output: Grid.swift\n",
        )
        .unwrap();

    project
        .command()
        .args(["run", "-c", "config/colors.yml", "-c", "config/grid.yml", "-t", "design/tokens.json"])
        .assert()
        .success();

    FileAssert::exists(project.path("Colors.xcassets/accent.colorset/Contents.json"));
    FileAssert::contains(project.path("Grid.swift"), "public enum DesignTokens {");
}

#[test]
fn test_quiet_suppresses_progress() {
    let project = TestProject::new().unwrap();
    project.write_token(SAMPLE_TOKEN).unwrap();
    project.write_config("fonts: []\n").unwrap();

    project.command().arg("--quiet").assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn test_templates_list() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .args(["templates", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("swift-constants"))
        .stdout(predicate::str::contains("swiftui-colors"))
        .stdout(predicate::str::contains("color-contents"));
}
