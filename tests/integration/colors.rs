use crate::common::{FileAssert, SAMPLE_TOKEN, TestProject};

const COLORS_CONFIG: &str = "\
xcassets:
  colors:
    - output: Generated/Colors.xcassets
      input:
        keys: [colors, light]
      adaptive:
        keys: [dark, colors]
      process:
        addPrefix: app
";

#[test]
fn test_adaptive_color_catalog() {
    let project = TestProject::new().unwrap();
    project.write_token(SAMPLE_TOKEN).unwrap();
    project.write_config(COLORS_CONFIG).unwrap();

    project.run_tokengen(&[]).unwrap().assert_success();

    let catalog = project.path("Generated/Colors.xcassets");
    FileAssert::exists(catalog.join("Contents.json"));
    FileAssert::exists(catalog.join("appAccent.colorset/Contents.json"));

    let background = project.read_json("Generated/Colors.xcassets/appBackground.colorset/Contents.json").unwrap();
    let variants = background["colors"].as_array().unwrap();
    assert_eq!(variants.len(), 2);
    assert_eq!(variants[0]["color"]["color-space"], "srgb");
    assert_eq!(variants[0]["color"]["components"]["red"], "0xFF");
    assert_eq!(variants[0]["color"]["components"]["alpha"], "1.000");
    assert_eq!(variants[1]["appearances"][0]["value"], "dark");
    assert_eq!(variants[1]["color"]["components"]["red"], "0x00");

    // Same hex in light and dark: no dark appearance
    let accent = project.read_json("Generated/Colors.xcassets/appAccent.colorset/Contents.json").unwrap();
    assert_eq!(accent["colors"].as_array().unwrap().len(), 1);
}

#[test]
fn test_color_space_from_params() {
    let project = TestProject::new().unwrap();
    project.write_token(SAMPLE_TOKEN).unwrap();
    project
        .write_config(
            "\
xcassets:
  colors:
    - output: Colors.xcassets
      input:
        keys: [colors, light]
      params:
        colorSpace: display-p3
",
        )
        .unwrap();

    project.run_tokengen(&[]).unwrap().assert_success();

    let manifest = project.read_json("Colors.xcassets/background.colorset/Contents.json").unwrap();
    assert_eq!(manifest["colors"][0]["color"]["color-space"], "display-p3");
}

#[test]
fn test_unknown_catalog_key_fails() {
    let project = TestProject::new().unwrap();
    project.write_token(SAMPLE_TOKEN).unwrap();
    project
        .write_config(
            "\
xcassets:
  fonts:
    - output: Fonts.xcassets
",
        )
        .unwrap();

    project
        .run_tokengen(&[])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Invalid configuration entry for key 'fonts'");
    FileAssert::not_exists(project.path("Fonts.xcassets"));
}

#[test]
fn test_missing_subtoken_fails() {
    let project = TestProject::new().unwrap();
    project.write_token(SAMPLE_TOKEN).unwrap();
    project
        .write_config(
            "\
xcassets:
  colors:
    - output: Colors.xcassets
      input:
        keys: [colors, sepia]
",
        )
        .unwrap();

    project
        .run_tokengen(&[])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Failed to retrieve subtoken for keys: colors, sepia");
}
