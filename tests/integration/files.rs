use crate::common::{FileAssert, SAMPLE_TOKEN, TestProject};

const GRID_TEMPLATE: &str = "\
{{ params.objectName }} ({{ inputs | length }} inputs)
{% for input in inputs -%}
{{ input.params.objectName }}:{% for value in input.values %} {{ value.name }}={{ value.entry.value }}{% endfor %}
{% endfor -%}
";

#[test]
fn test_two_inputs_render_into_one_file() {
    let project = TestProject::new().unwrap();
    project.write_token(SAMPLE_TOKEN).unwrap();
    project.write_file("Templates/Grid.tera", GRID_TEMPLATE).unwrap();
    project
        .write_config(
            "\
files:
  - inputs:
      - keys: [grid, tv]
        params:
          objectName: TV
      - keys: [grid, tv]
        keysAsNamePrefix: true
        process:
          addPrefix: big
          sortBy: value
        params:
          objectName: BigTV
    outputs:
      - template: Templates/Grid.tera
        output: Generated/Grid.txt
        params:
          objectName: DesignTokenGrid
",
        )
        .unwrap();

    project.run_tokengen(&[]).unwrap().assert_success();

    FileAssert::equals(
        project.path("Generated/Grid.txt"),
        "DesignTokenGrid (2 inputs)\nTV: columns=12 margin=80\nBigTV: bigColumns=12 bigMargin=80\n",
    );
}

#[test]
fn test_bundled_swift_constants() {
    let project = TestProject::new().unwrap();
    project.write_token(SAMPLE_TOKEN).unwrap();
    project
        .write_config(
            "\
files:
  - inputs:
      - keys: [grid, tv]
        params:
          objectName: TV
    outputs:
      - template: swift-constants
        output: Generated/DesignTokenGrid.swift
        params:
          objectName: DesignTokenGrid
",
        )
        .unwrap();

    project.run_tokengen(&[]).unwrap().assert_success();

    let swift = project.path("Generated/DesignTokenGrid.swift");
    FileAssert::contains(&swift, "public enum DesignTokenGrid {");
    FileAssert::contains(&swift, "    public enum TV {");
    FileAssert::contains(&swift, "        public static let margin = 80");
}

#[test]
fn test_missing_template_reports_name() {
    let project = TestProject::new().unwrap();
    project.write_token(SAMPLE_TOKEN).unwrap();
    project
        .write_config(
            "\
files:
  - inputs:
      - keys: [grid]
    outputs:
      - template: Templates/Nope.tera
        output: Out.swift
",
        )
        .unwrap();

    project
        .run_tokengen(&[])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Template 'Templates/Nope.tera' could not be found");
    FileAssert::not_exists(project.path("Out.swift"));
}

#[test]
fn test_missing_keys_prints_guidance() {
    let project = TestProject::new().unwrap();
    project.write_token(SAMPLE_TOKEN).unwrap();
    project
        .write_config(
            "\
files:
  - inputs:
      - params:
          objectName: Phone
    outputs: []
",
        )
        .unwrap();

    project
        .run_tokengen(&[])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Missing required configuration key 'keys'")
        .assert_stderr_contains("Add 'keys' to every input");
}
