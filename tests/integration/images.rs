use crate::common::{FileAssert, TestProject};

#[test]
fn test_image_catalog_with_dark_variant() {
    let project = TestProject::new().unwrap();
    project.write_token("{}").unwrap();
    project.write_file("Images/icons/arrow-left.svg", "<svg light/>").unwrap();
    project.write_file("Images/icons/star.pdf", "%PDF star").unwrap();
    project.write_file("Images/icons/.DS_Store", "junk").unwrap();
    project.write_file("Images/dark/arrow_left.svg", "<svg dark/>").unwrap();
    project.write_file("Images/dark/moon.svg", "<svg moon/>").unwrap();
    project
        .write_config(
            "\
xcassets:
  images:
    - output: Generated/Icons.xcassets
      input: Images/icons
      adaptive:
        input: Images/dark
      process:
        addSuffix: Icon
      properties:
        template-rendering-intent: template
",
        )
        .unwrap();

    project.run_tokengen(&[]).unwrap().assert_success();

    let catalog = project.path("Generated/Icons.xcassets");
    FileAssert::exists(catalog.join("Contents.json"));
    FileAssert::equals(catalog.join("arrowLeftIcon.imageset/arrowLeftIcon.svg"), "<svg light/>");
    FileAssert::equals(catalog.join("arrowLeftIcon.imageset/arrowLeftIconDark.svg"), "<svg dark/>");
    FileAssert::equals(catalog.join("starIcon.imageset/starIcon.pdf"), "%PDF star");
    FileAssert::not_exists(catalog.join("moonIcon.imageset"));
    assert_eq!(std::fs::read_dir(&catalog).unwrap().count(), 3);

    let manifest =
        project.read_json("Generated/Icons.xcassets/arrowLeftIcon.imageset/Contents.json").unwrap();
    assert_eq!(manifest["images"][0]["filename"], "arrowLeftIcon.svg");
    assert_eq!(manifest["images"][1]["filename"], "arrowLeftIconDark.svg");
    assert_eq!(manifest["images"][1]["appearances"][0]["value"], "dark");
    assert_eq!(manifest["properties"]["template-rendering-intent"], "template");

    let star = project.read_json("Generated/Icons.xcassets/starIcon.imageset/Contents.json").unwrap();
    assert_eq!(star["images"].as_array().unwrap().len(), 1);
}

#[test]
fn test_rerun_overwrites_images() {
    let project = TestProject::new().unwrap();
    project.write_token("{}").unwrap();
    project.write_file("Images/logo.png", "v1").unwrap();
    project
        .write_config(
            "\
xcassets:
  images:
    - output: Assets.xcassets
      input: Images
",
        )
        .unwrap();

    project.run_tokengen(&[]).unwrap().assert_success();
    project.write_file("Images/logo.png", "v2").unwrap();
    project.run_tokengen(&[]).unwrap().assert_success();

    FileAssert::equals(project.path("Assets.xcassets/logo.imageset/logo.png"), "v2");
}
