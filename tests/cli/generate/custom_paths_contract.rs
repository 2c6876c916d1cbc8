use crate::harness::{SAMPLE_CONFIG, TestContext};

#[test]
fn generate_honours_config_and_output_dir_flags() {
    let ctx = TestContext::new();
    ctx.write_file("fleet/teams.toml", SAMPLE_CONFIG);

    ctx.cli().args(["-c", "fleet/teams.toml", "-o", "deploy/local"]).assert().success();

    ctx.assert_artifacts_exist("deploy/local");
    ctx.assert_no_artifacts(".");
    assert!(ctx.read("deploy/local/team_urls.md").contains("- beta: http://localhost:6001"));
}

#[test]
fn missing_config_does_not_create_output_dir() {
    let ctx = TestContext::new();

    ctx.cli().args(["--output-dir", "out"]).assert().failure();

    assert!(!ctx.work_dir().join("out").exists());
}
