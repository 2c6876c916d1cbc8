use crate::harness::{ARTIFACTS, TestContext};

#[test]
fn rerun_with_unchanged_config_is_byte_identical() {
    let ctx = TestContext::new();
    ctx.write_sample_config();

    ctx.cli().assert().success();
    let first: Vec<String> = ARTIFACTS.iter().map(|name| ctx.read(name)).collect();

    ctx.cli().assert().success();
    let second: Vec<String> = ARTIFACTS.iter().map(|name| ctx.read(name)).collect();

    assert_eq!(first, second);
}

#[test]
fn existing_files_are_overwritten() {
    let ctx = TestContext::new();
    ctx.write_sample_config();
    ctx.write_file("team_urls.md", "stale content from an earlier layout\n");

    ctx.cli().assert().success();

    let summary = ctx.read("team_urls.md");
    assert!(!summary.contains("stale"));
    assert!(summary.starts_with("# MLflow Multi-Team Local Setup\n"));
}

#[test]
fn changed_team_list_reassigns_ports() {
    let ctx = TestContext::new();
    ctx.write_sample_config();
    ctx.cli().assert().success();

    ctx.write_config(
        "[teams]\nteam_list = [\"beta\"]\n\n[server]\nbase_port = 6000\n\n[database]\nlocal_password = \"secret\"\n",
    );
    ctx.cli().assert().success();

    let summary = ctx.read("team_urls.md");
    assert!(summary.contains("- beta: http://localhost:6000\n"));
    assert!(!summary.contains("alpha"));
}
