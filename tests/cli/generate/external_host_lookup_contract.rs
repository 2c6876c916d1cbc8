use crate::harness::{SAMPLE_CONFIG, TestContext};
use assert_cmd::Command;
use predicates::prelude::*;

fn cli(ctx: &TestContext) -> Command {
    let mut cmd = ctx.cli();
    cmd.env("NO_PROXY", "127.0.0.1,localhost").env("no_proxy", "127.0.0.1,localhost");
    cmd
}

fn external_config(lookup_url: &str, fallback: &str) -> String {
    format!(
        "{SAMPLE_CONFIG}\n[host]\nstrategy = \"external\"\nlookup_url = \"{lookup_url}\"\ntimeout_secs = 2\nfallback = \"{fallback}\"\n"
    )
}

#[test]
fn summary_uses_looked_up_address() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/ip").with_status(200).with_body("203.0.113.9\n").create();

    let ctx = TestContext::new();
    ctx.write_config(&external_config(&format!("{}/ip", server.url()), "localhost"));

    cli(&ctx).assert().success();

    mock.assert();
    let summary = ctx.read("team_urls.md");
    assert!(summary.contains("- alpha: http://203.0.113.9:6000\n"));
    assert!(summary.contains("- beta: http://203.0.113.9:6001\n"));
}

#[test]
fn failed_lookup_falls_back_with_warning() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/ip").with_status(503).create();

    let ctx = TestContext::new();
    ctx.write_config(&external_config(&format!("{}/ip", server.url()), "fleet.local"));

    cli(&ctx)
        .assert()
        .success()
        .stderr(predicate::str::contains("host lookup failed"));

    assert!(ctx.read("team_urls.md").contains("- alpha: http://fleet.local:6000\n"));
}

#[test]
fn failed_lookup_without_fallback_aborts() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/ip").with_status(200).with_body("<html>busy</html>").create();

    let ctx = TestContext::new();
    ctx.write_config(&external_config(&format!("{}/ip", server.url()), ""));

    cli(&ctx)
        .assert()
        .failure()
        .stderr(predicate::str::contains("External address lookup via"))
        .stderr(predicate::str::contains("not an IP address"));

    ctx.assert_no_artifacts(".");
}
