//! Writing, clearing and locating the live log

use crate::prelude::*;

#[test]
fn write_prints_the_stored_entry() {
    let plugin = Plugin::empty();

    let run = plugin
        .plog()
        .args(&["write", "-s", "info", "hello", "world"])
        .passes();

    let stdout = run.stdout();
    assert!(stdout.starts_with('['), "{stdout}");
    assert!(stdout.ends_with("] [INFO] hello world\n"), "{stdout}");
}

#[test]
fn first_write_follows_created_notice() {
    let plugin = Plugin::empty();
    plugin.plog().args(&["write", "first message"]).passes();

    let entries = plugin.plog().args(&["-o", "json", "lines", "0"]).passes().json();

    let texts: Vec<_> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["text"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(texts, vec!["Log created!", "first message"]);
    assert_eq!(entries[0]["severity"], "INFO");
    assert_eq!(entries[1]["severity"], "");
}

#[test]
fn write_reads_text_from_stdin() {
    let plugin = Plugin::empty();

    plugin
        .plog()
        .args(&["write", "-s", "debug"])
        .stdin("line one\nline two\n")
        .passes();

    let last = plugin.plog().args(&["-o", "json", "last"]).passes().json();
    assert_eq!(last["text"], "line one\nline two");
    assert_eq!(last["severity"], "DEBUG");
}

#[test]
fn multi_line_entries_are_indented_on_disk() {
    let plugin = Plugin::with_live_log("");

    plugin
        .plog()
        .args(&["write"])
        .stdin("shell: echo hi\nhi\n")
        .passes();

    let content = plugin.read("data/plugin.log");
    assert!(
        content.ends_with("] shell: echo hi\n                             hi\n"),
        "{content}"
    );
}

#[test]
fn write_json_is_stored_compactly() {
    let plugin = Plugin::with_live_log("");

    plugin
        .plog()
        .args(&["write", "--json", "{ \"status\": \"ok\",\n \"count\": 2 }"])
        .passes();

    let last = plugin.plog().args(&["-o", "json", "last"]).passes().json();
    assert_eq!(last["text"], "{\"count\":2,\"status\":\"ok\"}");
}

#[test]
fn clear_leaves_a_notice() {
    let plugin = Plugin::with_live_log(SCENARIO_LOG);

    plugin.plog().args(&["clear"]).passes().stdout_eq("Log cleared\n");

    let entries = plugin.plog().args(&["-o", "json", "lines", "0"]).passes().json();
    assert_eq!(entries.as_array().unwrap().len(), 1);
    assert_eq!(entries[0]["text"], "Log cleared!");
    assert_eq!(entries[0]["severity"], "INFO");
}

#[test]
fn clear_without_notice_empties_the_log() {
    let plugin = Plugin::with_live_log(SCENARIO_LOG);

    plugin.plog().args(&["clear", "--no-notice"]).passes();

    assert_eq!(plugin.read("data/plugin.log"), "");
    plugin.plog().args(&["lines", "0"]).passes().stdout_eq("");
}

#[test]
fn path_creates_the_live_file() {
    let plugin = Plugin::empty();
    let expected = plugin.path().canonicalize().unwrap().join("data/plugin.log");

    plugin
        .plog()
        .args(&["path"])
        .passes()
        .stdout_eq(&format!("{}\n", expected.display()));

    assert!(plugin.read("data/plugin.log").contains("] [INFO] Log created!"));
}

#[test]
fn root_defaults_to_current_directory() {
    let plugin = Plugin::empty();
    let expected = plugin.path().canonicalize().unwrap().join("data/plugin.log");

    cli()
        .pwd(plugin.path())
        .args(&["-o", "json", "path"])
        .passes()
        .stdout_has(&expected.display().to_string());
}
