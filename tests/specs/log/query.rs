//! Line-range and time-window queries

use crate::prelude::*;

#[test]
fn lines_slices_by_index() {
    let plugin = Plugin::with_live_log(SCENARIO_LOG);

    plugin.plog().args(&["lines", "1", "3"]).passes().stdout_eq(
        "\
[2026-01-15 10:00:01.000000] B
[2026-01-15 10:00:02.000000] C
[2026-01-15 10:00:03.000000] D
",
    );
}

#[test]
fn tail_shows_the_last_entries() {
    let plugin = Plugin::with_live_log(SCENARIO_LOG);
    let expected = "\
[2026-01-15 10:00:05.000000] [INFO] F
[2026-01-15 10:00:06.000000] [WARNING] G
";

    plugin.plog().args(&["tail", "2"]).passes().stdout_eq(expected);
    plugin.plog().args(&["lines", "0", "-2"]).passes().stdout_eq(expected);
}

#[test]
fn tail_omits_earlier_entries() {
    let plugin = Plugin::with_live_log(SCENARIO_LOG);

    plugin
        .plog()
        .args(&["tail", "3"])
        .passes()
        .stdout_has("[DEBUG] E")
        .stdout_lacks("] D\n")
        .stdout_lacks("] A\n");
}

#[test]
fn tail_zero_shows_everything() {
    let plugin = Plugin::with_live_log(SCENARIO_LOG);

    plugin.plog().args(&["tail", "0"]).passes().stdout_eq(SCENARIO_LOG);
}

#[test]
fn out_of_range_lines_are_empty() {
    let plugin = Plugin::with_live_log(SCENARIO_LOG);

    plugin.plog().args(&["lines", "10", "1"]).passes().stdout_eq("");
    plugin.plog().args(&["line", "7"]).passes().stdout_eq("");
}

#[test]
fn extreme_indexes_are_empty() {
    let plugin = Plugin::with_live_log(SCENARIO_LOG);

    plugin
        .plog()
        .args(&["lines", "9223372036854775807", "1"])
        .passes()
        .stdout_eq("");
    plugin
        .plog()
        .args(&["lines", "0", "-9223372036854775808"])
        .passes()
        .stdout_eq("");
    plugin
        .plog()
        .args(&["line", "-9223372036854775808"])
        .passes()
        .stdout_eq("");
    plugin
        .plog()
        .args(&["tail", "9223372036854775807"])
        .passes()
        .stdout_eq("");
}

#[test]
fn line_keeps_severity() {
    let plugin = Plugin::with_live_log(SCENARIO_LOG);

    plugin
        .plog()
        .args(&["line", "4"])
        .passes()
        .stdout_eq("[2026-01-15 10:00:04.000000] [DEBUG] E\n");
}

#[test]
fn negative_line_counts_from_the_end() {
    let plugin = Plugin::with_live_log(SCENARIO_LOG);

    let entry = plugin.plog().args(&["-o", "json", "line", "-1"]).passes().json();

    assert_eq!(entry["text"], "G");
    assert_eq!(entry["severity"], "WARNING");
    assert_eq!(entry["timestamp"], "2026-01-15 10:00:06.000000");
}

#[test]
fn first_and_last() {
    let plugin = Plugin::with_live_log(SCENARIO_LOG);

    plugin
        .plog()
        .args(&["first"])
        .passes()
        .stdout_eq("[2026-01-15 10:00:00.000000] A\n");
    plugin
        .plog()
        .args(&["last"])
        .passes()
        .stdout_eq("[2026-01-15 10:00:06.000000] [WARNING] G\n");
}

#[test]
fn first_of_empty_log_is_null_in_json() {
    let plugin = Plugin::with_live_log("");

    plugin.plog().args(&["-o", "json", "first"]).passes().stdout_eq("null\n");
}

#[test]
fn between_includes_start_and_excludes_end() {
    let plugin = Plugin::with_live_log(SCENARIO_LOG);

    plugin
        .plog()
        .args(&["between", "2026-01-15 10:00:01", "2026-01-15 10:00:03"])
        .passes()
        .stdout_eq(
            "\
[2026-01-15 10:00:01.000000] B
[2026-01-15 10:00:02.000000] C
",
        );
}

#[test]
fn between_merges_archives_before_live_entries() {
    let plugin = Plugin::with_live_log(SCENARIO_LOG);
    plugin.file(
        "data/logs/2026-01-14.log",
        "[2026-01-14 23:59:59.999999] [INFO] yesterday\n",
    );
    plugin.file(
        "data/logs/2026-01-13.log",
        "[2026-01-13 08:00:00.000000] too early\n",
    );

    plugin
        .plog()
        .args(&["between", "2026-01-14", "2026-01-15 10:00:01"])
        .passes()
        .stdout_eq(
            "\
[2026-01-14 23:59:59.999999] [INFO] yesterday
[2026-01-15 10:00:00.000000] A
",
        );
}

#[test]
fn between_end_defaults_to_now() {
    let plugin = Plugin::with_live_log(SCENARIO_LOG);

    plugin
        .plog()
        .args(&["between", "2026-01-15 10:00:05"])
        .passes()
        .stdout_eq(
            "\
[2026-01-15 10:00:05.000000] [INFO] F
[2026-01-15 10:00:06.000000] [WARNING] G
",
        );
}

#[test]
fn text_before_the_first_entry_is_ignored() {
    let plugin = Plugin::with_live_log(&format!("stray text\n{SCENARIO_LOG}"));

    plugin
        .plog()
        .args(&["first"])
        .passes()
        .stdout_eq("[2026-01-15 10:00:00.000000] A\n");
}
