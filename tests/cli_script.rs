use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn planner(input: &str) -> Command {
    let mut cmd = Command::cargo_bin("planner_core_cli").unwrap();
    cmd.env("PLANNER_CLI_SCRIPT", "1").write_stdin(input.to_string());
    cmd
}

#[test]
fn script_mode_runs_basic_task_flow() {
    planner("task add Buy milk --priority low\ntask list pending\nexit\n")
        .assert()
        .success()
        .stdout(contains("added").and(contains("Buy milk")));
}

#[test]
fn invalid_task_input_warns_and_continues() {
    planner("task add --priority low\ntask list\nexit\n")
        .assert()
        .success()
        .stdout(contains("Usage: task add").and(contains("No all tasks.")));
}

#[test]
fn money_summary_reports_balance() {
    let script = "money add income 1000 Salary\nmoney add expense 300 Food\nmoney summary\nexit\n";
    planner(script)
        .assert()
        .success()
        .stdout(contains("Balance:").and(contains("700.00")));
}

#[test]
fn event_day_lists_events_in_time_order() {
    let script = "event add 2026-03-02 14:00 Review\n\
                  event add 2026-03-02 09:30 Standup --minutes 15\n\
                  event day 2026-03-02\nexit\n";
    let assert = planner(script).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let standup = stdout.find("09:30  Standup").expect("standup listed");
    let review = stdout.find("14:00  Review").expect("review listed");
    assert!(standup < review, "events must be ordered by time:\n{stdout}");
}

#[test]
fn event_week_starts_on_monday() {
    planner("event week 2026-03-05\nexit\n")
        .assert()
        .success()
        .stdout(contains("Week of 2026-03-02"));
}

#[test]
fn diary_search_is_case_insensitive() {
    let script = "diary add Morning I feel happy --mood happy\n\
                  diary add Deadline stressful afternoon --mood stressed\n\
                  diary search HAPPY\nexit\n";
    planner(script)
        .assert()
        .success()
        .stdout(contains("Morning").and(contains("Entries matching")));
}

#[test]
fn dashboard_and_export_reflect_session_state() {
    let script = "task add Ship report\nmoney add income 50 Other\ndashboard\nexport\nexit\n";
    planner(script)
        .assert()
        .success()
        .stdout(
            contains("Pending tasks: 1")
                .and(contains("Balance: 50.00"))
                .and(contains("\"transactions\""))
                .and(contains("Ship report")),
        );
}

#[test]
fn unknown_command_does_not_abort_the_script() {
    planner("frobnicate\ntask list\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `frobnicate`"));
}
