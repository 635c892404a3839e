use crate::config::Config;
use crate::formatting::{format_issue_line, format_issues};
use crate::models::Issue;

#[test]
fn test_format_issues_in_order() {
    let config = Config::for_jira_url("https://tracker");
    let issues = vec![Issue::new("A-1", "Fix bug"), Issue::new("A-2", "Add test")];

    assert_eq!(
        format_issues(&issues, &config),
        "(https://tracker/browse/A-1) Fix bug\n(https://tracker/browse/A-2) Add test\n"
    );
}

#[test]
fn test_format_no_issues() {
    let config = Config::for_jira_url("https://tracker");
    assert_eq!(format_issues(&[], &config), "");
}

#[test]
fn test_line_count_matches_issue_count() {
    let config = Config::for_jira_url("https://tracker");
    let issues: Vec<Issue> = (1..=7)
        .map(|n| Issue::new(format!("QA-{}", n), format!("Summary {}", n)))
        .collect();

    let text = format_issues(&issues, &config);
    assert_eq!(text.lines().count(), issues.len());
    assert!(text.ends_with('\n'));
}

#[test]
fn test_format_issue_line_keeps_summary_verbatim() {
    let config = Config::for_jira_url("https://tracker");
    let issue = Issue::new("A-9", "결제 화면 (iOS) 깨짐");
    assert_eq!(
        format_issue_line(&issue, &config),
        "(https://tracker/browse/A-9) 결제 화면 (iOS) 깨짐\n"
    );
}
