//! Integration tests for the staging/commit workflow against real repositories.

mod common;

use common::TestRepo;

fn is_full_hash(hash: &str) -> bool {
    hash.len() == 40 && hash.chars().all(|c| c.is_ascii_hexdigit())
}

#[test]
fn test_auto_commit_whole_tree() {
    let repo = TestRepo::new();
    let agent = repo.agent();
    repo.write_file("notes.txt", "remember this\n");

    let result = agent.auto_commit_task("1.1 Create basic functionality", None);

    assert!(result.success, "error: {:?}", result.error_message);
    assert_eq!(result.message, "feat: [Task 1.1] Create basic functionality");
    assert!(is_full_hash(result.commit_hash.as_deref().unwrap()));
    assert_eq!(result.files_changed, vec!["notes.txt"]);
    assert!(result.error_message.is_none());
    assert!(result.validate().is_ok());

    // The working tree is clean afterwards
    assert!(!agent.status().unwrap().has_changes);
}

#[test]
fn test_auto_commit_with_explicit_files_leaves_others_untouched() {
    let repo = TestRepo::new();
    let agent = repo.agent();
    repo.write_file("wanted.txt", "in\n");
    repo.write_file("unwanted.txt", "out\n");

    let files = vec!["wanted.txt".to_string()];
    let result = agent.auto_commit_task("3.1 Fix bug in validation logic", Some(&files));

    assert!(result.success, "error: {:?}", result.error_message);
    assert_eq!(result.message, "fix: [Task 3.1] Fix bug in validation logic");
    assert_eq!(result.files_changed, vec!["wanted.txt"]);

    let status = agent.status().unwrap();
    assert_eq!(status.untracked_files, vec!["unwanted.txt"]);
}

#[test]
fn test_auto_commit_clean_tree_reports_nothing_staged() {
    let repo = TestRepo::new();
    let agent = repo.agent();
    repo.write_file("base.txt", "v1\n");
    repo.commit_all("init");

    let result = agent.auto_commit_task("2.1 Add something", None);

    assert!(!result.success);
    assert_eq!(
        result.error_message.as_deref(),
        Some("No staged changes to commit")
    );
    assert!(result.commit_hash.is_none());
}

#[test]
fn test_commit_with_details_requires_staged_changes() {
    let repo = TestRepo::new();
    let agent = repo.agent();
    repo.write_file("base.txt", "v1\n");
    repo.commit_all("init");

    // An unstaged modification alone is not enough
    repo.write_file("base.txt", "v2\n");
    let result = agent.commit_with_details("feat: [Task 9.9] Never lands", None);

    assert!(!result.success);
    assert_eq!(
        result.error_message.as_deref(),
        Some("No staged changes to commit")
    );
}

#[test]
fn test_commit_with_details_commits_previously_staged_files() {
    let repo = TestRepo::new();
    let agent = repo.agent();
    repo.write_file("a.txt", "a\n");

    assert!(agent.stage_files(None).unwrap());
    let result = agent.commit_with_details("feat: [Task 4.2] Add validation method", None);

    assert!(result.success, "error: {:?}", result.error_message);
    assert_eq!(result.files_changed, vec!["a.txt"]);
    assert!(is_full_hash(result.commit_hash.as_deref().unwrap()));
}

#[test]
fn test_stage_files_rejects_missing_path() {
    let repo = TestRepo::new();
    let agent = repo.agent();

    let files = vec!["does_not_exist.txt".to_string()];
    assert!(!agent.stage_files(Some(&files)).unwrap());
}

#[test]
fn test_commit_staged_boolean_flow() {
    let repo = TestRepo::new();
    let agent = repo.agent();
    repo.write_file("a.txt", "a\n");

    // Nothing staged yet
    assert!(!agent.commit_staged("feat: too early").unwrap());

    assert!(agent.stage_files(None).unwrap());
    assert!(agent.commit_staged("feat: just right").unwrap());

    // Tree is clean again
    assert!(!agent.commit_staged("feat: too late").unwrap());
}

#[test]
fn test_successive_auto_commits_build_history() {
    let repo = TestRepo::new();
    let agent = repo.agent();

    repo.write_file("one.txt", "1\n");
    let first = agent.auto_commit_task("1.1 Create module", None);
    assert!(first.success);

    repo.write_file("two.txt", "2\n");
    let second = agent.auto_commit_task("1.2 Restructure module layout", None);
    assert!(second.success);
    assert_eq!(second.message, "refactor: [Task 1.2] Restructure module layout");

    assert_ne!(first.commit_hash, second.commit_hash);
}
