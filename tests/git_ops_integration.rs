use relnotes::utils::testing::TestGitRepo;
use relnotes::{Branch, GitOps, GitRef, Project, PullRequestSource, RelnotesConfig};
use tempfile::TempDir;

/// dev history: a tagged release followed by merged pull requests
fn release_history() -> (TempDir, TestGitRepo) {
    let temp_dir = TempDir::new().unwrap();
    let repo = TestGitRepo::init(temp_dir.path()).unwrap();

    repo.commit("Initial commit").unwrap();
    repo.merge_pr(1, "Add uart component").unwrap();
    repo.tag("2024.2.0").unwrap();

    repo.merge_pr(2, "Add BME680 gas sensor").unwrap();
    repo.commit("Merge branch 'beta' into dev").unwrap();
    repo.merge_pr(3, "Fix OTA timeout").unwrap();
    repo.merge_pr(4, "Bump esptool to 4.7").unwrap();

    (temp_dir, repo)
}

#[test]
fn test_integration_prs_between_tag_and_branch() {
    let (_temp_dir, repo) = release_history();

    let numbers = GitOps::prs_between(
        repo.path(),
        &GitRef::from_string("2024.2.0"),
        &GitRef::from_string("dev"),
    )
    .unwrap();

    // newest first, merge commits without a number are skipped
    assert_eq!(numbers, vec![4, 3, 2]);
}

#[test]
fn test_integration_prs_between_same_ref_is_empty() {
    let (_temp_dir, repo) = release_history();

    let numbers = GitOps::prs_between(
        repo.path(),
        &GitRef::from_string("dev"),
        &GitRef::from_string("dev"),
    )
    .unwrap();
    assert!(numbers.is_empty());
}

#[test]
fn test_integration_prs_between_by_hash() {
    let (_temp_dir, repo) = release_history();
    let head = repo.head_commit_id().unwrap();

    let numbers = GitOps::prs_between(
        repo.path(),
        &GitRef::Tag("2024.2.0".to_string()),
        &GitRef::from_string(&head),
    )
    .unwrap();
    assert_eq!(numbers, vec![4, 3, 2]);
}

#[test]
fn test_integration_unknown_ref() {
    let (_temp_dir, repo) = release_history();

    let result = GitOps::prs_between(
        repo.path(),
        &GitRef::from_string("2023.1.0"),
        &GitRef::from_string("dev"),
    );
    assert!(matches!(result, Err(relnotes::Error::RefNotFound { .. })));
}

#[test]
fn test_integration_repeated_subject_counted_once() {
    let (_temp_dir, repo) = release_history();
    repo.merge_pr(5, "Fix wifi reconnect").unwrap();
    repo.merge_pr(5, "Fix wifi reconnect").unwrap();

    let numbers = GitOps::prs_between(
        repo.path(),
        &GitRef::from_string("2024.2.0"),
        &GitRef::Head,
    )
    .unwrap();
    assert_eq!(numbers, vec![5, 4, 3, 2]);
}

#[test]
fn test_integration_release_branch_history() {
    let (_temp_dir, repo) = release_history();
    repo.checkout_branch("2024.2.0").unwrap();
    repo.create_branch("release").unwrap();
    repo.checkout_branch("release").unwrap();
    repo.merge_pr(3, "Fix OTA timeout").unwrap();

    let numbers = GitOps::prs_between(
        repo.path(),
        &GitRef::from_string("dev"),
        &GitRef::from_string("release"),
    )
    .unwrap();
    assert_eq!(numbers, vec![3]);
}

#[test]
fn test_integration_project_lists_branch_history() {
    let (_temp_dir, repo) = release_history();
    let project = Project::new(repo.path(), &RelnotesConfig::default()).unwrap();
    let head = project.branch_ref(Branch::Dev).unwrap();
    let numbers = project
        .prs_between(&GitRef::from_string("2024.2.0"), &head)
        .unwrap();

    assert_eq!(numbers, vec![4, 3, 2]);
    assert_eq!(
        project.path().canonicalize().unwrap(),
        repo.path().canonicalize().unwrap()
    );
}

#[test]
fn test_integration_repository_detection() {
    let (_temp_dir, repo) = release_history();
    let nested = repo.path().join("docs");
    std::fs::create_dir(&nested).unwrap();

    assert!(GitOps::is_repository(repo.path()).unwrap());
    let root = GitOps::detect_repository_root(&nested).unwrap();
    assert_eq!(
        root.canonicalize().unwrap(),
        repo.path().canonicalize().unwrap()
    );
}
