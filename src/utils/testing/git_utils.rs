use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Git repository with a scripted commit history, driven through the git binary
pub struct TestGitRepo {
    repo_path: PathBuf,
}

impl TestGitRepo {
    /// Initialize a new git repository at the given path
    pub fn init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Self {
            repo_path: path.as_ref().to_path_buf(),
        };

        repo.git(&["init", "--initial-branch=dev"])?;
        repo.git(&["config", "user.name", "Test User"])?;
        repo.git(&["config", "user.email", "test@example.com"])?;
        // Disable GPG signing for tests
        repo.git(&["config", "commit.gpgsign", "false"])?;
        repo.git(&["config", "tag.gpgsign", "false"])?;

        Ok(repo)
    }

    /// Create an empty commit with the given subject
    pub fn commit(&self, message: &str) -> Result<()> {
        self.git(&["commit", "--allow-empty", "-m", message])?;
        Ok(())
    }

    /// Simulate a squash-merged pull request
    pub fn merge_pr(&self, number: u64, title: &str) -> Result<()> {
        self.commit(&format!("{} (#{})", title, number))
    }

    /// Create a new branch at HEAD
    pub fn create_branch(&self, branch_name: &str) -> Result<()> {
        self.git(&["branch", branch_name])?;
        Ok(())
    }

    /// Checkout a branch
    pub fn checkout_branch(&self, branch_name: &str) -> Result<()> {
        self.git(&["checkout", "-q", branch_name])?;
        Ok(())
    }

    /// Tag HEAD
    pub fn tag(&self, name: &str) -> Result<()> {
        self.git(&["tag", name])?;
        Ok(())
    }

    /// Get the repository path
    pub fn path(&self) -> &Path {
        &self.repo_path
    }

    /// Get current HEAD commit ID
    pub fn head_commit_id(&self) -> Result<String> {
        let stdout = self.git(&["rev-parse", "HEAD"])?;
        Ok(stdout.trim().to_string())
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(Error::IoError)?;

        if !output.status.success() {
            return Err(Error::GitError(Box::new(std::io::Error::other(format!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr)
            )))));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
