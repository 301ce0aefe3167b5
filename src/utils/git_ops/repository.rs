use super::types::{GitRef, pr_numbers_from_subjects};
use crate::error::{Error, Result};
use gix;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

pub struct GitOps;

impl GitOps {
    pub fn new() -> Self {
        Self
    }

    /// detect root of the repository (path as a result)
    pub fn detect_repository_root<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
        let path = path.as_ref();

        // if it's a file, use its parent directory for discovery
        let check_path = if path.is_file() {
            match path.parent() {
                Some(parent) => parent,
                None => {
                    return Err(Error::RepositoryNotFound {
                        path: path.to_path_buf(),
                    });
                }
            }
        } else {
            path
        };

        let repo = gix::discover(check_path)?;

        let root_path = if let Some(work_dir) = repo.work_dir() {
            work_dir.to_path_buf()
        } else {
            // bare repository - return the git directory
            repo.git_dir().to_path_buf()
        };

        Ok(root_path)
    }

    /// detect if the given path is inside a repository
    pub fn is_repository<P: AsRef<Path>>(path: P) -> Result<bool> {
        let path = path.as_ref();

        let check_path = if path.is_file() {
            match path.parent() {
                Some(parent) => parent,
                None => return Ok(false),
            }
        } else {
            path
        };

        match gix::discover(check_path) {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }

    /// resolve git reference to commit hash
    pub fn resolve_ref<P: AsRef<Path>>(repo_path: P, git_ref: &GitRef) -> Result<String> {
        let repo_path = repo_path.as_ref();
        let repo = gix::discover(repo_path)?;

        let commit_id = match git_ref {
            GitRef::Hash(hash) => {
                let object_id =
                    gix::ObjectId::from_hex(hash.as_bytes()).map_err(|_| Error::InvalidRef {
                        ref_name: hash.clone(),
                    })?;

                if repo.find_object(object_id).is_ok() {
                    hash.clone()
                } else {
                    return Err(Error::RefNotFound {
                        ref_name: hash.clone(),
                    });
                }
            }
            GitRef::Head => {
                let head_commit = repo
                    .head_commit()
                    .map_err(|e| Error::GitError(Box::new(e)))?;
                head_commit.id().to_string()
            }
            GitRef::Branch(branch_name) => {
                // release tags are passed as plain names too
                let reference = repo
                    .find_reference(&format!("refs/heads/{}", branch_name))
                    .or_else(|_| {
                        repo.find_reference(&format!("refs/remotes/origin/{}", branch_name))
                    })
                    .or_else(|_| repo.find_reference(&format!("refs/tags/{}", branch_name)))
                    .or_else(|_| repo.find_reference(branch_name))
                    .map_err(|_| Error::RefNotFound {
                        ref_name: branch_name.clone(),
                    })?;

                let commit = reference
                    .into_fully_peeled_id()
                    .map_err(|e| Error::GitError(Box::new(e)))?;
                commit.to_string()
            }
            GitRef::Tag(tag_name) => {
                let reference = repo
                    .find_reference(&format!("refs/tags/{}", tag_name))
                    .map_err(|_| Error::RefNotFound {
                        ref_name: tag_name.clone(),
                    })?;

                let commit = reference
                    .into_fully_peeled_id()
                    .map_err(|e| Error::GitError(Box::new(e)))?;
                commit.to_string()
            }
        };

        Ok(commit_id)
    }

    /// subjects of the commits reachable from `to_ref` but not from `from_ref`,
    /// newest first
    pub fn commit_subjects_between<P: AsRef<Path>>(
        repo_path: P,
        from_ref: &GitRef,
        to_ref: &GitRef,
    ) -> Result<Vec<String>> {
        let repo_path = repo_path.as_ref();

        let from_hash = Self::resolve_ref(repo_path, from_ref)?;
        let to_hash = Self::resolve_ref(repo_path, to_ref)?;

        if from_hash == to_hash {
            return Ok(Vec::new());
        }

        // use git command for the range walk (simpler than gix revwalk hiding)
        let output = Command::new("git")
            .arg("-C")
            .arg(repo_path)
            .arg("log")
            .arg(format!("{}..{}", from_hash, to_hash))
            .arg("--pretty=format:%s")
            .output()
            .map_err(Error::IoError)?;

        if !output.status.success() {
            return Err(Error::GitError(Box::new(std::io::Error::other(format!(
                "git log failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )))));
        }

        let subjects: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect();

        debug!(
            from = %from_ref,
            to = %to_ref,
            "found {} commits",
            subjects.len()
        );
        Ok(subjects)
    }

    /// pull request numbers merged between two refs
    pub fn prs_between<P: AsRef<Path>>(
        repo_path: P,
        from_ref: &GitRef,
        to_ref: &GitRef,
    ) -> Result<Vec<u64>> {
        let subjects = Self::commit_subjects_between(repo_path, from_ref, to_ref)?;
        Ok(pr_numbers_from_subjects(subjects.iter().map(String::as_str)))
    }
}

impl Default for GitOps {
    fn default() -> Self {
        Self::new()
    }
}
