/// Make a branch name safe for use inside a version label.
///
/// Every `/` becomes `.` and every space becomes `_`.
pub fn sanitize(branch: &str) -> String {
    branch.replace('/', ".").replace(' ', "_")
}

/// Represents the current git branch with its release context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
    pub label: String,
    pub is_main: bool,
}

impl BranchContext {
    /// Create a branch context, checking the sanitized name against `main_branches`
    pub fn new<S: AsRef<str>>(name: impl Into<String>, main_branches: &[S]) -> Self {
        let name = name.into();
        let label = sanitize(&name);
        let is_main = main_branches.iter().any(|b| b.as_ref() == label);

        BranchContext {
            name,
            label,
            is_main,
        }
    }

    /// Version suffix for this branch given the commits since the last tag.
    ///
    /// Other branches always get a pre-release label `-<branch>.<N>`.
    /// Main branches get build metadata `+<N>` only when there are new commits.
    pub fn version_label(&self, commits_since_tag: u64) -> String {
        if !self.is_main {
            format!("-{}.{}", self.label, commits_since_tag)
        } else if commits_since_tag > 0 {
            format!("+{}", commits_since_tag)
        } else {
            String::new()
        }
    }
}
