//! Commit message synthesis from free-text task descriptions.

use serde::{Deserialize, Serialize};

/// Conventional commit types emitted by the synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Refactor,
    Test,
}

/// Keyword policy table, checked in order against the lowercased
/// description. First matching row wins; no row means `Feat`.
const TYPE_KEYWORDS: &[(CommitType, &[&str])] = &[
    (CommitType::Test, &["test", "testing"]),
    (CommitType::Fix, &["fix", "bug", "error"]),
    (CommitType::Docs, &["doc", "documentation"]),
    (CommitType::Refactor, &["refactor", "restructure"]),
];

impl CommitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Refactor => "refactor",
            Self::Test => "test",
        }
    }

    /// Pick the commit type for a task description.
    pub fn classify(description: &str) -> Self {
        let lower = description.to_lowercase();
        for (commit_type, keywords) in TYPE_KEYWORDS {
            if keywords.iter().any(|keyword| lower.contains(keyword)) {
                return *commit_type;
            }
        }
        Self::Feat
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CommitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feat" => Ok(Self::Feat),
            "fix" => Ok(Self::Fix),
            "docs" => Ok(Self::Docs),
            "refactor" => Ok(Self::Refactor),
            "test" => Ok(Self::Test),
            _ => Err(format!("Unknown commit type: {}", s)),
        }
    }
}

/// Synthesize a commit message for a task description.
///
/// Template: `<type>: [Task <N>] <Description>`. Deterministic and total;
/// an empty description still produces a valid (if bare) message.
pub fn synthesize_message(task_description: &str) -> String {
    let task_number = extract_task_number(task_description);
    let commit_type = CommitType::classify(task_description);
    let description = clean_description(task_description);

    format!("{}: [Task {}] {}", commit_type, task_number, description)
}

/// Extract the task number, e.g. "4.2" from "4.2 Add validation".
///
/// Falls back to "X.X" when the description carries no number. Numbers
/// with more than two dot-separated components are truncated to the
/// first two.
fn extract_task_number(task_description: &str) -> String {
    let re = regex_lite::Regex::new(r"(\d+(?:\.\d+)?)").unwrap();

    match re.find(task_description) {
        Some(m) => {
            let number = m.as_str();
            let parts: Vec<&str> = number.split('.').collect();
            if parts.len() > 2 {
                format!("{}.{}", parts[0], parts[1])
            } else {
                number.to_string()
            }
        }
        None => "X.X".to_string(),
    }
}

/// Strip the leading task number and capitalize the first character.
fn clean_description(task_description: &str) -> String {
    let re = regex_lite::Regex::new(r"^\d+(?:\.\d+)*\s*").unwrap();
    let stripped = re.replace(task_description, "");
    let trimmed = stripped.trim();

    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
