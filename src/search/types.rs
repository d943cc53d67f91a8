/// A repository as shown to the user.
/// Note: Not Deserialize — RepositoryItem is only ever built from the wire
/// model via `WireRepositoryItem::to_domain()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryItem {
    /// GitHub's repository id
    pub id: i64,
    /// Short name (e.g., "Hello-World")
    pub name: String,
    /// Owner-qualified name (e.g., "octocat/Hello-World")
    pub full_name: String,
    pub owner: OwnerItem,
    pub html_url: String,
    pub description: Option<String>,
    /// Primary language as reported by GitHub
    pub language: Option<String>,
    /// Counts are kept as exact decimal strings for display
    pub stargazers_count: String,
    pub watchers_count: String,
    pub forks_count: String,
    pub open_issues_count: String,
}

/// The account that owns a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerItem {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}
