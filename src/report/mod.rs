pub mod language;

use crate::search::RepositoryItem;
use crate::state::{SearchOutcome, SearchSnapshot};
use colored::Colorize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

const NO_RESULTS: &str = "No repositories found.";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report file: {0}")]
    FileWrite(#[from] std::io::Error),
}

/// Output the results to terminal (default) or to a markdown file.
#[instrument(skip(snapshot), fields(query = ?snapshot.query, results = snapshot.repositories.len()))]
pub fn output(snapshot: &SearchSnapshot, output_path: Option<&Path>) -> Result<(), ReportError> {
    match output_path {
        None => {
            debug!("writing results to terminal");
            print_terminal_results(snapshot);
            Ok(())
        }
        Some(path) => {
            debug!(path = %path.display(), "writing results to file");
            write_markdown_results(snapshot, path)
        }
    }
}

/// Print the result list:
///
/// Results for "octocat/Hello-World"
///
///  1. Hello-World  octocat
///     My first repository on GitHub!
///     ★ 1500  Kotlin
///     avatar: https://avatars.githubusercontent.com/u/583231
fn print_terminal_results(snapshot: &SearchSnapshot) {
    println!();
    if let Some(query) = &snapshot.query {
        println!("Results for \"{}\"", query.bold());
        println!();
    }

    if snapshot.loading {
        println!("  {}", "Searching...".dimmed());
        println!();
        return;
    }

    if snapshot.repositories.is_empty() {
        println!("  {}", NO_RESULTS.yellow());
        if let SearchOutcome::Failed { reason } = &snapshot.outcome {
            println!("  {} {}", "Search failed:".red().bold(), reason);
            println!("  Type :retry to search again.");
        }
        println!();
        return;
    }

    for (index, repo) in snapshot.repositories.iter().enumerate() {
        println!(
            "{:>3}. {}  {}",
            index + 1,
            repo.name.bold(),
            repo.owner.login.dimmed()
        );
        if let Some(description) = &repo.description {
            println!("     {}", description);
        }
        let language = repo
            .language
            .as_deref()
            .map(|l| l.color(language::color_for(l)).to_string())
            .unwrap_or_default();
        println!("     {} {}  {}", "★".yellow(), repo.stargazers_count, language);
        println!("     avatar: {}", repo.owner.avatar_url.dimmed());
    }
    println!();
}

/// Print everything known about one repository.
pub fn print_detail(repo: &RepositoryItem) {
    println!();
    println!("═══ {} ═══", repo.full_name.bold());
    println!("{}", repo.html_url.underline());
    if let Some(description) = &repo.description {
        println!("{}", description);
    }
    println!();
    println!("Owner:       {} ({})", repo.owner.login, repo.owner.html_url);
    println!("Avatar:      {}", repo.owner.avatar_url);
    if let Some(lang) = &repo.language {
        println!("Language:    {}", lang.color(language::color_for(lang)));
    }
    println!("Stars:       {}", repo.stargazers_count);
    println!("Watchers:    {}", repo.watchers_count);
    println!("Forks:       {}", repo.forks_count);
    println!("Open issues: {}", repo.open_issues_count);
    println!();
}

/// Write the results as a markdown file:
/// # Results for "octocat/Hello-World"
///
/// ## [octocat/Hello-World](https://github.com/octocat/Hello-World)
/// ![octocat](avatar) **octocat** | ★ 1500 | Kotlin
fn write_markdown_results(snapshot: &SearchSnapshot, path: &Path) -> Result<(), ReportError> {
    std::fs::write(path, render_markdown(snapshot))?;
    Ok(())
}

fn render_markdown(snapshot: &SearchSnapshot) -> String {
    let mut md = String::new();
    match &snapshot.query {
        Some(query) => md.push_str(&format!("# Results for \"{}\"\n\n", query)),
        None => md.push_str("# Results\n\n"),
    }

    if let SearchOutcome::Failed { reason } = &snapshot.outcome {
        md.push_str(&format!("**Search failed:** {}\n\n", reason));
    }
    if snapshot.repositories.is_empty() {
        md.push_str(NO_RESULTS);
        md.push('\n');
        return md;
    }

    for repo in &snapshot.repositories {
        md.push_str(&format!("## [{}]({})\n\n", repo.full_name, repo.html_url));
        md.push_str(&format!(
            "![{}]({}) **{}** | ★ {}",
            repo.owner.login, repo.owner.avatar_url, repo.owner.login, repo.stargazers_count
        ));
        if let Some(language) = &repo.language {
            md.push_str(&format!(" | {}", language));
        }
        md.push_str("\n\n");
        if let Some(description) = &repo.description {
            md.push_str(&format!("{}\n\n", description));
        }
    }
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::types::fixtures::repository;

    fn loaded(repositories: Vec<RepositoryItem>) -> SearchSnapshot {
        SearchSnapshot {
            query: Some("octocat/Hello-World".to_string()),
            repositories,
            loading: false,
            outcome: SearchOutcome::Loaded,
        }
    }

    #[test]
    fn test_markdown_lists_results() {
        let mut repo = repository(1, "octocat/Hello-World");
        repo.description = Some("My first repository".to_string());
        repo.language = Some("Kotlin".to_string());
        repo.stargazers_count = "1500".to_string();

        let md = render_markdown(&loaded(vec![repo]));
        assert!(md.contains("# Results for \"octocat/Hello-World\""));
        assert!(md.contains("## [octocat/Hello-World](https://github.com/octocat/Hello-World)"));
        assert!(md.contains("★ 1500 | Kotlin"));
        assert!(md.contains("My first repository"));
    }

    #[test]
    fn test_markdown_omits_absent_language() {
        let mut repo = repository(1, "octocat/Hello-World");
        repo.language = None;
        let md = render_markdown(&loaded(vec![repo]));
        assert!(md.contains("★ 10\n"));
    }

    #[test]
    fn test_markdown_empty_success() {
        let md = render_markdown(&loaded(vec![]));
        assert!(md.contains(NO_RESULTS));
        assert!(!md.contains("Search failed"));
    }

    #[test]
    fn test_markdown_failure_shows_reason() {
        let snapshot = SearchSnapshot {
            outcome: SearchOutcome::Failed {
                reason: "Search API returned 403 Forbidden".to_string(),
            },
            ..loaded(vec![])
        };
        let md = render_markdown(&snapshot);
        assert!(md.contains("**Search failed:** Search API returned 403 Forbidden"));
    }

    #[test]
    fn test_output_to_file() {
        let path = std::env::temp_dir().join("repo_search_test_output.md");
        output(&loaded(vec![repository(1, "o/a")]), Some(&path)).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("## [o/a]"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_output_to_terminal() {
        // Should not panic
        output(&loaded(vec![repository(1, "o/a")]), None).unwrap();
        output(&SearchSnapshot::default(), None).unwrap();
        print_detail(&repository(1, "o/a"));
    }
}
