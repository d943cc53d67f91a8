use serde::Deserialize;
use thiserror::Error;

use crate::search::types::{OwnerItem, RepositoryItem};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to decode search response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Body of `GET /search/repositories`.
/// Only `items` is read; `total_count` and friends are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    /// Repositories in the rank order the server returned them
    pub items: Vec<WireRepositoryItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireRepositoryItem {
    pub id: i64,
    pub name: String,
    pub full_name: String,
    pub owner: WireOwnerItem,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub watchers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireOwnerItem {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

/// Decode a raw search response body.
///
/// Unknown fields are ignored. Every declared field except `description`
/// and `language` is required, so a missing count is an error rather than
/// a zero.
pub fn decode(text: &str) -> Result<SearchResponse, DecodeError> {
    Ok(serde_json::from_str(text)?)
}

impl SearchResponse {
    pub fn to_domain(&self) -> Vec<RepositoryItem> {
        self.items.iter().map(WireRepositoryItem::to_domain).collect()
    }
}

impl WireRepositoryItem {
    pub fn to_domain(&self) -> RepositoryItem {
        RepositoryItem {
            id: self.id,
            name: self.name.clone(),
            full_name: self.full_name.clone(),
            owner: self.owner.to_domain(),
            html_url: self.html_url.clone(),
            description: self.description.clone(),
            language: self.language.clone(),
            stargazers_count: self.stargazers_count.to_string(),
            watchers_count: self.watchers_count.to_string(),
            forks_count: self.forks_count.to_string(),
            open_issues_count: self.open_issues_count.to_string(),
        }
    }
}

impl WireOwnerItem {
    pub fn to_domain(&self) -> OwnerItem {
        OwnerItem {
            login: self.login.clone(),
            avatar_url: self.avatar_url.clone(),
            html_url: self.html_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_WORLD: &str = r#"{"items":[{"id":1,"name":"Hello-World","full_name":"octocat/Hello-World","owner":{"login":"octocat","avatar_url":"u","html_url":"h"},"html_url":"h2","description":null,"language":"Kotlin","stargazers_count":1500,"watchers_count":1500,"forks_count":300,"open_issues_count":42}]}"#;

    #[test]
    fn test_decode_hello_world() {
        let response = decode(HELLO_WORLD).unwrap();
        let items = response.to_domain();
        assert_eq!(items.len(), 1);

        let repo = &items[0];
        assert_eq!(repo.id, 1);
        assert_eq!(repo.full_name, "octocat/Hello-World");
        assert_eq!(repo.owner.login, "octocat");
        assert_eq!(repo.description, None);
        assert_eq!(repo.language.as_deref(), Some("Kotlin"));
        assert_eq!(repo.stargazers_count, "1500");
        assert_eq!(repo.forks_count, "300");
        assert_eq!(repo.open_issues_count, "42");
    }

    #[test]
    fn test_absent_optional_fields_stay_none() {
        let json = r#"{"items":[{"id":7,"name":"n","full_name":"o/n","owner":{"login":"o","avatar_url":"a","html_url":"h"},"html_url":"h","stargazers_count":0,"watchers_count":0,"forks_count":0,"open_issues_count":0}]}"#;
        let items = decode(json).unwrap().to_domain();
        assert_eq!(items[0].description, None);
        assert_eq!(items[0].language, None);
    }

    #[test]
    fn test_missing_required_count_fails() {
        let json = r#"{"items":[{"id":7,"name":"n","full_name":"o/n","owner":{"login":"o","avatar_url":"a","html_url":"h"},"html_url":"h","watchers_count":0,"forks_count":0,"open_issues_count":0}]}"#;
        let err = decode(json).unwrap_err();
        assert!(err.to_string().contains("stargazers_count"));
    }

    #[test]
    fn test_wrong_type_fails() {
        let json = r#"{"items":[{"id":"seven","name":"n","full_name":"o/n","owner":{"login":"o","avatar_url":"a","html_url":"h"},"html_url":"h","stargazers_count":0,"watchers_count":0,"forks_count":0,"open_issues_count":0}]}"#;
        assert!(decode(json).is_err());
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(decode("{\"items\": [").is_err());
        assert!(decode("").is_err());
        assert!(decode("{}").is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"total_count":1,"incomplete_results":false,"items":[{"id":1,"node_id":"x","private":false,"name":"n","full_name":"o/n","owner":{"login":"o","id":9,"avatar_url":"a","html_url":"h","type":"User"},"html_url":"h","description":"d","language":"Rust","stargazers_count":1,"watchers_count":1,"forks_count":1,"open_issues_count":1,"topics":["cli"]}]}"#;
        let items = decode(json).unwrap().to_domain();
        assert_eq!(items[0].description.as_deref(), Some("d"));
    }

    #[test]
    fn test_counts_render_without_grouping() {
        let json = r#"{"items":[{"id":1,"name":"n","full_name":"o/n","owner":{"login":"o","avatar_url":"a","html_url":"h"},"html_url":"h","stargazers_count":1234567,"watchers_count":1500,"forks_count":0,"open_issues_count":10}]}"#;
        let repo = &decode(json).unwrap().to_domain()[0];
        assert_eq!(repo.stargazers_count, "1234567");
        assert_eq!(repo.watchers_count, "1500");
        assert_eq!(repo.forks_count, "0");
    }

    #[test]
    fn test_server_order_is_preserved() {
        let json = r#"{"items":[
            {"id":3,"name":"c","full_name":"o/c","owner":{"login":"o","avatar_url":"a","html_url":"h"},"html_url":"h","stargazers_count":1,"watchers_count":1,"forks_count":1,"open_issues_count":1},
            {"id":1,"name":"a","full_name":"o/a","owner":{"login":"o","avatar_url":"a","html_url":"h"},"html_url":"h","stargazers_count":1,"watchers_count":1,"forks_count":1,"open_issues_count":1},
            {"id":2,"name":"b","full_name":"o/b","owner":{"login":"o","avatar_url":"a","html_url":"h"},"html_url":"h","stargazers_count":1,"watchers_count":1,"forks_count":1,"open_issues_count":1}
        ]}"#;
        let ids: Vec<i64> = decode(json).unwrap().to_domain().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_items() {
        let response = decode(r#"{"total_count":0,"items":[]}"#).unwrap();
        assert!(response.to_domain().is_empty());
    }
}
