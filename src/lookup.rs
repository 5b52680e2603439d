use crate::config::FinderConfig;
use crate::error::{FinderError, LookupError};
use crate::model::{Meal, SearchResponse};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

/// Something that can answer a recipe search.
///
/// The view controller only talks to this trait, so hosts and tests can swap
/// the HTTP client for anything else.
#[async_trait]
pub trait RecipeLookup: Send + Sync {
    /// Search recipes by name. An empty `Vec` means no matches.
    async fn search(&self, query: &str) -> Result<Vec<Meal>, LookupError>;
}

/// Client for the TheMealDB `search.php` endpoint
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(config: &FinderConfig) -> Result<Self, FinderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(FinderError::ClientError)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FinderError> {
        let config = FinderConfig {
            base_url: base_url.into(),
            ..Default::default()
        };
        Self::new(&config)
    }

    fn search_url(&self) -> String {
        format!("{}/search.php", self.base_url)
    }
}

#[async_trait]
impl RecipeLookup for MealDbClient {
    async fn search(&self, query: &str) -> Result<Vec<Meal>, LookupError> {
        let url = self.search_url();
        debug!("GET {} s={:?}", url, query);

        let response = self.client.get(&url).query(&[("s", query)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        let meals = parsed.meals.unwrap_or_default();
        debug!("{} record(s) for {:?}", meals.len(), query);
        Ok(meals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_search_sends_encoded_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search.php")
            .match_query(Matcher::UrlEncoded("s".into(), "mac & cheese".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"meals": [{"idMeal": "1", "strMeal": "Mac & Cheese"}]}"#)
            .create_async()
            .await;

        let client = MealDbClient::with_base_url(server.url()).unwrap();
        let meals = client.search("mac & cheese").await.unwrap();

        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Mac & Cheese");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_null_meals_is_empty() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"meals": null}"#)
            .create_async()
            .await;

        let client = MealDbClient::with_base_url(server.url()).unwrap();
        let meals = client.search("zzzz").await.unwrap();

        assert!(meals.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_http_error_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search.php")
            .match_query(Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let client = MealDbClient::with_base_url(server.url()).unwrap();
        let result = client.search("Chicken").await;

        assert!(matches!(result, Err(LookupError::Status(status)) if status.as_u16() == 503));
    }

    #[tokio::test]
    async fn test_search_malformed_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = MealDbClient::with_base_url(server.url()).unwrap();
        let result = client.search("Chicken").await;

        assert!(matches!(result, Err(LookupError::Decode(_))));
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let client = MealDbClient::with_base_url("http://localhost:1234/api/").unwrap();
        assert_eq!(client.search_url(), "http://localhost:1234/api/search.php");
    }
}
