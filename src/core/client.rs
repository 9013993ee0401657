use crate::config::BaseUrl;
use crate::domain::model::{Classement, Match};
use crate::domain::ports::ScoreboardApi;
use crate::utils::error::{Result, TdmError};
use reqwest::Client;
use serde::de::DeserializeOwned;

pub const MSG_MATCHES: &str = "Erreur lors du chargement des matchs";
pub const MSG_MATCH_NOT_FOUND: &str = "Match introuvable";
pub const MSG_CLASSEMENT_NOT_FOUND: &str = "Classement introuvable";

/// HTTP client over the results API. The base URL is injected at construction
/// and never re-resolved. Cheap to clone, safe to share across tasks.
#[derive(Clone)]
pub struct ApiClient {
    base_url: BaseUrl,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, failure_message: &str) -> Result<T> {
        let url = self.base_url.join(path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("{} -> {}", url, status);

        if !status.is_success() {
            return Err(TdmError::Fetch {
                message: failure_message.to_string(),
                status,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl ScoreboardApi for ApiClient {
    async fn fetch_matches(&self) -> Result<Vec<Match>> {
        self.get_json("/matches", MSG_MATCHES).await
    }

    async fn fetch_match_by_id(&self, id: &str) -> Result<Match> {
        self.get_json(&format!("/matches/{}", id), MSG_MATCH_NOT_FOUND)
            .await
    }

    async fn fetch_classement_by_poule(&self, code: &str) -> Result<Classement> {
        self.get_json(
            &format!("/poules/{}/classement", code),
            MSG_CLASSEMENT_NOT_FOUND,
        )
        .await
    }

    async fn fetch_classement_by_match(&self, id: &str) -> Result<Classement> {
        self.get_json(
            &format!("/matches/{}/classement", id),
            MSG_CLASSEMENT_NOT_FOUND,
        )
        .await
    }
}
