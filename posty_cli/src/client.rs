use crate::error::{ErrorCli, Result};
use posty_core::server::payload::create_post_request::CreatePostRequest;
use posty_core::server::payload::generate_post_request::GeneratePostRequest;
use posty_core::server::payload::generate_post_response::GeneratePostResponse;
use posty_core::server::routes::BackendApiPost;
use posty_core::types::post::Post;
use reqwest::{Client, Response, Url};
use tracing::debug;

pub struct CliClient {
    client: Client,
    base_url_api: String,
}

impl CliClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::new();
        CliClient {
            client,
            base_url_api: format!("{}{}", base_url.trim_end_matches('/'), "/api"),
        }
    }

    pub fn base_url_api(&self) -> &str {
        &self.base_url_api
    }

    async fn handle_response(
        &self,
        res: std::result::Result<Response, reqwest::Error>,
    ) -> Result<String> {
        let res = match res {
            Ok(res) => res,
            Err(e) if e.is_connect() => {
                return Err(ErrorCli::ConnectionRefused(self.base_url_api.clone()));
            }
            Err(e) => return Err(ErrorCli::Http(e)),
        };
        match res.error_for_status() {
            Ok(res) => {
                let text = res.text().await?;
                Ok(text)
            }
            Err(e) => Err(ErrorCli::Http(e)),
        }
    }

    pub async fn generate(&self, prompt: &str) -> Result<GeneratePostResponse> {
        let url = format!(
            "{}{}",
            self.base_url_api,
            BackendApiPost::Generate.path(None).as_str()
        );
        let request = GeneratePostRequest {
            prompt: prompt.to_string(),
        };
        debug!("POST {url}");
        let result = self.client.post(&url).json(&request).send().await;
        let body = self.handle_response(result).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn create_post(&self, request: &CreatePostRequest) -> Result<Post> {
        let url = format!(
            "{}{}",
            self.base_url_api,
            BackendApiPost::Create.path(None).as_str()
        );
        debug!("POST {url}");
        let result = self.client.post(&url).json(request).send().await;
        let body = self.handle_response(result).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// The user id goes in as one percent-encoded path segment.
    fn user_posts_url(&self, user_id: &str) -> Result<Url> {
        let invalid = || ErrorCli::InvalidUrl(self.base_url_api.clone());
        let mut url = Url::parse(&self.base_url_api).map_err(|_| invalid())?;
        let template = BackendApiPost::ListByUser.path(None);
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(
                template
                    .as_str()
                    .split('/')
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| if segment == "{user_id}" { user_id } else { segment }),
            );
        Ok(url)
    }

    pub async fn list_posts(&self, user_id: &str) -> Result<Vec<Post>> {
        let url = self.user_posts_url(user_id)?;
        debug!("GET {url}");
        let result = self.client.get(url).send().await;
        let body = self.handle_response(result).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
