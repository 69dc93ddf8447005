use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::directory::ProjectDirectory;
use crate::error::{AdminError, Result};
use crate::types::{Project, ProjectEdit};

const PROJECTS_PATH: &str = "api/project";

/// REST binding for the project directory service.
pub struct DirectoryClient {
    http: Client,
    base: Url,
    token: Option<String>,
}

impl DirectoryClient {
    pub fn new(base: Url, token: Option<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base, token })
    }

    fn collection_url(&self) -> Result<Url> {
        self.base
            .join(PROJECTS_PATH)
            .map_err(|_| AdminError::InvalidUrl(format!("{}{PROJECTS_PATH}", self.base)))
    }

    fn project_url(&self, id: &str) -> Result<Url> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|_| AdminError::InvalidUrl(self.base.to_string()))?
            .push(id);
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.authorize(request).send().await?;

        if !response.status().is_success() {
            return Err(AdminError::Api {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        Ok(self.send(request).await?.json().await?)
    }
}

#[async_trait]
impl ProjectDirectory for DirectoryClient {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        let url = self.collection_url()?;
        debug!(%url, "GET projects");
        self.send_json(self.http.get(url)).await
    }

    async fn update_project(&self, id: &str, edit: &ProjectEdit) -> Result<Project> {
        let url = self.project_url(id)?;
        debug!(%url, ?edit, "PUT project");
        self.send_json(self.http.put(url).json(edit)).await
    }

    async fn delete_project(&self, id: &str) -> Result<()> {
        let url = self.project_url(id)?;
        debug!(%url, "DELETE project");
        self.send(self.http.delete(url)).await?;
        Ok(())
    }
}
