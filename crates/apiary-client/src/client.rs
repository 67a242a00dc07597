//! The HTTP transport adapter.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::headlines;
use crate::outcome::{HttpReply, Outcome};
use apiary_core::{Arguments, EndpointDescriptor, EndpointKind, resolve};
use reqwest::RequestBuilder;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Executes endpoint requests.
///
/// Cheap to clone: the underlying connection pool and configuration are
/// shared.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl ApiClient {
    /// Create a client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()?;
        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue a GET to `url` and classify the result.
    ///
    /// Any HTTP response, whatever its status, is `Success` or `HttpError`.
    /// `Failure` is reserved for requests that got no response.
    pub async fn execute(&self, url: &str) -> Outcome {
        self.send(self.http.get(url)).await
    }

    /// Run the pipeline for `endpoint`'s kind and return the tool payload.
    pub async fn call(&self, endpoint: &EndpointDescriptor, args: &Arguments) -> Result<Value> {
        match endpoint.kind {
            EndpointKind::PathTemplate => {
                let url = resolve(endpoint, args)?;
                info!(tool = %endpoint.name, %url, "API call");
                self.execute(&url).await.into_payload()
            }
            EndpointKind::TopHeadlines => headlines::fetch(self, endpoint, args).await,
        }
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) async fn send(&self, request: RequestBuilder) -> Outcome {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => return Outcome::Failure(Error::from_transport(&err)),
        };

        match HttpReply::read(response).await {
            Ok(reply) => Outcome::from_reply(reply),
            Err(err) => Outcome::Failure(err),
        }
    }
}
