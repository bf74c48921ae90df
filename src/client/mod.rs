use std::sync::Arc;

use ::bytes::Bytes;
use eyre::{Context as _, Result};
use http::{
    header::{CONTENT_LENGTH, CONTENT_TYPE, COOKIE, SET_COOKIE, USER_AGENT},
    Method, Request, Response, StatusCode,
};
use http_body_util::BodyExt;
use hyper::body::Incoming;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client as HyperClient},
    rt::TokioExecutor,
};
use rustls::{crypto::ring, ClientConfig, RootCertStore};
use serde::Serialize;

use crate::{
    config::{Credentials, Endpoints},
    model::Session,
};

use self::bytes::BodyBytes;

pub use self::response::StatusError;

mod bytes;
mod response;

static MY_USER_AGENT: &str = env!("CARGO_PKG_NAME");

type InnerClient = HyperClient<HttpsConnector<HttpConnector>, BodyBytes>;

pub struct Client {
    client: InnerClient,
    endpoints: Endpoints,
}

#[derive(Serialize)]
struct SignInPayload<'c> {
    user: &'c Credentials,
}

impl Client {
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        let tls = ClientConfig::builder_with_provider(Arc::new(ring::default_provider()))
            .with_safe_default_protocol_versions()
            .context("failed to configure TLS protocol versions")?
            .with_root_certificates(RootCertStore {
                roots: webpki_roots::TLS_SERVER_ROOTS.to_vec(),
            })
            .with_no_client_auth();

        let connector = HttpsConnectorBuilder::new()
            .with_tls_config(tls)
            .https_or_http()
            .enable_http1()
            .enable_http2()
            .build();

        let client = HyperClient::builder(TokioExecutor::new()).build(connector);

        Ok(Self { client, endpoints })
    }

    /// Sign in and capture the session cookies.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Session> {
        let payload = SignInPayload { user: credentials };
        let response = self
            .send_post_request(&self.endpoints.sign_in, &payload)
            .await?;

        let (parts, body) = response.into_parts();
        info!("Sign-in responded with status code {}", parts.status);

        Self::error_for_status(parts.status, body, &self.endpoints.sign_in).await?;

        let set_cookies = parts
            .headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| match value.to_str() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Skipping non-UTF-8 Set-Cookie header {value:?}");

                    None
                }
            });

        let session = Session::from_set_cookies(set_cookies);

        if session.is_empty() {
            warn!("Sign-in succeeded but no cookies were set");
        } else {
            debug!("Captured {} session cookie(s)", session.len());
        }

        Ok(session)
    }

    /// Request the signed-in user's record as raw JSON bytes.
    pub async fn user_record(&self, session: &Session) -> Result<Bytes> {
        let url = &*self.endpoints.user_record;
        let response = self.send_get_request(url, session).await?;
        let (parts, body) = response.into_parts();

        Self::error_for_status(parts.status, body, url).await
    }

    /// Sends a GET request
    async fn send_get_request(&self, url: &str, session: &Session) -> Result<Response<Incoming>> {
        trace!("sending GET request to url {url}");

        let mut req = Request::builder()
            .uri(url)
            .method(Method::GET)
            .header(USER_AGENT, MY_USER_AGENT);

        if !session.is_empty() {
            req = req.header(COOKIE, session.cookie_header());
        }

        let req = req
            .body(BodyBytes::default())
            .context("failed to build GET request")?;

        self.client
            .request(req)
            .await
            .context("failed to receive GET response")
    }

    /// Sends a POST requesting containing JSON data
    async fn send_post_request<J>(&self, url: &str, data: &J) -> Result<Response<Incoming>>
    where
        J: Serialize,
    {
        trace!("sending POST request to url {url}");

        let data = serde_json::to_vec(data).context("failed to serialize data")?;

        let req = Request::builder()
            .method(Method::POST)
            .uri(url)
            .header(USER_AGENT, MY_USER_AGENT)
            .header(CONTENT_TYPE, "application/json")
            .header(CONTENT_LENGTH, data.len())
            .body(data.into())
            .context("failed to build POST request")?;

        self.client
            .request(req)
            .await
            .context("failed to receive POST response")
    }

    async fn error_for_status(status: StatusCode, body: Incoming, url: &str) -> Result<Bytes> {
        let bytes = body
            .collect()
            .await
            .context("failed to extract response bytes")?
            .to_bytes();

        if status == StatusCode::OK {
            Ok(bytes)
        } else {
            let err = StatusError {
                status,
                url: url.into(),
                body: bytes.into(),
            };

            Err(err.into())
        }
    }
}
