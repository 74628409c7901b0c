use chat_widget::models::{ChatRequest, ChatResponse, ErrorDetail, FeedbackRequest};
use chat_widget::{ChatTransport, ClientConfig, TransportError};
use futures_util::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;

/// Name of the `<meta>` tag a host page can use to point the widget at
/// another backend without rebuilding.
const API_BASE_META: &str = "chat-api-base";

/// Resolves the backend address: host page first, then build environment.
pub fn resolve_config() -> ClientConfig {
    match api_base_from_page() {
        Some(base) => ClientConfig::new(base),
        None => ClientConfig::from_build_env(),
    }
}

fn api_base_from_page() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name='{API_BASE_META}']");
    match document.query_selector(&selector) {
        Ok(meta) => meta?.get_attribute("content").filter(|c| !c.trim().is_empty()),
        Err(e) => {
            log::warn!("Could not look up {API_BASE_META} meta tag: {e:?}");
            None
        }
    }
}

/// `fetch`-backed transport for the chat and feedback endpoints.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl ChatTransport for HttpTransport {
    /// POSTs the request to the chat endpoint and decodes `{answer}`.
    fn send_chat<'a>(
        &'a self,
        request: &'a ChatRequest,
    ) -> LocalBoxFuture<'a, Result<ChatResponse, TransportError>> {
        async move {
            let resp = Request::post(&self.config.chat_url())
                .json(request)
                .map_err(|e| TransportError::Serialize(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;

            if !resp.ok() {
                let detail = resp.json::<ErrorDetail>().await.ok().map(|d| d.detail);
                return Err(TransportError::status(resp.status(), detail));
            }

            resp.json::<ChatResponse>()
                .await
                .map_err(|e| TransportError::Parse(e.to_string()))
        }
        .boxed_local()
    }

    /// POSTs the rating; only the status is looked at.
    fn send_feedback<'a>(
        &'a self,
        request: &'a FeedbackRequest,
    ) -> LocalBoxFuture<'a, Result<(), TransportError>> {
        async move {
            let resp = Request::post(&self.config.feedback_url())
                .json(request)
                .map_err(|e| TransportError::Serialize(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;

            if !resp.ok() {
                return Err(TransportError::status(resp.status(), None));
            }
            Ok(())
        }
        .boxed_local()
    }
}
