use crate::endpoints::Endpoints;

/// Builds the proxy download URL for a pasted link.
///
/// Returns `None` for blank input; the download action is disabled then.
pub fn build_proxy_request_url(endpoints: &Endpoints, raw_url: &str) -> Option<String> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(endpoints.proxy_url(trimmed))
}

/// Text field state of the proxy page. The download itself is
/// fire-and-forget: nothing is tracked once the URL is handed off.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProxyLinkController {
    input: String,
}

impl ProxyLinkController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.input {
            return false;
        }
        self.input = text;
        true
    }

    pub fn can_download(&self) -> bool {
        !self.input.trim().is_empty()
    }

    pub fn request_url(&self, endpoints: &Endpoints) -> Option<String> {
        build_proxy_request_url(endpoints, &self.input)
    }
}
