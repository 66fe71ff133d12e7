use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters a browser leaves unescaped in a URI component.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Backend routes derived from the configured base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new("")
    }
}

impl Endpoints {
    pub fn new(base: impl AsRef<str>) -> Self {
        Self {
            base: base.as_ref().trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn upload_url(&self) -> String {
        format!("{}/api/upload", self.base)
    }

    /// `{base}/api/proxy?url=<target>` with `target` encoded as one query value.
    pub fn proxy_url(&self, target: &str) -> String {
        let encoded = utf8_percent_encode(target, COMPONENT);
        format!("{}/api/proxy?url={encoded}", self.base)
    }

    /// Example `curl` invocations shown beneath the upload form.
    pub fn curl_examples(&self) -> [String; 2] {
        let upload = self.upload_url();
        [
            format!("curl -X POST -F \"file=@yourfile.txt\" -F \"duration=100\" {upload}"),
            format!(
                "curl -X POST -F \"url=https://example.com/file.zip\" -F \"duration=7\" {upload}"
            ),
        ]
    }
}
