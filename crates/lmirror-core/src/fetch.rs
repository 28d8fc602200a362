//! HTTP GET of manifests and files.
//!
//! Uses the curl crate (libcurl easy interface). One handle is reused for
//! every request of a walk; requests run in the current thread.

use crate::config::MirrorConfig;

/// Error from a single GET (curl failure or non-2xx status).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Handle configuration failed before any request was made.
    #[error("curl setup failed")]
    Setup(#[from] curl::Error),
    /// Curl reported an error for this request (DNS, connect, TLS, invalid URL...).
    #[error("GET {url} failed")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// The server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
}

/// Transport seam of the walker: fetch the whole body of `url`.
pub trait Fetch {
    fn fetch(&mut self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Blocking libcurl GET client.
pub struct CurlFetcher {
    easy: curl::easy::Easy,
}

impl CurlFetcher {
    pub fn new(cfg: &MirrorConfig) -> Result<Self, FetchError> {
        let mut easy = curl::easy::Easy::new();
        easy.useragent(&cfg.user_agent)?;
        easy.follow_location(cfg.follow_redirects)?;
        easy.max_redirections(10)?;
        if let Some(t) = cfg.connect_timeout() {
            easy.connect_timeout(t)?;
        }
        if let Some(t) = cfg.timeout() {
            easy.timeout(t)?;
        }
        Ok(Self { easy })
    }
}

impl Fetch for CurlFetcher {
    fn fetch(&mut self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::info!("downloading {}", url);

        let transport = |source: curl::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        self.easy.url(url).map_err(transport)?;
        self.easy.get(true).map_err(transport)?;

        let mut body = Vec::new();
        {
            let mut transfer = self.easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(transport)?;
            transfer.perform().map_err(transport)?;
        }

        let code = self.easy.response_code().map_err(transport)?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http {
                url: url.to_string(),
                code,
            });
        }
        tracing::debug!(url, bytes = body.len(), "fetched");
        Ok(body)
    }
}
