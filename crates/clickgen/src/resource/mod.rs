// ABOUTME: Acquisition layer: obtains document bytes from a URL or file path.
// ABOUTME: Also persists generated output to a fixed filename inside an output directory.

//! Resource acquisition and output persistence.
//!
//! A source spec starting with `http` is fetched over the network; anything
//! else is treated as a file path and must exist. Fetched bytes keep their
//! content-type so decoding can honor the declared charset, falling back to
//! detection. Private-network fetches are refused unless explicitly allowed.

use std::collections::HashMap;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use ipnet::{Ipv4Net, Ipv6Net};

use crate::error::GenerateError;

/// Fixed name of the generated output file.
pub const OUTPUT_FILENAME: &str = "page.ts";

/// Maximum allowed content length (10 MB).
pub const MAX_CONTENT_LENGTH: usize = 10 * 1024 * 1024;

/// Options for acquiring a resource.
#[derive(Debug, Clone, Default)]
pub struct AcquireOptions {
    pub headers: HashMap<String, String>,
    pub allow_private_networks: bool,
}

/// A successfully acquired document.
#[derive(Debug, Clone)]
pub struct Acquired {
    pub source: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Acquired {
    /// Decode the body to text, honoring the content-type charset when
    /// present and falling back to detection.
    pub fn text(&self) -> String {
        decode_body(&self.body, self.content_type.as_deref())
    }
}

/// Returns true if the source spec addresses a URL rather than a file.
pub fn is_url(spec: &str) -> bool {
    spec.starts_with("http")
}

/// Obtain raw document bytes for a source spec.
pub async fn acquire(
    client: &reqwest::Client,
    spec: &str,
    opts: &AcquireOptions,
) -> Result<Acquired, GenerateError> {
    if is_url(spec) {
        fetch(client, spec, opts).await
    } else {
        read_file(spec).await
    }
}

/// Write generated code to `OUTPUT_FILENAME` inside `dir`, creating the
/// directory recursively if absent and overwriting prior contents.
pub async fn persist(dir: &Path, code: &str) -> Result<PathBuf, GenerateError> {
    tokio::fs::create_dir_all(dir).await.map_err(|e| {
        GenerateError::io(
            dir.display().to_string(),
            "Persist",
            Some(anyhow::anyhow!("failed to create output directory: {}", e)),
        )
    })?;

    let path = dir.join(OUTPUT_FILENAME);
    tokio::fs::write(&path, code).await.map_err(|e| {
        GenerateError::io(
            path.display().to_string(),
            "Persist",
            Some(anyhow::anyhow!("failed to write output: {}", e)),
        )
    })?;

    Ok(path)
}

async fn read_file(spec: &str) -> Result<Acquired, GenerateError> {
    let path = Path::new(spec);
    if !path.exists() {
        return Err(GenerateError::file_not_found(spec, "Acquire", None));
    }

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        GenerateError::io(
            spec,
            "Acquire",
            Some(anyhow::anyhow!("failed to read file: {}", e)),
        )
    })?;

    Ok(Acquired {
        source: spec.to_string(),
        content_type: None,
        body: Bytes::from(bytes),
    })
}

async fn fetch(
    client: &reqwest::Client,
    spec: &str,
    opts: &AcquireOptions,
) -> Result<Acquired, GenerateError> {
    let parsed = url::Url::parse(spec).map_err(|e| {
        GenerateError::invalid_url(spec, "Acquire", Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(GenerateError::invalid_url(
            spec,
            "Acquire",
            Some(anyhow::anyhow!("scheme must be http or https")),
        ));
    }

    if !opts.allow_private_networks {
        check_private_host(&parsed, spec).await?;
    }

    let mut request = client.get(spec);
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }

    let response = request.send().await.map_err(|e| {
        GenerateError::fetch(
            spec,
            "Acquire",
            Some(anyhow::anyhow!("request failed: {}", e)),
        )
    })?;

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_lowercase());

    if status.as_u16() != 200 {
        return Err(GenerateError::fetch(
            spec,
            "Acquire",
            Some(anyhow::anyhow!(
                "HTTP status {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("")
            )),
        ));
    }

    if let Some(len) = response.content_length() {
        if len as usize > MAX_CONTENT_LENGTH {
            return Err(GenerateError::fetch(
                spec,
                "Acquire",
                Some(anyhow::anyhow!("content too large")),
            ));
        }
    }

    let body = response.bytes().await.map_err(|e| {
        GenerateError::fetch(
            spec,
            "Acquire",
            Some(anyhow::anyhow!("failed to read body: {}", e)),
        )
    })?;

    if body.len() > MAX_CONTENT_LENGTH {
        return Err(GenerateError::fetch(
            spec,
            "Acquire",
            Some(anyhow::anyhow!("content too large")),
        ));
    }

    tracing::debug!(url = %spec, status = status.as_u16(), bytes = body.len(), "fetched resource");

    Ok(Acquired {
        source: spec.to_string(),
        content_type,
        body,
    })
}

/// Reject URLs whose host resolves to a private or loopback address.
async fn check_private_host(url: &url::Url, spec: &str) -> Result<(), GenerateError> {
    let host = match url.host_str() {
        Some(h) => h,
        None => return Ok(()),
    };

    if let Ok(ip) = host.parse::<IpAddr>() {
        if is_private_ip(&ip) {
            return Err(GenerateError::ssrf(
                spec,
                "Acquire",
                Some(anyhow::anyhow!("private IP addresses are not allowed")),
            ));
        }
        return Ok(());
    }

    let port = url
        .port()
        .unwrap_or(if url.scheme() == "https" { 443 } else { 80 });
    let addrs = tokio::net::lookup_host((host, port)).await.map_err(|e| {
        GenerateError::fetch(
            spec,
            "Acquire",
            Some(anyhow::anyhow!("DNS lookup failed: {}", e)),
        )
    })?;

    for addr in addrs {
        if is_private_ip(&addr.ip()) {
            return Err(GenerateError::ssrf(
                spec,
                "Acquire",
                Some(anyhow::anyhow!("private IP addresses are not allowed")),
            ));
        }
    }

    Ok(())
}

/// Check if an IP address is in a private/reserved range.
fn is_private_ip(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(ip) => {
            let private_10: Ipv4Net = "10.0.0.0/8".parse().unwrap();
            let private_172: Ipv4Net = "172.16.0.0/12".parse().unwrap();
            let private_192: Ipv4Net = "192.168.0.0/16".parse().unwrap();
            let loopback: Ipv4Net = "127.0.0.0/8".parse().unwrap();
            let link_local: Ipv4Net = "169.254.0.0/16".parse().unwrap();

            private_10.contains(ip)
                || private_172.contains(ip)
                || private_192.contains(ip)
                || loopback.contains(ip)
                || link_local.contains(ip)
        }
        IpAddr::V6(ip) => {
            if ip.is_loopback() {
                return true;
            }
            let unique_local: Ipv6Net = "fc00::/7".parse().unwrap();
            let link_local: Ipv6Net = "fe80::/10".parse().unwrap();

            unique_local.contains(ip) || link_local.contains(ip)
        }
    }
}

/// Decode body bytes to a String using the content-type charset or detection.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(charset) = content_type.and_then(extract_charset) {
        if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
            let (decoded, _, _) = encoding.decode(body);
            return decoded.into_owned();
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract the charset value from a Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        if let Some(charset) = part.trim().strip_prefix("charset=") {
            return Some(charset.trim_matches('"').trim_matches('\'').to_string());
        }
    }
    None
}
