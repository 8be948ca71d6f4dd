// ABOUTME: The main Client struct orchestrating acquisition, generation, and persistence.
// ABOUTME: Provides async generate_from(), generate_html(), and run() operations.

use std::path::Path;

use crate::error::GenerateError;
use crate::generate::generate;
use crate::options::{ClientBuilder, Options};
use crate::resource::{acquire, persist, AcquireOptions};
use crate::result::Generated;

/// The main clickgen client.
///
/// One run reads one input document, produces one self-contained output
/// text, and terminates. Runs share no mutable state; concurrent runs
/// against the same output directory race on the final write (last write
/// wins).
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .cookie_store(true)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self { opts, http_client }
    }

    /// Acquire a document and generate stubs for it, without writing output.
    ///
    /// A `source_spec` starting with `http` is fetched; anything else is
    /// read as a file path.
    pub async fn generate_from(&self, source_spec: &str) -> Result<Generated, GenerateError> {
        if source_spec.is_empty() {
            return Err(GenerateError::invalid_url(source_spec, "Generate", None));
        }

        let acquire_opts = AcquireOptions {
            headers: self.opts.headers.clone(),
            allow_private_networks: self.opts.allow_private_networks,
        };

        let acquired = acquire(&self.http_client, source_spec, &acquire_opts).await?;
        let text = acquired.text();

        let mut generated = generate(&text)?;
        generated.source = source_spec.to_string();
        Ok(generated)
    }

    /// Generate stubs from caller-provided HTML text.
    pub async fn generate_html(&self, html: &str) -> Result<Generated, GenerateError> {
        generate(html)
    }

    /// The single-shot entry point: generate stubs for `source_spec` and
    /// write them to `page.ts` inside `output_dir` (or the configured
    /// default), creating the directory if needed.
    ///
    /// Either the whole output is produced and written, or nothing is
    /// written.
    pub async fn run(
        &self,
        source_spec: &str,
        output_dir: Option<&Path>,
    ) -> Result<Generated, GenerateError> {
        let mut generated = self.generate_from(source_spec).await?;

        let dir = output_dir.unwrap_or(&self.opts.output_dir);
        let written = persist(dir, &generated.code).await?;
        tracing::debug!(path = %written.display(), stubs = generated.stub_count(), "wrote output");
        generated.written_to = Some(written);

        Ok(generated)
    }
}
