// ABOUTME: Main library entry point for the clickgen click-helper generator.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Generated, GenerateError, ErrorCode, Options.

//! Clickgen - generates TypeScript click helpers for a page's interactive elements.
//!
//! This crate reads an HTML document from a file or URL, locates every
//! `button` and `a` element, and emits one function per element that
//! relocates and clicks it in a browser via an XPath locator.
//!
//! # Example
//!
//! ```no_run
//! use clickgen::{Client, GenerateError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), GenerateError> {
//!     let client = Client::builder().build();
//!     let generated = client.run("https://example.com/login", None).await?;
//!     println!("wrote {} stubs", generated.stubs.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod collect;
pub mod dom;
pub mod emit;
pub mod error;
pub mod generate;
pub mod naming;
pub mod options;
pub mod resource;
pub mod result;

pub use crate::client::Client;
pub use crate::dom::locator::{resolve, Locator};
pub use crate::dom::node::{DomNode, ScraperNode};
pub use crate::error::{ErrorCode, GenerateError};
pub use crate::options::{ClientBuilder, Options};
pub use crate::resource::OUTPUT_FILENAME;
pub use crate::result::{Generated, Stub};
