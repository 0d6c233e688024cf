//! Message catalog resolution for the test-center CLI.
//!
//! Commands look up their prompts, spinner text and error messages by
//! position in the command tree. Remote API failures are classified here too:
//! transport-level failures terminate the process, application errors become
//! one message per sub-error.

pub mod api_error;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod console;
pub mod error;
pub mod interpolate;
pub mod key;
pub mod logging;
pub mod messages;

pub use api_error::{ApiError, ApiSubError};
pub use catalog::Catalog;
pub use classify::{ApiCall, ErrorClassifier};
pub use config::{CATALOG_ENV_KEY, load_catalog};
pub use console::{ErrorConsole, ProcessConsole, http_exit_code};
pub use error::CatalogError;
pub use interpolate::{FieldSource, interpolate};
pub use key::{ArgumentError, LookupKey, MessageType, ROOT_NAMESPACE};
pub use messages::Messages;
