use std::sync::Arc;

use tracing::debug;

use crate::{
    api_error::ApiError,
    catalog::Catalog,
    classify::{ApiCall, ErrorClassifier},
    console::ErrorConsole,
    error::CatalogError,
    interpolate::FieldSource,
    key::{ArgumentError, LookupKey, MessageType},
};

/// Shared, read-only handle to a catalog with the lookups commands need.
#[derive(Clone, Debug)]
pub struct Messages {
    catalog: Arc<Catalog>,
}

impl Messages {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog: Arc::new(catalog) }
    }

    pub fn bundled() -> Result<Self, CatalogError> {
        Catalog::bundled().map(Self::new)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn global_error(&self, key: &str) -> String {
        self.catalog.resolve(&LookupKey::global(key)).to_string()
    }

    pub fn edge_grid_error(&self, key: &str) -> String {
        self.catalog.resolve(&LookupKey::edge_grid(key)).to_string()
    }

    /// Message stored directly under the command, e.g. `view` + `notFound`.
    pub fn message_for_key(&self, command_path: &str, key: &str) -> String {
        self.catalog.resolve(&LookupKey::for_command_message(command_path, key)).to_string()
    }

    pub fn flag_error(&self, command_path: &str, kind: Option<ArgumentError>, flag: &str) -> String {
        let key = LookupKey::for_command(command_path).flag(kind, flag);
        debug!("Get message for key [{key}], error type - [{kind:?}], flag - [{flag}]");
        self.catalog.resolve(&key).to_string()
    }

    pub fn sub_command_error(
        &self,
        command_path: &str,
        kind: Option<ArgumentError>,
        sub_command: &str,
    ) -> String {
        let key = LookupKey::for_command(command_path).sub_command(kind, sub_command);
        debug!("Get message for key [{key}], error type - [{kind:?}], sub-command - [{sub_command}]");
        self.catalog.resolve(&key).to_string()
    }

    /// Spinner or display text for a command.
    pub fn service_message(
        &self,
        command_path: &str,
        message_type: Option<MessageType>,
        sub_resource: &str,
        key: &str,
    ) -> String {
        let lookup = LookupKey::for_command(command_path).service(message_type, sub_resource, key);
        debug!(
            "Get message for key [{lookup}], message type - [{message_type:?}], sub-resource - [{sub_resource}]"
        );
        self.catalog.resolve(&lookup).to_string()
    }

    /// Resolve `key` and fill its placeholders from `source`.
    pub fn render<S>(&self, key: &LookupKey, source: &S) -> String
    where
        S: FieldSource + ?Sized,
    {
        self.catalog.render(key, source)
    }

    /// See [`ErrorClassifier::api_error_messages`].
    pub fn api_error_messages(
        &self,
        call: &ApiCall<'_>,
        error: &ApiError,
        console: &dyn ErrorConsole,
    ) -> Vec<String> {
        ErrorClassifier::new(&self.catalog, console).api_error_messages(call, error)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    fn messages() -> Messages {
        Messages::bundled().expect("bundled catalog parses")
    }

    #[test]
    fn command_scoped_lookups() {
        let messages = messages();
        assert_eq!(
            messages.flag_error("test-center test-suite view", Some(ArgumentError::Missing), "id"),
            "Provide a test suite ID with --id or a name with --name."
        );
        assert_eq!(
            messages.sub_command_error("test-center test-suite", Some(ArgumentError::Invalid), "foo"),
            messages.catalog().fallback()
        );
        assert_eq!(
            messages.service_message("test-center run", Some(MessageType::Spinner), "", "submit"),
            "Submitting test run..."
        );
        assert_eq!(
            messages.service_message(
                "test-center run",
                Some(MessageType::TestCmdSpinner),
                "testRun",
                "poll"
            ),
            "Waiting for the test run to finish..."
        );
    }

    #[test]
    fn unknown_selector_resolves_the_command_key_itself() {
        let messages = messages();
        assert_eq!(
            messages.flag_error("test-center test-suite view", None, "id"),
            messages.catalog().fallback()
        );
    }

    #[test]
    fn global_lookups() {
        let messages = messages();
        assert!(messages.global_error("initEdgeRc").contains(".edgerc"));
        assert_eq!(messages.global_error("nope"), messages.catalog().fallback());
        assert!(messages.edge_grid_error("notAuthorized").contains("not authorized"));
    }

    #[test]
    fn lookups_are_shared_across_threads() {
        let messages = messages();
        let expected = messages.message_for_key("test-center test-suite view", "not-found");
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let messages = messages.clone();
                thread::spawn(move || {
                    messages.message_for_key("test-center test-suite view", "not-found")
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
        assert_ne!(expected, messages.catalog().fallback());
    }
}
