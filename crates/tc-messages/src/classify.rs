//! Turns failed API calls into user facing messages.
//!
//! Failures that never reached the application (bad credentials, wrong host)
//! are printed and end the process. Application errors are resolved against
//! the command that made the call, one message per sub-error.

use tracing::{debug, warn};

use crate::{
    api_error::{ApiError, ApiSubError},
    catalog::Catalog,
    console::{ErrorConsole, http_exit_code},
    key::{LookupKey, capitalize, detail_key, error_type_key},
};

const RESOURCE_NOT_FOUND: &str = "resourceNotFound";
const RESOURCE_IN_DELETED_STATE: &str = "resourceInDeletedState";
const ASSOCIATION_NOT_FOUND: &str = "associationNotFound";
const NOT_AUTHORIZED: &str = "notAuthorized";
const INIT_EDGE_RC: &str = "initEdgeRc";
const UNAUTHORIZED_RESPONSE: &str = "401";

/// The API call that failed, as seen from the command that issued it.
#[derive(Clone, Copy, Debug)]
pub struct ApiCall<'a> {
    /// Space separated command path, e.g. `test-center run`.
    pub command_path: &'a str,
    pub sub_resource: &'a str,
    pub operation: &'a str,
    /// HTTP status of the response as received, e.g. `"404"`.
    pub response_code: &'a str,
}

impl ApiCall<'_> {
    /// `<command> <sub_resource> <operation> <parts...>` as a lookup key.
    fn error_key(&self, parts: &[&str]) -> LookupKey {
        let command_key = LookupKey::for_command(self.command_path);
        let mut path = vec![command_key.as_str(), self.sub_resource, self.operation];
        path.extend_from_slice(parts);
        LookupKey::for_command(&path.join(" "))
    }
}

/// A more specific message for some sub-errors, used when the catalog has it.
struct SubErrorOverride {
    sub_error_keys: &'static [&'static str],
    applies: fn(&ApiSubError) -> bool,
    suffix: fn(&ApiSubError, &str) -> String,
}

/// Tried in order; the first row with an existing key wins.
const SUB_ERROR_OVERRIDES: &[SubErrorOverride] = &[
    SubErrorOverride {
        sub_error_keys: &[RESOURCE_NOT_FOUND, RESOURCE_IN_DELETED_STATE],
        applies: |_| true,
        suffix: |sub, sub_key| format!("{}{}", sub.request_field, capitalize(sub_key)),
    },
    SubErrorOverride {
        sub_error_keys: &[ASSOCIATION_NOT_FOUND],
        applies: |sub| sub.requirement_id != 0,
        suffix: |_, sub_key| format!("requirementIdTestSuiteId{}", capitalize(sub_key)),
    },
    SubErrorOverride {
        sub_error_keys: &[ASSOCIATION_NOT_FOUND],
        applies: |sub| sub.config_version_id != 0,
        suffix: |_, sub_key| format!("configVersionIdTestSuiteId{}", capitalize(sub_key)),
    },
    SubErrorOverride {
        sub_error_keys: &[ASSOCIATION_NOT_FOUND],
        applies: |sub| sub.test_suite_id != 0,
        suffix: |_, sub_key| format!("testSuiteIdTestCaseId{}", capitalize(sub_key)),
    },
];

/// Transport or credential failure rather than an application error.
pub fn is_edge_failure(error: &ApiError, response_code: &str) -> bool {
    (!error.client_ip.is_empty() && !error.server_ip.is_empty() && !error.request_id.is_empty())
        || (response_code == UNAUTHORIZED_RESPONSE && !error.code.is_empty())
}

pub struct ErrorClassifier<'a> {
    catalog: &'a Catalog,
    console: &'a dyn ErrorConsole,
    exit_codes: fn(&str) -> i32,
}

impl<'a> ErrorClassifier<'a> {
    pub fn new(catalog: &'a Catalog, console: &'a dyn ErrorConsole) -> Self {
        Self { catalog, console, exit_codes: http_exit_code }
    }

    /// Replace the HTTP response code to exit status mapping.
    pub fn with_exit_codes(mut self, exit_codes: fn(&str) -> i32) -> Self {
        self.exit_codes = exit_codes;
        self
    }

    /// Messages for a failed API call. Edge failures do not return: their
    /// messages go to the console, which then exits.
    pub fn api_error_messages(&self, call: &ApiCall<'_>, error: &ApiError) -> Vec<String> {
        if is_edge_failure(error, call.response_code) {
            self.report_edge_failure(error, call.response_code);
        }

        let parent_key = error_type_key(&error.error_type);
        if !error.errors.is_empty() {
            return self.sub_error_messages(call, &error.errors, &parent_key);
        }

        let key = call.error_key(&[&parent_key]);
        vec![self.catalog.render(&key, error)]
    }

    /// One message per sub-error, in input order, each filled from its own
    /// sub-error.
    pub fn sub_error_messages(
        &self,
        call: &ApiCall<'_>,
        sub_errors: &[ApiSubError],
        parent_key: &str,
    ) -> Vec<String> {
        sub_errors
            .iter()
            .map(|sub| {
                let key = self.sub_error_key(call, sub, parent_key);
                self.catalog.render(&key, sub)
            })
            .collect()
    }

    fn sub_error_key(&self, call: &ApiCall<'_>, sub: &ApiSubError, parent_key: &str) -> LookupKey {
        let sub_key = error_type_key(&sub.error_type);
        let generic = call.error_key(&[parent_key, &sub_key]);

        let specific = SUB_ERROR_OVERRIDES
            .iter()
            .filter(|row| row.sub_error_keys.iter().any(|key| *key == sub_key) && (row.applies)(sub))
            .map(|row| generic.join([(row.suffix)(sub, &sub_key).as_str()]))
            .find(|key| self.catalog.exists(key));

        match specific {
            Some(key) => {
                debug!("Using specific key [{key}] for sub-error [{sub_key}]");
                key
            }
            None => generic,
        }
    }

    fn report_edge_failure(&self, error: &ApiError, response_code: &str) -> ! {
        warn!(
            status = error.status,
            response_code,
            request_id = %error.request_id,
            "API call failed below the application layer"
        );

        if matches!(error.status, 400 | 401) && !error.detail.is_empty() {
            self.print(&LookupKey::edge_grid(&detail_key(&error.detail)));
        }
        if error.status == 404 {
            self.print(&LookupKey::edge_grid(RESOURCE_NOT_FOUND));
        }
        if response_code == UNAUTHORIZED_RESPONSE && !error.code.is_empty() {
            self.print(&LookupKey::edge_grid(NOT_AUTHORIZED));
        }
        self.print(&LookupKey::global(INIT_EDGE_RC));

        self.console.exit((self.exit_codes)(response_code))
    }

    fn print(&self, key: &LookupKey) {
        self.console.print_error(self.catalog.resolve(key));
    }
}
