//! Lookup keys into the message catalog.
//!
//! A command path such as `test-center test-suite view` maps to the dotted key
//! `akamai.testCenter.testSuite.view`; error, flag and message keys hang off
//! that base key.

use std::fmt;

use tracing::debug;

/// Namespace every lookup key is rooted at.
pub const ROOT_NAMESPACE: &str = "akamai";

const KEY_SEPARATOR: char = '.';
const GLOBAL_KEY: &str = "global";
const EDGE_GRID_ERROR_KEY: &str = "edgeGridError";
const FLAG_KEY: &str = "flag";
const SUB_COMMAND_KEY: &str = "subCommand";
const MESSAGES_KEY: &str = "messages";

/// Dotted path into the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LookupKey(String);

impl LookupKey {
    /// Key for a space separated command path. Hyphenated command names are
    /// camelCased and the root namespace is prepended unless one of the
    /// segments already is the root namespace.
    pub fn for_command(command_path: &str) -> Self {
        debug!("Get lookup key for command [{command_path}]");
        let candidate = command_path
            .split_whitespace()
            .map(|segment| camel_case(segment.split('-')))
            .collect::<Vec<_>>()
            .join(".");

        if candidate.is_empty() {
            return Self(ROOT_NAMESPACE.to_string());
        }
        if candidate.split(KEY_SEPARATOR).any(|segment| segment == ROOT_NAMESPACE) {
            return Self(candidate);
        }
        Self(format!("{ROOT_NAMESPACE}.{candidate}"))
    }

    /// Key of a message stored directly under a command.
    pub fn for_command_message(command_path: &str, key: &str) -> Self {
        Self::for_command(&format!("{command_path} {key}"))
    }

    /// Key of a command-independent message, `akamai.global.<key>`.
    pub fn global(key: &str) -> Self {
        Self(format!("{ROOT_NAMESPACE}.{GLOBAL_KEY}.{key}"))
    }

    /// Key of an edge grid (authentication/transport) message.
    pub fn edge_grid(key: &str) -> Self {
        Self(format!("{ROOT_NAMESPACE}.{GLOBAL_KEY}.{EDGE_GRID_ERROR_KEY}.{key}"))
    }

    /// Append dotted segments to this key.
    pub fn join<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Self {
        let mut key = self.0.clone();
        for segment in segments {
            key.push(KEY_SEPARATOR);
            key.push_str(segment);
        }
        Self(key)
    }

    /// `<base>.flag.<kind>.<flag>`; no kind leaves the key untouched.
    pub fn flag(&self, kind: Option<ArgumentError>, flag: &str) -> Self {
        match kind {
            Some(kind) => self.join([FLAG_KEY, kind.as_str(), flag]),
            None => self.clone(),
        }
    }

    /// `<base>.subCommand.<kind>.<name>`; no kind leaves the key untouched.
    pub fn sub_command(&self, kind: Option<ArgumentError>, name: &str) -> Self {
        match kind {
            Some(kind) => self.join([SUB_COMMAND_KEY, kind.as_str(), name]),
            None => self.clone(),
        }
    }

    /// Key of a service message (spinner or display text) for a command.
    pub fn service(&self, message_type: Option<MessageType>, sub_resource: &str, key: &str) -> Self {
        match message_type {
            Some(MessageType::Spinner) => {
                self.join([MESSAGES_KEY, MessageType::Spinner.as_str(), key])
            }
            Some(MessageType::Display) => {
                self.join([MESSAGES_KEY, MessageType::Display.as_str(), key])
            }
            Some(MessageType::TestCmdSpinner) => {
                self.join([MESSAGES_KEY, sub_resource, MessageType::Spinner.as_str(), key])
            }
            None => self.clone(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(KEY_SEPARATOR)
    }
}

/// Wraps an already dotted key verbatim.
impl From<&str> for LookupKey {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl AsRef<str> for LookupKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a flag or sub-command was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    Missing,
    Invalid,
}

impl ArgumentError {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "missing" => Some(Self::Missing),
            "invalid" => Some(Self::Invalid),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Invalid => "invalid",
        }
    }
}

/// Kind of non-error message a command shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageType {
    Spinner,
    Display,
    /// Spinner text scoped to a sub-resource of the test commands.
    TestCmdSpinner,
}

impl MessageType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "spinner" => Some(Self::Spinner),
            "display" => Some(Self::Display),
            "testCmdSpinner" => Some(Self::TestCmdSpinner),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spinner => "spinner",
            Self::Display => "display",
            Self::TestCmdSpinner => "testCmdSpinner",
        }
    }
}

/// Key segment for a dotted API error type: `validation.error` -> `validationError`.
pub fn error_type_key(error_type: &str) -> String {
    camel_case(error_type.split(KEY_SEPARATOR))
}

/// Key segment for an edge grid detail sentence: `Invalid timestamp` -> `invalidTimestamp`.
pub fn detail_key(detail: &str) -> String {
    let mut words = detail.split(' ');
    let mut key = words.next().map(str::to_lowercase).unwrap_or_default();
    for word in words {
        key.push_str(&capitalize(word));
    }
    key
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn camel_case<'a>(mut parts: impl Iterator<Item = &'a str>) -> String {
    let mut joined = parts.next().unwrap_or_default().to_string();
    for part in parts {
        joined.push_str(&capitalize(part));
    }
    joined
}
