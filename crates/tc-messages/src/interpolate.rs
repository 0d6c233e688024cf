//! `{{name}}` placeholder substitution.

use crate::key::capitalize;

/// Named field values a message template can refer to.
///
/// Placeholder names are looked up with their first character upper-cased,
/// so `{{testSuiteId}}` asks for `TestSuiteId`.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<String>;
}

/// Ad-hoc values, e.g. `&[("name", "suite".to_string())]`.
impl FieldSource for [(&str, String)] {
    fn field(&self, name: &str) -> Option<String> {
        self.iter().find(|(key, _)| capitalize(key) == name).map(|(_, value)| value.clone())
    }
}

impl<const N: usize> FieldSource for [(&str, String); N] {
    fn field(&self, name: &str) -> Option<String> {
        self.as_slice().field(name)
    }
}

impl FieldSource for Vec<(&str, String)> {
    fn field(&self, name: &str) -> Option<String> {
        self.as_slice().field(name)
    }
}

/// Replace every `{{name}}` in `template` with the matching field of `source`.
/// Unknown fields become empty strings.
pub fn interpolate<S>(template: &str, source: &S) -> String
where
    S: FieldSource + ?Sized,
{
    let names = placeholder_names(template);
    if names.is_empty() {
        return template.to_owned();
    }

    let mut result = template.to_owned();
    for name in names {
        let value = source.field(&capitalize(name)).unwrap_or_default();
        result = result.replace(&format!("{{{{{name}}}}}"), &value);
    }
    result
}

/// Distinct placeholder names in order of first appearance. The shortest
/// `{{...}}` match wins and a name never spans a line break.
pub fn placeholder_names(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        let name = &after[..end];
        if name.contains('\n') {
            rest = &rest[start + 1..];
            continue;
        }
        if !names.contains(&name) {
            names.push(name);
        }
        rest = &after[end + 2..];
    }
    names
}
