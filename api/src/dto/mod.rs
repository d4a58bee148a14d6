//! Request and response DTOs

pub mod pi_request;

use validator::{ValidationErrors, ValidationErrorsKind};

/// Flatten validator output into per-field messages
///
/// Field names are reported in the wire's camelCase form, nested payloads
/// with a dotted prefix (`personalInfo.firstName: ...`). The list is
/// sorted so responses are stable.
pub fn collect_error_details(errors: &ValidationErrors) -> Vec<String> {
    let mut details = Vec::new();
    flatten("", errors, &mut details);
    details.sort();
    details
}

fn flatten(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let name = if prefix.is_empty() {
            to_camel_case(field)
        } else {
            format!("{prefix}.{}", to_camel_case(field))
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push(format!("{name}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten(&name, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten(&format!("{name}[{index}]"), nested, out);
                }
            }
        }
    }
}

fn to_camel_case(field: &str) -> String {
    let mut parts = field.split('_');
    let mut result = parts.next().unwrap_or_default().to_string();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
            result.extend(chars);
        }
    }
    result
}
