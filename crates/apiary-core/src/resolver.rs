//! Request resolution: from descriptor + arguments to a concrete URL.
//!
//! Present arguments are percent-encoded before substitution, so a value
//! can never introduce path segments or query strings of its own. Only the
//! first occurrence of each `{name}` placeholder is replaced; placeholders of
//! absent optional parameters stay in the path as-is.
//!
//! Values made only of dots are rejected: `.` is unreserved, and URL parsing
//! collapses `.` and `..` segments (encoded or not) into the parent path.

use crate::arguments::{Arguments, argument_text};
use crate::endpoint::EndpointDescriptor;
use crate::error::{Error, Result};

/// Percent-encode a value for use inside a single path segment.
///
/// Everything except ASCII alphanumerics and `-`, `_`, `.`, `~` is encoded.
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Resolve a descriptor against call arguments.
///
/// Fails with [`Error::MissingParameters`] listing every required parameter
/// that has no usable value, then with [`Error::InvalidParameter`] for the
/// first value that is a dot segment. Unknown argument keys are ignored.
pub fn resolve(descriptor: &EndpointDescriptor, args: &Arguments) -> Result<String> {
    let mut path = descriptor.path_template.clone();
    let mut missing = Vec::new();
    let mut invalid = None;

    for param in &descriptor.parameters {
        match argument_text(args, &param.name) {
            Some(value) if is_dot_segment(&value) => {
                invalid.get_or_insert_with(|| param.name.clone());
            }
            Some(value) => {
                path = path.replacen(&param.placeholder(), &encode_component(&value), 1);
            }
            None if param.required => missing.push(param.name.clone()),
            None => {}
        }
    }

    if !missing.is_empty() {
        return Err(Error::MissingParameters { missing });
    }
    if let Some(name) = invalid {
        return Err(Error::invalid(name, "dot segments are not allowed"));
    }

    Ok(format!("{}{}", descriptor.base_url, path))
}

fn is_dot_segment(value: &str) -> bool {
    value.chars().all(|c| c == '.')
}

// ============================================================================
// Tests
// ============================================================================
