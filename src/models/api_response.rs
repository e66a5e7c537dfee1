use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{BboxError, BboxResult};

/// Decodes a router response body and pulls out the document at `path`.
///
/// The router wraps every payload in a one-element array keyed by family,
/// e.g. `[{"wan": {"xdsl": {...}}}]`, so `path` starts below that array.
pub(crate) fn extract<T>(body: &str, path: &[&str]) -> BboxResult<T>
where
    T: DeserializeOwned,
{
    let mut document: Value = serde_json::from_str(body)?;

    let pointer = path.iter().fold(String::from("/0"), |mut pointer, key| {
        pointer.push('/');
        pointer.push_str(key);
        pointer
    });

    let value = document.pointer_mut(&pointer).map(Value::take).ok_or_else(|| {
        BboxError::UnexpectedResponse(format!("missing {} in response", path.join(".")))
    })?;

    Ok(serde_json::from_value(value)?)
}
