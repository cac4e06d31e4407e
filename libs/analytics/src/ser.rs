use serde::{ser::SerializeMap, Serialize, Serializer};

/// Serialize `None` as `{}` instead of `null`.
pub(crate) fn none_as_empty_object<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
