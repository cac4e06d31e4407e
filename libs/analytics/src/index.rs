//! Lookup structures for joining records by key.
//!
//! Records whose key is absent are left out of every index.

use medscope_models::Address;
use serde_json::Value;
use std::collections::HashMap;
use std::hash::Hash;

/// Single-valued map. A later record with the same key replaces an earlier one.
pub fn index_by<'a, T, K, F>(records: &'a [T], key: F) -> HashMap<K, &'a T>
where
    K: Eq + Hash,
    F: Fn(&T) -> Option<K>,
{
    let mut map = HashMap::with_capacity(records.len());
    for record in records {
        if let Some(k) = key(record) {
            map.insert(k, record);
        }
    }
    map
}

/// Single-valued map that keeps the first record seen for each key.
pub fn index_first_by<'a, T, K, F>(records: &'a [T], key: F) -> HashMap<K, &'a T>
where
    K: Eq + Hash,
    F: Fn(&T) -> Option<K>,
{
    let mut map = HashMap::with_capacity(records.len());
    for record in records {
        if let Some(k) = key(record) {
            map.entry(k).or_insert(record);
        }
    }
    map
}

/// Multi-valued map preserving record order within each key.
pub fn group_by<'a, T, K, F>(records: &'a [T], key: F) -> HashMap<K, Vec<&'a T>>
where
    K: Eq + Hash,
    F: Fn(&T) -> Option<K>,
{
    let mut map: HashMap<K, Vec<&'a T>> = HashMap::new();
    for record in records {
        if let Some(k) = key(record) {
            map.entry(k).or_default().push(record);
        }
    }
    map
}

/// Groups in order of each key's first appearance.
pub fn group_ordered_by<'a, T, K, F>(records: &'a [T], key: F) -> Vec<(K, Vec<&'a T>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> Option<K>,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a T>)> = Vec::new();
    for record in records {
        let Some(k) = key(record) else {
            continue;
        };
        match positions.get(&k) {
            Some(&pos) => groups[pos].1.push(record),
            None => {
                positions.insert(k.clone(), groups.len());
                groups.push((k, vec![record]));
            }
        }
    }
    groups
}

/// Number of records per key.
pub fn count_by<T, K, F>(records: &[T], key: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> Option<K>,
{
    let mut counts = HashMap::new();
    for record in records {
        if let Some(k) = key(record) {
            *counts.entry(k).or_insert(0) += 1;
        }
    }
    counts
}

/// How a hospital's address is picked when it has several.
///
/// The endpoints disagree on this and each keeps its own rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressSelection {
    /// Last address record of any type.
    Latest,
    /// First address record of any type.
    FirstSeen,
    /// First address record carrying a non-empty city.
    FirstWithCity,
    /// Last address of type "Primary".
    LatestPrimary,
    /// First address of type "Primary".
    FirstPrimary,
}

/// hospital_id → address under the given selection rule.
pub fn addresses_by_hospital(
    addresses: &[Address],
    selection: AddressSelection,
) -> HashMap<i64, &Address> {
    match selection {
        AddressSelection::Latest => index_by(addresses, |a| a.hospital_id),
        AddressSelection::FirstSeen => index_first_by(addresses, |a| a.hospital_id),
        AddressSelection::FirstWithCity => index_first_by(addresses, |a| {
            a.city_town
                .as_deref()
                .filter(|city| !city.is_empty())
                .and(a.hospital_id)
        }),
        AddressSelection::LatestPrimary => {
            index_by(addresses, |a| a.hospital_id.filter(|_| a.is_primary()))
        }
        AddressSelection::FirstPrimary => {
            index_first_by(addresses, |a| a.hospital_id.filter(|_| a.is_primary()))
        }
    }
}

/// Integer attribute of a raw record.
pub fn raw_id(record: &Value, key: &str) -> Option<i64> {
    record.get(key).and_then(Value::as_i64)
}

/// Display text for a raw record attribute. A missing record or key reads as
/// "N/A", an explicit null stays null.
pub fn text_or_na(record: Option<&Value>, key: &str) -> Option<String> {
    match record.and_then(|r| r.get(key)) {
        None => Some("N/A".into()),
        Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => Some(other.to_string()),
    }
}
