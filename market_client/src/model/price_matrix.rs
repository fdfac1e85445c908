//! Order-preserving string-keyed map used for the `/simple/price` payload.
//!
//! The API answers with `{ "bitcoin": { "eur": 28135, "usd": 30628 }, ... }`.
//! Consumers list coins and currencies in the order the body lists them, so the
//! payload is decoded into a vector of entries, with a hash index beside it
//! for key lookups.
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

/// Coin id → (currency code → price), in body order.
pub type PriceMatrix = OrderedMap<OrderedMap<f64>>;

/// Map with unique string keys that iterates in insertion order.
///
/// Inserting an existing key replaces its value in place, keeping the position
/// of the first occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    /// Key → position in `entries`.
    index: HashMap<String, usize>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        OrderedMap {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_capacity(capacity: usize) -> Self {
        OrderedMap {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts `value` under `key`, returning the previous value if the key existed.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.index.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = OrderedMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_body_order_at_both_levels() {
        let body = r#"{
            "cardano": {"jpy": 42.51, "eur": 0.269991},
            "bitcoin": {"usd": 30628, "eur": 28135}
        }"#;
        let matrix: PriceMatrix = serde_json::from_str(body).unwrap();

        assert_eq!(matrix.keys().collect::<Vec<_>>(), vec!["cardano", "bitcoin"]);
        let cardano = matrix.get("cardano").unwrap();
        assert_eq!(cardano.keys().collect::<Vec<_>>(), vec!["jpy", "eur"]);
        assert_eq!(cardano.get("jpy"), Some(&42.51));
        assert_eq!(matrix.get("bitcoin").unwrap().get("usd"), Some(&30628.0));
    }

    #[test]
    fn duplicate_key_keeps_last_value_at_first_position() {
        let body = r#"{"a": 1, "b": 2, "a": 3}"#;
        let map: OrderedMap<f64> = serde_json::from_str(body).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.iter().collect::<Vec<_>>(), vec![("a", &3.0), ("b", &2.0)]);
    }

    #[test]
    fn prices_keep_every_significant_digit() {
        let body = r#"{"bitcoin": {"eur": 28058.665368361602, "usd": 30628}}"#;
        let matrix: PriceMatrix = serde_json::from_str(body).unwrap();

        let eur = *matrix.get("bitcoin").unwrap().get("eur").unwrap();
        assert_eq!(eur.to_bits(), 28058.665368361602_f64.to_bits());
        assert_eq!(eur.to_string(), "28058.665368361602");
    }

    #[test]
    fn many_keys_keep_order_and_lookups() {
        let map: OrderedMap<usize> = (0..1000).rev().map(|i| (format!("coin-{i}"), i)).collect();

        assert_eq!(map.len(), 1000);
        assert_eq!(map.keys().next(), Some("coin-999"));
        assert_eq!(map.keys().last(), Some("coin-0"));
        assert_eq!(map.get("coin-500"), Some(&500));
        assert_eq!(map.get("coin-1000"), None);
    }

    #[test]
    fn null_body_decodes_as_absent() {
        let matrix: Option<PriceMatrix> = serde_json::from_str("null").unwrap();
        assert!(matrix.is_none());
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let body = r#"{"bitcoin": {"usd": "a lot"}}"#;
        assert!(serde_json::from_str::<PriceMatrix>(body).is_err());
    }

    #[test]
    fn array_body_is_rejected() {
        assert!(serde_json::from_str::<PriceMatrix>("[1, 2]").is_err());
    }

    #[test]
    fn collects_from_pairs() {
        let map: OrderedMap<u8> = vec![("x", 1), ("y", 2), ("x", 4)].into_iter().collect();
        assert_eq!(map.into_iter().collect::<Vec<_>>(), vec![
            (String::from("x"), 4),
            (String::from("y"), 2)
        ]);
    }
}
