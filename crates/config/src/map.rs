use std::fmt;
use std::marker::PhantomData;

/// String-keyed map that keeps entries in the order they were written.
///
/// Duplicate keys are kept as-is so [`SiteConfig::validate`][crate::SiteConfig::validate] can
/// report them instead of silently dropping one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Default::default(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, keeping any earlier entry with the same key.
    pub fn push(&mut self, key: impl Into<String>, value: V) {
        self.entries.push((key.into(), value));
    }

    pub fn with(mut self, key: impl Into<String>, value: V) -> Self {
        self.push(key, value);
        self
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self { entries }
    }
}

impl<V: serde::Serialize> serde::Serialize for OrderedMap<V> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// An explicit null (`locales: ~`) reads as an empty map.
impl<'de, V: serde::Deserialize<'de>> serde::Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(OrderedMapVisitor(PhantomData))
    }
}

struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V: serde::Deserialize<'de>> serde::de::Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping")
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(OrderedMap::new())
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(OrderedMap::new())
    }

    fn visit_some<D: serde::Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A: serde::de::MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::new();
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            map.push(key, value);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let map = OrderedMap::new().with("zh", 2).with("root", 1).with("ja", 3);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["zh", "root", "ja"]);
    }

    #[test]
    fn get_returns_first_duplicate() {
        let map = OrderedMap::new().with("zh", 1).with("zh", 2);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("zh"), Some(&1));
    }

    #[test]
    fn yaml_preserves_order() {
        let map: OrderedMap<String> = serde_yaml::from_str("b: one\na: two\nc: three\n").unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "a", "c"]);

        let yaml = serde_yaml::to_string(&map).unwrap();
        assert_eq!(yaml, "b: one\na: two\nc: three\n");
    }

    #[test]
    fn yaml_null_is_empty() {
        let map: OrderedMap<String> = serde_yaml::from_str("~").unwrap();
        assert!(map.is_empty());

        let err = serde_yaml::from_str::<OrderedMap<String>>("[a, b]").unwrap_err();
        assert!(err.to_string().contains("a mapping"), "{err}");
    }
}
