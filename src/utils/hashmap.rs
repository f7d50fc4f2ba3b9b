//! A hash-map that behaves deterministically when the
//! `enhanced-determinism` feature is enabled.
//!
//! Without that feature, iteration order depends on the hash of the keys and on the
//! per-map random seed, so it is not stable across runs.

/// Hashmap preserving insertion order, using [`indexmap::IndexMap`].
#[cfg(feature = "enhanced-determinism")]
pub type HashMap<K, V> = indexmap::IndexMap<K, V, hashbrown::DefaultHashBuilder>;

/// Hashmap using [`hashbrown::HashMap`].
#[cfg(not(feature = "enhanced-determinism"))]
pub type HashMap<K, V> = hashbrown::HashMap<K, V, hashbrown::DefaultHashBuilder>;
