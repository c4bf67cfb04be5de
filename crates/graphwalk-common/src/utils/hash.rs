//! Hash collections used across the workspace.
//!
//! `hashbrown` tables keyed with `ahash`. Node ids come from untrusted edge
//! lists, so tables always use a randomly seeded hasher.

/// Hash map with the workspace's default hasher.
pub type FastHashMap<K, V> = hashbrown::HashMap<K, V, ahash::RandomState>;

/// Hash set with the workspace's default hasher.
pub type FastHashSet<T> = hashbrown::HashSet<T, ahash::RandomState>;
