//! Collision-free heading id allocation

use std::collections::HashSet;

/// Reserve `candidate` in `used_ids`, disambiguating on collision
///
/// An unused candidate is returned unchanged. Otherwise `candidate-2`,
/// `candidate-3`, … are probed until a free id is found. Earlier ids are
/// never renumbered, so the result depends only on allocation order.
pub fn allocate_unique_id(candidate: &str, used_ids: &mut HashSet<String>) -> String {
    if used_ids.insert(candidate.to_string()) {
        return candidate.to_string();
    }

    let mut suffix = 2usize;
    loop {
        let probe = format!("{candidate}-{suffix}");
        if used_ids.insert(probe.clone()) {
            return probe;
        }
        suffix += 1;
    }
}

/// Per-document id allocator
///
/// Feed headings in document order; the numbering of `-2`, `-3` suffixes is
/// then reproducible for the same markup.
#[derive(Debug, Default)]
pub struct UniqueIdAllocator {
    used: HashSet<String>,
}

impl UniqueIdAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve and return the final id for `candidate`
    pub fn allocate(&mut self, candidate: &str) -> String {
        allocate_unique_id(candidate, &mut self.used)
    }

    /// Whether `id` has already been handed out
    #[must_use]
    pub fn is_used(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.used.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
