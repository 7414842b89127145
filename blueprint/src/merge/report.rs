//! Bookkeeping for a single merge call.

/// Names of the fields touched or skipped by a merge, in traversal order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MergeReport {
    applied: Vec<&'static str>,
    absent: Vec<&'static str>,
    restricted: Vec<&'static str>,
    unknown: Vec<String>,
}

impl MergeReport {
    /// Fields overwritten on the target.
    #[must_use]
    pub fn applied(&self) -> &[&'static str] {
        &self.applied
    }

    /// Fields left alone because the source held no value.
    #[must_use]
    pub fn absent(&self) -> &[&'static str] {
        &self.absent
    }

    /// Restricted fields the engine skipped.
    #[must_use]
    pub fn restricted(&self) -> &[&'static str] {
        &self.restricted
    }

    /// Map keys that matched no declared field.
    #[must_use]
    pub fn unknown(&self) -> &[String] {
        &self.unknown
    }

    /// Returns `true` when no field on the target was overwritten.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }

    pub(crate) fn record_applied(&mut self, field: &'static str) {
        self.applied.push(field);
    }

    pub(crate) fn record_absent(&mut self, field: &'static str) {
        self.absent.push(field);
    }

    pub(crate) fn record_restricted(&mut self, field: &'static str) {
        self.restricted.push(field);
    }

    pub(crate) fn record_unknown(&mut self, key: &str) {
        self.unknown.push(key.to_owned());
    }
}
