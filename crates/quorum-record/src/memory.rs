//! # In-Memory Record Store
//!
//! DashMap-backed [`RecordStore`] for tests and local tooling. Holds the
//! records of a single organization and can be told to fail sensitive
//! writes, which is how the partial-failure policy is exercised.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dashmap::DashMap;

use quorum_core::{OrganizationId, PersonCategory, RecordId, StoreError};
use quorum_template::FieldTemplate;

use crate::shards::{CustomBag, PersonRecord, RecordStatus, SensitiveShard, StandardShard};
use crate::store::{RecordStore, ReportsToCandidate};

/// Inner storage holding all maps.
struct Inner {
    templates: DashMap<(OrganizationId, PersonCategory), FieldTemplate>,
    standard: DashMap<RecordId, (StandardShard, CustomBag)>,
    sensitive: DashMap<RecordId, SensitiveShard>,
    fail_sensitive: AtomicBool,
}

/// A single-organization in-memory record store.
///
/// Cheaply cloneable via `Arc` — all clones share the same data.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                templates: DashMap::new(),
                standard: DashMap::new(),
                sensitive: DashMap::new(),
                fail_sensitive: AtomicBool::new(false),
            }),
        }
    }

    /// Install (or replace) the template for an organization/category pair.
    /// Last write wins; there is no template versioning.
    pub fn put_template(&self, template: FieldTemplate) {
        self.inner
            .templates
            .insert((template.organization, template.category), template);
    }

    /// Make subsequent sensitive-shard writes fail.
    pub fn set_sensitive_failure(&self, fail: bool) {
        self.inner.fail_sensitive.store(fail, Ordering::SeqCst);
    }

    /// The stored sensitive shard for a record, if one was written.
    pub fn sensitive_row(&self, id: RecordId) -> Option<SensitiveShard> {
        self.inner.sensitive.get(&id).map(|entry| entry.value().clone())
    }

    /// Number of standard rows held.
    pub fn standard_count(&self) -> usize {
        self.inner.standard.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryStore {
    fn template(
        &self,
        organization: OrganizationId,
        category: PersonCategory,
    ) -> Result<FieldTemplate, StoreError> {
        self.inner
            .templates
            .get(&(organization, category))
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::TemplateNotFound {
                organization,
                category,
            })
    }

    fn insert_standard(
        &self,
        standard: &StandardShard,
        custom: &CustomBag,
    ) -> Result<RecordId, StoreError> {
        let id = RecordId::new();
        self.inner
            .standard
            .insert(id, (standard.clone(), custom.clone()));
        Ok(id)
    }

    fn insert_sensitive(
        &self,
        id: RecordId,
        sensitive: &SensitiveShard,
    ) -> Result<(), StoreError> {
        if self.inner.fail_sensitive.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "sensitive store rejected the write".into(),
            ));
        }
        if !self.inner.standard.contains_key(&id) {
            return Err(StoreError::RecordNotFound(id));
        }
        self.inner.sensitive.insert(id, sensitive.clone());
        Ok(())
    }

    fn record(&self, id: RecordId) -> Result<PersonRecord, StoreError> {
        let (standard, custom) = self
            .inner
            .standard
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::RecordNotFound(id))?;
        let sensitive = self
            .inner
            .sensitive
            .get(&id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();
        Ok(PersonRecord {
            id,
            standard,
            sensitive,
            custom,
        })
    }

    fn reports_to_candidates(
        &self,
        _organization: OrganizationId,
    ) -> Result<Vec<ReportsToCandidate>, StoreError> {
        let mut candidates: Vec<ReportsToCandidate> = self
            .inner
            .standard
            .iter()
            .filter(|entry| entry.value().0.status == RecordStatus::Active)
            .filter_map(|entry| {
                let (standard, _) = entry.value();
                standard.full_name.as_ref().map(|name| ReportsToCandidate {
                    id: *entry.key(),
                    name: name.clone(),
                    position: standard.position.clone(),
                })
            })
            .collect();
        candidates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(candidates)
    }
}
