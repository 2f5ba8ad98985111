//! In-process person store.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use crate::people::error::StoreError;
use crate::people::model::{NewPerson, Person, PersonUpdate};
use crate::people::query::{PersonFilter, PersonQuery};

struct Record {
    seq: u64,
    person: Person,
}

#[derive(Default)]
struct Inner {
    records: DashMap<Uuid, Record>,
    next_seq: AtomicU64,
}

/// Shared handle to the people collection. Clones see the same data.
#[derive(Clone, Default)]
pub struct PersonStore {
    inner: Arc<Inner>,
}

impl PersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.records.is_empty()
    }

    /// Validate and insert one person.
    pub fn create(&self, new: NewPerson) -> Result<Person, StoreError> {
        let person = new.into_person()?;
        self.insert(person.clone());
        tracing::debug!(id = %person.id, name = %person.name, "Person created");
        Ok(person)
    }

    /// Insert several people. Nothing is stored if any of them is invalid.
    pub fn create_many(&self, people: Vec<NewPerson>) -> Result<Vec<Person>, StoreError> {
        let people = people
            .into_iter()
            .map(NewPerson::into_person)
            .collect::<Result<Vec<_>, _>>()?;

        for person in &people {
            self.insert(person.clone());
        }
        tracing::debug!(count = people.len(), "People created");
        Ok(people)
    }

    pub fn find_by_name(&self, name: &str) -> Vec<Person> {
        self.matching(&PersonFilter::by_name(name))
    }

    /// Earliest inserted person who likes `food`.
    pub fn find_one_by_food(&self, food: &str) -> Option<Person> {
        self.first_matching(&PersonFilter::by_food(food))
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<Person> {
        self.inner.records.get(&id).map(|r| r.person.clone())
    }

    /// Load, edit and save a person. The edited record is validated before it replaces the stored one.
    ///
    /// `edit` runs with no lock held, so it may read the store.
    pub fn update_by_id<F>(&self, id: Uuid, edit: F) -> Result<Person, StoreError>
    where
        F: FnOnce(&mut Person),
    {
        let mut edited = self.find_by_id(id).ok_or(StoreError::NotFound(id))?;
        edit(&mut edited);
        edited.id = id;
        edited.validate()?;

        let mut record = self
            .inner
            .records
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;
        record.person = edited.clone();
        Ok(edited)
    }

    /// Update the earliest person named `name` and return the updated document.
    pub fn find_one_and_update(
        &self,
        name: &str,
        update: PersonUpdate,
    ) -> Result<Option<Person>, StoreError> {
        let filter = PersonFilter::by_name(name);

        loop {
            let Some(found) = self.first_matching(&filter) else {
                return Ok(None);
            };

            // the record may have been renamed or removed since the lookup
            if let Some(updated) = self.update_if_matching(found.id, &filter, &update) {
                return updated.map(Some);
            }
        }
    }

    /// Apply `update` to `id` only if it still matches `filter`, checked under the write lock.
    fn update_if_matching(
        &self,
        id: Uuid,
        filter: &PersonFilter,
        update: &PersonUpdate,
    ) -> Option<Result<Person, StoreError>> {
        let mut record = self.inner.records.get_mut(&id)?;
        if !filter.matches(&record.person) {
            return None;
        }

        let mut edited = record.person.clone();
        update.apply(&mut edited);
        if let Err(e) = edited.validate() {
            return Some(Err(e));
        }

        record.person = edited.clone();
        Some(Ok(edited))
    }

    /// Remove a person, returning the removed document.
    pub fn remove_by_id(&self, id: Uuid) -> Option<Person> {
        self.inner.records.remove(&id).map(|(_, r)| r.person)
    }

    /// Remove everyone named `name`, returning how many were removed.
    pub fn remove_many(&self, name: &str) -> usize {
        let mut removed = 0;
        self.inner.records.retain(|_, record| {
            if record.person.name == name {
                removed += 1;
                false
            } else {
                true
            }
        });
        removed
    }

    /// Start a chained query.
    pub fn find(&self, filter: PersonFilter) -> PersonQuery {
        PersonQuery::new(self.clone(), filter)
    }

    /// Matching people in insertion order.
    pub(crate) fn matching(&self, filter: &PersonFilter) -> Vec<Person> {
        let mut found: Vec<(u64, Person)> = self
            .inner
            .records
            .iter()
            .filter(|r| filter.matches(&r.person))
            .map(|r| (r.seq, r.person.clone()))
            .collect();
        found.sort_by_key(|(seq, _)| *seq);
        found.into_iter().map(|(_, person)| person).collect()
    }

    fn first_matching(&self, filter: &PersonFilter) -> Option<Person> {
        self.inner
            .records
            .iter()
            .filter(|r| filter.matches(&r.person))
            .min_by_key(|r| r.seq)
            .map(|r| r.person.clone())
    }

    fn insert(&self, person: Person) {
        let seq = self.inner.next_seq.fetch_add(1, Ordering::Relaxed);
        self.inner.records.insert(person.id, Record { seq, person });
    }
}
