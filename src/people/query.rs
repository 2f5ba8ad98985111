//! Chainable queries: filter → sort → limit → select → exec.

use serde_json::{Map, Value};
use std::cmp::Ordering;

use crate::people::error::StoreError;
use crate::people::model::Person;
use crate::people::store::PersonStore;

/// Which people a query starts from. Empty matches everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonFilter {
    pub name: Option<String>,
    pub favorite_food: Option<String>,
}

impl PersonFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn by_food(food: impl Into<String>) -> Self {
        Self {
            favorite_food: Some(food.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, person: &Person) -> bool {
        self.name.as_deref().map_or(true, |name| person.name == name)
            && self
                .favorite_food
                .as_deref()
                .map_or(true, |food| person.likes(food))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Age,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Field selection in document notation: `"-age"` drops a field,
/// `"name favoriteFoods"` keeps only those (plus `_id`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl Projection {
    pub fn parse(spec: &str) -> Result<Self, StoreError> {
        let mut include = Vec::new();
        let mut exclude = Vec::new();

        for field in spec.split_whitespace() {
            match field.strip_prefix('-') {
                Some(excluded) => exclude.push(excluded.to_string()),
                None => include.push(field.to_string()),
            }
        }

        // `_id` is the one field that may be excluded from an inclusion list.
        if !include.is_empty() && exclude.iter().any(|f| f != "_id") {
            return Err(StoreError::Projection(spec.to_string()));
        }

        Ok(Self { include, exclude })
    }

    pub fn apply(&self, document: Value) -> Value {
        let Value::Object(fields) = document else {
            return document;
        };

        let kept: Map<String, Value> = fields
            .into_iter()
            .filter(|(key, _)| self.keeps(key))
            .collect();
        Value::Object(kept)
    }

    fn keeps(&self, key: &str) -> bool {
        if self.exclude.iter().any(|f| f == key) {
            return false;
        }
        self.include.is_empty() || key == "_id" || self.include.iter().any(|f| f == key)
    }
}

/// A query under construction. Nothing runs until [`PersonQuery::exec`].
pub struct PersonQuery {
    store: PersonStore,
    filter: PersonFilter,
    sort: Option<(SortKey, SortOrder)>,
    limit: Option<usize>,
    projection: Option<Projection>,
}

impl PersonQuery {
    pub(crate) fn new(store: PersonStore, filter: PersonFilter) -> Self {
        Self {
            store,
            filter,
            sort: None,
            limit: None,
            projection: None,
        }
    }

    pub fn sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort = Some((key, order));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn select(mut self, projection: Projection) -> Self {
        self.projection = Some(projection);
        self
    }

    pub fn exec(self) -> Result<Vec<Value>, StoreError> {
        let mut people = self.store.matching(&self.filter);

        if let Some((key, order)) = self.sort {
            // stable: ties stay in insertion order
            people.sort_by(|a, b| {
                let ordering = compare(a, b, key);
                match order {
                    SortOrder::Ascending => ordering,
                    SortOrder::Descending => ordering.reverse(),
                }
            });
        }

        if let Some(limit) = self.limit {
            people.truncate(limit);
        }

        people
            .iter()
            .map(|person| -> Result<Value, StoreError> {
                let document = serde_json::to_value(person)?;
                Ok(match &self.projection {
                    Some(projection) => projection.apply(document),
                    None => document,
                })
            })
            .collect()
    }
}

fn compare(a: &Person, b: &Person, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Age => a.age.cmp(&b.age),
    }
}
