//! Person documents.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::people::error::StoreError;

/// A stored person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub favorite_foods: Vec<String>,
}

impl Person {
    pub(crate) fn validate(&self) -> Result<(), StoreError> {
        if self.name.is_empty() {
            return Err(StoreError::Validation("name is required".to_string()));
        }
        Ok(())
    }

    pub fn likes(&self, food: &str) -> bool {
        self.favorite_foods.iter().any(|f| f == food)
    }
}

/// Input for creating a person. Missing `age` and `favoriteFoods` take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    pub name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub favorite_foods: Vec<String>,
}

impl NewPerson {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn favorite_foods<I, S>(mut self, foods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.favorite_foods = foods.into_iter().map(Into::into).collect();
        self
    }

    pub(crate) fn into_person(self) -> Result<Person, StoreError> {
        let person = Person {
            id: Uuid::new_v4(),
            name: self.name,
            age: self.age,
            favorite_foods: self.favorite_foods,
        };
        person.validate()?;
        Ok(person)
    }
}

/// Partial update; `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub favorite_foods: Option<Vec<String>>,
}

impl PersonUpdate {
    pub fn age(age: u32) -> Self {
        Self {
            age: Some(age),
            ..Self::default()
        }
    }

    pub(crate) fn apply(&self, person: &mut Person) {
        if let Some(name) = &self.name {
            person.name = name.clone();
        }
        if let Some(age) = self.age {
            person.age = age;
        }
        if let Some(foods) = &self.favorite_foods {
            person.favorite_foods = foods.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializing_applies_defaults() {
        let new: NewPerson = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        assert_eq!(new, NewPerson::new("Ana"));
        assert_eq!(new.age, 0);
        assert!(new.favorite_foods.is_empty());
    }

    #[test]
    fn name_is_required() {
        assert!(serde_json::from_str::<NewPerson>(r#"{"age":3}"#).is_err());
        assert!(matches!(
            NewPerson::new("").into_person(),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn serializes_as_document() {
        let person = NewPerson::new("Bo")
            .age(41)
            .favorite_foods(["Soup"])
            .into_person()
            .unwrap();
        let doc = serde_json::to_value(&person).unwrap();

        assert_eq!(doc["_id"], person.id.to_string());
        assert_eq!(doc["name"], "Bo");
        assert_eq!(doc["age"], 41);
        assert_eq!(doc["favoriteFoods"][0], "Soup");
    }

    #[test]
    fn update_touches_only_given_fields() {
        let mut person = NewPerson::new("Cy").age(9).into_person().unwrap();
        PersonUpdate::age(20).apply(&mut person);
        assert_eq!(person.age, 20);
        assert_eq!(person.name, "Cy");
    }
}
