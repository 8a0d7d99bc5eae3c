use std::collections::HashMap;

use crate::error::Result;
use crate::models::{ClassEntity, PropertyEntity};

/// An ordered entity table with an identity-key index.
#[derive(Debug, Clone)]
struct Table<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Table<T> {
    fn get_or_insert_with<F>(&mut self, key: &str, factory: F) -> Result<usize>
    where
        F: FnOnce() -> Result<T>,
    {
        if let Some(&position) = self.index.get(key) {
            return Ok(position);
        }
        let entity = factory()?;
        let position = self.entries.len();
        self.entries.push(entity);
        self.index.insert(key.to_string(), position);
        Ok(position)
    }
}

/// The single deduplication point for one conversion. Entities are kept in
/// first-seen order; a repeated identity key returns the existing entity
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    classes: Table<ClassEntity>,
    properties: Table<PropertyEntity>,
}

impl EntityRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_or_insert_with<F>(
        &mut self,
        identity: &str,
        factory: F,
    ) -> Result<&mut ClassEntity>
    where
        F: FnOnce() -> Result<ClassEntity>,
    {
        let position = self.classes.get_or_insert_with(identity, factory)?;
        Ok(&mut self.classes.entries[position])
    }

    pub fn property_or_insert_with<F>(
        &mut self,
        identity: &str,
        factory: F,
    ) -> Result<&PropertyEntity>
    where
        F: FnOnce() -> Result<PropertyEntity>,
    {
        let position = self.properties.get_or_insert_with(identity, factory)?;
        Ok(&self.properties.entries[position])
    }

    #[must_use]
    pub fn classes(&self) -> &[ClassEntity] {
        &self.classes.entries
    }

    #[must_use]
    pub fn properties(&self) -> &[PropertyEntity] {
        &self.properties.entries
    }

    #[must_use]
    pub fn into_tables(self) -> (Vec<ClassEntity>, Vec<PropertyEntity>) {
        (self.classes.entries, self.properties.entries)
    }
}
