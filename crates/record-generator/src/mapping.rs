//! Mapping generated records onto caller-defined types.
//!
//! Each field `foo_bar` is delivered to a setter capability named `setFooBar`.
//! A target type exposes its capabilities either by implementing
//! [`SetterTarget`] or through an explicit [`SetterTable`]. Setters are
//! resolved once per model by an [`ObjectMapper`], so a missing capability is
//! reported before any record is mapped.
//!
//! ```rust
//! use record_core::{Model, Value};
//! use record_generator::mapping::{ObjectMapper, Setter, SetterTarget};
//!
//! #[derive(Default)]
//! struct Post {
//!     title: String,
//! }
//!
//! impl SetterTarget for Post {
//!     fn setter(name: &str) -> Option<Setter<Self>> {
//!         match name {
//!             "setTitle" => Some(|post, value| post.title = value.to_string()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let model = Model::parse([("title", "t:3w")]).unwrap();
//! assert!(ObjectMapper::<Post>::for_target(&model).is_ok());
//!
//! let model = Model::parse([("title", "t:3w"), ("image_url", "p:10*10")]).unwrap();
//! let err = ObjectMapper::<Post>::for_target(&model).err().unwrap();
//! assert!(err.to_string().contains("setImageUrl"));
//! ```

use record_core::{Model, Record, Value};
use std::collections::HashMap;
use std::fmt;

/// A setter capability: stores one field value on the target.
pub type Setter<T> = fn(&mut T, Value);

/// Error type for object mapping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// The target type exposes no setter for a model field
    #[error(
        "No setter found for '{field}' property on type '{type_name}', expected {type_name}::{setter}(${field})"
    )]
    MissingSetter {
        type_name: String,
        setter: String,
        field: String,
    },
}

/// Types that expose per-field setter capabilities by name.
pub trait SetterTarget: Default {
    /// Name used in error messages.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Resolve a capability name such as `setImageUrl`.
    fn setter(name: &str) -> Option<Setter<Self>>;
}

/// Derive the setter capability name for a field.
///
/// The field name is split on `_`, each word gets an upper-case first
/// character, and the result is prefixed with `set`.
pub fn setter_name(field: &str) -> String {
    let mut name = String::from("set");
    for word in field.split('_') {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}

/// Explicit capability name to setter table supplied by the caller.
pub struct SetterTable<T> {
    type_name: String,
    setters: HashMap<String, Setter<T>>,
}

impl<T> SetterTable<T> {
    /// Create an empty table; `type_name` is reported in mapping errors.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            setters: HashMap::new(),
        }
    }

    /// Register a setter under a capability name.
    pub fn with(mut self, name: impl Into<String>, setter: Setter<T>) -> Self {
        self.insert(name, setter);
        self
    }

    /// Register a setter under a capability name, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, setter: Setter<T>) {
        self.setters.insert(name.into(), setter);
    }

    /// Look up a setter by capability name.
    pub fn get(&self, name: &str) -> Option<Setter<T>> {
        self.setters.get(name).copied()
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl<T> fmt::Debug for SetterTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.setters.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("SetterTable")
            .field("type_name", &self.type_name)
            .field("setters", &names)
            .finish()
    }
}

/// Setters resolved for every field of a model.
pub struct ObjectMapper<T> {
    bindings: HashMap<String, Setter<T>>,
}

impl<T: SetterTarget> ObjectMapper<T> {
    /// Resolve setters through the target's [`SetterTarget`] implementation.
    pub fn for_target(model: &Model) -> Result<Self, MappingError> {
        Self::resolve(model, T::type_name(), T::setter)
    }
}

impl<T> ObjectMapper<T> {
    /// Resolve setters through an explicit table.
    pub fn from_table(model: &Model, table: &SetterTable<T>) -> Result<Self, MappingError> {
        Self::resolve(model, table.type_name(), |name| table.get(name))
    }

    fn resolve<F>(model: &Model, type_name: &str, lookup: F) -> Result<Self, MappingError>
    where
        F: Fn(&str) -> Option<Setter<T>>,
    {
        let mut bindings = HashMap::with_capacity(model.len());
        for field in model.field_names() {
            let setter = setter_name(field);
            let bound = lookup(&setter).ok_or_else(|| MappingError::MissingSetter {
                type_name: type_name.to_string(),
                setter,
                field: field.to_string(),
            })?;
            bindings.insert(field.to_string(), bound);
        }
        Ok(Self { bindings })
    }

    /// Apply a record to an existing instance, field by field in record order.
    ///
    /// Fields the mapper was not resolved for are ignored.
    pub fn apply(&self, target: &mut T, record: Record) {
        for (field, value) in record {
            if let Some(setter) = self.bindings.get(&field) {
                setter(target, value);
            }
        }
    }

    /// Map a record onto a fresh default instance.
    pub fn map(&self, record: Record) -> T
    where
        T: Default,
    {
        let mut target = T::default();
        self.apply(&mut target, record);
        target
    }
}

impl<T> fmt::Debug for ObjectMapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        fields.sort_unstable();
        f.debug_struct("ObjectMapper")
            .field("fields", &fields)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Article {
        id: i64,
        title: String,
        image_url: String,
    }

    impl SetterTarget for Article {
        fn type_name() -> &'static str {
            "Article"
        }

        fn setter(name: &str) -> Option<Setter<Self>> {
            match name {
                "setId" => Some(|a, v| a.id = v.as_i64().unwrap_or_default()),
                "setTitle" => Some(|a, v| a.title = v.into_text().unwrap_or_default()),
                "setImageUrl" => Some(|a, v| a.image_url = v.into_text().unwrap_or_default()),
                _ => None,
            }
        }
    }

    fn record() -> Record {
        [
            ("id", Value::Int(3)),
            ("title", Value::from("ham hock")),
            ("image_url", Value::from("https://picsum.photos/1/1?image=9")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_setter_name() {
        assert_eq!(setter_name("image_url"), "setImageUrl");
        assert_eq!(setter_name("id"), "setId");
        assert_eq!(setter_name("content"), "setContent");
        assert_eq!(setter_name("a_b_c"), "setABC");
        assert_eq!(setter_name("double__underscore"), "setDoubleUnderscore");
        assert_eq!(setter_name("camelCase"), "setCamelCase");
    }

    #[test]
    fn test_map_with_setter_target() {
        let model = Model::parse([("id", "i"), ("title", "t:2w"), ("image_url", "p:1*1")]).unwrap();
        let mapper = ObjectMapper::<Article>::for_target(&model).unwrap();

        let article = mapper.map(record());
        assert_eq!(
            article,
            Article {
                id: 3,
                title: "ham hock".to_string(),
                image_url: "https://picsum.photos/1/1?image=9".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_setter_names_capability() {
        let model = Model::parse([("id", "i"), ("author_name", "t:2w")]).unwrap();
        let err = ObjectMapper::<Article>::for_target(&model).unwrap_err();

        assert_eq!(
            err,
            MappingError::MissingSetter {
                type_name: "Article".to_string(),
                setter: "setAuthorName".to_string(),
                field: "author_name".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "No setter found for 'author_name' property on type 'Article', expected Article::setAuthorName($author_name)"
        );
    }

    #[test]
    fn test_map_with_table() {
        #[derive(Debug, Default)]
        struct Row {
            id: i64,
        }

        let table = SetterTable::<Row>::new("Row").with("setId", |row, v| {
            row.id = v.as_i64().unwrap_or_default();
        });
        let model = Model::parse([("id", "i")]).unwrap();
        let mapper = ObjectMapper::from_table(&model, &table).unwrap();

        let row = mapper.map([("id", Value::Int(11))].into_iter().collect());
        assert_eq!(row.id, 11);

        let model = Model::parse([("id", "i"), ("title", "t:1w")]).unwrap();
        let err = ObjectMapper::from_table(&model, &table).unwrap_err();
        assert!(err.to_string().contains("Row::setTitle"));
    }
}
