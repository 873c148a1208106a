//! Record models: the ordered set of fields a generator produces.

use crate::spec::{parse_type, FieldSpec, SpecError};
use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Field declarations of the model used when none is given.
pub const DEFAULT_MODEL: [(&str, &str); 4] = [
    ("id", "i"),
    ("title", "t:4-6w"),
    ("content", "t:5s"),
    ("image", "p:400*300"),
];

/// Ordered mapping of field name to [`FieldSpec`].
///
/// Every field is parsed and validated when the model is built; the model is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Model {
    fields: IndexMap<String, FieldSpec>,
}

impl Model {
    /// Build a model from `(field name, type string)` declarations.
    ///
    /// Fails on the first invalid type string or repeated field name.
    pub fn parse<I, K, V>(declarations: I) -> Result<Self, SpecError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut fields = IndexMap::new();
        for (name, type_string) in declarations {
            let name = name.into();
            let type_string = type_string.as_ref();
            let spec = parse_type(type_string).map_err(|e| SpecError::InvalidField {
                field: name.clone(),
                type_string: type_string.to_string(),
                source: Box::new(e),
            })?;
            insert_unique(&mut fields, name, spec)?;
        }
        Ok(Self { fields })
    }

    /// Build a model from already parsed specs.
    pub fn from_specs<I, K>(specs: I) -> Result<Self, SpecError>
    where
        I: IntoIterator<Item = (K, FieldSpec)>,
        K: Into<String>,
    {
        let mut fields = IndexMap::new();
        for (name, spec) in specs {
            insert_unique(&mut fields, name.into(), spec)?;
        }
        Ok(Self { fields })
    }

    /// Get a field spec by name.
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }

    /// Iterate over `(name, spec)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn insert_unique(
    fields: &mut IndexMap<String, FieldSpec>,
    name: String,
    spec: FieldSpec,
) -> Result<(), SpecError> {
    if fields.contains_key(&name) {
        return Err(SpecError::DuplicateField(name));
    }
    fields.insert(name, spec);
    Ok(())
}

/// The default model: `id: i`, `title: t:4-6w`, `content: t:5s`, `image: p:400*300`.
impl Default for Model {
    fn default() -> Self {
        Self::parse(DEFAULT_MODEL).unwrap_or_else(|e| unreachable!("default model is valid: {e}"))
    }
}

impl IntoIterator for Model {
    type Item = (String, FieldSpec);
    type IntoIter = indexmap::map::IntoIter<String, FieldSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ModelVisitor;

        impl<'de> Visitor<'de> for ModelVisitor {
            type Value = Model;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of field names to type strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Model, A::Error> {
                // Collected in document order; duplicates are rejected instead of overwritten.
                let mut declarations: Vec<(String, String)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, type_string)) = map.next_entry::<String, String>()? {
                    declarations.push((name, type_string));
                }
                Model::parse(declarations).map_err(|e| match &e {
                    SpecError::InvalidField { source, .. } => {
                        de::Error::custom(format!("{e}: {source}"))
                    }
                    _ => de::Error::custom(e),
                })
            }
        }

        deserializer.deserialize_map(ModelVisitor)
    }
}
