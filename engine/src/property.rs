//! Property cardinality.
//!
//! A [`Property`] wraps the cells of one schema slot as either zero-or-one
//! (functional) or an ordered list (non-functional), together with the slot's
//! natural-language map.

use serde_json::Value as Json;
use streams_vocab::PropertyDef;
use tracing::debug;

use crate::error::{Error, Result};
use crate::language_map::LanguageMap;
use crate::record::Decoder;
use crate::value::Value;

/// The cells held by one property.
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    /// At most one value.
    Functional(Option<Value>),
    /// Zero or more values; order is meaningful.
    NonFunctional(Vec<Value>),
}

impl Values {
    /// Returns the values as a slice of zero, one or more cells.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        match self {
            Values::Functional(value) => value.as_slice(),
            Values::NonFunctional(values) => values,
        }
    }
}

/// One schema slot of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    def: PropertyDef,
    values: Values,
    language_map: LanguageMap,
}

impl Property {
    /// Creates an empty property for `def`.
    #[must_use]
    pub fn new(def: PropertyDef) -> Self {
        let values = if def.functional {
            Values::Functional(None)
        } else {
            Values::NonFunctional(Vec::new())
        };
        Self {
            def,
            values,
            language_map: LanguageMap::new(),
        }
    }

    /// Returns the property's definition.
    #[must_use]
    pub fn def(&self) -> &PropertyDef {
        &self.def
    }

    /// Returns the property's document key.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.def.name
    }

    /// Returns true if the property holds at most one value.
    #[must_use]
    pub fn is_functional(&self) -> bool {
        self.def.functional
    }

    /// Returns the cells.
    #[must_use]
    pub fn values(&self) -> &Values {
        &self.values
    }

    /// Returns the number of values held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.as_slice().len()
    }

    /// Returns true if no value is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.as_slice().get(index)
    }

    /// Returns the value at `index` for in-place edits.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        match &mut self.values {
            Values::Functional(value) => value.as_mut().filter(|_| index == 0),
            Values::NonFunctional(values) => values.get_mut(index),
        }
    }

    /// Iterates the values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.as_slice().iter()
    }

    /// Replaces every value with `value`.
    pub fn set(&mut self, value: Value) {
        match &mut self.values {
            Values::Functional(slot) => *slot = Some(value),
            Values::NonFunctional(values) => {
                values.clear();
                values.push(value);
            }
        }
    }

    /// Inserts `value` before every other value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FunctionalOccupied`] for a functional property that
    /// already holds a value.
    pub fn push_front(&mut self, value: Value) -> Result<()> {
        self.insert(0, value)
    }

    /// Appends `value` after every other value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FunctionalOccupied`] for a functional property that
    /// already holds a value.
    pub fn push_back(&mut self, value: Value) -> Result<()> {
        self.insert(self.len(), value)
    }

    /// Inserts `value` at `index`, shifting later values right.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index` is past the end, or
    /// [`Error::FunctionalOccupied`] for a functional property that already
    /// holds a value.
    pub fn insert(&mut self, index: usize, value: Value) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(self.out_of_bounds(index));
        }
        match &mut self.values {
            Values::Functional(Some(_)) => Err(Error::FunctionalOccupied {
                property: self.def.name.to_owned(),
            }),
            Values::Functional(slot) => {
                *slot = Some(value);
                Ok(())
            }
            Values::NonFunctional(values) => {
                values.insert(index, value);
                Ok(())
            }
        }
    }

    /// Removes and returns the value at `index`, shifting later values left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index` is not less than the
    /// number of values held.
    pub fn remove(&mut self, index: usize) -> Result<Value> {
        let removed = match &mut self.values {
            Values::Functional(slot) => slot.take_if(|_| index == 0),
            Values::NonFunctional(values) => (index < values.len()).then(|| values.remove(index)),
        };
        removed.ok_or_else(|| self.out_of_bounds(index))
    }

    /// Drops every value. The natural-language map is left alone.
    pub fn clear(&mut self) {
        match &mut self.values {
            Values::Functional(slot) => *slot = None,
            Values::NonFunctional(values) => values.clear(),
        }
    }

    /// Returns the natural-language map. Always absent for properties that
    /// do not accept one.
    #[must_use]
    pub fn language_map(&self) -> &LanguageMap {
        &self.language_map
    }

    /// Returns the natural-language map for edits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLanguageMap`] if the property does not accept one.
    pub fn language_map_mut(&mut self) -> Result<&mut LanguageMap> {
        if self.def.natural_language {
            Ok(&mut self.language_map)
        } else {
            Err(Error::NoLanguageMap {
                property: self.def.name.to_owned(),
            })
        }
    }

    fn out_of_bounds(&self, index: usize) -> Error {
        Error::IndexOutOfBounds {
            property: self.def.name.to_owned(),
            index,
            len: self.len(),
        }
    }

    /// Decodes the raw document value of this property, replacing any values
    /// already held.
    ///
    /// A list is decoded element by element in document order; any other
    /// shape becomes a single value. An empty list is kept as one opaque
    /// value so that it survives a round trip. A functional property given a
    /// list decodes a lone element as its value and keeps any other list
    /// opaque.
    ///
    /// # Errors
    ///
    /// Propagates hard errors from [`Value::decode`].
    pub fn decode(&mut self, raw: &Json, decoder: &Decoder<'_>) -> Result<()> {
        let def = &self.def;
        match (&mut self.values, raw) {
            (Values::Functional(slot), Json::Array(items)) => {
                *slot = Some(match items.as_slice() {
                    [only] => Value::decode(only, def, decoder)?,
                    _ => {
                        debug!(
                            property = def.name,
                            len = items.len(),
                            "functional property given a list; keeping it opaque"
                        );
                        Value::Unknown(raw.clone())
                    }
                });
            }
            (Values::Functional(slot), _) => *slot = Some(Value::decode(raw, def, decoder)?),
            (Values::NonFunctional(values), Json::Array(items)) if items.is_empty() => {
                debug!(property = def.name, "empty list; keeping it opaque");
                *values = vec![Value::Unknown(raw.clone())];
            }
            (Values::NonFunctional(values), Json::Array(items)) => {
                *values = items
                    .iter()
                    .map(|item| Value::decode(item, def, decoder))
                    .collect::<Result<_>>()?;
            }
            (Values::NonFunctional(values), _) => *values = vec![Value::decode(raw, def, decoder)?],
        }
        Ok(())
    }

    /// Decodes the raw `<name>Map` value into the natural-language map.
    ///
    /// Returns false, leaving the map untouched, if the value is not an
    /// object of strings.
    pub fn decode_language_map(&mut self, raw: &Json) -> bool {
        match LanguageMap::decode(raw) {
            Some(map) => {
                self.language_map = map;
                true
            }
            None => false,
        }
    }

    /// Encodes the values: absent when empty, bare when there is exactly one,
    /// a list otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] naming this property if a value cannot be
    /// encoded.
    pub fn encode(&self) -> Result<Option<Json>> {
        let encode = |value: &Value| value.encode().map_err(|e| e.within(self.def.name));
        Ok(match self.values.as_slice() {
            [] => None,
            [only] => Some(encode(only)?),
            many => Some(Json::Array(many.iter().map(encode).collect::<Result<_>>()?)),
        })
    }

    /// Encodes the natural-language map under its `<name>Map` key.
    #[must_use]
    pub fn encode_language_map(&self) -> Option<(String, Json)> {
        self.def
            .language_map_key()
            .zip(self.language_map.encode())
    }
}
