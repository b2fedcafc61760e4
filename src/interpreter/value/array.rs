use std::{cell::RefCell, rc::Rc};

use crate::interpreter::value::core::Value;

/// Shared handle to an array. Every alias observes mutations.
pub type ArrayRef = Rc<RefCell<ArrayValue>>;

/// An ordered sequence of key/value pairs.
///
/// This is not a dense vector: keys are arbitrary values and lookup is a
/// linear scan. Keys are not required to be unique, but lookup and update
/// always act on the first matching pair.
///
/// # Example
/// ```
/// use tora::interpreter::value::{array::ArrayValue, core::Value};
///
/// let mut array = ArrayValue::default();
/// array.push_pair(Value::Numeric(0.0), Value::from("zero"));
/// array.set(Value::from("k"), Value::Numeric(5.0));
/// array.set(Value::Numeric(0.0), Value::from("first"));
///
/// assert_eq!(array.len(), 2);
/// assert_eq!(array.get(&Value::Numeric(0.0)), Some(Value::from("first")));
/// assert_eq!(array.get(&Value::from("0")), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayValue {
    pairs: Vec<(Value, Value)>,
}

impl ArrayValue {
    /// Wraps the array in a new shared handle.
    #[must_use]
    pub fn into_ref(self) -> ArrayRef {
        Rc::new(RefCell::new(self))
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Reports whether the array holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the value of the first pair whose key equals `key`.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<Value> {
        self.pairs
            .iter()
            .find(|(k, _)| k.loosely_equals(key))
            .map(|(_, v)| v.clone())
    }

    /// Overwrites the first pair whose key equals `key`, or appends a new pair
    /// when none does.
    pub fn set(&mut self, key: Value, value: Value) {
        if let Some(slot) = self.pairs.iter_mut().find(|(k, _)| k.loosely_equals(&key)) {
            slot.1 = value;
        } else {
            self.pairs.push((key, value));
        }
    }

    /// Appends a pair without looking for an existing key.
    pub fn push_pair(&mut self, key: Value, value: Value) {
        self.pairs.push((key, value));
    }
}
