//! Item catalog.
//!
//! The catalog fixes the positional order shared by every bit-vector
//! encoding in the crate: position `i` of a [`Solution`](crate::Solution)
//! always refers to `catalog.items()[i]`.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::BuildHasher;

use crate::error::{KnapsackError, Result};

/// A single knapsack item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    name: String,
    weight: f64,
    value: f64,
}

impl Item {
    /// Creates an item, rejecting negative or non-finite numbers.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::Item;
    ///
    /// let item = Item::new("tent", 4.0, 10.0).unwrap();
    /// assert_eq!(item.density(), 2.5);
    /// assert!(Item::new("broken", -1.0, 3.0).is_err());
    /// ```
    pub fn new(name: impl Into<String>, weight: f64, value: f64) -> Result<Self> {
        let name = name.into();
        check_quantity(&name, "weight", weight)?;
        check_quantity(&name, "value", value)?;
        Ok(Self {
            name,
            weight,
            value,
        })
    }

    /// Unique identifier within the catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight counted against the capacity.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Value gained by packing the item.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value per unit of weight, `0.0` for weightless items.
    pub fn density(&self) -> f64 {
        if self.weight == 0.0 {
            0.0
        } else {
            self.value / self.weight
        }
    }
}

fn check_quantity(name: &str, what: &str, x: f64) -> Result<()> {
    if !x.is_finite() || x < 0.0 {
        return Err(KnapsackError::InvalidItem {
            name: name.to_string(),
            reason: format!("{what} must be a finite non-negative number, got {x}"),
        });
    }
    Ok(())
}

/// Names of the record fields holding weight and value.
///
/// Lets catalogs be built from records labelled differently, e.g.
/// `{"peso": 2, "valor": 3}`.
///
/// # Examples
///
/// ```
/// use u_knapsack::FieldNames;
///
/// let fields = FieldNames::new("peso", "valor");
/// assert_eq!(fields.weight, "peso");
/// assert_eq!(FieldNames::default().value, "value");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldNames {
    /// Field holding the item weight.
    pub weight: String,
    /// Field holding the item value.
    pub value: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self::new("weight", "value")
    }
}

impl FieldNames {
    pub fn new(weight: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            value: value.into(),
        }
    }
}

/// A record exposing numeric fields by name.
pub trait Record {
    /// Returns the numeric field called `name`, if present.
    fn field(&self, name: &str) -> Option<f64>;
}

impl<S: BuildHasher> Record for HashMap<String, f64, S> {
    fn field(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl Record for BTreeMap<String, f64> {
    fn field(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl<K: AsRef<str>> Record for [(K, f64)] {
    fn field(&self, name: &str) -> Option<f64> {
        self.iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|&(_, v)| v)
    }
}

impl<K: AsRef<str>> Record for Vec<(K, f64)> {
    fn field(&self, name: &str) -> Option<f64> {
        self.as_slice().field(name)
    }
}

impl<K: AsRef<str>, const N: usize> Record for [(K, f64); N] {
    fn field(&self, name: &str) -> Option<f64> {
        self.as_slice().field(name)
    }
}

/// Ordered, read-only collection of uniquely named items.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog, keeping the given order.
    ///
    /// Fails with [`KnapsackError::DuplicateItem`] when two items share a
    /// name.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.name.as_str()) {
                return Err(KnapsackError::DuplicateItem(item.name.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Builds a catalog from `(name, record)` pairs, reading weight and
    /// value through `fields`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::{Catalog, FieldNames};
    ///
    /// let fields = FieldNames::new("peso", "valor");
    /// let catalog = Catalog::from_records(
    ///     [
    ///         ("A", [("peso", 2.0), ("valor", 3.0)]),
    ///         ("B", [("peso", 3.0), ("valor", 4.0)]),
    ///     ],
    ///     &fields,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(catalog.len(), 2);
    /// assert_eq!(catalog.items()[1].value(), 4.0);
    /// ```
    pub fn from_records<I, K, R>(records: I, fields: &FieldNames) -> Result<Self>
    where
        I: IntoIterator<Item = (K, R)>,
        K: Into<String>,
        R: Record,
    {
        let items = records
            .into_iter()
            .map(|(name, record)| {
                let name = name.into();
                let weight = read_field(&name, &record, &fields.weight)?;
                let value = read_field(&name, &record, &fields.value)?;
                Item::new(name, weight, value)
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(items)
    }

    /// Items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the item called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    /// Sum of all item weights.
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(Item::weight).sum()
    }
}

fn read_field<R: Record>(item: &str, record: &R, field: &str) -> Result<f64> {
    record
        .field(field)
        .ok_or_else(|| KnapsackError::MissingField {
            item: item.to_string(),
            field: field.to_string(),
        })
}
