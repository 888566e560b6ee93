//! Knapsack problem instance.

use crate::catalog::{Catalog, FieldNames, Item, Record};
use crate::error::{KnapsackError, Result};
use crate::solution::Solution;

/// A 0/1 knapsack instance: an item catalog and a weight capacity.
///
/// Construction fails fast on degenerate input (empty catalog,
/// non-positive or non-finite capacity).
///
/// # Examples
///
/// ```
/// use u_knapsack::{Item, KnapsackProblem};
///
/// let problem = KnapsackProblem::from_items(
///     vec![
///         Item::new("A", 2.0, 3.0).unwrap(),
///         Item::new("B", 3.0, 4.0).unwrap(),
///     ],
///     5.0,
/// )
/// .unwrap();
/// assert_eq!(problem.len(), 2);
/// assert!(KnapsackProblem::from_items(vec![], 5.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackProblem {
    catalog: Catalog,
    capacity: f64,
}

impl KnapsackProblem {
    pub fn new(catalog: Catalog, capacity: f64) -> Result<Self> {
        if catalog.is_empty() {
            return Err(KnapsackError::DegenerateProblem(
                "catalog has no items".into(),
            ));
        }
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(KnapsackError::DegenerateProblem(format!(
                "capacity must be positive, got {capacity}"
            )));
        }
        Ok(Self { catalog, capacity })
    }

    /// Builds the catalog from items and validates the instance.
    pub fn from_items(items: Vec<Item>, capacity: f64) -> Result<Self> {
        Self::new(Catalog::new(items)?, capacity)
    }

    /// Builds the catalog from named records, see [`Catalog::from_records`].
    pub fn from_records<I, K, R>(records: I, fields: &FieldNames, capacity: f64) -> Result<Self>
    where
        I: IntoIterator<Item = (K, R)>,
        K: Into<String>,
        R: Record,
    {
        Self::new(Catalog::from_records(records, fields)?, capacity)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn items(&self) -> &[Item] {
        self.catalog.items()
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Number of items (and solution length).
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Fails with [`KnapsackError::LengthMismatch`] unless `solution` has
    /// one entry per item.
    pub fn check_length(&self, solution: &Solution) -> Result<()> {
        if solution.len() != self.len() {
            return Err(KnapsackError::LengthMismatch {
                expected: self.len(),
                actual: solution.len(),
            });
        }
        Ok(())
    }

    /// Names of the included items, in catalog order.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::{Item, KnapsackProblem, Solution};
    ///
    /// let problem = KnapsackProblem::from_items(
    ///     vec![
    ///         Item::new("A", 2.0, 3.0).unwrap(),
    ///         Item::new("B", 3.0, 4.0).unwrap(),
    ///         Item::new("C", 4.0, 5.0).unwrap(),
    ///     ],
    ///     5.0,
    /// )
    /// .unwrap();
    /// let names = problem.selected_names(&Solution::from(vec![1, 0, 1])).unwrap();
    /// assert_eq!(names, vec!["A", "C"]);
    /// ```
    pub fn selected_names(&self, solution: &Solution) -> Result<Vec<&str>> {
        self.check_length(solution)?;
        let mut names = Vec::new();
        for (i, (&bit, item)) in solution.bits().iter().zip(self.items()).enumerate() {
            match bit {
                0 => {}
                1 => names.push(item.name()),
                value => return Err(KnapsackError::InvalidIndicator { position: i, value }),
            }
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new("A", 2.0, 3.0).unwrap(),
            Item::new("B", 3.0, 4.0).unwrap(),
        ]
    }

    #[test]
    fn test_rejects_zero_capacity() {
        assert!(matches!(
            KnapsackProblem::from_items(items(), 0.0),
            Err(KnapsackError::DegenerateProblem(_))
        ));
        assert!(matches!(
            KnapsackProblem::from_items(items(), -3.0),
            Err(KnapsackError::DegenerateProblem(_))
        ));
        assert!(matches!(
            KnapsackProblem::from_items(items(), f64::INFINITY),
            Err(KnapsackError::DegenerateProblem(_))
        ));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(matches!(
            KnapsackProblem::from_items(Vec::new(), 10.0),
            Err(KnapsackError::DegenerateProblem(_))
        ));
    }

    #[test]
    fn test_selected_names_rejects_bad_input() {
        let problem = KnapsackProblem::from_items(items(), 5.0).unwrap();
        assert_eq!(
            problem.selected_names(&Solution::from(vec![1])),
            Err(KnapsackError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            problem.selected_names(&Solution::from(vec![1, 2])),
            Err(KnapsackError::InvalidIndicator {
                position: 1,
                value: 2
            })
        );
    }

    #[test]
    fn test_selected_names_empty_selection() {
        let problem = KnapsackProblem::from_items(items(), 5.0).unwrap();
        let names = problem.selected_names(&Solution::empty(2)).unwrap();
        assert!(names.is_empty());
    }
}
