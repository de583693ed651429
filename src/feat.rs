use crate::error::IbpError;
use std::fmt;

/// A binary feature allocation: `n_items` rows (customers) by `n_features`
/// columns (dishes), stored one column per feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureAllocation {
    n_items: usize,
    columns: Vec<Vec<bool>>,
}

// Initial capacity for the number of features
const K: usize = 20;

impl FeatureAllocation {
    pub fn empty(n_items: usize) -> Self {
        Self {
            n_items,
            columns: Vec::with_capacity(K),
        }
    }

    pub fn from_columns(n_items: usize, columns: Vec<Vec<bool>>) -> Result<Self, IbpError> {
        if let Some((feature, column)) = columns
            .iter()
            .enumerate()
            .find(|(_, column)| column.len() != n_items)
        {
            return Err(IbpError::Shape {
                feature,
                expected: n_items,
                found: column.len(),
            });
        }
        Ok(Self { n_items, columns })
    }

    /// Reads a column-major buffer where nonzero entries mark possession.
    pub fn from_column_major(
        n_items: usize,
        n_features: usize,
        matrix: &[i32],
    ) -> Result<Self, IbpError> {
        let expected = n_items * n_features;
        if matrix.len() < expected {
            return Err(IbpError::Shape {
                feature: matrix.len() / n_items.max(1),
                expected,
                found: matrix.len(),
            });
        }
        let columns = if n_items == 0 {
            vec![Vec::new(); n_features]
        } else {
            matrix[..expected]
                .chunks(n_items)
                .map(|chunk| chunk.iter().map(|&x| x != 0).collect())
                .collect()
        };
        Ok(Self { n_items, columns })
    }

    pub(crate) fn push_column(&mut self, column: Vec<bool>) {
        debug_assert_eq!(column.len(), self.n_items);
        self.columns.push(column)
    }

    pub fn n_items(&self) -> usize {
        self.n_items
    }

    pub fn n_features(&self) -> usize {
        self.columns.len()
    }

    pub fn get(&self, item: usize, feature: usize) -> bool {
        self.columns[feature][item]
    }

    pub fn column(&self, feature: usize) -> &[bool] {
        &self.columns[feature][..]
    }

    pub fn columns(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.columns.iter().map(|column| &column[..])
    }

    /// Number of items possessing the feature.
    pub fn size_of(&self, feature: usize) -> usize {
        self.columns[feature].iter().filter(|&&x| x).count()
    }

    pub fn sizes(&self) -> Vec<usize> {
        (0..self.n_features()).map(|j| self.size_of(j)).collect()
    }

    pub fn features_of(&self, item: usize) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(j, column)| if column[item] { Some(j) } else { None })
            .collect()
    }

    /// Columns sorted in descending order when each is read as a binary
    /// number with item 0 as the most significant bit.
    pub fn left_ordered(&self) -> Self {
        let mut columns = self.columns.clone();
        // Vec<bool> compares lexicographically with false < true.
        columns.sort_unstable_by(|x, y| y.cmp(x));
        Self {
            n_items: self.n_items,
            columns,
        }
    }

    pub fn is_left_ordered(&self) -> bool {
        self.columns.windows(2).all(|w| w[0] >= w[1])
    }

    pub fn to_column_major(&self) -> Vec<i32> {
        self.columns
            .iter()
            .flat_map(|column| column.iter().map(|&x| x as i32))
            .collect()
    }
}

pub fn left_order(x: &FeatureAllocation) -> FeatureAllocation {
    x.left_ordered()
}

impl fmt::Display for FeatureAllocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n_items {
            let row: String = self
                .columns
                .iter()
                .map(|column| if column[i] { '#' } else { '.' })
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
