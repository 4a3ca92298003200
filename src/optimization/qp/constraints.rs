//! Linear constraints `Σ_j g_j x_j  (≤ | = | ≥)  value` for a QP backend.
//!
//! Coefficients are stored sparsely as `(variable index, coefficient)`
//! pairs. A [`LinearConstraints`] set is always installed wholesale on a
//! backend; there is no incremental patching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    LessEqual,
    Equal,
    GreaterEqual,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    coefficients: Vec<(usize, f64)>,
    relation: Relation,
    value: f64,
}

impl LinearConstraint {
    pub fn new(relation: Relation, value: f64) -> Self {
        Self { coefficients: Vec::new(), relation, value }
    }

    /// Build a row from its `(index, coefficient)` pairs in one pass.
    ///
    /// Indices are expected to be distinct; use [`Self::set_coefficient`]
    /// when entries may repeat.
    pub fn from_coefficients(coefficients: Vec<(usize, f64)>, relation: Relation, value: f64) -> Self {
        Self { coefficients, relation, value }
    }

    /// Set the coefficient of variable `index`, replacing any previous one.
    pub fn set_coefficient(&mut self, index: usize, coefficient: f64) {
        match self.coefficients.iter_mut().find(|(i, _)| *i == index) {
            Some(entry) => entry.1 = coefficient,
            None => self.coefficients.push((index, coefficient)),
        }
    }

    pub fn coefficients(&self) -> &[(usize, f64)] {
        &self.coefficients
    }

    /// Coefficient of variable `index`, zero if absent.
    pub fn coefficient(&self, index: usize) -> f64 {
        self.coefficients.iter().find(|(i, _)| *i == index).map_or(0.0, |&(_, c)| c)
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Left-hand side `Σ_j g_j x_j`; indices beyond `x` contribute zero.
    pub fn lhs(&self, x: &[f64]) -> f64 {
        self.coefficients.iter().filter_map(|&(i, c)| x.get(i).map(|v| c * v)).sum()
    }

    /// Whether `x` satisfies the constraint up to `tol`.
    pub fn is_satisfied(&self, x: &[f64], tol: f64) -> bool {
        let lhs = self.lhs(x);
        match self.relation {
            Relation::LessEqual => lhs <= self.value + tol,
            Relation::Equal => (lhs - self.value).abs() <= tol,
            Relation::GreaterEqual => lhs >= self.value - tol,
        }
    }
}

/// Ordered set of linear constraints.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearConstraints {
    constraints: Vec<LinearConstraint>,
}

impl LinearConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { constraints: Vec::with_capacity(capacity) }
    }

    pub fn add(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LinearConstraint> {
        self.constraints.iter()
    }
}

impl<'a> IntoIterator for &'a LinearConstraints {
    type Item = &'a LinearConstraint;
    type IntoIter = std::slice::Iter<'a, LinearConstraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}
