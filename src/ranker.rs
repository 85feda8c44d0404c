//! A module for ranking the nodes of a web matrix.

use nalgebra::{DMatrix, DVector, RowDVector};
use tracing::{debug, trace};

use crate::error::{PageRankError, Result};

/// The damping factor conventionally used for PageRank.
pub const DEFAULT_DAMPING: f64 = 0.85;

/// A PageRank engine over a fixed web matrix.
///
/// The engine blends a uniform random jump with link following into a row-stochastic matrix and
/// refines an estimate of its invariant measure by power iteration. The number of iterations is
/// up to the caller, there is no convergence check.
#[derive(Clone, Debug)]
pub struct PageRanker {
    /// Probability of following a link rather than jumping to a random node.
    damping: f64,
    /// Edge weights, entry `(i, j)` is the weight of the link from node `i` to node `j`.
    web_matrix: DMatrix<f64>,
    /// The row sums of the web matrix.
    out_degrees: DVector<f64>,
    /// The inverse of the diagonal out-degree matrix.
    delta_matrix: DMatrix<f64>,
    /// The row-stochastic transition matrix, every row sums to one.
    stochastic_matrix: DMatrix<f64>,
    /// The current, unnormalized estimate of the invariant measure.
    invariant_measure: RowDVector<f64>,
}

impl PageRanker {
    /// Creates an engine from a damping factor in `[0, 1]` and a square web matrix.
    ///
    /// Every entry must be finite and non-negative and every row must have a positive sum, i.e.
    /// each node needs at least one outgoing link.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use pagerank::ranker::PageRanker;
    ///
    /// let ranker = PageRanker::new(
    ///     1.0,
    ///     dmatrix![0.0, 2.0;
    ///              1.0, 0.0],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(
    ///     ranker.stochastic_matrix(),
    ///     &dmatrix![0.0, 1.0;
    ///               1.0, 0.0]
    /// );
    /// ```
    pub fn new(p: f64, webmatrix: DMatrix<f64>) -> Result<Self> {
        if let Err(err) = validate(p, &webmatrix) {
            debug!(%err, "rejected pagerank input");
            return Err(err);
        }

        let n = webmatrix.nrows();
        let out_degrees = DVector::from_iterator(n, webmatrix.row_iter().map(|row| row.sum()));

        // The out-degree matrix is diagonal, so its inverse holds the reciprocals of the row sums.
        let delta_matrix = DMatrix::from_diagonal(&out_degrees.map(f64::recip));

        // Equivalent to `delta_matrix * webmatrix`, but dividing each row by its sum stays exact
        // where the reciprocal of a subnormal sum would overflow.
        let mut linked_term = webmatrix.clone();
        for (mut row, sum) in linked_term.row_iter_mut().zip(out_degrees.iter()) {
            row /= *sum;
        }
        linked_term *= p;

        let uniform = DMatrix::<f64>::from_element(n, n, 1.0);
        let random_term = (1.0 - p) * (uniform / n as f64);
        let stochastic_matrix = random_term + linked_term;

        debug!(nodes = n, damping = p, "constructed pagerank engine");

        Ok(Self {
            damping: p,
            web_matrix: webmatrix,
            out_degrees,
            delta_matrix,
            stochastic_matrix,
            invariant_measure: RowDVector::from_element(n, 1.0),
        })
    }

    /// Creates an engine from nested rows, e.g. a `Vec<Vec<f64>>` or an array of arrays.
    ///
    /// Ragged rows are reported as a non-square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagerank::ranker::PageRanker;
    ///
    /// let web = [[0.0, 1.0, 0.0], [1.0, 0.0, 1.0], [1.0, 0.0, 0.0]];
    /// let ranker = PageRanker::from_rows(0.85, &web).unwrap();
    ///
    /// assert_eq!(ranker.node_count(), 3);
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(p: f64, rows: &[R]) -> Result<Self> {
        let n = rows.len();

        let mut widths = rows.iter().map(|row| row.as_ref().len());
        if let Some(cols) = widths.find(|&cols| cols != n) {
            let err = PageRankError::NonSquareMatrix { rows: n, cols };
            debug!(%err, "rejected pagerank input");
            return Err(err);
        }

        let data: Vec<f64> = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();

        Self::new(p, DMatrix::from_row_slice(n, n, &data))
    }

    /// Applies one power iteration step, `measure <- measure * M`.
    pub fn improve(&mut self) {
        self.improve_guess(1)
    }

    /// Applies `times` power iteration steps in sequence, zero leaves the measure untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagerank::ranker::PageRanker;
    ///
    /// let mut ranker = PageRanker::from_rows(0.5, &[[0.0, 1.0], [1.0, 1.0]]).unwrap();
    /// ranker.improve_guess(1);
    ///
    /// assert_eq!(ranker.invariant_measure().as_slice(), &[0.75, 1.25]);
    /// ```
    pub fn improve_guess(&mut self, times: usize) {
        trace!(times, "improving invariant measure");

        for _ in 0..times {
            self.invariant_measure = &self.invariant_measure * &self.stochastic_matrix;
        }
    }

    /// Returns the current invariant measure estimate, not normalized.
    pub fn invariant_measure(&self) -> &RowDVector<f64> {
        &self.invariant_measure
    }

    /// Returns the invariant measure normalized into a distribution summing to one.
    ///
    /// The result is recomputed from the current measure on every call.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagerank::ranker::PageRanker;
    ///
    /// let ranker = PageRanker::from_rows(0.85, &[[0.0, 1.0], [1.0, 0.0]]).unwrap();
    ///
    /// assert_eq!(ranker.page_rank().as_slice(), &[0.5, 0.5]);
    /// ```
    pub fn page_rank(&self) -> RowDVector<f64> {
        let total = self.invariant_measure.sum();

        // The measure starts at all ones and the stochastic matrix is non-negative with unit row
        // sums, so each step preserves a positive total.
        debug_assert!(total > 0.0);

        self.invariant_measure.unscale(total)
    }

    /// Returns up to `n` `(node, rank)` pairs in order of descending rank, ties keep node order.
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = self.page_rank().iter().copied().enumerate().collect();

        ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        ranked.truncate(n);

        ranked
    }

    /// The probability of following a link rather than jumping to a random node.
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// The number of nodes, i.e. the dimension of the web matrix.
    pub fn node_count(&self) -> usize {
        self.web_matrix.nrows()
    }

    pub fn web_matrix(&self) -> &DMatrix<f64> {
        &self.web_matrix
    }

    /// The row sums of the web matrix.
    pub fn out_degrees(&self) -> &DVector<f64> {
        &self.out_degrees
    }

    /// The inverse of the diagonal out-degree matrix.
    pub fn delta_matrix(&self) -> &DMatrix<f64> {
        &self.delta_matrix
    }

    /// The row-stochastic transition matrix the measure is multiplied by on each step.
    pub fn stochastic_matrix(&self) -> &DMatrix<f64> {
        &self.stochastic_matrix
    }
}

//
// Helpers
//

/// Checks the damping factor and web matrix, reporting the first problem found.
fn validate(p: f64, webmatrix: &DMatrix<f64>) -> Result<()> {
    // Also rejects NaN.
    if !(0.0..=1.0).contains(&p) {
        return Err(PageRankError::InvalidDamping(p));
    }

    let (rows, cols) = webmatrix.shape();
    if rows != cols {
        return Err(PageRankError::NonSquareMatrix { rows, cols });
    }

    if rows == 0 {
        return Err(PageRankError::EmptyMatrix);
    }

    for (row, weights) in webmatrix.row_iter().enumerate() {
        if let Some((col, &value)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(PageRankError::InvalidWeight { row, col, value });
        }
    }

    for (row, weights) in webmatrix.row_iter().enumerate() {
        let sum = weights.sum();

        if sum == 0.0 {
            return Err(PageRankError::SingularMatrix { row });
        }

        // Finite weights can still add up past `f64::MAX`.
        if !sum.is_finite() {
            return Err(PageRankError::RowSumOverflow { row });
        }
    }

    Ok(())
}
