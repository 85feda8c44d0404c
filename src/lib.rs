//! A small engine computing the PageRank distribution of a directed graph given as a weighted web
//! matrix.
//!
//! # Basic usage
//!
//! The library is centered around the [`PageRanker`](ranker::PageRanker) structure which is
//! constructed from a damping factor and a square matrix of link weights. The engine derives a
//! row-stochastic transition matrix once, then refines an estimate of its invariant measure by
//! power iteration for as many steps as the caller asks for.
//!
//! ```rust
//! use pagerank::ranker::PageRanker;
//!
//! // Entry (i, j) is the weight of the link from node i to node j, every node needs at least
//! // one outgoing link.
//! let web = [[0.0, 1.0, 0.0], [1.0, 0.0, 1.0], [1.0, 0.0, 0.0]];
//!
//! let mut ranker = PageRanker::from_rows(0.85, &web)?;
//!
//! // There is no convergence check, the iteration count is up to the caller.
//! ranker.improve_guess(100);
//!
//! // The normalized ranks form a probability distribution.
//! let rank = ranker.page_rank();
//! assert!((rank.sum() - 1.0).abs() < 1e-9);
//!
//! // Node 0 is linked to by both other nodes.
//! assert_eq!(ranker.top_n(1)[0].0, 0);
//! # Ok::<(), pagerank::error::PageRankError>(())
//! ```

pub mod error;
pub mod ranker;

pub use error::{PageRankError, Result};
pub use ranker::{PageRanker, DEFAULT_DAMPING};
