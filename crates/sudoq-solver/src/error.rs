/// Error returned by the exact-cover search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The full search tree was explored without finding a solution.
    ///
    /// This happens when the input board is unsatisfiable, for example when
    /// a given digit already violates the one-per-unit rule.
    #[display("the board admits no solution")]
    NoSolution,
}
