use thiserror::Error;

/// Rejected table geometry.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("row height must be greater than zero")]
    ZeroRowHeight,

    /// The margin is also the snap grid factor; without it the rows below a snapped-down
    /// top would fall outside the window.
    #[error("row margin must be at least one row")]
    ZeroMargin,
}
