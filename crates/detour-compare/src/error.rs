use detour_geo::GeoError;
use thiserror::Error;

use crate::PointRole;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("pair {pair}, point {role}: {source}")]
    InvalidPoint {
        pair:   usize,
        role:   PointRole,
        #[source]
        source: GeoError,
    },

    #[error("trip pair parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CompareResult<T> = Result<T, CompareError>;
