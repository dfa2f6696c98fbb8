use thiserror::Error;

use nav_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum QueryError {
    /// `person` is 1 or 2.
    #[error("Person {person}'s building not found (query {query:?})")]
    PersonNotFound { person: u8, query: String },

    #[error("map error: {0}")]
    Map(#[from] SpatialError),
}

pub type QueryResult<T> = Result<T, QueryError>;
