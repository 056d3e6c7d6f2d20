use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid chromosome: {0}")]
    InvalidChromosome(String),
}

pub type Result<T> = std::result::Result<T, Error>;
