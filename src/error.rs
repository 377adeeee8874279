use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown language code {0:?}, expected one of: en, pt")]
    UnknownLanguage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
