use emporium_account::RepositoryError;
use emporium_db_entity::errors::DbEntityError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbSqlError {
    #[error("failed to construct the database: {0}")]
    Construction(String),

    #[error("stored row could not be decoded: {0}")]
    Decoding(#[from] DbEntityError),

    #[error(transparent)]
    BackendError(#[from] DbErr),
}

impl From<DbSqlError> for RepositoryError {
    fn from(value: DbSqlError) -> Self {
        RepositoryError::new(value)
    }
}

pub type Result<T> = std::result::Result<T, DbSqlError>;
