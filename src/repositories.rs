use async_trait::async_trait;

use crate::entities::{Freelancer, FreelancerId, Job, JobId, Producer, ProducerId};

pub(crate) mod mock;
pub(crate) mod mongo;

pub(crate) type Result<T> = ::std::result::Result<T, RepositoryError>;

#[async_trait]
pub(crate) trait ProducerRepository {
    /// `Ok(false)` means the unique key was already taken.
    async fn insert(&self, item: Producer) -> Result<bool>;

    async fn find_by_username(&self, username: &str) -> Result<Producer>;

    /// Set-appends each id into `jobs_created` in one document update.
    async fn push_jobs_created(&self, id: ProducerId, job_ids: &[JobId]) -> Result<()>;

    async fn count(&self) -> Result<u64>;
}

#[async_trait]
pub(crate) trait FreelancerRepository {
    async fn insert(&self, item: Freelancer) -> Result<bool>;

    async fn find_by_username(&self, username: &str) -> Result<Freelancer>;

    /// Set-appends into `applied_jobs`; `Ok(false)` when the id was already present.
    async fn push_applied_job(&self, id: FreelancerId, job_id: JobId) -> Result<bool>;

    async fn count(&self) -> Result<u64>;
}

#[async_trait]
pub(crate) trait JobRepository {
    async fn insert(&self, item: Job) -> Result<bool>;

    async fn find_by_title_and_producer(&self, title: &str, producer: ProducerId)
        -> Result<Job>;

    async fn count(&self) -> Result<u64>;
}

#[derive(Debug)]
pub(crate) enum RepositoryError {
    NotFound,
    NoUnique { matched: u32 },
    Internal(anyhow::Error),
}

impl ::std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        match self {
            RepositoryError::NotFound => write!(f, "cannot find object."),
            RepositoryError::NoUnique { matched } => write!(
                f,
                "expected unique object, found non-unique objects (matched: {})",
                matched
            ),
            RepositoryError::Internal(e) => write!(f, "internal error: {}", e),
        }
    }
}

impl ::std::error::Error for RepositoryError {}
