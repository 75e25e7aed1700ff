use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{
    FreelancerRepository, JobRepository, ProducerRepository, RepositoryError, Result,
};
use crate::entities::{Freelancer, FreelancerId, Job, JobId, Producer, ProducerId};

pub struct InMemoryRepository<T>(Mutex<Vec<T>>);

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self { Self(Mutex::new(vec![])) }
}
impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self { Self::new() }
}

#[inline]
fn find_mut<T, P>(v: &mut Vec<T>, predicate: P) -> Result<&mut T>
where P: FnMut(&&mut T) -> bool {
    let mut res = v.iter_mut().filter(predicate).collect::<Vec<_>>();

    match res.len() {
        0 => Err(RepositoryError::NotFound),
        1 => Ok(res.remove(0)),
        i => Err(RepositoryError::NoUnique { matched: i as u32 }),
    }
}

#[inline]
fn find_ref<T, P>(v: &Vec<T>, predicate: P) -> Result<&T>
where P: FnMut(&&T) -> bool {
    let mut res = v.iter().filter(predicate).collect::<Vec<_>>();

    match res.len() {
        0 => Err(RepositoryError::NotFound),
        1 => Ok(res.remove(0)),
        i => Err(RepositoryError::NoUnique { matched: i as u32 }),
    }
}

#[async_trait]
impl ProducerRepository for InMemoryRepository<Producer> {
    async fn insert(&self, item: Producer) -> Result<bool> {
        let mut guard = self.0.lock().await;

        match find_ref(&guard, |v| v.username == item.username) {
            Ok(_) => return Ok(false),
            Err(RepositoryError::NotFound) => (),
            Err(e) => return Err(e),
        }

        guard.push(item);
        Ok(true)
    }

    async fn find_by_username(&self, username: &str) -> Result<Producer> {
        let guard = self.0.lock().await;

        Ok(find_ref(&guard, |v| v.username == username)?.clone())
    }

    async fn push_jobs_created(&self, id: ProducerId, job_ids: &[JobId]) -> Result<()> {
        let mut guard = self.0.lock().await;
        let item = find_mut(&mut guard, |v| v.id == id)?;

        for job_id in job_ids {
            if !item.jobs_created.contains(job_id) {
                item.jobs_created.push(*job_id);
            }
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64> { Ok(self.0.lock().await.len() as u64) }
}

#[async_trait]
impl FreelancerRepository for InMemoryRepository<Freelancer> {
    async fn insert(&self, item: Freelancer) -> Result<bool> {
        let mut guard = self.0.lock().await;

        match find_ref(&guard, |v| v.username == item.username) {
            Ok(_) => return Ok(false),
            Err(RepositoryError::NotFound) => (),
            Err(e) => return Err(e),
        }

        guard.push(item);
        Ok(true)
    }

    async fn find_by_username(&self, username: &str) -> Result<Freelancer> {
        let guard = self.0.lock().await;

        Ok(find_ref(&guard, |v| v.username == username)?.clone())
    }

    async fn push_applied_job(&self, id: FreelancerId, job_id: JobId) -> Result<bool> {
        let mut guard = self.0.lock().await;
        let item = find_mut(&mut guard, |v| v.id == id)?;

        Ok(item.applied_jobs.insert(job_id))
    }

    async fn count(&self) -> Result<u64> { Ok(self.0.lock().await.len() as u64) }
}

#[async_trait]
impl JobRepository for InMemoryRepository<Job> {
    async fn insert(&self, item: Job) -> Result<bool> {
        let mut guard = self.0.lock().await;

        match find_ref(&guard, |v| v.title == item.title && v.producer == item.producer) {
            Ok(_) => return Ok(false),
            Err(RepositoryError::NotFound) => (),
            Err(e) => return Err(e),
        }

        guard.push(item);
        Ok(true)
    }

    async fn find_by_title_and_producer(
        &self,
        title: &str,
        producer: ProducerId,
    ) -> Result<Job> {
        let guard = self.0.lock().await;

        Ok(find_ref(&guard, |v| v.title == title && v.producer == producer)?.clone())
    }

    async fn count(&self) -> Result<u64> { Ok(self.0.lock().await.len() as u64) }
}
