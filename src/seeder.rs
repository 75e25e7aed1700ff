use std::collections::HashSet;

use anyhow::{bail, Result};
use chrono::Utc;
use log::info;
use rand::Rng;
use uuid::Uuid;

use crate::dataset::{SeedDataset, SeedFreelancer, SeedJob, SeedProducer};
use crate::entities::{Freelancer, Job, Producer, Role};
use crate::repositories::{
    FreelancerRepository, JobRepository, ProducerRepository, RepositoryError,
};
use crate::sampler::pick_applicants;

pub(crate) const HASH_COST: u32 = 10;
pub(crate) const MIN_APPLICANTS: usize = 2;
pub(crate) const MAX_APPLICANTS: usize = 5;

const SEEDED_TX_HASH: &str = "0xseeded_tx_hash";
const SEEDED_PAYMENT_STATUS: &str = "paid";
const SEEDED_NETWORK: &str = "Ethereum Sepolia";
const JOB_KIND: &str = "job";

pub struct Seeder {
    pub(crate) producers: Box<dyn ProducerRepository + Send + Sync>,
    pub(crate) freelancers: Box<dyn FreelancerRepository + Send + Sync>,
    pub(crate) jobs: Box<dyn JobRepository + Send + Sync>,
}

#[derive(Debug)]
pub struct SeedSummary {
    pub producer: String,
    pub freelancers: usize,
    pub jobs: usize,
}

impl Seeder {
    pub async fn run<R: Rng>(&self, dataset: &SeedDataset, rng: &mut R) -> Result<SeedSummary> {
        let producer = self.ensure_producer(&dataset.producer).await?;
        info!("ensured producer `{}`", producer.username);

        let freelancers = self.ensure_freelancers(&dataset.freelancers).await?;
        info!("ensured {} freelancers", freelancers.len());

        let jobs = self.create_jobs(&producer, &freelancers, &dataset.jobs, rng).await?;
        info!("ensured {} jobs", jobs.len());

        Ok(SeedSummary {
            producer: producer.username,
            freelancers: freelancers.len(),
            jobs: jobs.len(),
        })
    }

    /// Find-or-create; a pre-existing producer is returned untouched,
    /// password included.
    pub(crate) async fn ensure_producer(&self, seed: &SeedProducer) -> Result<Producer> {
        match self.producers.find_by_username(&seed.username).await {
            Ok(existing) => return Ok(existing),
            Err(RepositoryError::NotFound) => (),
            Err(e) => return Err(e.into()),
        }

        let password = hash_password(&seed.password).await?;
        let item = Producer {
            id: Uuid::new_v4(),
            username: seed.username.clone(),
            password,
            email: seed.email.clone(),
            company_name: seed.company_name.clone(),
            linked_in_url: seed.linked_in_url.clone(),
            company_website: seed.company_website.clone(),
            role: Role::Producer,
            has_profile: true,
            jobs_created: vec![],
            created_at: Utc::now(),
        };

        match self.producers.insert(item.clone()).await? {
            true => Ok(item),
            false => bail!("producer `{}` was inserted concurrently", seed.username),
        }
    }

    pub(crate) async fn ensure_freelancers(
        &self,
        seeds: &[SeedFreelancer],
    ) -> Result<Vec<Freelancer>> {
        let mut created = Vec::with_capacity(seeds.len());

        for seed in seeds {
            // upsert-like behavior
            match self.freelancers.find_by_username(&seed.username).await {
                Ok(existing) => {
                    created.push(existing);
                    continue;
                }
                Err(RepositoryError::NotFound) => (),
                Err(e) => return Err(e.into()),
            }

            let password = hash_password(&seed.password).await?;
            let skills = seed.skills.iter().cloned().collect::<HashSet<_>>();
            let item = Freelancer {
                id: Uuid::new_v4(),
                username: seed.username.clone(),
                password,
                email: seed.email.clone(),
                first_name: seed.first_name.clone(),
                last_name: seed.last_name.clone(),
                role: Role::Freelancer,
                has_profile: true,
                bio: seed.bio.clone(),
                ai_extracted_skills: skills.clone(),
                skills,
                applied_jobs: HashSet::new(),
                created_at: Utc::now(),
            };

            match self.freelancers.insert(item.clone()).await? {
                true => created.push(item),
                false => bail!("freelancer `{}` was inserted concurrently", seed.username),
            }
        }

        Ok(created)
    }

    pub(crate) async fn create_jobs<R: Rng>(
        &self,
        producer: &Producer,
        pool: &[Freelancer],
        seeds: &[SeedJob],
        rng: &mut R,
    ) -> Result<Vec<Job>> {
        let mut created = Vec::with_capacity(seeds.len());

        for seed in seeds {
            match self.jobs.find_by_title_and_producer(&seed.title, producer.id).await {
                Ok(existing) => {
                    info!("job `{}` already seeded", seed.title);
                    created.push(existing);
                    continue;
                }
                Err(RepositoryError::NotFound) => (),
                Err(e) => return Err(e.into()),
            }

            let applicants = pick_applicants(pool, MIN_APPLICANTS, MAX_APPLICANTS, rng);

            let job = Job {
                id: Uuid::new_v4(),
                producer: producer.id,
                title: seed.title.clone(),
                description: seed.description.clone(),
                requirements: seed.requirements.clone(),
                skills_required: seed.skills_required.clone(),
                employment_type: seed.employment_type.clone(),
                location: seed.location.clone(),
                salary: seed.salary,
                kind: JOB_KIND.to_owned(),
                transaction_hash: SEEDED_TX_HASH.to_owned(),
                payment_status: SEEDED_PAYMENT_STATUS.to_owned(),
                network: SEEDED_NETWORK.to_owned(),
                tags: seed.tags.iter().cloned().collect(),
                applicants: applicants.iter().map(|f| f.id).collect(),
                created_at: Utc::now(),
            };

            match self.jobs.insert(job.clone()).await? {
                true => (),
                false => bail!("job `{}` was inserted concurrently", seed.title),
            }

            // reverse references, one conditional append per applicant
            for applicant in &applicants {
                self.freelancers.push_applied_job(applicant.id, job.id).await?;
            }

            info!("seeded job `{}` with {} applicants", job.title, job.applicants.len());
            created.push(job);
        }

        // one consolidated producer update
        let to_add = created
            .iter()
            .map(|j| j.id)
            .filter(|id| !producer.jobs_created.contains(id))
            .collect::<Vec<_>>();
        if !to_add.is_empty() {
            self.producers.push_jobs_created(producer.id, &to_add).await?;
        }

        Ok(created)
    }
}

async fn hash_password(plain: &str) -> Result<String> {
    let plain = plain.to_owned();
    let hashed = tokio::task::spawn_blocking(move || ::bcrypt::hash(plain, HASH_COST)).await??;

    Ok(hashed)
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    use super::{Seeder, MAX_APPLICANTS, MIN_APPLICANTS};
    use crate::dataset::{SeedDataset, SeedFreelancer, SeedJob, SeedProducer, SEED_DATASET};
    use crate::entities::{Freelancer, FreelancerId, Job, JobId, Producer, Role};
    use crate::in_memory;
    use crate::repositories::mock::InMemoryRepository;
    use crate::repositories::{FreelancerRepository, RepositoryError, Result as RepoResult};

    fn rng() -> StdRng { StdRng::seed_from_u64(42) }

    fn seed_freelancer(n: u32) -> SeedFreelancer {
        SeedFreelancer {
            username: format!("freelancer{:02}", n),
            password: "Password123!".into(),
            email: format!("freelancer{:02}@example.com", n),
            first_name: format!("Freelancer{:02}", n),
            last_name: "User".into(),
            bio: String::new(),
            skills: vec!["Rust".into()],
        }
    }

    fn seed_job(title: &str) -> SeedJob {
        SeedJob {
            title: title.into(),
            description: "desc".into(),
            requirements: vec!["req".into()],
            skills_required: vec!["skill".into()],
            employment_type: "Full-time".into(),
            location: "Remote".into(),
            salary: 1000,
            tags: vec![],
        }
    }

    fn tiny_dataset() -> SeedDataset {
        SeedDataset {
            producer: SeedProducer {
                username: "producer".into(),
                password: "Password123!".into(),
                email: "producer@example.com".into(),
                company_name: "Seeded Studios".into(),
                linked_in_url: "https://www.linkedin.com/company/seeded-studios".into(),
                company_website: "https://seeded.example.com".into(),
            },
            freelancers: (1..=3).map(seed_freelancer).collect(),
            jobs: vec![seed_job("Full Stack Developer"), seed_job("Data Scientist")],
        }
    }

    async fn applied_jobs_by_id(
        seeder: &Seeder,
        dataset: &SeedDataset,
    ) -> HashMap<FreelancerId, HashSet<JobId>> {
        let mut map = HashMap::new();
        for seed in &dataset.freelancers {
            let f = seeder.freelancers.find_by_username(&seed.username).await.unwrap();
            map.insert(f.id, f.applied_jobs);
        }
        map
    }

    #[tokio::test]
    async fn fresh_database_summary() {
        let seeder = in_memory();
        let summary = seeder.run(&SEED_DATASET, &mut rng()).await.unwrap();

        assert_eq!(summary.producer, "producer");
        assert_eq!(summary.freelancers, 10);
        assert_eq!(summary.jobs, 5);
    }

    #[tokio::test]
    async fn second_run_creates_nothing() {
        let seeder = in_memory();
        let dataset = tiny_dataset();

        seeder.run(&dataset, &mut rng()).await.unwrap();
        let summary = seeder.run(&dataset, &mut rng()).await.unwrap();

        assert_eq!(summary.freelancers, dataset.freelancers.len());
        assert_eq!(summary.jobs, dataset.jobs.len());
        assert_eq!(seeder.producers.count().await.unwrap(), 1);
        assert_eq!(seeder.freelancers.count().await.unwrap(), dataset.freelancers.len() as u64);
        assert_eq!(seeder.jobs.count().await.unwrap(), dataset.jobs.len() as u64);
    }

    #[tokio::test]
    async fn applicant_counts_stay_within_bounds() {
        let seeder = in_memory();
        seeder.run(&SEED_DATASET, &mut rng()).await.unwrap();

        let producer = seeder.producers.find_by_username("producer").await.unwrap();
        for seed in &SEED_DATASET.jobs {
            let job = seeder
                .jobs
                .find_by_title_and_producer(&seed.title, producer.id)
                .await
                .unwrap();
            assert!(
                job.applicants.len() >= MIN_APPLICANTS && job.applicants.len() <= MAX_APPLICANTS,
                "job `{}` has {} applicants",
                job.title,
                job.applicants.len()
            );
        }
    }

    #[tokio::test]
    async fn reverse_references_hold() {
        let seeder = in_memory();
        let dataset = tiny_dataset();
        seeder.run(&dataset, &mut rng()).await.unwrap();

        let producer = seeder.producers.find_by_username("producer").await.unwrap();
        let applied = applied_jobs_by_id(&seeder, &dataset).await;

        for seed in &dataset.jobs {
            let job = seeder
                .jobs
                .find_by_title_and_producer(&seed.title, producer.id)
                .await
                .unwrap();

            for applicant in &job.applicants {
                assert!(
                    applied[applicant].contains(&job.id),
                    "freelancer {} is missing job `{}` in applied_jobs",
                    applicant,
                    job.title
                );
            }

            let occurrences =
                producer.jobs_created.iter().filter(|id| **id == job.id).count();
            assert_eq!(occurrences, 1, "job `{}` in jobs_created", job.title);
        }
    }

    #[tokio::test]
    async fn jobs_created_not_duplicated_across_runs() {
        let seeder = in_memory();
        let dataset = tiny_dataset();

        seeder.run(&dataset, &mut rng()).await.unwrap();
        seeder.run(&dataset, &mut rng()).await.unwrap();

        let producer = seeder.producers.find_by_username("producer").await.unwrap();
        assert_eq!(producer.jobs_created.len(), dataset.jobs.len());

        let unique = producer.jobs_created.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), producer.jobs_created.len());
    }

    #[tokio::test]
    async fn existing_password_is_not_overwritten() {
        let seeder = in_memory();
        let dataset = tiny_dataset();

        let first = seeder.ensure_producer(&dataset.producer).await.unwrap();

        let mut changed = dataset.producer.clone();
        changed.password = "SomethingElse456!".into();
        let second = seeder.ensure_producer(&changed).await.unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.password, first.password);
    }

    #[tokio::test]
    async fn existing_job_keeps_its_applicants() {
        let seeder = in_memory();
        let dataset = tiny_dataset();

        let producer = seeder.ensure_producer(&dataset.producer).await.unwrap();
        let freelancers = seeder.ensure_freelancers(&dataset.freelancers).await.unwrap();

        let pinned = Job {
            id: Uuid::new_v4(),
            producer: producer.id,
            title: "Data Scientist".into(),
            description: "pre-existing".into(),
            requirements: vec![],
            skills_required: vec![],
            employment_type: "Full-time".into(),
            location: "Remote".into(),
            salary: 1,
            kind: "job".into(),
            transaction_hash: "0xdeadbeef".into(),
            payment_status: "paid".into(),
            network: "Ethereum Sepolia".into(),
            tags: HashSet::new(),
            applicants: freelancers.iter().map(|f| f.id).collect(),
            created_at: Utc::now(),
        };
        assert_eq!(pinned.applicants.len(), 3);
        assert!(seeder.jobs.insert(pinned.clone()).await.unwrap());

        seeder.run(&dataset, &mut rng()).await.unwrap();

        let job = seeder
            .jobs
            .find_by_title_and_producer("Data Scientist", producer.id)
            .await
            .unwrap();
        assert_eq!(job.id, pinned.id);
        assert_eq!(job.applicants.len(), 3);
    }

    #[tokio::test]
    async fn second_run_does_not_resample() {
        let seeder = in_memory();
        let dataset = tiny_dataset();

        seeder.run(&dataset, &mut rng()).await.unwrap();
        let producer = seeder.producers.find_by_username("producer").await.unwrap();

        let mut before = vec![];
        for seed in &dataset.jobs {
            let job = seeder
                .jobs
                .find_by_title_and_producer(&seed.title, producer.id)
                .await
                .unwrap();
            before.push(job.applicants);
        }

        // different rng seed; the stored assignments must not move
        seeder.run(&dataset, &mut StdRng::seed_from_u64(7)).await.unwrap();

        for (seed, expected) in dataset.jobs.iter().zip(before) {
            let job = seeder
                .jobs
                .find_by_title_and_producer(&seed.title, producer.id)
                .await
                .unwrap();
            assert_eq!(job.applicants, expected);
        }
    }

    struct FailOnNthInsert {
        inner: InMemoryRepository<Freelancer>,
        fail_on: u32,
        seen: AtomicU32,
    }

    #[async_trait]
    impl FreelancerRepository for FailOnNthInsert {
        async fn insert(&self, item: Freelancer) -> RepoResult<bool> {
            let n = self.seen.fetch_add(1, Ordering::SeqCst) + 1;
            if n == self.fail_on {
                return Err(RepositoryError::Internal(anyhow::anyhow!(
                    "injected save failure"
                )));
            }
            self.inner.insert(item).await
        }

        async fn find_by_username(&self, username: &str) -> RepoResult<Freelancer> {
            self.inner.find_by_username(username).await
        }

        async fn push_applied_job(
            &self,
            id: FreelancerId,
            job_id: JobId,
        ) -> RepoResult<bool> {
            self.inner.push_applied_job(id, job_id).await
        }

        async fn count(&self) -> RepoResult<u64> { self.inner.count().await }
    }

    #[tokio::test]
    async fn failure_mid_freelancers_aborts_and_keeps_earlier_writes() {
        let seeder = Seeder {
            producers: Box::new(InMemoryRepository::<Producer>::new()),
            freelancers: Box::new(FailOnNthInsert {
                inner: InMemoryRepository::new(),
                fail_on: 3,
                seen: AtomicU32::new(0),
            }),
            jobs: Box::new(InMemoryRepository::<Job>::new()),
        };

        let err = seeder.run(&tiny_dataset(), &mut rng()).await.unwrap_err();
        assert!(err.to_string().contains("injected save failure"));

        assert_eq!(seeder.producers.count().await.unwrap(), 1);
        assert_eq!(seeder.freelancers.count().await.unwrap(), 2);
        assert_eq!(seeder.jobs.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn ensured_freelancers_preserve_seed_order() {
        let seeder = in_memory();
        let dataset = tiny_dataset();

        let freelancers = seeder.ensure_freelancers(&dataset.freelancers).await.unwrap();

        let usernames = freelancers.iter().map(|f| f.username.as_str()).collect::<Vec<_>>();
        assert_eq!(usernames, vec!["freelancer01", "freelancer02", "freelancer03"]);
        assert!(freelancers.iter().all(|f| f.role == Role::Freelancer));
        assert!(freelancers.iter().all(|f| f.skills == f.ai_extracted_skills));
    }
}
