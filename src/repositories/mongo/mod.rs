use std::collections::HashSet;

use anyhow::anyhow;
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use super::{
    FreelancerRepository, JobRepository, ProducerRepository, RepositoryError, Result,
};
use crate::entities::{Freelancer, FreelancerId, Job, JobId, Producer, ProducerId};

mod type_convert;

pub struct MongoProducerRepository {
    coll: Collection<MongoProducerModel>,
}

impl MongoProducerRepository {
    pub async fn new_with(db: &Database) -> ::anyhow::Result<Self> {
        db.run_command(
            doc! {
                "createIndexes": "producers",
                "indexes": [{
                    "name": "unique_username",
                    "key": {
                        "username": 1
                    },
                    "unique": true
                }],
            },
            None,
        )
        .await
        .map_err(::anyhow::Error::new)?;

        let coll = db.collection("producers");

        Ok(Self { coll })
    }
}

pub struct MongoFreelancerRepository {
    coll: Collection<MongoFreelancerModel>,
}

impl MongoFreelancerRepository {
    pub async fn new_with(db: &Database) -> ::anyhow::Result<Self> {
        db.run_command(
            doc! {
                "createIndexes": "freelancers",
                "indexes": [{
                    "name": "unique_username",
                    "key": {
                        "username": 1
                    },
                    "unique": true
                }],
            },
            None,
        )
        .await
        .map_err(::anyhow::Error::new)?;

        let coll = db.collection("freelancers");

        Ok(Self { coll })
    }
}

pub struct MongoJobRepository {
    coll: Collection<MongoJobModel>,
}

impl MongoJobRepository {
    pub async fn new_with(db: &Database) -> ::anyhow::Result<Self> {
        db.run_command(
            doc! {
                "createIndexes": "jobs",
                "indexes": [{
                    "name": "unique_title_producer",
                    "key": {
                        "title": 1,
                        "producer": 1
                    },
                    "unique": true
                }],
            },
            None,
        )
        .await
        .map_err(::anyhow::Error::new)?;

        let coll = db.collection("jobs");

        Ok(Self { coll })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MongoProducerModel {
    id: String,
    username: String,
    password: String,
    email: String,
    company_name: String,
    linked_in_url: String,
    company_website: String,
    role: String,
    has_profile: bool,
    jobs_created: Vec<String>,
    created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MongoFreelancerModel {
    id: String,
    username: String,
    password: String,
    email: String,
    first_name: String,
    last_name: String,
    role: String,
    has_profile: bool,
    bio: String,
    skills: HashSet<String>,
    ai_extracted_skills: HashSet<String>,
    applied_jobs: HashSet<String>,
    created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MongoJobModel {
    id: String,
    producer: String,
    title: String,
    description: String,
    requirements: Vec<String>,
    skills_required: Vec<String>,
    employment_type: String,
    location: String,
    salary: i64,
    #[serde(rename = "type")]
    kind: String,
    transaction_hash: String,
    payment_status: String,
    network: String,
    tags: HashSet<String>,
    applicants: Vec<String>,
    created_at: String,
}

#[async_trait]
impl ProducerRepository for MongoProducerRepository {
    async fn insert(&self, item: Producer) -> Result<bool> {
        let model: MongoProducerModel = item.into();

        try_unique_check(self.coll.insert_one(model, None).await)
    }

    async fn find_by_username(&self, username: &str) -> Result<Producer> {
        let model = convert_404_or(convert_repo_err(
            self.coll.find_one(doc! { "username": username }, None).await,
        )?)?;

        Ok(model.into())
    }

    async fn push_jobs_created(&self, id: ProducerId, job_ids: &[JobId]) -> Result<()> {
        let ids = job_ids.iter().map(|i| i.to_string()).collect::<Vec<_>>();

        let res = convert_repo_err(
            self.coll
                .update_one(
                    doc! { "id": id.to_string() },
                    doc! { "$addToSet": { "jobsCreated": { "$each": ids } } },
                    None,
                )
                .await,
        )?;

        convert_404(res.matched_count == 1)
    }

    async fn count(&self) -> Result<u64> {
        convert_repo_err(self.coll.count_documents(doc! {}, None).await)
    }
}

#[async_trait]
impl FreelancerRepository for MongoFreelancerRepository {
    async fn insert(&self, item: Freelancer) -> Result<bool> {
        let model: MongoFreelancerModel = item.into();

        try_unique_check(self.coll.insert_one(model, None).await)
    }

    async fn find_by_username(&self, username: &str) -> Result<Freelancer> {
        let model = convert_404_or(convert_repo_err(
            self.coll.find_one(doc! { "username": username }, None).await,
        )?)?;

        Ok(model.into())
    }

    async fn push_applied_job(&self, id: FreelancerId, job_id: JobId) -> Result<bool> {
        let res = convert_repo_err(
            self.coll
                .update_one(
                    doc! { "id": id.to_string() },
                    doc! { "$addToSet": { "appliedJobs": job_id.to_string() } },
                    None,
                )
                .await,
        )?;

        convert_404(res.matched_count == 1)?;
        Ok(res.modified_count == 1)
    }

    async fn count(&self) -> Result<u64> {
        convert_repo_err(self.coll.count_documents(doc! {}, None).await)
    }
}

#[async_trait]
impl JobRepository for MongoJobRepository {
    async fn insert(&self, item: Job) -> Result<bool> {
        let model: MongoJobModel = item.into();

        try_unique_check(self.coll.insert_one(model, None).await)
    }

    async fn find_by_title_and_producer(
        &self,
        title: &str,
        producer: ProducerId,
    ) -> Result<Job> {
        let model = convert_404_or(convert_repo_err(
            self.coll
                .find_one(doc! { "title": title, "producer": producer.to_string() }, None)
                .await,
        )?)?;

        Ok(model.into())
    }

    async fn count(&self) -> Result<u64> {
        convert_repo_err(self.coll.count_documents(doc! {}, None).await)
    }
}

fn convert_repo_err<T, E>(result: ::core::result::Result<T, E>) -> Result<T>
where E: Sync + Send + ::std::error::Error + 'static {
    result.map_err(|e| RepositoryError::Internal(anyhow!(e)))
}

fn try_unique_check<T>(result: ::std::result::Result<T, ::mongodb::error::Error>) -> Result<bool> {
    match match match result {
        Ok(_) => return Ok(true),
        Err(e) => (*e.kind.clone(), e),
    } {
        (
            ::mongodb::error::ErrorKind::Write(::mongodb::error::WriteFailure::WriteError(e)),
            src,
        ) => (e.code, src),
        (_, src) => return Err(RepositoryError::Internal(anyhow!(src))),
    } {
        (11000, _) => Ok(false),
        (_, src) => Err(RepositoryError::Internal(anyhow!(src))),
    }
}

fn convert_404_or<T>(option: Option<T>) -> Result<T> {
    match option {
        Some(t) => Ok(t),
        None => Err(RepositoryError::NotFound),
    }
}

fn convert_404(b: bool) -> Result<()> {
    match b {
        true => Ok(()),
        false => Err(RepositoryError::NotFound),
    }
}
