use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub type ProducerId = Uuid;
pub type FreelancerId = Uuid;
pub type JobId = Uuid;

#[derive(Debug, Clone)]
pub struct Producer {
    pub id: ProducerId,
    pub username: String,
    pub password: String,
    pub email: String,
    pub company_name: String,
    pub linked_in_url: String,
    pub company_website: String,
    pub role: Role,
    pub has_profile: bool,
    pub jobs_created: Vec<JobId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Freelancer {
    pub id: FreelancerId,
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub has_profile: bool,
    pub bio: String,
    pub skills: HashSet<String>,
    pub ai_extracted_skills: HashSet<String>,
    pub applied_jobs: HashSet<JobId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub producer: ProducerId,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub skills_required: Vec<String>,
    pub employment_type: String,
    pub location: String,
    pub salary: i64,
    pub kind: String,
    pub transaction_hash: String,
    pub payment_status: String,
    pub network: String,
    pub tags: HashSet<String>,
    pub applicants: Vec<FreelancerId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Producer,
    Freelancer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Producer => "PRODUCER",
            Role::Freelancer => "FREELANCER",
        }
    }
}
