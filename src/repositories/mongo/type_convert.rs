use chrono::{DateTime, Utc};

use super::{MongoFreelancerModel, MongoJobModel, MongoProducerModel};
use crate::entities::{Freelancer, Job, Producer, Role};

impl From<MongoProducerModel> for Producer {
    fn from(
        MongoProducerModel {
            id,
            username,
            password,
            email,
            company_name,
            linked_in_url,
            company_website,
            role,
            has_profile,
            jobs_created,
            created_at,
        }: MongoProducerModel,
    ) -> Self {
        Producer {
            id: id.parse().unwrap(),
            username,
            password,
            email,
            company_name,
            linked_in_url,
            company_website,
            role: role_from_str(&role),
            has_profile,
            jobs_created: jobs_created.iter().map(|s| s.parse().unwrap()).collect(),
            created_at: datetime_from_str(&created_at),
        }
    }
}
impl From<Producer> for MongoProducerModel {
    fn from(
        Producer {
            id,
            username,
            password,
            email,
            company_name,
            linked_in_url,
            company_website,
            role,
            has_profile,
            jobs_created,
            created_at,
        }: Producer,
    ) -> Self {
        MongoProducerModel {
            id: id.to_string(),
            username,
            password,
            email,
            company_name,
            linked_in_url,
            company_website,
            role: role.as_str().to_owned(),
            has_profile,
            jobs_created: jobs_created.iter().map(|i| i.to_string()).collect(),
            created_at: created_at.to_rfc3339(),
        }
    }
}

impl From<MongoFreelancerModel> for Freelancer {
    fn from(
        MongoFreelancerModel {
            id,
            username,
            password,
            email,
            first_name,
            last_name,
            role,
            has_profile,
            bio,
            skills,
            ai_extracted_skills,
            mut applied_jobs,
            created_at,
        }: MongoFreelancerModel,
    ) -> Self {
        Freelancer {
            id: id.parse().unwrap(),
            username,
            password,
            email,
            first_name,
            last_name,
            role: role_from_str(&role),
            has_profile,
            bio,
            skills,
            ai_extracted_skills,
            applied_jobs: applied_jobs.drain().map(|s| s.parse().unwrap()).collect(),
            created_at: datetime_from_str(&created_at),
        }
    }
}
impl From<Freelancer> for MongoFreelancerModel {
    fn from(
        Freelancer {
            id,
            username,
            password,
            email,
            first_name,
            last_name,
            role,
            has_profile,
            bio,
            skills,
            ai_extracted_skills,
            mut applied_jobs,
            created_at,
        }: Freelancer,
    ) -> Self {
        MongoFreelancerModel {
            id: id.to_string(),
            username,
            password,
            email,
            first_name,
            last_name,
            role: role.as_str().to_owned(),
            has_profile,
            bio,
            skills,
            ai_extracted_skills,
            applied_jobs: applied_jobs.drain().map(|i| i.to_string()).collect(),
            created_at: created_at.to_rfc3339(),
        }
    }
}

impl From<MongoJobModel> for Job {
    fn from(
        MongoJobModel {
            id,
            producer,
            title,
            description,
            requirements,
            skills_required,
            employment_type,
            location,
            salary,
            kind,
            transaction_hash,
            payment_status,
            network,
            tags,
            applicants,
            created_at,
        }: MongoJobModel,
    ) -> Self {
        Job {
            id: id.parse().unwrap(),
            producer: producer.parse().unwrap(),
            title,
            description,
            requirements,
            skills_required,
            employment_type,
            location,
            salary,
            kind,
            transaction_hash,
            payment_status,
            network,
            tags,
            applicants: applicants.iter().map(|s| s.parse().unwrap()).collect(),
            created_at: datetime_from_str(&created_at),
        }
    }
}
impl From<Job> for MongoJobModel {
    fn from(
        Job {
            id,
            producer,
            title,
            description,
            requirements,
            skills_required,
            employment_type,
            location,
            salary,
            kind,
            transaction_hash,
            payment_status,
            network,
            tags,
            applicants,
            created_at,
        }: Job,
    ) -> Self {
        MongoJobModel {
            id: id.to_string(),
            producer: producer.to_string(),
            title,
            description,
            requirements,
            skills_required,
            employment_type,
            location,
            salary,
            kind,
            transaction_hash,
            payment_status,
            network,
            tags,
            applicants: applicants.iter().map(|i| i.to_string()).collect(),
            created_at: created_at.to_rfc3339(),
        }
    }
}

fn role_from_str(s: &str) -> Role {
    match s {
        "PRODUCER" => Role::Producer,
        "FREELANCER" => Role::Freelancer,
        other => unreachable!("unknown role: {}", other),
    }
}

fn datetime_from_str(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}
