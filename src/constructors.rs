use crate::entities::{Freelancer, Job, Producer};
use crate::repositories::mock::InMemoryRepository;
use crate::repositories::mongo::{
    MongoFreelancerRepository, MongoJobRepository, MongoProducerRepository,
};
use crate::seeder::Seeder;

pub fn in_memory() -> Seeder {
    Seeder {
        producers: Box::new(InMemoryRepository::<Producer>::new()),
        freelancers: Box::new(InMemoryRepository::<Freelancer>::new()),
        jobs: Box::new(InMemoryRepository::<Job>::new()),
    }
}

pub async fn mongo(uri_str: impl AsRef<str>, db_name: impl AsRef<str>) -> ::anyhow::Result<Seeder> {
    let c = ::mongodb::Client::with_uri_str(uri_str.as_ref()).await?;
    let db = c.database(db_name.as_ref());

    Ok(Seeder {
        producers: Box::new(MongoProducerRepository::new_with(&db).await?),
        freelancers: Box::new(MongoFreelancerRepository::new_with(&db).await?),
        jobs: Box::new(MongoJobRepository::new_with(&db).await?),
    })
}
