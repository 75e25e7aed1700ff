use std::env::{args, var};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use log::error;
use marketplace_seeder::dataset::SEED_DATASET;
use marketplace_seeder::mongo;
use marketplace_seeder::seeder::SeedSummary;
use rand::rngs::StdRng;
use rand::SeedableRng;

// grace period for the driver to flush its connection before exit
const EXIT_FLUSH_DELAY: Duration = Duration::from_millis(500);

async fn async_main() {
    let AppValues { uri, db_name } = match get_values() {
        Ok(o) => o,
        Err(e) => return e,
    };

    match seed(uri, db_name).await {
        Ok(SeedSummary {
            producer,
            freelancers,
            jobs,
        }) => println!(
            "Seed complete: producer={}, freelancers={}, jobs={}",
            producer, freelancers, jobs
        ),
        Err(e) => error!("seed failed: {:?}", e),
    }

    tokio::time::sleep(EXIT_FLUSH_DELAY).await;
}

async fn seed(uri: String, db_name: String) -> ::anyhow::Result<SeedSummary> {
    let seeder = mongo(uri, db_name).await?;
    let mut rng = StdRng::from_entropy();

    seeder.run(&SEED_DATASET, &mut rng).await
}

fn main() {
    env_logger::init();

    static NUM: AtomicU32 = AtomicU32::new(0);

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name_fn(|| {
            let num = NUM.fetch_add(1, Ordering::Relaxed);
            format!("marketplace-seeder-worker-{}", num)
        })
        .build()
    {
        Ok(r) => r,
        Err(e) => return eprintln!("{}", e),
    };

    rt.block_on(async_main());

    // failures are reported through the log, never the exit status
    ::std::process::exit(0);
}

struct AppValues {
    uri: String,
    db_name: String,
}

fn get_values() -> Result<AppValues, ()> {
    let mut args = args();
    args.next(); // the first argument is the command name

    let uri = crate::try_get_value!(args; "MONGODB_URI", "BUILD_WITH_MONGODB_URI", "uri")?;
    let db_name = crate::try_get_value!(args; "MONGODB_DB", "BUILD_WITH_MONGODB_DB", "db_name")?;

    Ok(AppValues { uri, db_name })
}

#[macro_export]
macro_rules! try_get_value {
    ($a:expr; $n:literal, $bn:literal, $pn:literal) => {{
        match $a.next() {
            Some(t) => Ok(t),
            None => match var($n) {
                Ok(t) => Ok(t),
                Err(e) => {
                    eprintln!("error on getting `{}`: {}", $n, e);
                    eprintln!("fallback to built-in `{}`...", stringify!($pn));

                    match option_env!($bn) {
                        Some(t) => Ok(t.to_string()),
                        None => {
                            eprintln!("cannot get `{}`!", stringify!($pn));
                            Err(())
                        },
                    }
                },
            },
        }
    }};
}
