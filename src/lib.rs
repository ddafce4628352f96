//! datastore-seed library
//!
//! Seeds a Cloud Datastore kind with synthetic records and verifies the
//! result with a count aggregation.
//!
//! # CLI Usage
//!
//! ```bash
//! # Against the local emulator
//! DATASTORE_EMULATOR_HOST=localhost:8081 datastore-seed \
//!   --project_name my_project --namespace my_namespace --kind item_kind
//!
//! # Against the managed service
//! datastore-seed --project_name my-gcp-project \
//!   --access-token "$(gcloud auth print-access-token)"
//! ```

use clap::Parser;
use datastore_client::{ClientConfig, DatastoreClient, EntityStore, Target, DEFAULT_ENDPOINT};
use seed_populate::{generate_records, CountVerifier, Populator};
use std::time::Duration;
use tracing::info;

pub use seed_populate::{CountReport, SeedError};

/// Number of records written per run.
pub const RECORD_COUNT: usize = 10;

/// Where and what to seed.
#[derive(Parser, Clone, Debug)]
pub struct SeedOpts {
    /// Google Cloud project id
    #[arg(long = "project_name", default_value = "my_project")]
    pub project_name: String,

    /// Datastore namespace to write into
    #[arg(long, default_value = "my_namespace")]
    pub namespace: String,

    /// Entity kind to write
    #[arg(long, default_value = "item_kind")]
    pub kind: String,
}

impl SeedOpts {
    /// Reject empty values before anything touches the network.
    pub fn validate(&self) -> Result<(), SeedError> {
        for (flag, value) in [
            ("project_name", &self.project_name),
            ("namespace", &self.namespace),
            ("kind", &self.kind),
        ] {
            if value.is_empty() {
                return Err(SeedError::Config(format!("{flag} is empty")));
            }
        }
        Ok(())
    }
}

/// How to reach Datastore.
#[derive(Parser, Clone, Debug)]
pub struct ConnectionOpts {
    /// Datastore emulator host (e.g. localhost:8081). Takes precedence over --endpoint.
    #[arg(long, env = "DATASTORE_EMULATOR_HOST")]
    pub emulator_host: Option<String>,

    /// Datastore REST endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT, env = "DATASTORE_ENDPOINT")]
    pub endpoint: String,

    /// OAuth2 access token for the managed service
    #[arg(long, env = "DATASTORE_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Per-request timeout in seconds (unset = wait indefinitely)
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,
}

impl ConnectionOpts {
    pub fn client_config(&self, project_id: &str) -> ClientConfig {
        let target = match self.emulator_host.as_deref().filter(|h| !h.is_empty()) {
            Some(host) => Target::Emulator {
                host: host.to_string(),
            },
            None => Target::Cloud {
                endpoint: self.endpoint.clone(),
                access_token: self.access_token.clone(),
            },
        };
        ClientConfig {
            project_id: project_id.to_string(),
            target,
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

#[derive(Parser, Clone, Debug)]
#[command(name = "datastore-seed")]
#[command(about = "Seed a Datastore kind with synthetic records and count them")]
#[command(long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub seed: SeedOpts,

    #[command(flatten)]
    pub connection: ConnectionOpts,
}

/// Validate, connect, write [`RECORD_COUNT`] records and count them.
pub async fn run_seed(cli: &Cli) -> Result<CountReport, SeedError> {
    cli.seed.validate()?;

    let client =
        DatastoreClient::connect(cli.connection.client_config(&cli.seed.project_name))
            .map_err(SeedError::Connection)?;

    info!(
        "Seeding project '{}' namespace '{}' kind '{}'",
        cli.seed.project_name, cli.seed.namespace, cli.seed.kind
    );

    seed_and_verify(&client, &cli.seed, RECORD_COUNT).await
}

/// Write `count` generated records through `store`, then count the kind.
pub async fn seed_and_verify<S: EntityStore + ?Sized>(
    store: &S,
    opts: &SeedOpts,
    count: usize,
) -> Result<CountReport, SeedError> {
    let records = generate_records(count, &opts.kind, &opts.namespace);
    let metrics = Populator::new(store).populate(&records).await?;

    CountVerifier::new(store)
        .verify(&opts.kind, &opts.namespace, metrics.rows_inserted)
        .await
}
