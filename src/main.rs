//! Access-control walkthrough: users, resources, access checks, search, sorting and a
//! save/reload cycle, all through the store actor.

use std::error::Error;
use std::process::ExitCode;

use access_registry::actor::StoreClient;
use access_registry::lifecycle::{setup_tracing, RegistryConfig, RegistrySystem};
use access_registry::model::{Record, Resource};
use access_registry::store::SortField;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    match run().await {
        Ok(()) => {
            info!("Application completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Application failed");
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = RegistryConfig::from_env()?;
    info!(?config, "Starting registry");

    let system = RegistrySystem::start(&config);
    let client = system.client.clone();

    async {
        client.add_record(Record::student("Nick Teran", 1, 1, 101)?).await?;
        client.add_record(Record::teacher("Ms. Brown", 2, 3, "Computer Science")?).await?;
        client.add_record(Record::administrator("Mr. Smith", 3, 5, "admin123")?).await?;

        client.add_resource(Resource::new("Classroom 101", 1)?).await?;
        client.add_resource(Resource::new("Computer Lab", 3)?).await?;
        client.add_resource(Resource::new("Main Library", 2)?).await?;
        client.add_resource(Resource::new("Server Room", 5)?).await?;
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(tracing::info_span!("seeding"))
    .await?;

    println!("=== All Users ===");
    print_users(&client).await?;

    println!("\n=== All Resources ===");
    print_resources(&client).await?;

    println!("\n=== Access Checks ===");
    for (user_id, resource) in [(1, "Computer Lab"), (2, "Server Room"), (3, "Server Room")] {
        let granted = client.check_access(user_id, resource).await?;
        println!(
            "User {} access to {}: {}",
            user_id,
            resource,
            if granted { "Granted" } else { "Denied" }
        );
    }

    println!("\n=== Search ===");
    let exact = client.find_by_name("Nick").await?;
    println!("Users named exactly 'Nick': {}", exact.len());
    let partial = client.search_by_name("Nick").await?;
    if !partial.is_empty() {
        println!("Found users with name containing 'Nick':");
        for user in &partial {
            println!("{}", user);
        }
    }

    println!("\n=== Sorted by Access Level ===");
    client.sort_by_field(SortField::PrivilegeLevel).await?;
    print_users(&client).await?;

    println!("\n=== File I/O ===");
    client.save(&config.data_file).await?;
    println!("Saved to {}", config.data_file.display());
    drop(client);
    system.shutdown().await?;

    let reloaded = RegistrySystem::start(&config);
    reloaded
        .client
        .load(&config.data_file, config.parse_mode)
        .await?;
    println!("Loaded system:");
    print_users(&reloaded.client).await?;
    print_resources(&reloaded.client).await?;
    reloaded.shutdown().await?;

    Ok(())
}

async fn print_users(client: &StoreClient) -> Result<(), Box<dyn Error>> {
    for record in client.snapshot().await?.records {
        println!("{}", record);
    }
    Ok(())
}

async fn print_resources(client: &StoreClient) -> Result<(), Box<dyn Error>> {
    for resource in client.snapshot().await?.resources {
        println!("{}", resource);
    }
    Ok(())
}
