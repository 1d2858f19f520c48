//! itemstore-client CLI entry point.

use clap::Parser;
use itemstore_client::cli::items::{create_request, update_request, ItemsAction};
use itemstore_client::cli::{Cli, Commands, OutputFormat};
use itemstore_client::output::{format_output, pretty};
use itemstore_client::{smoke, ItemstoreClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ItemstoreClient::new(&cli.base_url);

    match cli.command {
        Commands::Items(items_cmd) => match items_cmd.action {
            ItemsAction::List => {
                let items = client.list_items().await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&items, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_items(&items)),
                }
            }
            ItemsAction::Create {
                name,
                price,
                description,
                is_offer,
            } => {
                let item = client
                    .create_item(&create_request(name, price, description, is_offer))
                    .await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                    OutputFormat::Pretty => println!("Created:\n{}", pretty::format_item(&item)),
                }
            }
            ItemsAction::Get { id } => {
                let item = client.get_item(id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_item(&item)),
                }
            }
            ItemsAction::Update {
                id,
                name,
                price,
                description,
                clear_description,
                is_offer,
            } => {
                let request = update_request(name, price, description, clear_description, is_offer)?;
                let item = client.update_item(id, &request).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                    OutputFormat::Pretty => println!("Updated:\n{}", pretty::format_item(&item)),
                }
            }
            ItemsAction::Delete { id } => {
                client.delete_item(id).await?;
                if !cli.quiet {
                    println!("Deleted item {id}");
                }
            }
        },
        Commands::Health => {
            let health = client.health().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&health, cli.format)),
                OutputFormat::Pretty => println!("Health: {}", health.status),
            }
        }
        Commands::Info => {
            let info = client.info().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&info, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_info(&info)),
            }
        }
        Commands::Smoke => {
            let quiet = cli.quiet;
            smoke::run(&client, |step, detail| {
                if !quiet {
                    println!("[ok] {step:<7} {detail}");
                }
            })
            .await?;
            if !quiet {
                println!("Smoke test passed against {}", client.base_url());
            }
        }
    }

    Ok(())
}
