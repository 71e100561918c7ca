use anyhow::Result;
use pokefetch_client::{ClientConfig, PokemonClient};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ClientConfig::from_env()?;
    let client = PokemonClient::new(config)?;

    println!("Fetching {} random Pokémon...", client.config().batch_size);
    let batch = client.random_batch().await?;

    for pokemon in &batch {
        println!(
            "#{:<4} {:<14} [{}]",
            pokemon.id(),
            pokemon.display_name(),
            pokemon.type_labels().join(", ")
        );
    }

    Ok(())
}
