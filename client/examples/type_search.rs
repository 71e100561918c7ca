use anyhow::{Result, bail};
use pokefetch_client::{ClientConfig, PokemonClient, View};

#[tokio::main]
async fn main() -> Result<()> {
    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query.trim().is_empty() {
        bail!("Usage: type_search <type>   (e.g. fuego, water)");
    }

    let client = PokemonClient::new(ClientConfig::from_env()?)?;
    let view = View::from(client.fetch_by_type(&query).await?);

    println!("{}", view.title());
    for pokemon in view.summaries() {
        println!(
            "#{:<5} {:<24} [{}]  {}",
            pokemon.id(),
            pokemon.display_name(),
            pokemon.type_labels().join(", "),
            pokemon.image_url().unwrap_or("-")
        );
    }

    Ok(())
}
