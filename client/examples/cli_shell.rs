use anyhow::Result;
use pokefetch_client::{
    ClientConfig, CycleState, FetchCycle, FetchError, PokemonClient, RequestToken, TypeQuery, View,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Outcome of a finished request, tagged with the cycle that issued it
type Completion = (RequestToken, Result<View, FetchError>);

fn print_help() {
    println!("Commands:");
    println!("  /random        - Generate a new random batch");
    println!("  /type <name>   - Search by type (Spanish or English)");
    println!("  /quit          - Exit");
    println!("  <name>         - Same as /type <name>");
}

fn render(state: &CycleState) {
    match state {
        CycleState::Idle => {}
        CycleState::Loading => println!("Loading Pokémon..."),
        CycleState::Failed(message) => println!("Error: {}", message),
        CycleState::Success(view) => {
            println!("\n{}", view.title());
            for pokemon in view.summaries() {
                println!(
                    "  {:<24} {}",
                    pokemon.display_name(),
                    pokemon.type_labels().join(" / ")
                );
            }
            println!();
        }
    }
}

fn spawn_random(client: &PokemonClient, token: RequestToken, tx: &mpsc::UnboundedSender<Completion>) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.random_batch().await.map(View::from);
        let _ = tx.send((token, result));
    });
}

fn spawn_type_search(
    client: &PokemonClient,
    token: RequestToken,
    query: String,
    tx: &mpsc::UnboundedSender<Completion>,
) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.fetch_by_type(&query).await.map(View::from);
        let _ = tx.send((token, result));
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    let client = PokemonClient::new(ClientConfig::from_env()?)?;
    let mut cycle = FetchCycle::new();
    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_help();

    let token = cycle.begin();
    spawn_random(&client, token, &tx);
    render(cycle.state());

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let (cmd, arg) = match line.strip_prefix('/') {
                    Some(rest) => {
                        let mut parts = rest.splitn(2, ' ');
                        (parts.next().unwrap_or(""), parts.next().unwrap_or(""))
                    }
                    None => ("type", line),
                };

                match cmd {
                    "help" => print_help(),
                    "quit" => break,
                    "random" => {
                        let token = cycle.begin();
                        spawn_random(&client, token, &tx);
                        render(cycle.state());
                    }
                    "type" => match TypeQuery::parse(arg) {
                        // blank input is a notice, the current results stay on screen
                        Err(e) => println!("{}", e),
                        Ok(query) => {
                            let token = cycle.begin();
                            spawn_type_search(&client, token, query.raw().to_string(), &tx);
                            render(cycle.state());
                        }
                    },
                    other => println!("Unknown command: /{}", other),
                }
            }
            Some((token, result)) = rx.recv() => {
                if cycle.resolve(token, result) {
                    render(cycle.state());
                }
            }
        }
    }

    Ok(())
}
