use battleship_session::{
    init_logging, random_fleet, RandomIdGenerator, Session, SequentialIdGenerator, Side,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Set up a session and lay out both fleets at random.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Identifier of the human player owning the session.
    #[arg(long, default_value = "player")]
    player_id: String,
    #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Print the session on a single line.
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (mut session, mut rng) = match cli.seed {
        Some(s) => {
            log::info!("using fixed seed {}", s);
            let mut ids = SequentialIdGenerator::new(format!("session-{}", s));
            (
                Session::create(cli.player_id, &mut ids),
                SmallRng::seed_from_u64(s),
            )
        }
        None => {
            let mut seed_rng = rand::rng();
            let mut ids = RandomIdGenerator::new(SmallRng::from_rng(&mut seed_rng));
            (
                Session::create(cli.player_id, &mut ids),
                SmallRng::from_rng(&mut seed_rng),
            )
        }
    };

    random_fleet(&mut rng, &mut session, Side::Player)?;
    random_fleet(&mut rng, &mut session, Side::Ai)?;
    log::info!(
        "session {}: {} player ships, {} ai ships placed",
        session.id(),
        session.player_board().len(),
        session.ai_board().len()
    );

    let out = if cli.compact {
        serde_json::to_string(&session)?
    } else {
        serde_json::to_string_pretty(&session)?
    };
    println!("{}", out);
    Ok(())
}
