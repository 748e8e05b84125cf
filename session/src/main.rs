use clap::Parser;
use log::info;
use rand::Rng;
use session::{encode, numeric_pairs, text_pairs, SessionState};

/// Runs a headless demo session: spawns a handful of clients, mutates
/// their attributes for a number of ticks, and encodes a snapshot after
/// every tick the way the host server would for its observers.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Command line arguments
    #[derive(Parser, Debug)]
    #[clap(author, version, about)]
    struct Args {
        /// Number of clients to join the session
        #[clap(short, long, default_value = "4")]
        clients: usize,
        /// Number of simulation ticks to run
        #[clap(short, long, default_value = "10")]
        ticks: u32,
    }

    env_logger::init();
    let args = Args::parse();
    let mut rng = rand::thread_rng();

    let mut state = SessionState::new();

    for i in 0..args.clients {
        let global_id = format!("client-{}", i + 1);
        let entity = state.handle_join(&global_id)?;
        entity.attributes.add_numeric("hp", 100.0);
        entity.attributes.add_numeric("stamina", 50.0);
        entity.attributes.add_text("name", &format!("fighter-{}", i + 1));
    }

    for tick in 1..=args.ticks {
        for i in 0..args.clients {
            let global_id = format!("client-{}", i + 1);
            if let Some(entity) = state.entity_mut(&global_id) {
                let damage: f64 = rng.gen_range(0.0..5.0);
                let mut hp = entity.attributes.numeric_view("hp")?;
                let remaining = (hp.read() - damage).max(0.0);
                hp.write(remaining);
            }
        }

        let snapshot = encode(&state)?;
        info!("Tick {}: snapshot is {} bytes", tick, snapshot.len());
    }

    for entity in &state.entities {
        println!("{}:", entity.id);
        for (key, value) in text_pairs(&entity.attributes) {
            println!("  {} = {}", key, value);
        }
        for (key, value) in numeric_pairs(&entity.attributes) {
            println!("  {} = {:.1}", key, value);
        }
    }

    state.dispose();
    Ok(())
}
