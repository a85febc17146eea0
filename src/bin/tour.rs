use fx_tour_ga::RunController;
use fx_tour_ga::bootstrap::{Configuration, bootstrap};
use fx_tour_ga::engine::TickOutcome;
use tracing::Level;

const PROGRESS_EVERY: u32 = 50;

// Runs a single tour evolution on a fixed cadence until the generation ceiling
// is reached or ctrl-c is pressed, then prints the final snapshot as JSON.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::from_filename(".env.local").ok();
    tracing_subscriber::fmt()
        .pretty()
        .with_thread_ids(true)
        .with_max_level(Level::INFO)
        .init();

    let config = Configuration::from_env()?;
    let tick = config.tick;
    let mut controller = bootstrap(config)?;
    controller.start();

    let mut interval = tokio::time::interval(tick);
    loop {
        tokio::select! {
            _ = interval.tick() => {
                if drive(&mut controller) {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                controller.pause();
                tracing::info!(generation = controller.generation(), "Interrupted; pausing run");
                break;
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(&controller.snapshot())?);

    Ok(())
}

/// Applies one tick; returns true once the run is finished.
fn drive(controller: &mut RunController) -> bool {
    match controller.tick() {
        TickOutcome::Advanced(snapshot) => {
            if snapshot.generation % PROGRESS_EVERY == 0 {
                tracing::info!(
                    generation = snapshot.generation,
                    best_ever_length = snapshot.best_ever_length,
                    mean_length = snapshot.current_population_mean_length,
                    "Progress"
                );
            }
            false
        }
        TickOutcome::Paused => false,
        TickOutcome::Exhausted(snapshot) => {
            tracing::info!(
                generation = snapshot.generation,
                best_ever_length = snapshot.best_ever_length,
                "Run finished"
            );
            true
        }
    }
}
