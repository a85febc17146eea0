use fx_tour_ga::models::{GaConfig, Point};
use fx_tour_ga::{Engine, RunController};

// Steps a seeded run over the corners of a unit square by hand and prints the
// best-ever tour as it settles on the perimeter.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let points = vec![
        Point::new(0, 0.0, 0.0),
        Point::new(1, 1.0, 0.0),
        Point::new(2, 1.0, 1.0),
        Point::new(3, 0.0, 1.0),
    ];
    let config = GaConfig::default()
        .with_city_count(points.len())
        .with_population_size(20)
        .with_max_generations(200);

    let mut controller = RunController::with_points(Engine::seeded(7), config, points)?;

    while !controller.is_exhausted() {
        let snapshot = controller.step();
        if snapshot.generation % 20 == 0 {
            let order: Vec<String> = snapshot
                .best_ever_tour
                .iter()
                .map(|point| point.id.to_string())
                .collect();
            println!(
                "generation {:>3}: best {:.4} via {}",
                snapshot.generation,
                snapshot.best_ever_length,
                order.join(" -> ")
            );
        }
    }

    println!("{}", serde_json::to_string_pretty(&controller.snapshot())?);

    Ok(())
}
