use data_loader::{Dataset, LoaderConfig};
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/movies.csv"));

    println!("Loading {}...\n", path.display());

    let start = Instant::now();
    let dataset = Dataset::load_from_file(&path, &LoaderConfig::default())
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", dataset.len());
    println!("\nPerformance: {:.0} movies/second",
             dataset.len() as f64 / elapsed.as_secs_f64());
}
