//! Demonstrates accumulating module marks and printing their distribution

use score_distribution::ScoreAccumulator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Marks for a module scored out of 100.
    let mut acc = ScoreAccumulator::default();
    acc.add_all(&[42, 55, 58, 61, 64, 67, 68, 71, 72, 74, 78, 81, 88, 95, 100])?;

    println!("=== Ten-bin distribution ===");
    let dist = acc.distribution(10)?;
    for bin in &dist {
        println!("{:>7}  {}", bin.label(), "#".repeat(bin.count));
    }
    println!("total: {} marks, peak bin: {}", dist.total_count(), dist.max_count());

    // The same data at a coarser resolution.
    println!("\n=== Four-bin distribution ===");
    let coarse = acc.distribution(4)?;
    for (label, count) in coarse.pairs() {
        println!("{label:>7}  {count}");
    }

    // Serialized form for a downstream renderer.
    println!("\n=== JSON ===");
    println!("{}", serde_json::to_string_pretty(&dist)?);

    // Incompatible bin counts are rejected rather than approximated.
    match acc.distribution(3) {
        Err(e) => println!("\n3 bins rejected: {e}"),
        Ok(_) => unreachable!(),
    }

    Ok(())
}
