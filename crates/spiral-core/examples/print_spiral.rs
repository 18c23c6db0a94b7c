use spiral_core::*;

fn main() {
    let angle_start = 0.0;
    let angle_end = 6.0 * std::f64::consts::PI;
    let num_points = 12;

    match SpiralGenerator::new(angle_start, angle_end, num_points) {
        Ok(spiral) => {
            println!("Generating {}", spiral);
            println!("  Step: {:.4} rad", spiral.step());

            let points = spiral.generate();
            println!("{:>4} {:>10} {:>10}", "i", PointSequence::COLUMN_NAMES[0], PointSequence::COLUMN_NAMES[1]);
            for (i, p) in points.iter().enumerate() {
                println!("{:>4} {:>10.4} {:>10.4}", i, p.x, p.y);
            }

            match calculate_limits(&points, DEFAULT_PADDING) {
                Ok(limits) => println!("\nPlot limits: {}", limits),
                Err(e) => eprintln!("Failed to compute limits: {}", e),
            }

            // Pretend the last three points closed off infinite cells.
            let flags: CellFlags = (0..points.len()).map(|i| i + 3 >= points.len()).collect();
            println!("Bounded cells: {} of {}", count_bounded(&flags), flags.len());
        }
        Err(e) => {
            eprintln!("Failed to set up spiral: {}", e);
            eprintln!("Please ensure num_points ({}) is at least 2 and both angles are non-negative.", num_points);
        }
    }
}
