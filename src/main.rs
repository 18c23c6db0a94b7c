mod config;

use anyhow::Context;
use spiral_core::{CellFlags, LimitPair, PointSequence, calculate_limits, count_bounded, generate_spiral};
use tracing::{debug, info};
use tracing_subscriber::{self, EnvFilter};

use crate::config::RunnerSettings;

struct RunSummary {
    points: PointSequence,
    limits: LimitPair,
    bounded_cells: usize,
}

fn run(settings: &RunnerSettings) -> anyhow::Result<RunSummary> {
    let spiral = &settings.spiral;
    let points = generate_spiral(spiral.angle_start, spiral.angle_end, spiral.num_points)
        .with_context(|| format!("failed to generate spiral from {:?}", spiral))?;
    info!(rows = points.len(), columns = ?PointSequence::COLUMN_NAMES, "Generated spiral points");
    if let (Some(first), Some(last)) = (points.as_slice().first(), points.as_slice().last()) {
        debug!(%first, %last, "Spiral endpoints");
    }

    let limits = calculate_limits(&points, settings.limits.padding)
        .with_context(|| format!("failed to calculate limits with padding {}", settings.limits.padding))?;
    info!(lower = limits.lower(), upper = limits.upper(), "Calculated plot limits");

    let flags = CellFlags::new(settings.cells.has_infinite.clone());
    let bounded_cells = count_bounded(&flags);
    info!(bounded = bounded_cells, total = flags.len(), "Counted bounded cells");

    Ok(RunSummary {
        points,
        limits,
        bounded_cells,
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Spiral helpers demo started.");
    let settings = config::load_settings().context("failed to load runner settings")?;
    let summary = run(&settings)?;

    info!(
        points = summary.points.len(),
        limits = %summary.limits,
        bounded_cells = summary.bounded_cells,
        "Run complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CellSettings, LimitSettings, SpiralSettings};

    #[test]
    fn test_run_with_defaults() {
        let settings = RunnerSettings {
            cells: CellSettings {
                has_infinite: vec![false, false, true],
            },
            ..RunnerSettings::default()
        };
        let summary = run(&settings).unwrap();
        assert_eq!(summary.points.len(), 500);
        assert_eq!(summary.limits.lower(), -summary.limits.upper());
        assert!(summary.points.iter().all(|p| summary.limits.contains(*p)));
        assert_eq!(summary.bounded_cells, 2);
    }

    #[test]
    fn test_run_reports_bad_spiral() {
        let settings = RunnerSettings {
            spiral: SpiralSettings {
                num_points: 1,
                ..SpiralSettings::default()
            },
            ..RunnerSettings::default()
        };
        let err = run(&settings).err().unwrap();
        assert!(err.to_string().starts_with("failed to generate spiral"));
    }

    #[test]
    fn test_run_reports_bad_padding() {
        let settings = RunnerSettings {
            limits: LimitSettings { padding: -1.0 },
            ..RunnerSettings::default()
        };
        let err = run(&settings).err().unwrap();
        assert!(err.to_string().contains("padding -1"));
    }
}
