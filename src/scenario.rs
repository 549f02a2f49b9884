// Copyright 2026 the Shapegen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Randomized scenarios: many sampled shapes written to one text file.

use core::fmt;
use core::str::FromStr;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::{Circle, Error, Line, ParamSample, Point, RandomRange, Vec2};

/// Default number of shapes drawn per scenario.
pub const DEFAULT_COUNT: usize = 1000;

/// Default number of samples taken along each shape.
pub const DEFAULT_RESOLUTION: usize = 1000;

/// A named generation mode, producing one output file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Random line segments.
    #[default]
    Lines,
    /// Random circles.
    Circles,
}

impl Scenario {
    /// Every scenario, in a stable order.
    pub const ALL: [Scenario; 2] = [Scenario::Lines, Scenario::Circles];

    /// The name used to select this scenario on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Scenario::Lines => "lines",
            Scenario::Circles => "circles",
        }
    }

    /// The file the scenario writes its samples to.
    pub fn file_name(self) -> &'static str {
        match self {
            Scenario::Lines => "lines.txt",
            Scenario::Circles => "circles.txt",
        }
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| Error::UnknownMode(s.to_owned()))
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape counts and the ranges random shape parameters are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioConfig {
    /// Number of shapes per scenario.
    pub count: usize,
    /// Number of samples per shape.
    pub resolution: usize,
    /// Range of circle centers and line start points along x.
    pub x_range: RandomRange,
    /// Range of circle centers and line start points along y.
    pub y_range: RandomRange,
    /// Range of circle radii. The lower bound must be positive.
    pub radius_range: RandomRange,
    /// Range of the per-axis offset from a line's start to its end.
    pub offset_range: RandomRange,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            count: DEFAULT_COUNT,
            resolution: DEFAULT_RESOLUTION,
            x_range: RandomRange::from_bounds(-1000.0, 1000.0),
            y_range: RandomRange::from_bounds(-1000.0, 1000.0),
            radius_range: RandomRange::from_bounds(5.0, 10.0),
            offset_range: RandomRange::from_bounds(-100.0, 100.0),
        }
    }
}

impl ScenarioConfig {
    /// Set the number of shapes.
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the number of samples per shape.
    #[must_use]
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Check every range, and that drawn radii are always positive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] for a malformed range and
    /// [`Error::InvalidRadius`] when the radius range reaches zero or below.
    pub fn validate(&self) -> Result<(), Error> {
        for range in [
            &self.x_range,
            &self.y_range,
            &self.radius_range,
            &self.offset_range,
        ] {
            range.validate()?;
        }
        if self.radius_range.lo() <= 0.0 {
            return Err(Error::InvalidRadius(self.radius_range.lo()));
        }
        Ok(())
    }

    /// Number of sample rows one scenario run writes.
    pub fn total_samples(&self) -> usize {
        self.count.saturating_mul(self.resolution)
    }
}

/// What a scenario run wrote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScenarioSummary {
    /// The scenario that ran.
    pub scenario: Scenario,
    /// Number of shapes drawn.
    pub shapes: usize,
    /// Number of sample rows written.
    pub samples: usize,
}

/// Draws random shapes and writes their samples.
///
/// The random source is owned by the runner, so a seeded generator gives
/// byte-identical output across runs.
#[derive(Debug)]
pub struct ScenarioRunner<R> {
    rng: R,
    config: ScenarioConfig,
}

impl ScenarioRunner<ChaCha8Rng> {
    /// A runner driven by a ChaCha8 generator seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`ScenarioConfig::validate`].
    pub fn seeded(seed: u64, config: ScenarioConfig) -> Result<Self, Error> {
        ScenarioRunner::new(ChaCha8Rng::seed_from_u64(seed), config)
    }
}

impl<R: Rng> ScenarioRunner<R> {
    /// A runner drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`ScenarioConfig::validate`].
    pub fn new(rng: R, config: ScenarioConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(ScenarioRunner { rng, config })
    }

    /// The configuration this runner draws from.
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Draw a circle: center x, then center y, then radius.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRadius`] if the drawn radius is not positive.
    pub fn random_circle(&mut self) -> Result<Circle, Error> {
        let x = self.config.x_range.sample(&mut self.rng);
        let y = self.config.y_range.sample(&mut self.rng);
        let radius = self.config.radius_range.sample(&mut self.rng);
        Circle::checked((x, y), radius)
    }

    /// Draw a line: start x, start y, then the x and y offsets to its end.
    pub fn random_line(&mut self) -> Line {
        let x = self.config.x_range.sample(&mut self.rng);
        let y = self.config.y_range.sample(&mut self.rng);
        let dx = self.config.offset_range.sample(&mut self.rng);
        let dy = self.config.offset_range.sample(&mut self.rng);
        Line::from_offset((x, y), Vec2::new(dx, dy))
    }

    /// Run `scenario`, writing one `x y` row per sample to `out`.
    ///
    /// Shapes are written back to back with no separator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing fails.
    pub fn write_scenario<W: Write + ?Sized>(
        &mut self,
        scenario: Scenario,
        out: &mut W,
    ) -> Result<ScenarioSummary, Error> {
        let resolution = self.config.resolution;
        let mut samples = 0;
        for shape in 0..self.config.count {
            samples += match scenario {
                Scenario::Circles => {
                    let circle = self.random_circle()?;
                    debug!(shape, ?circle, "sampling circle");
                    write_samples(out, circle.samples(resolution))?
                }
                Scenario::Lines => {
                    let line = self.random_line();
                    debug!(shape, ?line, "sampling line");
                    write_samples(out, line.samples(resolution))?
                }
            };
        }
        Ok(ScenarioSummary {
            scenario,
            shapes: self.config.count,
            samples,
        })
    }

    /// Run `scenario` into its file under `dir`, replacing any existing file.
    ///
    /// A file left incomplete by a write failure is removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Output`] if the file cannot be created or written.
    pub fn run_in(&mut self, scenario: Scenario, dir: impl AsRef<Path>) -> Result<PathBuf, Error> {
        let path = dir.as_ref().join(scenario.file_name());
        let summary = write_to_path(&path, |out| self.write_scenario(scenario, out))?;
        info!(
            %scenario,
            shapes = summary.shapes,
            samples = summary.samples,
            path = %path.display(),
            "scenario written"
        );
        Ok(path)
    }
}

/// Write each point as an `x y` row, returning the number of rows.
///
/// Coordinates use the shortest representation that parses back to the same
/// `f64`.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn write_samples<W: Write + ?Sized>(
    out: &mut W,
    samples: impl IntoIterator<Item = Point>,
) -> io::Result<usize> {
    let mut rows = 0;
    for p in samples {
        writeln!(out, "{} {}", p.x, p.y)?;
        rows += 1;
    }
    Ok(rows)
}

/// Create `path`, run `write` against a buffered handle and flush it.
///
/// On failure the partial file is deleted and the error is tagged with
/// `path`.
fn write_to_path<T>(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<File>) -> Result<T, Error>,
) -> Result<T, Error> {
    let output_error = |source| Error::Output {
        path: path.to_owned(),
        source,
    };
    let file = File::create(path).map_err(output_error)?;
    let mut out = BufWriter::new(file);
    let result = write(&mut out).and_then(|value| {
        out.flush()?;
        Ok(value)
    });
    match result {
        Ok(value) => Ok(value),
        Err(err) => {
            drop(out);
            match fs::remove_file(path) {
                Ok(()) => warn!(path = %path.display(), "removed partially written output"),
                Err(remove_err) => {
                    warn!(path = %path.display(), error = %remove_err, "could not remove partial output");
                }
            }
            Err(match err {
                Error::Io(source) => output_error(source),
                other => other,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn small_config() -> ScenarioConfig {
        ScenarioConfig::default()
            .with_count(20)
            .with_resolution(50)
    }

    fn render(scenario: Scenario, seed: u64, config: ScenarioConfig) -> Vec<u8> {
        let mut runner = ScenarioRunner::seeded(seed, config).unwrap();
        let mut out = Vec::new();
        runner.write_scenario(scenario, &mut out).unwrap();
        out
    }

    fn parse_rows(bytes: &[u8]) -> Vec<Point> {
        std::str::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| {
                let mut fields = line.split(' ');
                let x = fields.next().unwrap().parse().unwrap();
                let y = fields.next().unwrap().parse().unwrap();
                assert!(fields.next().is_none(), "extra field in {line:?}");
                Point::new(x, y)
            })
            .collect()
    }

    #[test]
    fn parse_scenario() {
        assert_eq!("lines".parse::<Scenario>().unwrap(), Scenario::Lines);
        assert_eq!("circles".parse::<Scenario>().unwrap(), Scenario::Circles);
        let err = "triangles".parse::<Scenario>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown mode: triangles");
        assert!("Lines".parse::<Scenario>().is_err());
        assert_eq!(Scenario::default(), Scenario::Lines);
    }

    #[test]
    fn file_names() {
        assert_eq!(Scenario::Lines.file_name(), "lines.txt");
        assert_eq!(Scenario::Circles.file_name(), "circles.txt");
        assert_eq!(Scenario::Circles.to_string(), "circles");
    }

    #[test]
    fn default_config() {
        let config = ScenarioConfig::default();
        assert_eq!(config.count, 1000);
        assert_eq!(config.resolution, 1000);
        assert_eq!((config.x_range.lo(), config.x_range.hi()), (-1000.0, 1000.0));
        assert_eq!((config.y_range.lo(), config.y_range.hi()), (-1000.0, 1000.0));
        assert_eq!((config.radius_range.lo(), config.radius_range.hi()), (5.0, 10.0));
        assert_eq!((config.offset_range.lo(), config.offset_range.hi()), (-100.0, 100.0));
        assert!(config.validate().is_ok());
        assert_eq!(config.total_samples(), 1_000_000);
    }

    #[test]
    fn rejects_non_positive_radius_range() {
        let config = ScenarioConfig {
            radius_range: RandomRange::new(0.0, 3.0).unwrap(),
            ..ScenarioConfig::default()
        };
        assert!(matches!(
            ScenarioRunner::seeded(1, config),
            Err(Error::InvalidRadius(r)) if r == 0.0
        ));
    }

    #[test]
    fn rejects_range_too_wide_to_sample() {
        let config = ScenarioConfig {
            offset_range: RandomRange::from_bounds(-f64::MAX, f64::MAX),
            ..small_config()
        };
        assert!(matches!(
            ScenarioRunner::seeded(1, config),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn rejects_malformed_range() {
        let config = ScenarioConfig {
            x_range: RandomRange::from_bounds(10.0, -10.0),
            ..ScenarioConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn fixed_seed_is_deterministic() {
        for scenario in Scenario::ALL {
            let a = render(scenario, 1234, small_config());
            let b = render(scenario, 1234, small_config());
            assert_eq!(a, b, "{scenario} output differs under the same seed");
            let c = render(scenario, 4321, small_config());
            assert_ne!(a, c, "{scenario} output ignores the seed");
        }
    }

    #[test]
    fn row_count_is_count_times_resolution() {
        let config = small_config();
        for scenario in Scenario::ALL {
            let mut runner = ScenarioRunner::seeded(9, config).unwrap();
            let mut out = Vec::new();
            let summary = runner.write_scenario(scenario, &mut out).unwrap();
            assert_eq!(summary.shapes, 20);
            assert_eq!(summary.samples, 1000);
            assert_eq!(parse_rows(&out).len(), config.total_samples());
        }
    }

    #[test]
    fn zero_resolution_writes_nothing() {
        let config = small_config().with_resolution(0);
        let out = render(Scenario::Circles, 3, config);
        assert!(out.is_empty());
    }

    #[test]
    fn circle_rows_lie_on_drawn_circles() {
        let config = small_config();
        let points = parse_rows(&render(Scenario::Circles, 77, config));
        for chunk in points.chunks(config.resolution) {
            // Evenly spaced samples average to the center.
            let n = chunk.len() as f64;
            let center = Point::new(
                chunk.iter().map(|p| p.x).sum::<f64>() / n,
                chunk.iter().map(|p| p.y).sum::<f64>() / n,
            );
            assert!(config.x_range.contains(center.x.round()));
            assert!(config.y_range.contains(center.y.round()));
            let radius = chunk[0].distance(center);
            assert!((5.0 - 1e-6..=10.0 + 1e-6).contains(&radius), "radius {radius}");
            for p in chunk {
                assert!((p.distance(center) - radius).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn line_rows_lie_on_drawn_segments() {
        let config = small_config();
        let points = parse_rows(&render(Scenario::Lines, 78, config));
        for chunk in points.chunks(config.resolution) {
            let end = chunk[0];
            let step = chunk[1] - end;
            let start = end + step * config.resolution as f64;
            let offset = end - start;
            assert!(offset.x.abs() <= 100.0 + 1e-6 && offset.y.abs() <= 100.0 + 1e-6);
            for p in chunk {
                assert_ne!(*p, start);
                let off_line = (*p - start).cross(offset) / offset.hypot().max(1e-12);
                assert!(off_line.abs() < 1e-6, "{p:?} off segment");
            }
        }
    }

    #[test]
    fn rows_are_plain_x_y() {
        let mut out = Vec::new();
        let rows = write_samples(&mut out, [Point::new(1.5, -2.0), Point::new(0.1, 1e21)]).unwrap();
        assert_eq!(rows, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1.5 -2\n0.1 1000000000000000000000\n"
        );
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_surfaces() {
        let mut runner = ScenarioRunner::seeded(5, small_config()).unwrap();
        let err = runner
            .write_scenario(Scenario::Lines, &mut FailingWriter)
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn run_in_writes_reproducible_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config();

        let path = ScenarioRunner::seeded(11, config)
            .unwrap()
            .run_in(Scenario::Circles, dir.path())
            .unwrap();
        assert_eq!(path, dir.path().join("circles.txt"));
        let first = fs::read(&path).unwrap();
        assert_eq!(parse_rows(&first).len(), config.total_samples());

        ScenarioRunner::seeded(11, config)
            .unwrap()
            .run_in(Scenario::Circles, dir.path())
            .unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);
        assert_eq!(first, render(Scenario::Circles, 11, config));
    }

    #[test]
    fn run_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = ScenarioRunner::seeded(1, small_config())
            .unwrap()
            .run_in(Scenario::Lines, &missing)
            .unwrap_err();
        assert!(matches!(err, Error::Output { ref path, .. } if *path == missing.join("lines.txt")));
        assert!(!missing.exists());
    }

    #[test]
    fn partial_output_is_removed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.txt");
        let result: Result<(), Error> = write_to_path(&path, |out| {
            writeln!(out, "1 2")?;
            out.flush()?;
            Err(Error::Io(io::Error::other("disk full")))
        });
        assert!(matches!(result, Err(Error::Output { .. })));
        assert!(!path.exists());
    }
}
