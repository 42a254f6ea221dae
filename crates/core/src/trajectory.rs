//! Population trajectories produced by a single integration run.
//!
//! A [`Trajectory`] is a truncating sequence: samples stop at the first
//! non-positive population, so there are never placeholder entries to skip.
//! Solvers build one with a [`TrajectoryBuilder`], which owns the time grid
//! and guarantees `time[n] == n·dt`.

use crate::SimulationConfig;

/// A single `(time, population)` point on a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Time in weeks.
    pub time: f64,

    /// Population at `time`.
    ///
    /// The final sample of a collapsed run may be negative.
    pub population: f64,
}

/// Indicates how an integration run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Ran the full horizon without collapsing.
    Complete,

    /// The population reached zero or below before the horizon ended.
    Collapsed,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The samples computed by one integration run.
///
/// Always holds at least the initial sample. The final sample's index is
/// available through [`last_index`](Trajectory::last_index).
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: Vec<Sample>,
    status: Status,
}

impl Trajectory {
    /// Returns all computed samples in time order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the sample at index `n`, if it was computed.
    #[must_use]
    pub fn get(&self, n: usize) -> Option<Sample> {
        self.samples.get(n).copied()
    }

    /// Returns the number of computed samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no samples were computed.
    ///
    /// Trajectories built by the solvers always contain the initial sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the index of the last computed sample.
    ///
    /// Consumers that copy samples into a fixed-size buffer must treat entries
    /// past this index as absent.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }

    /// Returns how the run terminated.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the index of the first non-positive sample, if the run collapsed.
    #[must_use]
    pub fn collapse_index(&self) -> Option<usize> {
        (self.status == Status::Collapsed).then(|| self.last_index())
    }

    /// Returns the population at time zero.
    #[must_use]
    pub fn initial_population(&self) -> Option<f64> {
        self.samples.first().map(|s| s.population)
    }

    /// Returns the last computed population.
    #[must_use]
    pub fn final_population(&self) -> Option<f64> {
        self.samples.last().map(|s| s.population)
    }

    /// Returns the sample times in order.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.time)
    }

    /// Returns the sample populations in order.
    pub fn populations(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.population)
    }

    /// Returns `(time, population)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples.iter().map(|s| (s.time, s.population))
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Incrementally builds a [`Trajectory`] on a fixed time grid.
///
/// The builder starts with the initial population at time zero. Each call to
/// [`push`](TrajectoryBuilder::push) appends the next sample at `n·dt`.
#[derive(Debug, Clone)]
pub struct TrajectoryBuilder {
    samples: Vec<Sample>,
    step_size: f64,
}

impl TrajectoryBuilder {
    /// Starts a trajectory at the config's initial population.
    #[must_use]
    pub fn new(config: &SimulationConfig) -> Self {
        let mut samples = Vec::with_capacity(config.step_count());
        samples.push(Sample {
            time: 0.0,
            population: config.initial_population(),
        });

        Self {
            samples,
            step_size: config.step_size(),
        }
    }

    /// Appends the next population and returns the recorded sample.
    #[allow(clippy::cast_precision_loss)]
    pub fn push(&mut self, population: f64) -> Sample {
        let sample = Sample {
            time: self.samples.len() as f64 * self.step_size,
            population,
        };
        self.samples.push(sample);
        sample
    }

    /// Returns the most recently recorded sample.
    #[must_use]
    pub fn last(&self) -> Sample {
        // The initial sample is pushed on construction.
        self.samples[self.samples.len() - 1]
    }

    /// Returns the index of the most recently recorded sample.
    #[must_use]
    pub fn step(&self) -> usize {
        self.samples.len() - 1
    }

    /// Completes the trajectory with the given terminal status.
    #[must_use]
    pub fn finish(self, status: Status) -> Trajectory {
        Trajectory {
            samples: self.samples,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn config(dt: f64, horizon: f64, p0: f64) -> SimulationConfig {
        SimulationConfig::new(dt, horizon, p0).unwrap()
    }

    #[test]
    fn builder_starts_at_initial_population() {
        let builder = TrajectoryBuilder::new(&config(0.5, 10.0, 42.0));
        assert_eq!(builder.step(), 0);
        assert_eq!(
            builder.last(),
            Sample {
                time: 0.0,
                population: 42.0
            }
        );
    }

    #[test]
    fn builder_places_samples_on_grid() {
        let dt = 1.0 / 7.0;
        let mut builder = TrajectoryBuilder::new(&config(dt, 10.0, 1.0));
        for n in 1..=5 {
            let sample = builder.push(f64::from(n));
            assert_relative_eq!(sample.time, f64::from(n) * dt);
        }
        assert_eq!(builder.step(), 5);

        let trajectory = builder.finish(Status::Complete);
        assert_eq!(trajectory.len(), 6);
        assert_eq!(trajectory.last_index(), 5);
        for (n, sample) in trajectory.samples().iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected = n as f64 * dt;
            assert_eq!(sample.time, expected);
        }
    }

    #[test]
    fn collapse_index_only_for_collapsed_runs() {
        let mut builder = TrajectoryBuilder::new(&config(1.0, 10.0, 5.0));
        builder.push(2.0);
        builder.push(-1.0);
        let collapsed = builder.clone().finish(Status::Collapsed);
        let stopped = builder.finish(Status::StoppedByObserver);

        assert_eq!(collapsed.collapse_index(), Some(2));
        assert_eq!(collapsed.final_population(), Some(-1.0));
        assert_eq!(stopped.collapse_index(), None);
    }

    #[test]
    fn accessors_agree() {
        let mut builder = TrajectoryBuilder::new(&config(2.0, 10.0, 3.0));
        builder.push(4.0);
        builder.push(5.0);
        let trajectory = builder.finish(Status::Complete);

        assert_eq!(trajectory.initial_population(), Some(3.0));
        assert_eq!(trajectory.times().collect::<Vec<_>>(), vec![0.0, 2.0, 4.0]);
        assert_eq!(
            trajectory.populations().collect::<Vec<_>>(),
            vec![3.0, 4.0, 5.0]
        );
        assert_eq!(
            trajectory.iter().collect::<Vec<_>>(),
            vec![(0.0, 3.0), (2.0, 4.0), (4.0, 5.0)]
        );
        assert_eq!(trajectory.get(1).map(|s| s.population), Some(4.0));
        assert_eq!(trajectory.get(3), None);
        assert_eq!((&trajectory).into_iter().count(), 3);
        assert!(!trajectory.is_empty());
    }
}
