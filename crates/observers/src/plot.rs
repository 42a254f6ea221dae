//! Plot window for population trajectories.
//!
//! A [`PlotObserver`] collects named `(time, population)` traces, either from
//! finished [`Trajectory`] values or live from Euler events, and renders them
//! in a blocking egui window.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use fishery_core::{Observer, Trajectory};
use fishery_solvers::euler::{self, Method};

/// Window settings for [`PlotObserver::show`].
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Harvest sweep").axes("Time (weeks)", "Population").legend())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    axes: Option<(String, String)>,
}

impl ShowConfig {
    /// Creates a config with no title, legend, or axis labels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Shows a legend naming each trace.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Labels the x and y axes.
    #[must_use]
    pub fn axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.axes = Some((x.into(), y.into()));
        self
    }
}

/// A named series of `[time, population]` points.
#[derive(Debug, Clone, PartialEq)]
struct Trace {
    name: String,
    points: Vec<[f64; 2]>,
}

/// Collects `N` population traces for display.
///
/// Traces are filled by:
///
/// - [`record_trajectory`][PlotObserver::record_trajectory] with finished
///   runs, e.g. the results of a sweep;
/// - [`record`][PlotObserver::record] for one point across several traces;
/// - passing `&mut PlotObserver<2>` as the observer of a forward and a
///   backward run, which routes each [`euler::Event`] by its method.
///
/// Only computed samples are recorded, so a collapsed run ends at its final
/// sample instead of trailing along zero.
#[derive(Debug, Clone)]
pub struct PlotObserver<const N: usize> {
    traces: [Trace; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates an observer with one empty trace per name.
    pub fn new(names: [impl Into<String>; N]) -> Self {
        Self {
            traces: names.map(|name| Trace {
                name: name.into(),
                points: Vec::new(),
            }),
        }
    }

    /// Records a point at time `x` on every trace with a value.
    pub fn record(&mut self, x: f64, values: [Option<f64>; N]) {
        for (trace, y) in self.traces.iter_mut().zip(values) {
            if let Some(y) = y {
                trace.points.push([x, y]);
            }
        }
    }

    /// Appends every computed sample of `trajectory` to trace `trace`.
    ///
    /// # Panics
    ///
    /// Panics if `trace >= N`.
    pub fn record_trajectory(&mut self, trace: usize, trajectory: &Trajectory) {
        self.traces[trace]
            .points
            .extend(trajectory.iter().map(|(t, p)| [t, p]));
    }

    /// Opens the plot window and blocks until it is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let title = config.title.clone().unwrap_or_else(|| "Population".into());
        let app = PlotApp {
            traces: self.traces.into(),
            config,
        };

        eframe::run_native(
            &title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(app))),
        )
    }
}

/// Forward events go to trace 0 and backward events to trace 1.
impl<A> Observer<euler::Event, A> for &mut PlotObserver<2> {
    fn observe(&mut self, event: &euler::Event) -> Option<A> {
        let y = Some(event.sample.population);
        let values = match event.method {
            Method::Forward => [y, None],
            Method::Backward => [None, y],
        };
        self.record(event.sample.time, values);
        None
    }
}

struct PlotApp {
    traces: Vec<Trace>,
    config: ShowConfig,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("population");
            if self.config.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some((x, y)) = &self.config.axes {
                plot = plot.x_axis_label(x.clone()).y_axis_label(y.clone());
            }

            plot.show(ui, |plot_ui| {
                for trace in &self.traces {
                    let points: PlotPoints = trace.points.iter().copied().collect();
                    plot_ui.line(Line::new(points).name(&trace.name));
                }
            });
        });
    }
}
