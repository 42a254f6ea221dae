/// Control actions an observer may return from an Euler run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop integrating and return the trajectory computed so far.
    StopEarly,
}
