//! Progress reporting.
//!
//! A search calls its [`ProgressSink`] synchronously at a fixed, sparse
//! schedule: iterations 1, 2, 10 and the last one. What the sink does with
//! the message (render it, log it, forward it, drop it) is up to the caller.

use std::sync::mpsc::Sender;

/// Receives progress messages from a running search.
pub trait ProgressSink {
    /// Called with the 1-based iteration number and a status line.
    fn on_iteration(&mut self, iteration: usize, message: &str);
}

impl<F> ProgressSink for F
where
    F: FnMut(usize, &str),
{
    fn on_iteration(&mut self, iteration: usize, message: &str) {
        self(iteration, message)
    }
}

/// Returns `true` if `iteration` is one of the reporting points.
///
/// ```
/// use u_tabu::progress::is_report_iteration;
///
/// let reported: Vec<usize> = (1..=20).filter(|&i| is_report_iteration(i, 20)).collect();
/// assert_eq!(reported, vec![1, 2, 10, 20]);
/// ```
pub fn is_report_iteration(iteration: usize, max_iterations: usize) -> bool {
    matches!(iteration, 1 | 2 | 10) || iteration == max_iterations
}

/// A sink that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn on_iteration(&mut self, _iteration: usize, _message: &str) {}
}

/// A sink that keeps every message in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    /// Received `(iteration, message)` pairs in arrival order.
    pub events: Vec<(usize, String)>,
}

impl RecordingSink {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iteration numbers received so far.
    pub fn iterations(&self) -> Vec<usize> {
        self.events.iter().map(|(i, _)| *i).collect()
    }
}

impl ProgressSink for RecordingSink {
    fn on_iteration(&mut self, iteration: usize, message: &str) {
        self.events.push((iteration, message.to_owned()));
    }
}

/// A progress message sent over a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEvent {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Status line.
    pub message: String,
}

/// Forwards progress messages to a reporting task on another thread.
///
/// Messages arrive in the order the search produced them. If the receiver
/// has hung up the message is dropped and the search keeps going.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: Sender<ProgressEvent>,
}

impl ChannelSink {
    /// Wraps the sending half of a channel.
    pub fn new(sender: Sender<ProgressEvent>) -> Self {
        Self { sender }
    }
}

impl ProgressSink for ChannelSink {
    fn on_iteration(&mut self, iteration: usize, message: &str) {
        let event = ProgressEvent {
            iteration,
            message: message.to_owned(),
        };
        if self.sender.send(event).is_err() {
            tracing::trace!(iteration, "progress receiver dropped");
        }
    }
}
