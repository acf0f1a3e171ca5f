//! Repositories merging the local stores with the remote clients.

mod city_repository;
mod weather_repository;

pub use city_repository::CityRepository;
pub use weather_repository::WeatherRepository;

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;
use tokio::sync::mpsc;
use tokio_util::task::AbortOnDropHandle;

use crate::types::progress::Progress;

/// A progressive result sequence backed by a worker task.
///
/// Dropping the stream aborts the worker, cancelling any in-flight remote
/// request. The channel holds a single value, so the worker only runs ahead
/// of the consumer by one step.
pub struct ProgressStream<V> {
    rx: mpsc::Receiver<Progress<V>>,
    _worker: Option<AbortOnDropHandle<()>>,
}

impl<V> ProgressStream<V> {
    pub(crate) fn with_worker(
        rx: mpsc::Receiver<Progress<V>>,
        worker: AbortOnDropHandle<()>,
    ) -> Self {
        Self {
            rx,
            _worker: Some(worker),
        }
    }

    /// A sequence that is already complete, e.g. the lone `Initial` of a
    /// blank query.
    pub(crate) fn finished(rx: mpsc::Receiver<Progress<V>>) -> Self {
        Self { rx, _worker: None }
    }

    /// The next step, or `None` once the sequence is exhausted.
    pub async fn next(&mut self) -> Option<Progress<V>> {
        self.rx.recv().await
    }
}

impl<V> Stream for ProgressStream<V> {
    type Item = Progress<V>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
