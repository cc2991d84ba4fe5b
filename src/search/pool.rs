//! Fixed-width worker pool
//!
//! Runs independent units of work on dedicated OS threads. The submitting
//! thread owns the pool: it blocks in [`WorkerPool::submit`] while every worker
//! is busy, and completions are handed to the callback on that same thread,
//! one at a time, inside `submit` and [`WorkerPool::drain`].
//!
//! A panic inside a unit is caught and delivered as a [`UnitFailure`] for that
//! unit; the worker keeps serving and the pool stays usable. If a worker thread
//! is lost anyway, waiting for a completion fails with
//! [`PoolError::Disconnected`] rather than blocking forever.

use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use thiserror::Error;
use tracing::{debug, warn};

/// A unit of work that panicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFailure<I> {
    pub input: I,
    pub message: String,
}

/// Outcome of one unit of work
pub type Completion<I, O> = Result<O, UnitFailure<I>>;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("worker pool width must be at least 1")]
    ZeroWidth,
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("worker pool disconnected with {pending} unit(s) in flight")]
    Disconnected { pending: usize },
    #[error("{0} worker thread(s) terminated abnormally")]
    WorkerLost(usize),
}

/// A pool of `width` worker threads delivering completions to `on_complete`
pub struct WorkerPool<I, O, F> {
    jobs: Option<Sender<I>>,
    completions: Receiver<Completion<I, O>>,
    workers: Vec<JoinHandle<()>>,
    on_complete: F,
    in_flight: usize,
    width: usize,
}

impl<I, O, F> WorkerPool<I, O, F>
where
    I: Send + 'static,
    O: Send + 'static,
    F: FnMut(Completion<I, O>),
{
    /// Start `width` workers running `work`
    ///
    /// Each worker owns a handle to `work` and receives inputs only through the
    /// pool, so any data `work` captures must be immutable (e.g. behind an `Arc`).
    ///
    /// # Errors
    /// Returns `PoolError::ZeroWidth` for `width == 0` or `PoolError::Spawn`
    /// if a thread cannot be created.
    ///
    /// # Examples
    /// ```
    /// use wordle_best_guess::search::{Completion, WorkerPool};
    ///
    /// let mut total = 0;
    /// let mut pool = WorkerPool::new(4, |x: &u64| x * x, |done: Completion<u64, u64>| {
    ///     total += done.unwrap();
    /// })
    /// .unwrap();
    ///
    /// for x in 1..=10 {
    ///     pool.submit(x).unwrap();
    /// }
    /// pool.drain().unwrap();
    /// assert_eq!(total, 385);
    /// ```
    pub fn new<W>(width: usize, work: W, on_complete: F) -> Result<Self, PoolError>
    where
        W: Fn(&I) -> O + Send + Sync + 'static,
    {
        if width == 0 {
            return Err(PoolError::ZeroWidth);
        }

        let (job_tx, job_rx) = bounded::<I>(width);
        let (done_tx, done_rx) = unbounded::<Completion<I, O>>();
        let work = Arc::new(work);

        let mut workers = Vec::with_capacity(width);
        for id in 0..width {
            let jobs = job_rx.clone();
            let done = done_tx.clone();
            let work = Arc::clone(&work);

            let handle = thread::Builder::new()
                .name(format!("pool-worker-{id}"))
                .spawn(move || run_worker(work.as_ref(), &jobs, &done))?;
            workers.push(handle);
        }

        debug!(width, "worker pool started");

        Ok(Self {
            jobs: Some(job_tx),
            completions: done_rx,
            workers,
            on_complete,
            in_flight: 0,
            width,
        })
    }

    /// Number of worker threads
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Units submitted whose completion has not been delivered yet
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Hand one unit to the pool
    ///
    /// Blocks while `width` units are in flight, delivering completions as they
    /// arrive, then delivers any further completions that are already waiting.
    ///
    /// # Errors
    /// Returns `PoolError::Disconnected` if the workers are gone.
    pub fn submit(&mut self, input: I) -> Result<(), PoolError> {
        while self.in_flight >= self.width {
            self.deliver_next()?;
        }

        let pending = self.in_flight;
        self.jobs
            .as_ref()
            .ok_or(PoolError::Disconnected { pending })?
            .send(input)
            .map_err(|_| PoolError::Disconnected { pending })?;
        self.in_flight += 1;

        while let Ok(completion) = self.completions.try_recv() {
            self.deliver(completion);
        }

        Ok(())
    }

    /// Wait for every submitted unit, deliver its completion and stop the workers
    ///
    /// # Errors
    /// Returns `PoolError::Disconnected` if workers vanished with units in
    /// flight, or `PoolError::WorkerLost` if a worker thread did not exit cleanly.
    pub fn drain(mut self) -> Result<(), PoolError> {
        // Closing the job channel lets idle workers exit once the queue is empty
        self.jobs = None;

        while self.in_flight > 0 {
            self.deliver_next()?;
        }

        let lost = self
            .workers
            .drain(..)
            .map(JoinHandle::join)
            .filter(Result::is_err)
            .count();

        debug!(width = self.width, "worker pool drained");

        if lost > 0 {
            return Err(PoolError::WorkerLost(lost));
        }
        Ok(())
    }

    fn deliver_next(&mut self) -> Result<(), PoolError> {
        let completion = self
            .completions
            .recv()
            .map_err(|_| PoolError::Disconnected {
                pending: self.in_flight,
            })?;
        self.deliver(completion);
        Ok(())
    }

    fn deliver(&mut self, completion: Completion<I, O>) {
        self.in_flight -= 1;
        (self.on_complete)(completion);
    }
}

impl<I, O, F> Drop for WorkerPool<I, O, F> {
    fn drop(&mut self) {
        // Undelivered completions are discarded; workers finish their current unit
        self.jobs = None;
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}

fn run_worker<I, O, W>(work: &W, jobs: &Receiver<I>, done: &Sender<Completion<I, O>>)
where
    W: Fn(&I) -> O,
{
    for input in jobs {
        let completion = match panic::catch_unwind(AssertUnwindSafe(|| work(&input))) {
            Ok(output) => Ok(output),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!(%message, "unit of work panicked");
                Err(UnitFailure { input, message })
            }
        };

        if done.send(completion).is_err() {
            // The pool was dropped without draining
            break;
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
