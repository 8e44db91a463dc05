use super::engine::{Frame, Scrambler};
use super::random::RandomSource;
use std::iter::FusedIterator;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Waits between animation ticks.
pub(crate) trait Pacer {
    fn pause(&mut self, tick: Duration);
}

/// Blocks the current thread for the whole tick.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, tick: Duration) {
        thread::sleep(tick);
    }
}

/// Cooperative cancellation for a running [`Scramble`].
///
/// Checked before and after every pause, never in the middle of one.
#[derive(Clone, Debug, Default)]
pub(crate) struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[cfg(test)]
    pub(crate) fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The paced sequence of frames produced while a phrase unscrambles.
///
/// Every item is preceded by one pause of `tick`. The sequence ends once the frame matches the
/// phrase or the cancel token fires, whichever comes first.
pub(crate) struct Scramble<R, P = SleepPacer> {
    scrambler: Scrambler<R>,
    pacer: P,
    tick: Duration,
    cancel: CancelToken,
}

impl<R: RandomSource> Scramble<R> {
    pub(crate) fn new(scrambler: Scrambler<R>, tick: Duration) -> Self {
        Self { scrambler, pacer: SleepPacer, tick, cancel: CancelToken::default() }
    }
}

impl<R: RandomSource, P: Pacer> Scramble<R, P> {
    /// Replace the pacer used between ticks.
    #[cfg(test)]
    pub(crate) fn with_pacer<Q: Pacer>(self, pacer: Q) -> Scramble<R, Q> {
        let Self { scrambler, tick, cancel, .. } = self;
        Scramble { scrambler, pacer, tick, cancel }
    }

    #[cfg(test)]
    pub(crate) fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub(crate) fn scrambler(&self) -> &Scrambler<R> {
        &self.scrambler
    }
}

impl<R: RandomSource, P: Pacer> Iterator for Scramble<R, P> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.scrambler.is_done() || self.cancel.is_cancelled() {
            return None;
        }
        self.pacer.pause(self.tick);
        if self.cancel.is_cancelled() {
            return None;
        }
        self.scrambler.step()
    }
}

impl<R: RandomSource, P: Pacer> FusedIterator for Scramble<R, P> {}
