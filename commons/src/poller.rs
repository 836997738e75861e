use crate::process::Step;
use async_trait::async_trait;
use log::trace;
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval, Interval, MissedTickBehavior};

/// Calls `callback` at a fixed rate when run as an active process.
///
/// The first tick fires as soon as the process starts. The callback is awaited
/// before the next tick is taken, so a slow callback delays later ticks instead
/// of stacking them up.
pub struct Poller<F> {
    name: &'static str,
    period: Duration,
    callback: F,
    ticker: Option<Interval>,
}

impl<F, Fut> Poller<F>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    pub fn new(name: &'static str, period: Duration, callback: F) -> Poller<F> {
        Poller {
            name,
            period,
            callback,
            ticker: None,
        }
    }
}

#[async_trait]
impl<F, Fut> Step for Poller<F>
where
    F: FnMut() -> Fut + Send,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn step(&mut self) {
        let period = self.period;
        let ticker = self.ticker.get_or_insert_with(|| {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker
        });
        ticker.tick().await;
        trace!("{} tick", self.name);
        (self.callback)().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::fn_sender::fn_channel;
    use crate::process::Process;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_poller(
        period: Duration,
    ) -> (
        Poller<impl FnMut() -> futures::future::Ready<()> + Send>,
        Arc<AtomicUsize>,
    ) {
        let count = Arc::new(AtomicUsize::new(0));
        let count_in_callback = count.clone();
        let poller = Poller::new("counter", period, move || {
            count_in_callback.fetch_add(1, Ordering::Relaxed);
            futures::future::ready(())
        });
        (poller, count)
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_is_immediate() {
        // Given
        let (mut poller, count) = counting_poller(Duration::from_secs(5));

        // When
        poller.step().await;

        // Then
        assert_eq!(count.load(Ordering::Relaxed), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_at_fixed_period() {
        // Given
        let (mut poller, count) = counting_poller(Duration::from_secs(5));
        let start = tokio::time::Instant::now();

        // When
        poller.step().await;
        poller.step().await;
        poller.step().await;

        // Then
        assert_eq!(count.load(Ordering::Relaxed), 3);
        assert_eq!(start.elapsed(), Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn stops_ticking_when_paused() {
        // Given
        let (poller, count) = counting_poller(Duration::from_secs(5));
        let (_tx, rx) = fn_channel();
        let mut process = Process::new(poller, rx);

        // When
        process.run_active().await;
        tokio::time::sleep(Duration::from_secs(12)).await;
        process.pause().await;
        let ticks_when_paused = count.load(Ordering::Relaxed);
        tokio::time::sleep(Duration::from_secs(60)).await;

        // Then
        assert_eq!(ticks_when_paused, 3);
        assert_eq!(count.load(Ordering::Relaxed), 3);
    }
}
