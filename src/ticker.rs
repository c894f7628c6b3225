//! Cancellable repeating timer.
//!
//! Runs a callback every `period_ms` on the local executor until the callback
//! returns `ControlFlow::Break` or the handle is cancelled.

use std::cell::Cell;
use std::future::Future;
use std::ops::ControlFlow;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Handle to a running ticker. Cancelling is idempotent.
#[derive(Debug)]
pub struct Ticker {
    cancelled: Rc<Cell<bool>>,
}

impl Ticker {
    pub fn start<F>(period_ms: u32, on_tick: F) -> Self
    where
        F: FnMut() -> ControlFlow<()> + 'static,
    {
        let ticker = Self::idle();
        spawn_local(ticker.run(move || TimeoutFuture::new(period_ms), on_tick));
        ticker
    }

    fn idle() -> Self {
        Self {
            cancelled: Rc::new(Cell::new(false)),
        }
    }

    /// The tick loop. `sleep` yields the wait before each tick; the cancel
    /// flag is checked after every wait.
    fn run<S, Fut, F>(&self, mut sleep: S, mut on_tick: F) -> impl Future<Output = ()> + 'static
    where
        S: FnMut() -> Fut + 'static,
        Fut: Future<Output = ()>,
        F: FnMut() -> ControlFlow<()> + 'static,
    {
        let flag = self.cancelled.clone();
        async move {
            loop {
                sleep().await;
                if flag.get() {
                    break;
                }
                if on_tick().is_break() {
                    flag.set(true);
                    break;
                }
            }
        }
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::ready;

    #[test]
    fn test_loop_ends_after_break() {
        let ticker = Ticker::idle();
        let ticks = Rc::new(Cell::new(0u32));
        let counter = ticks.clone();

        block_on(ticker.run(
            || ready(()),
            move || {
                counter.set(counter.get() + 1);
                if counter.get() == 4 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            },
        ));

        assert_eq!(ticks.get(), 4);
        assert!(ticker.cancelled.get());
    }

    #[test]
    fn test_cancelled_before_first_tick_never_calls_back() {
        let ticker = Ticker::idle();
        let ticks = Rc::new(Cell::new(0u32));
        let counter = ticks.clone();

        ticker.cancel();
        block_on(ticker.run(
            || ready(()),
            move || {
                counter.set(counter.get() + 1);
                ControlFlow::Continue(())
            },
        ));

        assert_eq!(ticks.get(), 0);
    }

    #[test]
    fn test_cancel_during_wait_stops_callbacks() {
        let ticker = Ticker::idle();
        let ticks = Rc::new(Cell::new(0u32));
        let counter = ticks.clone();
        let waits = Rc::new(Cell::new(0u32));
        let flag = ticker.cancelled.clone();

        // the third wait is interrupted by teardown
        let sleep = move || {
            waits.set(waits.get() + 1);
            if waits.get() == 3 {
                flag.set(true);
            }
            ready(())
        };

        block_on(ticker.run(sleep, move || {
            counter.set(counter.get() + 1);
            ControlFlow::Continue(())
        }));

        assert_eq!(ticks.get(), 2);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let ticker = Ticker::idle();
        ticker.cancel();
        ticker.cancel();
        assert!(ticker.cancelled.get());
    }
}
