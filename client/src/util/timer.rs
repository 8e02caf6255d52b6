//! One-shot timeout tied to a component's lifetime.
//!
//! A [`ScopedTimeout`] is acquired when a component mounts and released when
//! it unmounts. Releasing (either [`ScopedTimeout::cancel`] or dropping the
//! guard) guarantees the callback never runs afterwards.
//!
//! In the browser the guard owns a `gloo_timers` timeout, whose `Drop`
//! clears the pending JS timer. Outside the browser (SSR and native tests)
//! nothing is scheduled: the callback is parked until the guard is released,
//! and tests drive it by hand with `elapse`.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// Pending one-shot callback, cancelled on drop.
pub struct ScopedTimeout {
    #[cfg(feature = "hydrate")]
    inner: Option<gloo_timers::callback::Timeout>,
    #[cfg(not(feature = "hydrate"))]
    parked: Option<Box<dyn FnOnce()>>,
}

impl ScopedTimeout {
    /// Schedule `callback` to run once after `delay_ms` milliseconds.
    pub fn start<F>(delay_ms: u32, callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            Self { inner: Some(gloo_timers::callback::Timeout::new(delay_ms, callback)) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = delay_ms;
            Self { parked: Some(Box::new(callback)) }
        }
    }

    /// Release the timer without running the callback.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            // Dropping a gloo `Timeout` clears the JS timer.
            self.inner = None;
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.parked = None;
        }
    }

    /// Run the parked callback as if the delay had passed.
    ///
    /// Returns `false` if the callback already ran or was released.
    #[cfg(all(test, not(feature = "hydrate")))]
    pub(crate) fn elapse(&mut self) -> bool {
        match self.parked.take() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl Drop for ScopedTimeout {
    fn drop(&mut self) {
        self.release();
    }
}
