//! Scenarios run by the probe against the compiled yield backend

use std::{
    sync::{Arc, atomic::{AtomicBool, AtomicU64, Ordering}},
    thread,
    time::{Duration, Instant},
};

use shadow_core::sys::{self, CurrentThread, yield_current_thread};
use shadow_logging::{LogCategory, log_error, log_info, log_verbose, log_warning};

use crate::settings::ProbeSettings;

pub const LOG_CAT : LogCategory = LogCategory::new_with_sub("Probe", "Yield");

/// Outcome of a batch of yields
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct YieldCount {
    pub accepted : u64,
    pub rejected : u64,
}

impl YieldCount {
    pub fn record(&mut self, accepted: bool) {
        if accepted {
            self.accepted += 1;
        } else {
            self.rejected += 1;
        }
    }

    pub fn merge(&mut self, other: YieldCount) {
        self.accepted += other.accepted;
        self.rejected += other.rejected;
    }

    pub fn total(&self) -> u64 {
        self.accepted + self.rejected
    }

    /// Check the counts against what the backend can report
    fn check(&self, scenario: &str) -> Result<(), String> {
        if self.rejected != 0 && !sys::BACKEND.can_fail() {
            return Err(format!("{scenario}: {} yields rejected by a backend that cannot fail", self.rejected));
        }
        if self.rejected != 0 {
            log_warning!(LOG_CAT, "{scenario}: {} of {} yields rejected by the OS", self.rejected, self.total());
        }
        Ok(())
    }
}

fn yield_n(iterations: u64) -> YieldCount {
    let mut count = YieldCount::default();
    for _ in 0..iterations {
        count.record(CurrentThread::yield_now());
    }
    count
}

/// A single yield from the main thread
pub fn smoke() -> Result<(), String> {
    let accepted = yield_current_thread();
    log_verbose!(LOG_CAT, "smoke: yield returned {accepted}");
    if !accepted {
        return Err(format!("smoke: yield was rejected (os error {})", sys::errno()));
    }
    Ok(())
}

/// Yield `iterations` times in a row from the main thread
pub fn tight_loop(iterations: u64) -> Result<YieldCount, String> {
    let begin = Instant::now();
    let count = yield_n(iterations);
    log_info!(LOG_CAT, "tight loop: {} yields in {:?}", count.total(), begin.elapsed());
    count.check("tight loop")?;
    Ok(count)
}

/// Two threads bumping a shared counter and yielding in between
pub fn handoff(rounds: u64) -> Result<u64, String> {
    let counter = Arc::new(AtomicU64::new(0));

    let handles: Vec<_> = (0..2).map(|_| {
        let counter = counter.clone();
        thread::spawn(move || {
            let mut count = YieldCount::default();
            for _ in 0..rounds {
                counter.fetch_add(1, Ordering::Relaxed);
                count.record(yield_current_thread());
            }
            count
        })
    }).collect();

    let mut count = YieldCount::default();
    for handle in handles {
        count.merge(handle.join().map_err(|_| "handoff: yielding thread panicked".to_string())?);
    }
    count.check("handoff")?;

    let total = counter.load(Ordering::Relaxed);
    log_info!(LOG_CAT, "handoff: counter reached {total}");
    if total != 2 * rounds {
        return Err(format!("handoff: expected counter {}, got {total}", 2 * rounds));
    }
    Ok(total)
}

/// `threads` threads yielding in a loop for `duration`
pub fn fan_out(threads: usize, duration: Duration) -> Result<YieldCount, String> {
    if threads > ProbeSettings::MAX_THREADS {
        return Err(format!("fan-out: {threads} threads requested, at most {} supported", ProbeSettings::MAX_THREADS));
    }

    let go = Arc::new(AtomicBool::new(false));
    let stop = Arc::new(AtomicBool::new(false));

    let mut handles = Vec::new();
    let mut spawn_error = None;
    for idx in 0..threads {
        let go = go.clone();
        let stop = stop.clone();
        let handle = thread::Builder::new()
            .name(format!("yield-{idx}"))
            .spawn(move || {
                while !go.load(Ordering::Acquire) {
                    yield_current_thread();
                }

                let mut count = YieldCount::default();
                while !stop.load(Ordering::Relaxed) {
                    count.record(yield_current_thread());
                }
                count
            });

        match handle {
            Ok(handle) => handles.push(handle),
            Err(err) => {
                log_error!(LOG_CAT, fan_out, "failed to spawn thread {idx}: {err}");
                spawn_error = Some(format!("fan-out: could only spawn {idx} of {threads} threads"));
                break;
            }
        }
    }

    go.store(true, Ordering::Release);
    if spawn_error.is_none() {
        thread::sleep(duration);
    }
    stop.store(true, Ordering::Relaxed);

    let mut count = YieldCount::default();
    let mut panicked = 0;
    for handle in handles {
        match handle.join() {
            Ok(thread_count) => count.merge(thread_count),
            Err(_) => panicked += 1,
        }
    }

    if let Some(err) = spawn_error {
        return Err(err);
    }
    if panicked != 0 {
        return Err(format!("fan-out: {panicked} yielding threads panicked"));
    }

    log_info!(LOG_CAT, "fan-out: {threads} threads did {} yields in {duration:?}", count.total());
    count.check("fan-out")?;
    Ok(count)
}

/// Run every scenario, stopping at the first failure
pub fn run(settings: &ProbeSettings) -> Result<(), String> {
    log_info!(LOG_CAT, "probing the {} yield backend", sys::BACKEND);

    smoke()?;
    tight_loop(settings.iterations)?;
    handoff(settings.iterations.min(100_000))?;
    fan_out(settings.threads.get(), settings.duration)?;
    Ok(())
}
