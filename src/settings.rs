use core::{num::NonZeroUsize, str::FromStr, time::Duration};

/// Settings of a probe run
/// 
/// Parsed from the positional arguments `[threads] [seconds] [iterations]`, any argument that's left out keeps its default.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProbeSettings {
    /// Number of threads yielding concurrently during the fan-out run
    pub threads    : NonZeroUsize,
    /// How long the fan-out run lasts
    pub duration   : Duration,
    /// Number of yields in the tight loop
    pub iterations : u64,
}

impl ProbeSettings {
    pub const DEFAULT_THREADS: usize = 64;
    pub const DEFAULT_SECONDS: u64 = 1;
    pub const DEFAULT_ITERATIONS: u64 = 1_000_000;
    /// Upper bound on the fan-out thread count, well past what any OS spawns without running out of resources
    pub const MAX_THREADS: usize = 4096;

    pub const USAGE: &'static str = "usage: shadow_yield_probe [threads] [seconds] [iterations]";

    /// Parse the settings from the program arguments, excluding the program name
    pub fn from_args<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut settings = Self::default();
        let mut args = args.into_iter();

        if let Some(arg) = args.next() {
            settings.threads = parse_arg(arg.as_ref(), "threads")?;
            if settings.threads.get() > Self::MAX_THREADS {
                return Err(format!("invalid value for threads: '{}' (at most {})", arg.as_ref(), Self::MAX_THREADS));
            }
        }
        if let Some(arg) = args.next() {
            let seconds: u64 = parse_arg(arg.as_ref(), "seconds")?;
            settings.duration = Duration::from_secs(seconds);
        }
        if let Some(arg) = args.next() {
            settings.iterations = parse_arg(arg.as_ref(), "iterations")?;
        }
        if let Some(arg) = args.next() {
            return Err(format!("unexpected argument '{}'", arg.as_ref()));
        }

        Ok(settings)
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            // 64 is never 0
            threads: NonZeroUsize::new(Self::DEFAULT_THREADS).unwrap_or(NonZeroUsize::MIN),
            duration: Duration::from_secs(Self::DEFAULT_SECONDS),
            iterations: Self::DEFAULT_ITERATIONS,
        }
    }
}

fn parse_arg<T: FromStr>(arg: &str, name: &str) -> Result<T, String> {
    arg.parse().map_err(|_| format!("invalid value for {name}: '{arg}'"))
}
