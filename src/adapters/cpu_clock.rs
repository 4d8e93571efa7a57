use crate::ports::CpuClockPort;
use std::mem::MaybeUninit;

/// Process-wide CPU time (user + system, all threads) from `getrusage(RUSAGE_SELF)`.
pub struct ProcessCpuClock;

impl ProcessCpuClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessCpuClock {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuClockPort for ProcessCpuClock {
    fn cpu_seconds(&self) -> Option<f64> {
        let mut usage = MaybeUninit::<libc::rusage>::uninit();
        let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
        if rc != 0 {
            return None;
        }
        let usage = unsafe { usage.assume_init() };
        let seconds = |tv: libc::timeval| tv.tv_sec as f64 + tv.tv_usec as f64 / 1_000_000.0;
        Some(seconds(usage.ru_utime) + seconds(usage.ru_stime))
    }
}

/// A clock that always reports the same value.
pub struct FixedCpuClock(pub Option<f64>);

impl CpuClockPort for FixedCpuClock {
    fn cpu_seconds(&self) -> Option<f64> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_clock_advances_with_work() {
        let clock = ProcessCpuClock::new();
        let before = clock.cpu_seconds().unwrap();
        let mut acc = 0u64;
        for i in 0..20_000_000u64 {
            acc = acc.wrapping_mul(31).wrapping_add(i);
        }
        std::hint::black_box(acc);
        let after = clock.cpu_seconds().unwrap();
        assert!(before >= 0.0);
        assert!(after >= before);
    }

    #[test]
    fn fixed_clock_reports_its_value() {
        assert_eq!(FixedCpuClock(Some(2.5)).cpu_seconds(), Some(2.5));
        assert_eq!(FixedCpuClock(None).cpu_seconds(), None);
    }
}
