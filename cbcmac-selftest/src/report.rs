use std::fmt;
use std::time::Duration;

use log::{debug, info, warn};

use super::driver::WaitStatus;
use super::{CryptoStatus, KeySizeClass, RunOutcome, RunSummary, TestVector};

const SEPARATOR: &str = "-----------------------------------------";

pub(crate) fn initializing() {
    info!("{}", SEPARATOR);
    info!("Initializing cryptoprocessor...");
}

pub(crate) fn filling_key_store(class: KeySizeClass) {
    info!("{}", SEPARATOR);
    info!("Filling {}-bit key store...", class.bits());
}

/// `name(): status, N us`
pub(crate) fn phase(name: &str, status: CryptoStatus, elapsed: Duration) {
    match status {
        CryptoStatus::Success => info!("{}(): {}, {} us", name, status, elapsed.as_micros()),
        _ => warn!("{}(): {}, {} us", name, status, elapsed.as_micros()),
    }
}

pub(crate) fn vector_header(index: usize, vector: &TestVector) {
    info!("{}", SEPARATOR);
    info!("Test vector #{}:", index);
    info!(
        "key_size={} key_area={} mdata_len={}",
        vector.class.bits(),
        vector.key_area,
        vector.mdata.len()
    );
}

pub(crate) fn wait(status: WaitStatus, elapsed: Duration) {
    match status {
        WaitStatus::Completed => info!(
            "cbc_mac_auth_check_status() wait: {} us",
            elapsed.as_micros()
        ),
        WaitStatus::TimedOut => warn!(
            "cbc_mac_auth_check_status() timed out after {} us",
            elapsed.as_micros()
        ),
        WaitStatus::Disconnected => warn!(
            "cbc_mac_auth_check_status() event channel closed after {} us",
            elapsed.as_micros()
        ),
    }
}

pub(crate) fn verdict(outcome: RunOutcome, computed: &[u8], expected: &[u8]) {
    match outcome {
        RunOutcome::MacOk => info!("MAC OK"),
        _ => {
            warn!("MAC does not match expected one");
            warn!("  computed: {}", hex::encode(computed));
            warn!("  expected: {}", hex::encode(expected));
        }
    }
}

pub(crate) fn total(elapsed: Duration) {
    info!("Total duration: {} us", elapsed.as_micros());
}

pub(crate) fn disabling() {
    info!("{}", SEPARATOR);
    info!("Disabling cryptoprocessor...");
}

pub(crate) fn done(summary: &RunSummary) {
    for record in summary.records.iter() {
        debug!(
            "#{} {}-bit area {} ({} bytes): {}",
            record.index,
            record.class.bits(),
            record.key_area,
            record.mdata_len,
            record.outcome
        );
    }
    info!("Done!");
}

/// Log the one-line result of a run
pub fn log_summary(summary: &RunSummary) {
    if summary.all_passed() {
        info!("{}", summary);
    } else {
        warn!("{}", summary);
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::MacOk => write!(f, "MAC OK"),
            RunOutcome::MacMismatch => write!(f, "MAC mismatch"),
            RunOutcome::KeyLoadError(status) => write!(f, "key load failed: {}", status),
            RunOutcome::AuthStartError(status) => write!(f, "auth start failed: {}", status),
            RunOutcome::AuthWaitTimeout => write!(f, "no completion"),
            RunOutcome::ResultFetchError(status) => write!(f, "get result failed: {}", status),
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} vectors passed, {} MAC mismatches, {} accelerator errors, {} not run",
            self.passed(),
            self.total_vectors,
            self.mismatched(),
            self.errored(),
            self.skipped()
        )?;
        if let Some(outcome) = &self.aborted {
            write!(f, " (aborted: {})", outcome)?;
        }
        Ok(())
    }
}
