#[macro_use]
extern crate strum_macros; // 0.21.1

use serde::Deserialize;
use std::time::Duration;

/// Maximum length of a message handed to the engine, in bytes
pub const MDATA_MAX_LEN: usize = 160;
/// Length of an AES-CBC-MAC tag
pub const CBC_MAC_MAC_LEN: usize = 16;
/// AES block size
pub const AES_BLOCK_SIZE: usize = 16;
/// Number of 128-bit areas in the AES key store
pub const AES_KEY_STORE_AREAS: u8 = 8;
/// Size of a single key store area in bytes
pub const AES_KEY_AREA_SIZE: usize = 16;

/// Return status for accelerator accessing functions
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Deserialize)]
pub enum CryptoStatus {
    /// Function succeeded.
    Success,
    /// bad argument (out of range, misaligned key area, oversized message, etc.)
    InvalidParameter,
    /// a required buffer was not supplied
    NullPointer,
    /// the engine is busy with another request or owned by someone else
    ResourceInUse,
    /// the engine reported a bus error while moving data
    DmaBusError,
    /// the referenced key area does not hold a valid key
    KeystoreReadError,
    /// the key store rejected the keys being written
    KeystoreWriteError,
    /// the computed MAC does not match the one supplied for verification
    AuthenticationFailed,
} // pub enum CryptoStatus

/// AES key sizes supported by the key store
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, Deserialize)]
pub enum KeySizeClass {
    Aes128,
    Aes192,
    Aes256,
} // pub enum KeySizeClass

impl KeySizeClass {
    /// Key length in bits
    pub fn bits(self) -> usize {
        match self {
            KeySizeClass::Aes128 => 128,
            KeySizeClass::Aes192 => 192,
            KeySizeClass::Aes256 => 256,
        }
    }

    /// Key length in bytes
    pub fn key_bytes(self) -> usize {
        self.bits() / 8
    }

    /// How many consecutive key store areas a single key occupies.
    /// Keys wider than one area start at an area index aligned to this value.
    pub fn areas_per_key(self) -> u8 {
        match self {
            KeySizeClass::Aes128 => 1,
            KeySizeClass::Aes192 | KeySizeClass::Aes256 => 2,
        }
    }
}

/// Index of a key store area. Meaningful only relative to the key size class
/// that was loaded most recently.
pub type KeyArea = u8;

/// Token correlating a MAC request with its completion event
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallerHandle {
    /// Identifies the requesting task
    pub owner: u32,
    /// Sequence number of the request within that task
    pub request: u32,
}

/// Event broadcast by the engine once the request tagged with `handle` is done
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CompletionEvent {
    pub handle: CallerHandle,
}

/// An accelerator operation that can be singled out for fault injection
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineOp {
    LoadKeys,
    AuthStart,
    GetResult,
}

/// A group of keys of one size class, loaded in a single call
#[derive(Copy, Clone, Debug)]
pub struct KeyGroup {
    pub class: KeySizeClass,
    /// Raw key bytes, `count` keys of `class.key_bytes()` each, back to back
    pub keys: &'static [u8],
    pub count: u8,
}

/// A known-answer CBC-MAC test vector
#[derive(Copy, Clone, Debug)]
pub struct TestVector {
    pub class: KeySizeClass,
    /// Key store area holding the key, relative to `class`
    pub key_area: KeyArea,
    /// Message data. At most `MDATA_MAX_LEN` bytes.
    pub mdata: &'static [u8],
    /// Expected MAC
    pub mac: [u8; CBC_MAC_MAC_LEN],
}

/// What to do with the rest of the run when a phase fails
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop processing the remaining vectors
    Abort,
    /// Record the failure and go on with the next vector
    Continue,
}

/// Verdict for a single test vector
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The engine produced the expected MAC
    MacOk,
    /// The engine produced a MAC different from the expected one
    MacMismatch,
    /// Loading the key group for this vector failed
    KeyLoadError(CryptoStatus),
    /// The engine did not accept the MAC request
    AuthStartError(CryptoStatus),
    /// No completion was observed in time (or the event channel went away)
    AuthWaitTimeout,
    /// The engine completed but the result could not be fetched
    ResultFetchError(CryptoStatus),
}

impl RunOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, RunOutcome::MacOk)
    }

    /// true if the vector failed because of the accelerator rather than
    /// because of a wrong MAC
    pub fn is_error(&self) -> bool {
        !matches!(self, RunOutcome::MacOk | RunOutcome::MacMismatch)
    }
}

/// Elapsed time of each phase of a vector. A phase that did not run is `None`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PhaseTimings {
    /// Only set for the vector that entered a new key size class
    pub key_load: Option<Duration>,
    pub auth_start: Option<Duration>,
    pub auth_wait: Option<Duration>,
    pub get_result: Option<Duration>,
}

impl PhaseTimings {
    /// Start, wait and fetch together. Key loading is accounted separately.
    pub fn total(&self) -> Duration {
        [self.auth_start, self.auth_wait, self.get_result]
            .iter()
            .flatten()
            .sum()
    }
}

/// Result of processing one test vector
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunRecord {
    /// Position of the vector in the table
    pub index: usize,
    pub class: KeySizeClass,
    pub key_area: KeyArea,
    pub mdata_len: usize,
    pub outcome: RunOutcome,
    pub timings: PhaseTimings,
}

/// Result of a whole harness run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub records: Vec<RunRecord>,
    /// Set when the run stopped before the end of the table
    pub aborted: Option<RunOutcome>,
    /// Number of vectors in the table, processed or not
    pub total_vectors: usize,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_pass()).count()
    }

    pub fn mismatched(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == RunOutcome::MacMismatch)
            .count()
    }

    pub fn errored(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_error()).count()
    }

    /// Vectors never reached because the run was aborted
    pub fn skipped(&self) -> usize {
        self.total_vectors - self.records.len()
    }

    pub fn all_passed(&self) -> bool {
        self.aborted.is_none() && self.passed() == self.total_vectors
    }

    pub fn verdicts(&self) -> Vec<RunOutcome> {
        self.records.iter().map(|r| r.outcome).collect()
    }
}
