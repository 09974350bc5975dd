use std::time::Duration;

use log::{debug, error, trace, warn};
use subtle::ConstantTimeEq;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::sync::broadcast::Receiver;
use tokio::time::Instant;

use super::config::HarnessPolicy;
use super::report;
use super::vectors::{KEY_GROUPS, TEST_VECTORS};
use super::{
    CallerHandle, CompletionEvent, CryptoAcceleratorTrait, CryptoStatus, FailurePolicy, KeyGroup,
    KeySizeClass, PhaseTimings, RunOutcome, RunRecord, RunSummary, TestVector,
};
use super::{CBC_MAC_MAC_LEN, MDATA_MAX_LEN};

/// How a wait for a completion event ended
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WaitStatus {
    /// The engine announced our request and its result is ready
    Completed,
    /// The configured completion timeout expired
    TimedOut,
    /// The event channel was closed by the engine
    Disconnected,
}

/// A MAC read back from the engine
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FetchedMac {
    pub status: CryptoStatus,
    pub mac: [u8; CBC_MAC_MAC_LEN],
}

impl FetchedMac {
    /// true if `mac` holds the engine's tag. The engine still hands out the
    /// tag when its own check against the expected MAC fails.
    pub fn is_available(&self) -> bool {
        matches!(
            self.status,
            CryptoStatus::Success | CryptoStatus::AuthenticationFailed
        )
    }
}

/// Constant-time comparison of two MACs
pub fn compare_mac(computed: &[u8; CBC_MAC_MAC_LEN], expected: &[u8; CBC_MAC_MAC_LEN]) -> bool {
    computed[..].ct_eq(&expected[..]).into()
}

/// Runs known-answer vectors through an AES-CBC-MAC engine: loads the key
/// group of each size class, starts the MAC, suspends until the engine
/// reports completion, fetches the tag and compares it.
/// Only one request is ever in flight.
pub struct SelfTestDriver<'a, A: CryptoAcceleratorTrait + ?Sized> {
    accel: &'a A,
    policy: HarnessPolicy,
    /// Owner part of every handle issued by this driver
    owner: u32,
    /// Sequence number of the next request. Never reset, so late events of
    /// cancelled requests cannot be mistaken for current ones.
    next_request: u32,
    /// Key size class resident in the key store, if any
    loaded_class: Option<KeySizeClass>,
    events: Receiver<CompletionEvent>,
    /// Working copy of the message handed to the engine
    mdata: [u8; MDATA_MAX_LEN],
}

impl<'a, A: CryptoAcceleratorTrait + ?Sized> SelfTestDriver<'a, A> {
    pub fn new(accel: &'a A, policy: HarnessPolicy) -> SelfTestDriver<'a, A> {
        SelfTestDriver {
            accel,
            policy,
            owner: rand::random::<u32>(),
            next_request: 0,
            loaded_class: None,
            events: accel.subscribe(),
            mdata: [0; MDATA_MAX_LEN],
        }
    }

    pub fn policy(&self) -> &HarnessPolicy {
        &self.policy
    }

    /// Key size class the driver believes to be resident in the key store
    pub fn loaded_class(&self) -> Option<KeySizeClass> {
        self.loaded_class
    }

    /// Run the built-in known-answer table
    pub async fn run_known_answer_tests(&mut self) -> Result<RunSummary, CryptoStatus> {
        self.run(&KEY_GROUPS, &TEST_VECTORS).await
    }

    /// Process `vectors` in order, loading keys from `key_groups` whenever the
    /// key size class changes. Fails only if the crypto subsystem cannot be
    /// acquired; every other failure is part of the returned summary.
    pub async fn run(
        &mut self,
        key_groups: &[KeyGroup],
        vectors: &[TestVector],
    ) -> Result<RunSummary, CryptoStatus> {
        report::initializing();
        let status = self.accel.crypto_init();
        if status != CryptoStatus::Success {
            error!("crypto_init(): {}", status);
            return Err(status);
        }
        self.loaded_class = None;
        self.discard_stale_events();

        let mut summary = RunSummary {
            records: Vec::with_capacity(vectors.len()),
            aborted: None,
            total_vectors: vectors.len(),
        };
        for (index, vector) in vectors.iter().enumerate() {
            let record = self.process_vector(index, vector, key_groups).await;
            let outcome = record.outcome;
            summary.records.push(record);
            if self.is_fatal(&outcome) {
                error!(
                    "Vector #{} failed ({}), skipping the remaining {} vectors",
                    index,
                    outcome,
                    vectors.len() - index - 1
                );
                summary.aborted = Some(outcome);
                break;
            }
        }

        report::disabling();
        let status = self.accel.crypto_disable();
        if status != CryptoStatus::Success {
            warn!("crypto_disable(): {}", status);
        }
        self.loaded_class = None;
        report::done(&summary);
        Ok(summary)
    } // SelfTestDriver::run()

    /// Load the key group of `class` unless it is already resident.
    /// Returns None when nothing had to be loaded.
    pub fn ensure_keys_loaded(
        &mut self,
        key_groups: &[KeyGroup],
        class: KeySizeClass,
    ) -> Option<CryptoStatus> {
        if self.loaded_class == Some(class) {
            return None;
        }
        report::filling_key_store(class);
        let (status, _) = self.load_key_group(key_groups, class);
        Some(status)
    } // SelfTestDriver::ensure_keys_loaded()

    /// Hand the key group of `class` to the engine. The elapsed time covers
    /// the engine call only and is None when no call was made.
    fn load_key_group(
        &mut self,
        key_groups: &[KeyGroup],
        class: KeySizeClass,
    ) -> (CryptoStatus, Option<Duration>) {
        self.loaded_class = None;
        let group = match key_groups.iter().find(|group| group.class == class) {
            Some(val) => val,
            None => {
                error!("No {}-bit keys to load", class.bits());
                return (CryptoStatus::InvalidParameter, None);
            }
        };

        let started = Instant::now();
        let status = self
            .accel
            .aes_load_keys(group.keys, group.class, group.count, 0);
        let elapsed = started.elapsed();

        if status == CryptoStatus::Success {
            self.loaded_class = Some(class);
        }
        (status, Some(elapsed))
    } // SelfTestDriver::load_key_group()

    /// Copy the vector's message into the working buffer and hand it to the
    /// engine. On success the returned handle tags the completion event.
    pub fn start_authentication(
        &mut self,
        vector: &TestVector,
    ) -> Result<CallerHandle, CryptoStatus> {
        let len = vector.mdata.len();
        if len > MDATA_MAX_LEN {
            error!(
                "Message of {} bytes exceeds the {}-byte buffer",
                len, MDATA_MAX_LEN
            );
            return Err(CryptoStatus::InvalidParameter);
        }
        self.mdata[..len].copy_from_slice(vector.mdata);

        let handle = CallerHandle {
            owner: self.owner,
            request: self.next_request,
        };
        self.next_request = self.next_request.wrapping_add(1);

        match self
            .accel
            .cbc_mac_auth_start(vector.key_area, &self.mdata[..len], handle)
        {
            CryptoStatus::Success => Ok(handle),
            err => Err(err),
        }
    } // SelfTestDriver::start_authentication()

    /// Suspend until the engine announces the request tagged with `handle`.
    /// Events for other requests are skipped. Bounded by the configured
    /// completion timeout, if any.
    pub async fn wait_for_completion(&mut self, handle: CallerHandle) -> WaitStatus {
        let timeout = self.policy.completion_timeout();
        let accel = self.accel;
        let events = &mut self.events;

        let wait = async move {
            loop {
                match events.recv().await {
                    Ok(event) if event.handle == handle => {
                        if accel.cbc_mac_auth_check_status() {
                            return WaitStatus::Completed;
                        }
                        debug!("{:?} announced but its result is not ready", handle);
                    }
                    Ok(event) => trace!("Skipping completion of {:?}", event.handle),
                    Err(RecvError::Lagged(missed)) => {
                        warn!("{} completion events were lost", missed);
                        if accel.cbc_mac_auth_check_status() {
                            return WaitStatus::Completed;
                        }
                    }
                    Err(RecvError::Closed) => return WaitStatus::Disconnected,
                }
            }
        };

        match timeout {
            Some(limit) => tokio::time::timeout(limit, wait)
                .await
                .unwrap_or(WaitStatus::TimedOut),
            None => wait.await,
        }
    } // SelfTestDriver::wait_for_completion()

    /// Read the tag of the completed request. When configured, the expected
    /// MAC is handed to the engine for its own check.
    pub fn fetch_result(&mut self, vector: &TestVector) -> FetchedMac {
        let mut mac = [0u8; CBC_MAC_MAC_LEN];
        let mac_in = if self.policy.verify_in_engine {
            Some(&vector.mac[..])
        } else {
            None
        };
        let status = self.accel.cbc_mac_auth_get_result(mac_in, &mut mac);
        FetchedMac { status, mac }
    } // SelfTestDriver::fetch_result()

    async fn process_vector(
        &mut self,
        index: usize,
        vector: &TestVector,
        key_groups: &[KeyGroup],
    ) -> RunRecord {
        let mut record = RunRecord {
            index,
            class: vector.class,
            key_area: vector.key_area,
            mdata_len: vector.mdata.len(),
            outcome: RunOutcome::MacOk,
            timings: PhaseTimings::default(),
        };

        if self.loaded_class != Some(vector.class) {
            report::filling_key_store(vector.class);
            let (status, elapsed) = self.load_key_group(key_groups, vector.class);
            record.timings.key_load = elapsed;
            if let Some(elapsed) = elapsed {
                report::phase("aes_load_keys", status, elapsed);
            }
            self.pause().await;
            if status != CryptoStatus::Success {
                record.outcome = RunOutcome::KeyLoadError(status);
                return record;
            }
        }

        report::vector_header(index, vector);

        let started = Instant::now();
        let result = self.start_authentication(vector);
        let elapsed = started.elapsed();
        record.timings.auth_start = Some(elapsed);
        let handle = match result {
            Ok(val) => {
                report::phase("cbc_mac_auth_start", CryptoStatus::Success, elapsed);
                val
            }
            Err(err) => {
                report::phase("cbc_mac_auth_start", err, elapsed);
                self.pause().await;
                record.outcome = RunOutcome::AuthStartError(err);
                return record;
            }
        };

        let started = Instant::now();
        let wait = self.wait_for_completion(handle).await;
        let elapsed = started.elapsed();
        record.timings.auth_wait = Some(elapsed);
        report::wait(wait, elapsed);
        if wait != WaitStatus::Completed {
            self.reset_engine();
            self.pause().await;
            record.outcome = RunOutcome::AuthWaitTimeout;
            return record;
        }

        let started = Instant::now();
        let fetched = self.fetch_result(vector);
        let elapsed = started.elapsed();
        record.timings.get_result = Some(elapsed);
        report::phase("cbc_mac_auth_get_result", fetched.status, elapsed);
        if !fetched.is_available() {
            self.reset_engine();
            self.pause().await;
            record.outcome = RunOutcome::ResultFetchError(fetched.status);
            return record;
        }
        self.pause().await;

        record.outcome = if compare_mac(&fetched.mac, &vector.mac) {
            RunOutcome::MacOk
        } else {
            RunOutcome::MacMismatch
        };
        report::verdict(record.outcome, &fetched.mac, &vector.mac);
        report::total(record.timings.total());
        record
    } // SelfTestDriver::process_vector()

    fn is_fatal(&self, outcome: &RunOutcome) -> bool {
        let policy = match outcome {
            RunOutcome::MacOk | RunOutcome::MacMismatch => return false,
            RunOutcome::KeyLoadError(_) => self.policy.key_load_failure,
            RunOutcome::AuthStartError(_)
            | RunOutcome::AuthWaitTimeout
            | RunOutcome::ResultFetchError(_) => self.policy.auth_failure,
        };
        policy == FailurePolicy::Abort
    }

    /// Abandon the request in flight so the next vector finds the engine idle
    fn reset_engine(&self) {
        let status = self.accel.reset();
        if status != CryptoStatus::Success {
            warn!("reset(): {}", status);
        }
    }

    async fn pause(&self) {
        if self.policy.cooperative_pause {
            tokio::task::yield_now().await;
        }
    }

    /// Drop events queued before this run started
    fn discard_stale_events(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(event) => trace!("Discarding stale completion of {:?}", event.handle),
                Err(TryRecvError::Lagged(_)) => continue,
                Err(_) => break,
            }
        }
    }
}
