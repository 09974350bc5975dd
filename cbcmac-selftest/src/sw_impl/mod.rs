use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use aes::{Aes128, Aes192, Aes256, Block};
use cipher::{BlockEncrypt, KeyInit};
use log::{debug, error, trace};
use rand::Rng;
use subtle::ConstantTimeEq;
use tokio::runtime::Handle;
use tokio::sync::broadcast;

use super::config::{AcceleratorConfig, FaultSpec};
use super::{
    CallerHandle, CompletionEvent, CryptoAcceleratorTrait, CryptoStatus, EngineOp, KeyArea,
    KeySizeClass,
};
use super::{AES_BLOCK_SIZE, AES_KEY_AREA_SIZE, AES_KEY_STORE_AREAS, CBC_MAC_MAC_LEN};

mod key_store;

use key_store::KeyStore;

pub(crate) const EVENT_CHANNEL_CAPACITY: usize = 16;

struct CryptoResourceManager {
    ref_counter: u8,
}

lazy_static! {
    static ref CRYPTO_RESOURCE_MANAGER: Mutex<CryptoResourceManager> =
        Mutex::new(CryptoResourceManager { ref_counter: 0 });
}

impl CryptoResourceManager {
    // Aquire the exclusive right to drive the crypto engine
    fn acquire(&mut self) -> bool {
        if self.ref_counter == 0 {
            self.ref_counter = 1;
            true
        } else {
            false
        }
    }

    // Give the crypto engine back
    fn release(&mut self) -> bool {
        if self.ref_counter == 1 {
            self.ref_counter = 0;
            true
        } else {
            false
        }
    }
}

/// A MAC request accepted by the engine
struct Operation {
    handle: CallerHandle,
    /// Distinguishes this request from earlier, cancelled ones
    generation: u64,
    result: Option<[u8; CBC_MAC_MAC_LEN]>,
}

#[derive(Default)]
struct EngineState {
    initialized: bool,
    key_store: KeyStore,
    operation: Option<Operation>,
    generation: u64,
    calls: HashMap<EngineOp, u32>,
}

/// Software model of an AES-CBC-MAC accelerator with an 8-area key store.
/// MAC computations run as tasks on the current tokio runtime and are
/// announced on a broadcast channel, like an interrupt-driven engine would.
pub struct SoftwareAccelerator {
    cfg: AcceleratorConfig,
    state: Arc<Mutex<EngineState>>,
    events: broadcast::Sender<CompletionEvent>,
}

impl SoftwareAccelerator {
    pub fn new(cfg: AcceleratorConfig) -> SoftwareAccelerator {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        SoftwareAccelerator {
            cfg,
            state: Arc::new(Mutex::new(EngineState::default())),
            events,
        }
    }

    /// Put an arbitrary event on the completion channel, as another
    /// engine client sharing the channel would
    pub fn post_event(&self, event: CompletionEvent) {
        if self.events.send(event).is_err() {
            debug!("No listener for {:?}", event);
        }
    }

    /// Key size class the key store is currently set up for
    pub fn loaded_key_size(&self) -> Option<KeySizeClass> {
        self.engine().key_store.key_size()
    }

    /// true while a MAC request has been accepted but its result not fetched
    pub fn is_busy(&self) -> bool {
        self.engine().operation.is_some()
    }

    fn engine(&self) -> MutexGuard<'_, EngineState> {
        self.state
            .lock()
            .expect("Could not lock crypto engine mutex")
    }

    /// Count a call to `op` and return the status configured for it, if any
    fn injected_fault(&self, state: &mut EngineState, op: EngineOp) -> Option<CryptoStatus> {
        let counter = state.calls.entry(op).or_insert(0);
        *counter += 1;
        let call = *counter;
        self.cfg
            .faults
            .iter()
            .find(|fault: &&FaultSpec| fault.operation == op && fault.call == call)
            .map(|fault| fault.status)
            .filter(|status| *status != CryptoStatus::Success)
            .map(|status| {
                debug!("Injecting {} into {} call #{}", status, op, call);
                status
            })
    }

    fn completion_delay(&self) -> Duration {
        let mut delay_us = self.cfg.completion_delay_us;
        if self.cfg.completion_jitter_us > 0 {
            let jitter_us = rand::thread_rng().gen_range(0..=self.cfg.completion_jitter_us);
            delay_us = delay_us.saturating_add(jitter_us);
        }
        Duration::from_micros(delay_us)
    }
}

impl CryptoAcceleratorTrait for SoftwareAccelerator {
    /// Acquire the engine. Only one instance may hold it at a time.
    /// Trait implementation
    fn crypto_init(&self) -> CryptoStatus {
        let mut state = self.engine();
        if state.initialized {
            return CryptoStatus::Success;
        }
        if !CRYPTO_RESOURCE_MANAGER
            .lock()
            .expect("Could not lock resource manager mutex")
            .acquire()
        {
            error!("Crypto engine already owned by another instance");
            return CryptoStatus::ResourceInUse;
        }
        state.initialized = true;
        state.key_store.clear();
        state.operation = None;
        CryptoStatus::Success
    } // SoftwareAccelerator::crypto_init()

    /// Drop any request in flight, wipe the key store and release the engine
    /// Trait implementation
    fn crypto_disable(&self) -> CryptoStatus {
        let mut state = self.engine();
        if !state.initialized {
            return CryptoStatus::InvalidParameter;
        }
        state.generation += 1;
        state.operation = None;
        state.key_store.clear();
        state.initialized = false;
        CRYPTO_RESOURCE_MANAGER
            .lock()
            .expect("Could not lock resource manager mutex")
            .release();
        CryptoStatus::Success
    } // SoftwareAccelerator::crypto_disable()

    /// Trait implementation
    fn aes_load_keys(
        &self,
        keys: &[u8],
        key_size: KeySizeClass,
        count: u8,
        start_area: KeyArea,
    ) -> CryptoStatus {
        let mut state = self.engine();
        if let Some(status) = self.injected_fault(&mut state, EngineOp::LoadKeys) {
            return status;
        }
        if !state.initialized || start_area >= AES_KEY_STORE_AREAS {
            return CryptoStatus::InvalidParameter;
        }
        if state.operation.is_some() {
            return CryptoStatus::ResourceInUse;
        }
        state.key_store.load(keys, key_size, count, start_area)
    } // SoftwareAccelerator::aes_load_keys()

    /// Copies `mdata` into the engine and schedules the computation.
    /// Trait implementation
    fn cbc_mac_auth_start(
        &self,
        key_area: KeyArea,
        mdata: &[u8],
        handle: CallerHandle,
    ) -> CryptoStatus {
        let mut state = self.engine();
        if let Some(status) = self.injected_fault(&mut state, EngineOp::AuthStart) {
            return status;
        }
        if !state.initialized {
            return CryptoStatus::InvalidParameter;
        }
        if state.operation.is_some() {
            return CryptoStatus::ResourceInUse;
        }
        let key = match state.key_store.key(key_area) {
            Ok(val) => val,
            Err(err) => return err,
        };
        let runtime = match Handle::try_current() {
            Ok(val) => val,
            Err(_) => {
                error!("No runtime available to run the crypto engine");
                return CryptoStatus::ResourceInUse;
            }
        };

        let dma_buffer: Vec<u8> = mdata.to_vec();
        state.generation += 1;
        let generation = state.generation;
        state.operation = Some(Operation {
            handle,
            generation,
            result: None,
        });
        drop(state);

        let shared = Arc::clone(&self.state);
        let events = self.events.clone();
        let delay = self.completion_delay();
        let spurious_events = self.cfg.spurious_events;
        trace!(
            "Request {:?}: {} bytes, key area {}, done in {:?}",
            handle,
            dma_buffer.len(),
            key_area,
            delay
        );

        runtime.spawn(async move {
            if delay.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(delay).await;
            }
            let mac = match cbc_mac(&key, &dma_buffer) {
                Ok(val) => val,
                Err(err) => {
                    error!("Request {:?} failed: {}", handle, err);
                    return;
                }
            };
            {
                let mut state = shared
                    .lock()
                    .expect("Could not lock crypto engine mutex");
                match state.operation.as_mut() {
                    Some(op) if op.generation == generation => op.result = Some(mac),
                    _ => {
                        debug!("Request {:?} was cancelled, result dropped", handle);
                        return;
                    }
                }
            }
            for _ in 0..spurious_events {
                let foreign = CallerHandle {
                    owner: handle.owner.wrapping_add(1),
                    request: handle.request,
                };
                let _ = events.send(CompletionEvent { handle: foreign });
            }
            if events.send(CompletionEvent { handle }).is_err() {
                debug!("Nobody is listening for request {:?}", handle);
            }
        });

        CryptoStatus::Success
    } // SoftwareAccelerator::cbc_mac_auth_start()

    /// Trait implementation
    fn cbc_mac_auth_check_status(&self) -> bool {
        match &self.engine().operation {
            Some(op) => op.result.is_some(),
            None => false,
        }
    } // SoftwareAccelerator::cbc_mac_auth_check_status()

    /// Hands out the tag and returns the engine to idle.
    /// Trait implementation
    fn cbc_mac_auth_get_result(
        &self,
        mac_in: Option<&[u8]>,
        mac_out: &mut [u8; CBC_MAC_MAC_LEN],
    ) -> CryptoStatus {
        let mut state = self.engine();
        if let Some(status) = self.injected_fault(&mut state, EngineOp::GetResult) {
            return status;
        }
        if !state.initialized {
            return CryptoStatus::InvalidParameter;
        }
        if let Some(expected) = mac_in {
            if expected.len() != CBC_MAC_MAC_LEN {
                return CryptoStatus::InvalidParameter;
            }
        }
        let mac = match &state.operation {
            None => return CryptoStatus::InvalidParameter,
            Some(op) => match op.result {
                Some(val) => val,
                None => return CryptoStatus::ResourceInUse,
            },
        };
        if let Some(op) = state.operation.take() {
            trace!("Request {:?} fetched", op.handle);
        }
        mac_out.copy_from_slice(&mac);

        match mac_in {
            Some(expected) if !bool::from(mac[..].ct_eq(expected)) => {
                CryptoStatus::AuthenticationFailed
            }
            _ => CryptoStatus::Success,
        }
    } // SoftwareAccelerator::cbc_mac_auth_get_result()

    /// Trait implementation
    fn subscribe(&self) -> broadcast::Receiver<CompletionEvent> {
        self.events.subscribe()
    }

    /// Trait implementation
    fn reset(&self) -> CryptoStatus {
        let mut state = self.engine();
        if !state.initialized {
            return CryptoStatus::InvalidParameter;
        }
        state.generation += 1;
        if let Some(op) = state.operation.take() {
            debug!("Request {:?} cancelled", op.handle);
        }
        CryptoStatus::Success
    } // SoftwareAccelerator::reset()
}

impl Drop for SoftwareAccelerator {
    fn drop(&mut self) {
        let initialized = match self.state.lock() {
            Ok(state) => state.initialized,
            Err(_) => false,
        };
        if initialized {
            self.crypto_disable();
        }
    }
}

/// Block cipher behind the MAC, selected by the key length
enum MacCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl MacCipher {
    fn new(key: &[u8]) -> Result<MacCipher, CryptoStatus> {
        let cipher = match key.len() {
            16 => Aes128::new_from_slice(key).map(MacCipher::Aes128),
            24 => Aes192::new_from_slice(key).map(MacCipher::Aes192),
            32 => Aes256::new_from_slice(key).map(MacCipher::Aes256),
            _ => return Err(CryptoStatus::KeystoreReadError),
        };
        cipher.map_err(|_| CryptoStatus::KeystoreReadError)
    }

    fn encrypt_block(&self, block: &mut Block) {
        match self {
            MacCipher::Aes128(cipher) => cipher.encrypt_block(block),
            MacCipher::Aes192(cipher) => cipher.encrypt_block(block),
            MacCipher::Aes256(cipher) => cipher.encrypt_block(block),
        }
    }
}

/// CBC-MAC with an all-zero IV. A trailing partial block is zero padded.
fn cbc_mac(key: &[u8], mdata: &[u8]) -> Result<[u8; CBC_MAC_MAC_LEN], CryptoStatus> {
    let cipher = MacCipher::new(key)?;
    let mut chain = Block::default();
    for chunk in mdata.chunks(AES_BLOCK_SIZE) {
        for (acc, byte) in chain.iter_mut().zip(chunk) {
            *acc ^= *byte;
        }
        cipher.encrypt_block(&mut chain);
    }
    let mut mac = [0u8; CBC_MAC_MAC_LEN];
    mac.copy_from_slice(&chain[..CBC_MAC_MAC_LEN]);
    Ok(mac)
}
