#[macro_use]
extern crate lazy_static;

use tokio::sync::broadcast;

mod config;
mod driver;
mod report;
mod sw_impl;
mod vectors;

include!("./types.rs");

pub use config::{AcceleratorConfig, FaultSpec, HarnessConfig, HarnessPolicy};
pub use driver::{compare_mac, FetchedMac, SelfTestDriver, WaitStatus};
pub use report::log_summary;
pub use sw_impl::SoftwareAccelerator;
pub use vectors::{key_group, KEY_GROUPS, TEST_VECTORS};

/// Operations the self-test consumes from an AES-CBC-MAC engine driver.
/// Every call returns immediately; the MAC computation itself finishes
/// out of band and is announced on the channel returned by `subscribe()`.
pub trait CryptoAcceleratorTrait {
    /// Acquire and power up the crypto subsystem
    fn crypto_init(&self) -> CryptoStatus;
    /// Release the crypto subsystem
    fn crypto_disable(&self) -> CryptoStatus;
    /// Write `count` keys of size `key_size`, stored back to back in `keys`,
    /// into the key store starting at `start_area`
    fn aes_load_keys(
        &self,
        keys: &[u8],
        key_size: KeySizeClass,
        count: u8,
        start_area: KeyArea,
    ) -> CryptoStatus;
    /// Start a CBC-MAC computation over `mdata` with the key in `key_area`.
    /// Success means the request was accepted, not that it is done.
    fn cbc_mac_auth_start(&self, key_area: KeyArea, mdata: &[u8], handle: CallerHandle)
        -> CryptoStatus;
    /// true once the result of the current request can be fetched
    fn cbc_mac_auth_check_status(&self) -> bool;
    /// Fetch the MAC of the completed request into `mac_out`. If `mac_in` is
    /// given, the engine also checks the tag against it.
    fn cbc_mac_auth_get_result(
        &self,
        mac_in: Option<&[u8]>,
        mac_out: &mut [u8; CBC_MAC_MAC_LEN],
    ) -> CryptoStatus;
    /// A receiver for the process-wide completion event channel
    fn subscribe(&self) -> broadcast::Receiver<CompletionEvent>;
    /// Drop the request in flight (if any) and return the engine to idle
    fn reset(&self) -> CryptoStatus;
}

/// Build the accelerator backend named by the configuration
pub fn create_accelerator(
    cfg: &AcceleratorConfig,
) -> Result<Box<dyn CryptoAcceleratorTrait>, String> {
    match cfg.backend.as_str() {
        "software" => Ok(Box::new(SoftwareAccelerator::new(cfg.clone()))),
        _ => {
            log::error!("Unsupported accelerator backend {}", cfg.backend);
            Err(format!("unsupported accelerator backend '{}'", cfg.backend))
        }
    }
}
