use serial_test::serial;

// Types
use super::{
    AcceleratorConfig, CallerHandle, CryptoAcceleratorTrait, CryptoStatus, KeySizeClass,
    SoftwareAccelerator,
};
// Constants
use super::{CBC_MAC_MAC_LEN, KEY_GROUPS, TEST_VECTORS};

use super::common::test_config;

const HANDLE: CallerHandle = CallerHandle {
    owner: 0x5EED,
    request: 0,
};

fn test_accelerator() -> SoftwareAccelerator {
    SoftwareAccelerator::new(test_config().accelerator)
}

fn load_128_bit_keys(accelerator: &SoftwareAccelerator) {
    let group = crate::key_group(KeySizeClass::Aes128);
    assert_eq!(group.count, 8);
    assert_eq!(
        accelerator.aes_load_keys(group.keys, group.class, group.count, 0),
        CryptoStatus::Success
    );
}

async fn wait_until_ready(accelerator: &SoftwareAccelerator) {
    let mut events = accelerator.subscribe();
    while !accelerator.cbc_mac_auth_check_status() {
        let _ = events.recv().await;
    }
}

#[tokio::test]
#[serial]
async fn operations_need_init() {
    let accelerator = test_accelerator();
    let mut mac = [0u8; CBC_MAC_MAC_LEN];

    assert_eq!(
        accelerator.aes_load_keys(KEY_GROUPS[0].keys, KeySizeClass::Aes128, 8, 0),
        CryptoStatus::InvalidParameter
    );
    assert_eq!(
        accelerator.cbc_mac_auth_start(0, TEST_VECTORS[0].mdata, HANDLE),
        CryptoStatus::InvalidParameter
    );
    assert_eq!(
        accelerator.cbc_mac_auth_get_result(None, &mut mac),
        CryptoStatus::InvalidParameter
    );
    assert_eq!(accelerator.reset(), CryptoStatus::InvalidParameter);
    assert_eq!(accelerator.crypto_disable(), CryptoStatus::InvalidParameter);
    assert!(!accelerator.cbc_mac_auth_check_status());
}

#[tokio::test]
#[serial]
async fn init_is_exclusive_and_idempotent() {
    let first = test_accelerator();
    let second = test_accelerator();

    assert_eq!(first.crypto_init(), CryptoStatus::Success);
    assert_eq!(first.crypto_init(), CryptoStatus::Success);
    assert_eq!(second.crypto_init(), CryptoStatus::ResourceInUse);

    assert_eq!(first.crypto_disable(), CryptoStatus::Success);
    assert_eq!(second.crypto_init(), CryptoStatus::Success);
    drop(second);

    // dropping an initialized instance gives the engine back
    assert_eq!(first.crypto_init(), CryptoStatus::Success);
}

#[tokio::test]
#[serial]
async fn start_without_keys_fails() {
    let accelerator = test_accelerator();
    assert_eq!(accelerator.crypto_init(), CryptoStatus::Success);

    assert_eq!(
        accelerator.cbc_mac_auth_start(0, TEST_VECTORS[0].mdata, HANDLE),
        CryptoStatus::KeystoreReadError
    );
    assert_eq!(
        accelerator.cbc_mac_auth_start(8, TEST_VECTORS[0].mdata, HANDLE),
        CryptoStatus::InvalidParameter
    );
    assert!(!accelerator.is_busy());
}

#[tokio::test]
#[serial]
async fn disable_wipes_key_store() {
    let accelerator = test_accelerator();
    assert_eq!(accelerator.crypto_init(), CryptoStatus::Success);
    load_128_bit_keys(&accelerator);
    assert_eq!(accelerator.loaded_key_size(), Some(KeySizeClass::Aes128));

    assert_eq!(accelerator.crypto_disable(), CryptoStatus::Success);
    assert_eq!(accelerator.crypto_init(), CryptoStatus::Success);

    assert_eq!(accelerator.loaded_key_size(), None);
    assert_eq!(
        accelerator.cbc_mac_auth_start(0, TEST_VECTORS[0].mdata, HANDLE),
        CryptoStatus::KeystoreReadError
    );
}

#[tokio::test]
#[serial]
async fn busy_engine_rejects_requests() {
    let accelerator = test_accelerator();
    assert_eq!(accelerator.crypto_init(), CryptoStatus::Success);
    load_128_bit_keys(&accelerator);
    let mut mac = [0u8; CBC_MAC_MAC_LEN];

    assert_eq!(
        accelerator.cbc_mac_auth_start(0, TEST_VECTORS[0].mdata, HANDLE),
        CryptoStatus::Success
    );
    assert!(accelerator.is_busy());
    assert_eq!(
        accelerator.cbc_mac_auth_start(1, TEST_VECTORS[1].mdata, HANDLE),
        CryptoStatus::ResourceInUse
    );
    assert_eq!(
        accelerator.aes_load_keys(KEY_GROUPS[0].keys, KeySizeClass::Aes128, 8, 0),
        CryptoStatus::ResourceInUse
    );
    // the computation has not had a chance to run yet
    assert_eq!(
        accelerator.cbc_mac_auth_get_result(None, &mut mac),
        CryptoStatus::ResourceInUse
    );

    wait_until_ready(&accelerator).await;
    assert_eq!(
        accelerator.cbc_mac_auth_get_result(None, &mut mac),
        CryptoStatus::Success
    );
    assert_eq!(mac, TEST_VECTORS[0].mac);
    assert!(!accelerator.is_busy());

    // nothing left to fetch
    assert_eq!(
        accelerator.cbc_mac_auth_get_result(None, &mut mac),
        CryptoStatus::InvalidParameter
    );
}

#[tokio::test]
#[serial]
async fn engine_check_reports_mismatch_with_mac() {
    let accelerator = test_accelerator();
    assert_eq!(accelerator.crypto_init(), CryptoStatus::Success);
    load_128_bit_keys(&accelerator);
    let mut mac = [0u8; CBC_MAC_MAC_LEN];
    let mut wrong = TEST_VECTORS[0].mac;
    wrong[0] ^= 0x01;

    assert_eq!(
        accelerator.cbc_mac_auth_start(0, TEST_VECTORS[0].mdata, HANDLE),
        CryptoStatus::Success
    );
    wait_until_ready(&accelerator).await;
    assert_eq!(
        accelerator.cbc_mac_auth_get_result(Some(&wrong[..4]), &mut mac),
        CryptoStatus::InvalidParameter
    );
    assert_eq!(
        accelerator.cbc_mac_auth_get_result(Some(&wrong), &mut mac),
        CryptoStatus::AuthenticationFailed
    );
    assert_eq!(mac, TEST_VECTORS[0].mac);
}

#[tokio::test]
#[serial]
async fn reset_discards_request() {
    let accelerator = test_accelerator();
    assert_eq!(accelerator.crypto_init(), CryptoStatus::Success);
    load_128_bit_keys(&accelerator);
    let mut events = accelerator.subscribe();
    let mut mac = [0u8; CBC_MAC_MAC_LEN];

    assert_eq!(
        accelerator.cbc_mac_auth_start(2, TEST_VECTORS[2].mdata, HANDLE),
        CryptoStatus::Success
    );
    assert_eq!(accelerator.reset(), CryptoStatus::Success);
    assert!(!accelerator.is_busy());

    // the cancelled computation neither completes nor announces itself
    let next = CallerHandle {
        request: HANDLE.request + 1,
        ..HANDLE
    };
    assert_eq!(
        accelerator.cbc_mac_auth_start(3, TEST_VECTORS[3].mdata, next),
        CryptoStatus::Success
    );
    loop {
        let event = events.recv().await.unwrap();
        assert_ne!(event.handle, HANDLE);
        if event.handle == next {
            break;
        }
    }
    assert_eq!(
        accelerator.cbc_mac_auth_get_result(Some(&TEST_VECTORS[3].mac), &mut mac),
        CryptoStatus::Success
    );
}

#[tokio::test]
#[serial]
async fn completion_event_carries_handle() {
    let accelerator = SoftwareAccelerator::new(AcceleratorConfig::default());
    assert_eq!(accelerator.crypto_init(), CryptoStatus::Success);
    let mut events = accelerator.subscribe();
    let group = &KEY_GROUPS[2];
    assert_eq!(
        accelerator.aes_load_keys(group.keys, group.class, group.count, 0),
        CryptoStatus::Success
    );

    let vector = &TEST_VECTORS[13];
    assert_eq!(vector.class, KeySizeClass::Aes256);
    assert_eq!(
        accelerator.cbc_mac_auth_start(vector.key_area, vector.mdata, HANDLE),
        CryptoStatus::Success
    );
    let event = events.recv().await.unwrap();
    assert_eq!(event.handle, HANDLE);
    assert!(accelerator.cbc_mac_auth_check_status());

    let mut mac = [0u8; CBC_MAC_MAC_LEN];
    assert_eq!(
        accelerator.cbc_mac_auth_get_result(None, &mut mac),
        CryptoStatus::Success
    );
    assert_eq!(mac, vector.mac);
}

#[test]
#[serial]
fn start_needs_a_runtime() {
    let accelerator = test_accelerator();
    assert_eq!(accelerator.crypto_init(), CryptoStatus::Success);
    load_128_bit_keys(&accelerator);

    assert_eq!(
        accelerator.cbc_mac_auth_start(0, TEST_VECTORS[0].mdata, HANDLE),
        CryptoStatus::ResourceInUse
    );
    assert!(!accelerator.is_busy());
}
