use log::trace;

use super::{CryptoStatus, KeyArea, KeySizeClass};
use super::{AES_KEY_AREA_SIZE, AES_KEY_STORE_AREAS};

const STORE_SIZE: usize = AES_KEY_STORE_AREAS as usize;

/// Model of the engine's AES key store: 8 areas of 128 bits.
/// The store is sized for one key class at a time; keys wider than 128 bits
/// span two adjacent areas and are addressed by the first, even one.
pub(crate) struct KeyStore {
    areas: [[u8; AES_KEY_AREA_SIZE]; STORE_SIZE],
    written: [bool; STORE_SIZE],
    key_size: Option<KeySizeClass>,
}

impl Default for KeyStore {
    fn default() -> KeyStore {
        KeyStore {
            areas: [[0; AES_KEY_AREA_SIZE]; STORE_SIZE],
            written: [false; STORE_SIZE],
            key_size: None,
        }
    }
}

impl KeyStore {
    /// Invalidate every area
    pub(crate) fn clear(&mut self) {
        self.areas = [[0; AES_KEY_AREA_SIZE]; STORE_SIZE];
        self.written = [false; STORE_SIZE];
        self.key_size = None;
    }

    /// Key size class the store is currently set up for
    pub(crate) fn key_size(&self) -> Option<KeySizeClass> {
        self.key_size
    }

    /// Write `count` keys starting at `start_area`. Switching to another key
    /// size invalidates all keys of the previous size.
    pub(crate) fn load(
        &mut self,
        keys: &[u8],
        key_size: KeySizeClass,
        count: u8,
        start_area: KeyArea,
    ) -> CryptoStatus {
        let span = key_size.areas_per_key();
        let end_area = start_area as usize + count as usize * span as usize;

        if count == 0
            || keys.len() != count as usize * key_size.key_bytes()
            || start_area % span != 0
            || end_area > STORE_SIZE
        {
            return CryptoStatus::InvalidParameter;
        }

        if self.key_size != Some(key_size) {
            self.clear();
            self.key_size = Some(key_size);
        }

        for (idx, key) in keys.chunks(key_size.key_bytes()).enumerate() {
            let first = start_area as usize + idx * span as usize;
            for (offset, part) in key.chunks(AES_KEY_AREA_SIZE).enumerate() {
                let area = &mut self.areas[first + offset];
                *area = [0; AES_KEY_AREA_SIZE];
                area[..part.len()].copy_from_slice(part);
            }
            for area in first..(first + span as usize) {
                self.written[area] = true;
            }
            trace!("{}-bit key written to area {}", key_size.bits(), first);
        }
        CryptoStatus::Success
    } // KeyStore::load()

    /// Key material held at `key_area`
    pub(crate) fn key(&self, key_area: KeyArea) -> Result<Vec<u8>, CryptoStatus> {
        if key_area >= AES_KEY_STORE_AREAS {
            return Err(CryptoStatus::InvalidParameter);
        }
        let key_size = match self.key_size {
            Some(val) => val,
            None => return Err(CryptoStatus::KeystoreReadError),
        };
        let span = key_size.areas_per_key() as usize;
        let first = key_area as usize;
        if first % span != 0 {
            return Err(CryptoStatus::InvalidParameter);
        }
        if !self.written[first..(first + span)].iter().all(|w| *w) {
            return Err(CryptoStatus::KeystoreReadError);
        }

        let mut key: Vec<u8> = self.areas[first..(first + span)].concat();
        key.truncate(key_size.key_bytes());
        Ok(key)
    } // KeyStore::key()
}
