//! Known-answer AES-CBC-MAC vectors.
//!
//! Keys are grouped by size and loaded as a whole, starting at key area 0.
//! 128-bit keys take one area each; 192- and 256-bit keys take two, so the
//! vectors of those classes reference even areas only. The vector table is
//! ordered by key size class: the driver loads a group each time the class
//! changes from one vector to the next.

use super::{KeyGroup, KeySizeClass, TestVector};

const KEYS_128: &[u8] = &[
    0x1F, 0x8E, 0x49, 0x73, 0x95, 0x3F, 0x3F, 0xB0,
    0xBD, 0x6B, 0x16, 0x66, 0x2E, 0x9A, 0x3C, 0x17,
    0xB7, 0xF3, 0xC9, 0x57, 0x6E, 0x12, 0xDD, 0x0D,
    0xB6, 0x3E, 0x8F, 0x8F, 0xAC, 0x2B, 0x9A, 0x39,
    0x89, 0xA5, 0x53, 0x73, 0x04, 0x33, 0xF7, 0xE6,
    0xD6, 0x7D, 0x16, 0xD3, 0x73, 0xBD, 0x53, 0x60,
    0x2C, 0x14, 0x41, 0x37, 0x51, 0xC3, 0x1E, 0x27,
    0x30, 0x57, 0x0B, 0xA3, 0x36, 0x1C, 0x78, 0x6B,
    0x6A, 0x70, 0x82, 0xCF, 0x8C, 0xDA, 0x13, 0xEF,
    0xF4, 0x8C, 0x81, 0x58, 0xDD, 0xA2, 0x06, 0xAE,
    0x7B, 0x1A, 0xB9, 0x14, 0x4B, 0x02, 0x39, 0x31,
    0x5C, 0xD5, 0xEE, 0xC6, 0xC7, 0x56, 0x63, 0xBD,
    0xBA, 0xB0, 0xCC, 0xED, 0xDC, 0x0A, 0xBD, 0x63,
    0xE3, 0xF8, 0x2E, 0x9F, 0xBF, 0xF7, 0xB8, 0xAA,
    0x97, 0xA1, 0x02, 0x55, 0x29, 0xB9, 0x92, 0x5E,
    0x25, 0xBB, 0xE7, 0x87, 0x70, 0xCA, 0x2F, 0x99,
];

const KEYS_192: &[u8] = &[
    0xBA, 0x75, 0xF4, 0xD1, 0xD9, 0xD7, 0xCF, 0x7F,
    0x55, 0x14, 0x45, 0xD5, 0x6C, 0xC1, 0xA8, 0xAB,
    0x2A, 0x07, 0x8E, 0x15, 0xE0, 0x49, 0xDC, 0x2C,
    0x16, 0x2A, 0xD5, 0x0E, 0xE6, 0x4A, 0x07, 0x02,
    0xAA, 0x55, 0x1F, 0x57, 0x1D, 0xED, 0xC1, 0x6B,
    0x2C, 0x1B, 0x6A, 0x1E, 0x4D, 0x4B, 0x5E, 0xEE,
    0x8E, 0x27, 0x40, 0xFB, 0xA1, 0x57, 0xAE, 0xF2,
    0x42, 0x2E, 0x44, 0x23, 0x12, 0xD1, 0x5C, 0x14,
    0xD3, 0x12, 0x55, 0x36, 0x84, 0xFC, 0xDC, 0x15,
    0x50, 0x9B, 0xAF, 0x46, 0xFB, 0x9D, 0xE3, 0x42,
    0x81, 0xDA, 0xFC, 0xC3, 0xDB, 0x79, 0x59, 0x3B,
    0xFF, 0xA8, 0x42, 0x69, 0x04, 0x30, 0x26, 0x88,
];

const KEYS_256: &[u8] = &[
    0x6E, 0xD7, 0x6D, 0x2D, 0x97, 0xC6, 0x9F, 0xD1,
    0x33, 0x95, 0x89, 0x52, 0x39, 0x31, 0xF2, 0xA6,
    0xCF, 0xF5, 0x54, 0xB1, 0x5F, 0x73, 0x8F, 0x21,
    0xEC, 0x72, 0xDD, 0x97, 0xA7, 0x33, 0x09, 0x07,
    0x48, 0xBE, 0x59, 0x7E, 0x63, 0x2C, 0x16, 0x77,
    0x23, 0x24, 0xC8, 0xD3, 0xFA, 0x1D, 0x9C, 0x5A,
    0x9E, 0xCD, 0x01, 0x0F, 0x14, 0xEC, 0x5D, 0x11,
    0x0D, 0x3B, 0xFE, 0xC3, 0x76, 0xC5, 0x53, 0x2B,
    0x43, 0xE9, 0x53, 0xB2, 0xAE, 0xA0, 0x8A, 0x3A,
    0xD5, 0x2D, 0x18, 0x2F, 0x58, 0xC7, 0x2B, 0x9C,
    0x60, 0xFB, 0xE4, 0xA9, 0xCA, 0x46, 0xA3, 0xCB,
    0x89, 0xE3, 0x86, 0x38, 0x45, 0xE2, 0x2C, 0x9E,
    0x87, 0x72, 0x5B, 0xD4, 0x3A, 0x45, 0x60, 0x88,
    0x14, 0x18, 0x07, 0x73, 0xF0, 0xE7, 0xAB, 0x95,
    0xA3, 0xC8, 0x59, 0xD8, 0x3A, 0x21, 0x30, 0xE8,
    0x84, 0x19, 0x0E, 0x44, 0xD1, 0x4C, 0x69, 0x96,
];

/// Key groups, one per key size class
pub static KEY_GROUPS: [KeyGroup; 3] = [
    KeyGroup {
        class: KeySizeClass::Aes128,
        keys: KEYS_128,
        count: 8,
    },
    KeyGroup {
        class: KeySizeClass::Aes192,
        keys: KEYS_192,
        count: 4,
    },
    KeyGroup {
        class: KeySizeClass::Aes256,
        keys: KEYS_256,
        count: 4,
    },
];

/// The key group holding the keys of `class`
pub fn key_group(class: KeySizeClass) -> &'static KeyGroup {
    match class {
        KeySizeClass::Aes128 => &KEY_GROUPS[0],
        KeySizeClass::Aes192 => &KEY_GROUPS[1],
        KeySizeClass::Aes256 => &KEY_GROUPS[2],
    }
}

/// Test vectors, grouped by key size class
pub static TEST_VECTORS: [TestVector; 16] = [
    TestVector {
        class: KeySizeClass::Aes128,
        key_area: 0,
        mdata: &[
            0x45, 0xCF, 0x12, 0x96, 0x4F, 0xC8, 0x24, 0xAB,
            0x76, 0x61, 0x6A, 0xE2, 0xF4, 0xBF, 0x08, 0x22,
        ],
        mac: [
            0x97, 0x67, 0x0C, 0x83, 0x99, 0x24, 0xA4, 0xC6,
            0x15, 0xB0, 0xF6, 0x14, 0xAE, 0x75, 0xA8, 0x69,
        ],
    },
    TestVector {
        class: KeySizeClass::Aes128,
        key_area: 1,
        mdata: &[
            0x9A, 0xC1, 0x99, 0x54, 0xCE, 0x13, 0x19, 0xB3,
            0x54, 0xD3, 0x22, 0x04, 0x60, 0xF7, 0x1C, 0x1E,
            0x37, 0x3F, 0x1C, 0xD3, 0x36, 0x24, 0x08, 0x81,
            0x16, 0x0C, 0xFD, 0xE4, 0x6E, 0xBF, 0xED, 0x2E,
            0x79, 0x1E, 0x8D, 0x5A, 0x1A, 0x13, 0x6E, 0xBD,
            0x1D, 0xC4, 0x69, 0xDE, 0xC0, 0x0C, 0x41, 0x87,
            0x72, 0x2B, 0x84, 0x1C, 0xDA, 0xBC, 0xB2, 0x2C,
            0x1B, 0xE8, 0xA1, 0x46, 0x57, 0xDA, 0x20, 0x0E,
        ],
        mac: [
            0x9D, 0x15, 0xB9, 0xFB, 0xFF, 0xE2, 0x32, 0x97,
            0x56, 0x36, 0x36, 0x6D, 0x13, 0x65, 0x78, 0xB5,
        ],
    },
    TestVector {
        class: KeySizeClass::Aes128,
        key_area: 2,
        mdata: &[
            0x80, 0x7B, 0xC4, 0xEA, 0x68, 0x4E, 0xED, 0xCF,
            0xDC, 0xCA, 0x30, 0x18, 0x06, 0x80, 0xB0, 0xF1,
            0xAE, 0x28, 0x14, 0xF3, 0x5F, 0x36, 0xD0, 0x53,
            0xC5, 0xAE, 0xA6, 0x59, 0x5A, 0x38, 0x6C, 0x14,
            0x42, 0x77, 0x0F, 0x4D, 0x72, 0x97, 0xD8, 0xB9,
            0x18, 0x25, 0xEE, 0x72, 0x37, 0x24, 0x1D, 0xA8,
            0x92, 0x5D, 0xD5, 0x94, 0xCC, 0xF6, 0x76, 0xAE,
            0xCD, 0x46, 0xCA, 0x20, 0x68, 0xE8, 0xD3, 0x7A,
            0x3A, 0x0E, 0xC8, 0xA7, 0xD5, 0x18, 0x5A, 0x20,
            0x1E, 0x66, 0x3B, 0x5F, 0xF3, 0x6A, 0xE1, 0x97,
            0x11, 0x01, 0x88, 0xA2, 0x35, 0x03, 0x76, 0x3B,
            0x82, 0x18, 0x82, 0x6D, 0x23, 0xCE, 0xD7, 0x4B,
            0x31, 0xE9, 0xF6, 0xE2, 0xD7, 0xFB, 0xFA, 0x6C,
            0xB4, 0x34, 0x20, 0xC7, 0x80, 0x7A, 0x86, 0x25,
        ],
        mac: [
            0x5F, 0x4F, 0x06, 0xE0, 0x62, 0x65, 0xF2, 0xEB,
            0x16, 0x1C, 0xDA, 0x9F, 0x30, 0xE9, 0x79, 0x53,
        ],
    },
    TestVector {
        class: KeySizeClass::Aes128,
        key_area: 3,
        mdata: &[
            0x40, 0xD9, 0x30, 0xF9, 0xA0, 0x53, 0x34, 0xD9,
            0x81, 0x6F, 0xE2, 0x04, 0x99, 0x9C, 0x3F, 0x82,
            0xA0, 0x3F, 0x6A, 0x04, 0x57, 0xA8, 0xC4, 0x75,
            0xC9, 0x45, 0x53, 0xD1, 0xD1, 0x16, 0x69, 0x3A,
            0xDC, 0x61, 0x80, 0x49, 0xF0, 0xA7, 0x69, 0xA2,
            0xEE, 0xD6, 0xA6, 0xCB, 0x14, 0xC0, 0x14, 0x3E,
            0xC5, 0xCC, 0xCD, 0xBC, 0x8D, 0xEC, 0x4C, 0xE5,
            0x60, 0xCF, 0xD2, 0x06, 0x22, 0x57, 0x09, 0x32,
            0x6D, 0x4D, 0xE7, 0x94, 0x8E, 0x54, 0xD6, 0x03,
            0xD0, 0x1B, 0x12, 0xD7, 0xFE, 0xD7, 0x52, 0xFB,
            0x23, 0xF1, 0xAA, 0x44, 0x94, 0xFB, 0xB0, 0x01,
            0x30, 0xE9, 0xDE, 0xD4, 0xE7, 0x7E, 0x37, 0xC0,
            0x79, 0x04, 0x2D, 0x82, 0x80, 0x40, 0xC3, 0x25,
            0xB1, 0xA5, 0xEF, 0xD1, 0x5F, 0xC8, 0x42, 0xE4,
            0x40, 0x14, 0xCA, 0x43, 0x74, 0xBF, 0x38, 0xF3,
            0xC3, 0xFC, 0x3E, 0xE3, 0x27, 0x73, 0x3B, 0x0C,
            0x8A, 0xEE, 0x1A, 0xBC, 0xD0, 0x55, 0x77, 0x2F,
            0x18, 0xDC, 0x04, 0x60, 0x3F, 0x7B, 0x2C, 0x1E,
            0xA6, 0x9F, 0xF6, 0x62, 0x36, 0x1F, 0x2B, 0xE0,
            0xA1, 0x71, 0xBB, 0xDC, 0xEA, 0x1E, 0x5D, 0x3F,
        ],
        mac: [
            0xDA, 0x15, 0x2D, 0xF1, 0xF5, 0x6A, 0x44, 0x0E,
            0x1C, 0x7E, 0x27, 0x80, 0xED, 0x87, 0xD9, 0x3D,
        ],
    },
    TestVector {
        class: KeySizeClass::Aes128,
        key_area: 4,
        mdata: &[
            0xF8, 0xEB, 0x31, 0xB3, 0x1E, 0x37, 0x4E, 0x96,
            0x00, 0x30, 0xCD, 0x1C, 0xAD, 0xB0, 0xEF, 0x0C,
        ],
        mac: [
            0x11, 0x0B, 0x18, 0xDB, 0xE0, 0x97, 0x56, 0x39,
            0xF7, 0x1D, 0x87, 0x7D, 0x6D, 0x07, 0x27, 0x55,
        ],
    },
    TestVector {
        class: KeySizeClass::Aes128,
        key_area: 5,
        mdata: &[
            0xD3, 0xF8, 0x9B, 0x71, 0xE0, 0x33, 0x07, 0x0F,
            0x9D, 0x75, 0x16, 0xA6, 0xCB, 0x4E, 0xA5, 0xEF,
            0x51, 0xD6, 0xFB, 0x63, 0xD4, 0xF0, 0xFE, 0xA0,
            0x89, 0xD0, 0xA6, 0x0E, 0x47, 0xBB, 0xB3, 0xC2,
            0xE1, 0x0E, 0x9B, 0xA3, 0xB2, 0x82, 0xC7, 0xCB,
            0x79, 0xAE, 0xFE, 0x30, 0x68, 0xCE, 0x22, 0x83,
            0x77, 0xC2, 0x1A, 0x58, 0xFE, 0x5A, 0x0F, 0x88,
            0x83, 0xD0, 0xDB, 0xD3, 0xD0, 0x96, 0xBE, 0xCA,
        ],
        mac: [
            0x6D, 0x91, 0x75, 0x52, 0x10, 0xCC, 0x69, 0x4A,
            0xDE, 0x6C, 0xF6, 0xA0, 0xCD, 0x2D, 0x51, 0x8E,
        ],
    },
    TestVector {
        class: KeySizeClass::Aes128,
        key_area: 6,
        mdata: &[
            0xC6, 0x5B, 0x94, 0xB1, 0xF2, 0x91, 0xFA, 0x9F,
            0x06, 0x00, 0xF2, 0x2C, 0x3C, 0x04, 0x32, 0xC8,
            0x95, 0xAD, 0x5D, 0x17, 0x7B, 0xCC, 0xCC, 0x9E,
            0xA4, 0x4E, 0x8E, 0xC3, 0x39, 0xC9, 0xAD, 0xF4,
            0x38, 0x55, 0xB3, 0x26, 0x17, 0x9D, 0x6D, 0x81,
            0xAA, 0x36, 0xEF, 0x59, 0x46, 0x2F, 0xD8, 0x61,
            0x27, 0xE9, 0xD8, 0x1B, 0x0F, 0x28, 0x6F, 0x93,
            0x30, 0x6B, 0xF7, 0x4D, 0x4C, 0x79, 0xE4, 0x7C,
            0x1B, 0x3D, 0x4B, 0x74, 0xED, 0xD3, 0xA1, 0x62,
            0x90, 0xE3, 0xC6, 0x3B, 0x74, 0x2E, 0x41, 0xF2,
            0x0D, 0x66, 0xCE, 0xEE, 0x79, 0x43, 0x16, 0xBB,
            0x63, 0xD3, 0xBD, 0x00, 0x27, 0x12, 0xA1, 0xB1,
            0x36, 0xBA, 0x61, 0x85, 0xBD, 0x5C, 0x1D, 0xAB,
            0x81, 0xB0, 0x7D, 0xB9, 0x0D, 0x2A, 0xF5, 0xE5,
        ],
        mac: [
            0x47, 0x12, 0x32, 0xDC, 0x47, 0xCA, 0x7E, 0xE2,
            0xD8, 0xD6, 0x43, 0x6C, 0xE5, 0x75, 0x03, 0xB9,
        ],
    },
    TestVector {
        class: KeySizeClass::Aes128,
        key_area: 7,
        mdata: &[
            0x22, 0xCD, 0xC3, 0x30, 0x6F, 0xCD, 0x4D, 0x31,
            0xCC, 0xD3, 0x27, 0x20, 0xCB, 0xB6, 0x1B, 0xAD,
            0x28, 0xD8, 0x55, 0x67, 0x06, 0x57, 0xC4, 0x8C,
            0x7B, 0x88, 0xC3, 0x1F, 0x4F, 0xA1, 0xF9, 0x3C,
            0x01, 0xB5, 0x7D, 0xA9, 0x0B, 0xE6, 0x3E, 0xAD,
            0x67, 0xD6, 0xA3, 0x25, 0x52, 0x5E, 0x6E, 0xD4,
            0x50, 0x83, 0xE6, 0xFB, 0x70, 0xA5, 0x35, 0x29,
            0xD1, 0xFA, 0x0F, 0x55, 0x65, 0x3B, 0x94, 0x2A,
            0xF5, 0x9D, 0x78, 0xA2, 0x66, 0x03, 0x61, 0xD6,
            0x3A, 0x72, 0x90, 0x15, 0x5A, 0xC5, 0xC4, 0x33,
            0x12, 0xA2, 0x5B, 0x23, 0x5D, 0xAC, 0xBB, 0xC8,
            0x63, 0xFA, 0xF0, 0x09, 0x40, 0xC9, 0x96, 0x24,
            0x07, 0x6D, 0xFA, 0x44, 0x06, 0x8E, 0x7C, 0x55,
            0x4C, 0x90, 0x38, 0x17, 0x69, 0x53, 0xE5, 0x71,
            0x75, 0x1D, 0xFC, 0x09, 0x54, 0xD4, 0x1D, 0x11,
            0x37, 0x71, 0xB0, 0x64, 0x66, 0xB1, 0xC8, 0xD1,
            0x3E, 0x0D, 0x4C, 0xB6, 0x75, 0xED, 0x58, 0xD1,
            0xA6, 0x19, 0xE1, 0x54, 0x09, 0x70, 0x98, 0x37,
            0x81, 0xDC, 0x11, 0xD2, 0xDD, 0x85, 0x25, 0xAB,
            0x57, 0x45, 0x95, 0x8D, 0x61, 0x5D, 0xEF, 0xDA,
        ],
        mac: [
            0xE9, 0xAE, 0x7E, 0x63, 0x54, 0x23, 0xC3, 0x66,
            0xD5, 0x23, 0xF9, 0x7C, 0x0E, 0xDB, 0x18, 0xB0,
        ],
    },
    TestVector {
        class: KeySizeClass::Aes192,
        key_area: 0,
        mdata: &[
            0xC5, 0x1F, 0xC2, 0x76, 0x77, 0x4D, 0xAD, 0x94,
            0xBC, 0xDC, 0x1D, 0x28, 0x91, 0xEC, 0x86, 0x68,
        ],
        mac: [
            0x40, 0xD1, 0x7F, 0x9A, 0x6F, 0x5B, 0xC6, 0xAF,
            0x34, 0x1E, 0x6A, 0xC5, 0xE4, 0x9E, 0x71, 0xAD,
        ],
    },
    TestVector {
        class: KeySizeClass::Aes192,
        key_area: 2,
        mdata: &[
            0xBE, 0x8A, 0xBF, 0x00, 0x90, 0x13, 0x63, 0x98,
            0x7A, 0x82, 0xCC, 0x77, 0xD0, 0xEC, 0x91, 0x69,
            0x7B, 0xA3, 0x85, 0x7F, 0x9E, 0x4F, 0x84, 0xBD,
            0x79, 0x40, 0x6C, 0x13, 0x8D, 0x02, 0x69, 0x8F,
            0x00, 0x32, 0x76, 0xD0, 0x44, 0x91, 0x20, 0xBE,
            0xF4, 0x57, 0x8D, 0x78, 0xFE, 0xCA, 0xBE, 0x8E,
            0x07, 0x0E, 0x11, 0x71, 0x0B, 0x3F, 0x0A, 0x27,
            0x44, 0xBD, 0x52, 0x43, 0x4E, 0xC7, 0x00, 0x15,
            0x88, 0x4C, 0x18, 0x1E, 0xBD, 0xFD, 0x51, 0xC6,
            0x04, 0xA7, 0x1C, 0x52, 0xE4, 0xC0, 0xE1, 0x10,
            0xBC, 0x40, 0x8C, 0xD4, 0x62, 0xB2, 0x48, 0xA8,
            0x0B, 0x8A, 0x8A, 0xC0, 0x6B, 0xB9, 0x52, 0xAC,
            0x1D, 0x7F, 0xAE, 0xD1, 0x44, 0x80, 0x7F, 0x1A,
            0x73, 0x1B, 0x7F, 0xEB, 0xCA, 0xF7, 0x83, 0x57,
            0x62, 0xDE, 0xFE, 0x92, 0xEC, 0xCF, 0xC7, 0xA9,
            0x94, 0x4E, 0x1C, 0x70, 0x2C, 0xFF, 0xE6, 0xBC,
            0x86, 0x73, 0x3E, 0xD3, 0x21, 0x42, 0x31, 0x21,
            0x08, 0x5A, 0xC0, 0x2D, 0xF8, 0x96, 0x2B, 0xCB,
            0xC1, 0x93, 0x70, 0x92, 0xEE, 0xBF, 0x0E, 0x90,
            0xA8, 0xB2, 0x0E, 0x3D, 0xD8, 0xC2, 0x44, 0xAE,
        ],
        mac: [
            0xEA, 0x57, 0x08, 0xB7, 0x8B, 0xF0, 0x51, 0xD6,
            0x94, 0xEB, 0x37, 0x01, 0xCA, 0x6B, 0xD5, 0x7B,
        ],
    },
    TestVector {
        class: KeySizeClass::Aes192,
        key_area: 4,
        mdata: &[
            0x39, 0xA9, 0xB4, 0x2D, 0xE1, 0x9E, 0x51, 0x2A,
            0xB7, 0xF3, 0x04, 0x35, 0x64, 0xC3, 0x51, 0x5A,
        ],
        mac: [
            0xA8, 0xD9, 0x3D, 0x9E, 0x1C, 0x14, 0xE4, 0x1E,
            0xA3, 0xF0, 0xAA, 0x50, 0xA4, 0xA3, 0x26, 0x09,
        ],
    },
    TestVector {
        class: KeySizeClass::Aes192,
        key_area: 6,
        mdata: &[
            0x69, 0x28, 0x29, 0x9C, 0x52, 0xB4, 0xF0, 0x47,
            0x92, 0x6F, 0x8A, 0x54, 0x15, 0x29, 0xDA, 0x2D,
            0x6B, 0xBA, 0xA3, 0x99, 0x14, 0x3C, 0xED, 0x8E,
            0xFB, 0x77, 0xAB, 0x47, 0x40, 0x9D, 0x9A, 0x95,
            0x3A, 0x38, 0x6C, 0x7A, 0xBD, 0x60, 0x26, 0xF4,
            0x98, 0x31, 0xC7, 0x17, 0x62, 0x7C, 0x2A, 0x5E,
            0x77, 0xBD, 0x2D, 0x43, 0x3D, 0x4D, 0x13, 0x0D,
            0xAC, 0xD9, 0x27, 0xEA, 0x0D, 0x13, 0xA2, 0x3D,
            0x01, 0xA7, 0xCF, 0x39, 0xC6, 0x71, 0x6D, 0xAF,
            0xB6, 0xED, 0x55, 0x24, 0x10, 0xEF, 0x5D, 0x27,
            0xFB, 0x94, 0x7B, 0xE2, 0xC8, 0x78, 0x2E, 0xEE,
            0x78, 0x29, 0x19, 0x6C, 0x7E, 0xDC, 0xF1, 0x51,
            0xC6, 0x5F, 0x9A, 0x01, 0xF5, 0x4F, 0x8D, 0x20,
            0xF3, 0x8B, 0x7D, 0xA4, 0xA7, 0xE8, 0x3A, 0x2F,
            0x01, 0x27, 0xD5, 0x9D, 0x3E, 0x24, 0x05, 0xD8,
            0x67, 0x4F, 0xC9, 0xF4, 0x1B, 0x60, 0x4F, 0x78,
            0x8F, 0x47, 0x15, 0xF9, 0xD3, 0x62, 0x4E, 0xEE,
            0x57, 0xF3, 0x87, 0xBF, 0xAD, 0xD1, 0x8A, 0x1F,
            0x90, 0x5E, 0x83, 0x9C, 0x26, 0xB8, 0x61, 0x74,
            0x82, 0x34, 0x7F, 0xAB, 0x6D, 0x08, 0x84, 0x5A,
        ],
        mac: [
            0x69, 0x27, 0xE7, 0xFB, 0x4C, 0xB9, 0x9D, 0x9C,
            0x54, 0xE2, 0x7F, 0x1C, 0x76, 0x20, 0xA0, 0x07,
        ],
    },
    TestVector {
        class: KeySizeClass::Aes256,
        key_area: 0,
        mdata: &[
            0x62, 0x82, 0xB8, 0xC0, 0x5C, 0x5C, 0x15, 0x30,
            0xB9, 0x7D, 0x48, 0x16, 0xCA, 0x43, 0x47, 0x62,
        ],
        mac: [
            0xA1, 0x07, 0x61, 0x82, 0xC1, 0xF4, 0x33, 0xC3,
            0xDA, 0xFB, 0xE1, 0x1D, 0x3E, 0x71, 0xDD, 0x8A,
        ],
    },
    TestVector {
        class: KeySizeClass::Aes256,
        key_area: 2,
        mdata: &[
            0x0C, 0x63, 0xD4, 0x13, 0xD3, 0x86, 0x45, 0x70,
            0xE7, 0x0B, 0xB6, 0x61, 0x8B, 0xF8, 0xA4, 0xB9,
            0x58, 0x55, 0x86, 0x68, 0x8C, 0x32, 0xBB, 0xA0,
            0xA5, 0xEC, 0xC1, 0x36, 0x2F, 0xAD, 0xA7, 0x4A,
            0xDA, 0x32, 0xC5, 0x2A, 0xCF, 0xD1, 0xAA, 0x74,
            0x44, 0xBA, 0x56, 0x7B, 0x4E, 0x7D, 0xAA, 0xEC,
            0xF7, 0xCC, 0x1C, 0xB2, 0x91, 0x82, 0xAF, 0x16,
            0x4A, 0xE5, 0x23, 0x2B, 0x00, 0x28, 0x68, 0x69,
            0x56, 0x35, 0x59, 0x98, 0x07, 0xA9, 0xA7, 0xF0,
            0x7A, 0x1F, 0x13, 0x7E, 0x97, 0xB1, 0xE1, 0xC9,
            0xDA, 0xBC, 0x89, 0xB6, 0xA5, 0xE4, 0xAF, 0xA9,
            0xDB, 0x58, 0x55, 0xED, 0xAA, 0x57, 0x50, 0x56,
            0xA8, 0xF4, 0xF8, 0x24, 0x22, 0x16, 0x24, 0x2B,
            0xB0, 0xC2, 0x56, 0x31, 0x0D, 0x9D, 0x32, 0x98,
            0x26, 0xAC, 0x35, 0x3D, 0x71, 0x5F, 0xA3, 0x9F,
            0x80, 0xCE, 0xC1, 0x44, 0xD6, 0x42, 0x45, 0x58,
            0xF9, 0xF7, 0x0B, 0x98, 0xC9, 0x20, 0x09, 0x6E,
            0x0F, 0x2C, 0x85, 0x5D, 0x59, 0x48, 0x85, 0xA0,
            0x06, 0x25, 0x88, 0x0E, 0x9D, 0xFB, 0x73, 0x41,
            0x63, 0xCE, 0xCE, 0xF7, 0x2C, 0xF0, 0x30, 0xB8,
        ],
        mac: [
            0xF2, 0xB7, 0x45, 0x13, 0xD6, 0xCF, 0x2D, 0x80,
            0xE6, 0x72, 0xB8, 0x37, 0x45, 0xFA, 0xDC, 0x0F,
        ],
    },
    TestVector {
        class: KeySizeClass::Aes256,
        key_area: 4,
        mdata: &[
            0xD5, 0x1D, 0x19, 0xDE, 0xD5, 0xCA, 0x4A, 0xE1,
            0x4B, 0x2B, 0x20, 0xB0, 0x27, 0xFF, 0xB0, 0x20,
        ],
        mac: [
            0xB0, 0x52, 0xA1, 0xDF, 0xE6, 0xA4, 0x8E, 0x63,
            0x43, 0x23, 0xDC, 0xAA, 0x85, 0xFA, 0xDA, 0x3C,
        ],
    },
    TestVector {
        class: KeySizeClass::Aes256,
        key_area: 6,
        mdata: &[
            0x5B, 0x97, 0xA9, 0xD4, 0x23, 0xF4, 0xB9, 0x74,
            0x13, 0xF3, 0x88, 0xD9, 0xA3, 0x41, 0xE7, 0x27,
            0xBB, 0x33, 0x9F, 0x8E, 0x18, 0xA3, 0xFA, 0xC2,
            0xF2, 0xFB, 0x85, 0xAB, 0xDC, 0x8F, 0x13, 0x5D,
            0xEB, 0x30, 0x05, 0x4A, 0x1A, 0xFD, 0xC9, 0xB6,
            0xED, 0x7D, 0xA1, 0x6C, 0x55, 0xEB, 0xA6, 0xB0,
            0xD4, 0xD1, 0x0C, 0x74, 0xE1, 0xD9, 0xA7, 0xCF,
            0x8E, 0xDF, 0xAE, 0xAA, 0x68, 0x4A, 0xC0, 0xBD,
            0x9F, 0x9D, 0x24, 0xBA, 0x67, 0x49, 0x55, 0xC7,
            0x9D, 0xC6, 0xBE, 0x32, 0xAE, 0xE1, 0xC2, 0x60,
            0xB5, 0x58, 0xFF, 0x07, 0xE3, 0xA4, 0xD4, 0x9D,
            0x24, 0x16, 0x20, 0x11, 0xFF, 0x25, 0x4D, 0xB8,
            0xBE, 0x07, 0x8E, 0x8A, 0xD0, 0x7E, 0x64, 0x8E,
            0x6B, 0xF5, 0x67, 0x93, 0x76, 0xCB, 0x43, 0x21,
            0xA5, 0xEF, 0x01, 0xAF, 0xE6, 0xAD, 0x88, 0x16,
            0xFC, 0xC7, 0x63, 0x46, 0x69, 0xC8, 0xC4, 0x38,
            0x92, 0x95, 0xC9, 0x24, 0x1E, 0x45, 0xFF, 0xF3,
            0x9F, 0x32, 0x25, 0xF7, 0x74, 0x50, 0x32, 0xDA,
            0xEE, 0xBE, 0x99, 0xD4, 0xB1, 0x9B, 0xCB, 0x21,
            0x5D, 0x1B, 0xFD, 0xB3, 0x6E, 0xDA, 0x2C, 0x24,
        ],
        mac: [
            0xC9, 0xA0, 0x14, 0x60, 0xAA, 0x2F, 0x85, 0x25,
            0x88, 0x75, 0xA1, 0x76, 0xCC, 0x85, 0x46, 0xF9,
        ],
    },
];
