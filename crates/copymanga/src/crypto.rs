use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::{
    payload::{self, Payload, IV_LEN},
    Error,
};

// create an alias for convenience
type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type Aes192CbcEnc = cbc::Encryptor<aes::Aes192>;
type Aes192CbcDec = cbc::Decryptor<aes::Aes192>;
type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

macro_rules! decrypt_with {
    ($cipher:ty, $key:expr, $iv:expr, $buf:expr) => {
        <$cipher>::new_from_slices($key, $iv)
            .map_err(|e| Error::DecryptionFailure(format!("{e}")))?
            .decrypt_padded_mut::<Pkcs7>($buf)
            .map_err(|e| Error::DecryptionFailure(format!("{e}")))?
    };
}

macro_rules! encrypt_with {
    ($cipher:ty, $key:expr, $iv:expr, $buf:expr, $len:expr) => {
        <$cipher>::new_from_slices($key, $iv)
            .map_err(|e| Error::DecryptionFailure(format!("{e}")))?
            .encrypt_padded_mut::<Pkcs7>($buf, $len)
            .map_err(|e| Error::DecryptionFailure(format!("{e}")))?
    };
}

fn check_lengths(key: &[u8], iv: &[u8]) -> Result<(), Error> {
    if !matches!(key.len(), 16 | 24 | 32) {
        return Err(Error::DecryptionFailure(format!(
            "unsupported key length {}",
            key.len()
        )));
    }
    if iv.len() != IV_LEN {
        return Err(Error::DecryptionFailure(format!(
            "iv must be {IV_LEN} bytes, got {}",
            iv.len()
        )));
    }

    Ok(())
}

/// AES-CBC decrypts `cipher_hex` and returns the PKCS#7 unpadded plaintext.
///
/// `key` and `iv` are used as their UTF-8 bytes. The key length picks
/// AES-128, AES-192 or AES-256.
pub fn decrypt(cipher_hex: &str, iv: &str, key: &str) -> Result<String, Error> {
    decrypt_bytes(payload::decode_hex(cipher_hex)?, iv, key)
}

/// Decrypts a payload produced by [`payload::split`].
pub fn decrypt_payload(payload: &Payload<'_>, key: &str) -> Result<String, Error> {
    decrypt_bytes(payload.ciphertext.clone(), payload.iv, key)
}

fn decrypt_bytes(mut buffer: Vec<u8>, iv: &str, key: &str) -> Result<String, Error> {
    let (key, iv) = (key.as_bytes(), iv.as_bytes());
    check_lengths(key, iv)?;
    trace!("ciphertext: {} bytes", buffer.len());

    let bytes = match key.len() {
        16 => decrypt_with!(Aes128CbcDec, key, iv, &mut buffer),
        24 => decrypt_with!(Aes192CbcDec, key, iv, &mut buffer),
        _ => decrypt_with!(Aes256CbcDec, key, iv, &mut buffer),
    }
    .to_vec();

    String::from_utf8(bytes).map_err(|e| Error::DecryptionFailure(format!("{e}")))
}

/// Inverse of [`decrypt`], returns the opaque `iv + hex(ciphertext)` string.
pub fn encrypt(plaintext: &str, iv: &str, key: &str) -> Result<String, Error> {
    let (key, iv_bytes) = (key.as_bytes(), iv.as_bytes());
    check_lengths(key, iv_bytes)?;

    let pos = plaintext.len();
    let mut buffer = vec![0_u8; pos + IV_LEN];
    buffer[..pos].copy_from_slice(plaintext.as_bytes());

    let ciphertext = match key.len() {
        16 => encrypt_with!(Aes128CbcEnc, key, iv_bytes, &mut buffer, pos),
        24 => encrypt_with!(Aes192CbcEnc, key, iv_bytes, &mut buffer, pos),
        _ => encrypt_with!(Aes256CbcEnc, key, iv_bytes, &mut buffer, pos),
    };

    Ok(format!("{iv}{}", hex::encode(ciphertext)))
}
