use crate::Error;

/// Length of the initialization vector prefix, in characters
pub const IV_LEN: usize = 16;

/// An opaque payload split into its IV and decoded ciphertext
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload<'a> {
    pub iv: &'a str,
    pub ciphertext: Vec<u8>,
}

/// Splits `encrypted` after the first 16 characters.
///
/// The IV is taken as is (its characters are the IV bytes), the remainder
/// must be valid hex.
pub fn split(encrypted: &str) -> Result<Payload<'_>, Error> {
    let boundary = match encrypted.char_indices().nth(IV_LEN) {
        Some((pos, _)) => pos,
        None if encrypted.chars().count() == IV_LEN => encrypted.len(),
        None => {
            return Err(Error::MalformedPayload(format!(
                "expected at least {IV_LEN} characters, got {}",
                encrypted.chars().count()
            )));
        }
    };

    let (iv, cipher_hex) = encrypted.split_at(boundary);
    let ciphertext = decode_hex(cipher_hex)?;

    Ok(Payload { iv, ciphertext })
}

pub(crate) fn decode_hex(cipher_hex: &str) -> Result<Vec<u8>, Error> {
    hex::decode(cipher_hex).map_err(|e| Error::MalformedPayload(format!("{e}")))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_split() {
        let payload = split("abcdefghijklmnop00ff10").unwrap();

        assert_eq!(payload.iv, "abcdefghijklmnop");
        assert_eq!(payload.ciphertext, vec![0x00, 0xff, 0x10]);
    }

    #[test]
    fn test_split_iv_only() {
        let payload = split("abcdefghijklmnop").unwrap();

        assert_eq!(payload.iv, "abcdefghijklmnop");
        assert!(payload.ciphertext.is_empty());
    }

    #[test]
    fn test_split_too_short() {
        assert!(matches!(
            split("abcdefghijklmno"),
            Err(Error::MalformedPayload(_))
        ));
        assert!(matches!(split(""), Err(Error::MalformedPayload(_))));
    }

    #[test]
    fn test_split_invalid_hex() {
        assert!(matches!(
            split("abcdefghijklmnop00fg"),
            Err(Error::MalformedPayload(_))
        ));
        assert!(matches!(
            split("abcdefghijklmnop00f"),
            Err(Error::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_split_uppercase_hex() {
        let payload = split("abcdefghijklmnop00FF10Ab").unwrap();

        assert_eq!(payload.ciphertext, vec![0x00, 0xff, 0x10, 0xab]);
    }
}
