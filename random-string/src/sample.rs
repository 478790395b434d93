use rand::rngs::OsRng;
use rand::RngCore;

use crate::{Alphabet, Error, Result};

/// Draw a value uniformly at random from `[0, bound)`.
///
/// 64-bit values are read from `rng` and the lowest `2^64 mod bound` of them are rejected, so
/// the accepted range is an exact multiple of `bound` and reducing modulo `bound` introduces no
/// bias. A failing read is returned as-is; no other source is tried.
pub fn uniform_index<R: RngCore + ?Sized>(rng: &mut R, bound: usize) -> Result<usize> {
    if bound == 0 {
        return Err(Error::EmptyAlphabet);
    }

    let bound = bound as u64;
    let threshold = bound.wrapping_neg() % bound;

    loop {
        let mut buf = [0u8; 8];
        rng.try_fill_bytes(&mut buf)?;
        let value = u64::from_le_bytes(buf);

        if value >= threshold {
            return Ok((value % bound) as usize);
        }
        tracing::trace!("rejected draw below threshold {}", threshold);
    }
}

/// Generate a random string with `length` characters drawn from `characters`.
pub fn random_string_with_characters<R: RngCore + ?Sized>(
    rng: &mut R,
    length: usize,
    characters: &[char],
) -> Result<String> {
    if characters.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    let mut string = String::new();
    string
        .try_reserve(length)
        .map_err(|_| Error::LengthTooLarge(length))?;
    for _ in 0..length {
        let idx = uniform_index(rng, characters.len())?;
        string.push(characters[idx]);
    }

    Ok(string)
}

/// Generate a random string of `length` characters over `alphabet`, using the operating
/// system's entropy source.
pub fn sample_charset(length: usize, alphabet: &str) -> Result<String> {
    sample_alphabet(length, &Alphabet::new(alphabet)?)
}

/// Like [sample_charset], for an alphabet that has already been built.
pub fn sample_alphabet(length: usize, alphabet: &Alphabet) -> Result<String> {
    random_string_with_characters(&mut OsRng, length, alphabet.characters())
}

/// Read `length` random bytes in a single batch.
pub fn random_bytes<R: RngCore + ?Sized>(rng: &mut R, length: usize) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(length)
        .map_err(|_| Error::LengthTooLarge(length))?;
    bytes.resize(length, 0);
    rng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}

/// Render bytes as zero-padded 8-digit binary tokens.
///
/// The grouped form is `[00000001 11111111]`. The raw form is one continuous string of
/// `8 * bytes.len()` binary digits.
pub fn render_bits(bytes: &[u8], raw: bool) -> String {
    let tokens: Vec<String> = bytes.iter().map(|byte| format!("{:08b}", byte)).collect();

    if raw {
        tokens.concat()
    } else {
        format!("[{}]", tokens.join(" "))
    }
}

/// Generate `length` random bytes from the operating system's entropy source and render them
/// as binary digits.
pub fn sample_bytes(length: usize, raw: bool) -> Result<String> {
    let bytes = random_bytes(&mut OsRng, length)?;
    Ok(render_bits(&bytes, raw))
}
