//! Cryptographically secure random strings and byte sequences.
//!
//! Strings are drawn from an [Alphabet] assembled out of fixed character classes. Every
//! character is selected uniformly at random using rejection sampling on top of the operating
//! system's entropy source, so no character is favoured over another, whatever the size of the
//! alphabet.

pub mod alphabet;
pub mod sample;

pub use alphabet::{build_alphabet, Alphabet, CharClass, ClassSelection};
pub use sample::{
    random_bytes, random_string_with_characters, render_bits, sample_alphabet, sample_bytes,
    sample_charset, uniform_index,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot sample from an empty alphabet")]
    EmptyAlphabet,
    #[error("cannot allocate a result of length {0}")]
    LengthTooLarge(usize),
    #[error("entropy source failed: {0}")]
    Entropy(#[from] rand::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
