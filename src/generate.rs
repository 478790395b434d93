use crate::config::{Mode, Request};

/// Run a resolved request against the operating system's entropy source.
///
/// The generated value itself is never logged.
pub fn generate(request: &Request) -> random_string::Result<String> {
    match &request.mode {
        Mode::Charset(alphabet) => {
            tracing::debug!(
                "Generating {} characters from an alphabet of {} ({:.2} bits per character)",
                request.length,
                alphabet.len(),
                alphabet.entropy_bits_per_char()
            );
            random_string::sample_alphabet(request.length, alphabet)
        }
        Mode::Bytes { raw } => {
            tracing::debug!("Generating {} bytes (raw: {})", request.length, raw);
            random_string::sample_bytes(request.length, *raw)
        }
    }
}
