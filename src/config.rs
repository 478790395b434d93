use clap::Parser;
use random_string::{Alphabet, ClassSelection};

/// Generate cryptographically secure strings.
///
/// The default character set is '--all'.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Opts {
    /// Print character sets and exit
    #[arg(short = 'p', long)]
    pub print_sets: bool,
    /// Allow zero-length passwords (exiting with success)
    #[arg(short = 'z', long)]
    pub allow_zero: bool,
    /// Use all character sets (lower, numeric, special, upper)
    #[arg(short = 'A', long)]
    pub all: bool,
    /// Generate lowercase letters
    #[arg(short = 'L', long)]
    pub lower: bool,
    /// Generate numeric digits
    #[arg(short = 'N', long)]
    pub numeric: bool,
    /// Generate special characters
    #[arg(short = 'S', long)]
    pub special: bool,
    /// Generate uppercase letters
    #[arg(short = 'U', long)]
    pub upper: bool,
    /// Generate an array of bytes
    #[arg(short = 'b', long)]
    pub bytes: bool,
    /// Generate an array of bytes and print it as a raw string of bits
    #[arg(short = 'B', long)]
    pub raw_bytes: bool,
    /// Number of characters (or bytes) to generate
    #[arg(default_value_t = crate::DEFAULT_LENGTH)]
    pub length: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot generate zero-length string, try '--help'")]
    ZeroLength,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Charset(Alphabet),
    Bytes { raw: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub length: usize,
    pub mode: Mode,
}

/// What a single invocation should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    PrintSets,
    /// A zero-length request that was explicitly allowed.
    Empty,
    Generate(Request),
}

impl Opts {
    pub fn selection(&self) -> ClassSelection {
        ClassSelection {
            lower: self.lower,
            numeric: self.numeric,
            special: self.special,
            upper: self.upper,
        }
        .resolve(self.all)
    }

    /// Resolve the parsed flags into an action. No entropy is read here.
    pub fn resolve(&self) -> Result<Action, ConfigError> {
        if self.print_sets {
            return Ok(Action::PrintSets);
        }

        if self.length == 0 {
            return if self.allow_zero {
                Ok(Action::Empty)
            } else {
                Err(ConfigError::ZeroLength)
            };
        }

        let mode = if self.bytes || self.raw_bytes {
            Mode::Bytes {
                raw: self.raw_bytes,
            }
        } else {
            Mode::Charset(Alphabet::from_selection(self.selection()))
        };

        Ok(Action::Generate(Request {
            length: self.length,
            mode,
        }))
    }
}
