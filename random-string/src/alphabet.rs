use crate::{Error, Result};

/// A fixed class of characters that can be enabled in an alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Numeric,
    Special,
    Upper,
}

impl CharClass {
    /// All classes, in the order in which they are concatenated into an alphabet.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Numeric,
        CharClass::Special,
        CharClass::Upper,
    ];

    pub fn characters(self) -> &'static str {
        match self {
            CharClass::Lower => "abcdefghijklmnopqrstuvwxyz",
            CharClass::Numeric => "0123456789",
            CharClass::Special => "!@#$%^&*()-_=+`~[]{}\\|;:'\",.<>/?",
            CharClass::Upper => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
        }
    }

    /// Display name, as used when listing the character sets.
    pub fn name(self) -> &'static str {
        match self {
            CharClass::Lower => "Lower",
            CharClass::Numeric => "Numeric",
            CharClass::Special => "Special",
            CharClass::Upper => "Upper",
        }
    }
}

/// Which character classes are enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassSelection {
    pub lower: bool,
    pub numeric: bool,
    pub special: bool,
    pub upper: bool,
}

impl ClassSelection {
    pub fn all() -> Self {
        Self {
            lower: true,
            numeric: true,
            special: true,
            upper: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        !(self.lower || self.numeric || self.special || self.upper)
    }

    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lower => self.lower,
            CharClass::Numeric => self.numeric,
            CharClass::Special => self.special,
            CharClass::Upper => self.upper,
        }
    }

    /// Apply the defaulting rule: selecting nothing, or setting the `all` shortcut, selects
    /// every class.
    pub fn resolve(self, all: bool) -> Self {
        if all || self.is_empty() {
            Self::all()
        } else {
            self
        }
    }
}

/// The set of characters eligible for sampling. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    string: String,
    characters: Vec<char>,
}

impl Alphabet {
    /// Create an alphabet from an arbitrary, non-empty set of characters.
    pub fn new(characters: &str) -> Result<Self> {
        if characters.is_empty() {
            return Err(Error::EmptyAlphabet);
        }

        Ok(Self {
            string: characters.to_owned(),
            characters: characters.chars().collect(),
        })
    }

    /// Concatenate the enabled classes in class order. An empty selection is treated as
    /// selecting every class.
    pub fn from_selection(selection: ClassSelection) -> Self {
        let selection = selection.resolve(false);

        let string: String = CharClass::ALL
            .iter()
            .filter(|class| selection.contains(**class))
            .map(|class| class.characters())
            .collect();
        let characters = string.chars().collect();

        Self { string, characters }
    }

    pub fn as_str(&self) -> &str {
        &self.string
    }

    pub fn characters(&self) -> &[char] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Companion to [Alphabet::len]. Always false for alphabets built through [Alphabet::new]
    /// or [Alphabet::from_selection].
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Bits of entropy contributed by each uniformly sampled character.
    pub fn entropy_bits_per_char(&self) -> f64 {
        (self.len() as f64).log2()
    }

    pub fn into_string(self) -> String {
        self.string
    }
}

/// Build the working alphabet from the four class selectors.
pub fn build_alphabet(lower: bool, numeric: bool, special: bool, upper: bool) -> String {
    Alphabet::from_selection(ClassSelection {
        lower,
        numeric,
        special,
        upper,
    })
    .into_string()
}
