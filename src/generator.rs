//! The macro sequence builder.
//!
//! Produces a dispatch header plus one `#define` per index in `1..=max_index`.
//! Indices up to the split point spell out their brace list in full; every later
//! index refers to the definition just before it and appends one element.

use crate::config::GeneratorConfig;
use crate::errors::GenError;
use std::fmt;

/// One element of the generated initializer list.
pub const EMPTY_BRACE: &str = "{}";
/// Placed between consecutive elements.
pub const SEPARATOR: &str = " ,";

/// A symbolic macro identifier, `{prefix}_{index}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MacroName<'a> {
    pub prefix: &'a str,
    pub index: u32,
}

impl<'a> MacroName<'a> {
    #[must_use]
    pub fn new(prefix: &'a str, index: u32) -> Self {
        Self { prefix, index }
    }
}

impl fmt::Display for MacroName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.prefix, self.index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Regime {
    /// Body is the full list, no references.
    Explicit,
    /// Body is the previous definition's name plus one element.
    Recursive,
}

impl Regime {
    /// Regime of `index` for a given split point. Index 0 has no regime.
    #[must_use]
    pub fn of(index: u32, split: u32) -> Option<Regime> {
        match index {
            0 => None,
            i if i <= split => Some(Regime::Explicit),
            _ => Some(Regime::Recursive),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Regime::Explicit => "explicit",
            Regime::Recursive => "recursive",
        }
    }
}

/// A single generated definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Definition {
    pub index: u32,
    pub regime: Regime,
    pub name: String,
    pub body: String,
}

impl Definition {
    /// The `#define` line, without a trailing newline.
    #[must_use]
    pub fn line(&self) -> String {
        format!("#define {} {}", self.name, self.body)
    }
}

/// `len` empty-brace elements joined by [`SEPARATOR`].
#[must_use]
pub fn explicit_body(len: u32) -> String {
    let mut body = String::with_capacity(len as usize * (EMPTY_BRACE.len() + SEPARATOR.len()));
    for i in 0..len {
        if i > 0 {
            body.push_str(SEPARATOR);
        }
        body.push_str(EMPTY_BRACE);
    }
    body
}

/// Back-reference to `prior` followed by one more element.
#[must_use]
pub fn recursive_body(prior: MacroName<'_>) -> String {
    format!("{prior}{SEPARATOR}{EMPTY_BRACE}")
}

/// Builds definitions for a validated [`GeneratorConfig`].
#[derive(Clone, Debug)]
pub struct SequenceBuilder {
    config: GeneratorConfig,
}

impl SequenceBuilder {
    /// # Errors
    /// Returns a configuration error if the constants are inconsistent; nothing is generated.
    pub fn new(config: GeneratorConfig) -> Result<Self, GenError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    #[must_use]
    pub fn name(&self, index: u32) -> MacroName<'_> {
        MacroName::new(&self.config.prefix, index)
    }

    /// The selector line, `#define P(N) P_##N`.
    ///
    /// Consumers must only pass `N` in `1..=max_index`. Any other `N` pastes a
    /// name that is never defined; that misuse is not detected here and is the
    /// caller's contract violation.
    #[must_use]
    pub fn dispatch_header(&self) -> String {
        let p = &self.config.prefix;
        format!("#define {p}(N) {p}_##N")
    }

    /// The definition for `index`, or `None` outside `1..=max_index`.
    #[must_use]
    pub fn definition(&self, index: u32) -> Option<Definition> {
        if index > self.config.max_index {
            return None;
        }
        let regime = Regime::of(index, self.config.split)?;
        let body = match regime {
            Regime::Explicit => explicit_body(index),
            Regime::Recursive => recursive_body(self.name(index - 1)),
        };
        Some(Definition { index, regime, name: self.name(index).to_string(), body })
    }

    pub fn explicit(&self) -> impl Iterator<Item = Definition> + '_ {
        (1..=self.config.explicit_len()).filter_map(|i| self.definition(i))
    }

    pub fn recursive(&self) -> impl Iterator<Item = Definition> + '_ {
        (self.config.split..self.config.max_index).filter_map(|i| self.definition(i + 1))
    }

    #[must_use]
    pub fn build(&self) -> MacroSequence {
        let explicit: Vec<Definition> = self.explicit().collect();
        let recursive: Vec<Definition> = self.recursive().collect();
        debug_assert_eq!(explicit.len() + recursive.len(), self.config.max_index as usize);
        debug_assert!(explicit.iter().all(|d| d.regime == Regime::Explicit));
        debug_assert!(recursive.iter().all(|d| d.regime == Regime::Recursive));
        log::debug!(
            "built {} explicit and {} recursive definitions for {}",
            explicit.len(),
            recursive.len(),
            self.config.prefix
        );
        MacroSequence { header: self.dispatch_header(), explicit, recursive }
    }
}

/// The complete generated output, ordered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MacroSequence {
    pub header: String,
    pub explicit: Vec<Definition>,
    pub recursive: Vec<Definition>,
}

impl MacroSequence {
    /// All definitions, explicit first, by increasing index.
    pub fn definitions(&self) -> impl Iterator<Item = &Definition> {
        self.explicit.iter().chain(self.recursive.iter())
    }

    /// Output lines; blank separator lines are empty strings.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.explicit.len() + self.recursive.len() + 5);
        out.push(self.header.clone());
        if let (Some(first), Some(last)) = (self.explicit.first(), self.explicit.last()) {
            out.push(String::new());
            out.push(format!("// explicit definitions ({}-{})", first.index, last.index));
            out.extend(self.explicit.iter().map(Definition::line));
        }
        if let (Some(first), Some(last)) = (self.recursive.first(), self.recursive.last()) {
            out.push(String::new());
            out.push(format!("// recursive definitions ({}-{})", first.index, last.index));
            out.extend(self.recursive.iter().map(Definition::line));
        }
        out
    }

    /// The newline-terminated text that gets written out.
    #[must_use]
    pub fn render(&self) -> String {
        let mut text = String::new();
        for line in self.lines() {
            text.push_str(&line);
            text.push('\n');
        }
        text
    }
}
