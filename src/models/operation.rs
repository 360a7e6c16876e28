use crate::normalize::{canonicalize, redirect, NormalizeError};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Canonical,
    Redirection,
    All,
}

impl Operation {
    /// Runs the transformation this operation names against `url`.
    ///
    /// `All` canonicalizes first and then redirects the canonical form.
    pub fn apply(self, url: &str) -> Result<String, NormalizeError> {
        match self {
            Operation::Canonical => canonicalize(url),
            Operation::Redirection => redirect(url),
            Operation::All => canonicalize(url).and_then(|canonical| redirect(&canonical)),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Canonical => write!(f, "canonical"),
            Operation::Redirection => write!(f, "redirection"),
            Operation::All => write!(f, "all"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operation '{}'", self.0)
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "canonical" => Ok(Operation::Canonical),
            "redirection" => Ok(Operation::Redirection),
            "all" => Ok(Operation::All),
            other => Err(UnknownOperation(other.to_string())),
        }
    }
}
