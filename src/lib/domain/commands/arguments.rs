//! Types and procedures that represents a command line argument,
//! or collections of command line arguments

use std::ffi::OsStr;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Type for represent a command line argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument(String);

impl Argument {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Argument {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Argument {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for Argument {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<&Path> for Argument {
    fn from(value: &Path) -> Self {
        Self(format!("{}", value.display()))
    }
}

impl From<PathBuf> for Argument {
    fn from(value: PathBuf) -> Self {
        Self::from(value.as_path())
    }
}

impl From<&PathBuf> for Argument {
    fn from(value: &PathBuf) -> Self {
        Self::from(value.as_path())
    }
}

impl Deref for Argument {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<OsStr> for Argument {
    fn as_ref(&self) -> &OsStr {
        OsStr::new(&self.0)
    }
}

impl PartialEq<str> for Argument {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Argument {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl core::fmt::Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strong type for represent a linear collection of [`Argument`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Arguments(Vec<Argument>);

impl Arguments {
    /// Returns a new collection of [`Argument`] with the specified capacity
    pub fn with_capacity(cap: usize) -> Self {
        Self(Vec::with_capacity(cap))
    }

    /// Creates and stores a new [`Argument`] to the end of this collection
    pub fn create_and_push<T>(&mut self, val: T)
    where
        T: Into<Argument>,
    {
        self.0.push(val.into())
    }

    /// Appends a new [`Argument`] to the end of this collection
    pub fn push(&mut self, arg: Argument) {
        self.0.push(arg)
    }

    /// Extends the underlying collection from any iterator of values convertible into [`Argument`]
    pub fn extend<T>(&mut self, iter: impl IntoIterator<Item = T>)
    where
        T: Into<Argument>,
    {
        self.0.extend(iter.into_iter().map(Into::into));
    }

    /// Borrowed view of every argument, handy for comparisons and logging
    pub fn as_strs(&self) -> Vec<&str> {
        self.0.iter().map(Argument::as_str).collect()
    }
}

impl Deref for Arguments {
    type Target = [Argument];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Arguments {
    type Item = Argument;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Into<Argument>> FromIterator<T> for Arguments {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl core::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_strs().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arguments_keep_insertion_order() {
        let mut args = Arguments::with_capacity(3);
        args.create_and_push("build");
        args.extend(["--dump-bir"]);
        args.push(Argument::from(Path::new("/tmp/main.bal")));

        assert_eq!(args.as_strs(), ["build", "--dump-bir", "/tmp/main.bal"]);
        assert_eq!(args.to_string(), "build --dump-bir /tmp/main.bal");
    }

    #[test]
    fn test_argument_compares_with_str() {
        let arg = Argument::from(String::from("--debug"));
        assert_eq!(arg, "--debug");
        assert_eq!(arg.len(), 7);
    }
}
