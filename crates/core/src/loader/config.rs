use std::path::PathBuf;

/// Which files to load and whether existing variables may be overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    files: Vec<PathBuf>,
    immutable: bool,
}

impl LoaderConfig {
    /// Load `files` in the given order; later files win.
    pub fn new<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            immutable: false,
        }
    }

    /// Never overwrite (or clear) a variable that already has a value.
    pub fn immutable(mut self, immutable: bool) -> Self {
        self.immutable = immutable;
        self
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn is_immutable(&self) -> bool {
        self.immutable
    }
}
