/// What a read does with a chunk whose stored CRC is wrong.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub enum ChecksumPolicy {
    /// Keep going and treat the chunk like any other. Images from varied
    /// sources often carry stale CRCs, so this is the default.
    #[default]
    Tolerate,
    /// Fail with [`Error::ChecksumMismatch`](crate::Error::ChecksumMismatch).
    Reject,
}

/// Read option getter trait.
pub trait ReadOption {
    fn checksum(&self) -> ChecksumPolicy;
}

impl<T: ReadOption> ReadOption for &T {
    #[inline]
    fn checksum(&self) -> ChecksumPolicy {
        T::checksum(self)
    }
}

impl ReadOption for ReadOptions {
    #[inline]
    fn checksum(&self) -> ChecksumPolicy {
        self.checksum
    }
}

/// Options for reading metadata.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct ReadOptions {
    checksum: ChecksumPolicy,
}

impl ReadOptions {
    /// Returns a builder for [ReadOptions].
    ///
    /// # Examples
    /// ```rust
    /// use libpngmeta::ReadOptions;
    ///
    /// let builder = ReadOptions::builder();
    /// ```
    #[inline]
    pub const fn builder() -> ReadOptionsBuilder {
        ReadOptionsBuilder::new()
    }

    /// Converts [ReadOptions] into a [ReadOptionsBuilder].
    ///
    /// # Examples
    /// ```rust
    /// use libpngmeta::ReadOptions;
    ///
    /// let read_option = ReadOptions::builder().build();
    /// let builder = read_option.into_builder();
    /// ```
    #[inline]
    pub fn into_builder(self) -> ReadOptionsBuilder {
        self.into()
    }
}

/// A builder for creating [`ReadOptions`].
///
/// # Examples
///
/// ```
/// use libpngmeta::{ChecksumPolicy, ReadOptions};
///
/// let read_options = ReadOptions::builder()
///     .checksum(ChecksumPolicy::Reject)
///     .build();
/// ```
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct ReadOptionsBuilder {
    checksum: ChecksumPolicy,
}

impl From<ReadOptions> for ReadOptionsBuilder {
    #[inline]
    fn from(value: ReadOptions) -> Self {
        Self {
            checksum: value.checksum,
        }
    }
}

impl ReadOptionsBuilder {
    #[inline]
    const fn new() -> Self {
        Self {
            checksum: ChecksumPolicy::Tolerate,
        }
    }

    /// Sets how chunks with a wrong CRC are handled.
    #[inline]
    pub fn checksum(&mut self, policy: ChecksumPolicy) -> &mut Self {
        self.checksum = policy;
        self
    }

    /// Creates a new [`ReadOptions`].
    #[inline]
    pub fn build(&self) -> ReadOptions {
        ReadOptions {
            checksum: self.checksum,
        }
    }
}
