// Output buffers and the trimmed series handed back to callers

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::functions::OutputKind;

/// Where an output is written.
///
/// `Fresh` allocates one sample per input position for the call; `Reuse`
/// writes into a caller buffer that must hold at least that many samples.
pub enum Buffer<'o, T> {
    Fresh,
    Reuse(&'o mut [T]),
}

impl<T> Default for Buffer<'_, T> {
    fn default() -> Self {
        Buffer::Fresh
    }
}

impl<T> fmt::Debug for Buffer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Buffer::Fresh => f.write_str("Fresh"),
            Buffer::Reuse(buf) => write!(f, "Reuse(len = {})", buf.len()),
        }
    }
}

pub(crate) enum Storage<'o, T> {
    Owned(Vec<T>),
    Borrowed(&'o mut [T]),
}

impl<'o, T: Copy + Default> Storage<'o, T> {
    pub(crate) fn from_buffer(buffer: Buffer<'o, T>, len: usize) -> Self {
        match buffer {
            Buffer::Fresh => Storage::Owned(vec![T::default(); len]),
            Buffer::Reuse(buf) => Storage::Borrowed(buf),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        match self {
            Storage::Owned(values) => values.len(),
            Storage::Borrowed(buf) => buf.len(),
        }
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        match self {
            Storage::Owned(values) => values.as_mut_ptr(),
            Storage::Borrowed(buf) => buf.as_mut_ptr(),
        }
    }
}

/// The valid range of one output.
///
/// Index `i` corresponds to input index `i + begin` of the call's [`Outcome`].
/// A series built from [`Buffer::Reuse`] borrows the caller's buffer.
pub struct Series<'o, T> {
    storage: Storage<'o, T>,
}

impl<'o, T> Series<'o, T> {
    /// Keeps the first `count` samples of `storage`.
    pub(crate) fn trimmed(storage: Storage<'o, T>, count: usize) -> Self {
        let storage = match storage {
            Storage::Owned(mut values) => {
                values.truncate(count);
                Storage::Owned(values)
            }
            Storage::Borrowed(buf) => Storage::Borrowed(&mut buf[..count]),
        };
        Series { storage }
    }

    pub fn as_slice(&self) -> &[T] {
        match &self.storage {
            Storage::Owned(values) => values,
            Storage::Borrowed(buf) => buf,
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.storage {
            Storage::Owned(values) => values,
            Storage::Borrowed(buf) => buf,
        }
    }

    /// Whether the samples live in a caller-supplied buffer.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.storage, Storage::Borrowed(_))
    }

    pub fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        match self.storage {
            Storage::Owned(values) => values,
            Storage::Borrowed(buf) => buf.to_vec(),
        }
    }
}

impl<T> Deref for Series<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Series<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Series<'_, T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for Series<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for Series<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<[T]> for Series<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Series<'_, T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Serialize> Serialize for Series<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

/// An output buffer of either sample kind.
#[derive(Debug)]
pub enum AnyBuffer<'o> {
    Real(Buffer<'o, f64>),
    Integer(Buffer<'o, i32>),
}

impl AnyBuffer<'_> {
    pub fn fresh(kind: OutputKind) -> Self {
        match kind {
            OutputKind::Real => AnyBuffer::Real(Buffer::Fresh),
            OutputKind::Integer => AnyBuffer::Integer(Buffer::Fresh),
        }
    }

    pub fn kind(&self) -> OutputKind {
        match self {
            AnyBuffer::Real(_) => OutputKind::Real,
            AnyBuffer::Integer(_) => OutputKind::Integer,
        }
    }

    pub fn is_reuse(&self) -> bool {
        matches!(
            self,
            AnyBuffer::Real(Buffer::Reuse(_)) | AnyBuffer::Integer(Buffer::Reuse(_))
        )
    }
}

impl<'o> From<Buffer<'o, f64>> for AnyBuffer<'o> {
    fn from(buffer: Buffer<'o, f64>) -> Self {
        AnyBuffer::Real(buffer)
    }
}

impl<'o> From<Buffer<'o, i32>> for AnyBuffer<'o> {
    fn from(buffer: Buffer<'o, i32>) -> Self {
        AnyBuffer::Integer(buffer)
    }
}

/// An output series of either sample kind.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnySeries<'o> {
    Real(Series<'o, f64>),
    Integer(Series<'o, i32>),
}

impl<'o> AnySeries<'o> {
    pub fn kind(&self) -> OutputKind {
        match self {
            AnySeries::Real(_) => OutputKind::Real,
            AnySeries::Integer(_) => OutputKind::Integer,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AnySeries::Real(series) => series.len(),
            AnySeries::Integer(series) => series.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_real(&self) -> Option<&[f64]> {
        match self {
            AnySeries::Real(series) => Some(series),
            AnySeries::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<&[i32]> {
        match self {
            AnySeries::Integer(series) => Some(series),
            AnySeries::Real(_) => None,
        }
    }
}

/// Sample types an output can hold.
pub trait Sample: Copy + Default + Send + Sync + fmt::Debug + 'static {
    const KIND: OutputKind;

    fn from_any(series: AnySeries<'_>) -> Option<Series<'_, Self>>;
}

impl Sample for f64 {
    const KIND: OutputKind = OutputKind::Real;

    fn from_any(series: AnySeries<'_>) -> Option<Series<'_, Self>> {
        match series {
            AnySeries::Real(series) => Some(series),
            AnySeries::Integer(_) => None,
        }
    }
}

impl Sample for i32 {
    const KIND: OutputKind = OutputKind::Integer;

    fn from_any(series: AnySeries<'_>) -> Option<Series<'_, Self>> {
        match series {
            AnySeries::Integer(series) => Some(series),
            AnySeries::Real(_) => None,
        }
    }
}

/// The result of one call: the trimmed outputs plus the shared valid range.
#[derive(Debug, PartialEq, Serialize)]
pub struct Outcome<T> {
    pub values: T,
    /// First input index with a valid output (the lookback).
    pub begin: usize,
    /// Number of valid samples in every output.
    pub count: usize,
}

impl<T> Outcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            values: f(self.values),
            begin: self.begin,
            count: self.count,
        }
    }
}
