use thiserror::Error;

/// A sequence of values, each associated with a label.
///
/// Labels are typically timestamps or indices from an upstream solar
/// position calculation. Order is significant and preserved by every
/// operation; labels need not be unique.
///
/// # Example
///
/// ```
/// use airmass::Series;
///
/// let series = Series::new(vec!["dawn", "noon"], vec![89.5, 30.0]).unwrap();
/// assert_eq!(series.get(&"noon"), Some(30.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawSeries<L>",
        bound(deserialize = "L: serde::Deserialize<'de>")
    )
)]
pub struct Series<L> {
    labels: Vec<L>,
    values: Vec<f64>,
}

/// Error returned when labels and values have different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("series has {labels} labels but {values} values")]
    LengthMismatch { labels: usize, values: usize },
}

impl<L> Series<L> {
    /// Creates a series from parallel vectors of labels and values.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::LengthMismatch`] if the vectors differ in length.
    pub fn new(labels: Vec<L>, values: Vec<f64>) -> Result<Self, SeriesError> {
        if labels.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                labels: labels.len(),
                values: values.len(),
            });
        }
        Ok(Self { labels, values })
    }

    #[must_use]
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(label, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&L, f64)> {
        self.labels.iter().zip(self.values.iter().copied())
    }

    /// Returns the value for the first occurrence of `label`.
    pub fn get(&self, label: &L) -> Option<f64>
    where
        L: PartialEq,
    {
        self.iter().find(|(l, _)| *l == label).map(|(_, v)| v)
    }

    /// Consumes the series and returns its labels and values.
    #[must_use]
    pub fn into_parts(self) -> (Vec<L>, Vec<f64>) {
        (self.labels, self.values)
    }

    /// Returns a new series with `f` applied to each value and the same labels.
    #[must_use]
    pub fn map_values(&self, f: impl FnMut(f64) -> f64) -> Self
    where
        L: Clone,
    {
        Self {
            labels: self.labels.clone(),
            values: self.values.iter().copied().map(f).collect(),
        }
    }
}

impl<L> FromIterator<(L, f64)> for Series<L> {
    fn from_iter<I: IntoIterator<Item = (L, f64)>>(iter: I) -> Self {
        let (labels, values) = iter.into_iter().unzip();
        Self { labels, values }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSeries<L> {
    labels: Vec<L>,
    values: Vec<f64>,
}

#[cfg(feature = "serde")]
impl<L> TryFrom<RawSeries<L>> for Series<L> {
    type Error = SeriesError;

    fn try_from(raw: RawSeries<L>) -> Result<Self, Self::Error> {
        Self::new(raw.labels, raw.values)
    }
}
