use std::collections::HashMap;

use shared::{
    domain::{Bucket, ClassBreaksRenderer},
    error::InvalidSchemeError,
};

/// Ordered, non-overlapping buckets over one attribute field, looked up by
/// label. Immutable after construction.
#[derive(Debug, Clone)]
pub struct ClassificationScheme {
    field: String,
    buckets: Vec<Bucket>,
    by_label: HashMap<String, usize>,
}

impl ClassificationScheme {
    pub fn new(
        field: impl Into<String>,
        buckets: Vec<Bucket>,
    ) -> Result<Self, InvalidSchemeError> {
        let field = field.into();
        if field.trim().is_empty() {
            return Err(InvalidSchemeError::EmptyField);
        }
        if buckets.is_empty() {
            return Err(InvalidSchemeError::Empty);
        }

        let mut by_label = HashMap::with_capacity(buckets.len());
        let mut open_low: Option<&Bucket> = None;
        let mut previous: Option<&Bucket> = None;

        for (index, bucket) in buckets.iter().enumerate() {
            if bucket.label.is_empty() {
                return Err(InvalidSchemeError::EmptyLabel { index });
            }
            if by_label.insert(bucket.label.clone(), index).is_some() {
                return Err(InvalidSchemeError::DuplicateLabel {
                    label: bucket.label.clone(),
                });
            }

            match bucket.min_value {
                None => {
                    if let Some(first) = open_low {
                        return Err(InvalidSchemeError::MultipleOpenLow {
                            first: first.label.clone(),
                            second: bucket.label.clone(),
                        });
                    }
                    if index != 0 {
                        return Err(InvalidSchemeError::OpenLowNotFirst {
                            label: bucket.label.clone(),
                            index,
                        });
                    }
                    open_low = Some(bucket);
                }
                Some(min_value) => {
                    if min_value > bucket.max_value {
                        return Err(InvalidSchemeError::InvertedRange {
                            label: bucket.label.clone(),
                            min_value,
                            max_value: bucket.max_value,
                        });
                    }
                    if let Some(prev) = previous {
                        if min_value < prev.max_value {
                            return Err(InvalidSchemeError::OutOfOrder {
                                label: bucket.label.clone(),
                                previous: prev.label.clone(),
                                min_value,
                                previous_max: prev.max_value,
                            });
                        }
                    }
                }
            }
            previous = Some(bucket);
        }

        Ok(Self {
            field,
            buckets,
            by_label,
        })
    }

    pub fn from_renderer(renderer: &ClassBreaksRenderer) -> Result<Self, InvalidSchemeError> {
        Self::new(renderer.field.clone(), renderer.buckets().cloned().collect())
    }

    pub fn find_bucket(&self, label: &str) -> Option<&Bucket> {
        self.by_label.get(label).map(|&index| &self.buckets[index])
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/scheme_tests.rs"]
mod tests;
