use serde::{Deserialize, Serialize};

/// One page of an offset-paginated listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Size of the whole collection, independent of the requested page
    pub total: u64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    pub(crate) fn from_count(items: Vec<T>, count: i64) -> Self {
        Self {
            items,
            total: u64::try_from(count).unwrap_or_default(),
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}
