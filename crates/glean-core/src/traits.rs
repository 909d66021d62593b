//! Field access for searchable items.
//!
//! This module provides the [`Searchable`] trait, the seam through which the
//! filter and the annotator read an item's text fields.

use crate::record::Record;

/// Trait for items whose text fields can be searched and highlighted.
///
/// [`Record`] implements it out of the box. Implement it for your own structs
/// to filter them directly, without converting to records first.
///
/// # Manual Implementation
///
/// ```
/// use glean_core::{RecordFilter, Searchable};
///
/// struct Post {
///     title: String,
///     summary: String,
///     views: u32,
/// }
///
/// impl Searchable for Post {
///     fn search_fields(&self) -> Vec<(&str, &str)> {
///         // `views` is not text, so it is left out.
///         vec![("title", self.title.as_str()), ("summary", self.summary.as_str())]
///     }
/// }
///
/// let posts = vec![
///     Post { title: "Hello".into(), summary: "first post".into(), views: 3 },
///     Post { title: "Again".into(), summary: "second".into(), views: 9 },
/// ];
///
/// let result = RecordFilter::new("POST").build().filter(&posts);
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].views, 3);
/// ```
pub trait Searchable {
    /// Returns `(field name, text value)` pairs in a fixed, declared order.
    ///
    /// The filter tests fields in this order and stops at the first match,
    /// and annotated copies keep this order. Non-text data should be left out
    /// or stringified here.
    fn search_fields(&self) -> Vec<(&str, &str)>;
}

impl Searchable for Record {
    fn search_fields(&self) -> Vec<(&str, &str)> {
        self.iter().collect()
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn search_fields(&self) -> Vec<(&str, &str)> {
        (**self).search_fields()
    }
}
