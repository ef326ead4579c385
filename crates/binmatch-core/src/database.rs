//! Named image collection
//!
//! An [`ImageDatabase`] holds the reference images a query is matched
//! against. Entries keep their insertion order, which is also the order
//! the matcher visits them in; re-inserting a name replaces the image
//! but keeps the original position.

use crate::Pix;

/// One named reference image
#[derive(Debug, Clone)]
pub struct DatabaseEntry {
    /// Identifier, normally the source filename
    pub name: String,
    /// Decoded image
    pub image: Pix,
}

/// Ordered collection of uniquely named images
#[derive(Debug, Clone, Default)]
pub struct ImageDatabase {
    entries: Vec<DatabaseEntry>,
}

impl ImageDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an image under `name`.
    ///
    /// If the name already exists its image is replaced in place and the
    /// previous image is returned.
    pub fn insert(&mut self, name: impl Into<String>, image: Pix) -> Option<Pix> {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => Some(std::mem::replace(&mut entry.image, image)),
            None => {
                self.entries.push(DatabaseEntry { name, image });
                None
            }
        }
    }

    /// Look up an image by name.
    pub fn get(&self, name: &str) -> Option<&Pix> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.image)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the database has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, DatabaseEntry> {
        self.entries.iter()
    }

    /// Entry names in enumeration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

impl<'a> IntoIterator for &'a ImageDatabase {
    type Item = &'a DatabaseEntry;
    type IntoIter = std::slice::Iter<'a, DatabaseEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, Pix)> for ImageDatabase {
    fn from_iter<I: IntoIterator<Item = (S, Pix)>>(iter: I) -> Self {
        let mut db = Self::new();
        for (name, image) in iter {
            db.insert(name, image);
        }
        db
    }
}
