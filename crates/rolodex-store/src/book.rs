use crate::{Error, Result};
use indexmap::IndexMap;
use rolodex_types::{Contact, ContactFields, ContactId, SearchCriteria};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of the store. The `source` member is display metadata;
/// only `contacts` is read back on open.
#[derive(Serialize)]
struct Snapshot<'a> {
    source: String,
    contacts: &'a IndexMap<ContactId, ContactFields>,
}

#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    contacts: IndexMap<ContactId, ContactFields>,
}

/// JSON-file-backed phone book.
///
/// Mutations stay in memory until `save`, which rewrites the whole file.
/// The map preserves insertion order so listings stay stable across
/// load/save cycles.
#[derive(Debug)]
pub struct ContactBook {
    source: PathBuf,
    contacts: IndexMap<ContactId, ContactFields>,
}

impl ContactBook {
    /// Open an existing store, or initialize an empty one and persist it
    /// immediately so the file exists from the first run.
    pub fn open(source: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        if source.is_file() {
            let raw = fs::read_to_string(&source)?;
            let doc: Document = serde_json::from_str(&raw).map_err(Error::Corrupt)?;
            Ok(Self {
                source,
                contacts: doc.contacts,
            })
        } else {
            let book = Self {
                source,
                contacts: IndexMap::new(),
            };
            book.save()?;
            Ok(book)
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Insert a contact keyed by its id. Does not persist.
    pub fn add_contact(&mut self, contact: Contact) {
        let (id, fields) = contact.into_parts();
        self.contacts.insert(id, fields);
    }

    /// Rewrite the backing file with the current in-memory state.
    /// Whole-file overwrite; non-ASCII text is written literally.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.source.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let snapshot = Snapshot {
            source: self.source.display().to_string(),
            contacts: &self.contacts,
        };
        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&self.source, json)?;
        Ok(())
    }

    /// Contacts matching every given criterion, in listing order
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<Contact> {
        self.contacts
            .iter()
            .filter(|(_, fields)| criteria.matches(fields))
            .map(|(id, fields)| Contact::with_id(id.clone(), fields.clone()))
            .collect()
    }

    /// All contacts with their ids reattached, in insertion order
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts
            .iter()
            .map(|(id, fields)| Contact::with_id(id.clone(), fields.clone()))
            .collect()
    }

    pub fn find_by_id(&self, id: &ContactId) -> Result<&ContactFields> {
        self.contacts
            .get(id)
            .ok_or_else(|| Error::NotFound(id.clone()))
    }

    /// Replace the stored record wholesale. Merging old and new values is
    /// the caller's job. Does not persist.
    pub fn edit_by_id(&mut self, id: &ContactId, fields: ContactFields) -> Result<()> {
        match self.contacts.get_mut(id) {
            Some(slot) => {
                *slot = fields;
                Ok(())
            }
            None => Err(Error::NotFound(id.clone())),
        }
    }

    /// Remove the entry, keeping the relative order of the rest.
    /// Does not persist.
    pub fn delete_by_id(&mut self, id: &ContactId) -> Result<()> {
        self.contacts
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(id.clone()))
    }
}
