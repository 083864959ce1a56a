//! Named render slots. A detached sub-menu bar writes its markup
//! here under `"<base>_level_<depth>"` instead of rendering inline;
//! the host template decides where (and whether) to emit it.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use kstring::KString;

#[derive(Debug, Default)]
pub struct ContentSlots(HashMap<KString, String>);

impl ContentSlots {
    pub fn new() -> ContentSlots {
        ContentSlots::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|html| html.as_str())
    }

    pub fn take(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// One write per key and render pass. Re-rendering the same tree
    /// stores the same markup again, which is fine; *different*
    /// markup under an existing key means two menu bars compete for
    /// one slot.
    pub(crate) fn set(&mut self, key: KString, html: String) {
        match self.0.entry(key) {
            Entry::Occupied(mut slot) => {
                if *slot.get() != html {
                    crate::warn!("content slot {:?} written with differing markup",
                                 slot.key());
                }
                slot.insert(html);
            }
            Entry::Vacant(slot) => {
                slot.insert(html);
            }
        }
    }
}
