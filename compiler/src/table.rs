use std::rc::Rc;

use crate::value::{ObjString, Value};

const MAX_LOAD: f64 = 0.75;

struct Entry {
    key: Option<Rc<ObjString>>,
    value: Value,
}

impl Entry {
    fn empty() -> Self {
        Self {
            key: None,
            value: Value::Nil,
        }
    }

    fn is_tombstone(&self) -> bool {
        self.key.is_none() && matches!(self.value, Value::Bool(true))
    }
}

/// Open-addressed hash table with linear probing and tombstone deletion.
/// Shared by the string-intern set ([`crate::heap::Heap`]) and, in the `vm`
/// crate, the globals table — both just instantiate `Table`.
pub struct Table {
    entries: Vec<Entry>,
    /// live entries + tombstones, since both count against the load factor.
    count: usize,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.key.is_some()).count()
    }

    pub fn get(&self, key: &Rc<ObjString>) -> Option<&Value> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = find_entry(&self.entries, key);
        self.entries[idx].key.as_ref()?;
        Some(&self.entries[idx].value)
    }

    /// Inserts or overwrites `key`. Returns `true` if this created a brand
    /// new entry (key was previously absent).
    pub fn set(&mut self, key: Rc<ObjString>, value: Value) -> bool {
        if (self.count + 1) as f64 > self.entries.len() as f64 * MAX_LOAD {
            self.grow(std::cmp::max(8, self.entries.len() * 2));
        }
        let idx = find_entry(&self.entries, &key);
        let is_new = self.entries[idx].key.is_none();
        if is_new && !self.entries[idx].is_tombstone() {
            self.count += 1;
        }
        self.entries[idx] = Entry {
            key: Some(key),
            value,
        };
        is_new
    }

    pub fn delete(&mut self, key: &Rc<ObjString>) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let idx = find_entry(&self.entries, key);
        if self.entries[idx].key.is_none() {
            return false;
        }
        self.entries[idx] = Entry {
            key: None,
            value: Value::Bool(true),
        };
        true
    }

    /// Content-based lookup, used only while interning: the one place the
    /// table is searched by bytes rather than by reference.
    pub fn find_string(&self, chars: &str, hash: u32) -> Option<Rc<ObjString>> {
        if self.entries.is_empty() {
            return None;
        }
        let capacity = self.entries.len();
        let mut index = hash as usize % capacity;
        loop {
            let entry = &self.entries[index];
            match &entry.key {
                None if !entry.is_tombstone() => return None,
                Some(key) if key.hash == hash && key.chars == chars => return Some(Rc::clone(key)),
                _ => {}
            }
            index = (index + 1) % capacity;
        }
    }

    fn grow(&mut self, new_capacity: usize) {
        let mut new_entries: Vec<Entry> = (0..new_capacity).map(|_| Entry::empty()).collect();
        let mut live = 0;
        for entry in self.entries.drain(..) {
            if let Some(key) = entry.key {
                let idx = find_entry(&new_entries, &key);
                new_entries[idx] = Entry {
                    key: Some(key),
                    value: entry.value,
                };
                live += 1;
            }
        }
        self.entries = new_entries;
        self.count = live;
    }
}

/// Finds the slot for `key`: either its existing entry, or the first empty
/// slot seen in the probe — preferring an earlier tombstone over a later
/// true-empty slot so deleted slots are reused.
fn find_entry(entries: &[Entry], key: &Rc<ObjString>) -> usize {
    let capacity = entries.len();
    let mut index = key.hash as usize % capacity;
    let mut tombstone: Option<usize> = None;
    loop {
        let entry = &entries[index];
        match &entry.key {
            Some(k) if Rc::ptr_eq(k, key) => return index,
            None if entry.is_tombstone() => {
                if tombstone.is_none() {
                    tombstone = Some(index);
                }
            }
            None => return tombstone.unwrap_or(index),
            Some(_) => {}
        }
        index = (index + 1) % capacity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> Rc<ObjString> {
        Rc::new(ObjString::new(s.to_string()))
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut t = Table::new();
        let k = key("x");
        assert!(t.set(Rc::clone(&k), Value::Number(1.0)));
        assert_eq!(t.get(&k), Some(&Value::Number(1.0)));
    }

    #[test]
    fn set_existing_key_overwrites_and_reports_not_new() {
        let mut t = Table::new();
        let k = key("x");
        t.set(Rc::clone(&k), Value::Number(1.0));
        assert!(!t.set(Rc::clone(&k), Value::Number(2.0)));
        assert_eq!(t.get(&k), Some(&Value::Number(2.0)));
    }

    #[test]
    fn delete_then_get_is_absent_but_reinsert_works() {
        let mut t = Table::new();
        let k = key("x");
        t.set(Rc::clone(&k), Value::Number(1.0));
        assert!(t.delete(&k));
        assert_eq!(t.get(&k), None);
        assert!(t.set(Rc::clone(&k), Value::Number(3.0)));
        assert_eq!(t.get(&k), Some(&Value::Number(3.0)));
    }

    #[test]
    fn grows_past_load_factor_without_losing_entries() {
        let mut t = Table::new();
        let keys: Vec<_> = (0..100).map(|i| key(&format!("k{i}"))).collect();
        for (i, k) in keys.iter().enumerate() {
            t.set(Rc::clone(k), Value::Number(i as f64));
        }
        for (i, k) in keys.iter().enumerate() {
            assert_eq!(t.get(k), Some(&Value::Number(i as f64)));
        }
        assert_eq!(t.len(), 100);
    }

    #[test]
    fn find_string_matches_by_content_not_reference() {
        let mut t = Table::new();
        let k = key("hello");
        t.set(Rc::clone(&k), Value::Nil);
        let found = t.find_string("hello", fnv_of("hello"));
        assert!(found.is_some());
        assert!(Rc::ptr_eq(&found.unwrap(), &k));
    }

    fn fnv_of(s: &str) -> u32 {
        crate::value::fnv1a(s.as_bytes())
    }
}
