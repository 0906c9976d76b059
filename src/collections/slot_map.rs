//! `SlotMap` - a generational arena with stable keys.
//!
//! Values live in a flat `Vec` of entries; freed entries are threaded onto an
//! intrusive free list and reused by later inserts. Each entry carries a
//! generation counter so a key issued before a removal never aliases the value
//! that later reuses the same slot (ABA protection).
//!
//! Implementation details:
//! - Generation parity encodes occupancy: even = occupied, odd = free.
//! - `u32::MAX` is the free-list sentinel.
//! - Keys expose their raw slot index so callers can build dense side tables
//!   sized by [`SlotMap::slot_count`].

/// A key for accessing a [`SlotMap`].
///
/// Contains an index and a generation counter. Two keys compare equal only when
/// both the slot and the generation match, so key equality is slot identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    index: u32,
    generation: u32,
}

impl SlotKey {
    #[inline(always)]
    fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Returns the raw slot index of this key.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.index as usize
    }

    /// Returns the generation this key was issued with.
    #[inline(always)]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone)]
enum SlotData<T> {
    Occupied(T),
    Free { next_free: u32 },
}

#[derive(Debug, Clone)]
struct Entry<T> {
    /// Even = occupied, odd = free.
    generation: u32,
    data: SlotData<T>,
}

impl<T> Entry<T> {
    #[inline(always)]
    fn value(&self, generation: u32) -> Option<&T> {
        match &self.data {
            SlotData::Occupied(value) if self.generation == generation => Some(value),
            _ => None,
        }
    }

    #[inline(always)]
    fn value_mut(&mut self, generation: u32) -> Option<&mut T> {
        match &mut self.data {
            SlotData::Occupied(value) if self.generation == generation => Some(value),
            _ => None,
        }
    }
}

/// A generational slot map.
#[derive(Debug, Clone)]
pub struct SlotMap<T> {
    slots: Vec<Entry<T>>,
    free_head: u32,
    len: usize,
}

impl<T> SlotMap<T> {
    /// Creates a new empty slot map.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: u32::MAX,
            len: 0,
        }
    }

    /// Creates a new slot map with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: u32::MAX,
            len: 0,
        }
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots ever allocated (occupied or free).
    ///
    /// Every live key satisfies `key.index() < slot_count()`.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Inserts a value, returning its key.
    ///
    /// # Panics
    /// Panics if the map would grow past `u32::MAX - 1` slots.
    pub fn insert(&mut self, value: T) -> SlotKey {
        self.insert_with_key(|_| value)
    }

    /// Inserts the value produced by `f`, which receives the key it will live under.
    ///
    /// # Panics
    /// Panics if the map would grow past `u32::MAX - 1` slots.
    #[allow(clippy::cast_possible_truncation)]
    pub fn insert_with_key(&mut self, f: impl FnOnce(SlotKey) -> T) -> SlotKey {
        if self.free_head != u32::MAX {
            let idx = self.free_head;
            let entry = &mut self.slots[idx as usize];
            // Odd (free) -> even (occupied).
            let key = SlotKey::new(idx, entry.generation.wrapping_add(1));

            if let SlotData::Free { next_free } = entry.data {
                self.free_head = next_free;
            }
            entry.data = SlotData::Occupied(f(key));
            entry.generation = key.generation;
            self.len += 1;
            key
        } else {
            let idx = self.slots.len();
            assert!(idx < u32::MAX as usize, "slot map capacity exhausted");
            let key = SlotKey::new(idx as u32, 0);
            self.slots.push(Entry {
                generation: 0,
                data: SlotData::Occupied(f(key)),
            });
            self.len += 1;
            key
        }
    }

    /// Returns a shared reference to the value for `key`, if it is still live.
    #[inline]
    pub fn get(&self, key: SlotKey) -> Option<&T> {
        self.slots.get(key.index())?.value(key.generation)
    }

    /// Returns a mutable reference to the value for `key`, if it is still live.
    #[inline]
    pub fn get_mut(&mut self, key: SlotKey) -> Option<&mut T> {
        self.slots.get_mut(key.index())?.value_mut(key.generation)
    }

    /// Returns `true` if `key` refers to a live value.
    #[inline]
    pub fn contains_key(&self, key: SlotKey) -> bool {
        self.get(key).is_some()
    }

    /// Removes the value for `key`, returning it.
    pub fn remove(&mut self, key: SlotKey) -> Option<T> {
        let entry = self.slots.get_mut(key.index())?;
        entry.value(key.generation)?;

        let previous = std::mem::replace(
            &mut entry.data,
            SlotData::Free {
                next_free: self.free_head,
            },
        );
        // Even (occupied) -> odd (free).
        entry.generation = entry.generation.wrapping_add(1);
        self.free_head = key.index;
        self.len -= 1;

        match previous {
            SlotData::Occupied(value) => Some(value),
            SlotData::Free { .. } => None,
        }
    }

    /// Removes every value. Outstanding keys are invalidated.
    #[allow(clippy::cast_possible_truncation)]
    pub fn clear(&mut self) {
        if self.len == 0 {
            return;
        }

        let cap = self.slots.len();
        for (idx, entry) in self.slots.iter_mut().enumerate() {
            if matches!(entry.data, SlotData::Occupied(_)) {
                entry.generation = entry.generation.wrapping_add(1);
            }
            let next_free = if idx + 1 < cap { (idx + 1) as u32 } else { u32::MAX };
            entry.data = SlotData::Free { next_free };
        }
        self.free_head = 0;
        self.len = 0;
    }

    /// Iterates over live `(key, value)` pairs in slot order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots.iter().enumerate(),
            remaining: self.len,
        }
    }

    /// Iterates over live `(key, value)` pairs with mutable access.
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SlotKey, &mut T)> + '_ {
        self.slots.iter_mut().enumerate().filter_map(|(idx, entry)| {
            let generation = entry.generation;
            match &mut entry.data {
                SlotData::Occupied(value) => Some((SlotKey::new(idx as u32, generation), value)),
                SlotData::Free { .. } => None,
            }
        })
    }
}

/// Iterator over the live entries of a [`SlotMap`].
pub struct Iter<'a, T> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Entry<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (SlotKey, &'a T);

    #[allow(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        for (idx, entry) in self.inner.by_ref() {
            if let SlotData::Occupied(value) = &entry.data {
                self.remaining -= 1;
                return Some((SlotKey::new(idx as u32, entry.generation), value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Default for SlotMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_map_basic() {
        let mut map = SlotMap::new();
        assert!(map.is_empty());

        let k1 = map.insert(10);
        let k2 = map.insert(20);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(k1), Some(&10));
        assert_eq!(map.get(k2), Some(&20));

        *map.get_mut(k1).unwrap() = 11;
        assert_eq!(map.get(k1), Some(&11));

        assert_eq!(map.remove(k1), Some(11));
        assert_eq!(map.len(), 1);
        assert!(map.get(k1).is_none());
        assert!(!map.contains_key(k1));
        assert_eq!(map.remove(k1), None);

        // Slot is reused under a new generation; the stale key stays dead.
        let k3 = map.insert(30);
        assert_eq!(k3.index(), k1.index());
        assert_ne!(k3, k1);
        assert_eq!(map.get(k3), Some(&30));
        assert!(map.get(k1).is_none());
        assert_eq!(map.slot_count(), 2);
    }

    #[test]
    fn test_slot_map_insert_with_key() {
        let mut map = SlotMap::new();
        let k1 = map.insert_with_key(|k| k);
        assert_eq!(map.get(k1), Some(&k1));

        map.remove(k1);
        let k2 = map.insert_with_key(|k| k);
        assert_eq!(map.get(k2), Some(&k2));
        assert_ne!(k1, k2);
    }

    #[test]
    fn test_slot_map_iter() {
        let mut map = SlotMap::new();
        let keys: Vec<_> = (0..10).map(|i| map.insert(i * 10)).collect();
        map.remove(keys[3]);

        let seen: Vec<_> = map.iter().collect();
        assert_eq!(seen.len(), 9);
        assert_eq!(map.iter().len(), 9);
        for (k, v) in seen {
            assert!(keys.contains(&k));
            assert_eq!(k.index() * 10, *v);
        }

        for (_, v) in map.iter_mut() {
            *v += 1;
        }
        assert_eq!(map.get(keys[0]), Some(&1));
    }

    #[test]
    fn test_slot_map_clear() {
        let mut map = SlotMap::new();
        let keys: Vec<_> = (0..10).map(|i| map.insert(i)).collect();
        assert_eq!(map.len(), 10);

        map.clear();
        assert_eq!(map.len(), 0);
        assert!(keys.iter().all(|&k| map.get(k).is_none()));

        for i in 0..5 {
            map.insert(i + 100);
        }
        assert_eq!(map.len(), 5);
        assert_eq!(map.slot_count(), 10);
    }
}
