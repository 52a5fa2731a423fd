//! Reserve slots for units not on the board.

use super::champion::Champion;

/// Fixed number of slots; each owns at most one unit.
#[derive(Clone, Debug)]
pub struct Bench {
    slots: Vec<Option<Champion>>,
}

impl Bench {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            slots: (0..size).map(|_| None).collect(),
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Champion> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Champion> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    #[must_use]
    pub fn is_occupied(&self, slot: usize) -> bool {
        self.get(slot).is_some()
    }

    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Put a unit in an empty slot. Hands it back otherwise.
    pub fn place(&mut self, slot: usize, mut champion: Champion) -> Result<(), Champion> {
        match self.slots.get_mut(slot) {
            Some(cell @ None) => {
                champion.position = None;
                *cell = Some(champion);
                Ok(())
            }
            _ => Err(champion),
        }
    }

    /// Put a unit in the first empty slot.
    pub fn push(&mut self, champion: Champion) -> Result<usize, Champion> {
        match self.first_empty() {
            Some(slot) => self.place(slot, champion).map(|()| slot),
            None => Err(champion),
        }
    }

    pub fn remove(&mut self, slot: usize) -> Option<Champion> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// Occupied slots with their units.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Champion)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|c| (i, c)))
    }

    pub fn champions(&self) -> impl Iterator<Item = &Champion> {
        self.slots.iter().flatten()
    }

    pub fn champions_mut(&mut self) -> impl Iterator<Item = &mut Champion> {
        self.slots.iter_mut().flatten()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.slots.iter().filter(|c| c.is_some()).count()
    }
}
