//! Order-preserving identifier allocation.
//!
//! Ids are fixed-width strings over `0-9a-zA-Z`, read as base-62 counters.
//! Reassigning a subtree walks it in pre-order and takes one id per node and
//! per modifier, so each subtree ends up with a contiguous id range whose
//! order mirrors traversal order.

use crate::component::Component;
use crate::error::IdError;
use std::cmp::Ordering;

pub const ID_ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const DEFAULT_ID_WIDTH: usize = 8;

fn ordinal(symbol: u8) -> Option<usize> {
    match symbol {
        b'0'..=b'9' => Some((symbol - b'0') as usize),
        b'a'..=b'z' => Some((symbol - b'a') as usize + 10),
        b'A'..=b'Z' => Some((symbol - b'A') as usize + 36),
        _ => None,
    }
}

/// Whether `id` is made only of allocator symbols
pub fn is_allocator_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| ordinal(b).is_some())
}

/// Compare two ids by counter value: shorter ids first, then symbol ordinals.
///
/// Symbols outside the alphabet sort after every alphabet symbol.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| {
        let key = |s: &str| -> Vec<usize> {
            s.bytes()
                .map(|b| ordinal(b).unwrap_or(ID_ALPHABET.len()))
                .collect()
        };
        key(a).cmp(&key(b))
    })
}

/// Return the id following `id`, carrying across symbols.
pub fn increment_id(id: &str) -> Result<String, IdError> {
    if id.is_empty() {
        return Err(IdError::Empty);
    }

    let mut digits = Vec::with_capacity(id.len());
    for symbol in id.chars() {
        let value = u8::try_from(symbol)
            .ok()
            .and_then(ordinal)
            .ok_or_else(|| IdError::InvalidSymbol {
                id: id.to_string(),
                symbol,
            })?;
        digits.push(value);
    }

    for position in (0..digits.len()).rev() {
        if digits[position] + 1 < ID_ALPHABET.len() {
            digits[position] += 1;
            return Ok(digits.iter().map(|&d| ID_ALPHABET[d] as char).collect());
        }
        digits[position] = 0;
    }

    Err(IdError::Exhausted(id.to_string()))
}

/// Sequential id allocator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    last: String,
}

impl IdAllocator {
    /// Allocator whose first id is `00000001`
    pub fn new() -> Self {
        Self::with_width(DEFAULT_ID_WIDTH)
    }

    pub fn with_width(width: usize) -> Self {
        Self {
            last: "0".repeat(width),
        }
    }

    /// Allocator that continues after an existing id
    pub fn after(id: impl Into<String>) -> Self {
        Self { last: id.into() }
    }

    /// Generate the next id
    pub fn next_id(&mut self) -> Result<String, IdError> {
        let next = increment_id(&self.last)?;
        self.last = next.clone();
        Ok(next)
    }

    /// The most recently allocated id (or the starting point)
    pub fn last(&self) -> &str {
        &self.last
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of ids a subtree occupies: one per node and one per modifier.
pub fn id_count(component: &Component) -> usize {
    component
        .flatten()
        .iter()
        .map(|node| 1 + node.modifiers.len())
        .sum()
}

/// Give every node and modifier in `component` a fresh id, in pre-order.
pub fn reassign_ids(component: &Component, ids: &mut IdAllocator) -> Result<Component, IdError> {
    let mut result = component.clone();
    reassign_in_place(&mut result, ids)?;
    Ok(result)
}

fn reassign_in_place(component: &mut Component, ids: &mut IdAllocator) -> Result<(), IdError> {
    component.id = ids.next_id()?;
    for modifier in &mut component.modifiers {
        modifier.id = ids.next_id()?;
    }

    if let Some(children) = component.kind.children_mut() {
        for child in children {
            reassign_in_place(child, ids)?;
        }
    }
    if let Some(slots) = component.kind.slots_mut() {
        for slot in slots {
            reassign_in_place(&mut slot.group, ids)?;
        }
    }

    Ok(())
}
