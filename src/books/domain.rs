use std::cmp::Ordering;
use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
}

// Catalog order: title ascending, then id so that equal titles still list deterministically.
// Ids are decimal counters, so the shorter one is the smaller one ("9" before "10").
pub fn catalog_order<B: Book>(a: &B, b: &B) -> Ordering {
    let (a_id, b_id) = (a.id(), b.id());
    a.title().cmp(b.title())
        .then_with(|| (a_id.len(), a_id.as_str()).cmp(&(b_id.len(), b_id.as_str())))
}
