//! Slot handles bound to one resolved attribute
//!
//! A view pairs an exclusive bank reference with a resolved positional
//! index, giving O(1) access without re-resolving the name. Views are
//! ephemeral: handler code resolves a fresh one whenever it next needs an
//! attribute, and the exclusive borrow guarantees the bank cannot change
//! shape underneath a live view.

use crate::bank::AttributeBank;

/// Handle to one resolved slot in the numeric domain
#[derive(Debug)]
pub struct NumericView<'a> {
    pub(crate) bank: &'a mut AttributeBank,
    pub(crate) index: usize,
}

impl NumericView<'_> {
    /// The positional index this view is bound to
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the value at the bound slot
    pub fn read(&self) -> f64 {
        self.bank.numeric_value(self.index)
    }

    /// Replaces the value at the bound slot; the key sequence is untouched
    pub fn write(&mut self, value: f64) {
        self.bank.set_numeric_value(self.index, value);
    }
}

/// Handle to one resolved slot in the textual domain
#[derive(Debug)]
pub struct TextView<'a> {
    pub(crate) bank: &'a mut AttributeBank,
    pub(crate) index: usize,
}

impl TextView<'_> {
    /// The positional index this view is bound to
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the value at the bound slot
    pub fn read(&self) -> &str {
        self.bank.text_value(self.index)
    }

    /// Replaces the value at the bound slot; the key sequence is untouched
    pub fn write(&mut self, value: &str) {
        self.bank.set_text_value(self.index, value.to_string());
    }
}
