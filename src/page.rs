//! Pages: named, ordered collections of menu elements.
//!
//! Element positions are stable and 1-based at the interaction boundary
//! (position 1 is the first element); storage is an ordinary `Vec`
//! underneath. Labels are unconstrained — empty text and duplicates are
//! both fine.

use crate::element::Element;
use crate::error::MenuError;
use crate::style::Style;

/// Name given to pages created without one (including the page implicitly
/// created by `Ui::add_element` when none exists yet).
pub const DEFAULT_PAGE_NAME: &str = "Untitled page";

/// A named, ordered list of selectable elements.
#[derive(Debug)]
pub struct Page {
    /// Page name, shown in the header when enabled.
    pub name: String,
    elements: Vec<Element>,
}

impl Page {
    pub(crate) fn new(name: impl Into<String>) -> Page {
        Page {
            name: name.into(),
            elements: Vec::new(),
        }
    }

    /// Append a new element; its 1-based position is the previous count
    /// plus one. Returns the created element so the caller can restyle or
    /// bind it after insertion.
    pub fn add_element(&mut self, label: impl Into<String>, style: Style) -> &mut Element {
        self.elements.push(Element::new(label, style));
        // Just pushed, so the list is non-empty.
        let last = self.elements.len() - 1;
        &mut self.elements[last]
    }

    /// Number of elements on this page.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// The elements in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Look up an element by its 1-based position.
    pub fn get_element(&self, position: usize) -> Result<&Element, MenuError> {
        self.check_position(position)?;
        Ok(&self.elements[position - 1])
    }

    /// Mutable lookup by 1-based position (restyling, rebinding).
    pub fn get_element_mut(&mut self, position: usize) -> Result<&mut Element, MenuError> {
        self.check_position(position)?;
        Ok(&mut self.elements[position - 1])
    }

    fn check_position(&self, position: usize) -> Result<(), MenuError> {
        if position < 1 || position > self.elements.len() {
            return Err(MenuError::OutOfRange {
                index: position,
                len: self.elements.len(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_keep_insertion_order() {
        let mut page = Page::new("Fruits");
        page.add_element("Banana", Style::REGULAR);
        page.add_element("Apple", Style::REGULAR);
        page.add_element("Orange", Style::REGULAR);

        assert_eq!(page.element_count(), 3);
        assert_eq!(page.get_element(1).unwrap().label, "Banana");
        assert_eq!(page.get_element(2).unwrap().label, "Apple");
        assert_eq!(page.get_element(3).unwrap().label, "Orange");
    }

    #[test]
    fn position_zero_is_out_of_range() {
        let mut page = Page::new("p");
        page.add_element("only", Style::REGULAR);

        match page.get_element(0) {
            Err(MenuError::OutOfRange { index: 0, len: 1 }) => {}
            other => panic!("expected OutOfRange, got {:?}", other.map(|e| &e.label)),
        }
    }

    #[test]
    fn position_past_end_is_out_of_range() {
        let mut page = Page::new("p");
        page.add_element("a", Style::REGULAR);
        page.add_element("b", Style::REGULAR);

        assert!(matches!(
            page.get_element(3),
            Err(MenuError::OutOfRange { index: 3, len: 2 })
        ));
    }

    #[test]
    fn empty_page_rejects_every_position() {
        let page = Page::new("empty");
        assert!(page.get_element(1).is_err());
        assert_eq!(page.element_count(), 0);
        assert!(page.elements().is_empty());
    }

    #[test]
    fn returned_element_is_mutable_in_place() {
        let mut page = Page::new("p");
        page.add_element("quiet", Style::REGULAR).style = Style::SELECTED;

        assert!(page.get_element(1).unwrap().style.contains(Style::BOLD));
    }

    #[test]
    fn get_element_mut_allows_later_restyle() {
        let mut page = Page::new("p");
        page.add_element("row", Style::REGULAR);

        page.get_element_mut(1).unwrap().style = Style::RED;
        assert!(page.get_element(1).unwrap().style.contains(Style::RED));
    }

    #[test]
    fn empty_and_duplicate_labels_are_allowed() {
        let mut page = Page::new("p");
        page.add_element("", Style::REGULAR);
        page.add_element("twin", Style::REGULAR);
        page.add_element("twin", Style::REGULAR);

        assert_eq!(page.element_count(), 3);
        assert_eq!(page.get_element(1).unwrap().label, "");
        assert_eq!(page.get_element(2).unwrap().label, "twin");
        assert_eq!(page.get_element(3).unwrap().label, "twin");
    }
}
