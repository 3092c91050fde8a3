use std::rc::Rc;
use yew::functional::Reducible;

/// FAQ accordion where at most one item is expanded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Toggle `index`; opening it collapses whichever item was open.
    pub fn toggle(&mut self, index: usize) {
        self.open = match self.open {
            Some(current) if current == index => None,
            _ => Some(index),
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

/// Reducer action: toggle the item at this index.
pub struct ToggleItem(pub usize);

impl Reducible for Accordion {
    type Action = ToggleItem;

    fn reduce(self: Rc<Self>, ToggleItem(index): ToggleItem) -> Rc<Self> {
        let mut next = *self;
        next.toggle(index);
        Rc::new(next)
    }
}
