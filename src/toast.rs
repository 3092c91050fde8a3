//! Transient toast notification.
//!
//! A toast is shown, stays for [`TOAST_VISIBLE_MS`](crate::config::TOAST_VISIBLE_MS),
//! plays its exit animation and is removed. Showing a new toast replaces the
//! current one; timer callbacks carry the id of the toast they were armed for
//! so a late callback never removes its successor. Ids are allocated by the
//! caller, which owns the timers.

use std::rc::Rc;
use yew::functional::Reducible;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub leaving: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ToastState {
    current: Option<Toast>,
}

pub enum ToastAction {
    Show { id: u32, message: String },
    BeginExit(u32),
    Remove(u32),
}

impl ToastState {
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Show { id, message } => {
                next.current = Some(Toast {
                    id,
                    message,
                    leaving: false,
                });
            }
            ToastAction::BeginExit(id) => match next.current.as_mut() {
                Some(toast) if toast.id == id => toast.leaving = true,
                _ => return self,
            },
            ToastAction::Remove(id) => {
                if next.current.as_ref().map(|t| t.id) != Some(id) {
                    return self;
                }
                next.current = None;
            }
        }
        Rc::new(next)
    }
}
