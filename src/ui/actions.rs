//! Store-bound actions produced by the input state machine

use crate::store::Item;

/// A mutation requested by the user. Actions are dispatched to the store on
/// their own tasks and never block the event loop; the visible effect, if
/// any, arrives later through the change feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateItem(Item),
    EditTitle { id: String, title: String },
    ToggleDone { id: String, done: bool },
    SoftDelete { id: String },
}
