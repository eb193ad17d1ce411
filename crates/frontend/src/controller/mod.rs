//! Page controllers: DOM events in, store calls and renders out.

pub mod bills;
pub mod events;
pub mod new_bill;
