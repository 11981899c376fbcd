//! event_list_core - Functional core of the event list manager.
//!
//! Pure types and functions: no I/O, no rendering surface.

pub mod events;
