//! Folio Library
//!
//! This library provides the interactive layer of a single-page portfolio:
//! theme switching, navigation highlighting, the mobile menu, contact form
//! validation, the simulated CV download and transient notifications.
//!
//! The page is driven headlessly. A host pushes [`events::PageEvent`]s into a
//! [`controller::PageController`], advances its virtual clock, and observes
//! the effects through a [`dom::ElementRegistry`].

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod controller;
pub mod dom;
pub mod events;
pub mod notify;
pub mod scheduler;
pub mod session;
pub mod storage;
pub mod theme;
pub mod throttle;
pub mod validation;
