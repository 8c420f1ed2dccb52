//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (sidebar, guards, feeds, charts) while
//! reading session and page state from Leptos context providers.

pub mod authenticated_image;
pub mod camera_feed;
pub mod charts;
pub mod guards;
pub mod loading;
pub mod sidebar;
