//! UI state models for the single-page site.
//!
//! Components never mutate these directly; they dispatch a message and render
//! whatever state comes back. That keeps every transition testable without a
//! browser.

mod gallery;
mod nav;
mod slides;
mod theme;

pub use gallery::{Gallery, GalleryError, GalleryMsg};
pub use nav::{NavEffect, NavMsg, NavState, ParseSectionError, Section, SectionId, SECTIONS};
pub use slides::SlideCursor;
pub use theme::{ParseThemeError, Theme, THEME_STORAGE_KEY};
