//! Document model types for parsed CV content.
//!
//! This module defines the intermediate representation that bridges
//! Markdown parsing and content rendering. The tree is strictly owned:
//! a [`Document`] owns its [`Section`]s, each section owns its [`Item`]s
//! and each item owns its [`Role`]s, all by value. The whole tree is built
//! once per parse invocation and is not mutated afterwards.

mod document;
mod properties;
mod section;

pub use document::{ContactInfo, Document};
pub use properties::{Properties, PropertyValue};
pub use section::{Item, Role, Section};
