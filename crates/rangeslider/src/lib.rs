#![forbid(unsafe_code)]

//! Range slider component.
//!
//! `rangeslider` attaches the behavior in [`rangeslider_core`] to a concrete
//! markup tree. A host provides an [`ElementTree`]; [`Slider::attach_to`]
//! locates the thumb container, track, pin value marker, and marker container,
//! registers listeners through the tree, and adopts the state declared on the
//! root's ARIA attributes.
//!
//! [`MemoryTree`] is a complete in-memory tree for headless hosts. Its
//! [`Slider::dispatch`] bubbles events through the tree the way a document
//! does.
//!
//! # Example
//!
//! ```
//! use rangeslider::{MemoryTree, Slider};
//! use rangeslider_core::constants::strings;
//!
//! let tree = MemoryTree::slider_markup()
//!     .with_root_attribute(strings::ARIA_VALUEMIN, "0")
//!     .with_root_attribute(strings::ARIA_VALUEMAX, "10")
//!     .with_root_attribute(strings::ARIA_VALUENOW, "4");
//! let mut slider = Slider::attach_to(tree).unwrap();
//! assert_eq!(slider.value(), 4.0);
//! slider.step_up(None);
//! assert_eq!(slider.value(), 5.0);
//! ```

pub mod component;
pub mod host;
pub mod memory;
pub mod tree;

pub use component::Slider;
pub use host::HostAdapter;
pub use memory::{EmittedEvent, MemoryTree, NodeId};
pub use tree::{ElementTree, EventTarget, TextDirection};
