// SPDX-License-Identifier: MPL-2.0
//! Image zoom-on-hover widget.
//!
//! The widget scales a photo to fit a fixed-size container, then, while the
//! pointer hovers, pans and magnifies it toward the cursor, animating back
//! to the centered fit when the pointer leaves.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (State / Message / Effect)
//!     ├── options    - Construction snapshot and defaults
//!     ├── container  - Container handles and id lookup
//!     └── schedule   - Poll and tick timer handles
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use iced_hover_zoom::media::{load_image, ImageSlot};
//! use iced_hover_zoom::ui::hover_zoom::{Container, Message, Options, Page};
//!
//! let mut page = Page::new();
//! let slot = ImageSlot::new();
//! page.insert(Container::with_image("hero", slot.clone()));
//!
//! let mut zoom = page.construct("hero", Options::new(188, 250)).unwrap();
//! slot.fill(load_image("hero.jpg").unwrap());
//! zoom.handle(Message::ImageLoaded);
//! assert!(zoom.is_ready());
//! ```

pub mod component;
pub mod container;
pub mod options;
pub mod schedule;


pub use component::{Decor, Effect, Message, State};
pub use container::{Container, ContainerRef, Page};
pub use options::{LoadDetection, Options, StopRule};
pub use schedule::TimerHandle;
