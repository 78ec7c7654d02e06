// atlas_packing/src/lib.rs
//
// Copyright © 2026 The Atlas Packing Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A 2D rectangle packer for texture atlas pages.
//!
//! Rectangles of arbitrary positive size are suballocated from square pages
//! managed by binary space partitioning trees. Freed regions coalesce with
//! their siblings so the space can be reused, and an exhausted page can
//! double in place up to a hard maximum without moving any live allocation.
//!
//! # Examples
//!
//! ```
//! use atlas_packing::page::Page;
//! use pathfinder_geometry::vector::Vector2I;
//!
//! let page = Page::new();
//! let glyph = page.allocate(Vector2I::new(48, 64)).unwrap();
//! // render into page.region(glyph) ...
//! page.free(glyph);
//! assert!(page.is_empty());
//! ```

#[macro_use]
extern crate log;

pub mod allocator;
pub mod page;
