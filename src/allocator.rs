// atlas_packing/src/allocator.rs
//
// Copyright © 2026 The Atlas Packing Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Multiplexes allocations across a growable set of atlas pages.

use crate::page::{NodeId, Page, MAX_SIZE};
use pathfinder_geometry::rect::RectI;
use pathfinder_geometry::vector::Vector2I;

/// First-fit allocator over any number of `Page`s.
///
/// Each request is tried against every live page, extending a page in place
/// when it runs out of room; a new page is opened once every existing one is
/// at its maximum size and still full. Pages that become empty are discarded,
/// and their ids are reused by pages opened later. The caller owns whatever
/// backing store sits behind each page and can re-read its side length with
/// `page_size` after any allocation.
#[derive(Debug)]
pub struct AtlasAllocator {
    pages: Vec<Option<Page>>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PageId(pub u32);

/// A placement handed out by `AtlasAllocator::allocate`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AtlasLocation {
    pub page: PageId,
    pub rect: RectI,
    node: NodeId,
}

impl AtlasAllocator {
    #[inline]
    pub fn new() -> AtlasAllocator {
        AtlasAllocator { pages: vec![] }
    }

    /// Places `requested_size` in the first page that can take it, or `None`
    /// if either dimension exceeds `MAX_SIZE`.
    pub fn allocate(&mut self, requested_size: Vector2I) -> Option<AtlasLocation> {
        // Too big for a page even at its maximum size.
        if requested_size.x() > MAX_SIZE || requested_size.y() > MAX_SIZE {
            return None;
        }

        for (index, slot) in self.pages.iter().enumerate() {
            if let Some(page) = slot {
                if let Some(node) = allocate_in_page(page, requested_size) {
                    return Some(AtlasLocation {
                        page: PageId(index as u32),
                        rect: page.region(node),
                        node,
                    });
                }
            }
        }

        // Every existing page is exhausted; open a fresh one.
        let page = Page::new();
        let node = allocate_in_page(&page, requested_size)?;
        let rect = page.region(node);
        let size = page.size();
        let index = match self.pages.iter().position(|slot| slot.is_none()) {
            Some(index) => {
                self.pages[index] = Some(page);
                index
            }
            None => {
                self.pages.push(Some(page));
                self.pages.len() - 1
            }
        };
        debug!("opened atlas page {} ({}x{})", index, size, size);
        Some(AtlasLocation { page: PageId(index as u32), rect, node })
    }

    /// Releases a placement; a page with nothing left in it is discarded.
    pub fn free(&mut self, location: AtlasLocation) {
        let slot = &mut self.pages[location.page.0 as usize];
        let emptied = {
            let page = slot.as_ref().expect("freeing into a discarded page");
            page.free(location.node);
            page.is_empty()
        };
        if emptied {
            debug!("discarding empty atlas page {}", location.page.0);
            *slot = None;
        }
    }

    /// The current side length of a live page.
    #[inline]
    pub fn page_size(&self, page: PageId) -> i32 {
        self.pages[page.0 as usize]
            .as_ref()
            .expect("no such page")
            .size()
    }

    /// The number of live pages.
    #[inline]
    pub fn page_count(&self) -> usize {
        self.pages.iter().filter(|slot| slot.is_some()).count()
    }
}

fn allocate_in_page(page: &Page, requested_size: Vector2I) -> Option<NodeId> {
    loop {
        if let Some(node) = page.allocate(requested_size) {
            return Some(node);
        }
        if !page.extend() {
            return None;
        }
    }
}

#[cfg(test)]
mod test {
    use pathfinder_geometry::rect::RectI;
    use pathfinder_geometry::vector::Vector2I;

    use super::{AtlasAllocator, PageId};
    use crate::page::MAX_SIZE;

    fn rect(x: i32, y: i32, width: i32, height: i32) -> RectI {
        RectI::new(Vector2I::new(x, y), Vector2I::new(width, height))
    }

    #[test]
    fn test_allocations_share_the_first_page() {
        let mut allocator = AtlasAllocator::new();
        let a = allocator.allocate(Vector2I::new(100, 100)).unwrap();
        assert_eq!(a.page, PageId(0));
        assert_eq!(a.rect, rect(0, 0, 100, 100));
        let b = allocator.allocate(Vector2I::new(100, 100)).unwrap();
        assert_eq!(b.page, PageId(0));
        assert_eq!(b.rect, rect(0, 100, 100, 100));
        assert_eq!(allocator.page_count(), 1);
    }

    #[test]
    fn test_oversize_requests_are_rejected() {
        let mut allocator = AtlasAllocator::new();
        assert!(allocator.allocate(Vector2I::new(MAX_SIZE + 1, 1)).is_none());
        assert!(allocator.allocate(Vector2I::new(1, MAX_SIZE + 1)).is_none());
        assert_eq!(allocator.page_count(), 0);
    }

    #[test]
    fn test_large_request_extends_a_fresh_page() {
        let mut allocator = AtlasAllocator::new();
        let location = allocator.allocate(Vector2I::new(2048, 1024)).unwrap();
        assert_eq!(location.page, PageId(0));
        assert_eq!(location.rect, rect(0, 0, 2048, 1024));
        assert_eq!(allocator.page_size(PageId(0)), 2048);
    }

    #[test]
    fn test_full_pages_spill_to_a_new_one() {
        let mut allocator = AtlasAllocator::new();
        let first = allocator.allocate(Vector2I::splat(MAX_SIZE)).unwrap();
        assert_eq!(first.page, PageId(0));
        assert_eq!(first.rect, rect(0, 0, MAX_SIZE, MAX_SIZE));
        let second = allocator.allocate(Vector2I::splat(MAX_SIZE)).unwrap();
        assert_eq!(second.page, PageId(1));
        assert_eq!(allocator.page_count(), 2);
    }

    #[test]
    fn test_empty_pages_are_discarded_and_reused() {
        let mut allocator = AtlasAllocator::new();
        let a = allocator.allocate(Vector2I::splat(MAX_SIZE)).unwrap();
        let b = allocator.allocate(Vector2I::new(100, 100)).unwrap();
        assert_eq!(b.page, PageId(1));
        allocator.free(a);
        assert_eq!(allocator.page_count(), 1);
        let c = allocator.allocate(Vector2I::splat(MAX_SIZE)).unwrap();
        assert_eq!(c.page, PageId(0));
        assert_eq!(allocator.page_count(), 2);
    }
}
