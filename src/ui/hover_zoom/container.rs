// SPDX-License-Identifier: MPL-2.0
//! Zoom containers and the page that declares them.
//!
//! A [`Container`] is a cheap, shareable handle owned by the caller: the
//! widget keeps a clone but never manages its lifetime. The [`Page`] maps
//! identifiers to containers so widgets can be built from a name alone.

use super::component::State;
use super::options::Options;
use crate::error::{Error, Result};
use crate::media::ImageSlot;

#[derive(Debug, Clone)]
pub struct Container {
    id: String,
    image: ImageSlot,
}

impl Container {
    /// Creates an empty container; its image arrives through the slot.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_image(id, ImageSlot::new())
    }

    #[must_use]
    pub fn with_image(id: impl Into<String>, image: ImageSlot) -> Self {
        Self {
            id: id.into(),
            image,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The image hosted by this container.
    #[must_use]
    pub fn image(&self) -> &ImageSlot {
        &self.image
    }
}

/// A container given directly or looked up by identifier.
#[derive(Debug, Clone)]
pub enum ContainerRef<'a> {
    Handle(Container),
    Id(&'a str),
}

impl From<Container> for ContainerRef<'_> {
    fn from(container: Container) -> Self {
        ContainerRef::Handle(container)
    }
}

impl<'a> From<&'a str> for ContainerRef<'a> {
    fn from(id: &'a str) -> Self {
        ContainerRef::Id(id)
    }
}

/// Containers declared for one view, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Page {
    containers: Vec<Container>,
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a container, replacing any previous one with the same id.
    pub fn insert(&mut self, container: Container) {
        match self.containers.iter_mut().find(|c| c.id == container.id) {
            Some(existing) => *existing = container,
            None => self.containers.push(container),
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Resolves a handle or identifier to a container.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContainerNotFound`] for an unknown identifier.
    pub fn resolve(&self, container: ContainerRef<'_>) -> Result<Container> {
        match container {
            ContainerRef::Handle(container) => Ok(container),
            ContainerRef::Id(id) => self
                .get(id)
                .cloned()
                .ok_or_else(|| Error::ContainerNotFound(id.to_string())),
        }
    }

    /// Resolves the container and constructs a widget on it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContainerNotFound`] for an unknown identifier and
    /// [`Error::InvalidOptions`] for an invalid target size.
    pub fn construct<'a>(
        &self,
        container: impl Into<ContainerRef<'a>>,
        options: Options,
    ) -> Result<State> {
        let container = self.resolve(container.into())?;
        State::new(container, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_by_id_finds_declared_container() {
        let mut page = Page::new();
        page.insert(Container::new("hero"));
        page.insert(Container::new("thumb"));

        let container = page.resolve("thumb".into()).expect("declared");
        assert_eq!(container.id(), "thumb");
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn resolve_unknown_id_fails() {
        let page = Page::new();
        match page.resolve(ContainerRef::Id("missing")) {
            Err(Error::ContainerNotFound(id)) => assert_eq!(id, "missing"),
            other => panic!("expected ContainerNotFound, got {other:?}"),
        }
    }

    #[test]
    fn resolve_handle_bypasses_lookup() {
        let page = Page::new();
        let container = page
            .resolve(Container::new("loose").into())
            .expect("handles always resolve");
        assert_eq!(container.id(), "loose");
        assert!(page.is_empty());
    }

    #[test]
    fn insert_replaces_same_id() {
        let mut page = Page::new();
        page.insert(Container::new("hero"));
        page.insert(Container::new("hero"));
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn construct_by_unknown_id_reports_error() {
        let page = Page::new();
        let result = page.construct("nowhere", Options::new(188, 250));
        assert!(matches!(result, Err(Error::ContainerNotFound(_))));
    }
}
