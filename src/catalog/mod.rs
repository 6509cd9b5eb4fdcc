//! Catalog: the remote list of creatures cards are made from.
//!
//! ## Key Types
//!
//! - `ItemId`: Identifier shared by both cards of a pair
//! - `CatalogEntry`: Immutable `{id, name}` record
//! - `CatalogRegistry`: Ordered entry store with id lookup
//! - `ListingPage`: Wire format of one listing page
//! - `ImageUrlTemplate`: Derives an image URL from an id
//! - `CatalogClient`: Paginated HTTP loader

pub mod client;
pub mod entry;
pub mod image;
pub mod page;
pub mod registry;

pub use client::CatalogClient;
pub use entry::{CatalogEntry, ItemId};
pub use image::ImageUrlTemplate;
pub use page::{id_from_url, ListingPage, NamedResource};
pub use registry::CatalogRegistry;
