//! In-memory lending catalog and member registry with atomic snapshot persistence.
//!
//! # Examples
//!
//! ```
//! use lendlog::{core::library::Library, item::ItemDraft};
//!
//! let mut library = Library::new();
//! library
//!     .add_item(ItemDraft::new("1984", "George Orwell", "978-0451524935"))
//!     .expect("add item");
//! let alice = library.add_member("Alice Johnson").expect("add member");
//! assert_eq!(alice, 1001);
//!
//! library.borrow("978-0451524935", alice).expect("borrow");
//! assert!(library.find_item("978-0451524935").unwrap().is_borrowed());
//! library.return_item("978-0451524935", alice).expect("return");
//! ```
//!
//! Saving and loading through a configured store:
//! ```no_run
//! use lendlog::{config::StoreConfig, core::library::Library, persist};
//!
//! let config = StoreConfig::for_path("library_data.json");
//! let mut store = config.open();
//! let mut library = persist::load(store.as_ref());
//! if library.is_empty() {
//!     library.add_member("Alice Johnson").expect("add member");
//! }
//! if let Err(err) = persist::save(&library, store.as_mut()) {
//!     eprintln!("error saving data: {err}");
//! }
//! ```
#![deny(missing_docs)]

/// Store location and backend selection.
pub mod config;
/// Catalog, registry, lending coordinator, and aggregate.
pub mod core;
/// Item records and lending state.
pub mod item;
/// Member records.
pub mod member;
/// Snapshot stores and aggregate save/load.
pub mod persist;
/// Versioned snapshot schema.
pub mod snapshot;
/// Shared primitive identifiers.
pub mod types;
