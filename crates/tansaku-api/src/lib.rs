//! AniList catalog client for Tansaku.
//!
//! The GUI consumes the service-agnostic [`traits::AnimeCatalog`] seam;
//! the `anilist` module provides the one concrete implementation.

pub mod anilist;
pub mod traits;

pub use anilist::{AniListClient, AniListError};
