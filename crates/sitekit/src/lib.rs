// SPDX-FileCopyrightText: 2024 Filip Krawczyk
//
// SPDX-License-Identifier: Apache-2.0

//! A small config-driven static site generator.
//!
//! A site is a YAML config ([`SiteConfig`]), a directory of markdown
//! content, and an optional static asset tree. [`build()`] renders the
//! whole thing to plain HTML files. Sites customize the shared theme
//! through [`Overrides`] hooks instead of forking layout code.

mod analytics;
pub mod build;
pub mod config;
mod content;
pub mod error;
mod head;
mod layouts;
pub mod overrides;
pub mod partials;

pub use build::{BuildParams, BuildReport, build, build_with_date, check};
pub use config::SiteConfig;
pub use error::{Error, Result};
pub use overrides::Overrides;
pub use partials::{FooterContext, SocialsProps};
