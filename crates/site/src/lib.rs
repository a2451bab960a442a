// SPDX-FileCopyrightText: 2024 Filip Krawczyk
//
// SPDX-License-Identifier: Apache-2.0

//! Filip Krawczyk's personal site.
//!
//! The generator lives in the `sitekit` crate; this crate holds what
//! is specific to this site: the theme overrides and the `site`
//! binary that drives builds.

pub mod overrides;
