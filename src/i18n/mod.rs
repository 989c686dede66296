// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files (`assets/i18n/*.ftl`) are embedded in the binary.
//!
//! # Features
//!
//! - Locale selection from CLI, then config, then system settings
//! - Placeholder substitution (`tr_with_args`)
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;
