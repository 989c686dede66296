// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: one artwork at a time, its caption and the navigation row.

pub mod component;

pub use component::{Message, State, ViewEnv};
