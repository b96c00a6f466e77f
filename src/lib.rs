// Copyright (c) 2016-2021 Fabian Schuiki

//! A tool that draws the module hierarchy of hardware designs.

#[macro_use]
extern crate log;

// Re-export everything from the common crate.
pub extern crate svgraph_common as common;
pub use crate::common::*;

pub extern crate svgraph_svlog as svlog;

pub mod dot;
