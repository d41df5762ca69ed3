//! Native front-end for the fiirust base64 codec.
//!
//! Mirrors the browser page: a selected file is encoded into `result.txt`,
//! typed text is encoded and printed.

pub mod cli;
