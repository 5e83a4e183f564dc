//! Static site data.

pub mod social;
