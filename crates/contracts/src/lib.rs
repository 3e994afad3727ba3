//! Data model of the PFT browser: the decoded contents of `data.json`

pub mod domain;
pub mod enums;
pub mod shared;
