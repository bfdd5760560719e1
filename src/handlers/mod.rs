// src/handlers/mod.rs
use serde::Deserialize;
use crate::services::coerce::CoercionMode;

pub mod analysis;
pub mod calculators;
pub mod error;
pub mod markets;

/// `?strict=true` switches amount coercion to strict validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ModeQuery {
    pub strict: bool,
}

impl ModeQuery {
    pub fn mode(&self) -> CoercionMode {
        if self.strict {
            CoercionMode::Strict
        } else {
            CoercionMode::Lenient
        }
    }
}
