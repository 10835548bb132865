//! Test helpers
//!
//! Shared fixtures for end-to-end scanning tests

#![allow(dead_code)]

use easylex::{Token, TokenId};
use std::path::PathBuf;

/// A small configuration for an expression language: numbers, names,
/// two-character operators before their one-character prefixes
pub const CALC_CONFIG: &str = r#"{
    "buffer": {"low_water_mark": 8, "chunk_size": 4},
    "rules": {
        "whitespace": {"kind": "pattern", "id": -1, "patterns": [" ", "\t", "\n"]},
        "rules": [
            {"kind": "regex", "id": 1, "pattern": "[0-9]+"},
            {"kind": "regex", "id": 2, "pattern": "[a-z]+"},
            {"kind": "pattern", "id": 3, "patterns": ["**", "*", "+", "-", "/"]},
            {"kind": "pattern", "id": 4, "patterns": ["(", ")"]}
        ]
    }
}"#;

pub const NUMBER: TokenId = TokenId(1);
pub const NAME: TokenId = TokenId(2);
pub const OPERATOR: TokenId = TokenId(3);
pub const PAREN: TokenId = TokenId(4);

/// (id, literal) pairs, for compact assertions
pub fn summary(tokens: &[Token]) -> Vec<(TokenId, &str)> {
    tokens.iter().map(|t| (t.id, t.literal.as_str())).collect()
}

/// Write `contents` to a fresh file under the system temp directory
pub fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("easylex-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).expect("temp file is writable");
    path
}
