#![allow(dead_code)]

use std::{fs, path::PathBuf};

use uuid::Uuid;

pub fn temp_root() -> PathBuf {
    let root = std::env::temp_dir().join(format!("classmark-{}", Uuid::new_v4()));
    fs::create_dir_all(&root).expect("create temp root");
    root
}

pub const COHORT: &str = "3 50\n101 80 60\n102 20 90\n103 50 50\n";
