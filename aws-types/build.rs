/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let rust_version = rustc_version::version()
        .map(|v| v.to_string())
        .unwrap_or_else(|_| "unknown".to_string());
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest = Path::new(&out_dir).join("build_env.rs");
    fs::write(
        dest,
        format!("const RUST_VERSION: &str = \"{}\";\n", rust_version),
    )
    .expect("could not write build_env.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
