// SPDX-License-Identifier: AGPL-3.0-or-later
//! Fuzz target for lexical path normalization

#![no_main]

use libfuzzer_sys::fuzz_target;
use vsh_core::path::{normalize, VirtualPath};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let (cwd, path) = input.split_once('\n').unwrap_or(("/", input));
        let cwd = VirtualPath::new(cwd).to_path_string();

        let once = normalize(path, &cwd);
        assert!(once.starts_with('/'));
        assert!(once == "/" || !once.ends_with('/'));
        assert!(!once.contains("//"));
        assert_eq!(normalize(&once, &once), once);

        let vpath = VirtualPath::new(&once);
        let _ = vpath.name();
        let _ = vpath.to_dir_prefix();
    }
});
