//! Path-only commands: resolve, join, dirname. No I/O beyond the cwd lookup.

pub fn run_resolve(path: &str) {
    println!("{}", vfs_core::path_resolve(path));
}

pub fn run_join(path: &str, segment: &str) {
    println!("{}", vfs_core::path_join(path, segment));
}

pub fn run_dirname(path: &str) {
    println!("{}", vfs_core::path_dir_name(path));
}
