use std::{
    fmt::Write as _,
    path::{Path, PathBuf},
};

fn main() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
    println!("cargo::rerun-if-changed={}", root.display());

    let mut code = String::new();
    emit_dir(&mut code, &root, 0);

    let out_path = PathBuf::from(std::env::var("OUT_DIR").unwrap()).join("assets.rs");
    std::fs::write(&out_path, code).unwrap();
    println!("cargo::rustc-env=ASSETS={}", out_path.display());
}

fn emit_dir(code: &mut String, dir: &Path, depth: usize) {
    let indent = "    ".repeat(depth);

    let mut entries = dir
        .read_dir()
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            !path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with('.'))
        })
        .collect::<Vec<_>>();
    entries.sort();

    for path in entries {
        let name = path.file_name().unwrap().to_str().unwrap();
        if path.is_dir() {
            writeln!(code, "{indent}pub mod {} {{", snake_case(name)).unwrap();
            emit_dir(code, &path, depth + 1);
            writeln!(code, "{indent}}}").unwrap();
        } else if std::fs::read_to_string(&path).is_ok() {
            writeln!(
                code,
                "{indent}pub const {}: &str = ::core::include_str!({:?});",
                snake_case(name).to_uppercase(),
                path,
            )
            .unwrap();
        } else {
            writeln!(
                code,
                "{indent}pub const {}: &[u8] = ::core::include_bytes!({:?});",
                snake_case(name).to_uppercase(),
                path,
            )
            .unwrap();
        }
    }
}

fn snake_case(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}
