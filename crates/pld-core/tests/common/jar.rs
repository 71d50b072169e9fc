//! Jar fixtures built in memory.

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

pub fn jar(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(content).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

pub fn plain(name: &str) -> Vec<u8> {
    jar(&[("plugin.yml", format!("name: {name}").as_bytes())])
}

pub fn with_dependencies(name: &str, dependencies_json: &str) -> Vec<u8> {
    jar(&[
        ("plugin.yml", format!("name: {name}").as_bytes()),
        ("dependencies.json", dependencies_json.as_bytes()),
    ])
}
