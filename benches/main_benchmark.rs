use cmakegen::config::ProjectConfig;
use cmakegen::manifest;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const MOCK_CONFIG: &str = r#"{
    "projectName": "benchmark_project",
    "enableTests": true,
    "testFramework": "gtest",
    "cStandard": "11",
    "cppStandard": "20",
    "libraries": [
        { "name": "core", "sources": ["core.cpp", "alloc.cpp"], "headers": ["core.hpp", "alloc.hpp"] },
        { "name": "net", "sources": ["net.cpp"], "headers": ["net.hpp"] },
        { "name": "util", "headers": ["util.hpp"] }
    ],
    "executables": [
        { "name": "server", "sources": ["server.cpp", "config.cpp"], "dependencies": ["core", "net"] },
        { "name": "client", "sources": ["client.cpp"], "dependencies": ["net", "util"] }
    ]
}"#;

fn bench_config_parse(c: &mut Criterion) {
    c.bench_function("parse_project_template", |b| {
        b.iter(|| ProjectConfig::from_json_str(black_box(MOCK_CONFIG)).unwrap())
    });
}

fn bench_build_manifest(c: &mut Criterion) {
    let config = ProjectConfig::from_json_str(MOCK_CONFIG).unwrap();
    c.bench_function("build_manifest", |b| {
        b.iter(|| manifest::build_manifest(black_box(&config)).unwrap())
    });
}

criterion_group!(benches, bench_config_parse, bench_build_manifest);
criterion_main!(benches);
