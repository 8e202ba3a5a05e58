//! End-to-end tests: generate into a directory, read back, verify.

use cyclegen_core::{
    ColouredGraph, GenerateError, GeneratorBuilder, GraphDocument, OutputName, ReadLimits,
    generate, open_output_dir,
};
use cyclegen_test_support::fs::{file_names, read_single_file};
use rstest::rstest;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[rstest]
fn default_generation_round_trips_through_the_checker() -> TestResult {
    let dir = TempDir::new()?;
    let generated = generate(dir.path())?;

    let (name, contents) = read_single_file(dir.path())?;
    assert_eq!(name, generated.name.to_string());
    assert_eq!(generated.vertex_count, 999);
    assert_eq!(generated.bytes, contents.len());

    let document = GraphDocument::parse(&contents, ReadLimits::default())?;
    assert_eq!(document.vertex_count(), 999);
    assert_eq!(document.edge_count(), 999);
    let report = ColouredGraph::from_document(&document).verify()?;
    assert_eq!(report.vertices_visited, 999);
    Ok(())
}

#[rstest]
fn explicit_names_are_not_reused() -> TestResult {
    let dir = TempDir::new()?;
    let handle = open_output_dir(dir.path())?;
    let generator = GeneratorBuilder::new().with_vertex_count(5).build()?;
    let name = OutputName::random();

    generator.generate_named(&handle, name)?;
    let err = generator
        .generate_named(&handle, name)
        .expect_err("second write under the same name must fail");
    assert!(matches!(err, GenerateError::FileSystem { .. }));
    assert_eq!(file_names(dir.path())?, [name.to_string()]);
    Ok(())
}

#[rstest]
#[case(1)]
#[case(5)]
#[case(1000)]
fn generated_content_matches_render(#[case] vertices: usize) -> TestResult {
    let dir = TempDir::new()?;
    let generator = GeneratorBuilder::new().with_vertex_count(vertices).build()?;
    generator.generate_at(dir.path())?;
    let (_, contents) = read_single_file(dir.path())?;
    assert_eq!(contents, generator.render());
    assert_eq!(contents.lines().count(), 2 * vertices + 1);
    Ok(())
}
