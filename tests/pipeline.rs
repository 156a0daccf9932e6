mod common;

use std::fs::File;

use assert_cmd::Command;
use common::TestWorkspace;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use plant_unify::acquire::DirectoryAcquirer;
use plant_unify::error::PipelineError;
use plant_unify::keys::KEY_PRIORITY;
use plant_unify::pipeline::run_pipeline;
use plant_unify::registry::{DatasetSpec, Registry};
use predicates::str::contains;

fn two_dataset_workspace() -> (TestWorkspace, Registry) {
    let workspace = TestWorkspace::new();
    workspace.write("a/data.csv", "id,val\n1,10-20\n");
    workspace.write("b/data.csv", "id,val2\n1,5\n");
    let registry = Registry {
        datasets: vec![
            DatasetSpec::new("a", "local/a", &[]),
            DatasetSpec::new("b", "local/b", &[]),
        ],
    };
    (workspace, registry)
}

#[test]
fn end_to_end_joins_coerced_datasets_on_the_shared_key() {
    let (workspace, registry) = two_dataset_workspace();
    let acquirer = DirectoryAcquirer::new(workspace.path());
    let output = workspace.path().join("out/unified.csv");

    let written = run_pipeline(&registry, &acquirer, KEY_PRIORITY, &output).expect("pipeline");
    assert_eq!(written, output);

    let mut reader = csv::Reader::from_path(&output).expect("read output");
    let headers: Vec<String> = reader
        .headers()
        .expect("headers")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(
        headers,
        vec!["id", "val", "source_dataset", "val2", "source_dataset_b"]
    );
    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("rows");
    assert_eq!(rows.len(), 1);
    // "10-20" coerced to its midpoint, "5" to a number; both render without
    // a fractional part.
    assert_eq!(&rows[0][0], "1");
    assert_eq!(&rows[0][1], "15");
    assert_eq!(&rows[0][2], "a");
    assert_eq!(&rows[0][3], "5");
    assert_eq!(&rows[0][4], "b");
}

#[test]
fn parquet_destinations_get_columnar_output() {
    let (workspace, registry) = two_dataset_workspace();
    let acquirer = DirectoryAcquirer::new(workspace.path());
    let output = workspace.path().join("out/unified.parquet");

    run_pipeline(&registry, &acquirer, KEY_PRIORITY, &output).expect("pipeline");

    let file = File::open(&output).expect("open parquet");
    let builder = ParquetRecordBatchReaderBuilder::try_new(file).expect("parquet metadata");
    let names: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|field| field.name().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["id", "val", "source_dataset", "val2", "source_dataset_b"]
    );
    let mut reader = builder.build().expect("parquet reader");
    let batch = reader.next().expect("one batch").expect("readable batch");
    assert_eq!(batch.num_rows(), 1);
}

#[test]
fn empty_registry_fails_without_writing_output() {
    let workspace = TestWorkspace::new();
    let acquirer = DirectoryAcquirer::new(workspace.path());
    let registry = Registry {
        datasets: Vec::new(),
    };
    let output = workspace.path().join("out/unified.csv");

    let err = run_pipeline(&registry, &acquirer, KEY_PRIORITY, &output)
        .expect_err("nothing to merge");
    assert!(matches!(
        err.downcast_ref::<PipelineError>(),
        Some(PipelineError::EmptyInput)
    ));
    assert!(!output.exists());
}

#[test]
fn one_failing_dataset_aborts_the_whole_run() {
    let workspace = TestWorkspace::new();
    workspace.write("a/data.csv", "id,val\n1,2\n");
    let registry = Registry {
        datasets: vec![
            DatasetSpec::new("a", "local/a", &[]),
            DatasetSpec::new("missing", "local/missing", &[]),
        ],
    };
    let acquirer = DirectoryAcquirer::new(workspace.path());
    let output = workspace.path().join("out/unified.csv");

    let err = run_pipeline(&registry, &acquirer, KEY_PRIORITY, &output)
        .expect_err("missing dataset");
    assert!(matches!(
        err.downcast_ref::<PipelineError>(),
        Some(PipelineError::NotFound { .. })
    ));
    assert!(!output.exists());
}

#[test]
fn merge_command_runs_from_the_cli() {
    let (workspace, _) = two_dataset_workspace();
    let registry_path = workspace.write(
        "registry.yaml",
        "datasets:\n  - name: a\n    ref: local/a\n  - name: b\n    ref: local/b\n",
    );
    let output = workspace.path().join("out/unified.csv");

    Command::cargo_bin("plant-unify")
        .expect("binary exists")
        .args([
            "merge",
            "--output",
            output.to_str().expect("utf-8 path"),
            "--data-root",
            workspace.path().to_str().expect("utf-8 path"),
            "--registry",
            registry_path.to_str().expect("utf-8 path"),
        ])
        .assert()
        .success();

    let contents = std::fs::read_to_string(&output).expect("output written");
    assert!(contents.starts_with("id,val,source_dataset,val2,source_dataset_b"));
    assert!(contents.contains("1,15,a,5,b"));
}

#[test]
fn merge_command_reports_failures_on_stderr() {
    let workspace = TestWorkspace::new();
    let output = workspace.path().join("out/unified.csv");

    Command::cargo_bin("plant-unify")
        .expect("binary exists")
        .args([
            "merge",
            "--output",
            output.to_str().expect("utf-8 path"),
            "--data-root",
            workspace.path().join("nowhere").to_str().expect("utf-8 path"),
        ])
        .assert()
        .failure()
        .stderr(contains("error"));
}
