//! Full runs through the generation pipeline.

use tests::*;

use pretty_assertions::assert_eq;
use std_util::prelude::*;
use tablesmith_codegen::Output;
use tablesmith_core::{ArtifactKind, ClassMetadata, Emit, Generator, Result};

/// Records every emitter call.
#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<(ArtifactKind, String)>,
    finished: Vec<String>,
}

impl Emit for Recorder {
    fn emit(&mut self, kind: ArtifactKind, class: &ClassMetadata) -> Result<()> {
        self.calls.push((kind, class.name.clone()));
        Ok(())
    }

    fn finish(&mut self, classes: &[ClassMetadata]) -> Result<()> {
        self.finished = classes.iter().map(|class| class.name.clone()).collect();
        Ok(())
    }
}

fn shop() -> SchemaDef {
    SchemaDef::new()
        .table(TableDef::new("user").pk("id", "integer").column("name", "text"))
        .table(
            TableDef::new("order")
                .pk("id", "integer")
                .fk("user_id", "integer", "user", "id"),
        )
}

async fn artifacts_emitted_in_order(s: impl Setup) {
    let reader = s.reader(&shop()).await.unwrap();
    let generator = Generator::new(reader);

    let mut recorder = Recorder::default();
    let classes = generator.run(&mut recorder).await.unwrap();

    let expected: Vec<_> = ["Order", "User"]
        .into_iter()
        .flat_map(|class| {
            ArtifactKind::ORDERED
                .into_iter()
                .map(move |kind| (kind, class.to_string()))
        })
        .collect();

    assert_eq!(recorder.calls, expected);
    assert_eq!(recorder.finished, ["Order", "User"]);
    assert_eq!(classes.len(), 2);
}

async fn only_selected_tables(s: impl Setup) {
    let schema = shop().table(TableDef::new("tag").pk("id", "integer").column("label", "text"));

    let reader = s.reader(&schema).await.unwrap();
    let generator = Generator::new(reader).only_tables(["tag"]);

    let mut recorder = Recorder::default();
    generator.run(&mut recorder).await.unwrap();

    assert_eq!(recorder.finished, ["Tag"]);
    assert_eq!(recorder.calls.len(), ArtifactKind::ORDERED.len());
}

async fn selection_pulls_in_related_tables(s: impl Setup) {
    let schema = shop()
        .table(
            TableDef::new("order_line")
                .pk("id", "integer")
                .fk("order_id", "integer", "order", "id"),
        )
        .table(TableDef::new("tag").pk("id", "integer"));

    let reader = s.reader(&schema).await.unwrap();
    let generator = Generator::new(reader).only_tables(["user"]);

    let mut recorder = Recorder::default();
    let classes = generator.run(&mut recorder).await.unwrap();

    // `user` -> `order` -> `order_line`, but never the unrelated `tag`
    assert_eq!(recorder.finished, ["Order", "OrderLine", "User"]);
    assert_eq!(classes.len(), 3);
    assert_eq!(recorder.calls.len(), 3 * ArtifactKind::ORDERED.len());

    let classes = generator.build_all().await.unwrap();
    let names: Vec<_> = classes.iter().map(|class| &class.name[..]).collect();
    assert_eq!(names, ["Order", "OrderLine", "User"]);
}

async fn selected_output_is_closed(s: impl Setup) {
    let reader = s.reader(&shop()).await.unwrap();
    let generator = Generator::new(reader).only_tables(["user"]);

    let mut output = Output::new();
    generator.run(&mut output).await.unwrap();

    let record = output.file("record/user.rs").unwrap().body.to_string();
    assert!(record.contains("pub orders : Vec < Order >"));

    // every class the record names has its own file and module entry
    assert!(output.file("record/order.rs").is_some());
    let index = output.file("record/mod.rs").unwrap().body.to_string();
    assert!(index.contains("mod order ;"));
    assert!(index.contains("mod user ;"));
    assert_eq!(output.files.len(), 2 * 4 + 4 + 2);
}

async fn unknown_table_is_rejected(s: impl Setup) {
    let reader = s.reader(&shop()).await.unwrap();
    let generator = Generator::new(reader).only_tables(["invoice"]);

    let mut recorder = Recorder::default();
    let err = assert_err!(generator.run(&mut recorder).await);

    assert!(err.to_string().contains("invoice"));
    assert_empty!(recorder.calls);
}

async fn malformed_table_aborts_run(s: impl Setup) {
    let schema = shop().table(TableDef::new("audit").column("message", "text"));

    let reader = s.reader(&schema).await.unwrap();
    let generator = Generator::new(reader);

    let mut recorder = Recorder::default();
    let err = assert_err!(generator.run(&mut recorder).await);

    assert!(err.is_malformed_table());
    // `audit` sorts first, so nothing was emitted and `finish` never ran
    assert_empty!(recorder.calls);
    assert_empty!(recorder.finished);
}

async fn codegen_output(s: impl Setup) {
    let reader = s.reader(&shop()).await.unwrap();
    let generator = Generator::new(reader);

    let mut output = Output::new();
    generator.run(&mut output).await.unwrap();

    let record = output.file("record/order.rs").unwrap().body.to_string();
    assert!(record.contains("pub struct Order"));
    assert!(record.contains("pub user : Option < Box < User > >"));

    let record = output.file("record/user.rs").unwrap().body.to_string();
    assert!(record.contains("pub orders : Vec < Order >"));
    assert!(record.contains("pub name : Option < String >"));

    let api = output.file("api/user_api.rs").unwrap().body.to_string();
    assert!(api.contains("\"/users\""));

    assert!(output.file("support.rs").is_some());
    assert!(output.file("mod.rs").is_some());
    assert_eq!(output.files.len(), 2 * 4 + 4 + 2);
}

tests!(
    artifacts_emitted_in_order,
    only_selected_tables,
    selection_pulls_in_related_tables,
    selected_output_is_closed,
    unknown_table_is_rejected,
    malformed_table_aborts_run,
    codegen_output,
);
