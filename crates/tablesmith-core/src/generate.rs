//! The per-table generation pipeline.

use crate::{builder, model::ClassMetadata, name, schema::SchemaReader, Result};

use serde::Serialize;
use std::{
    collections::{HashMap, VecDeque},
    fmt,
};

/// The kinds of source artifact generated for each class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// The data-record definition
    Record,

    /// The data-access layer
    Repository,

    /// The business-logic layer
    Service,

    /// The API-entry layer
    Api,
}

impl ArtifactKind {
    /// Emission order. Each later artifact names the class generated by the
    /// one before it, so kinds are always emitted in this order and never
    /// concurrently.
    pub const ORDERED: [ArtifactKind; 4] = [
        ArtifactKind::Record,
        ArtifactKind::Repository,
        ArtifactKind::Service,
        ArtifactKind::Api,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Record => "record",
            ArtifactKind::Repository => "repository",
            ArtifactKind::Service => "service",
            ArtifactKind::Api => "api",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives finished class metadata. Implemented by the code emitters.
///
/// Emitters must not re-derive relationship or type decisions; everything
/// they need is already resolved on the [`ClassMetadata`].
pub trait Emit {
    /// Emits one artifact for one class.
    fn emit(&mut self, kind: ArtifactKind, class: &ClassMetadata) -> Result<()>;

    /// Called once after every table has been emitted, with all classes in
    /// enumeration order. Used for run-wide output such as module indexes.
    fn finish(&mut self, _classes: &[ClassMetadata]) -> Result<()> {
        Ok(())
    }
}

/// Drives a full run: enumerate tables, build each table's metadata, and hand
/// it to the emitter.
///
/// Tables are processed one at a time against a single reader. The first
/// error aborts the run.
#[derive(Debug)]
pub struct Generator<R> {
    reader: R,

    /// When non-empty, only these tables are generated
    tables: Vec<String>,
}

impl<R: SchemaReader> Generator<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            tables: vec![],
        }
    }

    /// Restricts the run to the named tables. Enumeration order is kept.
    pub fn only_tables<I, S>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables = tables.into_iter().map(Into::into).collect();
        self
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Consumes the generator, returning the reader so the caller can release it.
    pub fn into_reader(self) -> R {
        self.reader
    }

    /// Builds the metadata of every selected table without emitting anything.
    ///
    /// When the run is restricted with [`Generator::only_tables`], tables
    /// reachable from the selection through relationship fields are built
    /// too, so every class a generated class names is generated with it.
    pub async fn build_all(&self) -> Result<Vec<ClassMetadata>> {
        let tables = self.reader.list_tables().await?;
        let mut selected = self.selected_tables(&tables)?;

        let by_class: HashMap<String, &String> = tables
            .iter()
            .map(|table| (name::class_name(table), table))
            .collect();

        let mut built = HashMap::<String, ClassMetadata>::new();
        let mut pending: VecDeque<String> = selected.iter().cloned().collect();

        while let Some(table) = pending.pop_front() {
            if built.contains_key(&table) {
                continue;
            }

            tracing::info!(table = %table, "building metadata");
            let class = builder::build_class(&self.reader, &table).await?;

            for target in class.fields.iter().filter_map(|field| field.ty.target_class()) {
                let Some(&related) = by_class.get(target) else {
                    crate::bail!(
                        "class `{}` of table `{table}` refers to unknown class `{target}`",
                        class.name
                    );
                };

                if !selected.contains(related) {
                    tracing::debug!(table = %table, related = %related, "including related table");
                    selected.push(related.clone());
                    pending.push_back(related.clone());
                }
            }

            built.insert(table, class);
        }

        // Enumeration order, regardless of discovery order.
        Ok(tables
            .iter()
            .filter_map(|table| built.remove(table))
            .collect())
    }

    /// Builds every selected table, emits each class, then calls [`Emit::finish`].
    ///
    /// Every class is built before anything is emitted, so a table that fails
    /// to build leaves the emitter untouched.
    pub async fn run(&self, emitter: &mut dyn Emit) -> Result<Vec<ClassMetadata>> {
        let classes = self.build_all().await?;

        for class in &classes {
            tracing::info!(class = %class.name, "generating");

            for kind in ArtifactKind::ORDERED {
                tracing::debug!(class = %class.name, %kind, "emitting");
                emitter.emit(kind, class)?;
            }
        }

        emitter.finish(&classes)?;

        Ok(classes)
    }

    /// The explicitly requested tables, in enumeration order.
    fn selected_tables(&self, tables: &[String]) -> Result<Vec<String>> {
        if self.tables.is_empty() {
            return Ok(tables.to_vec());
        }

        for wanted in &self.tables {
            if !tables.contains(wanted) {
                crate::bail!("table `{wanted}` not found in schema");
            }
        }

        Ok(tables
            .iter()
            .filter(|table| self.tables.contains(table))
            .cloned()
            .collect())
    }
}
