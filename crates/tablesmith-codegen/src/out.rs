use crate::{expand, names::ClassNames};

use tablesmith_core::{
    generate::{ArtifactKind, Emit},
    model::ClassMetadata,
    Result,
};

use proc_macro2::TokenStream;
use std::path::PathBuf;

/// Generated files of a whole run, in emission order.
#[derive(Debug, Default)]
pub struct Output {
    pub files: Vec<FileOutput>,
}

/// One generated source file.
#[derive(Debug)]
pub struct FileOutput {
    /// Path relative to the output directory
    pub path: PathBuf,

    /// The artifact kind, or `None` for module indexes and the support module
    pub kind: Option<ArtifactKind>,

    /// Class the file was generated for
    pub class: Option<String>,

    pub body: TokenStream,
}

impl Output {
    pub fn new() -> Output {
        Output::default()
    }

    /// Files generated for one class, in artifact order.
    pub fn class_files<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a FileOutput> + 'a {
        self.files
            .iter()
            .filter(move |file| file.class.as_deref() == Some(class))
    }

    pub fn file(&self, path: impl Into<PathBuf>) -> Option<&FileOutput> {
        let path = path.into();
        self.files.iter().find(|file| file.path == path)
    }
}

impl Emit for Output {
    fn emit(&mut self, kind: ArtifactKind, class: &ClassMetadata) -> Result<()> {
        let body = expand::artifact(kind, class)?;
        let path = artifact_path(kind, &ClassNames::new(class));

        tracing::debug!(class = %class.name, %kind, path = %path.display(), "expanded");

        self.files.push(FileOutput {
            path,
            kind: Some(kind),
            class: Some(class.name.clone()),
            body,
        });

        Ok(())
    }

    fn finish(&mut self, classes: &[ClassMetadata]) -> Result<()> {
        for kind in ArtifactKind::ORDERED {
            self.push_run_file(
                PathBuf::from(kind.as_str()).join("mod.rs"),
                expand::expand_module_index(kind, classes),
            );
        }

        self.push_run_file("support.rs", expand::expand_support());
        self.push_run_file("mod.rs", expand::expand_root_module());

        Ok(())
    }
}

impl Output {
    fn push_run_file(&mut self, path: impl Into<PathBuf>, body: TokenStream) {
        self.files.push(FileOutput {
            path: path.into(),
            kind: None,
            class: None,
            body,
        });
    }
}

fn artifact_path(kind: ArtifactKind, names: &ClassNames) -> PathBuf {
    let module = match kind {
        ArtifactKind::Record => &names.record_module,
        ArtifactKind::Repository => &names.repository_module,
        ArtifactKind::Service => &names.service_module,
        ArtifactKind::Api => &names.api_module,
    };

    PathBuf::from(kind.as_str()).join(format!("{}.rs", crate::names::file_stem(module)))
}
