//! Integration tests for the full generation workflow.
//!
//! Wires the real `ScaffoldGenerator` to the in-memory filesystem and the
//! substitution renderer, with the built-in skeleton set installed.

use std::path::{Path, PathBuf};

use crudgen_adapters::{MemoryFilesystem, SubstitutionRenderer, skeletons};
use crudgen_core::{
    application::{ApplicationError, Filesystem, GeneratorConfig, ScaffoldGenerator},
    domain::{ConfigFormat, DomainError, EntityMetadata, EntityName, TargetModule},
    error::CrudgenError,
};

const SKELETON_DIR: &str = "/usr/share/crudgen/skeleton";
const MODULE_ROOT: &str = "/srv/app";

struct Harness {
    filesystem: MemoryFilesystem,
    generator: ScaffoldGenerator,
}

fn harness(write_actions: bool) -> Harness {
    let filesystem = MemoryFilesystem::new();
    skeletons::install(&filesystem, Path::new(SKELETON_DIR), false).unwrap();

    let renderer = SubstitutionRenderer::new(Box::new(filesystem.clone()));
    let generator = ScaffoldGenerator::new(
        Box::new(filesystem.clone()),
        Box::new(renderer),
        GeneratorConfig::new(SKELETON_DIR, "post", write_actions),
    );

    Harness {
        filesystem,
        generator,
    }
}

fn target() -> TargetModule {
    TargetModule::new(MODULE_ROOT, "AppModule", "App").unwrap()
}

fn entity() -> EntityName {
    EntityName::parse("Blog/Post").unwrap()
}

fn metadata() -> EntityMetadata {
    EntityMetadata::new(
        vec!["id".into(), "title".into(), "body".into()],
        vec!["id".into()],
    )
}

fn generated_files(h: &Harness) -> Vec<PathBuf> {
    h.filesystem
        .list_files()
        .into_iter()
        .filter(|p| p.starts_with(MODULE_ROOT))
        .collect()
}

// ── identifier preconditions ──────────────────────────────────────────────────

#[test]
fn composite_identifier_creates_no_files() {
    let h = harness(false);
    let bad = EntityMetadata::new(
        vec!["id".into(), "tenant".into()],
        vec!["id".into(), "tenant".into()],
    );

    let err = h
        .generator
        .generate(&target(), &entity(), &bad, ConfigFormat::Yml)
        .unwrap_err();

    assert!(matches!(
        err,
        CrudgenError::Domain(DomainError::UnsupportedSchema { .. })
    ));
    assert!(generated_files(&h).is_empty());
}

#[test]
fn non_id_identifier_creates_no_files() {
    let h = harness(false);
    let bad = EntityMetadata::new(vec!["uuid".into(), "title".into()], vec!["uuid".into()]);

    let err = h
        .generator
        .generate(&target(), &entity(), &bad, ConfigFormat::Yml)
        .unwrap_err();

    assert!(matches!(
        err,
        CrudgenError::Domain(DomainError::UnsupportedSchema { .. })
    ));
    assert!(generated_files(&h).is_empty());
}

// ── produced file sets ────────────────────────────────────────────────────────

#[test]
fn read_only_yml_run_produces_exactly_five_files() {
    let h = harness(false);
    let report = h
        .generator
        .generate(&target(), &entity(), &metadata(), ConfigFormat::Yml)
        .unwrap();

    let files = generated_files(&h);
    assert_eq!(
        files,
        vec![
            PathBuf::from("/srv/app/Controller/Blog/PostController.php"),
            PathBuf::from("/srv/app/Resources/config/blog_post.routing.yml"),
            PathBuf::from("/srv/app/Resources/views/Blog/Post/index.html.twig"),
            PathBuf::from("/srv/app/Resources/views/Blog/Post/show.html.twig"),
            PathBuf::from("/srv/app/Tests/Controller/Blog/PostControllerTest.php"),
        ]
    );
    assert_eq!(report.file_count(), 5);
}

#[test]
fn write_actions_add_new_and_edit_views() {
    let h = harness(true);
    h.generator
        .generate(&target(), &entity(), &metadata(), ConfigFormat::Yml)
        .unwrap();

    let files = generated_files(&h);
    assert!(files.contains(&PathBuf::from(
        "/srv/app/Resources/views/Blog/Post/new.html.twig"
    )));
    assert!(files.contains(&PathBuf::from(
        "/srv/app/Resources/views/Blog/Post/edit.html.twig"
    )));
    assert_eq!(files.len(), 7);
}

#[test]
fn full_action_list_reaches_controller_and_routing() {
    let h = harness(true);
    h.generator
        .generate(&target(), &entity(), &metadata(), ConfigFormat::Yml)
        .unwrap();

    let controller = h
        .filesystem
        .read_file(Path::new("/srv/app/Controller/Blog/PostController.php"))
        .unwrap();
    assert!(controller.contains("index, show, new, edit, delete"));

    let routing = h
        .filesystem
        .read_file(Path::new("/srv/app/Resources/config/blog_post.routing.yml"))
        .unwrap();
    assert!(routing.contains("index, show, new, edit, delete"));
    assert!(routing.contains("post_index"));
}

#[test]
fn index_view_receives_record_actions_in_set_order() {
    let h = harness(true);
    h.generator
        .generate(&target(), &entity(), &metadata(), ConfigFormat::Yml)
        .unwrap();

    let index = h
        .filesystem
        .read_file(Path::new(
            "/srv/app/Resources/views/Blog/Post/index.html.twig",
        ))
        .unwrap();
    assert!(index.contains("show, edit, delete"));
    assert!(index.contains("id, title, body"));
}

// ── overwrite protection ──────────────────────────────────────────────────────

#[test]
fn existing_controller_aborts_before_any_other_artifact() {
    let h = harness(false);
    h.filesystem.seed_file(
        "/srv/app/Controller/Blog/PostController.php",
        "hand-written",
    );

    let err = h
        .generator
        .generate(&target(), &entity(), &metadata(), ConfigFormat::Yml)
        .unwrap_err();

    assert!(matches!(
        err,
        CrudgenError::Application(ApplicationError::DestinationExists { .. })
    ));
    // The existing controller is untouched and nothing else was written:
    // no views directory, no views, no test, no routing.
    assert_eq!(
        generated_files(&h),
        vec![PathBuf::from("/srv/app/Controller/Blog/PostController.php")]
    );
    assert!(
        !h.filesystem
            .exists(Path::new("/srv/app/Resources/views/Blog/Post"))
    );
    assert_eq!(
        h.filesystem
            .read_file(Path::new("/srv/app/Controller/Blog/PostController.php"))
            .as_deref(),
        Some("hand-written")
    );
}

#[test]
fn non_controller_artifacts_overwrite_silently() {
    let h = harness(false);
    h.filesystem
        .seed_file("/srv/app/Resources/views/Blog/Post/index.html.twig", "old");

    h.generator
        .generate(&target(), &entity(), &metadata(), ConfigFormat::Yml)
        .unwrap();

    let index = h
        .filesystem
        .read_file(Path::new(
            "/srv/app/Resources/views/Blog/Post/index.html.twig",
        ))
        .unwrap();
    assert_ne!(index, "old");
}

// ── format handling ───────────────────────────────────────────────────────────

#[test]
fn annotation_format_emits_no_routing_file() {
    let h = harness(true);
    h.generator
        .generate(&target(), &entity(), &metadata(), ConfigFormat::Annotation)
        .unwrap();

    assert!(
        !generated_files(&h)
            .iter()
            .any(|p| p.to_string_lossy().contains(".routing."))
    );
}

#[test]
fn xml_format_routes_to_xml_file() {
    let h = harness(false);
    h.generator
        .generate(&target(), &entity(), &metadata(), ConfigFormat::Xml)
        .unwrap();

    assert!(h.filesystem.exists(Path::new(
        "/srv/app/Resources/config/blog_post.routing.xml"
    )));
}

#[test]
fn bogus_format_behaves_exactly_like_yml() {
    let bogus = harness(false);
    bogus
        .generator
        .generate(
            &target(),
            &entity(),
            &metadata(),
            ConfigFormat::normalize_or_default("bogus"),
        )
        .unwrap();

    let yml = harness(false);
    yml.generator
        .generate(&target(), &entity(), &metadata(), ConfigFormat::Yml)
        .unwrap();

    assert_eq!(generated_files(&bogus), generated_files(&yml));
}

// ── determinism ───────────────────────────────────────────────────────────────

#[test]
fn identical_inputs_produce_identical_bytes() {
    let first = harness(true);
    first
        .generator
        .generate(&target(), &entity(), &metadata(), ConfigFormat::Yml)
        .unwrap();

    let second = harness(true);
    second
        .generator
        .generate(&target(), &entity(), &metadata(), ConfigFormat::Yml)
        .unwrap();

    for path in generated_files(&first) {
        assert_eq!(
            first.filesystem.read_file(&path),
            second.filesystem.read_file(&path),
            "content differs for {}",
            path.display()
        );
    }
}

// ── skeleton resolution ───────────────────────────────────────────────────────

#[test]
fn missing_skeleton_directory_surfaces_skeleton_missing() {
    let filesystem = MemoryFilesystem::new();
    let renderer = SubstitutionRenderer::new(Box::new(filesystem.clone()));
    let generator = ScaffoldGenerator::new(
        Box::new(filesystem.clone()),
        Box::new(renderer),
        GeneratorConfig::new("/nowhere", "post", false),
    );

    let err = generator
        .generate(&target(), &entity(), &metadata(), ConfigFormat::Yml)
        .unwrap_err();

    assert!(matches!(
        err,
        CrudgenError::Application(ApplicationError::SkeletonMissing { .. })
    ));
    assert!(filesystem.list_files().is_empty());
}
