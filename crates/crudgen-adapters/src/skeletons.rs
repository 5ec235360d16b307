//! Built-in skeleton set.
//!
//! This module ships a minimal, working skeleton for every artifact the
//! generator knows about, and [`install`], which materialises the set into a
//! skeleton directory through the `Filesystem` port.  Users are expected to
//! copy and adapt these; the generator itself only ever reads whatever
//! directory it is pointed at.
//!
//! Skeleton placeholders use the renderer's `@@name@@` syntax (see
//! `renderer::substitution`), so the Twig syntax of the generated view files
//! survives rendering untouched.
//!
//! # Layout inside the skeleton directory
//!
//! ```text
//! controller.skeleton
//! controller_test.skeleton
//! views/index.html.twig
//! views/show.html.twig
//! views/new.html.twig
//! views/edit.html.twig
//! routing.yml
//! routing.xml
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crudgen_core::{
    application::ports::Filesystem,
    error::{CrudgenError, CrudgenResult},
};

/// One file of the built-in set.
#[derive(Debug, Clone, Copy)]
pub struct SkeletonFile {
    pub relative_path: &'static str,
    pub contents: &'static str,
}

/// The complete built-in set, in install order.
pub const fn builtin() -> &'static [SkeletonFile] {
    BUILTIN
}

/// Install the built-in set into `dir`.
///
/// Refuses to overwrite an existing skeleton file unless `force` is set.
/// Returns the installed paths in order.
#[instrument(skip_all, fields(dir = %dir.display(), force))]
pub fn install(
    filesystem: &dyn Filesystem,
    dir: &Path,
    force: bool,
) -> CrudgenResult<Vec<PathBuf>> {
    if !force {
        for file in BUILTIN {
            let path = dir.join(file.relative_path);
            if filesystem.exists(&path) {
                return Err(CrudgenError::Configuration {
                    message: format!(
                        "skeleton file already exists: {} (use --force to overwrite)",
                        path.display()
                    ),
                });
            }
        }
    }

    let mut installed = Vec::with_capacity(BUILTIN.len());
    for file in BUILTIN {
        let path = dir.join(file.relative_path);
        if let Some(parent) = path.parent() {
            filesystem.create_dir_all(parent)?;
        }
        filesystem.write_file(&path, file.contents)?;
        debug!(path = %path.display(), "skeleton installed");
        installed.push(path);
    }

    info!(count = installed.len(), "built-in skeleton set installed");
    Ok(installed)
}

// ── The set itself ────────────────────────────────────────────────────────────

const BUILTIN: &[SkeletonFile] = &[
    SkeletonFile {
        relative_path: "controller.skeleton",
        contents: CONTROLLER,
    },
    SkeletonFile {
        relative_path: "controller_test.skeleton",
        contents: CONTROLLER_TEST,
    },
    SkeletonFile {
        relative_path: "views/index.html.twig",
        contents: VIEW_INDEX,
    },
    SkeletonFile {
        relative_path: "views/show.html.twig",
        contents: VIEW_SHOW,
    },
    SkeletonFile {
        relative_path: "views/new.html.twig",
        contents: VIEW_NEW,
    },
    SkeletonFile {
        relative_path: "views/edit.html.twig",
        contents: VIEW_EDIT,
    },
    SkeletonFile {
        relative_path: "routing.yml",
        contents: ROUTING_YML,
    },
    SkeletonFile {
        relative_path: "routing.xml",
        contents: ROUTING_XML,
    },
];

const CONTROLLER: &str = r#"<?php

namespace @@module_namespace@@\Controller;

/**
 * @@entity@@ controller.
 *
 * Generated actions: @@actions@@.
 * Route names use the '@@route_prefix@@' prefix (routing format: @@format@@).
 */
class @@entity_class@@Controller extends Controller
{
    /**
     * Lists all @@entity@@ records.
     */
    public function indexAction()
    {
        $records = $this->getRepository('@@module_name@@:@@entity@@')->findAll();

        return $this->render('@@module_name@@:@@entity@@:index.html.twig', array(
            'records' => $records,
        ));
    }

    /**
     * Finds and displays a single @@entity@@ record.
     */
    public function showAction($id)
    {
        $record = $this->getRepository('@@module_name@@:@@entity@@')->find($id);

        if (!$record) {
            throw $this->createNotFoundException('Unable to find @@entity_class@@.');
        }

        return $this->render('@@module_name@@:@@entity@@:show.html.twig', array(
            'record' => $record,
        ));
    }
}
"#;

const CONTROLLER_TEST: &str = r#"<?php

namespace @@module_namespace@@\Tests\Controller;

/**
 * Functional tests for the generated @@entity@@ controller.
 *
 * Covered actions: @@actions@@.
 */
class @@entity_class@@ControllerTest extends WebTestCase
{
    public function testIndex()
    {
        $client = static::createClient();

        $crawler = $client->request('GET', '/@@route_prefix@@/');

        $this->assertTrue($client->getResponse()->isSuccessful());
    }

    public function testShow()
    {
        $client = static::createClient();

        $client->request('GET', '/@@route_prefix@@/1');

        $this->assertTrue($client->getResponse()->isSuccessful());
    }
}
"#;

const VIEW_INDEX: &str = r#"{# @@entity@@ list view. Columns: @@fields@@ #}
<h1>@@entity@@ list</h1>

<table class="records">
    <thead>
        <tr>
            {# one column per field: @@fields@@ #}
        </tr>
    </thead>
    <tbody>
        {% for record in records %}
        <tr>
            <td><a href="{{ path('@@route_prefix@@_show', { 'id': record.id }) }}">{{ record.id }}</a></td>
            {# per-record links: @@record_actions@@ #}
        </tr>
        {% endfor %}
    </tbody>
</table>

{# enabled actions: @@actions@@ #}
"#;

const VIEW_SHOW: &str = r#"{# @@entity@@ detail view. Fields: @@fields@@ #}
<h1>@@entity@@</h1>

<table class="record">
    <tbody>
        {# one row per field: @@fields@@ #}
    </tbody>
</table>

<a href="{{ path('@@route_prefix@@_index') }}">Back to the list</a>
{# enabled actions: @@actions@@ #}
"#;

const VIEW_NEW: &str = r#"{# @@entity@@ creation form #}
<h1>New @@entity@@</h1>

<form action="{{ path('@@route_prefix@@_new') }}" method="post">
    <input type="submit" value="Create" />
</form>

<a href="{{ path('@@route_prefix@@_index') }}">Back to the list</a>
{# enabled actions: @@actions@@ #}
"#;

const VIEW_EDIT: &str = r#"{# @@entity@@ edit form #}
<h1>Edit @@entity@@</h1>

<form action="{{ path('@@route_prefix@@_edit') }}" method="post">
    <input type="submit" value="Update" />
</form>

<a href="{{ path('@@route_prefix@@_index') }}">Back to the list</a>
{# enabled actions: @@actions@@ #}
"#;

const ROUTING_YML: &str = r#"# @@entity@@ routes (enabled actions: @@actions@@)

@@route_prefix@@_index:
    path:     /
    defaults: { _controller: "@@module_name@@:@@entity@@:index" }

@@route_prefix@@_show:
    path:     /{id}
    defaults: { _controller: "@@module_name@@:@@entity@@:show" }
"#;

const ROUTING_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<!-- @@entity@@ routes (enabled actions: @@actions@@) -->
<routes>
    <route id="@@route_prefix@@_index" path="/">
        <default key="_controller">@@module_name@@:@@entity@@:index</default>
    </route>

    <route id="@@route_prefix@@_show" path="/{id}">
        <default key="_controller">@@module_name@@:@@entity@@:show</default>
    </route>
</routes>
"#;

// ── tests ─────────────────────────────────────────────────────────────────────
