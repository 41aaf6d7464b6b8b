//! Scan and filter behaviour through the public API

mod common;

use autoload_map::features::activation::{ActivationFilter, ComponentResolver};
use autoload_map::features::path_filter::PathFilterSet;
use autoload_map::features::walker::{AcceptAll, DirectoryWalker, SubtreeErrorKind};
use autoload_map::{
    ActiveComponentList, BuildConfig, GenerationMode, ModeConfig, NullObserver, ReferenceMaps,
    ScanStrategy,
};
use common::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

fn php_filters(root: &Path) -> PathFilterSet {
    PathFilterSet::for_root(root, &[r"\.php$".to_string()], &[]).unwrap()
}

#[test]
fn test_default_excludes_candidate_list() {
    let site = Site::new();
    site.class_file("var/cache/x.php", "CachedX");
    let y = site.class_file("classes/y.php", "Y");

    let outcome = DirectoryWalker::new().walk(
        site.root(),
        &php_filters(site.root()),
        &mut AcceptAll,
        &mut NullObserver,
    );

    assert_eq!(outcome.matches, vec![y]);
}

#[test]
fn test_inactive_component_never_a_candidate() {
    let site = Site::new();
    let a = site.class_file("extension/foo/classes/a.php", "A");
    site.class_file("extension/bar/classes/z.php", "Z");

    let resolver = ComponentResolver::default();
    let active = ActiveComponentList::new(["foo"]).unwrap();
    let mut filter = ActivationFilter::new(&resolver, &active);
    let root = site.path("extension");

    let outcome =
        DirectoryWalker::new().walk(&root, &php_filters(&root), &mut filter, &mut NullObserver);

    assert_eq!(outcome.matches, vec![a]);
    assert_eq!(filter.rejected(), 1);
}

#[test]
fn test_excluded_directory_pruned_even_when_files_match_include() {
    let site = Site::new();
    site.class_file("settings/override/site.ini.php", "SettingsLeak");
    site.class_file("lib/ezc/Base/src/base.php", "ezcBase");
    let kept = site.class_file("lib/ezutils/classes/ezini.php", "eZINI");

    let mut seen = Vec::new();
    let mut visitor = |path: &Path| {
        seen.push(path.to_path_buf());
        true
    };
    DirectoryWalker::new().walk(
        site.root(),
        &php_filters(site.root()),
        &mut visitor,
        &mut NullObserver,
    );

    assert_eq!(seen, vec![kept]);
}

#[test]
fn test_extra_exclude_beats_include() {
    let site = Site::new();
    site.class_file("kernel/classes/a.php", "A");
    site.class_file("kernel/generated/b.php", "B");

    let config = BuildConfig::new()
        .extra_exclude("/generated/")
        .mode(ModeConfig::new(GenerationMode::Kernel, [site.root()]));
    let (output, _) = run(config, &ReferenceMaps::new());

    let kernel = output.map(GenerationMode::Kernel).unwrap();
    assert!(kernel.contains("A"));
    assert!(!kernel.contains("B"));
}

#[test]
fn test_malformed_component_path_fails_closed_only_when_activation_applies() {
    let site = Site::new();
    site.class_file("extension/stray.php", "Stray");
    site.class_file("extension/foo/classes/ok.php", "Ok");

    let extension = BuildConfig::new()
        .active_components(["foo"])
        .mode(ModeConfig::new(GenerationMode::Extension, [site.path("extension")]));
    let (output, _) = run(extension, &ReferenceMaps::new());
    let map = output.map(GenerationMode::Extension).unwrap();
    assert!(map.contains("Ok"));
    assert!(!map.contains("Stray"));

    let kernel = BuildConfig::new()
        .active_components(["foo"])
        .mode(ModeConfig::new(GenerationMode::Kernel, [site.path("extension")]));
    let (output, _) = run(kernel, &ReferenceMaps::new());
    let map = output.map(GenerationMode::Kernel).unwrap();
    assert!(map.contains("Ok"));
    assert!(map.contains("Stray"));
}

#[test]
fn test_activation_check_can_be_enabled_per_mode() {
    let site = Site::new();
    site.class_file("extension/foo/tests/foo_test.php", "FooTest");
    site.class_file("extension/bar/tests/bar_test.php", "BarTest");

    let config = BuildConfig::new()
        .active_components(["foo"])
        .mode(
            ModeConfig::new(GenerationMode::Tests, [site.path("extension")])
                .activation_check(true),
        );
    let (output, _) = run(config, &ReferenceMaps::new());

    let tests = output.map(GenerationMode::Tests).unwrap();
    assert!(tests.contains("FooTest"));
    assert!(!tests.contains("BarTest"));
}

#[test]
fn test_legacy_strategy_skips_fine_filtering() {
    let site = Site::new();
    site.class_file("var/cache/x.php", "CachedX");
    site.class_file("extension/bar/classes/z.php", "Z");

    let config = BuildConfig::new()
        .strategy(ScanStrategy::Legacy)
        .active_components(["foo"])
        .mode(ModeConfig::new(GenerationMode::Extension, [site.root()]));
    let (output, _) = run(config, &ReferenceMaps::new());

    let map = output.map(GenerationMode::Extension).unwrap();
    assert!(map.contains("CachedX"));
    assert!(map.contains("Z"));
}

#[test]
fn test_modes_get_separate_maps() {
    let site = Site::new();
    site.class_file("kernel/classes/ezcontentobject.php", "eZContentObject");
    site.class_file("extension/foo/classes/foo.php", "Foo");

    let config = BuildConfig::new()
        .active_components(["foo"])
        .mode(ModeConfig::new(GenerationMode::Kernel, [site.path("kernel")]))
        .mode(ModeConfig::new(GenerationMode::Extension, [site.path("extension")]));
    let (output, _) = run(config, &ReferenceMaps::new());

    assert_eq!(output.maps.len(), 2);
    assert!(output.map(GenerationMode::Kernel).unwrap().contains("eZContentObject"));
    assert!(output.map(GenerationMode::Extension).unwrap().contains("Foo"));
    assert!(!output.map(GenerationMode::Extension).unwrap().contains("eZContentObject"));
    assert_eq!(output.files_scanned, 2);
}

#[cfg(unix)]
#[test]
fn test_subtree_failure_keeps_sibling_results() {
    let site = Site::new();
    let a = site.class_file("kernel/a/a.php", "A");
    let z = site.class_file("kernel/z/z.php", "Z");
    site.mkdir("kernel/m");
    std::os::unix::fs::symlink(site.path("kernel"), site.path("kernel/m/loop")).unwrap();

    let config = BuildConfig::new()
        .follow_links(true)
        .mode(ModeConfig::new(GenerationMode::Kernel, [site.path("kernel")]));
    let (output, observer) = run(config, &ReferenceMaps::new());

    let kernel = output.map(GenerationMode::Kernel).unwrap();
    assert_eq!(kernel.get("A"), Some(a.as_path()));
    assert_eq!(kernel.get("Z"), Some(z.as_path()));
    assert_eq!(output.scan_errors.len(), 1);
    assert!(!output.is_complete());
    assert!(observer.lines.iter().any(|line| line.starts_with("Failed to scan")));
}

#[cfg(unix)]
#[test]
fn test_symlinked_component_scanned_with_default_config() {
    let site = Site::new();
    site.class_file("real/foo/classes/widget.php", "Widget");
    site.mkdir("extension");
    std::os::unix::fs::symlink(site.path("real/foo"), site.path("extension/foo")).unwrap();

    let config = BuildConfig::new()
        .active_components(["foo"])
        .mode(ModeConfig::new(GenerationMode::Extension, [site.path("extension")]));
    let (output, _) = run(config, &ReferenceMaps::new());

    let map = output.map(GenerationMode::Extension).unwrap();
    assert_eq!(
        map.get("Widget"),
        Some(site.path("extension/foo/classes/widget.php").as_path())
    );
    assert_eq!(output.files_scanned, 1);
    assert!(output.is_complete());
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_is_subtree_local() {
    use std::os::unix::fs::PermissionsExt;

    let site = Site::new();
    let a = site.class_file("kernel/a/a.php", "A");
    let z = site.class_file("kernel/z/z.php", "Z");
    site.class_file("kernel/locked/hidden.php", "Hidden");
    let locked = site.path("kernel/locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users read through mode bits
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let config =
        BuildConfig::new().mode(ModeConfig::new(GenerationMode::Kernel, [site.path("kernel")]));
    let (output, _) = run(config, &ReferenceMaps::new());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let kernel = output.map(GenerationMode::Kernel).unwrap();
    assert_eq!(kernel.get("A"), Some(a.as_path()));
    assert_eq!(kernel.get("Z"), Some(z.as_path()));
    assert!(!kernel.contains("Hidden"));
    assert_eq!(output.scan_errors.len(), 1);
    assert_eq!(output.scan_errors[0].kind, SubtreeErrorKind::Io);
    assert_eq!(output.scan_errors[0].path, locked);
}

#[test]
fn test_install_root_below_marker_named_directory() {
    let site = Site::new();
    site.class_file("extension/site/kernel/classes/ezpersistentobject.php", "eZPersistentObject");
    site.class_file("extension/site/extension/foo/classes/foo.php", "Foo");
    let install = site.path("extension/site");

    let config = BuildConfig::new()
        .active_components(["foo"])
        .mode(ModeConfig::new(GenerationMode::Extension, [&install]));

    let (anchored, _) = run(config.clone().install_root(&install), &ReferenceMaps::new());
    let map = anchored.map(GenerationMode::Extension).unwrap();
    assert!(map.contains("eZPersistentObject"));
    assert!(map.contains("Foo"));

    // Unanchored, the kernel file is owned by an inactive component named `site`
    let (unanchored, _) = run(config, &ReferenceMaps::new());
    let map = unanchored.map(GenerationMode::Extension).unwrap();
    assert!(!map.contains("eZPersistentObject"));
}
