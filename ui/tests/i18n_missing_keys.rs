use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Every locale must define every key of the en-US fallback, and every
/// `t!("...")` key used under `src/` must exist in the fallback.
///
/// Adding a locale: create `ui/i18n/<locale>/turnus-ui.ftl` with all en-US
/// keys and register it in `LOCALES`.
const EN_US: &str = include_str!("../i18n/en-US/turnus-ui.ftl");
const NB_NO: &str = include_str!("../i18n/nb-NO/turnus-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("nb-NO", NB_NO)];

const I18N_TOML: &str = include_str!("../i18n.toml");

/// `t!` resolves bundles at compile time from the `[fluent]` domain, which
/// otherwise defaults to the package name with underscores.
#[test]
fn fluent_domain_names_the_bundle_files() {
    let domain = I18N_TOML
        .lines()
        .filter_map(|line| line.trim().strip_prefix("domain"))
        .filter_map(|rest| rest.trim().strip_prefix('='))
        .map(|value| value.trim().trim_matches('"').to_string())
        .next()
        .expect("i18n.toml declares a fluent domain");

    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("i18n");
    for locale in ["en-US", "nb-NO"] {
        let bundle = root.join(locale).join(format!("{domain}.ftl"));
        assert!(bundle.is_file(), "missing bundle {}", bundle.display());
    }
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(EN_US);
    assert!(!fallback_keys.is_empty(), "Fallback (en-US) contains no keys.");
    assert_no_dup_keys(EN_US, "en-US");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);
        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = fallback_keys.iter().filter(|k| !keys.contains(*k)).collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn locales_do_not_define_extra_keys() {
    let fallback_keys = extract_keys(EN_US);
    for (locale, src) in LOCALES {
        let extra: BTreeSet<String> = extract_keys(src).difference(&fallback_keys).cloned().collect();
        assert!(extra.is_empty(), "Locale {locale} defines keys unknown to en-US: {extra:?}");
    }
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let referenced = referenced_keys(&src_root);
    assert!(!referenced.is_empty(), "no t!(...) call sites found under {src_root:?}");

    let fallback_keys = extract_keys(EN_US);
    let mut missing: Vec<_> = referenced.iter().filter(|k| !fallback_keys.contains(*k)).collect();
    missing.sort();
    assert!(missing.is_empty(), "Referenced keys missing in en-US: {missing:?}");
}

/// Message keys of a Fluent file. Comments, attributes and terms are skipped.
fn extract_keys(src: &str) -> HashSet<String> {
    src.lines().filter_map(message_key).collect()
}

fn message_key(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') || line.starts_with('-') {
        return None;
    }
    let (left, _) = line.split_once('=')?;
    let key = left.trim();
    let valid = !key.is_empty() && key.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'));
    valid.then(|| key.to_string())
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<String> = src
        .lines()
        .filter_map(message_key)
        .filter(|key| !seen.insert(key.clone()))
        .collect();
    assert!(dups.is_empty(), "Duplicate key definitions in {locale}: {dups:?}");
}

/// Literal first arguments of `t!("...")` in every `.rs` file under `root`.
fn referenced_keys(root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|e| e.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for chunk in content.split("t!(\"").skip(1) {
            if let Some(end) = chunk.find('"') {
                let key = &chunk[..end];
                if !key.is_empty() && key.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-')) {
                    found.insert(key.to_string());
                }
            }
        }
    }
    found
}
