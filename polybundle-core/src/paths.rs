//! Path and naming helpers for output targets.

use std::path::{Component, Path, PathBuf};

use tracing::warn;

/// Resolves a manifest path against the package directory.
///
/// Absolute values replace the base. `.` and `..` components are folded
/// lexically, so the result does not depend on the filesystem.
pub fn resolve(base: &Path, value: &str) -> PathBuf {
    normalize(&base.join(value))
}

/// Folds `.` and `..` components without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !resolved.pop() {
                    resolved.push(component);
                }
            }
            other => resolved.push(other),
        }
    }

    resolved
}

/// Development CommonJS path: `lib/index.js` becomes `lib/index.dev.js`.
pub fn dev_path(cjs_path: &Path) -> PathBuf {
    with_js_suffix(cjs_path, "dev")
}

/// Production CommonJS path: `lib/index.js` becomes `lib/index.prod.js`.
pub fn prod_path(cjs_path: &Path) -> PathBuf {
    with_js_suffix(cjs_path, "prod")
}

// Only the file name's trailing `.js` is rewritten; directories that happen
// to contain `.js` are left alone.
fn with_js_suffix(path: &Path, suffix: &str) -> PathBuf {
    let Some(stem) = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(".js"))
    else {
        warn!(
            path = %path.display(),
            "entry point does not end in .js; leaving {} path unchanged",
            suffix
        );
        return path.to_path_buf();
    };

    path.with_file_name(format!("{}.{}.js", stem, suffix))
}

/// Converts hyphenated text to camel case: `scope-my-pkg` becomes `scopeMyPkg`.
///
/// Every `-` followed by a character is dropped and that character is
/// upper-cased. A trailing `-` is kept.
pub fn camelize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(next) = chars.next() {
                out.extend(next.to_uppercase());
                continue;
            }
        }
        out.push(c);
    }

    out
}

/// Global variable name a UMD bundle exposes for a package name.
///
/// `@scope/my-pkg` becomes `scopeMyPkg`.
pub fn umd_global_name(package_name: &str) -> String {
    let unscoped = package_name.replacen('@', "", 1).replacen('/', "-", 1);
    camelize(&unscoped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_folds_dot_components() {
        let base = Path::new("/repo/packages/a");
        assert_eq!(
            resolve(base, "./dist/a.cjs.js"),
            PathBuf::from("/repo/packages/a/dist/a.cjs.js")
        );
        assert_eq!(
            resolve(base, "../b/index.js"),
            PathBuf::from("/repo/packages/b/index.js")
        );
        assert_eq!(resolve(base, "/abs/x.js"), PathBuf::from("/abs/x.js"));
    }

    #[test]
    fn test_dev_and_prod_paths() {
        let cjs = Path::new("/repo/packages/a/lib/index.js");
        assert_eq!(dev_path(cjs), PathBuf::from("/repo/packages/a/lib/index.dev.js"));
        assert_eq!(prod_path(cjs), PathBuf::from("/repo/packages/a/lib/index.prod.js"));
    }

    #[test]
    fn test_dev_path_ignores_js_in_directories() {
        let cjs = Path::new("/repo/my.js.thing/dist/a.cjs.js");
        assert_eq!(dev_path(cjs), PathBuf::from("/repo/my.js.thing/dist/a.cjs.dev.js"));
    }

    #[test]
    fn test_dev_path_without_js_extension() {
        let cjs = Path::new("/repo/dist/index.mjs");
        assert_eq!(dev_path(cjs), cjs.to_path_buf());
    }

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("scope-my-pkg"), "scopeMyPkg");
        assert_eq!(camelize("plain"), "plain");
        assert_eq!(camelize("trailing-"), "trailing-");
    }

    #[test]
    fn test_umd_global_name() {
        assert_eq!(umd_global_name("@scope/my-pkg"), "scopeMyPkg");
        assert_eq!(umd_global_name("@emotion/core"), "emotionCore");
        assert_eq!(umd_global_name("create-emotion"), "createEmotion");
    }
}
