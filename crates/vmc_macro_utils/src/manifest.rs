use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for a workspace crate as seen from the
/// caller's Cargo.toml.
///
/// Derive macros emit paths such as `::vmc_schema::Constructable`, which are
/// only valid if the invoking crate can actually name `vmc_schema`.
///
/// # Example
///
/// ```rust
/// # use vmc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vmc_schema"));
/// ```
///
/// Reading and parsing the manifest is not free; call it once per macro
/// invocation and pass the resulting path around.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `vmc_` and the caller depends on
///    the facade `vmc_core`, return `::vmc_core::short_name`
///    (e.g. `vmc_schema` -> `::vmc_core::schema`).
/// 3. Same as 2 for the short alias `vmc`.
/// 4. Repeat steps 1-3 in `dev-dependencies`.
/// 5. Otherwise, fall back to the absolute path `::crate_name`.
///
/// ## Note
///
/// A crate referencing itself through its own derive needs
/// `extern crate self as vmc_schema;` in its root, so that `::vmc_schema`
/// resolves both in the library and in its doctests.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const CORE_NAME: &str = "vmc_core";
const SHORT_NAME: &str = "vmc";
const CRATE_PREFIX: &str = "vmc_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    #[inline(never)]
    fn get_manifest_modified_time(
        cargo_manifest_path: &Path,
    ) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(cargo_manifest_path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    // Crate names and the facade's module names are always valid paths.
    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap()
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_str(&format!("::{name}")));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        [CORE_NAME, SHORT_NAME]
            .into_iter()
            .find(|facade| deps.contains_key(facade))
            .map(|facade| {
                let mut path = Self::parse_str::<syn::Path>(&format!("::{facade}"));
                path.segments.push(Self::parse_str(module));
                path
            })
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the top-level documentation for the resolution
    /// order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        if let Some(Item::Table(deps)) = self.manifest.get("dependencies")
            && let Some(val) = Self::find_in_deps(deps, name)
        {
            return val;
        }

        if let Some(Item::Table(deps)) = self.manifest.get("dev-dependencies")
            && let Some(val) = Self::find_in_deps(deps, name)
        {
            return val;
        }

        Self::parse_str(&format!("::{name}"))
    }

    /// Obtain the [Manifest] of the caller's Cargo.toml.
    ///
    /// The parsed manifest is cached per path and refreshed when the file's
    /// modification time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use quote::ToTokens;

    use super::Manifest;

    fn manifest(src: &str) -> Manifest {
        Manifest {
            manifest: toml_edit::Document::parse(Box::<str>::from(src)).unwrap(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        }
    }

    fn path_of(manifest: &Manifest, name: &str) -> String {
        manifest.get_crate_path(name).to_token_stream().to_string()
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\nvmc_schema = \"0.0.1\"\n");
        assert_eq!(path_of(&m, "vmc_schema"), ":: vmc_schema");
    }

    #[test]
    fn through_facade() {
        let m = manifest("[dependencies]\nvmc_core = { path = \"..\" }\n");
        assert_eq!(path_of(&m, "vmc_schema"), ":: vmc_core :: schema");

        let m = manifest("[dev-dependencies]\nvmc = { path = \"..\" }\n");
        assert_eq!(path_of(&m, "vmc_schema"), ":: vmc :: schema");
    }

    #[test]
    fn fallback() {
        let m = manifest("[package]\nname = \"demo\"\n");
        assert_eq!(path_of(&m, "vmc_schema"), ":: vmc_schema");
    }
}
