//! Import table shared by every function emitted in a run.

use std::collections::{BTreeMap, HashMap};

/// Alias ↔ path mapping for foreign packages.
///
/// Injective: a path keeps the alias it first received, and an alias never
/// names two paths. The target package's own name is reserved so a foreign
/// package with the same name is always qualified distinctly. Identifiers
/// declared by generated code are reserved too, since a local would shadow
/// the package inside the method body.
#[derive(Clone, Debug)]
pub struct ImportTable {
    reserved: String,
    aliases: HashMap<String, String>,
    /// Ordered by path, which is the order of the emitted import block.
    paths: BTreeMap<String, String>,
}

impl ImportTable {
    pub fn new(target_name: impl Into<String>) -> Self {
        Self {
            reserved: target_name.into(),
            aliases: HashMap::new(),
            paths: BTreeMap::new(),
        }
    }

    /// Alias under which `path` (declaring package `name`) is referenced,
    /// recording it on first use.
    pub fn qualify(&mut self, name: &str, path: &str) -> String {
        if let Some(alias) = self.paths.get(path) {
            return alias.clone();
        }

        let mut alias = name.to_string();
        if self.is_taken(&alias) {
            let base = derived_alias(path);
            alias = base.clone();
            let mut counter = 2;
            while self.is_taken(&alias) {
                alias = format!("{base}{counter}");
                counter += 1;
            }
            tracing::debug!(%path, %alias, "import name collision");
        }

        self.aliases.insert(alias.clone(), path.to_string());
        self.paths.insert(path.to_string(), alias.clone());
        alias
    }

    fn is_taken(&self, alias: &str) -> bool {
        alias == self.reserved || is_generated_local(alias) || self.aliases.contains_key(alias)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// `(path, alias)` pairs ordered by path.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.paths.iter().map(|(p, a)| (p.as_str(), a.as_str()))
    }

    /// The `import ( ... )` block. The alias is omitted when it matches the
    /// last path segment.
    pub fn render(&self) -> String {
        let mut out = String::from("import (\n");
        for (path, alias) in self.iter() {
            let last = path.rsplit('/').next().unwrap_or(path);
            if alias == last {
                out.push_str(&format!("\"{path}\"\n"));
            } else {
                out.push_str(&format!("{alias} \"{path}\"\n"));
            }
        }
        out.push_str(")\n");
        out
    }
}

/// Receiver, copy, temporaries and loop variables (`i`, `k1`, `cpv2`, ...)
/// of emitted methods, plus the builtins they call.
fn is_generated_local(name: &str) -> bool {
    const FIXED: [&str; 8] = ["o", "cp", "retV", "make", "new", "copy", "len", "cap"];
    const SCOPED: [&str; 5] = ["cpk", "cpv", "i", "k", "v"];

    FIXED.contains(&name)
        || SCOPED.iter().any(|prefix| {
            name.strip_prefix(prefix)
                .is_some_and(|depth| depth.chars().all(|c| c.is_ascii_digit()))
        })
}

/// Identifier built from an import path: `github.com/a/util` → `github_com_a_util`.
pub fn derived_alias(path: &str) -> String {
    let mut alias: String = path
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if alias.chars().next().is_none_or(|c| c.is_ascii_digit()) {
        alias.insert(0, '_');
    }
    alias
}
