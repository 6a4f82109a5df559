//! Language label normalization.
//!
//! Classifiers do not agree on naming: one says `Bash`, another `shell`,
//! a third `sh`. With `normalize-language = "linguist"` every label is
//! resolved through this table to the fence token commonly used on GitHub
//! (e.g. `py` -> `python`, `c++` -> `cpp`, `batchfile` -> `batch`).

use std::collections::HashMap;
use std::sync::LazyLock;

/// Resolver for language aliases to canonical fence tokens.
///
/// User-supplied aliases take precedence over the built-in table.
#[derive(Debug, Clone, Default)]
pub struct LanguageResolver {
    user_aliases: HashMap<String, String>,
}

impl LanguageResolver {
    pub fn new(user_aliases: HashMap<String, String>) -> Self {
        let user_aliases = user_aliases
            .into_iter()
            .map(|(alias, canonical)| (alias.to_lowercase(), canonical.to_lowercase()))
            .collect();
        Self { user_aliases }
    }

    /// Resolve a label to its canonical name.
    ///
    /// Unknown labels are returned trimmed and lowercased.
    pub fn resolve(&self, label: &str) -> String {
        let lower = label.trim().to_lowercase();
        if let Some(canonical) = self.user_aliases.get(&lower) {
            return canonical.clone();
        }
        BUILTIN_ALIASES
            .get(lower.as_str())
            .map(|&s| s.to_string())
            .unwrap_or(lower)
    }
}

/// Curated subset of GitHub Linguist names and aliases, including the
/// display names language-detection models tend to return.
static BUILTIN_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    for (canonical, aliases) in [
        ("python", &["python", "py", "python3", "py3", "pyw"][..]),
        ("javascript", &["javascript", "js", "node", "nodejs", "mjs", "cjs", "jsx"][..]),
        ("typescript", &["typescript", "ts", "tsx", "mts", "cts"][..]),
        (
            "shell",
            &["shell", "bash", "sh", "zsh", "ksh", "shellscript", "shell-script", "console"][..],
        ),
        ("powershell", &["powershell", "pwsh", "ps1"][..]),
        ("batch", &["batch", "batchfile", "bat", "cmd"][..]),
        ("rust", &["rust", "rs"][..]),
        ("go", &["go", "golang"][..]),
        ("ruby", &["ruby", "rb", "jruby"][..]),
        ("java", &["java"][..]),
        ("kotlin", &["kotlin", "kt", "kts"][..]),
        ("scala", &["scala"][..]),
        ("c", &["c", "h"][..]),
        ("cpp", &["cpp", "c++", "cxx", "cc", "hpp", "hxx"][..]),
        ("csharp", &["csharp", "c#", "cs"][..]),
        ("fsharp", &["fsharp", "f#", "fs"][..]),
        ("swift", &["swift"][..]),
        ("objective-c", &["objective-c", "objc", "obj-c"][..]),
        ("php", &["php"][..]),
        ("perl", &["perl", "pl"][..]),
        ("r", &["r"][..]),
        ("lua", &["lua"][..]),
        ("haskell", &["haskell", "hs"][..]),
        ("erlang", &["erlang", "erl"][..]),
        ("elixir", &["elixir", "ex", "exs"][..]),
        ("clojure", &["clojure", "clj", "cljs", "cljc"][..]),
        ("html", &["html", "htm", "xhtml"][..]),
        ("css", &["css"][..]),
        ("scss", &["scss"][..]),
        ("json", &["json", "jsonc", "json5"][..]),
        ("yaml", &["yaml", "yml"][..]),
        ("toml", &["toml"][..]),
        ("xml", &["xml", "xsd", "xsl", "xslt"][..]),
        ("markdown", &["markdown", "md", "mkd"][..]),
        (
            "sql",
            &["sql", "mysql", "postgresql", "postgres", "sqlite", "plsql", "tsql"][..],
        ),
        ("dockerfile", &["dockerfile", "docker"][..]),
        ("makefile", &["makefile", "make"][..]),
        ("assembly", &["assembly", "asm", "nasm", "gas"][..]),
        ("visual-basic", &["visual basic", "vb", "vbnet", "vba"][..]),
        ("matlab", &["matlab"][..]),
        ("tex", &["tex", "latex"][..]),
        ("text", &["text", "txt", "plaintext", "plain"][..]),
    ] {
        for alias in aliases {
            m.insert(*alias, canonical);
        }
    }

    m
});
