//! Signal-table language detection.
//!
//! Each language carries a list of regex signals with weights. A signal
//! scores once if it matches anywhere in the block; the language with the
//! highest total wins and ties go to the earlier table entry.

use super::{Classifier, ClassifierError};
use regex::Regex;
use std::sync::LazyLock;

/// Blocks scoring below this are reported as unknown.
const MIN_SCORE: u32 = 2;

struct Signal {
    pattern: &'static str,
    weight: u32,
}

const fn signal(pattern: &'static str, weight: u32) -> Signal {
    Signal { pattern, weight }
}

struct LanguageProfile {
    label: &'static str,
    signals: &'static [Signal],
}

#[rustfmt::skip]
const PROFILES: &[LanguageProfile] = &[
    LanguageProfile {
        label: "php",
        signals: &[
            signal(r"<\?php", 8),
            signal(r"\bfunction\s+\w+\s*\(\s*\$", 4),
            signal(r"\$\w+\s*=\s*", 1),
        ],
    },
    LanguageProfile {
        label: "html",
        signals: &[
            signal(r"(?i)<!DOCTYPE\s+html", 5),
            signal(r"(?i)</?(html|head|body|div|span|p|a|ul|ol|li|h[1-6]|table|tr|td|form|input|button|img|meta|link|title|section|nav|header|footer)(\s[^>]*)?/?>", 2),
            signal(r"(?i)</(html|head|body|div|p|h[1-6]|ul|ol|table)>", 3),
        ],
    },
    LanguageProfile {
        label: "json",
        signals: &[
            signal(r#"\A\s*[\{\[]\s*("|\{|\[|-?\d|true\b|false\b|null\b|\]|\})"#, 4),
            signal(r#""[^"\n]*"\s*:\s*("|-?\d|\{|\[|true\b|false\b|null\b)"#, 3),
            signal(r"\b(null|true|false)\b", 1),
        ],
    },
    LanguageProfile {
        label: "rust",
        signals: &[
            signal(r"\bfn\s+\w+\s*(<[^>]*>)?\s*\(", 3),
            signal(r"\b(println|print|eprintln|format|vec|panic|assert|assert_eq|write|writeln)!\s*[\(\[]", 4),
            signal(r"\blet\s+mut\s+\w+", 3),
            signal(r"(?m)^\s*(pub\s+)?(struct|enum|trait|impl|mod)\s+\w+", 2),
            signal(r"(?m)^\s*use\s+[\w:]+::", 3),
            signal(r"#\[(derive|test|cfg)", 4),
            signal(r"&(mut\s+)?self\b", 3),
            signal(r"\b(Option|Result|Vec|Box)<", 2),
        ],
    },
    LanguageProfile {
        label: "go",
        signals: &[
            signal(r"(?m)^\s*package\s+\w+\s*$", 4),
            signal(r"\bfunc\s+(\([^)]*\)\s*)?\w+\s*\(", 4),
            signal(r"\bfmt\.\w+\(", 3),
            signal(r#"(?m)^\s*import\s+(\(|")"#, 3),
            signal(r":=", 2),
            signal(r"\b(chan|defer)\b|\bgo\s+func\b", 2),
        ],
    },
    LanguageProfile {
        label: "python",
        signals: &[
            signal(r"(?m)^\s*def\s+\w+\s*\([^)]*\)\s*(->\s*[^:]+)?:", 4),
            signal(r"(?m)^\s*from\s+[\w.]+\s+import\s+", 4),
            signal(r"(?m)^\s*import\s+[\w.]+(\s+as\s+\w+)?\s*$", 2),
            signal(r"(?m)^\s*(if|elif|for|while|with|try|except|class)\b[^\n{;]*:\s*$", 2),
            signal(r"__\w+__", 2),
            signal(r"\bprint\s*\(", 1),
            signal(r"\bself\.", 1),
            signal(r"\b(None|True|False)\b", 1),
        ],
    },
    LanguageProfile {
        label: "typescript",
        signals: &[
            signal(r"(?m)^\s*(export\s+)?interface\s+\w+(\s+extends\s+[\w,\s]+)?\s*\{", 5),
            signal(r":\s*(string|number|boolean|any|void|unknown|never)\b", 3),
            signal(r"(?m)^\s*(export\s+)?type\s+\w+(<[^>]*>)?\s*=", 3),
            signal(r"\b(let|const|var)\s+\w+\s*:\s*\w+", 2),
            signal(r"\b(public|private|protected|readonly)\s+\w+\s*:", 2),
        ],
    },
    LanguageProfile {
        label: "javascript",
        signals: &[
            signal(r"\bconsole\.(log|error|warn|info)\s*\(", 3),
            signal(r#"\brequire\s*\(\s*['"]"#, 3),
            signal(r#"(?m)^\s*(import|export)\s+.*\bfrom\s+['"]"#, 3),
            signal(r"\bfunction\s*\w*\s*\(", 2),
            signal(r"\b(const|let|var)\s+\w+\s*=", 2),
            signal(r"\b(document|window)\.\w+", 2),
            signal(r"=>", 1),
        ],
    },
    LanguageProfile {
        label: "java",
        signals: &[
            signal(r"\bSystem\.(out|err)\.print", 5),
            signal(r"(?m)^\s*import\s+(static\s+)?[\w.]+(\.\*)?;", 4),
            signal(r"(?m)^\s*package\s+[\w.]+;", 4),
            signal(r"(?m)^\s*(public|private|protected)\s+(static\s+)?(final\s+)?(class|interface|enum|void|[\w<>\[\]]+)\s+\w+", 3),
            signal(r"@(Override|Test|Autowired|Deprecated)\b", 3),
            signal(r"\bString\[\]\s+args", 3),
        ],
    },
    LanguageProfile {
        label: "csharp",
        signals: &[
            signal(r"(?m)^\s*using\s+System(\.\w+)*;", 6),
            signal(r"\bConsole\.(WriteLine|Write|ReadLine)\s*\(", 5),
            signal(r"\{\s*get;\s*(set;)?\s*\}", 4),
            signal(r"(?m)^\s*namespace\s+[\w.]+", 2),
            signal(r"\bvar\s+\w+\s*=\s*new\b", 2),
        ],
    },
    LanguageProfile {
        label: "cpp",
        signals: &[
            signal(r"(?m)^\s*#\s*include\s*<(iostream|vector|string|map|memory|algorithm)>", 6),
            signal(r"\bstd::(cout|cin|cerr|endl|vector|unique_ptr|shared_ptr|make_unique|make_shared)\b", 4),
            signal(r"\b(cout|cin|cerr)\s*(<<|>>)", 4),
            signal(r"(?m)^\s*(template\s*<|using\s+namespace\s+)", 4),
            signal(r"\bclass\s+\w+\s*(:\s*(public|private|protected)\s+\w+)?\s*\{", 1),
        ],
    },
    LanguageProfile {
        label: "c",
        signals: &[
            signal(r"(?m)^\s*#\s*include\s*<[\w./]+\.h>", 5),
            signal(r"\bint\s+main\s*\(", 3),
            signal(r"\bprintf\s*\(", 3),
            signal(r"\b(malloc|free|sizeof|NULL)\b", 2),
            signal(r"\b(unsigned|char|int|long|void|double|float)\s+\*?\w+\s*[=;(\[]", 1),
        ],
    },
    LanguageProfile {
        label: "ruby",
        signals: &[
            signal(r"(?m)^\s*def\s+\w+[?!]?(\s*\([^)]*\))?\s*$", 3),
            signal(r"(?m)^\s*end\s*$", 3),
            signal(r"\bputs\s", 3),
            signal(r#"(?m)^\s*require\s+['"]"#, 3),
            signal(r"\bdo\s*\|\w+", 3),
            signal(r"(?m)^\s*(class|module)\s+[A-Z]\w*(\s*<\s*\w+)?\s*$", 2),
        ],
    },
    LanguageProfile {
        label: "shell",
        signals: &[
            signal(r"\A\s*#!\s*/(usr/)?bin/(env\s+)?(ba|z|k)?sh\b", 6),
            signal(r"(?m)^\s*(if|elif|while)\s+\[\[?\s", 5),
            signal(r"(?m)^\s*(fi|done|esac)\s*$", 4),
            signal(r"(?m);\s*(then|do)\s*$", 3),
            signal(r"(?m)^\s*export\s+\w+=", 3),
            signal(r"(?m)^\s*(echo|printf|source|cd|sudo|apt|apt-get|brew|yum|dnf|pip|pip3|npm|yarn|cargo|git|docker|kubectl|curl|wget|chmod|chown|mkdir|rm|cp|mv|ls|cat|grep|tar)\s", 2),
            signal(r"\$\{?\w+\}?", 1),
        ],
    },
    LanguageProfile {
        label: "sql",
        signals: &[
            signal(r"(?is)\bSELECT\b.+?\bFROM\b", 5),
            signal(r"(?i)\bINSERT\s+INTO\b", 5),
            signal(r"(?i)\bCREATE\s+(TABLE|INDEX|VIEW|DATABASE)\b", 5),
            signal(r"(?i)\b(UPDATE\s+\w+\s+SET|DELETE\s+FROM)\b", 5),
            signal(r"(?i)\b(INNER|LEFT|RIGHT|OUTER)\s+JOIN\b", 2),
            signal(r"(?i)\bWHERE\b", 1),
        ],
    },
    LanguageProfile {
        label: "css",
        signals: &[
            signal(r"(?m)^\s*[.#]?[\w-]+(\s*[,>+~]?\s*[.#:]?[\w-]+)*\s*\{\s*$", 2),
            signal(r"(?m)^\s*[a-z-]+\s*:\s*[^;{}\n]+;\s*$", 3),
            signal(r"\b(color|margin(-\w+)?|padding(-\w+)?|background(-color)?|font-(size|family|weight)|border(-\w+)?|display|width|height)\s*:", 3),
            signal(r"@media\b|@import\s+url|@font-face", 3),
            signal(r"\b\d+(px|em|rem|vh|vw)\b", 1),
        ],
    },
    LanguageProfile {
        label: "yaml",
        signals: &[
            signal(r"(?m)^\s*[\w.-]+:\s*$", 3),
            signal(r"(?m)^---\s*$", 2),
            signal(r"(?m)^\s*[\w.-]+:\s+\S", 1),
            signal(r"(?m)^\s*-\s+\S", 1),
        ],
    },
    LanguageProfile {
        label: "assembly",
        signals: &[
            signal(r"(?im)^\s*(mov|movl|movq|add|addl|sub|subl|mul|imul|div|ldr|str|ldm|stm|push|pop|jmp|je|jne|jz|jnz|jg|jl|cmp|call|ret|bl|bx|beq|bne|lea|xor|orr|eor|inc|dec|nop|syscall|lsl|lsr)\b\s+[%$#\[\w]", 3),
            signal(r"(?m)^\s*\.(text|data|bss|globl|global|section)\b", 3),
            signal(r"\b(r\d{1,2}|e[abcd]x|r[abcd]x|esp|ebp|rsp|rbp|pc|lr|sp)\s*,", 2),
            signal(r"#-?\d+\b", 1),
        ],
    },
];

struct CompiledProfile {
    label: &'static str,
    signals: Vec<(Regex, u32)>,
}

static COMPILED: LazyLock<Vec<CompiledProfile>> = LazyLock::new(|| {
    PROFILES
        .iter()
        .map(|profile| CompiledProfile {
            label: profile.label,
            signals: profile
                .signals
                .iter()
                .map(|s| {
                    let re = Regex::new(s.pattern).expect("language signal patterns are valid");
                    (re, s.weight)
                })
                .collect(),
        })
        .collect()
});

/// Deterministic, stateless classifier over a built-in signal table.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Score every known language against `code`, in table order.
    pub fn scores(&self, code: &str) -> Vec<(&'static str, u32)> {
        COMPILED
            .iter()
            .map(|profile| {
                let score = profile
                    .signals
                    .iter()
                    .filter(|(re, _)| re.is_match(code))
                    .map(|(_, weight)| weight)
                    .sum();
                (profile.label, score)
            })
            .collect()
    }

    /// Best guess for `code`, or `None` when nothing scores high enough.
    pub fn guess(&self, code: &str) -> Option<&'static str> {
        if code.trim().is_empty() {
            return None;
        }
        let mut best: Option<(&'static str, u32)> = None;
        for (label, score) in self.scores(code) {
            // Strictly greater keeps the earlier entry on ties
            if score >= MIN_SCORE && best.is_none_or(|(_, top)| score > top) {
                best = Some((label, score));
            }
        }
        best.map(|(label, _)| label)
    }

    pub fn labels() -> impl Iterator<Item = &'static str> {
        PROFILES.iter().map(|profile| profile.label)
    }
}

impl Classifier for HeuristicClassifier {
    fn classify(&self, code: &str) -> Result<String, ClassifierError> {
        Ok(self.guess(code).unwrap_or_default().to_string())
    }
}
