use notefix_lib::classifier::{ConfiguredClassifier, HeuristicClassifier};
use notefix_lib::config::{NormalizeLanguage, TagConfig};
use notefix_lib::{tag, tag_with_heuristics};
use pretty_assertions::assert_eq;

const RUST_BODY: &str = r#"// This is the main function.
fn main() {
    // Statements here are executed when the compiled binary is called.

    // Print text to the console.
    println!("Hello World!");
}
"#;

const HTML_BODY: &str = r#"<html>
<body>

<h1>My First Heading</h1>

<p>My first paragraph.</p>

</body>
</html>
"#;

const OUTSIDE: &str = "text outside of code block\n\\<escaped normal text\\>\n";

fn fence(info: &str, body: &str) -> String {
    format!("```{info}\n{body}```\n")
}

#[test]
fn test_single_code_block() {
    let input = format!("\n{}", fence("", RUST_BODY));
    let expected = format!("\n{}", fence("rust", RUST_BODY));
    assert_eq!(tag_with_heuristics(&input).unwrap(), expected);
}

#[test]
fn test_multiple_code_blocks() {
    let input = format!("\n{}{}", fence("", RUST_BODY), fence("", HTML_BODY));
    let expected = format!("\n{}{}", fence("rust", RUST_BODY), fence("html", HTML_BODY));
    assert_eq!(tag_with_heuristics(&input).unwrap(), expected);
}

#[test]
fn test_text_around_and_between_code_blocks() {
    let input = format!(
        "{OUTSIDE}{}{OUTSIDE}{}{OUTSIDE}",
        fence("", RUST_BODY),
        fence("", HTML_BODY)
    );
    let expected = format!(
        "{OUTSIDE}{}{OUTSIDE}{}{OUTSIDE}",
        fence("rust", RUST_BODY),
        fence("html", HTML_BODY)
    );
    assert_eq!(tag_with_heuristics(&input).unwrap(), expected);
}

#[test]
fn test_existing_languages_untouched() {
    let input = format!("\n{}{}", fence("rust", RUST_BODY), fence("html", HTML_BODY));
    assert_eq!(tag_with_heuristics(&input).unwrap(), input);
}

#[test]
fn test_existing_language_after_spaces_untouched() {
    let input = fence("   rust", RUST_BODY);
    assert_eq!(tag_with_heuristics(&input).unwrap(), input);
}

#[test]
fn test_trailing_spaces_after_fence() {
    assert_eq!(tag_with_heuristics(&fence(" ", RUST_BODY)).unwrap(), fence("rust ", RUST_BODY));
    assert_eq!(tag_with_heuristics(&fence("   ", RUST_BODY)).unwrap(), fence("rust   ", RUST_BODY));
}

#[test]
fn test_python_block() {
    let input = fence("", "def main():\n    print(\"Hello, World!\")\n");
    let expected = fence("python", "def main():\n    print(\"Hello, World!\")\n");
    assert_eq!(tag_with_heuristics(&input).unwrap(), expected);
}

#[test]
fn test_detected_languages() {
    let cases = [
        ("interface User {\n    name: string;\n    id: number;\n}\n", "typescript"),
        (
            "package main\nimport \"fmt\"\nfunc main() {\n    fmt.Println(\"hello world\")\n}\n",
            "go",
        ),
        ("if [ 1 -eq 1 ]; then\n    echo \"Hello, World!\"\nfi\n", "shell"),
        ("{\"name\":\"John\", \"age\":30, \"car\":null}\n", "json"),
        ("mov r0, pc\nmov r1, #2\nadd r2, r1, r1\n", "assembly"),
    ];
    for (body, language) in cases {
        assert_eq!(
            tag_with_heuristics(&fence("", body)).unwrap(),
            fence(language, body),
            "expected {language}"
        );
    }
}

#[test]
fn test_unrecognized_block_left_untagged_without_fallback() {
    let input = fence("", "lorem ipsum dolor\n");
    assert_eq!(tag_with_heuristics(&input).unwrap(), input);
}

#[test]
fn test_fallback_language_from_config() {
    let config = TagConfig {
        fallback_language: "text".to_string(),
        ..Default::default()
    };
    let classifier = ConfiguredClassifier::new(HeuristicClassifier::new(), &config);
    let input = format!("{}{}", fence("", "lorem ipsum dolor\n"), fence("", RUST_BODY));
    let expected = format!("{}{}", fence("text", "lorem ipsum dolor\n"), fence("rust", RUST_BODY));
    assert_eq!(tag(&input, &classifier).unwrap(), expected);
}

#[test]
fn test_linguist_normalization_of_classifier_labels() {
    let config = TagConfig {
        normalize_language: NormalizeLanguage::Linguist,
        ..Default::default()
    };
    let classifier = ConfiguredClassifier::new(|_: &str| "Bash".to_string(), &config);
    let out = tag(&fence("", "ls -la\n"), &classifier).unwrap();
    assert_eq!(out, fence("shell", "ls -la\n"));
}

#[test]
fn test_four_backtick_fence_left_alone() {
    // The fourth backtick sits right after the delimiter and reads as a language token
    let input = "````\nx\n````\n";
    let out = tag(input, &|_: &str| -> String { panic!("classifier must not run") }).unwrap();
    assert_eq!(out, input);
}
