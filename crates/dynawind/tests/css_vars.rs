use dynawind::{
    apply_semantic_color_theme_to_root, apply_to_root, generate_semantic_color_variables,
    generate_variables, variable_name, wrap_in_root, StyleTarget, Theme,
};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct RecordingTarget {
    writes: Vec<(String, String)>,
}

impl StyleTarget for RecordingTarget {
    fn set_property(&mut self, name: &str, value: &str) {
        self.writes.push((name.to_string(), value.to_string()));
    }
}

impl RecordingTarget {
    fn value(&self, name: &str) -> Option<&str> {
        self.writes
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Split `--name: value;` declarations back into pairs.
fn parse_declarations(css: &str) -> Vec<(String, String)> {
    css.split("; ")
        .map(|decl| decl.trim_end_matches(';'))
        .filter(|decl| !decl.is_empty())
        .map(|decl| {
            let (name, value) = decl.split_once(": ").expect("declaration has a colon");
            (name.to_string(), value.to_string())
        })
        .collect()
}

fn sample_themes() -> Vec<Theme> {
    vec![
        Theme::new(),
        Theme::from([("primary", "#000"), ("secondary", "#fff")]),
        Theme::from([
            ("zeta", "1px"),
            ("alpha", "rgba(0, 0, 0, 0.5)"),
            ("fontFamily", "Arial, sans-serif"),
        ]),
    ]
}

const SCOPES: [Option<&str>; 4] = [None, Some(""), Some("color"), Some("typography")];

#[test]
fn declarations_recover_theme_in_order() {
    for theme in sample_themes() {
        for scope in SCOPES {
            let parsed = parse_declarations(&generate_variables(scope, &theme));
            let prefix = variable_name(scope, "");
            let recovered: Vec<(String, String)> = parsed
                .into_iter()
                .map(|(name, value)| (name[prefix.len()..].to_string(), value))
                .collect();
            let expected: Vec<(String, String)> = theme
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            assert_eq!(recovered, expected, "scope={scope:?}");
        }
    }
}

#[test]
fn empty_theme_yields_empty_string_for_every_scope() {
    for scope in SCOPES {
        assert_eq!(generate_variables(scope, &Theme::new()), "");
    }
}

#[test]
fn wrap_empty_list() {
    assert_eq!(wrap_in_root(Vec::<String>::new()), ":root {  }");
}

#[test]
fn wrap_empty_theme_output() {
    let vars = generate_variables(Some("color"), &Theme::new());
    assert_eq!(wrap_in_root([vars]), ":root {  }");
}

#[test]
fn wrap_color_theme() {
    let theme = Theme::from([("primary", "#000"), ("secondary", "#fff")]);
    assert_eq!(
        wrap_in_root([generate_variables(Some("color"), &theme)]),
        ":root { --color-primary: #000; --color-secondary: #fff; }"
    );
}

#[test]
fn wrap_combines_scopes() {
    let colors = Theme::from([("primary", "#000")]);
    let typography = Theme::from([("fontSize", "16px")]);
    assert_eq!(
        wrap_in_root([
            generate_variables(Some("color"), &colors),
            generate_variables(Some("typography"), &typography),
        ]),
        ":root { --color-primary: #000; --typography-fontSize: 16px; }"
    );
}

#[test]
fn semantic_color_helper_matches_color_scope() {
    let theme = Theme::from([("primary", "#000")]);
    assert_eq!(
        generate_semantic_color_variables(&theme),
        generate_variables(Some("color"), &theme)
    );
    assert_eq!(generate_semantic_color_variables(&theme), "--color-primary: #000;");
}

#[test]
fn apply_writes_then_partially_overwrites() {
    let mut target = RecordingTarget::default();
    apply_to_root(
        &mut target,
        Some("color"),
        &Theme::from([("primary", "#000"), ("secondary", "#fff")]),
    );

    assert_eq!(
        target.writes,
        vec![
            ("--color-primary".to_string(), "#000".to_string()),
            ("--color-secondary".to_string(), "#fff".to_string()),
        ]
    );

    apply_to_root(&mut target, Some("color"), &Theme::from([("primary", "#111")]));

    assert_eq!(target.writes.len(), 3);
    assert_eq!(target.value("--color-primary"), Some("#111"));
    assert_eq!(target.value("--color-secondary"), Some("#fff"));
}

#[test]
fn semantic_apply_uses_color_scope() {
    let mut target = RecordingTarget::default();
    apply_semantic_color_theme_to_root(&mut target, &Theme::from([("ring", "#00f")]));
    assert_eq!(
        target.writes,
        vec![("--color-ring".to_string(), "#00f".to_string())]
    );
}

#[test]
fn generation_is_idempotent() {
    for theme in sample_themes() {
        for scope in SCOPES {
            assert_eq!(
                generate_variables(scope, &theme),
                generate_variables(scope, &theme)
            );
        }
    }
}

#[test]
fn applied_names_match_generated_names() {
    for theme in sample_themes() {
        for scope in SCOPES {
            let mut target = RecordingTarget::default();
            apply_to_root(&mut target, scope, &theme);

            let generated: Vec<(String, String)> =
                parse_declarations(&generate_variables(scope, &theme));
            assert_eq!(target.writes, generated, "scope={scope:?}");
        }
    }
}
