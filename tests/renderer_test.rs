use serde_json::json;
use stamp::error::Error;
use stamp::renderer::{MiniJinjaRenderer, TemplateRenderer};

#[test]
fn test_minijinja_renderer() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({
        "name": "test",
        "values": [1, 2, 3]
    });

    let result = engine.render("hello", "Hello {{ name }}!", &context).unwrap();
    assert_eq!(result, "Hello test!");

    let result = engine
        .render("values", "{% for v in values %}{{ v }}{% endfor %}", &context)
        .unwrap();
    assert_eq!(result, "123");
}

#[test]
fn test_undefined_variable_fails() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({ "name": "test" });

    let err = engine.render("missing", "Hello {{ nobody }}!", &context).unwrap_err();
    assert!(matches!(err, Error::UndefinedVariable { .. }));
}

#[test]
fn test_undefined_loop_target_fails() {
    let engine = MiniJinjaRenderer::new();

    let err = engine
        .render("loop", "{% for f in root_files %}{{ f }}{% endfor %}", &json!({}))
        .unwrap_err();
    assert!(matches!(err, Error::UndefinedVariable { .. }));
}

#[test]
fn test_keeps_trailing_newline() {
    let engine = MiniJinjaRenderer::new();

    let result = engine.render("nl", "{{ name }}\n", &json!({ "name": "x" })).unwrap();
    assert_eq!(result, "x\n");
}

#[test]
fn test_rendering_is_deterministic() {
    let engine = MiniJinjaRenderer::new();
    let context = json!({ "components": ["x", "y", "z"] });
    let template = "{{ components | join(', ') }}";

    let first = engine.render("det", template, &context).unwrap();
    let second = engine.render("det", template, &context).unwrap();
    assert_eq!(first, "x, y, z");
    assert_eq!(first, second);
}
