// tests/unit_signature.rs
//! Unit tests for declaration classification and signature extraction.
//!
//! VERIFICATION STRATEGY:
//! 1. Kind coverage: every declaration kind classifies from realistic source.
//! 2. Balanced scanning: commas inside defaults, patterns, and generics
//!    never split a parameter list.
//! 3. Failure modes: NotADeclaration and UnbalancedSyntax surface as typed
//!    errors, never panics.

use docsmith_core::error::DocError;
use docsmith_core::signature::{parse_at, DeclarationKind, ParsedDeclaration};
use docsmith_core::source::SourceText;

fn parse(text: &str) -> ParsedDeclaration {
    let src = SourceText::new(text);
    parse_at(&src, 0).expect("snippet should parse as a declaration")
}

#[test]
fn function_with_typed_params_and_return() {
    let decl = parse("function add(a: number, b: number): number {}");
    let sig = &decl.signature;
    assert_eq!(sig.kind, DeclarationKind::Function);
    assert_eq!(sig.name.as_deref(), Some("add"));
    assert_eq!(sig.parameters.len(), 2);
    assert_eq!(sig.parameters[0].name, "a");
    assert_eq!(sig.parameters[1].name, "b");
    assert_eq!(sig.parameters[0].type_text.as_deref(), Some("number"));
    assert_eq!(sig.return_type.as_deref(), Some("number"));
}

#[test]
fn defaults_and_patterns_do_not_split() {
    // The canonical balanced-split case: exactly 3 parameters.
    let decl = parse("function configure(a, b = foo(1, 2), {c, d} = {}) {}");
    let sig = &decl.signature;
    assert_eq!(sig.parameters.len(), 3, "expected exactly 3 parameters");
    assert_eq!(sig.parameters[1].default_value.as_deref(), Some("foo(1, 2)"));
    assert!(sig.parameters[2].destructured);
    assert_eq!(sig.parameters[2].name, "param2");
}

#[test]
fn arrow_takes_binding_name() {
    let decl = parse("const double = (x: number): number => x * 2;");
    let sig = &decl.signature;
    assert_eq!(sig.kind, DeclarationKind::ArrowFunction);
    assert_eq!(sig.name.as_deref(), Some("double"));
    assert_eq!(sig.parameters.len(), 1);
    assert_eq!(sig.return_type.as_deref(), Some("number"));
}

#[test]
fn bare_parameter_arrow() {
    let decl = parse("const id = x => x;");
    assert_eq!(decl.signature.kind, DeclarationKind::ArrowFunction);
    assert_eq!(decl.signature.parameters.len(), 1);
    assert_eq!(decl.signature.parameters[0].name, "x");
}

#[test]
fn async_arrow_sets_modifier() {
    let decl = parse("const run = async () => {};");
    assert!(decl.signature.modifiers.is_async);
    assert!(decl.signature.parameters.is_empty());
}

#[test]
fn function_expression_takes_binding_name() {
    let decl = parse("const cb = function(x) { return x; };");
    assert_eq!(decl.signature.kind, DeclarationKind::Function);
    assert_eq!(decl.signature.name.as_deref(), Some("cb"));
}

#[test]
fn method_shape_with_void_return() {
    let decl = parse("resize(w: number, h: number): void {}");
    let sig = &decl.signature;
    assert_eq!(sig.kind, DeclarationKind::Method);
    assert_eq!(sig.parameters.len(), 2);
    assert_eq!(sig.return_type.as_deref(), Some("void"));
    assert!(!sig.has_documentable_return(), "void must suppress @returns");
}

#[test]
fn getter_and_setter() {
    let getter = parse("get value(): number { return this._v; }");
    assert_eq!(getter.signature.kind, DeclarationKind::Getter);
    assert_eq!(getter.signature.name.as_deref(), Some("value"));

    let setter = parse("set value(v: number) {}");
    assert_eq!(setter.signature.kind, DeclarationKind::Setter);
    assert_eq!(setter.signature.parameters.len(), 1);
    assert!(!setter.signature.has_documentable_return());
}

#[test]
fn constructor_parameter_properties() {
    let decl = parse("constructor(private svc: Service, readonly id: string) {}");
    let sig = &decl.signature;
    assert_eq!(sig.kind, DeclarationKind::Constructor);
    assert_eq!(sig.parameters.len(), 2);
    assert_eq!(sig.parameters[0].name, "svc");
    assert_eq!(sig.parameters[0].type_text.as_deref(), Some("Service"));
    assert_eq!(sig.parameters[1].name, "id");
}

#[test]
fn class_with_generics_has_no_parameters() {
    let decl = parse("export abstract class Repo<T extends Entity> {\n}\n");
    let sig = &decl.signature;
    assert_eq!(sig.kind, DeclarationKind::Class);
    assert_eq!(sig.name.as_deref(), Some("Repo"));
    assert!(sig.modifiers.is_abstract);
    assert_eq!(sig.type_parameters.len(), 1);
    assert_eq!(sig.type_parameters[0].constraint.as_deref(), Some("Entity"));
    // kind determines which fields are meaningful
    assert!(sig.parameters.is_empty());
    assert!(sig.return_type.is_none());
}

#[test]
fn interface_enum_and_type_alias() {
    assert_eq!(
        parse("interface Options {\n  retries: number;\n}\n").signature.kind,
        DeclarationKind::Interface
    );
    assert_eq!(
        parse("enum Color { Red, Green }\n").signature.kind,
        DeclarationKind::Enum
    );
    assert_eq!(
        parse("const enum Flags { A, B }\n").signature.kind,
        DeclarationKind::Enum
    );
    let alias = parse("type Result<T> = { ok: boolean; value: T };\n");
    assert_eq!(alias.signature.kind, DeclarationKind::TypeAlias);
    assert_eq!(alias.signature.type_parameters.len(), 1);
}

#[test]
fn generic_function_with_indexed_return() {
    let decl = parse("function pick<T, K extends keyof T>(obj: T, key: K): T[K] {}");
    let sig = &decl.signature;
    assert_eq!(sig.type_parameters.len(), 2);
    assert_eq!(
        sig.type_parameters[1].constraint.as_deref(),
        Some("keyof T")
    );
    assert_eq!(sig.return_type.as_deref(), Some("T[K]"));
}

#[test]
fn object_literal_return_type_is_not_the_body() {
    let decl = parse("function origin(): { x: number; y: number } { return o; }");
    assert_eq!(
        decl.signature.return_type.as_deref(),
        Some("{ x: number; y: number }")
    );
}

#[test]
fn rest_and_optional_parameters() {
    let decl = parse("function log(level?: string, ...args: string[]) {}");
    let sig = &decl.signature;
    assert!(sig.parameters[0].optional);
    assert!(sig.parameters[1].rest);
    assert_eq!(sig.parameters[1].name, "args");
}

#[test]
fn this_pseudo_parameter_is_not_documented() {
    let decl = parse("function bound(this: Window, ev: Event) {}");
    assert_eq!(decl.signature.parameters.len(), 1);
    assert_eq!(decl.signature.parameters[0].name, "ev");
}

#[test]
fn throw_sites_become_hints_in_order() {
    let decl = parse(
        "function risky(v) {\n  if (!v) { throw new ValidationError(v); }\n  throw new RangeError();\n}\n",
    );
    assert_eq!(
        decl.signature.throws_hints,
        vec!["ValidationError".to_string(), "RangeError".to_string()]
    );
}

#[test]
fn duplicate_throw_types_collapse() {
    let decl =
        parse("function f(a) {\n  throw new Error(a);\n  throw new Error('again');\n}\n");
    assert_eq!(decl.signature.throws_hints, vec!["Error".to_string()]);
}

#[test]
fn static_async_generator_method() {
    let decl = parse("static async *stream() {}");
    let m = &decl.signature.modifiers;
    assert!(m.is_static && m.is_async && m.is_generator);
    assert_eq!(decl.signature.kind, DeclarationKind::Method);
}

#[test]
fn class_property_with_access_modifier() {
    let decl = parse("private count: number = 0;");
    let sig = &decl.signature;
    assert_eq!(sig.kind, DeclarationKind::Property);
    assert_eq!(sig.return_type.as_deref(), Some("number"));
    assert_eq!(
        sig.modifiers.access.map(|a| a.as_str()),
        Some("private")
    );
}

#[test]
fn variable_with_declared_type() {
    let decl = parse("const MAX_RETRIES: number = 5;");
    assert_eq!(decl.signature.kind, DeclarationKind::Variable);
    assert_eq!(decl.signature.return_type.as_deref(), Some("number"));
}

#[test]
fn abstract_method_signature_without_body() {
    let decl = parse("abstract render(): void;");
    assert_eq!(decl.signature.kind, DeclarationKind::Method);
    assert!(decl.body.is_none());
}

#[test]
fn declare_function_without_body() {
    let decl = parse("declare function init(flag: boolean): void;");
    assert_eq!(decl.signature.kind, DeclarationKind::Function);
    assert_eq!(decl.signature.parameters.len(), 1);
    assert!(decl.body.is_none());
}

#[test]
fn anchor_skips_comments_and_decorators() {
    let text = "// helper wiring\n@Injectable()\nexport class Service {\n}\n";
    let src = SourceText::new(text);
    let decl = parse_at(&src, 0).unwrap();
    assert_eq!(decl.signature.kind, DeclarationKind::Class);
    assert_eq!(decl.signature.name.as_deref(), Some("Service"));
    assert_eq!(decl.line, 2);
}

#[test]
fn statements_are_not_declarations() {
    for text in ["return x + 1;", "if (ready) {}", "super(props);", "import x from 'y';"] {
        let src = SourceText::new(text);
        assert!(
            matches!(parse_at(&src, 0), Err(DocError::NotADeclaration)),
            "{text:?} must not classify"
        );
    }
}

#[test]
fn unbalanced_brackets_are_reported_per_declaration() {
    let src = SourceText::new("function broken(a, (b {}\n");
    assert!(matches!(
        parse_at(&src, 0),
        Err(DocError::UnbalancedSyntax { .. })
    ));
}

#[test]
fn blank_file_is_not_a_declaration() {
    let src = SourceText::new("\n\n\n");
    assert!(matches!(parse_at(&src, 0), Err(DocError::NotADeclaration)));
}
