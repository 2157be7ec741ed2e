use component_builder::generator::ComponentGenerator;
use component_builder::linter::ComponentValidator;
use component_builder::registry;
use component_builder::spec::parse_component_spec;
use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let generator = ComponentGenerator::new();
    let spec = parse_component_spec(&json!({
        "name": "SubmitButton",
        "type": "button",
        "variant": "primary",
        "size": "lg",
        "children": true,
        "props": [
            {"name": "loading", "type": "boolean", "required": false, "description": "Shows a spinner"}
        ],
        "accessibility": {"ariaLabel": "Submit form", "role": "button"}
    }))
    .expect("valid spec");

    c.bench_function("generate_button", |b| {
        b.iter(|| black_box(generator.generate_component(black_box(&spec))))
    });

    let specs: Vec<_> = registry::all_template_types()
        .into_iter()
        .map(|t| parse_component_spec(&json!({"name": "Demo", "type": t})).expect("valid spec"))
        .collect();
    c.bench_function("generate_every_type", |b| {
        b.iter(|| {
            for spec in &specs {
                black_box(generator.generate_component(spec).ok());
            }
        })
    });
}

fn bench_validate(c: &mut Criterion) {
    let generator = ComponentGenerator::new();
    let spec = parse_component_spec(&json!({"name": "Dialog", "type": "modal"})).expect("valid spec");
    let code = generator.generate_component(&spec).expect("generates").code;
    let validator = ComponentValidator::new();

    c.bench_function("validate_modal", |b| {
        b.iter(|| black_box(validator.validate_component(black_box(&code), false)))
    });
    c.bench_function("validate_modal_strict", |b| {
        b.iter(|| black_box(validator.validate_component(black_box(&code), true)))
    });
    c.bench_function("validate_pattern_modal", |b| {
        b.iter(|| black_box(validator.validate_pattern(black_box(&code), "modal")))
    });
}

criterion_group!(benches, bench_generate, bench_validate);
criterion_main!(benches);
