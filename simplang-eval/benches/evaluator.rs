use criterion::{criterion_group, criterion_main, Criterion};
use simplang_eval::evaluate;
use simplang_parser::{parse_program, Context, Expr};
use simplang_source::Source;

fn parse(source: &str) -> Expr {
    let source: Source = source.into();
    let mut ctx = Context::new(&source);
    parse_program(&mut ctx).unwrap()
}

fn long_sum(c: &mut Criterion) {
    let mut source = "0".to_string();
    for i in 0..1000 {
        source.push_str(&format!(" + {} * 2 - {}", i, i));
    }
    let ast = parse(&source);
    c.bench_function("long-sum", |b| b.iter(|| evaluate(&ast).unwrap()));
}

fn nested_if(c: &mut Criterion) {
    let mut source = String::new();
    for i in 0..200 {
        source.push_str(&format!("if ({} % 2 == 2) {} else ", i, i));
    }
    source.push('0');
    let ast = parse(&source);
    c.bench_function("nested-if", |b| b.iter(|| evaluate(&ast).unwrap()));
}

criterion_group!(benches, long_sum, nested_if);
criterion_main!(benches);
