//! Benchmarks for wochenplaner core operations.
//!
//! Run with: cargo bench
//!
//! Results include 95% confidence intervals via Criterion.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wochenplaner::core::classifier::Classifier;
use wochenplaner::core::parser;
use wochenplaner::core::shopping::shopping_list;
use wochenplaner::core::store::{Catalog, RecipeStore};
use wochenplaner::core::types::{Day, MealSlot, Recipe, WeekPlan};
use wochenplaner::render::{render_document, RenderOptions};

const INGREDIENTS: [&str; 12] = [
    "Milch", "Eier", "Haferflocken", "Banane", "Karotte", "Zucchini", "Nudeln", "Salz",
    "Joghurt", "Hähnchenbrust", "Olivenöl", "Apfelmus",
];

fn make_catalog(n: usize) -> Catalog {
    let recipes = (0..n)
        .map(|i| {
            let ingredients: Vec<_> = (0..5)
                .map(|k| INGREDIENTS[(i + k * 7) % INGREDIENTS.len()])
                .collect();
            Recipe {
                name: format!("Gericht {i:03}"),
                category: MealSlot::ALL[i % MealSlot::COUNT],
                ingredients: ingredients.join("; "),
                prep_time: "20 Minuten".to_string(),
                source: "Bench".to_string(),
            }
        })
        .collect();
    Catalog::from_recipes(recipes)
}

fn full_plan(catalog: &Catalog) -> WeekPlan {
    let mut plan = WeekPlan::new();
    let names: Vec<_> = catalog.recipes().iter().map(|r| r.name.clone()).collect();
    let mut i = 0;
    for day in Day::ALL {
        for slot in MealSlot::ALL {
            plan.set(day, slot, names[i % names.len()].clone());
            i += 1;
        }
    }
    plan
}

fn bench_classify(c: &mut Criterion) {
    let classifier = Classifier::default();
    let mut group = c.benchmark_group("classify");
    for ingredient in ["Milch", "200g Vollkorn-Nudeln", "Meersalz"] {
        group.bench_with_input(
            BenchmarkId::from_parameter(ingredient),
            &ingredient,
            |b, ingredient| {
                b.iter(|| black_box(classifier.classify(black_box(ingredient))).len());
            },
        );
    }
    group.finish();
}

fn bench_shopping_list(c: &mut Criterion) {
    let classifier = Classifier::default();
    let mut group = c.benchmark_group("shopping_list");
    for n in [10, 100, 1000] {
        let catalog = make_catalog(n);
        let plan = full_plan(&catalog);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let list = shopping_list(black_box(&plan), black_box(&catalog), &classifier);
                black_box(list);
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let catalog = make_catalog(100);
    let plan = full_plan(&catalog);
    let classifier = Classifier::default();
    let opts = RenderOptions {
        title: "Bench".to_string(),
        generated_on: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
    };

    c.bench_function("render_document", |b| {
        b.iter(|| {
            let html = render_document(black_box(&plan), &catalog, &classifier, &opts);
            black_box(html);
        });
    });
}

fn bench_catalog_roundtrip(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let store = RecipeStore::new(dir.path().join("rezepte.csv"));
    let catalog = make_catalog(500);

    c.bench_function("catalog_save_load_500", |b| {
        b.iter(|| {
            store.save(black_box(&catalog)).unwrap();
            black_box(store.load().unwrap());
        });
    });
}

fn bench_plan_parse(c: &mut Criterion) {
    let yaml = parser::plan_to_yaml(&full_plan(&make_catalog(35))).unwrap();

    c.bench_function("yaml_parse_plan", |b| {
        b.iter(|| {
            let plan = parser::parse_plan(black_box(&yaml)).unwrap();
            black_box(plan);
        });
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_shopping_list,
    bench_render,
    bench_catalog_roundtrip,
    bench_plan_parse
);
criterion_main!(benches);
