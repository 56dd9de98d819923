use futureskills_core::{
    Career, CareerCatalog, Category, Competency, CompetencyRegistry, OrientationConfig,
    OrientationEngine, OrientationError, Profile, ProfileStore,
};

fn registry_ab() -> CompetencyRegistry {
    CompetencyRegistry::new(vec![
        Competency::new("A", Category::Technical, "Technical skill A"),
        Competency::new("B", Category::Behavioral, "Behavioral skill B"),
    ])
    .unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.01,
        "expected {:.2}, got {:.4}",
        expected,
        actual
    );
}

#[test]
fn test_scenario_full_profile_scores_eighty() {
    let registry = registry_ab();
    let catalog = CareerCatalog::new(
        vec![Career::new("X").requires("A", 2.0).requires("B", 1.0)],
        &registry,
    )
    .unwrap();
    let engine = OrientationEngine::new(&registry, &catalog, OrientationConfig::default());

    let profile = Profile::new("Ana").with_rating("A", 5).with_rating("B", 2);
    let ranked = engine.recommend(&profile);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].career.name, "X");
    assert_close(ranked[0].score, 80.0);
}

#[test]
fn test_scenario_missing_rating_counts_as_zero() {
    let registry = registry_ab();
    let catalog = CareerCatalog::new(
        vec![Career::new("X").requires("A", 2.0).requires("B", 1.0)],
        &registry,
    )
    .unwrap();
    let engine = OrientationEngine::new(&registry, &catalog, OrientationConfig::default());

    let profile = Profile::new("Ana").with_rating("A", 4);
    assert_close(engine.score(&profile, catalog.find("X").unwrap()), 53.33);
}

#[test]
fn test_extremes_are_zero_and_hundred() {
    let engine = OrientationEngine::builtin(OrientationConfig::default());
    let registry = CompetencyRegistry::builtin();

    let mut all_five = Profile::new("Max");
    for competency in registry.list() {
        all_five.rate(&competency.name, 5);
    }
    let empty = Profile::new("Min");

    for career in CareerCatalog::builtin().list() {
        assert_close(engine.score(&all_five, career), 100.0);
        assert_eq!(engine.score(&empty, career), 0.0);
    }
}

#[test]
fn test_scores_stay_within_bounds() {
    let engine = OrientationEngine::builtin(OrientationConfig::default());
    let registry = CompetencyRegistry::builtin();

    for level in 1..=5u8 {
        let mut profile = Profile::new("Bounded");
        for (idx, competency) in registry.list().iter().enumerate() {
            let rating = ((idx as u8 + level) % 5) + 1;
            profile.rate(&competency.name, rating);
        }
        for rec in engine.recommend(&profile) {
            assert!(rec.score >= 0.0 && rec.score <= 100.0, "{}", rec.score);
        }
    }
}

#[test]
fn test_recommend_sorted_descending_with_catalog_tie_break() {
    let registry = registry_ab();
    let catalog = CareerCatalog::new(
        vec![
            Career::new("First").requires("A", 1.0),
            Career::new("Second").requires("B", 1.0),
            Career::new("Third").requires("A", 3.0),
            Career::new("Degenerate"),
        ],
        &registry,
    )
    .unwrap();
    let engine = OrientationEngine::new(&registry, &catalog, OrientationConfig::default());

    let profile = Profile::new("Ana").with_rating("A", 3).with_rating("B", 5);
    let names: Vec<_> = engine
        .recommend(&profile)
        .iter()
        .map(|r| r.career.name.as_str())
        .collect();

    assert_eq!(names, vec!["Second", "First", "Third", "Degenerate"]);
}

#[test]
fn test_uniform_ratings_keep_builtin_catalog_order() {
    let engine = OrientationEngine::builtin(OrientationConfig::default());
    let catalog_order: Vec<_> = CareerCatalog::builtin()
        .list()
        .iter()
        .map(|c| c.name.as_str())
        .collect();

    for level in 1..=5 {
        let mut profile = Profile::new("Uniform");
        for competency in CompetencyRegistry::builtin().list() {
            profile.rate(&competency.name, level);
        }

        let recommendations = engine.recommend(&profile);
        let names: Vec<_> = recommendations
            .iter()
            .map(|r| r.career.name.as_str())
            .collect();
        assert_eq!(names, catalog_order, "level {}", level);
        for rec in &recommendations {
            assert_close(rec.score, f64::from(level) * 20.0);
        }
    }
}

#[test]
fn test_builtin_ranking_for_a_developer_profile() {
    let engine = OrientationEngine::builtin(OrientationConfig::default());
    let profile = Profile::new("Dev")
        .with_rating("Lógica de Programação", 5)
        .with_rating("Resolução de Problemas", 5)
        .with_rating("Colaboração", 4)
        .with_rating("Adaptabilidade", 4)
        .with_rating("Comunicação", 4)
        .with_rating("Pensamento Analítico", 3)
        .with_rating("Criatividade", 1)
        .with_rating("Liderança", 1)
        .with_rating("Curiosidade", 2)
        .with_rating("Inteligência Artificial", 1);

    let top = engine.top_recommendations(&profile, 3);
    assert_eq!(top.len(), 3);
    assert_eq!(top[0].career.name, "Engenheiro de Software");
    // 0.30*5 + 0.25*5 + 0.15*4*3 = 4.55 out of 5
    assert_close(top[0].score, 91.0);

    let all = engine.recommend(&profile);
    assert_eq!(all.len(), 6);
    assert!(all.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_suggestions_respect_threshold_and_order() {
    let engine = OrientationEngine::builtin(OrientationConfig::default());
    let profile = Profile::new("Ana")
        .with_rating("Liderança", 2)
        .with_rating("Comunicação", 4)
        .with_rating("Criatividade", 3)
        .with_rating("Adaptabilidade", 2)
        .with_rating("Inteligência Artificial", 1);

    let suggestions = engine.suggest_improvements(&profile, 3);
    let ordered: Vec<_> = suggestions
        .iter()
        .map(|s| (s.competency.name.as_str(), s.rating))
        .collect();

    assert_eq!(
        ordered,
        vec![
            ("Inteligência Artificial", 1),
            ("Adaptabilidade", 2),
            ("Liderança", 2),
            ("Criatividade", 3),
        ]
    );
    assert!(suggestions.iter().all(|s| s.rating <= 3));
    assert!(!ordered.iter().any(|(name, _)| *name == "Comunicação"));
}

#[test]
fn test_behavioral_weakness_gets_soft_skill_activity() {
    let engine = OrientationEngine::builtin(OrientationConfig::default());
    let profile = Profile::new("Ana")
        .with_rating("Colaboração", 2)
        .with_rating("Lógica de Programação", 2);

    let suggestions = engine.suggest_improvements(&profile, 3);
    assert_eq!(suggestions.len(), 2);

    let collaboration = suggestions
        .iter()
        .find(|s| s.competency.name == "Colaboração")
        .unwrap();
    assert_eq!(collaboration.competency.category, Category::Behavioral);
    assert!(collaboration.activity.contains("mentor"));
    assert_eq!(collaboration.competency.track.len(), 2);

    let logic = suggestions
        .iter()
        .find(|s| s.competency.name == "Lógica de Programação")
        .unwrap();
    assert!(logic.activity.contains("course"));
}

#[test]
fn test_lower_threshold_drops_borderline_competencies() {
    let engine = OrientationEngine::builtin(OrientationConfig::default());
    let profile = Profile::new("Ana")
        .with_rating("Criatividade", 3)
        .with_rating("Curiosidade", 1);

    assert_eq!(engine.suggest_improvements(&profile, 3).len(), 2);
    assert_eq!(engine.suggest_improvements(&profile, 2).len(), 1);
    assert!(engine.suggest_improvements(&profile, 0).is_empty());
}

#[test]
fn test_store_validation_guards_the_engine() {
    let mut store = ProfileStore::new(CompetencyRegistry::builtin());

    assert!(matches!(
        store.add(Profile::new("Ana").with_rating("Criatividade", 6)),
        Err(OrientationError::Validation(_))
    ));
    assert!(matches!(
        store.add(Profile::new("")),
        Err(OrientationError::Validation(_))
    ));

    let stored = store
        .add(Profile::new("Ana").with_rating("Criatividade", 5))
        .unwrap();
    assert_eq!(stored.rating("Criatividade"), Some(5));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_recommendation_serializes_to_json() {
    let engine = OrientationEngine::builtin(OrientationConfig::default());
    let profile = Profile::new("Ana").with_rating("Inteligência Artificial", 5);
    let top = engine.top_recommendations(&profile, 1);

    let json = serde_json::to_value(&top).unwrap();
    assert_eq!(json[0]["career"]["name"], "Engenheiro de Machine Learning");
    assert_close(json[0]["score"].as_f64().unwrap(), 40.0);
}
