//! Competency Registry
//!
//! Read-only catalog of the competencies a profile can be rated on.
//! The built-in set is defined as a static table and materialised once.

use crate::error::{OrientationError, Result};
use crate::types::{Category, Competency};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// (name, category, description, improvement track)
type CompetencyRow = (&'static str, Category, &'static str, &'static [&'static str]);

const BUILTIN_COMPETENCIES: &[CompetencyRow] = &[
    (
        "Lógica de Programação",
        Category::Technical,
        "Capacidade de entender algoritmos e estruturas lógicas",
        &[
            "Curso introdutório de lógica no Codecademy",
            "Resolver desafios em plataformas como HackerRank ou LeetCode",
        ],
    ),
    (
        "Criatividade",
        Category::Behavioral,
        "Habilidade de propor soluções inovadoras e originais",
        &[
            "Praticar brainstormings e design thinking",
            "Participar de workshops de inovação",
        ],
    ),
    (
        "Colaboração",
        Category::Behavioral,
        "Trabalhar bem em equipe e compartilhar conhecimento",
        &[
            "Trabalhar em projetos em equipe",
            "Estudar metodologias ágeis",
        ],
    ),
    (
        "Adaptabilidade",
        Category::Behavioral,
        "Capacidade de se ajustar rapidamente a mudanças",
        &[
            "Participar de cursos sobre gestão de mudanças",
            "Exercitar flexibilidade em projetos multidisciplinares",
        ],
    ),
    (
        "Pensamento Analítico",
        Category::Technical,
        "Analisar dados e problemas de forma estruturada",
        &[
            "Aprender estatística básica e análise de dados",
            "Praticar interpretação de dashboards e gráficos",
        ],
    ),
    (
        "Inteligência Artificial",
        Category::Technical,
        "Conhecimento em algoritmos e ferramentas de IA",
        &[
            "Fazer um curso de introdução ao Machine Learning",
            "Explorar bibliotecas de IA como TensorFlow ou PyTorch",
        ],
    ),
    (
        "Comunicação",
        Category::Behavioral,
        "Expressar ideias de forma clara e objetiva",
        &[
            "Participar de debates e apresentações",
            "Estudar técnicas de storytelling",
        ],
    ),
    (
        "Resolução de Problemas",
        Category::Behavioral,
        "Diagnosticar e resolver problemas de forma eficaz",
        &[
            "Praticar lógica e quebra-cabeças",
            "Aplicar metodologias como Design Thinking",
        ],
    ),
    (
        "Curiosidade",
        Category::Behavioral,
        "Desejo contínuo de aprender coisas novas",
        &[
            "Ler artigos de diferentes áreas regularmente",
            "Explorar novos hobbies e ferramentas",
        ],
    ),
    (
        "Liderança",
        Category::Behavioral,
        "Influenciar e motivar pessoas para atingir objetivos",
        &[
            "Participar de cursos de gestão de equipes",
            "Ler biografias de líderes inspiradores",
        ],
    ),
];

static BUILTIN: Lazy<CompetencyRegistry> = Lazy::new(|| CompetencyRegistry {
    competencies: BUILTIN_COMPETENCIES
        .iter()
        .map(|(name, category, description, track)| {
            Competency::new(name, *category, description).with_track(track)
        })
        .collect(),
});

/// Immutable set of known competencies, in definition order
#[derive(Debug, Clone)]
pub struct CompetencyRegistry {
    competencies: Vec<Competency>,
}

impl CompetencyRegistry {
    /// Build a custom registry. Names must be non-empty and unique.
    pub fn new(competencies: Vec<Competency>) -> Result<Self> {
        let mut seen = HashSet::new();
        for competency in &competencies {
            if competency.name.trim().is_empty() {
                return Err(OrientationError::validation(
                    "competency name cannot be empty",
                ));
            }
            if !seen.insert(competency.name.as_str()) {
                return Err(OrientationError::validation(format!(
                    "duplicate competency '{}'",
                    competency.name
                )));
            }
        }
        Ok(Self { competencies })
    }

    /// The shared built-in registry
    pub fn builtin() -> &'static CompetencyRegistry {
        &BUILTIN
    }

    pub fn list(&self) -> &[Competency] {
        &self.competencies
    }

    pub fn find(&self, name: &str) -> Result<&Competency> {
        self.competencies
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| OrientationError::not_found("Competency", name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.competencies.iter().any(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.competencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.competencies.is_empty()
    }
}
