//! Career Catalog
//!
//! Read-only list of careers with weighted competency requirements and a
//! learning track. Insertion order is significant: it breaks score ties.

use crate::competencies::CompetencyRegistry;
use crate::error::{OrientationError, Result};
use crate::types::Career;
use once_cell::sync::Lazy;
use std::collections::HashSet;

struct CareerRow {
    name: &'static str,
    weights: &'static [(&'static str, f64)],
    track: &'static [&'static str],
}

const BUILTIN_CAREERS: &[CareerRow] = &[
    CareerRow {
        name: "Cientista de Dados",
        weights: &[
            ("Lógica de Programação", 0.25),
            ("Pensamento Analítico", 0.30),
            ("Curiosidade", 0.10),
            ("Colaboração", 0.10),
            ("Resolução de Problemas", 0.25),
        ],
        track: &[
            "Curso de programação em Python",
            "Especialização em ciência de dados e estatística",
            "Projetos práticos de análise de dados",
        ],
    },
    CareerRow {
        name: "Engenheiro de Software",
        weights: &[
            ("Lógica de Programação", 0.30),
            ("Resolução de Problemas", 0.25),
            ("Colaboração", 0.15),
            ("Adaptabilidade", 0.15),
            ("Comunicação", 0.15),
        ],
        track: &[
            "Curso avançado de programação orientada a objetos",
            "Prática de versionamento com Git e GitHub",
            "Contribuição para projetos open source",
        ],
    },
    CareerRow {
        name: "Designer de UX",
        weights: &[
            ("Criatividade", 0.30),
            ("Comunicação", 0.20),
            ("Curiosidade", 0.10),
            ("Colaboração", 0.20),
            ("Adaptabilidade", 0.20),
        ],
        track: &[
            "Cursos de design de interface e experiência do usuário",
            "Estudos de usabilidade e comportamento do usuário",
            "Construção de portfólio com projetos de design",
        ],
    },
    CareerRow {
        name: "Especialista em Cibersegurança",
        weights: &[
            ("Lógica de Programação", 0.20),
            ("Pensamento Analítico", 0.30),
            ("Resolução de Problemas", 0.30),
            ("Adaptabilidade", 0.20),
        ],
        track: &[
            "Formação em segurança da informação",
            "Certificações como CEH ou CompTIA Security+",
            "Prática em ambientes de captura a bandeira (CTF)",
        ],
    },
    CareerRow {
        name: "Engenheiro de Machine Learning",
        weights: &[
            ("Lógica de Programação", 0.20),
            ("Inteligência Artificial", 0.40),
            ("Pensamento Analítico", 0.25),
            ("Curiosidade", 0.15),
        ],
        track: &[
            "Curso intensivo de Machine Learning",
            "Projetos de IA aplicados a problemas reais",
            "Estudo de algoritmos avançados de aprendizado",
        ],
    },
    CareerRow {
        name: "Empreendedor Tecnológico",
        weights: &[
            ("Criatividade", 0.30),
            ("Liderança", 0.30),
            ("Adaptabilidade", 0.20),
            ("Comunicação", 0.20),
        ],
        track: &[
            "Cursos de empreendedorismo e inovação",
            "Participação em hackathons e incubadoras",
            "Leitura sobre modelos de negócio e startups",
        ],
    },
];

static BUILTIN: Lazy<CareerCatalog> = Lazy::new(|| CareerCatalog {
    careers: BUILTIN_CAREERS
        .iter()
        .map(|row| {
            row.weights
                .iter()
                .fold(Career::new(row.name), |career, (competency, weight)| {
                    career.requires(competency, *weight)
                })
                .with_track(row.track)
        })
        .collect(),
});

/// Immutable, ordered set of careers
#[derive(Debug, Clone)]
pub struct CareerCatalog {
    careers: Vec<Career>,
}

impl CareerCatalog {
    /// Build a custom catalog, checking every entry against `registry`
    pub fn new(careers: Vec<Career>, registry: &CompetencyRegistry) -> Result<Self> {
        validate_catalog(&careers, registry)?;
        log::debug!("[CATALOG] Loaded {} careers", careers.len());
        Ok(Self { careers })
    }

    /// The shared built-in catalog
    pub fn builtin() -> &'static CareerCatalog {
        &BUILTIN
    }

    pub fn list(&self) -> &[Career] {
        &self.careers
    }

    pub fn find(&self, name: &str) -> Result<&Career> {
        self.careers
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| OrientationError::not_found("Career", name))
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}

/// Checks names, weights and competency references of a set of careers.
///
/// A career without requirements is accepted; its score is always 0.
pub fn validate_catalog(careers: &[Career], registry: &CompetencyRegistry) -> Result<()> {
    let mut names = HashSet::new();
    for career in careers {
        if career.name.trim().is_empty() {
            return Err(OrientationError::validation("career name cannot be empty"));
        }
        if !names.insert(career.name.as_str()) {
            return Err(OrientationError::validation(format!(
                "duplicate career '{}'",
                career.name
            )));
        }

        let mut required = HashSet::new();
        for requirement in &career.requirements {
            if !registry.contains(&requirement.competency) {
                return Err(OrientationError::validation(format!(
                    "career '{}' requires unknown competency '{}'",
                    career.name, requirement.competency
                )));
            }
            if !required.insert(requirement.competency.as_str()) {
                return Err(OrientationError::validation(format!(
                    "career '{}' lists '{}' more than once",
                    career.name, requirement.competency
                )));
            }
            if !requirement.weight.is_finite() || requirement.weight <= 0.0 {
                return Err(OrientationError::validation(format!(
                    "career '{}' has invalid weight {} for '{}'",
                    career.name, requirement.weight, requirement.competency
                )));
            }
        }
    }
    Ok(())
}
