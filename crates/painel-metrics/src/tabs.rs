//! Headline metrics for each clinical category.
//!
//! Every function is a pure scan over the record set: one pass per metric,
//! exact string tests against the feed's marker values. A missing column
//! simply counts zero; column lookups are optional-existence checks.

use painel_model::{FeedCategory, NOT_APPLICABLE, Record};

use crate::value::NamedMetric;

/// The rendered metric blocks for one category: headline cards, the
/// indicator progress list, and the status breakdown.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TabMetrics {
    pub total: usize,
    pub cards: Vec<NamedMetric>,
    pub indicators: Vec<NamedMetric>,
    pub status: Vec<NamedMetric>,
}

/// Derives the metric blocks for a category. Callers pass the currently
/// filtered record subset so headline numbers always follow the table.
pub fn derive_metrics(category: FeedCategory, records: &[&Record]) -> TabMetrics {
    match category {
        FeedCategory::DesenvolvimentoInfantil => child_development(records),
        FeedCategory::Vacinas => vaccination(records),
        FeedCategory::GestacaoPuerperio => prenatal(records),
        FeedCategory::Hipertensao => hypertension(records),
        FeedCategory::Diabetes => diabetes(records),
        FeedCategory::SaudeMulher => womens_health(records),
        FeedCategory::PessoaIdosa => elderly(records),
    }
}

/// The status column whose values drive the category's breakdown block
/// and the overview counts.
pub fn status_column(category: FeedCategory) -> &'static str {
    match category {
        FeedCategory::Vacinas => "STATUS DAS VACINAS",
        FeedCategory::Hipertensao | FeedCategory::Diabetes => "TODAS AS BOAS PRÁTICAS",
        _ => "STATUS DAS BOAS PRÁTICAS",
    }
}

/// (positive, negative) counts over a status column, using the substring
/// semantics of the breakdown blocks. The probable test excludes the
/// negated form.
pub fn status_counts(records: &[&Record], column: &str) -> (usize, usize) {
    let mut positive = 0;
    let mut negative = 0;
    for record in records {
        let value = record.get(column);
        if value.contains("REALIZADAS") || is_probable(value) {
            positive += 1;
        } else if value.contains("FALTANDO")
            || value.contains("ATRASADAS")
            || value.contains("NÃO PROVÁVEL")
            || value.contains("PRIORIDADE")
        {
            negative += 1;
        }
    }
    (positive, negative)
}

fn child_development(records: &[&Record]) -> TabMetrics {
    let total = records.len();
    let primeira_consulta = count_filled(records, "IDADE 1ª CONSULTA (<=30 DIAS)");
    let primeira_visita = count_filled(records, "1ª VISITA ACS (<=30 DIAS)");
    let nove_consultas = count_equals(records, "TOTAL DE CONSULTAS (9)", "SIM");
    let nove_peso_altura = count_equals(records, "TOTAL DE PESO & ALTURA (9)", "SIM");
    let status = "STATUS DAS BOAS PRÁTICAS";
    let realizadas = count_contains(records, status, "REALIZADAS");
    TabMetrics {
        total,
        cards: vec![
            NamedMetric::new("Total de Crianças", total, total),
            NamedMetric::new("1ª Consulta ≤30 dias", primeira_consulta, total),
            NamedMetric::new("9+ Consultas", nove_consultas, total),
            NamedMetric::new("Boas Práticas Realizadas", realizadas, total),
        ],
        indicators: vec![
            NamedMetric::new("1ª Consulta (≤30 dias)", primeira_consulta, total),
            NamedMetric::new("1ª Visita ACS (≤30 dias)", primeira_visita, total),
            NamedMetric::new("9+ Consultas", nove_consultas, total),
            NamedMetric::new("9+ Peso & Altura", nove_peso_altura, total),
        ],
        status: vec![
            NamedMetric::new("Realizadas", realizadas, total),
            NamedMetric::new("Faltando", count_contains(records, status, "FALTANDO"), total),
            NamedMetric::new(
                "Prioridade",
                count_contains(records, status, "PRIORIDADE"),
                total,
            ),
        ],
    }
}

fn vaccination(records: &[&Record]) -> TabMetrics {
    let total = records.len();
    let penta = count_filled(records, "3ª PENTA");
    let polio = count_filled(records, "3ª PÓLIO");
    let pneumo = count_filled(records, "2ª PNEUMO10");
    let triplice = count_filled(records, "2ª TRÍPLICE VIRAL");
    let realizadas = count_contains(records, "STATUS DAS VACINAS", "REALIZADAS");
    let atrasadas = count_contains(records, "STATUS DAS VACINAS", "ATRASADAS");
    TabMetrics {
        total,
        cards: vec![
            NamedMetric::new("Total de Crianças", total, total),
            NamedMetric::new("Vacinas Completas", realizadas, total),
            NamedMetric::new("Vacinas Atrasadas", atrasadas, total),
            NamedMetric::new("3ª Dose Penta", penta, total),
        ],
        indicators: vec![
            NamedMetric::new("3ª Dose Pentavalente (DTP/HEPB/HIB)", penta, total),
            NamedMetric::new("3ª Dose Pólio Injetável", polio, total),
            NamedMetric::new("2ª Dose Pneumo 10", pneumo, total),
            NamedMetric::new("2ª Dose Tríplice Viral", triplice, total),
        ],
        status: vec![
            NamedMetric::new("Realizadas", realizadas, total),
            NamedMetric::new("Atrasadas", atrasadas, total),
            NamedMetric::new(
                "Em andamento",
                total.saturating_sub(realizadas + atrasadas),
                total,
            ),
        ],
    }
}

fn prenatal(records: &[&Record]) -> TabMetrics {
    let total = records.len();
    let ate_12_semanas = count_equals(records, "Consultas até 12 semanas (1)", "SIM");
    let sete_consultas = count_equals(records, "Consultas de Pré-natal (7)", "SIM");
    let odonto = count_equals(records, "Consultas odonto (1)", "SIM");
    let exames_1tri = count_equals(records, "EXAMES 1º TRI (SIM)", "SIM");
    let visita_puerperio = count_equals(records, "Visita no puerpério (1)", "SIM");
    let visitas_pn = count_equals(records, "Visita no PN (3)", "SIM");
    let consulta_puerperio = count_equals(records, "Consultas no puerpério (1)", "SIM");
    let dtpa = records
        .iter()
        .filter(|record| {
            let value = record.get("dTpa");
            !value.is_empty() && value != "0"
        })
        .count();
    TabMetrics {
        total,
        cards: vec![
            NamedMetric::new("Total de Gestantes", total, total),
            NamedMetric::new("Consulta ≤12 semanas", ate_12_semanas, total),
            NamedMetric::new("7+ Consultas Pré-Natal", sete_consultas, total),
            NamedMetric::new("Visita Puerpério", visita_puerperio, total),
        ],
        indicators: vec![
            NamedMetric::new("Consulta até 12 semanas", ate_12_semanas, total),
            NamedMetric::new("7+ Consultas de Pré-natal", sete_consultas, total),
            NamedMetric::new("Consulta Odontológica", odonto, total),
            NamedMetric::new("Exames 1º Trimestre", exames_1tri, total),
            NamedMetric::new("3+ Visitas no Pré-natal", visitas_pn, total),
            NamedMetric::new("Visita no Puerpério", visita_puerperio, total),
            NamedMetric::new("Consulta Puerpério", consulta_puerperio, total),
            NamedMetric::new("Vacina dTpa", dtpa, total),
        ],
        status: Vec::new(),
    }
}

fn hypertension(records: &[&Record]) -> TabMetrics {
    let total = records.len();
    let consulta = count_filled(records, "DATA DA CONSULTA ATUAL");
    let pa = count_filled(records, "DATA PA ATUAL");
    let peso_altura = count_filled(records, "DATA PESO/ALTURA ATUAL");
    let status = "TODAS AS BOAS PRÁTICAS";
    let provavel = count_probable(records, status);
    TabMetrics {
        total,
        cards: vec![
            NamedMetric::new("Total de Pacientes", total, total),
            NamedMetric::new("Com Consulta Atualizada", consulta, total),
            NamedMetric::new("Com PA Aferida", pa, total),
            NamedMetric::new("Boas Práticas Prováveis", provavel, total),
        ],
        indicators: vec![
            NamedMetric::new("Consulta Atualizada", consulta, total),
            NamedMetric::new("Pressão Arterial Aferida", pa, total),
            NamedMetric::new("Peso/Altura Registrado", peso_altura, total),
        ],
        status: vec![
            NamedMetric::new("Provável", provavel, total),
            NamedMetric::new(
                "Não Provável",
                count_contains(records, status, "NÃO PROVÁVEL"),
                total,
            ),
        ],
    }
}

fn diabetes(records: &[&Record]) -> TabMetrics {
    let total = records.len();
    let consulta = count_filled(records, "DATA DA CONSULTA ATUAL");
    let hb_glicada = count_filled(records, "HB GLICADA");
    let aval_pes = count_filled(records, "DATA DA AVALIAÇÃO DOS PÉS ATUAL");
    let pa = count_filled(records, "DATA PA ATUAL");
    let status = "TODAS AS BOAS PRÁTICAS";
    let provavel = count_probable(records, status);
    TabMetrics {
        total,
        cards: vec![
            NamedMetric::new("Total de Pacientes", total, total),
            NamedMetric::new("Com Consulta Atualizada", consulta, total),
            NamedMetric::new("Hemoglobina Glicada", hb_glicada, total),
            NamedMetric::new("Boas Práticas Prováveis", provavel, total),
        ],
        indicators: vec![
            NamedMetric::new("Consulta Atualizada", consulta, total),
            NamedMetric::new("PA Aferida", pa, total),
            NamedMetric::new("Hemoglobina Glicada", hb_glicada, total),
            NamedMetric::new("Avaliação dos Pés", aval_pes, total),
        ],
        status: vec![
            NamedMetric::new("Provável", provavel, total),
            NamedMetric::new(
                "Não Provável",
                count_contains(records, status, "NÃO PROVÁVEL"),
                total,
            ),
        ],
    }
}

fn womens_health(records: &[&Record]) -> TabMetrics {
    let total = records.len();
    let colo = count_date(
        records,
        "DATA DA ÚLTIMA SOLIC/AVALIAÇÃO DO EXAME DE COLO DE ÚTERO",
    );
    let mamografia = count_date(records, "DATA DA MAMOGRAFIA");
    // The feed header carries this typo; match it verbatim.
    let saude_reprodutiva = count_filled(records, "DATA DA CONSULTA EM SAÚDE REPRODUTVA");
    let status = "STATUS DAS BOAS PRÁTICAS";
    let realizadas = count_contains(records, status, "REALIZADAS");
    let faltando = count_contains(records, status, "FALTANDO");
    TabMetrics {
        total,
        cards: vec![
            NamedMetric::new("Total de Mulheres", total, total),
            NamedMetric::new("Exame de Colo", colo, total),
            NamedMetric::new("Boas Práticas Realizadas", realizadas, total),
            NamedMetric::new("Pendências", faltando, total),
        ],
        indicators: vec![
            NamedMetric::new("Exame de Colo de Útero", colo, total),
            NamedMetric::new("Mamografia", mamografia, total),
            NamedMetric::new("Consulta Saúde Reprodutiva", saude_reprodutiva, total),
        ],
        status: vec![
            NamedMetric::new("Realizadas", realizadas, total),
            NamedMetric::new("Faltando", faltando, total),
        ],
    }
}

fn elderly(records: &[&Record]) -> TabMetrics {
    let total = records.len();
    let consulta = count_filled(records, "ÚLTIMA CONSULTA");
    let peso_altura = count_equals(records, "TOTAL DE PESO/ALTURA (2)", "SIM");
    let influenza = count_filled(records, "INFLUENZA");
    let status = "STATUS DAS BOAS PRÁTICAS";
    let realizadas = count_contains(records, status, "REALIZADAS");
    TabMetrics {
        total,
        cards: vec![
            NamedMetric::new("Total de Idosos", total, total),
            NamedMetric::new("Com Consulta Atualizada", consulta, total),
            NamedMetric::new("Vacina Influenza", influenza, total),
            NamedMetric::new("Boas Práticas Realizadas", realizadas, total),
        ],
        indicators: vec![
            NamedMetric::new("Consulta Atualizada", consulta, total),
            NamedMetric::new("Peso/Altura (2 registros)", peso_altura, total),
            NamedMetric::new("Vacina Influenza", influenza, total),
        ],
        status: vec![
            NamedMetric::new("Realizadas", realizadas, total),
            NamedMetric::new("Faltando", count_contains(records, status, "FALTANDO"), total),
        ],
    }
}

fn count_filled(records: &[&Record], column: &str) -> usize {
    records
        .iter()
        .filter(|record| !record.get(column).is_empty())
        .count()
}

fn count_equals(records: &[&Record], column: &str, expected: &str) -> usize {
    records
        .iter()
        .filter(|record| record.get(column) == expected)
        .count()
}

fn count_contains(records: &[&Record], column: &str, needle: &str) -> usize {
    records
        .iter()
        .filter(|record| record.get(column).contains(needle))
        .count()
}

/// Non-empty date cell, excluding the not-applicable sentinel.
fn count_date(records: &[&Record], column: &str) -> usize {
    records
        .iter()
        .filter(|record| {
            let value = record.get(column);
            !value.is_empty() && value != NOT_APPLICABLE
        })
        .count()
}

fn is_probable(value: &str) -> bool {
    value.contains("PROVÁVEL") && !value.contains("NÃO PROVÁVEL")
}

/// Probable-status count that does not also match the negated marker.
fn count_probable(records: &[&Record], column: &str) -> usize {
    records
        .iter()
        .filter(|record| is_probable(record.get(column)))
        .count()
}
