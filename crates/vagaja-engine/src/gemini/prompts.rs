//! Prompt templates for candidate analysis and criteria suggestion.
//!
//! Templates exist per locale and are selected explicitly; placeholders are
//! filled with `.replace`, never with global state.

use crate::locale::Locale;
use crate::models::criteria::Criterion;

/// Candidate analysis prompt (English).
/// Replace `{criteria_list}`, `{job_description}`, `{candidate_cv}`.
pub const ANALYSIS_PROMPT_EN: &str = r#"You are an expert technical recruiter. Your task is to analyze a candidate's CV against a job description and score them on a set of predefined criteria.

Instructions:
1. Carefully read the Job Description to understand the role's requirements.
2. Thoroughly review the Candidate's CV to assess their skills and experience.
3. Extract the candidate's full name from the CV.
4. For each of the following criteria, provide a score from 0 (no match) to 100 (perfect match): {criteria_list}.
5. For each score, provide a brief, one-sentence justification explaining your reasoning based on the CV and job description.
6. Extract the candidate's work experience, education history, and a list of key skills.
7. The final output must be a JSON object matching the required schema.

Job Description:
---
{job_description}
---

Candidate CV:
---
{candidate_cv}
---"#;

/// Candidate analysis prompt (Portuguese).
/// Replace `{criteria_list}`, `{job_description}`, `{candidate_cv}`.
pub const ANALYSIS_PROMPT_PT: &str = r#"Você é um recrutador técnico especialista. Sua tarefa é analisar o CV de um candidato em comparação com uma descrição de vaga e pontuá-lo com base em um conjunto de critérios pré-definidos.

Instruções:
1. Leia atentamente a Descrição da Vaga para entender os requisitos do cargo.
2. Revise completamente o CV do Candidato para avaliar suas habilidades e experiência.
3. Extraia o nome completo do candidato do CV.
4. Para cada um dos seguintes critérios, forneça uma pontuação de 0 (nenhuma correspondência) a 100 (correspondência perfeita): {criteria_list}.
5. Para cada pontuação, forneça uma justificativa breve de uma frase explicando seu raciocínio com base no CV e na descrição da vaga.
6. Extraia a experiência profissional do candidato, seu histórico educacional e uma lista de habilidades-chave.
7. A saída final deve ser um objeto JSON que corresponda ao esquema exigido.

Descrição da Vaga:
---
{job_description}
---

CV do Candidato:
---
{candidate_cv}
---"#;

/// Criteria suggestion prompt (English). Replace `{job_description}`.
pub const SUGGESTION_PROMPT_EN: &str = r#"You are an expert technical recruiter. Read the job description below and propose the evaluation criteria a recruiter should score candidates on.

Instructions:
1. Propose between 4 and 6 criteria covering the technical and behavioral requirements of the role.
2. Give each criterion a short, specific name (e.g. "React Experience", not "Skills").
3. Assign each criterion an importance weight from 1 (nice to have) to 5 (critical).
4. The final output must be a JSON array matching the required schema.

Job Description:
---
{job_description}
---"#;

/// Criteria suggestion prompt (Portuguese). Replace `{job_description}`.
pub const SUGGESTION_PROMPT_PT: &str = r#"Você é um recrutador técnico especialista. Leia a descrição de vaga abaixo e proponha os critérios de avaliação que um recrutador deve usar para pontuar candidatos.

Instruções:
1. Proponha entre 4 e 6 critérios cobrindo os requisitos técnicos e comportamentais do cargo.
2. Dê a cada critério um nome curto e específico (ex.: "Experiência com React", não "Habilidades").
3. Atribua a cada critério um peso de importância de 1 (desejável) a 5 (crítico).
4. A saída final deve ser um array JSON que corresponda ao esquema exigido.

Descrição da Vaga:
---
{job_description}
---"#;

/// Builds the analysis prompt for one CV. Criterion names are joined with
/// ", " so the model can echo them back exactly.
pub fn analysis_prompt(
    locale: Locale,
    job_description: &str,
    candidate_cv: &str,
    criteria: &[Criterion],
) -> String {
    let criteria_list = criteria
        .iter()
        .map(|criterion| criterion.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let template = match locale {
        Locale::En => ANALYSIS_PROMPT_EN,
        Locale::Pt => ANALYSIS_PROMPT_PT,
    };

    template
        .replace("{criteria_list}", &criteria_list)
        .replace("{job_description}", job_description)
        .replace("{candidate_cv}", candidate_cv)
}

/// Builds the criteria suggestion prompt.
pub fn suggestion_prompt(locale: Locale, job_description: &str) -> String {
    let template = match locale {
        Locale::En => SUGGESTION_PROMPT_EN,
        Locale::Pt => SUGGESTION_PROMPT_PT,
    };

    template.replace("{job_description}", job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_criteria() -> Vec<Criterion> {
        vec![
            Criterion::new("Technical Skills", 4),
            Criterion::new("Communication Skills", 3),
        ]
    }

    #[test]
    fn test_analysis_prompt_fills_all_placeholders() {
        let prompt = analysis_prompt(
            Locale::En,
            "Senior Rust engineer",
            "Ana Souza, 8 years of Rust",
            &sample_criteria(),
        );

        assert!(prompt.contains("Senior Rust engineer"));
        assert!(prompt.contains("Ana Souza, 8 years of Rust"));
        assert!(prompt.contains("Technical Skills, Communication Skills"));
        assert!(!prompt.contains("{criteria_list}"));
        assert!(!prompt.contains("{job_description}"));
        assert!(!prompt.contains("{candidate_cv}"));
    }

    #[test]
    fn test_analysis_prompt_localized() {
        let en = analysis_prompt(Locale::En, "jd", "cv", &sample_criteria());
        let pt = analysis_prompt(Locale::Pt, "jd", "cv", &sample_criteria());

        assert!(en.contains("expert technical recruiter"));
        assert!(pt.contains("recrutador técnico especialista"));
    }

    #[test]
    fn test_suggestion_prompt_fills_job_description() {
        let prompt = suggestion_prompt(Locale::Pt, "Vaga de engenharia de dados");
        assert!(prompt.contains("Vaga de engenharia de dados"));
        assert!(!prompt.contains("{job_description}"));
    }

    #[test]
    fn test_suggestion_prompt_states_weight_range() {
        let prompt = suggestion_prompt(Locale::En, "jd");
        assert!(prompt.contains("1 (nice to have) to 5 (critical)"));
    }
}
